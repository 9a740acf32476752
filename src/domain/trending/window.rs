use chrono::{DateTime, Duration, Utc};

/// Fixed lookback windows recognized by the trending endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrendingWindow {
    OneHour,
    Day,
    Week,
    Month,
}

impl TrendingWindow {
    /// Parse a window label. Anything unrecognized falls back to 24h rather
    /// than erroring, so stale clients keep working.
    pub fn parse(label: &str) -> Self {
        match label {
            "1h" => Self::OneHour,
            "24h" => Self::Day,
            "7d" => Self::Week,
            "30d" => Self::Month,
            _ => Self::Day,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::OneHour => "1h",
            Self::Day => "24h",
            Self::Week => "7d",
            Self::Month => "30d",
        }
    }

    pub fn duration(self) -> Duration {
        match self {
            Self::OneHour => Duration::hours(1),
            Self::Day => Duration::hours(24),
            Self::Week => Duration::days(7),
            Self::Month => Duration::days(30),
        }
    }

    /// Lower bound of the window relative to `now`.
    pub fn since(self, now: DateTime<Utc>) -> DateTime<Utc> {
        now - self.duration()
    }
}
