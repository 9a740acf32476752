use engagement_api::domain::{
    engagement::reaction::ReactionState,
    engagement::toggle::{ToggleAction, decide},
    shared::pagination::PaginationRequest,
    trending::window::TrendingWindow,
};

#[test]
fn toggle_table_covers_all_six_transitions() {
    let cases = [
        (ReactionState::None, true, ReactionState::Liked),
        (ReactionState::None, false, ReactionState::Disliked),
        (ReactionState::Liked, true, ReactionState::None),
        (ReactionState::Liked, false, ReactionState::Disliked),
        (ReactionState::Disliked, false, ReactionState::None),
        (ReactionState::Disliked, true, ReactionState::Liked),
    ];
    for (current, requested, expected) in cases {
        assert_eq!(decide(current, requested).next, expected);
    }
}

#[test]
fn toggling_twice_always_lands_on_none() {
    for polarity in [true, false] {
        let first = decide(ReactionState::None, polarity);
        let second = decide(first.next, polarity);
        assert_eq!(second.next, ReactionState::None);
        assert_eq!(second.action, ToggleAction::Remove);
    }
}

#[test]
fn reaction_state_round_trips_through_wire_form() {
    for state in [ReactionState::Liked, ReactionState::Disliked, ReactionState::None] {
        assert_eq!(ReactionState::from_is_like(state.as_is_like()), state);
    }
}

#[test]
fn window_labels_parse_with_day_fallback() {
    assert_eq!(TrendingWindow::parse("1h"), TrendingWindow::OneHour);
    assert_eq!(TrendingWindow::parse("7d"), TrendingWindow::Week);
    assert_eq!(TrendingWindow::parse("30d"), TrendingWindow::Month);
    assert_eq!(TrendingWindow::parse("fortnight"), TrendingWindow::Day);
}

#[test]
fn pagination_defaults_are_safe_and_stable() {
    let p = PaginationRequest::default();
    assert_eq!(p.limit, 20);
    assert_eq!(p.offset, 0);
}
