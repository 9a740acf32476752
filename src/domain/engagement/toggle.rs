//! The toggle state machine.
//!
//! Pure decision logic: given the current reaction state and the requested
//! polarity, produce the next state and the store action that realizes it.
//! Requesting the same polarity again removes the reaction (undo semantics);
//! requesting the opposite polarity flips it in place, never passing through
//! "none" observably.

use super::reaction::ReactionState;

/// Store operation required to move to the decided state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToggleAction {
    Create(bool),
    SetPolarity(bool),
    Remove,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ToggleDecision {
    pub next: ReactionState,
    pub action: ToggleAction,
}

pub fn decide(current: ReactionState, requested_like: bool) -> ToggleDecision {
    match (current, requested_like) {
        (ReactionState::None, like) => ToggleDecision {
            next: ReactionState::from_is_like(Some(like)),
            action: ToggleAction::Create(like),
        },
        (ReactionState::Liked, true) | (ReactionState::Disliked, false) => ToggleDecision {
            next: ReactionState::None,
            action: ToggleAction::Remove,
        },
        (ReactionState::Liked, false) => ToggleDecision {
            next: ReactionState::Disliked,
            action: ToggleAction::SetPolarity(false),
        },
        (ReactionState::Disliked, true) => ToggleDecision {
            next: ReactionState::Liked,
            action: ToggleAction::SetPolarity(true),
        },
    }
}
