//! Per-cycle rule precedence
//!
//! The control cycle evaluates an ordered rule list and acts on the first
//! rule that applies:
//!
//! | order | rule               | applies when       |
//! |-------|--------------------|--------------------|
//! | 1     | `Interlock`        | door open          |
//! | 2     | `MotionInProgress` | cabin moving       |
//! | 3     | `IdleIntake`       | cabin idle         |

use super::machine::State;
use crate::safety::InterlockState;

/// Rule governing a control cycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Rule {
    /// Door open: stop if moving, ignore all requests
    Interlock,
    /// Trip underway: drive, count crossings, ignore requests
    MotionInProgress,
    /// Idle with the door closed: accept a new call
    IdleIntake,
}

/// Evaluation order, highest priority first
pub const PRECEDENCE: [Rule; 3] = [Rule::Interlock, Rule::MotionInProgress, Rule::IdleIntake];

impl Rule {
    /// Check if this rule's condition holds
    pub fn applies(self, interlock: InterlockState, state: State) -> bool {
        match self {
            Rule::Interlock => interlock.is_engaged(),
            Rule::MotionInProgress => state.is_moving(),
            Rule::IdleIntake => !state.is_moving(),
        }
    }
}

/// Pick the governing rule for this cycle
pub fn select(interlock: InterlockState, state: State) -> Rule {
    PRECEDENCE
        .into_iter()
        .find(|rule| rule.applies(interlock, state))
        .unwrap_or(Rule::IdleIntake)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::floor::Floor;
    use crate::state::Trip;

    fn moving() -> State {
        let top = Floor::new(3, 3).unwrap();
        State::Moving(Trip::plan(Floor::GROUND, top).unwrap())
    }

    #[test]
    fn test_interlock_wins_over_everything() {
        assert_eq!(select(InterlockState::Engaged, State::Idle), Rule::Interlock);
        assert_eq!(select(InterlockState::Engaged, moving()), Rule::Interlock);
    }

    #[test]
    fn test_motion_before_intake() {
        assert_eq!(
            select(InterlockState::Released, moving()),
            Rule::MotionInProgress
        );
    }

    #[test]
    fn test_idle_intake() {
        assert_eq!(select(InterlockState::Released, State::Idle), Rule::IdleIntake);
    }

    #[test]
    fn test_precedence_order() {
        assert_eq!(PRECEDENCE[0], Rule::Interlock);
        assert_eq!(PRECEDENCE[1], Rule::MotionInProgress);
        assert_eq!(PRECEDENCE[2], Rule::IdleIntake);
    }
}
