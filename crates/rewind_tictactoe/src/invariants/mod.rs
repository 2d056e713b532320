//! First-class invariants for the game timeline.
//!
//! Invariants are logical properties that must hold throughout game
//! execution. They are testable independently and serve as documentation
//! of system guarantees.

/// A logical property that must hold for a given state.
pub trait Invariant<S> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Violation of an invariant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub description: String,
}

impl InvariantViolation {
    /// Creates a new invariant violation.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}

/// A set of invariants that can be checked together.
///
/// Implementations are provided for tuples, so a composed set stays a
/// plain type alias.
pub trait InvariantSet<S> {
    /// Checks all invariants in the set.
    ///
    /// Returns `Ok(())` if all invariants hold, or the list of
    /// violations if any fail.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

impl<S, I1, I2> InvariantSet<S> for (I1, I2)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = Vec::new();

        if !I1::holds(state) {
            violations.push(InvariantViolation::new(I1::description()));
        }

        if !I2::holds(state) {
            violations.push(InvariantViolation::new(I2::description()));
        }

        if violations.is_empty() { Ok(()) } else { Err(violations) }
    }
}

impl<S, I1, I2, I3> InvariantSet<S> for (I1, I2, I3)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
    I3: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = Vec::new();

        if !I1::holds(state) {
            violations.push(InvariantViolation::new(I1::description()));
        }

        if !I2::holds(state) {
            violations.push(InvariantViolation::new(I2::description()));
        }

        if !I3::holds(state) {
            violations.push(InvariantViolation::new(I3::description()));
        }

        if violations.is_empty() { Ok(()) } else { Err(violations) }
    }
}

pub mod derived_turn;
pub mod rooted_history;
pub mod single_step;

pub use derived_turn::DerivedTurnInvariant;
pub use rooted_history::RootedHistoryInvariant;
pub use single_step::SingleStepInvariant;

/// All timeline invariants as a composable set.
pub type GameInvariants = (
    RootedHistoryInvariant,
    SingleStepInvariant,
    DerivedTurnInvariant,
);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cell::Cell;
    use crate::game::Game;

    #[test]
    fn test_invariant_set_holds_for_new_game() {
        let game = Game::new();
        assert!(GameInvariants::check_all(&game).is_ok());
    }

    #[test]
    fn test_invariant_set_holds_after_moves() {
        let mut game = Game::new();
        for cell in [Cell::TopLeft, Cell::Center, Cell::TopRight] {
            game.apply_move(cell).expect("legal move");
        }

        assert!(GameInvariants::check_all(&game).is_ok());
    }

    #[test]
    fn test_invariant_set_detects_corruption() {
        let mut game = Game::new();
        game.apply_move(Cell::Center).expect("legal move");

        // Drop the root snapshot out from under the cursor.
        game.history.remove(0);
        game.current = 0;

        let violations = GameInvariants::check_all(&game).unwrap_err();
        assert!(!violations.is_empty());
    }

    #[test]
    fn test_two_invariants_as_set() {
        let game = Game::new();

        type TwoInvariants = (RootedHistoryInvariant, SingleStepInvariant);
        assert!(TwoInvariants::check_all(&game).is_ok());
    }
}
