//! First-class invariants for a memory session.
//!
//! Invariants are logical properties that must hold after every transition.
//! They are testable independently and serve as documentation of the
//! engine's guarantees.

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
/// Implemented for tuples of [`Invariant`]s so sets compose by type alias.
pub trait InvariantSet<S> {
    /// Checks all invariants in the set, collecting every violation.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

macro_rules! impl_invariant_set {
    ($($invariant:ident),+) => {
        impl<S, $($invariant),+> InvariantSet<S> for ($($invariant,)+)
        where
            $($invariant: Invariant<S>),+
        {
            fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
                let mut violations = Vec::new();
                $(
                    if !$invariant::holds(state) {
                        violations.push(InvariantViolation::new($invariant::description()));
                    }
                )+
                if violations.is_empty() {
                    Ok(())
                } else {
                    Err(violations)
                }
            }
        }
    };
}

impl_invariant_set!(I1, I2);
impl_invariant_set!(I1, I2, I3);
impl_invariant_set!(I1, I2, I3, I4);

pub mod matched_locked;
pub mod paired_faces;
pub mod try_budget;
pub mod turn_consistent;

pub use matched_locked::MatchedLockedInvariant;
pub use paired_faces::PairedFacesInvariant;
pub use try_budget::TryBudgetInvariant;
pub use turn_consistent::TurnConsistentInvariant;

/// Every invariant of a memory session as a composable set.
pub type SessionInvariants = (
    PairedFacesInvariant,
    TryBudgetInvariant,
    MatchedLockedInvariant,
    TurnConsistentInvariant,
);
