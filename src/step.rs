//! Step functions that advance the iteration cursor.
//!
//! A step must be strictly increasing for a run to terminate. The engine does
//! not check this; see [`crate::engine::Engine::with_iteration_limit`] for an
//! opt-in guard. A step returns `None` when there is no next value in `i64`,
//! which ends the walk at the current value.

use crate::types::StepKind;

/// Advances the cursor from `current` to the next value to visit.
pub trait Step {
    fn advance(&self, current: i64) -> Option<i64>;
}

impl<F> Step for F
where
    F: Fn(i64) -> i64,
{
    fn advance(&self, current: i64) -> Option<i64> {
        Some(self(current))
    }
}

/// `n -> n + 1`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct UnitStep;

impl Step for UnitStep {
    fn advance(&self, current: i64) -> Option<i64> {
        current.checked_add(1)
    }
}

/// `n -> n + k`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedStep(pub i64);

impl Step for FixedStep {
    fn advance(&self, current: i64) -> Option<i64> {
        current.checked_add(self.0)
    }
}

/// Jumps to the smallest Fibonacci number strictly greater than the current value.
///
/// Starting from 1 this visits 1, 2, 3, 5, 8, 13, ...
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FibonacciStep;

impl Step for FibonacciStep {
    fn advance(&self, current: i64) -> Option<i64> {
        let (mut a, mut b) = (0i64, 1i64);
        while b <= current {
            (a, b) = (b, a.checked_add(b)?);
        }
        Some(b)
    }
}

/// Step selected at runtime from configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BuiltinStep {
    Unit,
    Fixed(i64),
    Fibonacci,
}

impl BuiltinStep {
    /// Build a step from its kind. `size` is only used by [`StepKind::Fixed`].
    pub fn from_kind(kind: StepKind, size: i64) -> Self {
        match kind {
            StepKind::Unit => Self::Unit,
            StepKind::Fixed => Self::Fixed(size),
            StepKind::Fibonacci => Self::Fibonacci,
        }
    }
}

impl Step for BuiltinStep {
    fn advance(&self, current: i64) -> Option<i64> {
        match self {
            Self::Unit => UnitStep.advance(current),
            Self::Fixed(size) => FixedStep(*size).advance(current),
            Self::Fibonacci => FibonacciStep.advance(current),
        }
    }
}
