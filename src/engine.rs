//! Sequence engine
//!
//! Walks the range `first..=last` with a caller supplied step, labels each
//! visited integer with the first matching rule, formats it with its
//! position flags and streams it to a sink.
//!
//! # Run states
//!
//! ```text
//! Validating --first > last--> Done(Range)
//!     |
//!     v
//! Iterating --write fails--> Done(Write)
//!     |     --limit hit----> Done(IterationLimit)
//!     v
//! Done(Ok(sequence))
//! ```
//!
//! A failed run is not resumable. Bytes written before a failure stay in the
//! sink; the partially built sequence is dropped.
//!
//! # Termination
//!
//! The step must be strictly increasing. [`run`] trusts the caller and loops
//! for as long as the cursor stays within bounds. A step that has no next
//! value in `i64` ends the walk, and the current value is the last item.
//! [`Engine::with_iteration_limit`] turns a runaway step into an
//! [`SequenceError::IterationLimit`] instead.

use std::io::Write;

use tracing::{debug, trace};

use crate::error::{Result, SequenceError};
use crate::format::Formatter;
use crate::rules::RuleSet;
use crate::step::Step;

/// Run the sequence with no iteration limit.
///
/// Returns the labels in visitation order. Each visited integer produces
/// exactly one `write_all` on `sink`, in order, with no buffering in between.
///
/// # Errors
///
/// - [`SequenceError::Range`] if `first > last`. Nothing is written.
/// - [`SequenceError::Write`] if the sink fails. The run stops at that item.
///
/// # Example
///
/// ```
/// use fizzbuzz::engine::run;
/// use fizzbuzz::format::ListFormatter;
/// use fizzbuzz::rules::RuleSet;
/// use fizzbuzz::step::UnitStep;
///
/// let mut out = Vec::new();
/// let labels = run(1, 5, &mut out, &RuleSet::classic(), &UnitStep, &ListFormatter).unwrap();
/// assert_eq!(labels, ["1", "2", "Fizz", "4", "Buzz"]);
/// assert_eq!(String::from_utf8(out).unwrap(), "1, 2, Fizz, 4, Buzz.");
/// ```
pub fn run<W, S, F>(
    first: i64,
    last: i64,
    sink: &mut W,
    rules: &RuleSet,
    step: &S,
    formatter: &F,
) -> Result<Vec<String>>
where
    W: Write + ?Sized,
    S: Step + ?Sized,
    F: Formatter + ?Sized,
{
    Engine::new().run(first, last, sink, rules, step, formatter)
}

/// Sequence engine with optional run guards.
///
/// `Engine::default()` behaves exactly like [`run`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Engine {
    iteration_limit: Option<u64>,
}

impl Engine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Abort runs that would visit more than `limit` values.
    pub fn with_iteration_limit(mut self, limit: u64) -> Self {
        self.iteration_limit = Some(limit);
        self
    }

    pub fn iteration_limit(&self) -> Option<u64> {
        self.iteration_limit
    }

    /// Run the sequence. See [`run`] for the contract.
    ///
    /// # Errors
    ///
    /// In addition to the errors of [`run`], returns
    /// [`SequenceError::IterationLimit`] before visiting a value past the limit.
    pub fn run<W, S, F>(
        &self,
        first: i64,
        last: i64,
        sink: &mut W,
        rules: &RuleSet,
        step: &S,
        formatter: &F,
    ) -> Result<Vec<String>>
    where
        W: Write + ?Sized,
        S: Step + ?Sized,
        F: Formatter + ?Sized,
    {
        if first > last {
            debug!(first, last, "rejecting run with inverted bounds");
            return Err(SequenceError::range(first, last));
        }

        debug!(
            first,
            last,
            rules = rules.len(),
            limit = ?self.iteration_limit,
            "starting sequence run"
        );

        let mut output = Vec::new();
        let mut visited: u64 = 0;
        let mut current = first;

        loop {
            if let Some(limit) = self.iteration_limit {
                if visited >= limit {
                    debug!(limit, current, "iteration limit reached, aborting run");
                    return Err(SequenceError::IterationLimit { limit });
                }
            }
            visited += 1;

            let label = rules
                .label_for(current)
                .unwrap_or_else(|| current.to_string());

            // One step evaluation serves both the last-item check and the advance
            let next = step.advance(current);
            let is_first = current == first;
            let is_last = current == last || next.is_none_or(|n| n > last);

            let formatted = formatter.format(&label, is_first, is_last);
            trace!(current, label = %label, is_first, is_last, "emitting item");

            if let Err(err) = sink.write_all(formatted.as_bytes()) {
                debug!(current, error = %err, "sink rejected write, aborting run");
                return Err(SequenceError::Write(err));
            }

            output.push(label);
            match next {
                Some(n) if n <= last => current = n,
                _ => break,
            }
        }

        debug!(items = output.len(), "sequence run complete");
        Ok(output)
    }
}
