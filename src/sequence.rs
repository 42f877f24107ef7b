use std::io::Write;

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SequenceError {
    #[error("starting value must be a positive integer (got {0})")]
    NonPositive(u128),
    #[error("value overflow at step {step}: 3 * {value} + 1 exceeds u128")]
    Overflow { value: u128, step: usize },
}

/// Generate the Collatz sequence for `n`, from `n` down to 1 inclusive.
///
/// Even values are halved, odd values are mapped to `3n + 1`. Arithmetic
/// is checked: a step that would exceed `u128` returns
/// [`SequenceError::Overflow`] instead of wrapping.
pub fn collatz_sequence(n: u128) -> Result<Vec<u128>, SequenceError> {
    if n == 0 {
        return Err(SequenceError::NonPositive(n));
    }

    let mut sequence = vec![n];
    let mut current = n;
    while current != 1 {
        current = if current % 2 == 0 {
            current / 2
        } else {
            current
                .checked_mul(3)
                .and_then(|v| v.checked_add(1))
                .ok_or(SequenceError::Overflow {
                    value: current,
                    step: sequence.len(),
                })?
        };
        sequence.push(current);
    }
    Ok(sequence)
}

/// Summary of a computed trajectory, used for the stdout report and the
/// plot caption.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SequenceStats {
    pub start: u128,
    pub max_value: u128,
    pub steps: usize,
    pub final_value: u128,
}

impl SequenceStats {
    /// Panics on an empty slice; `collatz_sequence` never returns one.
    pub fn from_sequence(sequence: &[u128]) -> Self {
        assert!(!sequence.is_empty(), "sequence must be non-empty");
        Self {
            start: sequence[0],
            max_value: *sequence.iter().max().unwrap(),
            steps: sequence.len() - 1,
            final_value: *sequence.last().unwrap(),
        }
    }
}

/// Write the raw sequence and its stats to `out`.
///
/// Kept separate from rendering so the numeric report still lands even
/// when the plot backend fails.
pub fn print_summary(sequence: &[u128], out: &mut impl Write) -> std::io::Result<()> {
    let stats = SequenceStats::from_sequence(sequence);
    writeln!(out, "Collatz sequence for {}:", stats.start)?;
    writeln!(out, "{:?}", sequence)?;
    writeln!(out, "Max value: {}", stats.max_value)?;
    writeln!(out, "Total steps: {}", stats.steps)?;
    writeln!(out, "Converged to: {}", stats.final_value)?;
    Ok(())
}
