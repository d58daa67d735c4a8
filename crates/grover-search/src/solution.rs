//! Marked-state bit patterns.

use std::fmt;
use std::str::FromStr;

use grover_ir::QubitId;

use crate::config::MAX_QUBITS;
use crate::error::{GroverError, GroverResult};

/// The basis state a search circuit amplifies.
///
/// Bit `i` is the value qubit `i` must hold. Written as a string, character
/// `i` is bit `i`, so `"0010"` marks the state with only qubit 2 set.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Solution {
    bits: Vec<bool>,
}

impl Solution {
    /// Parse a string of `'0'` and `'1'` characters, one per qubit, at most
    /// [`MAX_QUBITS`] long.
    pub fn parse(input: &str) -> GroverResult<Self> {
        if input.is_empty() {
            return Err(invalid(input, "solution is empty".into()));
        }
        let len = input.chars().count();
        if len > MAX_QUBITS as usize {
            return Err(invalid(
                input,
                format!("{len} characters exceeds the {MAX_QUBITS}-qubit limit"),
            ));
        }

        let bits = input
            .chars()
            .enumerate()
            .map(|(i, c)| match c {
                '0' => Ok(false),
                '1' => Ok(true),
                other => Err(invalid(
                    input,
                    format!("character {other:?} at position {i} is not '0' or '1'"),
                )),
            })
            .collect::<GroverResult<Vec<_>>>()?;

        Ok(Self { bits })
    }

    /// Parse a bit string that must be exactly `width` characters long.
    pub fn parse_with_width(input: &str, width: usize) -> GroverResult<Self> {
        let len = input.chars().count();
        if len != width {
            return Err(invalid(
                input,
                format!("expected {width} characters, got {len}"),
            ));
        }
        Self::parse(input)
    }

    /// The solution whose basis index is `index` in a `width`-qubit register.
    ///
    /// Bits of `index` above `width` are ignored; positions past the width
    /// of `usize` are 0.
    pub fn from_index(index: usize, width: usize) -> Self {
        Self {
            bits: (0..width)
                .map(|i| {
                    u32::try_from(i)
                        .ok()
                        .and_then(|shift| index.checked_shr(shift))
                        .is_some_and(|v| v & 1 == 1)
                })
                .collect(),
        }
    }

    /// Register width this solution addresses.
    pub fn width(&self) -> usize {
        self.bits.len()
    }

    /// Bit values by qubit.
    pub fn bits(&self) -> &[bool] {
        &self.bits
    }

    /// Basis index of the marked state: bit `i` of the index is qubit `i`.
    pub fn index(&self) -> usize {
        self.bits
            .iter()
            .enumerate()
            .filter(|(_, b)| **b)
            .fold(0, |acc, (i, _)| acc | (1 << i))
    }

    /// Qubits whose marked value is `0`.
    pub fn zero_positions(&self) -> impl Iterator<Item = QubitId> + '_ {
        self.bits
            .iter()
            .enumerate()
            .filter(|(_, b)| !**b)
            .map(|(i, _)| QubitId::from(i))
    }

    /// Number of `0` bits.
    pub fn num_zeros(&self) -> usize {
        self.bits.iter().filter(|b| !**b).count()
    }
}

fn invalid(input: &str, reason: String) -> GroverError {
    GroverError::InvalidSolutionFormat {
        input: input.to_string(),
        reason,
    }
}

impl FromStr for Solution {
    type Err = GroverError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for Solution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for bit in &self.bits {
            f.write_str(if *bit { "1" } else { "0" })?;
        }
        Ok(())
    }
}
