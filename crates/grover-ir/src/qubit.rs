//! Qubit addressing.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Position of a qubit within a circuit's register.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct QubitId(pub u32);

impl QubitId {
    /// The qubit position as a `usize`, for indexing and bit masks.
    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for QubitId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "q{}", self.0)
    }
}

impl From<u32> for QubitId {
    fn from(id: u32) -> Self {
        QubitId(id)
    }
}

impl From<usize> for QubitId {
    fn from(id: usize) -> Self {
        QubitId(u32::try_from(id).expect("QubitId overflow: exceeds u32::MAX"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_qubit_display() {
        assert_eq!(format!("{}", QubitId(0)), "q0");
        assert_eq!(format!("{}", QubitId(3)), "q3");
    }

    #[test]
    fn test_qubit_conversions() {
        assert_eq!(QubitId::from(2_u32), QubitId(2));
        assert_eq!(QubitId::from(5_usize), QubitId(5));
        assert_eq!(QubitId(9).index(), 9);
    }
}
