//! Binary signal levels.

use std::fmt;

/// The level carried by a single pulse.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Level {
    /// A low pulse. The trigger always injects LOW.
    Low,
    /// A high pulse.
    High,
}

impl Level {
    /// Whether this is a high pulse.
    pub fn is_high(self) -> bool {
        matches!(self, Level::High)
    }

    /// Whether this is a low pulse.
    pub fn is_low(self) -> bool {
        matches!(self, Level::Low)
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Level::Low => write!(f, "low"),
            Level::High => write!(f, "high"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        assert_eq!(Level::Low.to_string(), "low");
        assert_eq!(Level::High.to_string(), "high");
    }
}
