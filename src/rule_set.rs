use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Rules of Conway's Game of Life.
pub const B3S23: RuleSet = RuleSet::new(0b1000, 0b1100);

/// # Representation
/// Life rules are represented as
/// ```notrust
/// |------birth------|
/// 0000_0000_0000_0000_0000_0000_0000_0000
///                     |----survival-----|
/// ```
///
/// # Examples
/// ```notrust
/// b3s23:                0000_0000_0000_1000_0000_0000_0000_1100
///
/// b0s0:                 0000_0000_0000_0000_0000_0000_0000_0000
/// b012345678s012345678: 0000_0001_1111_1111_0000_0001_1111_1111
/// ```
///
/// See: https://conwaylife.com/wiki/Rulestring
#[repr(transparent)]
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct RuleSet {
    rule: u32,
}

impl Default for RuleSet {
    fn default() -> Self {
        B3S23
    }
}

impl RuleSet {
    /// Create a new `RuleSet` for the given births and survivals. For both `b` and
    /// `s`, numbers are set on a bit basis. For instance if bit `i` in `b` is on, it
    /// means `i` is included in the set of births. Any bit past the 8th is ignored.
    pub const fn new(b: u16, s: u16) -> Self {
        let b = b & 0x1FF;
        let s = s & 0x1FF;

        Self {
            rule: (b as u32) << 16 | s as u32,
        }
    }

    pub fn births(&self) -> u16 {
        ((self.rule & 0x1FF0000) >> 0x10) as u16
    }

    pub fn survivals(&self) -> u16 {
        (self.rule & 0x1FF) as u16
    }

    /// State of a cell in the next generation, given whether it's alive now and how many of its
    /// neighbors are.
    #[inline]
    pub fn next_state(&self, alive: bool, live_neighbors: u8) -> bool {
        let mask = 1u16 << live_neighbors;

        if alive {
            (self.survivals() & mask) != 0
        } else {
            (self.births() & mask) != 0
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum RuleError {
    #[error("Unexpected character '{got}' in rule")]
    InvalidChar { got: char },

    #[error("Neighbor count {got} is larger than 8")]
    OutOfRange { got: u32 },

    #[error("Rule has no birth/survival separator")]
    MissingSeparator,
}

/// Accepts `b3s23`, `B3/S23` and the nameless `3/23` form. Birth and survival lists may be empty.
impl FromStr for RuleSet {
    type Err = RuleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        enum State {
            Birth,
            Survival,
        }

        let s = s.trim();
        let nameless = s.starts_with(|c: char| c.is_ascii_digit() || c == '/');

        if nameless && !s.contains('/') {
            return Err(RuleError::MissingSeparator);
        }

        let mut state = State::Birth;
        let (mut b, mut sv) = (0u16, 0u16);

        for c in s.chars() {
            match c {
                'b' | 'B' if !nameless => {
                    state = State::Birth;
                }
                's' | 'S' if !nameless => {
                    state = State::Survival;
                }
                '/' => {
                    if nameless {
                        state = State::Survival;
                    }
                }
                n => {
                    let n = n.to_digit(10).ok_or(RuleError::InvalidChar { got: n })?;

                    if n > 8 {
                        return Err(RuleError::OutOfRange { got: n });
                    }

                    match state {
                        State::Birth => b |= 1 << n,
                        State::Survival => sv |= 1 << n,
                    }
                }
            }
        }

        Ok(RuleSet::new(b, sv))
    }
}

impl fmt::Display for RuleSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let digits = |mask: u16| -> String {
            (0..=8)
                .filter(|n| (mask & (1 << n)) != 0)
                .map(|n| char::from(b'0' + n as u8))
                .collect()
        };

        write!(f, "B{}/S{}", digits(self.births()), digits(self.survivals()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_life_spellings() {
        for s in ["b3s23", "B3/S23", "3/23", " B3S23 "] {
            assert_eq!(s.parse::<RuleSet>(), Ok(B3S23), "failed on {s:?}");
        }
    }

    #[test]
    fn parse_highlife() {
        let rule: RuleSet = "b36/s23".parse().unwrap();

        assert_eq!(rule.births(), 0b100_1000);
        assert_eq!(rule.survivals(), 0b1100);
        assert_eq!(rule.to_string(), "B36/S23");
    }

    #[test]
    fn parse_errors() {
        assert_eq!(
            "b3x23".parse::<RuleSet>(),
            Err(RuleError::InvalidChar { got: 'x' })
        );
        assert_eq!(
            "b9s23".parse::<RuleSet>(),
            Err(RuleError::OutOfRange { got: 9 })
        );
        assert_eq!("323".parse::<RuleSet>(), Err(RuleError::MissingSeparator));
    }

    #[test]
    fn life_transitions() {
        for n in 0..=8 {
            assert_eq!(B3S23.next_state(true, n), n == 2 || n == 3, "alive with {n}");
            assert_eq!(B3S23.next_state(false, n), n == 3, "dead with {n}");
        }
    }

    #[test]
    fn display_round_trips_default() {
        assert_eq!(B3S23.to_string(), "B3/S23");
    }
}
