//! Home/away side tag.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use super::error::ParseError;

/// Which team a value belongs to.
///
/// Field position is always measured from HOME's goal line, so the side in
/// possession decides the direction of travel.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    Home,
    Away,
}

impl Side {
    /// Both sides, home first.
    pub const BOTH: [Side; 2] = [Side::Home, Side::Away];

    /// The other side.
    #[must_use]
    pub const fn opponent(self) -> Self {
        match self {
            Side::Home => Side::Away,
            Side::Away => Side::Home,
        }
    }

    /// Upper-case tag used in play descriptions.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Side::Home => "HOME",
            Side::Away => "AWAY",
        }
    }
}

impl std::fmt::Display for Side {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Side {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "HOME" => Ok(Side::Home),
            "AWAY" => Ok(Side::Away),
            _ => Err(ParseError::UnknownSide(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opponent() {
        assert_eq!(Side::Home.opponent(), Side::Away);
        assert_eq!(Side::Away.opponent(), Side::Home);
        assert_eq!(Side::Home.opponent().opponent(), Side::Home);
    }

    #[test]
    fn test_parse() {
        assert_eq!("home".parse::<Side>(), Ok(Side::Home));
        assert_eq!(" AWAY ".parse::<Side>(), Ok(Side::Away));
        assert_eq!(
            "visitor".parse::<Side>(),
            Err(ParseError::UnknownSide("visitor".to_string()))
        );
    }

    #[test]
    fn test_display() {
        assert_eq!(Side::Home.to_string(), "HOME");
        assert_eq!(format!("{}", Side::Away), "AWAY");
    }
}
