//! Numeric severity levels
//!
//! A `Level` is a raw numeric severity. Aliases map names onto levels; a
//! single level may back any number of aliases. `Level::HIDDEN` is the
//! sentinel meaning "never admitted".

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A numeric severity level.
///
/// The standard scale matches the conventional 10/20/30/40/50 ladder, with
/// `HIDDEN = 1` below everything else. Values in between are legal; they
/// display as `"<NAME>+<offset>"` relative to the nearest standard level
/// below them.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
pub struct Level(u8);

impl Level {
    /// Sentinel for messages that are never displayed but still tallied
    pub const HIDDEN: Level = Level(1);
    pub const DEBUG: Level = Level(10);
    pub const INFO: Level = Level(20);
    pub const WARNING: Level = Level(30);
    pub const ERROR: Level = Level(40);
    pub const FATAL: Level = Level(50);

    /// Standard levels, descending, paired with their display names
    const STANDARD: [(Level, &'static str); 6] = [
        (Level::FATAL, "FATAL"),
        (Level::ERROR, "ERROR"),
        (Level::WARNING, "WARNING"),
        (Level::INFO, "INFO"),
        (Level::DEBUG, "DEBUG"),
        (Level::HIDDEN, "HIDDEN"),
    ];

    pub const fn new(value: u8) -> Self {
        Level(value)
    }

    pub const fn value(&self) -> u8 {
        self.0
    }

    /// The standard name for this level, if it is one of the six
    pub fn name(&self) -> Option<&'static str> {
        Level::STANDARD
            .iter()
            .find(|(level, _)| level == self)
            .map(|(_, name)| *name)
    }

    #[cfg(feature = "console")]
    pub fn color_code(&self) -> colored::Color {
        use colored::Color::*;
        if *self >= Level::FATAL {
            BrightRed
        } else if *self >= Level::ERROR {
            Red
        } else if *self >= Level::WARNING {
            Yellow
        } else if *self >= Level::INFO {
            Green
        } else if *self >= Level::DEBUG {
            Blue
        } else {
            BrightBlack
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(name) = self.name() {
            return write!(f, "{}", name);
        }
        // "<NAME>+<i>" where i is the smallest positive offset above a
        // standard level
        for (level, name) in Level::STANDARD {
            if self.0 > level.0 {
                return write!(f, "{}+{}", name, self.0 - level.0);
            }
        }
        write!(f, "{}", self.0)
    }
}

impl FromStr for Level {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "fatal" | "critical" => Ok(Level::FATAL),
            "error" => Ok(Level::ERROR),
            "warn" | "warning" => Ok(Level::WARNING),
            "info" => Ok(Level::INFO),
            "debug" => Ok(Level::DEBUG),
            "hidden" => Ok(Level::HIDDEN),
            _ => Err(format!("Invalid level name: '{}'", s)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_names() {
        assert_eq!(Level::FATAL.name(), Some("FATAL"));
        assert_eq!(Level::INFO.name(), Some("INFO"));
        assert_eq!(Level::HIDDEN.name(), Some("HIDDEN"));
        assert_eq!(Level::new(25).name(), None);
    }

    #[test]
    fn test_display_offsets() {
        assert_eq!(Level::WARNING.to_string(), "WARNING");
        assert_eq!(Level::new(25).to_string(), "INFO+5");
        assert_eq!(Level::new(45).to_string(), "ERROR+5");
        assert_eq!(Level::new(2).to_string(), "HIDDEN+1");
        assert_eq!(Level::new(0).to_string(), "0");
    }

    #[test]
    fn test_ordering() {
        assert!(Level::HIDDEN < Level::DEBUG);
        assert!(Level::DEBUG < Level::INFO);
        assert!(Level::INFO < Level::WARNING);
        assert!(Level::WARNING < Level::ERROR);
        assert!(Level::ERROR < Level::FATAL);
        assert!(Level::new(25) > Level::INFO);
    }

    #[test]
    fn test_from_str() {
        assert_eq!("info".parse::<Level>(), Ok(Level::INFO));
        assert_eq!("WARNING".parse::<Level>(), Ok(Level::WARNING));
        assert_eq!("warn".parse::<Level>(), Ok(Level::WARNING));
        assert_eq!("critical".parse::<Level>(), Ok(Level::FATAL));
        assert!("nonsense".parse::<Level>().is_err());
    }

    #[test]
    fn test_serialization() {
        let json = serde_json::to_string(&Level::INFO).expect("serialize");
        assert_eq!(json, "20");
        let level: Level = serde_json::from_str("40").expect("deserialize");
        assert_eq!(level, Level::ERROR);
    }
}
