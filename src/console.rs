//! Destination for progress and warning lines
//!
//! Machine-readable output (`--json`) owns stdout, so everything else moves to
//! stderr in that mode.

use std::fmt::Display;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Console {
    #[default]
    Stdout,
    Stderr,
}

impl Console {
    /// Stderr when stdout carries a JSON document
    #[must_use]
    pub const fn for_json(json: bool) -> Self {
        if json {
            Self::Stderr
        } else {
            Self::Stdout
        }
    }

    pub fn line(self, message: impl Display) {
        match self {
            Self::Stdout => println!("{}", message),
            Self::Stderr => eprintln!("{}", message),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn json_moves_messages_to_stderr() {
        assert_eq!(Console::for_json(true), Console::Stderr);
        assert_eq!(Console::for_json(false), Console::Stdout);
        assert_eq!(Console::default(), Console::Stdout);
    }
}
