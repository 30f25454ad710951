use std::fmt;

use crate::core::alphabet::BITCOIN;

const MAX_DISPLAY_INPUT: usize = 60;

/// Errors that can occur during decoding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DecodeError {
    /// The input contains a character outside the Base58 alphabet
    InvalidCharacter {
        char: char,
        /// Byte offset of the character within the input
        position: usize,
        /// The input, truncated for display
        input: String,
        /// Whether `input` was cut short
        truncated: bool,
    },
}

impl DecodeError {
    /// Create an InvalidCharacter error with context
    pub fn invalid_character(c: char, position: usize, input: &str) -> Self {
        // Truncate long inputs
        let truncated = input.len() > MAX_DISPLAY_INPUT;
        let display_input = if truncated {
            let mut end = MAX_DISPLAY_INPUT;
            while !input.is_char_boundary(end) {
                end -= 1;
            }
            input[..end].to_string()
        } else {
            input.to_string()
        };

        DecodeError::InvalidCharacter {
            char: c,
            position,
            input: display_input,
            truncated,
        }
    }

    /// The offending character.
    pub fn char(&self) -> char {
        match self {
            DecodeError::InvalidCharacter { char, .. } => *char,
        }
    }

    /// Byte offset of the offending character.
    pub fn position(&self) -> usize {
        match self {
            DecodeError::InvalidCharacter { position, .. } => *position,
        }
    }
}

impl fmt::Display for DecodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.render(f, should_use_color())
    }
}

impl DecodeError {
    fn render(&self, f: &mut fmt::Formatter<'_>, use_color: bool) -> fmt::Result {
        match self {
            DecodeError::InvalidCharacter {
                char: c,
                position,
                input,
                truncated,
            } => {
                if use_color {
                    writeln!(
                        f,
                        "\x1b[1;31merror:\x1b[0m invalid character {:?} at position {}",
                        c, position
                    )?;
                } else {
                    writeln!(f, "error: invalid character {:?} at position {}", c, position)?;
                }
                writeln!(f)?;

                // Caret goes under the character, not the byte offset.
                // Past the truncation point there is nothing to point at.
                let ellipsis = if *truncated { "..." } else { "" };
                writeln!(f, "  {}{}", input, ellipsis)?;
                if *position < input.len() && input.is_char_boundary(*position) {
                    let char_position = input[..*position].chars().count();
                    write!(f, "  {}", " ".repeat(char_position))?;
                    if use_color {
                        writeln!(f, "\x1b[1;31m^\x1b[0m")?;
                    } else {
                        writeln!(f, "^")?;
                    }
                }
                writeln!(f)?;

                if use_color {
                    write!(f, "\x1b[1;36mhint:\x1b[0m valid characters: {}", BITCOIN.as_str())
                } else {
                    write!(f, "hint: valid characters: {}", BITCOIN.as_str())
                }
            }
        }
    }
}

impl std::error::Error for DecodeError {}

/// Check if colored output should be used
fn should_use_color() -> bool {
    // Respect NO_COLOR environment variable
    if std::env::var_os("NO_COLOR").is_some() {
        return false;
    }

    use std::io::IsTerminal;
    std::io::stderr().is_terminal()
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Plain<'a>(&'a DecodeError);

    impl fmt::Display for Plain<'_> {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            self.0.render(f, false)
        }
    }

    #[test]
    fn test_accessors() {
        let err = DecodeError::invalid_character('O', 3, "123O");
        assert_eq!(err.char(), 'O');
        assert_eq!(err.position(), 3);
    }

    #[test]
    fn test_error_display() {
        let err = DecodeError::invalid_character('O', 3, "123O");
        let display = Plain(&err).to_string();

        assert!(display.contains("invalid character 'O' at position 3"));
        assert!(display.contains("  123O\n"));
        assert!(display.contains("     ^"));
        assert!(display.contains("hint: valid characters: 123456789ABC"));
    }

    #[test]
    fn test_long_input_truncated() {
        let input = "2".repeat(100) + "0";
        let err = DecodeError::invalid_character('0', 100, &input);
        match &err {
            DecodeError::InvalidCharacter {
                input, truncated, ..
            } => {
                assert_eq!(input.len(), MAX_DISPLAY_INPUT);
                assert!(*truncated);
            }
        }
        let display = Plain(&err).to_string();
        assert!(display.contains("2222..."));
        // Offending character was cut off, so no caret line.
        assert!(!display.contains('^'));
    }

    #[test]
    fn test_truncation_respects_char_boundaries() {
        let input = "é".repeat(40);
        let err = DecodeError::invalid_character('é', 0, &input);
        match err {
            DecodeError::InvalidCharacter { input, .. } => {
                assert_eq!(input.chars().count(), 30);
            }
        }
    }
}
