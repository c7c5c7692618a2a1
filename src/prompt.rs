//! Startup depth prompt
//!
//! Reads the recursion depth from one line of input before any window or GPU
//! state exists.

use std::io::{self, BufRead, Write};
use std::num::IntErrorKind;

use sierpinski_core::{MAX_DEPTH, WALL_DEPTH_LIMIT};

/// Text printed before reading the depth
pub const PROMPT: &str = "Enter the number of recursive depth of Sierpiński's Pyramid: ";

/// Message printed when the depth cannot be used
pub const INVALID_INPUT: &str = "Invalid input. Please enter a valid numeric value.";

/// Depth and starting wall state chosen at startup
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DepthChoice {
    /// Recursion depth used for rendering, at most [`MAX_DEPTH`]
    pub depth: u32,
    /// Whether walls start enabled
    pub walls_enabled: bool,
}

impl DepthChoice {
    /// Interpret an entered depth
    ///
    /// Depths above 4 start with walls off and render at no more than
    /// [`MAX_DEPTH`] levels.
    pub fn from_levels(levels: u64) -> Self {
        if levels >= WALL_DEPTH_LIMIT as u64 {
            Self {
                depth: levels.min(MAX_DEPTH as u64) as u32,
                walls_enabled: false,
            }
        } else {
            Self {
                depth: levels as u32,
                walls_enabled: true,
            }
        }
    }

    /// Parse one line of user input
    ///
    /// Any whole number is accepted, however large; anything past `u64`
    /// renders at the depth cap like other deep requests.
    pub fn parse(line: &str) -> Result<Self, PromptError> {
        let trimmed = line.trim();
        match trimmed.parse::<i64>() {
            Ok(levels) if levels < 0 => Err(PromptError::Negative(trimmed.to_string())),
            Ok(levels) => Ok(Self::from_levels(levels as u64)),
            Err(e) => match e.kind() {
                IntErrorKind::PosOverflow => Ok(Self::from_levels(u64::MAX)),
                IntErrorKind::NegOverflow => Err(PromptError::Negative(trimmed.to_string())),
                _ => Err(PromptError::InvalidNumber(trimmed.to_string())),
            },
        }
    }
}

/// Print the prompt to `output` and read the answer from `input`
pub fn ask_depth<R: BufRead, W: Write>(mut input: R, mut output: W) -> Result<DepthChoice, PromptError> {
    write!(output, "{}", PROMPT)?;
    output.flush()?;

    let mut line = String::new();
    match input.read_line(&mut line) {
        Ok(_) => {}
        Err(e) if e.kind() == io::ErrorKind::InvalidData => return Err(PromptError::NotText),
        Err(e) => return Err(PromptError::Io(e)),
    }
    DepthChoice::parse(&line)
}

/// Ask for the depth, telling the user when the answer is unusable
///
/// Returns `Ok(None)` after printing [`INVALID_INPUT`] to `output`; only I/O
/// failures are errors.
pub fn run_prompt<R: BufRead, W: Write>(input: R, mut output: W) -> Result<Option<DepthChoice>, PromptError> {
    match ask_depth(input, &mut output) {
        Ok(choice) => Ok(Some(choice)),
        Err(e) if e.is_invalid_input() => {
            log::debug!("{}", e);
            writeln!(output, "{}", INVALID_INPUT)?;
            Ok(None)
        }
        Err(e) => Err(e),
    }
}

/// Startup prompt errors
#[derive(Debug)]
pub enum PromptError {
    /// Reading stdin or writing the prompt failed
    Io(io::Error),
    /// The line is not an integer
    InvalidNumber(String),
    /// The integer is below zero
    Negative(String),
    /// The line is not valid UTF-8
    NotText,
}

impl PromptError {
    /// True for errors caused by what the user typed
    pub fn is_invalid_input(&self) -> bool {
        !matches!(self, PromptError::Io(_))
    }
}

impl From<io::Error> for PromptError {
    fn from(e: io::Error) -> Self {
        PromptError::Io(e)
    }
}

impl std::fmt::Display for PromptError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PromptError::Io(e) => write!(f, "Failed to read depth: {}", e),
            PromptError::InvalidNumber(s) => write!(f, "'{}' is not a whole number", s),
            PromptError::Negative(n) => write!(f, "Depth {} is negative", n),
            PromptError::NotText => write!(f, "Input is not valid UTF-8 text"),
        }
    }
}

impl std::error::Error for PromptError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            PromptError::Io(e) => Some(e),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shallow_depth_keeps_walls() {
        let choice = DepthChoice::parse("3").unwrap();
        assert_eq!(choice, DepthChoice { depth: 3, walls_enabled: true });
    }

    #[test]
    fn test_depth_four_keeps_walls() {
        let choice = DepthChoice::parse(" 4 \n").unwrap();
        assert_eq!(choice, DepthChoice { depth: 4, walls_enabled: true });
    }

    #[test]
    fn test_depth_five_disables_walls() {
        let choice = DepthChoice::parse("5").unwrap();
        assert_eq!(choice, DepthChoice { depth: 5, walls_enabled: false });
    }

    #[test]
    fn test_depth_six_and_above_capped() {
        assert_eq!(DepthChoice::parse("6").unwrap().depth, 6);
        let choice = DepthChoice::parse("7").unwrap();
        assert_eq!(choice, DepthChoice { depth: 6, walls_enabled: false });
        assert_eq!(DepthChoice::parse("1000000").unwrap().depth, 6);
    }

    #[test]
    fn test_depth_beyond_integer_range_capped() {
        let choice = DepthChoice::parse("99999999999999999999").unwrap();
        assert_eq!(choice, DepthChoice { depth: 6, walls_enabled: false });
    }

    #[test]
    fn test_zero_and_plus_sign() {
        assert_eq!(DepthChoice::parse("0").unwrap().depth, 0);
        assert_eq!(DepthChoice::parse("+2").unwrap().depth, 2);
    }

    #[test]
    fn test_non_numeric_rejected() {
        for line in ["abc", "", "2.5", "3x"] {
            let err = DepthChoice::parse(line).unwrap_err();
            assert!(matches!(err, PromptError::InvalidNumber(_)), "{:?} accepted", line);
            assert!(err.is_invalid_input());
        }
    }

    #[test]
    fn test_negative_rejected() {
        let err = DepthChoice::parse("-1").unwrap_err();
        assert!(matches!(err, PromptError::Negative(_)));
        assert!(err.is_invalid_input());

        let err = DepthChoice::parse("-99999999999999999999").unwrap_err();
        assert!(matches!(err, PromptError::Negative(_)));
    }

    #[test]
    fn test_ask_depth_writes_prompt() {
        let mut output = Vec::new();
        let choice = ask_depth("2\n".as_bytes(), &mut output).unwrap();
        assert_eq!(choice.depth, 2);
        assert_eq!(String::from_utf8(output).unwrap(), PROMPT);
    }

    #[test]
    fn test_ask_depth_non_utf8_is_invalid() {
        let input: &[u8] = &[0xff, 0xfe, b'\n'];
        let err = ask_depth(input, Vec::new()).unwrap_err();
        assert!(matches!(err, PromptError::NotText));
        assert!(err.is_invalid_input());
    }

    #[test]
    fn test_run_prompt_reports_invalid_input() {
        let mut output = Vec::new();
        let choice = run_prompt("abc\n".as_bytes(), &mut output).unwrap();
        assert_eq!(choice, None);
        assert_eq!(
            String::from_utf8(output).unwrap(),
            format!("{}{}\n", PROMPT, INVALID_INPUT)
        );
    }

    #[test]
    fn test_run_prompt_returns_choice() {
        let mut output = Vec::new();
        let choice = run_prompt("5\n".as_bytes(), &mut output).unwrap();
        assert_eq!(choice, Some(DepthChoice { depth: 5, walls_enabled: false }));
        assert_eq!(String::from_utf8(output).unwrap(), PROMPT);
    }

    #[test]
    fn test_ask_depth_empty_input_is_invalid() {
        let err = ask_depth("".as_bytes(), Vec::new()).unwrap_err();
        assert!(err.is_invalid_input());
    }
}
