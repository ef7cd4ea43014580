//! Reading cable radii from text.
//!
//! Lines starting with `#` are comments. Every other line holds zero or more
//! radii separated by whitespace, written with a dot as decimal separator.

use std::path::Path;
use thiserror::Error;

/// Errors that can occur while reading radii.
#[derive(Debug, Error)]
pub enum InputError {
    /// The file could not be read.
    #[error("failed to read input: {0}")]
    Io(#[from] std::io::Error),

    /// A token is not a number.
    #[error("line {line}: '{token}' is not a number")]
    NotANumber {
        /// 1-based line number.
        line: usize,
        /// The offending token.
        token: String,
    },

    /// No radii were found.
    #[error("input contains no radii")]
    Empty,
}

/// Parses radii from `text`, skipping `#` comment lines.
pub fn parse_radii(text: &str) -> Result<Vec<f64>, InputError> {
    let mut radii = Vec::new();
    for (index, line) in text.lines().enumerate() {
        if line.trim_start().starts_with('#') {
            continue;
        }
        for token in line.split_whitespace() {
            let value = token.parse::<f64>().map_err(|_| InputError::NotANumber {
                line: index + 1,
                token: token.to_string(),
            })?;
            radii.push(value);
        }
    }

    if radii.is_empty() {
        return Err(InputError::Empty);
    }
    Ok(radii)
}

/// Reads and parses radii from the file at `path`.
pub fn read_radii(path: &Path) -> Result<Vec<f64>, InputError> {
    let text = std::fs::read_to_string(path)?;
    parse_radii(&text)
}

/// Display scale; non-positive or non-finite values fall back to 1.
pub fn effective_scale(scale: f64) -> f64 {
    if scale.is_finite() && scale > 0.0 {
        scale
    } else {
        1.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_skips_comments() {
        let text = "# cable radii\n1.5 2\n  # indented comment\n3.25\n\n";
        assert_eq!(parse_radii(text).unwrap(), vec![1.5, 2.0, 3.25]);
    }

    #[test]
    fn test_parse_rejects_garbage() {
        let err = parse_radii("1.0 abc\n").unwrap_err();
        match err {
            InputError::NotANumber { line, token } => {
                assert_eq!(line, 1);
                assert_eq!(token, "abc");
            }
            other => panic!("unexpected error: {other}"),
        }
        // Comma decimal separators are not accepted.
        assert!(parse_radii("1,5").is_err());
    }

    #[test]
    fn test_parse_empty() {
        assert!(matches!(parse_radii("# nothing\n"), Err(InputError::Empty)));
    }

    #[test]
    fn test_effective_scale() {
        assert_eq!(effective_scale(10.0), 10.0);
        assert_eq!(effective_scale(0.0), 1.0);
        assert_eq!(effective_scale(-3.0), 1.0);
        assert_eq!(effective_scale(f64::NAN), 1.0);
    }

    #[test]
    fn test_read_missing_file() {
        let err = read_radii(Path::new("/nonexistent/u-bundle/input.txt")).unwrap_err();
        assert!(matches!(err, InputError::Io(_)));
    }
}
