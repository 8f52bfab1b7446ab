//! Crate-level error types.

use std::fmt;

/// Errors produced by the glycoviz crate.
///
/// Scene composition itself is infallible; these only surface at the edges
/// (option presets, scene export, shell-provided step indices).
#[derive(Debug)]
pub enum GlycovizError {
    /// Generic I/O failure.
    Io(std::io::Error),
    /// TOML options parsing/serialization failure.
    OptionsParse(String),
    /// Scene graph export (JSON/TOML) failure.
    Export(String),
    /// A step index outside the ten-step pathway.
    UnknownStep(u32),
}

impl fmt::Display for GlycovizError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::OptionsParse(msg) => {
                write!(f, "options parse error: {msg}")
            }
            Self::Export(msg) => write!(f, "scene export error: {msg}"),
            Self::UnknownStep(id) => {
                write!(f, "no glycolysis step {id} (expected 1..=10)")
            }
        }
    }
}

impl std::error::Error for GlycovizError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for GlycovizError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_step_message_names_range() {
        let msg = GlycovizError::UnknownStep(11).to_string();
        assert!(msg.contains("11"));
        assert!(msg.contains("1..=10"));
    }

    #[test]
    fn io_error_exposes_source() {
        use std::error::Error;
        let err = GlycovizError::from(std::io::Error::other("disk"));
        assert!(err.source().is_some());
        assert!(GlycovizError::Export("x".to_owned()).source().is_none());
    }
}
