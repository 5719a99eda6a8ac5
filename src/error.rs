//! Error types for column generation.

use std::io;
use thiserror::Error;

/// Errors raised while configuring or running a generator
#[derive(Debug, Error)]
pub enum PopulateError {
    /// `--table` did not name a known column kind
    #[error("unknown column kind: {0}. Use: {names}", names = crate::column::ColumnKind::names().join(", "))]
    UnknownColumnKind(String),

    /// A command-line value could not be accepted
    #[error("invalid value '{value}' for {name}: {reason}")]
    InvalidArgument {
        name: &'static str,
        value: String,
        reason: String,
    },

    /// `--locale` is not one of the supported locales
    #[error("unsupported locale: {0}. Use: {locales}", locales = crate::locale::Locale::codes().join(", "))]
    UnsupportedLocale(String),

    /// The fake-data source kept returning values already emitted
    #[error("could not produce a unique {kind} value after {attempts} attempts")]
    UniquenessExhausted {
        kind: crate::column::ColumnKind,
        attempts: usize,
    },

    #[error(transparent)]
    Io(#[from] io::Error),
}

pub type Result<T> = std::result::Result<T, PopulateError>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::column::ColumnKind;

    #[test]
    fn test_messages_are_self_contained() {
        let err = anyhow::Error::from(PopulateError::UniquenessExhausted {
            kind: ColumnKind::LastName,
            attempts: 1000,
        });
        assert_eq!(
            err.to_string(),
            "could not produce a unique last_name value after 1000 attempts"
        );

        let err = anyhow::Error::from(PopulateError::UnknownColumnKind("bogus".into()));
        assert!(err.to_string().starts_with("unknown column kind: bogus. Use: city, company"));
    }
}
