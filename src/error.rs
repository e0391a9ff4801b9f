//! Crate-level error types.

use std::fmt;

/// Errors produced by the contact-matrix crate.
///
/// Every variant is recoverable: a rejected structure load leaves the
/// engine's previous state in place.
#[derive(Debug)]
pub enum ContactMapError {
    /// The structure has more atoms than the configured limit allows.
    TooManyAtoms {
        /// Number of atoms in the rejected structure.
        count: usize,
        /// Configured `contact.max_atoms` limit.
        limit: usize,
    },
    /// An N×N distance or pixel buffer could not be sized or reserved.
    AllocationFailed {
        /// Number of cells requested (saturated on overflow).
        cells: usize,
    },
    /// Generic I/O failure.
    Io(std::io::Error),
    /// TOML options parsing/serialization failure.
    OptionsParse(String),
}

impl fmt::Display for ContactMapError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TooManyAtoms { count, limit } => write!(
                f,
                "structure has {count} atoms, exceeding the limit of {limit} \
                 (raise contact.max_atoms to opt in)"
            ),
            Self::AllocationFailed { cells } => {
                write!(f, "cannot allocate {cells} contact-map cells")
            }
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::OptionsParse(msg) => {
                write!(f, "options parse error: {msg}")
            }
        }
    }
}

impl std::error::Error for ContactMapError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for ContactMapError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn too_many_atoms_mentions_opt_in() {
        let err = ContactMapError::TooManyAtoms {
            count: 12_000,
            limit: 5000,
        };
        let msg = err.to_string();
        assert!(msg.contains("12000"));
        assert!(msg.contains("max_atoms"));
    }

    #[test]
    fn io_error_exposes_source() {
        use std::error::Error;
        let err: ContactMapError =
            std::io::Error::new(std::io::ErrorKind::NotFound, "gone").into();
        assert!(err.source().is_some());
    }
}
