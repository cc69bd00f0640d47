use thiserror::Error;

/// Errors raised by the multiset and by the script driver.
#[derive(Error, Debug)]
pub enum BagError {
    /// A negative removal count was supplied
    #[error("Provided n is negative: {n}")]
    InvalidArgument { n: i64 },
    /// More instances were requested than the multiset holds
    #[error("Tried to remove {requested} elements, but only {found} were found")]
    OutOfRange { requested: u64, found: usize },
    /// A script line could not be understood
    #[error("Parse error on line {line}: {message}")]
    Parse { line: usize, message: String },
    /// Reading or writing a script file failed
    #[error("Failed to access \"{path}\": {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

impl BagError {
    /// Errors that leave the multiset untouched and can be reported to the caller
    /// without aborting.
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            BagError::InvalidArgument { .. } | BagError::OutOfRange { .. }
        )
    }
}

pub type Result<T> = std::result::Result<T, BagError>;

#[cfg(test)]
mod test {
    use super::*;
    use test_log::test;

    #[test]
    fn messages() {
        assert_eq!(
            BagError::InvalidArgument { n: -3 }.to_string(),
            "Provided n is negative: -3"
        );
        assert_eq!(
            BagError::OutOfRange {
                requested: 5,
                found: 2
            }
            .to_string(),
            "Tried to remove 5 elements, but only 2 were found"
        );
    }

    #[test]
    fn recoverable_kinds() {
        assert!(BagError::InvalidArgument { n: -1 }.is_recoverable());
        assert!(BagError::OutOfRange {
            requested: 1,
            found: 0
        }
        .is_recoverable());
        assert!(!BagError::Parse {
            line: 1,
            message: "x".to_string()
        }
        .is_recoverable());
    }
}
