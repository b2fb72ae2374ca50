use std::fmt;
use std::fmt::{Display, Formatter};
use serde::Serialize;

#[derive(Debug, PartialEq, Clone)]
pub enum LibraryError {
    // A catalog lookup matched nothing; carries the original search term.
    NotFound {
        term: String,
    },
    Validation {
        message: String,
    },
    Serialization {
        message: String,
    },
    Runtime {
        message: String,
    },
}

impl LibraryError {
    pub fn not_found(term: &str) -> LibraryError {
        LibraryError::NotFound { term: term.to_string() }
    }

    pub fn validation(message: &str) -> LibraryError {
        LibraryError::Validation { message: message.to_string() }
    }

    pub fn serialization(message: &str) -> LibraryError {
        LibraryError::Serialization { message: message.to_string() }
    }

    pub fn runtime(message: &str) -> LibraryError {
        LibraryError::Runtime { message: message.to_string() }
    }
}

impl From<std::io::Error> for LibraryError {
    fn from(err: std::io::Error) -> Self {
        LibraryError::runtime(
            format!("io {:?}", err).as_str())
    }
}

impl From<serde_json::Error> for LibraryError {
    fn from(err: serde_json::Error) -> Self {
        LibraryError::serialization(
            format!("serde json {:?}", err).as_str())
    }
}

impl Display for LibraryError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            LibraryError::NotFound { term } => {
                write!(f, "nothing found for {:?}", term)
            }
            LibraryError::Validation { message } => {
                write!(f, "{}", message)
            }
            LibraryError::Serialization { message } => {
                write!(f, "{}", message)
            }
            LibraryError::Runtime { message } => {
                write!(f, "{}", message)
            }
        }
    }
}

impl std::error::Error for LibraryError {}

/// A specialized Result type for library operations.
pub type LibraryResult<T> = Result<T, LibraryError>;

// Listing distinguishes an empty collection from a populated one so callers
// can render the two cases differently.
#[derive(Debug, PartialEq, Clone, Serialize)]
#[serde(tag = "kind", content = "records")]
pub enum Listing<T> {
    Empty,
    Records(Vec<T>),
}

impl<T> Listing<T> {
    pub fn is_empty(&self) -> bool {
        matches!(self, Listing::Empty)
    }

    pub fn records(&self) -> &[T] {
        match self {
            Listing::Empty => &[],
            Listing::Records(records) => records.as_slice(),
        }
    }
}

impl<T> From<Vec<T>> for Listing<T> {
    fn from(records: Vec<T>) -> Self {
        if records.is_empty() {
            Listing::Empty
        } else {
            Listing::Records(records)
        }
    }
}

#[derive(Debug, PartialEq, Clone, Copy, Serialize)]
pub enum BorrowStatus {
    Borrowed,
    OutOfStock,
    UnknownTitle,
}

impl Display for BorrowStatus {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match self {
            BorrowStatus::Borrowed => write!(f, "Borrowed"),
            BorrowStatus::OutOfStock => write!(f, "OutOfStock"),
            BorrowStatus::UnknownTitle => write!(f, "UnknownTitle"),
        }
    }
}

#[derive(Debug, PartialEq, Clone, Copy, Serialize)]
pub enum ReturnStatus {
    Returned,
    // Stock is already at the ceiling, so the copy cannot belong to this library.
    AtCapacity,
    UnknownTitle,
}

impl Display for ReturnStatus {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match self {
            ReturnStatus::Returned => write!(f, "Returned"),
            ReturnStatus::AtCapacity => write!(f, "AtCapacity"),
            ReturnStatus::UnknownTitle => write!(f, "UnknownTitle"),
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::core::library::{BorrowStatus, LibraryError, Listing, ReturnStatus};

    #[tokio::test]
    async fn test_should_create_not_found_error() {
        let err = LibraryError::not_found("Missing");
        assert!(matches!(err, LibraryError::NotFound{ ref term } if term == "Missing"));
        assert_eq!("nothing found for \"Missing\"", err.to_string());
    }

    #[tokio::test]
    async fn test_should_create_validation_error() {
        assert!(matches!(LibraryError::validation("test"), LibraryError::Validation{ message: _ }));
    }

    #[tokio::test]
    async fn test_should_create_serialization_error() {
        assert!(matches!(LibraryError::serialization("test"), LibraryError::Serialization{ message: _ }));
    }

    #[tokio::test]
    async fn test_should_create_runtime_error() {
        assert!(matches!(LibraryError::runtime("test"), LibraryError::Runtime{ message: _ }));
        let io = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "closed");
        assert!(matches!(LibraryError::from(io), LibraryError::Runtime{ message: _ }));
    }

    #[tokio::test]
    async fn test_should_build_listing_from_records() {
        let empty: Listing<i32> = Listing::from(vec![]);
        assert!(empty.is_empty());
        assert!(empty.records().is_empty());

        let listing = Listing::from(vec![1, 2]);
        assert!(!listing.is_empty());
        assert_eq!(&[1, 2], listing.records());
    }

    #[tokio::test]
    async fn test_should_format_statuses() {
        assert_eq!("Borrowed", BorrowStatus::Borrowed.to_string());
        assert_eq!("OutOfStock", BorrowStatus::OutOfStock.to_string());
        assert_eq!("UnknownTitle", BorrowStatus::UnknownTitle.to_string());
        assert_eq!("Returned", ReturnStatus::Returned.to_string());
        assert_eq!("AtCapacity", ReturnStatus::AtCapacity.to_string());
        assert_eq!("UnknownTitle", ReturnStatus::UnknownTitle.to_string());
    }
}
