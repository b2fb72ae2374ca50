use crate::core::library::LibraryError;

#[derive(Debug, PartialEq)]
pub enum CommandError {
    NotFound {
        term: String,
    },
    Serialization {
        message: String,
    },
    Validation {
        message: String,
    },
    Runtime {
        message: String,
    },
}

pub trait Command<Request, Response> {
    fn execute(&mut self, req: Request) -> Result<Response, CommandError>;
}

impl From<LibraryError> for CommandError {
    fn from(other: LibraryError) -> Self {
        match other {
            LibraryError::NotFound { term } => {
                CommandError::NotFound { term }
            }
            LibraryError::Validation { message } => {
                CommandError::Validation { message }
            }
            LibraryError::Serialization { message } => {
                CommandError::Serialization { message }
            }
            LibraryError::Runtime { message } => {
                CommandError::Runtime { message }
            }
        }
    }
}
