use serde::Serialize;
use crate::core::library::LibraryError;

#[derive(Debug, PartialEq, Serialize)]
pub enum CommandError {
    NotFound {
        message: String,
        reason_code: String,
    },
    Conflict {
        message: String,
        reason_code: String,
    },
    Validation {
        message: String,
        reason_code: String,
    },
    Serialization {
        message: String,
    },
}

impl CommandError {
    pub fn message(&self) -> &str {
        match self {
            CommandError::NotFound { message, .. } => { message }
            CommandError::Conflict { message, .. } => { message }
            CommandError::Validation { message, .. } => { message }
            CommandError::Serialization { message } => { message }
        }
    }

    pub fn reason_code(&self) -> &str {
        match self {
            CommandError::NotFound { reason_code, .. } => { reason_code }
            CommandError::Conflict { reason_code, .. } => { reason_code }
            CommandError::Validation { reason_code, .. } => { reason_code }
            CommandError::Serialization { .. } => { "serialization error" }
        }
    }
}

// Command is the entry point the controller uses for a single circulation request.
pub trait Command<Request, Response> {
    fn execute(&mut self, req: Request) -> Result<Response, CommandError>;
}

impl From<LibraryError> for CommandError {
    fn from(other: LibraryError) -> Self {
        let message = other.to_string();
        let reason_code = other.reason_code().to_string();
        match other {
            LibraryError::PatronNotFound { .. } | LibraryError::ItemNotFound { .. } => {
                CommandError::NotFound { message, reason_code }
            }
            LibraryError::AlreadyCheckedOut { .. }
            | LibraryError::OnHoldForOther { .. }
            | LibraryError::NotCheckedOut { .. }
            | LibraryError::AlreadyRequested { .. }
            | LibraryError::NotRequested { .. }
            | LibraryError::DuplicateKey { .. } => {
                CommandError::Conflict { message, reason_code }
            }
            LibraryError::NegativeAmount { .. } => {
                CommandError::Validation { message, reason_code }
            }
            LibraryError::Serialization { .. } => {
                CommandError::Serialization { message }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::core::command::CommandError;
    use crate::core::library::LibraryError;

    #[test]
    fn test_should_map_not_found() {
        let err = CommandError::from(LibraryError::patron_not_found("p1"));
        assert!(matches!(err, CommandError::NotFound { .. }));
        assert_eq!("patron not found", err.reason_code());
        assert_eq!("patron p1 not found", err.message());
    }

    #[test]
    fn test_should_map_conflicts() {
        for err in [
            LibraryError::already_checked_out("i1"),
            LibraryError::on_hold_for_other("i1"),
            LibraryError::not_checked_out("i1"),
            LibraryError::already_requested("i1"),
            LibraryError::not_requested("p1", "i1"),
            LibraryError::duplicate_key("i1"),
        ] {
            assert!(matches!(CommandError::from(err), CommandError::Conflict { .. }));
        }
    }

    #[test]
    fn test_should_map_validation_and_serialization() {
        let err = CommandError::from(LibraryError::negative_amount(-1.5));
        assert!(matches!(err, CommandError::Validation { .. }));
        assert_eq!("ERROR: Cannot pay negative fine amount", err.reason_code());
        let err = CommandError::from(LibraryError::serialization("bad json"));
        assert_eq!(CommandError::Serialization { message: "bad json".to_string() }, err);
    }
}
