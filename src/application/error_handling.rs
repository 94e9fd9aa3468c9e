// src/application/error_handling.rs
//
// Enhanced Error Handling for Commands
//
// ARCHITECTURE:
// - Maps internal errors → categorized responses the UI can render
// - Provides consistent error format across all commands
// - Never exposes internal implementation details
// - Logs unexpected errors for debugging

use serde::{Deserialize, Serialize};

use crate::domain::DomainError;
use crate::error::AppError;

/// Standard error response for UI
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub success: bool,
    pub error_type: ErrorType,
    pub message: String,
    pub details: Option<String>,
}

/// Error categories for UI
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorType {
    /// Selected language or domain is not in the catalog
    InvalidSelection,

    /// Document mime type outside the accepted set
    UnsupportedFile,

    /// Document over the 10 MiB limit
    FileTooLarge,

    /// translate() with neither text nor document
    NoInput,

    /// A request is already in flight
    Busy,

    /// The translation provider failed
    ExternalService,

    /// Other/unknown error (500)
    Internal,
}

impl ErrorResponse {
    /// Create error response from AppError
    pub fn from_app_error(error: AppError) -> Self {
        match error {
            AppError::Domain(domain_error) => {
                let error_type = match &domain_error {
                    DomainError::InvalidSelection(_) => ErrorType::InvalidSelection,
                    DomainError::UnsupportedFile(_) => ErrorType::UnsupportedFile,
                    DomainError::FileTooLarge { .. } => ErrorType::FileTooLarge,
                    DomainError::NoInputProvided => ErrorType::NoInput,
                    DomainError::RequestInProgress => ErrorType::Busy,
                    DomainError::InvariantViolation(_) => ErrorType::Internal,
                };

                Self {
                    success: false,
                    error_type,
                    message: domain_error.to_string(),
                    details: None,
                }
            }

            AppError::Provider(message) => Self {
                success: false,
                error_type: ErrorType::ExternalService,
                message: "Translation provider failed".to_string(),
                details: Some(message),
            },

            AppError::Config(message) => {
                eprintln!("Configuration error: {}", message);

                Self {
                    success: false,
                    error_type: ErrorType::Internal,
                    message: "Configuration error".to_string(),
                    details: Some(message),
                }
            }

            AppError::Serialization(serde_error) => {
                eprintln!("Serialization error: {:?}", serde_error);

                Self {
                    success: false,
                    error_type: ErrorType::Internal,
                    message: "Data serialization failed".to_string(),
                    details: None,
                }
            }

            AppError::Io(io_error) => {
                eprintln!("IO error: {:?}", io_error);

                Self {
                    success: false,
                    error_type: ErrorType::Internal,
                    message: "File system operation failed".to_string(),
                    details: Some(io_error.to_string()),
                }
            }

            AppError::Other(message) => {
                eprintln!("Other error: {}", message);

                Self {
                    success: false,
                    error_type: ErrorType::Internal,
                    message,
                    details: None,
                }
            }
        }
    }
}

/// Helper trait to convert Results to ErrorResponse
pub trait ToErrorResponse<T> {
    fn to_error_response(self) -> Result<T, String>;
}

impl<T> ToErrorResponse<T> for Result<T, AppError> {
    fn to_error_response(self) -> Result<T, String> {
        self.map_err(|e| {
            let error_response = ErrorResponse::from_app_error(e);
            serde_json::to_string(&error_response)
                .unwrap_or_else(|_| "Internal error".to_string())
        })
    }
}
