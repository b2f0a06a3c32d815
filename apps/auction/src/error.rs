use thiserror::Error;

use crate::errors::domain::{DomainError, InfraErrorKind, NotFoundKind, ValidationKind};
use crate::errors::ErrorCode;
use crate::platform::PlatformError;

/// How the controller treats a failure once it reaches an entry point.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorClass {
    /// Fatal for the invocation.
    Precondition,
    /// Actor notified in-room, invocation succeeds as a no-op.
    Authorization,
    /// Logged, invocation reports `false`.
    Routing,
    /// Actor notified in-room, invocation succeeds as a no-op.
    Validation,
    /// Actor already notified, error propagates.
    Lookup,
    /// Fatal, never recovered.
    StateInvariant,
    /// Storage, platform or configuration failure.
    Infrastructure,
}

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Precondition failed: {detail}")]
    Precondition { code: ErrorCode, detail: String },
    #[error("Forbidden: {detail}")]
    Forbidden { code: ErrorCode, detail: String },
    #[error("Routing error: {detail}")]
    Routing { code: ErrorCode, detail: String },
    #[error("Validation error: {detail}")]
    Validation { code: ErrorCode, detail: String },
    #[error("Not found: {detail}")]
    NotFound { code: ErrorCode, detail: String },
    #[error("State invariant violated: {detail}")]
    StateInvariant { detail: String },
    #[error("Database error: {detail}")]
    Db { code: ErrorCode, detail: String },
    #[error("Platform error: {detail}")]
    Platform { detail: String },
    #[error("Configuration error: {detail}")]
    Config { detail: String },
}

impl AppError {
    pub fn code(&self) -> ErrorCode {
        match self {
            AppError::Precondition { code, .. } => *code,
            AppError::Forbidden { code, .. } => *code,
            AppError::Routing { code, .. } => *code,
            AppError::Validation { code, .. } => *code,
            AppError::NotFound { code, .. } => *code,
            AppError::StateInvariant { .. } => ErrorCode::AuctionLocked,
            AppError::Db { code, .. } => *code,
            AppError::Platform { .. } => ErrorCode::PlatformError,
            AppError::Config { .. } => ErrorCode::ConfigError,
        }
    }

    /// User-facing detail; for authorization and validation errors this is
    /// the text of the in-room notification.
    pub fn detail(&self) -> &str {
        match self {
            AppError::Precondition { detail, .. }
            | AppError::Forbidden { detail, .. }
            | AppError::Routing { detail, .. }
            | AppError::Validation { detail, .. }
            | AppError::NotFound { detail, .. }
            | AppError::StateInvariant { detail }
            | AppError::Db { detail, .. }
            | AppError::Platform { detail }
            | AppError::Config { detail } => detail,
        }
    }

    pub fn class(&self) -> ErrorClass {
        match self {
            AppError::Precondition { .. } => ErrorClass::Precondition,
            AppError::Forbidden { .. } => ErrorClass::Authorization,
            AppError::Routing { .. } => ErrorClass::Routing,
            AppError::Validation { .. } => ErrorClass::Validation,
            AppError::NotFound { .. } => ErrorClass::Lookup,
            AppError::StateInvariant { .. } => ErrorClass::StateInvariant,
            AppError::Db { .. }
            | AppError::Platform { .. }
            | AppError::Config { .. } => ErrorClass::Infrastructure,
        }
    }

    pub fn precondition(code: ErrorCode, detail: impl Into<String>) -> Self {
        Self::Precondition {
            code,
            detail: detail.into(),
        }
    }

    pub fn forbidden(code: ErrorCode, detail: impl Into<String>) -> Self {
        Self::Forbidden {
            code,
            detail: detail.into(),
        }
    }

    pub fn routing(code: ErrorCode, detail: impl Into<String>) -> Self {
        Self::Routing {
            code,
            detail: detail.into(),
        }
    }

    pub fn invalid(code: ErrorCode, detail: impl Into<String>) -> Self {
        Self::Validation {
            code,
            detail: detail.into(),
        }
    }

    pub fn not_found(code: ErrorCode, detail: impl Into<String>) -> Self {
        Self::NotFound {
            code,
            detail: detail.into(),
        }
    }

    pub fn config(detail: impl Into<String>) -> Self {
        Self::Config {
            detail: detail.into(),
        }
    }
}

impl From<DomainError> for AppError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::Validation(kind, detail) => {
                let code = match kind {
                    ValidationKind::InvalidBid => ErrorCode::InvalidBid,
                    ValidationKind::BidNotImproving => ErrorCode::BidNotImproving,
                    ValidationKind::EmptyQuestion => ErrorCode::EmptyQuestion,
                    ValidationKind::InvalidConfiguration => ErrorCode::InvalidConfiguration,
                    ValidationKind::UnknownRoom => ErrorCode::UnknownRoom,
                    ValidationKind::Other(_) => ErrorCode::ValidationError,
                };
                AppError::invalid(code, detail)
            }
            DomainError::NotFound(kind, detail) => match kind {
                // A room id that no longer resolves means the token points nowhere.
                NotFoundKind::Room => AppError::routing(ErrorCode::RoomNotFound, detail),
                NotFoundKind::QuestionsRoom => {
                    AppError::not_found(ErrorCode::QuestionsRoomNotFound, detail)
                }
                NotFoundKind::Other(_) => AppError::not_found(ErrorCode::NotFound, detail),
            },
            DomainError::StateInvariant(detail) => AppError::StateInvariant { detail },
            DomainError::MalformedToken(detail) => {
                AppError::routing(ErrorCode::MalformedToken, detail)
            }
            DomainError::StageMismatch(detail) => {
                AppError::routing(ErrorCode::StageMismatch, detail)
            }
            DomainError::Infra(kind, detail) => {
                let code = match kind {
                    InfraErrorKind::DbUnavailable => ErrorCode::DbUnavailable,
                    InfraErrorKind::DataCorruption => ErrorCode::DataCorruption,
                    InfraErrorKind::Other(_) => ErrorCode::DbError,
                };
                AppError::Db { code, detail }
            }
        }
    }
}

impl From<sea_orm::DbErr> for AppError {
    fn from(e: sea_orm::DbErr) -> Self {
        AppError::from(DomainError::from(e))
    }
}

impl From<PlatformError> for AppError {
    fn from(e: PlatformError) -> Self {
        AppError::Platform {
            detail: e.to_string(),
        }
    }
}
