//! Domain-level error type used across the domain model, repos and adapters.
//!
//! This error type is transport- and storage-agnostic. The workflow
//! controller returns `Result<T, crate::error::AppError>` and converts from
//! `DomainError` through `From<DomainError> for AppError`.

use std::error::Error;
use std::fmt::{Display, Formatter, Result as FmtResult};

/// Validation kinds for input and business-rule failures.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ValidationKind {
    /// Bid value missing, non-numeric, non-finite or not positive.
    InvalidBid,
    /// Bid does not beat the current winning bid for the auction type.
    BidNotImproving,
    /// Question text empty after trimming.
    EmptyQuestion,
    /// Configuration form carried an unusable value.
    InvalidConfiguration,
    /// Named target room does not exist.
    UnknownRoom,
    Other(String),
}

/// Domain-level not found entities.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum NotFoundKind {
    Room,
    QuestionsRoom,
    Other(String),
}

/// Infra error kinds to distinguish operational failures.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum InfraErrorKind {
    DbUnavailable,
    DataCorruption,
    Other(String),
}

/// Central domain error type
#[derive(Debug, Clone, PartialEq)]
pub enum DomainError {
    /// Input/user validation or business rule violation
    Validation(ValidationKind, String),
    /// Missing resource in domain terms
    NotFound(NotFoundKind, String),
    /// Mutation attempted on a finished auction
    StateInvariant(String),
    /// Continuation token could not be decoded
    MalformedToken(String),
    /// Continuation token does not belong to the workflow step it reached
    StageMismatch(String),
    /// Infrastructure/operational failures
    Infra(InfraErrorKind, String),
}

impl Display for DomainError {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            DomainError::Validation(kind, d) => write!(f, "validation error {kind:?}: {d}"),
            DomainError::NotFound(kind, d) => write!(f, "not found {kind:?}: {d}"),
            DomainError::StateInvariant(d) => write!(f, "state invariant violated: {d}"),
            DomainError::MalformedToken(d) => write!(f, "malformed action token: {d}"),
            DomainError::StageMismatch(d) => write!(f, "stage mismatch: {d}"),
            DomainError::Infra(kind, d) => write!(f, "infra {kind:?}: {d}"),
        }
    }
}

impl Error for DomainError {}

impl DomainError {
    pub fn validation(kind: ValidationKind, detail: impl Into<String>) -> Self {
        Self::Validation(kind, detail.into())
    }
    pub fn not_found(kind: NotFoundKind, detail: impl Into<String>) -> Self {
        Self::NotFound(kind, detail.into())
    }
    pub fn state_invariant(detail: impl Into<String>) -> Self {
        Self::StateInvariant(detail.into())
    }
    pub fn malformed_token(detail: impl Into<String>) -> Self {
        Self::MalformedToken(detail.into())
    }
    pub fn stage_mismatch(detail: impl Into<String>) -> Self {
        Self::StageMismatch(detail.into())
    }
    pub fn infra(kind: InfraErrorKind, detail: impl Into<String>) -> Self {
        Self::Infra(kind, detail.into())
    }
}

impl From<sea_orm::DbErr> for DomainError {
    fn from(e: sea_orm::DbErr) -> Self {
        match e {
            sea_orm::DbErr::Conn(_) | sea_orm::DbErr::ConnectionAcquire(_) => {
                DomainError::infra(InfraErrorKind::DbUnavailable, e.to_string())
            }
            other => DomainError::infra(InfraErrorKind::Other("DB".into()), other.to_string()),
        }
    }
}
