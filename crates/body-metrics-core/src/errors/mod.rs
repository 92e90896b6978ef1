// ABOUTME: Unified error type and error codes shared by every body metrics component
// ABOUTME: Distinguishes rejected samples and precondition violations from generic failures
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Unified Error Handling System
//!
//! A single `AppError` carries an `ErrorCode`, a human-readable message and
//! optional context. Callers branch on the code: an `InvalidSample` means the
//! reading was dropped before matching, a `PreconditionViolation` means the
//! profile data could not feed the formulas. Neither leaves state modified.

use serde::{Deserialize, Serialize};
use std::error::Error as StdError;
use std::{fmt, io};
use thiserror::Error;

use crate::models::ProfileId;

/// Standard error codes used throughout the engine
#[non_exhaustive]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ErrorCode {
    // Validation (3000-3999)
    /// Generic invalid input
    #[serde(rename = "INVALID_INPUT")]
    InvalidInput = 3000,
    /// Required field absent
    #[serde(rename = "MISSING_REQUIRED_FIELD")]
    MissingRequiredField = 3001,
    /// Value outside the accepted range
    #[serde(rename = "VALUE_OUT_OF_RANGE")]
    ValueOutOfRange = 3003,
    /// Scale reading rejected before matching (non-positive or missing weight)
    #[serde(rename = "INVALID_SAMPLE")]
    InvalidSample = 3010,
    /// Profile data cannot satisfy a formula precondition (zero height, corrupt profile)
    #[serde(rename = "PRECONDITION_VIOLATION")]
    PreconditionViolation = 3011,

    // Resource Management (4000-4999)
    /// Profile or resource not found
    #[serde(rename = "RESOURCE_NOT_FOUND")]
    ResourceNotFound = 4000,
    /// Profile or resource already exists
    #[serde(rename = "RESOURCE_ALREADY_EXISTS")]
    ResourceAlreadyExists = 4001,

    // Configuration (6000-6999)
    /// Configuration could not be loaded
    #[serde(rename = "CONFIG_ERROR")]
    ConfigError = 6000,
    /// Configuration loaded but failed validation
    #[serde(rename = "CONFIG_INVALID")]
    ConfigInvalid = 6002,

    // Internal Errors (9000-9999)
    /// Unexpected internal failure
    #[serde(rename = "INTERNAL_ERROR")]
    InternalError = 9000,
    /// Reading or writing persisted state failed
    #[serde(rename = "STORAGE_ERROR")]
    StorageError = 9002,
    /// Data serialization/deserialization failed
    #[serde(rename = "SERIALIZATION_ERROR")]
    SerializationError = 9003,
}

impl ErrorCode {
    /// Get a user-friendly description of this error
    #[must_use]
    pub const fn description(&self) -> &'static str {
        match self {
            Self::InvalidInput => "The provided input is invalid",
            Self::MissingRequiredField => "A required field is missing",
            Self::ValueOutOfRange => "The provided value is outside the acceptable range",
            Self::InvalidSample => "The scale reading was rejected",
            Self::PreconditionViolation => "Profile data violates a calculation precondition",
            Self::ResourceNotFound => "The requested resource was not found",
            Self::ResourceAlreadyExists => "A resource with this identifier already exists",
            Self::ConfigError => "Configuration error encountered",
            Self::ConfigInvalid => "Configuration is invalid",
            Self::InternalError => "An internal error occurred",
            Self::StorageError => "Storage operation failed",
            Self::SerializationError => "Data serialization/deserialization failed",
        }
    }

    /// Whether the error was caused by the caller's input rather than the engine
    #[must_use]
    pub const fn is_client_error(&self) -> bool {
        matches!(
            self,
            Self::InvalidInput
                | Self::MissingRequiredField
                | Self::ValueOutOfRange
                | Self::InvalidSample
                | Self::ResourceNotFound
                | Self::ResourceAlreadyExists
        )
    }
}

/// Additional context that can be attached to errors
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorContext {
    /// Profile the failing operation concerned, if any
    pub profile_id: Option<ProfileId>,
    /// Additional key-value context
    pub details: serde_json::Value,
}

impl Default for ErrorContext {
    fn default() -> Self {
        Self {
            profile_id: None,
            details: serde_json::Value::Object(serde_json::Map::new()),
        }
    }
}

/// Unified error type for the engine
#[derive(Debug, Error)]
pub struct AppError {
    /// Error code
    pub code: ErrorCode,
    /// Human-readable error message
    pub message: String,
    /// Additional context
    pub context: ErrorContext,
    /// Source error for error chaining
    #[source]
    pub source: Option<Box<dyn StdError + Send + Sync>>,
}

impl AppError {
    /// Create a new `AppError` with the given code and message
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            context: ErrorContext::default(),
            source: None,
        }
    }

    /// Attach the profile the error concerns
    #[must_use]
    pub fn with_profile_id(mut self, profile_id: ProfileId) -> Self {
        self.context.profile_id = Some(profile_id);
        self
    }

    /// Add details to the error context
    #[must_use]
    pub fn with_details(mut self, details: serde_json::Value) -> Self {
        self.context.details = details;
        self
    }

    /// Add a source error for error chaining
    #[must_use]
    pub fn with_source(mut self, source: impl StdError + Send + Sync + 'static) -> Self {
        self.source = Some(Box::new(source));
        self
    }

    /// Scale reading rejected before matching
    pub fn invalid_sample(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InvalidSample, message)
    }

    /// Profile data cannot satisfy a formula precondition
    pub fn precondition(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::PreconditionViolation, message)
    }

    /// Invalid input
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InvalidInput, message)
    }

    /// Resource not found
    pub fn not_found(resource: impl Into<String>) -> Self {
        Self::new(
            ErrorCode::ResourceNotFound,
            format!("{} not found", resource.into()),
        )
    }

    /// Resource already exists
    pub fn already_exists(resource: impl Into<String>) -> Self {
        Self::new(
            ErrorCode::ResourceAlreadyExists,
            format!("{} already exists", resource.into()),
        )
    }

    /// Configuration error
    pub fn config(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::ConfigError, message)
    }

    /// Storage error
    pub fn storage(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::StorageError, message)
    }

    /// Serialization or deserialization failure
    pub fn serialization(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::SerializationError, message)
    }

    /// Internal error
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InternalError, message)
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.code.description(), self.message)
    }
}

impl From<serde_json::Error> for AppError {
    fn from(error: serde_json::Error) -> Self {
        Self::serialization(error.to_string()).with_source(error)
    }
}

impl From<io::Error> for AppError {
    fn from(error: io::Error) -> Self {
        Self::storage(error.to_string()).with_source(error)
    }
}

/// Result type alias for convenience
pub type AppResult<T> = Result<T, AppError>;
