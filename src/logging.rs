// ABOUTME: Logging configuration and structured logging setup for the body metrics engine
// ABOUTME: Configures log level, output format, and structured event helpers for readings and profiles
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Structured logging configuration
//!
//! Logs go to stderr so command output on stdout stays machine-readable.

use crate::constants::service_names;
use anyhow::{anyhow, Result};
use body_metrics_core::models::ProfileId;
use std::env;
use std::io;
use std::str::FromStr;
use tracing::{info, warn};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Logging configuration
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    pub level: String,
    /// Output format (json, pretty, compact)
    pub format: LogFormat,
    /// Include source file and line numbers
    pub include_location: bool,
    /// Include thread information
    pub include_thread: bool,
    /// Service name for structured logging
    pub service_name: String,
    /// Service version
    pub service_version: String,
}

/// Log output format options
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    /// `JSON` format for log shippers
    Json,
    /// Pretty format for development
    Pretty,
    /// Compact format for terminals
    Compact,
}

impl FromStr for LogFormat {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "json" => Ok(Self::Json),
            "pretty" => Ok(Self::Pretty),
            "compact" => Ok(Self::Compact),
            other => Err(anyhow!("unknown log format '{other}'")),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".into(),
            format: LogFormat::Compact,
            include_location: false,
            include_thread: false,
            service_name: service_names::BODY_METRICS.into(),
            service_version: env!("CARGO_PKG_VERSION").to_owned(),
        }
    }
}

impl LoggingConfig {
    /// Create logging configuration from environment variables
    #[must_use]
    pub fn from_env() -> Self {
        let defaults = Self::default();
        let level = env::var("RUST_LOG").unwrap_or(defaults.level);

        // Unknown formats fall back to compact rather than refusing to start.
        let format = env::var("LOG_FORMAT")
            .ok()
            .and_then(|value| value.parse().ok())
            .unwrap_or(defaults.format);

        Self {
            level,
            format,
            include_location: env::var("LOG_INCLUDE_LOCATION").is_ok(),
            include_thread: env::var("LOG_INCLUDE_THREAD").is_ok(),
            service_name: env::var("SERVICE_NAME").unwrap_or(defaults.service_name),
            service_version: defaults.service_version,
        }
    }

    /// Set the log level, keeping everything else
    #[must_use]
    pub fn with_level(mut self, level: impl Into<String>) -> Self {
        self.level = level.into();
        self
    }

    /// Build the filter: `RUST_LOG` wins, otherwise the configured level
    fn env_filter(&self) -> EnvFilter {
        env::var("RUST_LOG").map_or_else(
            |_| EnvFilter::new(&self.level),
            |directive| EnvFilter::new(&directive),
        )
    }

    /// Initialize the global tracing subscriber
    ///
    /// # Errors
    ///
    /// Returns an error if a global subscriber is already installed
    pub fn init(&self) -> Result<()> {
        let registry = tracing_subscriber::registry().with(self.env_filter());

        let result = match self.format {
            LogFormat::Json => registry
                .with(
                    fmt::layer()
                        .json()
                        .with_file(self.include_location)
                        .with_line_number(self.include_location)
                        .with_thread_ids(self.include_thread)
                        .with_thread_names(self.include_thread)
                        .with_target(true)
                        .with_writer(io::stderr),
                )
                .try_init(),
            LogFormat::Pretty => registry
                .with(
                    fmt::layer()
                        .pretty()
                        .with_file(self.include_location)
                        .with_line_number(self.include_location)
                        .with_thread_ids(self.include_thread)
                        .with_thread_names(self.include_thread)
                        .with_target(true)
                        .with_writer(io::stderr),
                )
                .try_init(),
            LogFormat::Compact => registry
                .with(
                    fmt::layer()
                        .compact()
                        .with_file(false)
                        .with_line_number(false)
                        .with_target(false)
                        .with_writer(io::stderr),
                )
                .try_init(),
        };
        result.map_err(|e| anyhow!("failed to initialize tracing subscriber: {e}"))?;

        tracing::debug!(
            service.name = %self.service_name,
            service.version = %self.service_version,
            log.level = %self.level,
            log.format = ?self.format,
            "Logging initialized"
        );
        Ok(())
    }
}

/// Initialize logging from environment
///
/// # Errors
///
/// Returns an error if logging initialization fails
pub fn init_from_env() -> Result<()> {
    LoggingConfig::from_env().init()
}

/// Structured events emitted by the reading pipeline and profile store
pub struct AppLogger;

impl AppLogger {
    /// A reading was attributed to a profile
    pub fn log_reading_identified(profile_id: ProfileId, confidence: f64, has_impedance: bool) {
        info!(
            profile.id = %profile_id,
            reading.confidence = confidence,
            reading.has_impedance = has_impedance,
            "Reading identified"
        );
    }

    /// No profile cleared the confidence cut-off
    pub fn log_reading_unidentified(best_confidence: f64, candidates: usize) {
        warn!(
            reading.confidence = best_confidence,
            reading.candidates = candidates,
            "Reading not attributed to any profile"
        );
    }

    /// A reading was rejected before matching
    pub fn log_reading_rejected(reason: &str) {
        warn!(reading.rejected = %reason, "Reading rejected");
    }

    /// Profile store change
    pub fn log_profile_event(profile_id: ProfileId, event: &str) {
        info!(profile.id = %profile_id, profile.event = %event, "Profile event");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_format_parsing() {
        assert_eq!("json".parse::<LogFormat>().unwrap(), LogFormat::Json);
        assert_eq!(" Pretty ".parse::<LogFormat>().unwrap(), LogFormat::Pretty);
        assert_eq!("compact".parse::<LogFormat>().unwrap(), LogFormat::Compact);
        assert!("xml".parse::<LogFormat>().is_err());
    }

    #[test]
    fn test_defaults() {
        let config = LoggingConfig::default().with_level("debug");
        assert_eq!(config.level, "debug");
        assert_eq!(config.format, LogFormat::Compact);
        assert_eq!(config.service_name, service_names::BODY_METRICS);
    }
}
