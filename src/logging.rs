// ABOUTME: Logging configuration and structured logging setup for the planner
// ABOUTME: Configures log level, formatter and span events from environment variables
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Carbcycle Contributors

//! Structured logging setup
//!
//! Output goes to stderr so command-line JSON on stdout stays machine-readable.

use std::env;
use std::io;

use anyhow::Result;
use tracing::{info, Level};
use tracing_subscriber::{
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
    EnvFilter,
};

/// Default service name reported at startup
pub const SERVICE_NAME: &str = "carbcycle";

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
    /// Include span open/close events
    pub include_spans: bool,
    /// Service name for structured logging
    pub service_name: String,
    /// Service version
    pub service_version: String,
    /// Environment (development, staging, production)
    pub environment: String,
}

/// Log output format options
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    /// `JSON` format for production logging
    Json,
    /// Pretty format for development
    Pretty,
    /// Compact format for interactive use
    Compact,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "warn".into(),
            format: LogFormat::Compact,
            include_location: false,
            include_thread: false,
            include_spans: false,
            service_name: SERVICE_NAME.into(),
            service_version: env!("CARGO_PKG_VERSION").to_owned(),
            environment: "development".into(),
        }
    }
}

impl LoggingConfig {
    /// Create logging configuration from environment variables
    #[must_use]
    pub fn from_env() -> Self {
        let level = env::var("RUST_LOG").unwrap_or_else(|_| "warn".into());

        let format = match env::var("LOG_FORMAT").as_deref() {
            Ok("json") => LogFormat::Json,
            Ok("pretty") => LogFormat::Pretty,
            _ => LogFormat::Compact,
        };

        let environment = env::var("ENVIRONMENT").unwrap_or_else(|_| "development".into());
        let is_production = environment == "production";

        Self {
            level,
            format,
            include_location: is_production || env::var("LOG_INCLUDE_LOCATION").is_ok(),
            include_thread: is_production || env::var("LOG_INCLUDE_THREAD").is_ok(),
            include_spans: env::var("LOG_INCLUDE_SPANS").is_ok(),
            service_name: env::var("SERVICE_NAME").unwrap_or_else(|_| SERVICE_NAME.into()),
            service_version: env::var("SERVICE_VERSION")
                .unwrap_or_else(|_| env!("CARGO_PKG_VERSION").to_owned()),
            environment,
        }
    }

    /// Raise the level to debug (used by `--verbose`)
    #[must_use]
    pub fn verbose(mut self) -> Self {
        self.level = "debug".into();
        self
    }

    fn env_filter(&self) -> EnvFilter {
        EnvFilter::new(&self.level).add_directive(
            format!("carbcycle={}", self.level)
                .parse()
                .unwrap_or_else(|_| Level::INFO.into()),
        )
    }

    fn span_events(&self) -> FmtSpan {
        if self.include_spans {
            FmtSpan::NEW | FmtSpan::CLOSE
        } else {
            FmtSpan::NONE
        }
    }

    /// Initialize the global tracing subscriber
    ///
    /// # Errors
    ///
    /// Returns an error if a global subscriber is already installed
    pub fn init(&self) -> Result<()> {
        let registry = tracing_subscriber::registry().with(self.env_filter());

        match self.format {
            LogFormat::Json => {
                let json_layer = fmt::layer()
                    .with_file(self.include_location)
                    .with_line_number(self.include_location)
                    .with_thread_ids(self.include_thread)
                    .with_thread_names(self.include_thread)
                    .with_target(true)
                    .with_writer(io::stderr)
                    .with_span_events(self.span_events())
                    .json();

                registry.with(json_layer).try_init()?;
            }
            LogFormat::Pretty => {
                let pretty_layer = fmt::layer()
                    .with_file(self.include_location)
                    .with_line_number(self.include_location)
                    .with_thread_ids(self.include_thread)
                    .with_thread_names(self.include_thread)
                    .with_target(true)
                    .with_writer(io::stderr)
                    .with_span_events(self.span_events());

                registry.with(pretty_layer).try_init()?;
            }
            LogFormat::Compact => {
                let compact_layer = fmt::layer()
                    .compact()
                    .with_target(false)
                    .with_writer(io::stderr)
                    .with_span_events(FmtSpan::NONE);

                registry.with(compact_layer).try_init()?;
            }
        }

        info!(
            service.name = %self.service_name,
            service.version = %self.service_version,
            environment = %self.environment,
            log.level = %self.level,
            log.format = ?self.format,
            "Logging initialized"
        );

        Ok(())
    }
}
