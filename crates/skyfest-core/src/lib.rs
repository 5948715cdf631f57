// SPDX-License-Identifier: MIT
// Copyright (c) 2026 StarTuz

//! Festival resolution and card content lookup for in-flight theming.
//!
//! Every resolution call is a pure function of its arguments and the two
//! injected catalogs. Missing or malformed input degrades to an empty result,
//! `None` or `false`; only the `*_checked` / `try_*` entry points report
//! malformed dates as errors.

pub mod calendar;
pub mod catalog;
pub mod config;
pub mod content;
pub mod engine;
pub mod matcher;
pub mod model;
pub mod segment;
pub mod selector;

pub use catalog::content::ContentCatalog;
pub use catalog::FestivalCatalog;
pub use config::ResolverConfig;
pub use engine::{CardDeck, ThemeEngine};
pub use model::{
    Airport, ContentRecord, ContentType, Endpoint, FestivalRecord, FlightPhase, FlightSegment,
    SelectionContext,
};

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Invalid catalog JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Unknown month key: {0}")]
    UnknownMonth(String),
    #[error("Festival '{name}' has invalid day range {start_day}..={end_day}")]
    InvalidDayRange {
        name: String,
        start_day: u32,
        end_day: u32,
    },
    #[error("Default content missing for {phase}/{kind}")]
    MissingDefaultContent {
        phase: FlightPhase,
        kind: ContentType,
    },
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ResolveError {
    #[error("Malformed date '{0}', expected YYYY-MM-DD")]
    MalformedDate(String),
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Invalid config JSON: {0}")]
    Json(#[from] serde_json::Error),
}
