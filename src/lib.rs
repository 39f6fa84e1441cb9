//! Farming Advisor
//!
//! Resolves a farmer's selections (crop, soil, season, water availability,
//! farm size) and a display language into a bundle of localized advice,
//! by lookup in static per-language tables.
//!
//! - `selection/`: language codes, closed option sets, form capture and validation
//! - `tables/`: translation and advisory tables (bundled JSON or a data directory)
//! - `resolver/`: the `Advisor` engine and the `AdviceBundle` it produces
//! - `formatters/`: markdown, HTML and JSON rendering of a bundle
//! - `config`: environment configuration for the HTTP server
//! - `api_server` (feature `api`): axum router

pub mod error;
pub mod selection;
pub mod tables;
pub mod resolver;
pub mod formatters;
pub mod config;

#[cfg(feature = "api")]
pub mod api_server;

// Re-export commonly used types
pub use error::{AdvisorError, Result};
pub use selection::{LanguageCode, SelectionField, SelectionForm, Selections};
pub use tables::DataTables;
pub use resolver::{AdviceBundle, Advisor, ReportLabels};
pub use formatters::{HtmlFormatter, JsonFormatter, MarkdownFormatter};
pub use config::ServerConfig;

#[cfg(feature = "api")]
pub use api_server::{create_router, AppState};
