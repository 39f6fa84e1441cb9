//! Advice resolution
//!
//! - `advisor.rs` - the `Advisor` engine and its per-category lookup rules
//! - `bundle.rs` - `AdviceBundle` and the other render-ready output structs

pub mod advisor;
pub mod bundle;

pub use advisor::Advisor;
pub use bundle::{
    AdviceBundle, FertilizerAdvice, ReportLabels, SummaryRow, MAX_FERTILIZER_TIPS,
    MAX_PEST_WARNINGS,
};
