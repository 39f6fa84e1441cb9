//! Selection capture
//!
//! Typed values for everything the user picks on the form:
//! - `language.rs` - supported interface languages
//! - `options.rs` - closed option sets (soil, season, water, farm size) and crop ids
//! - `form.rs` - raw form capture and validation into `Selections`

pub mod language;
pub mod options;
pub mod form;

pub use language::LanguageCode;
pub use options::{CropId, FarmSize, SeasonType, SelectionField, SoilType, WaterLevel};
pub use form::{SelectionForm, Selections};
