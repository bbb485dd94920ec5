//! Store module - the single persisted document.
//!
//! - `document` - `Document` and its lookups
//! - `normalize` - legacy repairs applied on save
//! - `seed` - first-run dataset

mod document;
mod normalize;
mod seed;

pub use document::Document;
pub use normalize::NormalizationReport;
pub use seed::bootstrap_document;
