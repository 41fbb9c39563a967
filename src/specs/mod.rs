//! # Page “specs”
//!
//! Each spec knows how to read one kind of page: which nodes hold the ground
//! truth and how to turn their text into canonical records.
//!
//! ## What lives here
//! - **Entry location and field reads** through [`SelectionPredicate`]s built
//!   from configuration (`config::options::SelectorConfig`).
//! - **Field rules** that only make sense for that page (id disambiguation,
//!   redirect-link unwrapping, issued/expiry splitting).
//!
//! ## What does **not** live here
//! - **Export formatting** (`csv`, `export`) and writing files (`file`).
//! - **Querying** the resulting records (`engine`).
//!
//! ## Conventions
//! - One bad entry never sinks the page: it is skipped, logged and counted.
//! - Output keeps document order; re-sorting is the serializer's business.
//!
//! [`SelectionPredicate`]: crate::core::SelectionPredicate
pub mod certifications;
