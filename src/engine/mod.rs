pub mod engine;
pub mod filters;
pub mod fuzzy;
pub mod session;
pub mod types;

pub use filters::{ActiveFilter, FilterKind};
pub use session::{LoadState, Session};
pub use types::{QueryState, SortField, SortOrder};
