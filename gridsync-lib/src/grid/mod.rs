//! Grid engine: filtering, sorting, paging, UI state, and the projection pipeline

pub mod filter;
pub mod sort;

mod controller;
mod page;
mod state;

pub use controller::*;
pub use filter::FilterPredicate;
pub use filter::FilterState;
pub use page::*;
pub use sort::SortDirection;
pub use sort::SortState;
pub use state::*;
