//! Remote synchronization: the data source seam and the keyed query cache

mod cache;
mod source;

pub use cache::*;
pub use source::*;
