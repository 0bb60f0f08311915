//! Grid state engine for the admin dashboard
//!
//! A client-side data grid engine: declarative column schemas, filter /
//! sort / visibility / selection state, a pure render projection, and a
//! keyed query cache that synchronizes against a remote data source
//! through a fetch / mutate / invalidate cycle. The page layer renders the
//! projection and forwards user intent; it contains no derivation logic.

pub mod entities;
pub mod error;
pub mod form;
pub mod grid;
pub mod model;
pub mod schema;
pub mod sync;

pub use grid::GridController;
pub use grid::Projection;
pub use sync::DataSource;
pub use sync::QueryCache;
