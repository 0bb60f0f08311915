//! Data model: dynamic field values and keyed rows

mod row;
mod value;

pub use row::*;
pub use value::*;
