//! All data types for the graphlet library.

pub mod error;
pub mod kind;

pub use error::{GraphError, GraphResult};
pub use kind::GraphKind;
