//! HTTP handlers for the cupcake resource.

pub mod cupcakes;
pub use cupcakes::*;
