//! Core abstractions shared by the `pvcell` crates.

mod model;

pub use model::Model;
