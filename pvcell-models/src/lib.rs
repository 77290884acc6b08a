//! Photovoltaic cell models.
//!
//! Each model module keeps its computation in plain functions and exposes a
//! thin [`pvcell_core::Model`] adapter that delegates to them.

pub mod photovoltaic;
