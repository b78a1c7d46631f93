//! Engine data structures: instance transforms and the scene aggregate.
//!
//! This module contains the core data types for scene representation:
//!
//! - `transform` holds the per-instance transform record and its fixed
//!   world-matrix composition
//! - `scene` owns the placed model instances, the fixed backdrop instances,
//!   the selection and the persisted snapshot shape

pub mod scene;
pub mod transform;
