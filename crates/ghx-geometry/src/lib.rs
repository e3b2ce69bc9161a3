//! ghx-geometry: borehole-field layout helpers.
//!
//! Provides:
//! - point-in-polygon classification
//! - cutout removal over candidate borehole coordinates
//! - bounding-rectangle computation over property boundaries
//! - geometric-constraint descriptors for the field design algorithms

pub mod constraints;
pub mod feature;
pub mod shape;

pub use constraints::GeometricConstraints;
pub use feature::{bounding_rectangle, remove_cutout};
pub use shape::{PointPosition, point_polygon_check};
