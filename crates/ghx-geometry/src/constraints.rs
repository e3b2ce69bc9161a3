//! Geometric-constraint descriptors for the field design algorithms.

use serde::{Deserialize, Serialize};

/// Closed polygon outline, vertex ring in meters.
pub type Outline = Vec<(f64, f64)>;

/// Constraints parameterizing one of the borehole-field design algorithms.
///
/// Serialized with the algorithm tag under `method`, matching the design
/// pipeline's input schema.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "method")]
pub enum GeometricConstraints {
    /// Near-square fields: uniform spacing, length-bounded
    #[serde(rename = "nearsquare")]
    NearSquare { b: f64, length: f64 },

    /// Rectangular fields with an x-spacing sweep
    #[serde(rename = "rectangle")]
    Rectangle {
        width: f64,
        length: f64,
        b_min: f64,
        b_max_x: f64,
    },

    /// Bi-rectangle: independent x and y spacing bounds
    #[serde(rename = "birectangle")]
    BiRectangle {
        width: f64,
        length: f64,
        b_min: f64,
        b_max_x: f64,
        b_max_y: f64,
    },

    /// Bi-rectangle constrained to a property boundary with no-go zones
    #[serde(rename = "birectangleconstrained")]
    BiRectangleConstrained {
        b_min: f64,
        b_max_x: f64,
        b_max_y: f64,
        property_boundary: Vec<Outline>,
        no_go_boundaries: Vec<Outline>,
    },

    /// Bi-zoned rectangle: interior and perimeter zones spaced separately
    #[serde(rename = "bizonedrectangle")]
    BiZoned {
        width: f64,
        length: f64,
        b_min: f64,
        b_max_x: f64,
        b_max_y: f64,
    },

    /// Row-wise placement swept over spacing and field rotation
    #[serde(rename = "rowwise")]
    RowWise {
        perimeter_spacing_ratio: f64,
        min_spacing: f64,
        max_spacing: f64,
        spacing_step: f64,
        /// Rotation bounds in radians
        min_rotation: f64,
        max_rotation: f64,
        rotate_step: f64,
        property_boundary: Vec<Outline>,
        no_go_boundaries: Vec<Outline>,
    },
}

impl GeometricConstraints {
    /// Name of the design algorithm these constraints parameterize.
    pub fn method(&self) -> &'static str {
        match self {
            GeometricConstraints::NearSquare { .. } => "nearsquare",
            GeometricConstraints::Rectangle { .. } => "rectangle",
            GeometricConstraints::BiRectangle { .. } => "birectangle",
            GeometricConstraints::BiRectangleConstrained { .. } => "birectangleconstrained",
            GeometricConstraints::BiZoned { .. } => "bizonedrectangle",
            GeometricConstraints::RowWise { .. } => "rowwise",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn method_names_match_variants() {
        let near_square = GeometricConstraints::NearSquare {
            b: 5.0,
            length: 100.0,
        };
        assert_eq!(near_square.method(), "nearsquare");

        let row_wise = GeometricConstraints::RowWise {
            perimeter_spacing_ratio: 0.8,
            min_spacing: 3.0,
            max_spacing: 10.0,
            spacing_step: 0.5,
            min_rotation: 0.0,
            max_rotation: std::f64::consts::FRAC_PI_2,
            rotate_step: 0.1,
            property_boundary: vec![vec![(0.0, 0.0), (50.0, 0.0), (50.0, 50.0), (0.0, 50.0)]],
            no_go_boundaries: vec![],
        };
        assert_eq!(row_wise.method(), "rowwise");
    }
}
