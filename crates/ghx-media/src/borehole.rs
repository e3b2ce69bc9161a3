//! Borehole descriptor.

use ghx_core::units::Length;

/// A single vertical borehole.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Borehole {
    /// Active heat-exchange length
    pub height: Length,
    /// Depth of the borehole top below grade
    pub buried_depth: Length,
    /// Borehole radius
    pub radius: Length,
    /// Field x position, meters
    pub x: f64,
    /// Field y position, meters
    pub y: f64,
}

impl Borehole {
    pub fn new(height: Length, buried_depth: Length, radius: Length, x: f64, y: f64) -> Self {
        Self {
            height,
            buried_depth,
            radius,
            x,
            y,
        }
    }
}
