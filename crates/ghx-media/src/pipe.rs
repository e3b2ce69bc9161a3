//! Pipe geometry descriptors for U-tube and coaxial arrangements.

use std::f64::consts::PI;

use ghx_core::units::{Length, ThermalConductivity, VolHeatCapacity};

/// U-tube pipe descriptor.
///
/// `pos` holds the (x, y) pipe-center coordinates in meters, relative to the
/// borehole axis, ordered so that even indices are supply legs and odd
/// indices are return legs.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Pipe {
    /// Pipe center positions, meters from borehole axis
    pub pos: Vec<(f64, f64)>,
    /// Pipe inner radius
    pub r_in: Length,
    /// Pipe outer radius
    pub r_out: Length,
    /// Shank spacing, outer wall to outer wall between paired legs
    pub s: Length,
    /// Surface roughness (absolute)
    pub roughness: Length,
    /// Pipe wall thermal conductivity
    pub k: ThermalConductivity,
    /// Pipe wall volumetric heat capacity
    pub rho_cp: VolHeatCapacity,
}

impl Pipe {
    pub fn new(
        pos: Vec<(f64, f64)>,
        r_in: Length,
        r_out: Length,
        s: Length,
        roughness: Length,
        k: ThermalConductivity,
        rho_cp: VolHeatCapacity,
    ) -> Self {
        Self {
            pos,
            r_in,
            r_out,
            s,
            roughness,
            k,
            rho_cp,
        }
    }

    /// Number of U-tube pairs implied by the position list.
    pub fn n_pairs(&self) -> usize {
        self.pos.len() / 2
    }

    /// Place `2 * n_pairs` pipe centers evenly on a circle about the
    /// borehole axis.
    ///
    /// The circle radius is `s/2 + r_out`, so paired legs sit `s` apart wall
    /// to wall. Legs alternate supply/return around the circle.
    pub fn place_pipes(s: Length, r_out: Length, n_pairs: usize) -> Vec<(f64, f64)> {
        let ring = s.value / 2.0 + r_out.value;
        let n = 2 * n_pairs;
        (0..n)
            .map(|i| {
                let theta = PI * i as f64 / n_pairs as f64;
                (ring * theta.cos(), ring * theta.sin())
            })
            .collect()
    }
}

/// Coaxial (concentric tube) pipe descriptor.
///
/// The inner pipe separates the central flow passage from the annulus; the
/// outer pipe separates the annulus from the grout and is the
/// conduction-limiting wall.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CoaxialPipe {
    /// Inner pipe, inner radius
    pub r_in_in: Length,
    /// Inner pipe, outer radius
    pub r_in_out: Length,
    /// Outer pipe, inner radius
    pub r_out_in: Length,
    /// Outer pipe, outer radius
    pub r_out_out: Length,
    /// Surface roughness (absolute)
    pub roughness: Length,
    /// Inner pipe wall thermal conductivity
    pub k_inner: ThermalConductivity,
    /// Outer pipe wall thermal conductivity
    pub k_outer: ThermalConductivity,
    /// Pipe wall volumetric heat capacity
    pub rho_cp: VolHeatCapacity,
}

impl CoaxialPipe {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        r_in_in: Length,
        r_in_out: Length,
        r_out_in: Length,
        r_out_out: Length,
        roughness: Length,
        k_inner: ThermalConductivity,
        k_outer: ThermalConductivity,
        rho_cp: VolHeatCapacity,
    ) -> Self {
        Self {
            r_in_in,
            r_in_out,
            r_out_in,
            r_out_out,
            roughness,
            k_inner,
            k_outer,
            rho_cp,
        }
    }
}
