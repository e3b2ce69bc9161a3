//! Grout and soil properties.

use ghx_core::units::{Temperature, ThermalConductivity, VolHeatCapacity};

/// Borehole grout (backfill) properties.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Grout {
    /// Thermal conductivity
    pub k: ThermalConductivity,
    /// Volumetric heat capacity
    pub rho_cp: VolHeatCapacity,
}

impl Grout {
    pub fn new(k: ThermalConductivity, rho_cp: VolHeatCapacity) -> Self {
        Self { k, rho_cp }
    }
}

/// Soil properties surrounding the borehole.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Soil {
    /// Thermal conductivity
    pub k: ThermalConductivity,
    /// Volumetric heat capacity
    pub rho_cp: VolHeatCapacity,
    /// Undisturbed ground temperature
    pub undisturbed_temp: Temperature,
}

impl Soil {
    pub fn new(k: ThermalConductivity, rho_cp: VolHeatCapacity, undisturbed_temp: Temperature) -> Self {
        Self {
            k,
            rho_cp,
            undisturbed_temp,
        }
    }
}
