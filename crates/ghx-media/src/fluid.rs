//! Circulating fluid properties.

use ghx_core::units::{Density, DynVisc, SpecHeatCapacity, ThermalConductivity};
use ghx_core::{jpkgk, kgpm3, pas, wpmk};

/// Constant-property circulating fluid.
///
/// Properties are evaluated at the design mean fluid temperature and held
/// constant over a simulation; the resistance models only need rho, mu, cp
/// and k.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Fluid {
    /// Density
    pub rho: Density,
    /// Dynamic viscosity
    pub mu: DynVisc,
    /// Specific heat capacity
    pub cp: SpecHeatCapacity,
    /// Thermal conductivity
    pub k: ThermalConductivity,
}

impl Fluid {
    pub fn new(rho: Density, mu: DynVisc, cp: SpecHeatCapacity, k: ThermalConductivity) -> Self {
        Self { rho, mu, cp, k }
    }

    /// Pure water at 20 °C.
    pub fn water() -> Self {
        Self::new(kgpm3(998.2), pas(1.002e-3), jpkgk(4182.0), wpmk(0.598))
    }

    /// Prandtl number, mu·cp/k.
    pub fn prandtl(&self) -> f64 {
        self.mu.value * self.cp.value / self.k.value
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn water_prandtl_near_seven() {
        let pr = Fluid::water().prandtl();
        assert!(pr > 6.5 && pr < 7.5, "Pr = {pr}");
    }
}
