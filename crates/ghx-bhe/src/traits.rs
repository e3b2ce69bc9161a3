//! Capability contract for heat exchanger models.

use ghx_core::units::MassRate;
use ghx_media::Borehole;

use crate::error::BheResult;

/// Capabilities every borehole heat exchanger model exposes to the
/// equivalence engine and the field-sizing pipeline.
pub trait BoreholeHeatExchanger {
    /// The borehole this exchanger is installed in.
    fn borehole(&self) -> &Borehole;

    /// Borehole-side mass flow rate.
    fn flow_rate(&self) -> MassRate;

    /// Recompute all derived thermal resistances from the current
    /// descriptors, optionally overriding the stored mass flow rate first.
    ///
    /// Returns the effective borehole resistance (m·K/W).
    fn update_thermal_resistance(&mut self, m_flow_borehole: Option<MassRate>) -> BheResult<f64>;

    /// Convective plus pipe-wall resistance between circulating fluid and
    /// the pipe's outer surface (m·K/W), excluding grout.
    fn fluid_to_pipe_resistance(&self) -> f64;

    /// Lumped fluid-to-borehole-wall resistance (m·K/W), accounting for pipe
    /// arrangement, grout conduction, and axial short-circuiting.
    fn effective_borehole_resistance(&self) -> f64;
}
