//! Closed tagged variant over the supported heat exchanger models.

use ghx_core::units::MassRate;
use ghx_media::Borehole;

use crate::coaxial::CoaxialBhe;
use crate::error::BheResult;
use crate::multiple_u_tube::MultipleUTube;
use crate::single_u_tube::SingleUTube;
use crate::traits::BoreholeHeatExchanger;

/// Any supported borehole heat exchanger.
///
/// Non-exhaustive so downstream dispatch (the equivalence engine in
/// particular) stays total when new internal geometries are added.
#[non_exhaustive]
#[derive(Debug, Clone)]
pub enum AnyBhe {
    SingleUTube(SingleUTube),
    MultipleUTube(MultipleUTube),
    Coaxial(CoaxialBhe),
}

impl AnyBhe {
    /// Human-readable variant tag for diagnostics.
    pub fn kind(&self) -> &'static str {
        match self {
            AnyBhe::SingleUTube(_) => "single U-tube",
            AnyBhe::MultipleUTube(_) => "multiple U-tube",
            AnyBhe::Coaxial(_) => "coaxial",
        }
    }
}

impl From<SingleUTube> for AnyBhe {
    fn from(bhe: SingleUTube) -> Self {
        AnyBhe::SingleUTube(bhe)
    }
}

impl From<MultipleUTube> for AnyBhe {
    fn from(bhe: MultipleUTube) -> Self {
        AnyBhe::MultipleUTube(bhe)
    }
}

impl From<CoaxialBhe> for AnyBhe {
    fn from(bhe: CoaxialBhe) -> Self {
        AnyBhe::Coaxial(bhe)
    }
}

impl BoreholeHeatExchanger for AnyBhe {
    fn borehole(&self) -> &Borehole {
        match self {
            AnyBhe::SingleUTube(bhe) => bhe.borehole(),
            AnyBhe::MultipleUTube(bhe) => bhe.borehole(),
            AnyBhe::Coaxial(bhe) => bhe.borehole(),
        }
    }

    fn flow_rate(&self) -> MassRate {
        match self {
            AnyBhe::SingleUTube(bhe) => bhe.flow_rate(),
            AnyBhe::MultipleUTube(bhe) => bhe.flow_rate(),
            AnyBhe::Coaxial(bhe) => bhe.flow_rate(),
        }
    }

    fn update_thermal_resistance(&mut self, m_flow_borehole: Option<MassRate>) -> BheResult<f64> {
        match self {
            AnyBhe::SingleUTube(bhe) => bhe.update_thermal_resistance(m_flow_borehole),
            AnyBhe::MultipleUTube(bhe) => bhe.update_thermal_resistance(m_flow_borehole),
            AnyBhe::Coaxial(bhe) => bhe.update_thermal_resistance(m_flow_borehole),
        }
    }

    fn fluid_to_pipe_resistance(&self) -> f64 {
        match self {
            AnyBhe::SingleUTube(bhe) => bhe.fluid_to_pipe_resistance(),
            AnyBhe::MultipleUTube(bhe) => bhe.fluid_to_pipe_resistance(),
            AnyBhe::Coaxial(bhe) => bhe.fluid_to_pipe_resistance(),
        }
    }

    fn effective_borehole_resistance(&self) -> f64 {
        match self {
            AnyBhe::SingleUTube(bhe) => bhe.effective_borehole_resistance(),
            AnyBhe::MultipleUTube(bhe) => bhe.effective_borehole_resistance(),
            AnyBhe::Coaxial(bhe) => bhe.effective_borehole_resistance(),
        }
    }
}
