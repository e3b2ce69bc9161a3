//! Multiple U-tube heat exchanger model.

use ghx_core::units::MassRate;
use ghx_media::{Borehole, Fluid, Grout, Pipe, Soil};

use crate::error::{BheError, BheResult};
use crate::traits::BoreholeHeatExchanger;
use crate::u_tube::{self, UTubeState};

/// Two or more U-tubes piped in parallel inside one borehole.
///
/// The pair count comes from `pipe.pos`; the borehole flow splits evenly
/// across the circuits.
#[derive(Debug, Clone)]
pub struct MultipleUTube {
    pub m_flow_borehole: MassRate,
    pub fluid: Fluid,
    pub b: Borehole,
    pub pipe: Pipe,
    pub grout: Grout,
    pub soil: Soil,
    state: UTubeState,
}

impl MultipleUTube {
    pub fn new(
        m_flow_borehole: MassRate,
        fluid: Fluid,
        b: Borehole,
        pipe: Pipe,
        grout: Grout,
        soil: Soil,
    ) -> BheResult<Self> {
        if pipe.pos.len() < 4 {
            return Err(BheError::InvalidArg {
                what: "multiple U-tube needs at least two pipe pairs",
            });
        }
        u_tube::validate_u_tube(&pipe, &b)?;
        let mut bhe = Self {
            m_flow_borehole,
            fluid,
            b,
            pipe,
            grout,
            soil,
            state: UTubeState::default(),
        };
        bhe.update_thermal_resistance(None)?;
        Ok(bhe)
    }

    /// Total pipe-leg count (2 × pair count).
    pub fn n_pipes(&self) -> usize {
        self.pipe.pos.len()
    }

    /// Fluid film coefficient from the latest update, W/m²·K.
    pub fn film_coefficient(&self) -> f64 {
        self.state.h_f
    }

    /// Per-leg convective resistance from the latest update, m·K/W.
    pub fn convective_resistance(&self) -> f64 {
        self.state.r_f
    }

    /// Per-leg pipe-wall conduction resistance from the latest update, m·K/W.
    pub fn pipe_wall_resistance(&self) -> f64 {
        self.state.r_p
    }
}

impl BoreholeHeatExchanger for MultipleUTube {
    fn borehole(&self) -> &Borehole {
        &self.b
    }

    fn flow_rate(&self) -> MassRate {
        self.m_flow_borehole
    }

    fn update_thermal_resistance(&mut self, m_flow_borehole: Option<MassRate>) -> BheResult<f64> {
        if let Some(m_flow) = m_flow_borehole {
            self.m_flow_borehole = m_flow;
        }
        self.state = u_tube::compute_state(
            self.m_flow_borehole,
            &self.fluid,
            &self.b,
            &self.pipe,
            &self.grout,
            &self.soil,
        )?;
        Ok(self.state.resist_bh_effective)
    }

    fn fluid_to_pipe_resistance(&self) -> f64 {
        self.state.r_fp
    }

    fn effective_borehole_resistance(&self) -> f64 {
        self.state.resist_bh_effective
    }
}
