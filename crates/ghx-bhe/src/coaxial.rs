//! Coaxial (concentric tube) heat exchanger model.

use std::f64::consts::PI;

use ghx_core::units::MassRate;
use ghx_media::{Borehole, CoaxialPipe, Fluid, Grout, Soil};

use crate::convection::{film_coefficient_annulus, film_coefficient_circular_pipe};
use crate::error::{BheError, BheResult, check_finite};
use crate::traits::BoreholeHeatExchanger;

#[derive(Debug, Clone, Copy, Default)]
struct CoaxialState {
    /// Film coefficient in the central passage, W/m²·K
    h_center: f64,
    /// Film coefficient in the annulus, W/m²·K
    h_annulus: f64,
    /// Fluid-to-pipe resistance, m·K/W
    r_fp: f64,
    resist_bh: f64,
    resist_bh_effective: f64,
}

/// Pipe-in-pipe exchanger: central downward passage inside an annulus that
/// exchanges heat with the grout through the outer pipe wall.
#[derive(Debug, Clone)]
pub struct CoaxialBhe {
    pub m_flow_borehole: MassRate,
    pub fluid: Fluid,
    pub b: Borehole,
    pub pipe: CoaxialPipe,
    pub grout: Grout,
    pub soil: Soil,
    state: CoaxialState,
}

impl CoaxialBhe {
    pub fn new(
        m_flow_borehole: MassRate,
        fluid: Fluid,
        b: Borehole,
        pipe: CoaxialPipe,
        grout: Grout,
        soil: Soil,
    ) -> BheResult<Self> {
        let radii_ordered = pipe.r_in_in.value > 0.0
            && pipe.r_in_out.value > pipe.r_in_in.value
            && pipe.r_out_in.value > pipe.r_in_out.value
            && pipe.r_out_out.value > pipe.r_out_in.value;
        if !radii_ordered {
            return Err(BheError::NonPhysical {
                what: "coaxial radii must be strictly nested",
            });
        }
        if pipe.r_out_out.value >= b.radius.value {
            return Err(BheError::NonPhysical {
                what: "outer pipe extends beyond borehole wall",
            });
        }
        let mut bhe = Self {
            m_flow_borehole,
            fluid,
            b,
            pipe,
            grout,
            soil,
            state: CoaxialState::default(),
        };
        bhe.update_thermal_resistance(None)?;
        Ok(bhe)
    }

    /// Annulus film coefficient from the latest update, W/m²·K.
    pub fn annulus_film_coefficient(&self) -> f64 {
        self.state.h_annulus
    }

    /// Central-passage film coefficient from the latest update, W/m²·K.
    pub fn center_film_coefficient(&self) -> f64 {
        self.state.h_center
    }

    /// Local (uncorrected) borehole resistance from the latest update, m·K/W.
    pub fn borehole_resistance(&self) -> f64 {
        self.state.resist_bh
    }
}

impl BoreholeHeatExchanger for CoaxialBhe {
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
        let m_flow = self.m_flow_borehole.value;
        if m_flow <= 0.0 {
            return Err(BheError::NonPhysical {
                what: "borehole mass flow rate must be positive",
            });
        }

        let h_center = film_coefficient_circular_pipe(
            m_flow,
            self.pipe.r_in_in.value,
            self.pipe.roughness.value,
            &self.fluid,
        );
        let h_annulus = film_coefficient_annulus(
            m_flow,
            self.pipe.r_in_out.value,
            self.pipe.r_out_in.value,
            self.pipe.roughness.value,
            &self.fluid,
        );

        // Only the outer pipe wall separates fluid from grout
        let r_conv = 1.0 / (h_annulus * 2.0 * PI * self.pipe.r_out_in.value);
        let r_p = (self.pipe.r_out_out.value / self.pipe.r_out_in.value).ln()
            / (2.0 * PI * self.pipe.k_outer.value);
        let r_fp = r_conv + r_p;

        let r_grout = (self.b.radius.value / self.pipe.r_out_out.value).ln()
            / (2.0 * PI * self.grout.k.value);
        let resist_bh = r_fp + r_grout;

        // Short-circuit path: central flow to annulus through the inner pipe
        let r_a = 1.0 / (h_center * 2.0 * PI * self.pipe.r_in_in.value)
            + (self.pipe.r_in_out.value / self.pipe.r_in_in.value).ln()
                / (2.0 * PI * self.pipe.k_inner.value)
            + 1.0 / (h_annulus * 2.0 * PI * self.pipe.r_in_out.value);

        let h_over_mcp = self.b.height.value / (m_flow * self.fluid.cp.value);
        let resist_bh_effective = resist_bh + h_over_mcp * h_over_mcp / (3.0 * r_a);
        check_finite(resist_bh_effective, "effective borehole resistance")?;

        self.state = CoaxialState {
            h_center,
            h_annulus,
            r_fp,
            resist_bh,
            resist_bh_effective,
        };
        Ok(resist_bh_effective)
    }

    fn fluid_to_pipe_resistance(&self) -> f64 {
        self.state.r_fp
    }

    fn effective_borehole_resistance(&self) -> f64 {
        self.state.resist_bh_effective
    }
}
