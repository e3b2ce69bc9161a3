//! Convective film coefficient correlations.

use std::f64::consts::PI;

use ghx_media::Fluid;

/// Laminar Nusselt number, constant wall temperature
const NU_LAMINAR_PIPE: f64 = 3.66;

/// Laminar Nusselt number for an annulus, uniform heat flux limit
const NU_LAMINAR_ANNULUS: f64 = 4.36;

/// Laminar/turbulent transition Reynolds number
pub const RE_TRANSITION: f64 = 2300.0;

/// Darcy friction factor.
///
/// Laminar 64/Re below transition; turbulent via the Swamee-Jain
/// approximation to Colebrook-White.
pub fn darcy_friction_factor(reynolds: f64, rel_roughness: f64) -> f64 {
    if reynolds < RE_TRANSITION {
        64.0 / reynolds
    } else {
        let a = rel_roughness / 3.7;
        let b = 5.74 / reynolds.powf(0.9);
        let f = 0.25 / (a + b).log10().powi(2);
        f.max(0.0001) // Clamp to avoid issues
    }
}

/// Gnielinski Nusselt correlation for turbulent pipe flow.
fn gnielinski(reynolds: f64, prandtl: f64, f_darcy: f64) -> f64 {
    let f8 = f_darcy / 8.0;
    f8 * (reynolds - 1000.0) * prandtl / (1.0 + 12.7 * f8.sqrt() * (prandtl.powf(2.0 / 3.0) - 1.0))
}

/// Film coefficient inside a circular pipe (W/m²·K).
///
/// `m_flow_pipe` is the flow through one pipe, not the borehole total.
pub fn film_coefficient_circular_pipe(
    m_flow_pipe: f64,
    r_in: f64,
    roughness: f64,
    fluid: &Fluid,
) -> f64 {
    let diameter = 2.0 * r_in;
    let reynolds = 4.0 * m_flow_pipe / (PI * fluid.mu.value * diameter);
    let prandtl = fluid.prandtl();
    let nu = if reynolds < RE_TRANSITION {
        NU_LAMINAR_PIPE
    } else {
        let f = darcy_friction_factor(reynolds, roughness / diameter);
        gnielinski(reynolds, prandtl, f)
    };
    nu * fluid.k.value / diameter
}

/// Film coefficient in a concentric annulus (W/m²·K), hydraulic-diameter form.
///
/// `r_in_out` is the inner pipe's outer radius, `r_out_in` the outer pipe's
/// inner radius; the gap between them is the flow passage.
pub fn film_coefficient_annulus(
    m_flow: f64,
    r_in_out: f64,
    r_out_in: f64,
    roughness: f64,
    fluid: &Fluid,
) -> f64 {
    let d_h = 2.0 * (r_out_in - r_in_out);
    let area = PI * (r_out_in.powi(2) - r_in_out.powi(2));
    let velocity = m_flow / (fluid.rho.value * area);
    let reynolds = fluid.rho.value * velocity * d_h / fluid.mu.value;
    let prandtl = fluid.prandtl();
    let nu = if reynolds < RE_TRANSITION {
        NU_LAMINAR_ANNULUS
    } else {
        let f = darcy_friction_factor(reynolds, roughness / d_h);
        gnielinski(reynolds, prandtl, f)
    };
    nu * fluid.k.value / d_h
}
