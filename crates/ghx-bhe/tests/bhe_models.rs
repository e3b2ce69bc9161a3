//! Integration tests for the borehole heat exchanger models.

use ghx_bhe::{AnyBhe, BoreholeHeatExchanger, CoaxialBhe, MultipleUTube, SingleUTube};
use ghx_core::{Tolerances, celsius, jpm3k, kgps, m, nearly_equal, wpmk};
use ghx_media::{Borehole, CoaxialPipe, Fluid, Grout, Pipe, Soil};

fn borehole() -> Borehole {
    Borehole::new(m(100.0), m(2.0), m(0.075), 0.0, 0.0)
}

fn grout() -> Grout {
    Grout::new(wpmk(1.0), jpm3k(2_000_000.0))
}

fn soil() -> Soil {
    Soil::new(wpmk(2.0), jpm3k(3_901_000.0), celsius(20.0))
}

fn single_u_pipe() -> Pipe {
    let r_in = m(0.0108);
    let r_out = m(0.013_33);
    let s = m(0.0323);
    let pos = Pipe::place_pipes(s, r_out, 1);
    Pipe::new(pos, r_in, r_out, s, m(1e-6), wpmk(0.4), jpm3k(1_542_000.0))
}

fn double_u_pipe() -> Pipe {
    let r_in = m(0.0108);
    let r_out = m(0.013_33);
    let s = m(0.0323);
    let pos = Pipe::place_pipes(s, r_out, 2);
    Pipe::new(pos, r_in, r_out, s, m(1e-6), wpmk(0.4), jpm3k(1_542_000.0))
}

fn coaxial_pipe() -> CoaxialPipe {
    CoaxialPipe::new(
        m(0.0221),
        m(0.025),
        m(0.0487),
        m(0.055),
        m(1e-6),
        wpmk(0.4),
        wpmk(0.4),
        jpm3k(1_542_000.0),
    )
}

#[test]
fn single_u_tube_resistances_are_ordered() {
    let bhe = SingleUTube::new(
        kgps(0.2),
        Fluid::water(),
        borehole(),
        single_u_pipe(),
        grout(),
        soil(),
    )
    .unwrap();

    let r_fp = bhe.fluid_to_pipe_resistance();
    let r_local = bhe.borehole_resistance();
    let r_eff = bhe.effective_borehole_resistance();
    assert!(r_fp > 0.0);
    assert!(r_local > 0.0);
    // Short-circuit correction only ever adds resistance
    assert!(r_eff > r_local);
    // Fluid-to-pipe is one leg of the full path to the wall
    assert!(r_fp < r_eff);
}

#[test]
fn effective_resistance_decreases_with_grout_conductivity() {
    let mut bhe = SingleUTube::new(
        kgps(0.2),
        Fluid::water(),
        borehole(),
        single_u_pipe(),
        grout(),
        soil(),
    )
    .unwrap();

    let r_low = bhe.effective_borehole_resistance();
    bhe.grout.k = wpmk(2.5);
    let r_high_k = bhe.update_thermal_resistance(None).unwrap();
    assert!(r_high_k < r_low);
}

#[test]
fn fluid_to_pipe_resistance_decreases_with_pipe_conductivity() {
    let mut bhe = SingleUTube::new(
        kgps(0.2),
        Fluid::water(),
        borehole(),
        single_u_pipe(),
        grout(),
        soil(),
    )
    .unwrap();

    let before = bhe.fluid_to_pipe_resistance();
    bhe.pipe.k = wpmk(0.8);
    bhe.update_thermal_resistance(None).unwrap();
    assert!(bhe.fluid_to_pipe_resistance() < before);
}

#[test]
fn fluid_to_pipe_resistance_sums_leg_components() {
    let single = SingleUTube::new(
        kgps(0.2),
        Fluid::water(),
        borehole(),
        single_u_pipe(),
        grout(),
        soil(),
    )
    .unwrap();
    assert!(single.convective_resistance() > 0.0);
    assert!(single.pipe_wall_resistance() > 0.0);
    assert!(nearly_equal(
        single.convective_resistance() + single.pipe_wall_resistance(),
        single.fluid_to_pipe_resistance(),
        Tolerances::default(),
    ));

    let double = MultipleUTube::new(
        kgps(0.2),
        Fluid::water(),
        borehole(),
        double_u_pipe(),
        grout(),
        soil(),
    )
    .unwrap();
    assert!(nearly_equal(
        double.convective_resistance() + double.pipe_wall_resistance(),
        double.fluid_to_pipe_resistance(),
        Tolerances::default(),
    ));
}

#[test]
fn flow_override_updates_stored_rate_and_film_coefficient() {
    let mut bhe = SingleUTube::new(
        kgps(0.2),
        Fluid::water(),
        borehole(),
        single_u_pipe(),
        grout(),
        soil(),
    )
    .unwrap();

    let h_before = bhe.film_coefficient();
    bhe.update_thermal_resistance(Some(kgps(0.4))).unwrap();
    assert_eq!(bhe.flow_rate().value, 0.4);
    assert!(bhe.film_coefficient() > h_before);
}

#[test]
fn clones_do_not_share_state() {
    let original = SingleUTube::new(
        kgps(0.2),
        Fluid::water(),
        borehole(),
        single_u_pipe(),
        grout(),
        soil(),
    )
    .unwrap();

    let r_before = original.effective_borehole_resistance();
    let mut copy = original.clone();
    copy.grout.k = wpmk(5.0);
    copy.update_thermal_resistance(None).unwrap();

    assert_eq!(original.effective_borehole_resistance(), r_before);
    assert!(copy.effective_borehole_resistance() < r_before);
}

#[test]
fn double_u_tube_beats_single_u_tube() {
    let single = SingleUTube::new(
        kgps(0.2),
        Fluid::water(),
        borehole(),
        single_u_pipe(),
        grout(),
        soil(),
    )
    .unwrap();
    let double = MultipleUTube::new(
        kgps(0.2),
        Fluid::water(),
        borehole(),
        double_u_pipe(),
        grout(),
        soil(),
    )
    .unwrap();

    assert_eq!(double.n_pipes(), 4);
    // More parallel pipe surface lowers the borehole resistance
    assert!(double.effective_borehole_resistance() < single.effective_borehole_resistance());
}

#[test]
fn multiple_u_tube_rejects_single_pair() {
    let err = MultipleUTube::new(
        kgps(0.2),
        Fluid::water(),
        borehole(),
        single_u_pipe(),
        grout(),
        soil(),
    )
    .unwrap_err();
    assert!(err.to_string().contains("pipe pairs"));
}

#[test]
fn single_u_tube_rejects_oversized_pipes() {
    let r_in = m(0.05);
    let r_out = m(0.06);
    let s = m(0.04);
    let pos = Pipe::place_pipes(s, r_out, 1);
    let pipe = Pipe::new(pos, r_in, r_out, s, m(1e-6), wpmk(0.4), jpm3k(1_542_000.0));
    assert!(
        SingleUTube::new(kgps(0.2), Fluid::water(), borehole(), pipe, grout(), soil()).is_err()
    );
}

#[test]
fn zero_flow_rejected() {
    assert!(
        SingleUTube::new(
            kgps(0.0),
            Fluid::water(),
            borehole(),
            single_u_pipe(),
            grout(),
            soil(),
        )
        .is_err()
    );
}

#[test]
fn coaxial_resistances_positive_and_ordered() {
    let bhe = CoaxialBhe::new(
        kgps(0.3),
        Fluid::water(),
        borehole(),
        coaxial_pipe(),
        grout(),
        soil(),
    )
    .unwrap();

    assert!(bhe.fluid_to_pipe_resistance() > 0.0);
    assert!(bhe.effective_borehole_resistance() > bhe.borehole_resistance());
    assert!(bhe.borehole_resistance() > bhe.fluid_to_pipe_resistance());
    assert!(bhe.annulus_film_coefficient() > 0.0);
    assert!(bhe.center_film_coefficient() > 0.0);
}

#[test]
fn coaxial_rejects_unnested_radii() {
    let bad = CoaxialPipe::new(
        m(0.025),
        m(0.0221), // inner radii swapped
        m(0.0487),
        m(0.055),
        m(1e-6),
        wpmk(0.4),
        wpmk(0.4),
        jpm3k(1_542_000.0),
    );
    assert!(
        CoaxialBhe::new(kgps(0.3), Fluid::water(), borehole(), bad, grout(), soil()).is_err()
    );
}

#[test]
fn variant_delegates_capabilities() {
    let single = SingleUTube::new(
        kgps(0.2),
        Fluid::water(),
        borehole(),
        single_u_pipe(),
        grout(),
        soil(),
    )
    .unwrap();
    let r_eff = single.effective_borehole_resistance();
    let r_fp = single.fluid_to_pipe_resistance();

    let mut any: AnyBhe = single.into();
    assert_eq!(any.kind(), "single U-tube");
    assert_eq!(any.effective_borehole_resistance(), r_eff);
    assert_eq!(any.fluid_to_pipe_resistance(), r_fp);
    assert_eq!(any.borehole().radius.value, 0.075);

    let recomputed = any.update_thermal_resistance(None).unwrap();
    assert!(nearly_equal(recomputed, r_eff, Tolerances::default()));
}
