//! A wheel modelled as a circular arc resting on a flat rail.
//!
//! Run with `RUST_LOG=debug` to see the patch search and quadrature.

use pk_contact::{
    ContactInput, ContactParameters, PkContact, Profile,
    geometry::{ArcOptions, circular_arc},
};
use pk_core::Model;
use pk_plot::PlotApp;
use tracing_subscriber::EnvFilter;
use uom::si::{
    f64::{Length, Pressure},
    length::millimeter,
    pressure::gigapascal,
};

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let wheel = circular_arc(
        460.0,
        &ArcOptions {
            segments: 400,
            distance: Some(20.0),
            ..ArcOptions::default()
        },
    )
    .unwrap();

    let rail: Vec<[f64; 2]> = (0..=300)
        .map(|i| [-15.0 + f64::from(i) * 0.1, 0.0])
        .collect();

    let model = PkContact::new(&ContactParameters {
        youngs_modulus: Pressure::new::<gigapascal>(210.0),
        poisson_ratio: 0.28,
        rolling_radius: Length::new::<millimeter>(460.0),
        penetration: Length::new::<millimeter>(0.01 / 0.55),
        virtual_penetration: Length::new::<millimeter>(0.01),
    })
    .unwrap();

    let input = ContactInput {
        wheel: Profile::from_points(&wheel).unwrap(),
        rail: Profile::from_points(&rail).unwrap(),
    };
    let solution = model.call(&input).unwrap();

    for pressure in &solution.pressures {
        println!(
            "patch {}: load {:.3} N, max pressure {:.1} MPa",
            pressure.patch, pressure.load, pressure.max_pressure
        );
    }

    PlotApp::new()
        .add_series("wheel", &wheel)
        .add_series("rail", &rail)
        .add_markers("contact point", &solution.contact_points())
        .with_data_aspect(1.0)
        .run("Circular arc on a flat rail")
        .unwrap();
}
