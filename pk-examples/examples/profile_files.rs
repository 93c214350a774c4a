//! Contact between measured profiles read from disk.
//!
//! Profiles and parameters live in `pk-examples/data`. Pass a different
//! directory as the first argument to use other files named `wheel.txt`,
//! `rail.txt` and `contact.toml`.

use std::{env, fs, path::PathBuf};

use pk_contact::{
    ContactInput, ContactParameters, PkContact,
    profile::read::{ReadOptions, read_profile},
};
use pk_core::Model;
use pk_plot::PlotApp;
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let data = env::args_os().nth(1).map_or_else(
        || PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("data"),
        PathBuf::from,
    );

    let parameters: ContactParameters =
        toml::from_str(&fs::read_to_string(data.join("contact.toml")).unwrap()).unwrap();
    let wheel = read_profile(data.join("wheel.txt"), ReadOptions::wheel()).unwrap();
    let rail = read_profile(data.join("rail.txt"), ReadOptions::rail()).unwrap();

    let model = PkContact::new(&parameters).unwrap();
    let input = ContactInput {
        wheel: wheel.clone(),
        rail: rail.clone(),
    };
    let solution = model.call(&input).unwrap();

    println!("{} contact patch(es)", solution.patches.len());
    for (pressure, [y, z]) in solution.pressures.iter().zip(solution.contact_points()) {
        println!(
            "patch {} at ({y:.2}, {z:.4}) mm: max pressure {:.1} MPa",
            pressure.patch, pressure.max_pressure
        );
    }

    PlotApp::new()
        .add_series("wheel", &wheel.points())
        .add_series("rail", &rail.points())
        .add_markers("contact point", &solution.contact_points())
        .run("Wheel and rail profiles")
        .unwrap();
}
