use anyhow::Context;

use drag_and_throw::constants::{INITIAL_BODIES, WINDOW_HEIGHT, WINDOW_WIDTH};
use drag_and_throw::renderer::SfmlFrontend;
use drag_and_throw::{Arena, SimulationContext};

fn main() -> anyhow::Result<()> {
    let arena = Arena::new(WINDOW_WIDTH as _, WINDOW_HEIGHT as _);
    let mut sim =
        SimulationContext::new(arena, &INITIAL_BODIES).context("invalid initial bodies")?;

    let mut frontend = SfmlFrontend::open()?;
    sim.run(&mut frontend);

    Ok(())
}
