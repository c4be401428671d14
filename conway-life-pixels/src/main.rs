#![deny(clippy::all)]
#![forbid(unsafe_code)]

use life_engine::{Controller, PatternCatalog};
use life_pixels_support::{animate, log_error, AnimateError, DeadlineScheduler};
use log::info;
use winit::dpi::PhysicalSize;

const WINDOW_WIDTH: u32 = 1000;
const WINDOW_HEIGHT: u32 = 700;

fn main() -> Result<(), AnimateError> {
    env_logger::init();
    run().inspect_err(|err| log_error("main", err))
}

fn run() -> Result<(), AnimateError> {
    let catalog = PatternCatalog::builtin()?;
    info!(
        "Patterns: {}",
        catalog
            .iter()
            .enumerate()
            .map(|(index, pattern)| format!("{}={}", index + 1, pattern.name()))
            .collect::<Vec<_>>()
            .join(", ")
    );

    animate(
        "Conway's Game of Life",
        PhysicalSize::new(WINDOW_WIDTH, WINDOW_HEIGHT),
        catalog,
        |window_size, pattern| {
            Controller::new(
                window_size.width,
                window_size.height,
                pattern.cell_size(),
                pattern.clone(),
                DeadlineScheduler::new(),
            )
        },
    )
}
