#![deny(clippy::all)]
#![forbid(unsafe_code)]

mod catalog;
mod config;
mod controller;
mod engine;
mod error;
mod input;
mod pattern;
mod scheduler;

pub use catalog::PatternCatalog;
pub use config::EngineConfig;
pub use controller::{BoardObserver, Controller, RunState};
pub use engine::{cell_fate, SimulationEngine};
pub use error::{LifeError, PatternError};
pub use input::PointerMapper;
pub use life_grid::{Board, Loc};
pub use pattern::Pattern;
pub use scheduler::{ManualScheduler, Scheduler, TickToken};
