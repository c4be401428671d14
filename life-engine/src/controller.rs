use crate::config::EngineConfig;
use crate::engine::SimulationEngine;
use crate::error::LifeError;
use crate::input::PointerMapper;
use crate::pattern::Pattern;
use crate::scheduler::{ManualScheduler, Scheduler, TickToken};
use life_grid::{Board, Loc};
use log::{debug, info, trace, warn};
use std::fmt;
use std::time::Duration;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RunState {
    Idle,
    Running,
    Paused,
}

/// Told whenever the current board changes: after each tick, step, reset and toggle.
pub trait BoardObserver {
    fn board_changed(&mut self, board: &Board, cell_size: u32);
}

/// Owns the current board and drives it through the run/pause/step state machine.
///
/// Ticks are delivered through [`Controller::on_tick`]. Only the token scheduled most
/// recently while running is honored, so a pause or reset takes effect immediately even
/// if the scheduler already released the previous tick.
pub struct Controller<S: Scheduler> {
    engine: SimulationEngine,
    config: EngineConfig,
    scheduler: S,
    observers: Vec<Box<dyn BoardObserver>>,
    width: u32,
    height: u32,
    cell_size: u32,
    pattern: Pattern,
    board: Board,
    state: RunState,
    pending_tick: Option<TickToken>,
    next_token_id: u64,
    generation: u64,
}

impl<S: Scheduler> Controller<S> {
    pub fn new(
        width: u32,
        height: u32,
        cell_size: u32,
        pattern: Pattern,
        scheduler: S,
    ) -> Result<Self, LifeError> {
        Self::with_config(
            width,
            height,
            cell_size,
            pattern,
            scheduler,
            EngineConfig::default(),
        )
    }

    pub fn with_config(
        width: u32,
        height: u32,
        cell_size: u32,
        pattern: Pattern,
        scheduler: S,
        config: EngineConfig,
    ) -> Result<Self, LifeError> {
        if config.tick_period.is_zero() {
            return Err(LifeError::ZeroTickPeriod);
        }
        let (columns, rows) = grid_dimensions(width, height, cell_size)?;
        let board = pattern.seeded_board(columns, rows);
        info!(
            "Seeded {columns}x{rows} board with {:?} ({} live cells)",
            pattern.name(),
            board.population()
        );
        Ok(Self {
            engine: SimulationEngine::new(&config),
            config,
            scheduler,
            observers: vec![],
            width,
            height,
            cell_size,
            pattern,
            board,
            state: RunState::Idle,
            pending_tick: None,
            next_token_id: 0,
            generation: 0,
        })
    }

    pub fn add_observer(&mut self, observer: Box<dyn BoardObserver>) {
        self.observers.push(observer);
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn state(&self) -> RunState {
        self.state
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn pattern(&self) -> &Pattern {
        &self.pattern
    }

    pub fn cell_size(&self) -> u32 {
        self.cell_size
    }

    pub fn tick_period(&self) -> Duration {
        self.config.tick_period
    }

    pub fn scheduler(&self) -> &S {
        &self.scheduler
    }

    pub fn scheduler_mut(&mut self) -> &mut S {
        &mut self.scheduler
    }

    pub fn start(&mut self) {
        if self.state == RunState::Running {
            trace!("Already running");
            return;
        }
        debug!("{:?} -> Running at generation {}", self.state, self.generation);
        self.state = RunState::Running;
        self.schedule_tick();
    }

    pub fn pause(&mut self) {
        if self.state != RunState::Running {
            return;
        }
        self.cancel_tick();
        self.state = RunState::Paused;
        debug!("Running -> Paused at generation {}", self.generation);
    }

    /// Advances exactly one generation and leaves the controller paused.
    pub fn step(&mut self) {
        self.cancel_tick();
        self.advance();
        if self.state != RunState::Paused {
            debug!("{:?} -> Paused after step", self.state);
        }
        self.state = RunState::Paused;
    }

    /// Reseeds the board from the current pattern and returns to idle.
    pub fn reset(&mut self) {
        self.cancel_tick();
        let (columns, rows) = (self.width / self.cell_size, self.height / self.cell_size);
        self.board = self.pattern.seeded_board(columns, rows);
        self.generation = 0;
        self.state = RunState::Idle;
        info!(
            "Reset to {:?} on {columns}x{rows} board ({} live cells)",
            self.pattern.name(),
            self.board.population()
        );
        self.notify();
    }

    pub fn change_filler(&mut self, pattern: Pattern, cell_size: u32) -> Result<(), LifeError> {
        grid_dimensions(self.width, self.height, cell_size)?;
        self.cancel_tick();
        self.pattern = pattern;
        self.cell_size = cell_size;
        self.reset();
        Ok(())
    }

    /// Flips one cell and returns its new state. Scheduling is unaffected.
    pub fn toggle_cell(&mut self, row: u32, col: u32) -> Result<bool, LifeError> {
        let loc = Loc::new(row, col);
        if !self.board.contains(loc) {
            warn!(
                "Ignoring toggle of ({row}, {col}) outside {}x{} board",
                self.board.rows(),
                self.board.columns()
            );
            return Err(LifeError::OutOfBounds {
                row,
                col,
                rows: self.board.rows(),
                columns: self.board.columns(),
            });
        }
        let alive = self.board.toggle(loc);
        self.notify();
        Ok(alive)
    }

    pub fn toggle_at(&mut self, x: f64, y: f64) -> Option<(Loc, bool)> {
        let loc = PointerMapper::new(self.cell_size).cell_at(x, y, &self.board)?;
        self.toggle_cell(loc.row, loc.col)
            .ok()
            .map(|alive| (loc, alive))
    }

    /// Delivers a due tick. Returns whether it advanced the board; stale or cancelled
    /// tokens are ignored.
    pub fn on_tick(&mut self, token: TickToken) -> bool {
        if self.state != RunState::Running || self.pending_tick != Some(token) {
            trace!("Ignoring stale tick {}", token.id());
            return false;
        }
        self.pending_tick = None;
        self.advance();
        self.schedule_tick();
        true
    }

    fn advance(&mut self) {
        self.board = self.engine.next_generation(&self.board);
        self.generation += 1;
        trace!(
            "Generation {}: {} live cells",
            self.generation,
            self.board.population()
        );
        self.notify();
    }

    fn schedule_tick(&mut self) {
        let token = TickToken::new(self.next_token_id);
        self.next_token_id += 1;
        self.pending_tick = Some(token);
        self.scheduler.schedule_once(token, self.config.tick_period);
    }

    fn cancel_tick(&mut self) {
        if let Some(token) = self.pending_tick.take() {
            self.scheduler.cancel(token);
        }
    }

    fn notify(&mut self) {
        for observer in &mut self.observers {
            observer.board_changed(&self.board, self.cell_size);
        }
    }
}

impl Controller<ManualScheduler> {
    pub fn advance_time(&mut self, elapsed: Duration) -> usize {
        let until = self.scheduler.now() + elapsed;
        let mut advanced = 0;
        while let Some(token) = self.scheduler.pop_due(until) {
            if self.on_tick(token) {
                advanced += 1;
            }
        }
        self.scheduler.advance_to(until);
        advanced
    }
}

impl<S: Scheduler> fmt::Debug for Controller<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Controller")
            .field("pattern", &self.pattern.name())
            .field("columns", &self.board.columns())
            .field("rows", &self.board.rows())
            .field("cell_size", &self.cell_size)
            .field("state", &self.state)
            .field("generation", &self.generation)
            .finish()
    }
}

fn grid_dimensions(width: u32, height: u32, cell_size: u32) -> Result<(u32, u32), LifeError> {
    if cell_size == 0 {
        return Err(LifeError::ZeroCellSize);
    }
    let (columns, rows) = (width / cell_size, height / cell_size);
    if columns == 0 || rows == 0 {
        return Err(LifeError::EmptyGrid {
            width,
            height,
            cell_size,
        });
    }
    Ok((columns, rows))
}
