use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::config::{FOOD_POINTS, GameConfig, GridSize};
use crate::food::place_food;
use crate::input::Heading;
use crate::snake::{Position, Snake};

/// Engine lifecycle phase.
///
/// All abnormal situations are phase transitions, never errors: running
/// into a wall or the body ends in `Over`, filling the whole board ends in
/// `Won`.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum Phase {
    Ready,
    Running,
    Paused,
    Over,
    Won,
}

/// Why a run ended in `Phase::Over`.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum OverCause {
    Wall,
    SelfHit,
}

/// Complete mutable game state for one session.
///
/// The driver is the sole scheduler of mutation: it calls [`tick`] on its
/// own cadence and forwards direction commands through [`set_heading`].
/// Renderers read the public fields between ticks and never write them.
///
/// [`tick`]: GameState::tick
/// [`set_heading`]: GameState::set_heading
#[derive(Debug, Clone)]
pub struct GameState {
    pub snake: Snake,
    pub food: Position,
    pub score: u32,
    pub phase: Phase,
    pub over_cause: Option<OverCause>,
    pub tick_count: u64,
    /// Committed direction of travel; `None` until the first move.
    pub heading: Option<Heading>,
    pending_heading: Option<Heading>,
    grid: GridSize,
    rng: StdRng,
}

impl GameState {
    /// Creates a state with an entropy-seeded food sequence.
    #[must_use]
    pub fn new(config: GameConfig) -> Self {
        Self::from_rng(config, StdRng::from_entropy())
    }

    /// Creates a deterministic state for tests and reproducible runs.
    #[must_use]
    pub fn new_with_seed(config: GameConfig, seed: u64) -> Self {
        Self::from_rng(config, StdRng::seed_from_u64(seed))
    }

    fn from_rng(config: GameConfig, mut rng: StdRng) -> Self {
        let snake = Snake::new(start_cell(config.grid));
        let food = initial_food(&mut rng, config.grid, &snake);

        Self {
            snake,
            food,
            score: 0,
            phase: start_phase(config.start_running),
            over_cause: None,
            tick_count: 0,
            heading: None,
            pending_heading: None,
            grid: config.grid,
            rng,
        }
    }

    /// Returns the grid bounds.
    #[must_use]
    pub fn grid(&self) -> GridSize {
        self.grid
    }

    /// Buffers a direction command for the next tick.
    ///
    /// A heading that exactly reverses the current direction of travel is
    /// ignored, so the head can never turn straight into its neck. The
    /// first heading of a run is always accepted. Commands arriving within
    /// one tick window overwrite each other; only the last accepted one
    /// takes effect. No-op outside `Running`.
    pub fn set_heading(&mut self, requested: Heading) {
        if self.phase != Phase::Running {
            return;
        }

        if let Some(current) = self.heading {
            if requested == current.opposite() {
                return;
            }
        }

        self.pending_heading = Some(requested);
    }

    /// Advances the simulation by one movement step.
    ///
    /// No-op unless the phase is `Running`. Collisions are detected before
    /// the body is touched, so after a fatal tick the pre-tick body is
    /// still observable for rendering.
    pub fn tick(&mut self) {
        if self.phase != Phase::Running {
            return;
        }

        if let Some(next) = self.pending_heading.take() {
            self.heading = Some(next);
        }

        // Until the first direction command arrives the snake stays put.
        let Some(heading) = self.heading else {
            return;
        };

        let (dx, dy) = heading.delta();
        let new_head = self.snake.head().offset(dx, dy);

        if !new_head.is_within_bounds(self.grid) {
            self.phase = Phase::Over;
            self.over_cause = Some(OverCause::Wall);
            return;
        }

        let eats = new_head == self.food;
        // The tail cell is vacated this tick unless the snake grows, so
        // moving into it only counts as a collision on a growth tick.
        if self.snake.collides_with(new_head, !eats) {
            self.phase = Phase::Over;
            self.over_cause = Some(OverCause::SelfHit);
            return;
        }

        self.snake.advance(new_head, eats);
        self.tick_count += 1;

        if eats {
            self.score += FOOD_POINTS;
            match place_food(&mut self.rng, self.grid, &self.snake) {
                Some(cell) => self.food = cell,
                // No free cell left: the snake covers the board.
                None => self.phase = Phase::Won,
            }
        }
    }

    /// Leaves the start screen. No-op outside `Ready`.
    pub fn start(&mut self) {
        if self.phase == Phase::Ready {
            self.phase = Phase::Running;
        }
    }

    /// Suspends the run. No-op outside `Running`.
    pub fn pause(&mut self) {
        if self.phase == Phase::Running {
            self.phase = Phase::Paused;
        }
    }

    /// Resumes a suspended run. No-op outside `Paused`.
    pub fn resume(&mut self) {
        if self.phase == Phase::Paused {
            self.phase = Phase::Running;
        }
    }

    /// Rebuilds the session from scratch on the same grid: one-cell snake
    /// at the start cell, headings unset, score zero, fresh food.
    ///
    /// The phase comes out as `Running` when `start_running` is set and as
    /// `Ready` otherwise, supporting both driver conventions.
    pub fn reset(&mut self, start_running: bool) {
        let snake = Snake::new(start_cell(self.grid));
        self.food = initial_food(&mut self.rng, self.grid, &snake);
        self.snake = snake;
        self.score = 0;
        self.phase = start_phase(start_running);
        self.over_cause = None;
        self.tick_count = 0;
        self.heading = None;
        self.pending_heading = None;
    }
}

/// Canonical start cell: the grid center.
fn start_cell(grid: GridSize) -> Position {
    Position {
        x: i32::from(grid.width / 2),
        y: i32::from(grid.height / 2),
    }
}

fn start_phase(start_running: bool) -> Phase {
    if start_running {
        Phase::Running
    } else {
        Phase::Ready
    }
}

fn initial_food(rng: &mut StdRng, grid: GridSize, snake: &Snake) -> Position {
    place_food(rng, grid, snake)
        .expect("a freshly reset board always has a free cell for food")
}
