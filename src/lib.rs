//! Classic grid snake, split into a pure game engine and a terminal front end.
//!
//! The engine ([`game::GameState`]) owns the authoritative state: snake body,
//! food, heading, score, and lifecycle phase. It is advanced exclusively by
//! discrete [`game::GameState::tick`] calls from a driver that owns the tick
//! cadence, and steered through [`game::GameState::set_heading`]. Rendering
//! reads the state immutably after each tick and never mutates it.

pub mod config;
pub mod driver;
pub mod food;
pub mod game;
pub mod input;
pub mod renderer;
pub mod snake;
pub mod ui;
