use ratatui::style::Color;
use thiserror::Error;

/// Logical grid dimensions passed through the game as a named type.
///
/// Makes width vs. height unambiguous at every call site instead of an
/// anonymous `(u16, u16)` tuple.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct GridSize {
    pub width: u16,
    pub height: u16,
}

impl GridSize {
    /// Returns the total number of cells in the grid.
    #[must_use]
    pub fn total_cells(self) -> usize {
        usize::from(self.width) * usize::from(self.height)
    }
}

impl Default for GridSize {
    fn default() -> Self {
        Self {
            width: DEFAULT_GRID_WIDTH,
            height: DEFAULT_GRID_HEIGHT,
        }
    }
}

/// Engine construction parameters supplied by the driver.
#[derive(Debug, Clone, Copy)]
pub struct GameConfig {
    pub grid: GridSize,
    /// Phase after construction and reset: `Running` when set, `Ready`
    /// otherwise (the driver then issues an explicit start command).
    pub start_running: bool,
}

impl GameConfig {
    /// Validates and builds a config.
    ///
    /// The grid must hold at least the one-cell starting snake plus one
    /// free cell for food.
    pub fn new(grid: GridSize, start_running: bool) -> Result<Self, ConfigError> {
        if grid.width == 0 || grid.height == 0 || grid.total_cells() < 2 {
            return Err(ConfigError::GridTooSmall {
                width: grid.width,
                height: grid.height,
            });
        }

        Ok(Self {
            grid,
            start_running,
        })
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            grid: GridSize::default(),
            start_running: false,
        }
    }
}

/// Invalid driver-supplied configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("grid {width}x{height} is too small: needs room for the snake and one food cell")]
    GridTooSmall { width: u16, height: u16 },
    #[error("tick interval must be greater than zero")]
    ZeroTickInterval,
    #[error("unknown theme '{name}' (available: classic, ocean, neon)")]
    UnknownTheme { name: String },
}

/// Default grid width in cells.
pub const DEFAULT_GRID_WIDTH: u16 = 20;

/// Default grid height in cells.
pub const DEFAULT_GRID_HEIGHT: u16 = 20;

/// Score granted per food eaten.
pub const FOOD_POINTS: u32 = 10;

/// Default interval between movement ticks in milliseconds.
pub const DEFAULT_TICK_INTERVAL_MS: u64 = 150;

/// Random draws attempted before food placement falls back to scanning
/// the free cells directly.
pub const FOOD_SAMPLE_ATTEMPTS: u32 = 64;

/// Snake head glyphs by direction of travel.
pub const GLYPH_SNAKE_HEAD_UP: &str = "▲";
pub const GLYPH_SNAKE_HEAD_DOWN: &str = "▼";
pub const GLYPH_SNAKE_HEAD_LEFT: &str = "◀";
pub const GLYPH_SNAKE_HEAD_RIGHT: &str = "▶";

/// Head glyph before the first heading is set.
pub const GLYPH_SNAKE_HEAD_IDLE: &str = "●";

/// Body segment glyph.
pub const GLYPH_SNAKE_BODY: &str = "█";

/// Tail segment glyph.
pub const GLYPH_SNAKE_TAIL: &str = "▓";

/// Food glyph.
pub const GLYPH_FOOD: &str = "●";

/// A color theme applied to all visual elements.
#[derive(Debug)]
pub struct Theme {
    pub name: &'static str,
    pub snake_head: Color,
    pub snake_body: Color,
    pub snake_tail: Color,
    pub food: Color,
    pub border_fg: Color,
    pub score_fg: Color,
    pub menu_title: Color,
    pub menu_footer: Color,
}

/// Green snake on dark, after the original canvas colors.
pub const THEME_CLASSIC: Theme = Theme {
    name: "classic",
    snake_head: Color::White,
    snake_body: Color::Green,
    snake_tail: Color::DarkGray,
    food: Color::Red,
    border_fg: Color::White,
    score_fg: Color::White,
    menu_title: Color::Green,
    menu_footer: Color::DarkGray,
};

/// Ocean cyan theme.
pub const THEME_OCEAN: Theme = Theme {
    name: "ocean",
    snake_head: Color::White,
    snake_body: Color::Cyan,
    snake_tail: Color::DarkGray,
    food: Color::Yellow,
    border_fg: Color::Cyan,
    score_fg: Color::Cyan,
    menu_title: Color::Cyan,
    menu_footer: Color::DarkGray,
};

/// Neon magenta theme.
pub const THEME_NEON: Theme = Theme {
    name: "neon",
    snake_head: Color::White,
    snake_body: Color::Magenta,
    snake_tail: Color::DarkGray,
    food: Color::Yellow,
    border_fg: Color::Magenta,
    score_fg: Color::Magenta,
    menu_title: Color::Magenta,
    menu_footer: Color::DarkGray,
};

/// All built-in themes in cycle order.
pub const THEMES: &[Theme] = &[THEME_CLASSIC, THEME_OCEAN, THEME_NEON];

/// Looks up a built-in theme by case-insensitive name.
#[must_use]
pub fn theme_by_name(name: &str) -> Option<&'static Theme> {
    THEMES
        .iter()
        .find(|theme| theme.name.eq_ignore_ascii_case(name))
}

#[cfg(test)]
mod tests {
    use super::{GameConfig, GridSize, theme_by_name};

    #[test]
    fn default_grid_is_twenty_by_twenty() {
        let grid = GridSize::default();
        assert_eq!(grid.width, 20);
        assert_eq!(grid.height, 20);
        assert_eq!(grid.total_cells(), 400);
    }

    #[test]
    fn config_rejects_degenerate_grids() {
        assert!(GameConfig::new(GridSize { width: 0, height: 5 }, false).is_err());
        assert!(GameConfig::new(GridSize { width: 5, height: 0 }, false).is_err());
        assert!(GameConfig::new(GridSize { width: 1, height: 1 }, false).is_err());
    }

    #[test]
    fn config_accepts_minimal_playable_grid() {
        let config = GameConfig::new(GridSize { width: 2, height: 1 }, true)
            .expect("a 2x1 grid fits a snake and one food cell");
        assert!(config.start_running);
    }

    #[test]
    fn theme_lookup_is_case_insensitive() {
        assert_eq!(theme_by_name("Classic").map(|t| t.name), Some("classic"));
        assert_eq!(theme_by_name("OCEAN").map(|t| t.name), Some("ocean"));
        assert!(theme_by_name("plasma").is_none());
    }
}
