use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph};
use unicode_width::UnicodeWidthStr;

use crate::config::{
    GLYPH_FOOD, GLYPH_SNAKE_BODY, GLYPH_SNAKE_HEAD_DOWN, GLYPH_SNAKE_HEAD_IDLE,
    GLYPH_SNAKE_HEAD_LEFT, GLYPH_SNAKE_HEAD_RIGHT, GLYPH_SNAKE_HEAD_UP, GLYPH_SNAKE_TAIL,
    GridSize, Theme,
};
use crate::game::{GameState, Phase};
use crate::input::Heading;
use crate::snake::Position;
use crate::ui::menu::{render_over_menu, render_pause_menu, render_start_menu, render_win_menu};

const TITLE: &str = "GRID SNAKE";

/// Renders the full game frame from immutable state.
pub fn render(frame: &mut Frame<'_>, state: &GameState, theme: &Theme) {
    let area = frame.area();
    let [score_area, play_area] =
        Layout::vertical([Constraint::Length(1), Constraint::Min(0)]).areas(area);

    render_score_line(frame, score_area, state, theme);

    let block = Block::bordered().border_style(Style::new().fg(theme.border_fg));
    let inner = block.inner(play_area);
    frame.render_widget(block, play_area);

    render_food(frame, inner, state, theme);
    render_snake(frame, inner, state, theme);

    match state.phase {
        Phase::Ready => render_start_menu(frame, play_area, theme),
        Phase::Paused => render_pause_menu(frame, play_area, theme),
        Phase::Over => render_over_menu(frame, play_area, state.score, state.over_cause, theme),
        Phase::Won => render_win_menu(frame, play_area, state.score, theme),
        Phase::Running => {}
    }
}

/// Title on the left, score right-aligned on the same line.
fn render_score_line(frame: &mut Frame<'_>, area: Rect, state: &GameState, theme: &Theme) {
    let score_text = format!("Score: {}", state.score);
    let padding = usize::from(area.width).saturating_sub(TITLE.width() + score_text.width());

    let line = Line::from(vec![
        Span::styled(
            TITLE,
            Style::new()
                .fg(theme.menu_title)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw(" ".repeat(padding)),
        Span::styled(score_text, Style::new().fg(theme.score_fg)),
    ]);

    frame.render_widget(Paragraph::new(line), area);
}

fn render_food(frame: &mut Frame<'_>, inner: Rect, state: &GameState, theme: &Theme) {
    let Some((x, y)) = logical_to_terminal(inner, state.grid(), state.food) else {
        return;
    };

    let buffer = frame.buffer_mut();
    buffer.set_string(x, y, GLYPH_FOOD, Style::new().fg(theme.food));
}

fn render_snake(frame: &mut Frame<'_>, inner: Rect, state: &GameState, theme: &Theme) {
    let head = state.snake.head();
    let tail = state.snake.segments().last().copied();

    let buffer = frame.buffer_mut();
    for segment in state.snake.segments() {
        let Some((x, y)) = logical_to_terminal(inner, state.grid(), *segment) else {
            continue;
        };

        if *segment == head {
            buffer.set_string(
                x,
                y,
                head_glyph(state.heading),
                Style::new()
                    .fg(theme.snake_head)
                    .add_modifier(Modifier::BOLD),
            );
        } else if Some(*segment) == tail {
            buffer.set_string(x, y, GLYPH_SNAKE_TAIL, Style::new().fg(theme.snake_tail));
        } else {
            buffer.set_string(x, y, GLYPH_SNAKE_BODY, Style::new().fg(theme.snake_body));
        }
    }
}

fn head_glyph(heading: Option<Heading>) -> &'static str {
    match heading {
        Some(Heading::Up) => GLYPH_SNAKE_HEAD_UP,
        Some(Heading::Down) => GLYPH_SNAKE_HEAD_DOWN,
        Some(Heading::Left) => GLYPH_SNAKE_HEAD_LEFT,
        Some(Heading::Right) => GLYPH_SNAKE_HEAD_RIGHT,
        None => GLYPH_SNAKE_HEAD_IDLE,
    }
}

/// Maps a logical cell to a terminal cell inside `inner`, or `None` when
/// it falls outside the drawable area.
fn logical_to_terminal(inner: Rect, bounds: GridSize, position: Position) -> Option<(u16, u16)> {
    if !position.is_within_bounds(bounds) {
        return None;
    }

    let x = inner.x.saturating_add(u16::try_from(position.x).ok()?);
    let y = inner.y.saturating_add(u16::try_from(position.y).ok()?);
    if x >= inner.right() || y >= inner.bottom() {
        return None;
    }

    Some((x, y))
}

#[cfg(test)]
mod tests {
    use ratatui::layout::Rect;

    use crate::config::GridSize;
    use crate::snake::Position;

    use super::logical_to_terminal;

    #[test]
    fn logical_cells_map_with_inner_offset() {
        let inner = Rect::new(2, 3, 10, 10);
        let bounds = GridSize {
            width: 10,
            height: 10,
        };

        assert_eq!(
            logical_to_terminal(inner, bounds, Position { x: 0, y: 0 }),
            Some((2, 3))
        );
        assert_eq!(
            logical_to_terminal(inner, bounds, Position { x: 4, y: 1 }),
            Some((6, 4))
        );
    }

    #[test]
    fn out_of_bounds_cells_are_not_drawn() {
        let inner = Rect::new(0, 0, 10, 10);
        let bounds = GridSize {
            width: 10,
            height: 10,
        };

        assert_eq!(
            logical_to_terminal(inner, bounds, Position { x: -1, y: 0 }),
            None
        );
        assert_eq!(
            logical_to_terminal(inner, bounds, Position { x: 10, y: 0 }),
            None
        );
    }

    #[test]
    fn cells_past_the_inner_rect_are_clipped() {
        // Terminal smaller than the logical grid: cells beyond the inner
        // rect are skipped rather than wrapped.
        let inner = Rect::new(0, 0, 4, 4);
        let bounds = GridSize {
            width: 10,
            height: 10,
        };

        assert_eq!(
            logical_to_terminal(inner, bounds, Position { x: 3, y: 3 }),
            Some((3, 3))
        );
        assert_eq!(
            logical_to_terminal(inner, bounds, Position { x: 5, y: 3 }),
            None
        );
    }
}
