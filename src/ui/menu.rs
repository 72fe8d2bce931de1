use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Clear, Paragraph};

use crate::config::Theme;
use crate::game::OverCause;

/// Draws the start screen as a centered popup.
pub fn render_start_menu(frame: &mut Frame<'_>, area: Rect, theme: &Theme) {
    let lines = vec![
        Line::from("SNAKE"),
        Line::from(""),
        Line::from("[Enter] Start"),
        Line::from("[Q]/[Esc] Quit"),
        Line::from(""),
        Line::from("Arrows or WASD to steer, Space to pause"),
    ];

    render_popup(frame, area, " start ", lines, theme);
}

/// Draws the pause screen as a centered popup.
pub fn render_pause_menu(frame: &mut Frame<'_>, area: Rect, theme: &Theme) {
    let lines = vec![
        Line::from("PAUSED"),
        Line::from(""),
        Line::from("[Space] Resume"),
        Line::from("[Q]/[Esc] Quit"),
    ];

    render_popup(frame, area, " pause ", lines, theme);
}

/// Draws the game-over screen as a centered popup.
pub fn render_over_menu(
    frame: &mut Frame<'_>,
    area: Rect,
    score: u32,
    cause: Option<OverCause>,
    theme: &Theme,
) {
    let lines = vec![
        Line::from("GAME OVER"),
        Line::from(""),
        Line::from(format!("Final score: {score}")),
        Line::from(match cause {
            Some(OverCause::Wall) => "You hit the wall",
            Some(OverCause::SelfHit) => "You ran into yourself",
            None => "",
        }),
        Line::from(""),
        Line::from("[Enter] Play again"),
        Line::from("[Q]/[Esc] Quit"),
    ];

    render_popup(frame, area, " game over ", lines, theme);
}

/// Draws the board-full victory screen as a centered popup.
pub fn render_win_menu(frame: &mut Frame<'_>, area: Rect, score: u32, theme: &Theme) {
    let lines = vec![
        Line::from("YOU WIN"),
        Line::from(""),
        Line::from("The snake filled the whole board"),
        Line::from(format!("Final score: {score}")),
        Line::from(""),
        Line::from("[Enter] Play again"),
        Line::from("[Q]/[Esc] Quit"),
    ];

    render_popup(frame, area, " victory ", lines, theme);
}

fn render_popup(frame: &mut Frame<'_>, area: Rect, title: &str, lines: Vec<Line<'_>>, theme: &Theme) {
    let popup = centered_popup(area, 70, 45);
    frame.render_widget(Clear, popup);

    let mut styled = lines;
    if let Some(first) = styled.first_mut() {
        first.style = Style::new()
            .fg(theme.menu_title)
            .add_modifier(Modifier::BOLD);
    }
    if let Some(last) = styled.last_mut() {
        last.style = Style::new().fg(theme.menu_footer);
    }

    frame.render_widget(
        Paragraph::new(styled)
            .alignment(Alignment::Center)
            .block(Block::bordered().title(title)),
        popup,
    );
}

fn centered_popup(area: Rect, width_percent: u16, height_percent: u16) -> Rect {
    let [_, mid, _] = Layout::vertical([
        Constraint::Percentage((100 - height_percent) / 2),
        Constraint::Percentage(height_percent),
        Constraint::Percentage((100 - height_percent) / 2),
    ])
    .areas(area);

    let [_, center, _] = Layout::horizontal([
        Constraint::Percentage((100 - width_percent) / 2),
        Constraint::Percentage(width_percent),
        Constraint::Percentage((100 - width_percent) / 2),
    ])
    .areas(mid);

    center
}
