use std::io;
use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};

/// Direction of travel, one of the four orthogonal unit vectors.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum Heading {
    Up,
    Down,
    Left,
    Right,
}

impl Heading {
    /// Returns the opposite heading.
    #[must_use]
    pub fn opposite(self) -> Self {
        match self {
            Self::Up => Self::Down,
            Self::Down => Self::Up,
            Self::Left => Self::Right,
            Self::Right => Self::Left,
        }
    }

    /// Returns the unit cell delta for one tick of travel.
    #[must_use]
    pub fn delta(self) -> (i32, i32) {
        match self {
            Self::Up => (0, -1),
            Self::Down => (0, 1),
            Self::Left => (-1, 0),
            Self::Right => (1, 0),
        }
    }
}

/// High-level input events consumed by the driver loop.
///
/// The engine only ever sees `Heading` values; pause, confirm, and quit are
/// resolved by the driver.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum GameInput {
    Heading(Heading),
    Pause,
    Confirm,
    Quit,
}

/// Translates one terminal key event into a game input.
///
/// Arrow keys and WASD steer, Space pauses, Enter confirms, Q or Esc quits.
#[must_use]
pub fn translate_key(event: KeyEvent) -> Option<GameInput> {
    if event.kind == KeyEventKind::Release {
        return None;
    }

    match event.code {
        KeyCode::Up | KeyCode::Char('w' | 'W') => Some(GameInput::Heading(Heading::Up)),
        KeyCode::Down | KeyCode::Char('s' | 'S') => Some(GameInput::Heading(Heading::Down)),
        KeyCode::Left | KeyCode::Char('a' | 'A') => Some(GameInput::Heading(Heading::Left)),
        KeyCode::Right | KeyCode::Char('d' | 'D') => Some(GameInput::Heading(Heading::Right)),
        KeyCode::Char(' ') => Some(GameInput::Pause),
        KeyCode::Enter => Some(GameInput::Confirm),
        KeyCode::Char('q' | 'Q') | KeyCode::Esc => Some(GameInput::Quit),
        _ => None,
    }
}

/// Waits up to `timeout` for a key event and translates it.
///
/// Returns `Ok(None)` when no relevant key arrived within the timeout.
pub fn poll_input(timeout: Duration) -> io::Result<Option<GameInput>> {
    if !event::poll(timeout)? {
        return Ok(None);
    }

    match event::read()? {
        Event::Key(key) => Ok(translate_key(key)),
        _ => Ok(None),
    }
}

#[cfg(test)]
mod tests {
    use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

    use super::{GameInput, Heading, translate_key};

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn opposite_heading_is_correct() {
        assert_eq!(Heading::Up.opposite(), Heading::Down);
        assert_eq!(Heading::Down.opposite(), Heading::Up);
        assert_eq!(Heading::Left.opposite(), Heading::Right);
        assert_eq!(Heading::Right.opposite(), Heading::Left);
    }

    #[test]
    fn deltas_are_orthogonal_unit_vectors() {
        for heading in [Heading::Up, Heading::Down, Heading::Left, Heading::Right] {
            let (dx, dy) = heading.delta();
            assert_eq!(dx.abs() + dy.abs(), 1);
        }

        assert_eq!(Heading::Up.delta(), (0, -1));
        assert_eq!(Heading::Right.delta(), (1, 0));
    }

    #[test]
    fn arrows_and_wasd_both_steer() {
        assert_eq!(
            translate_key(press(KeyCode::Up)),
            Some(GameInput::Heading(Heading::Up))
        );
        assert_eq!(
            translate_key(press(KeyCode::Char('w'))),
            Some(GameInput::Heading(Heading::Up))
        );
        assert_eq!(
            translate_key(press(KeyCode::Char('D'))),
            Some(GameInput::Heading(Heading::Right))
        );
    }

    #[test]
    fn control_keys_translate() {
        assert_eq!(translate_key(press(KeyCode::Char(' '))), Some(GameInput::Pause));
        assert_eq!(translate_key(press(KeyCode::Enter)), Some(GameInput::Confirm));
        assert_eq!(translate_key(press(KeyCode::Esc)), Some(GameInput::Quit));
        assert_eq!(translate_key(press(KeyCode::Char('q'))), Some(GameInput::Quit));
    }

    #[test]
    fn release_events_and_unknown_keys_are_ignored() {
        let mut release = press(KeyCode::Up);
        release.kind = KeyEventKind::Release;

        assert_eq!(translate_key(release), None);
        assert_eq!(translate_key(press(KeyCode::Char('x'))), None);
    }
}
