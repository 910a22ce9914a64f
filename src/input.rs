//! Input handling abstractions for the battle screen.

use anyhow::Context;
use crossterm::event::{self, Event as CEvent};
use ratatui::layout::{Position, Rect};
use std::time::Duration;

/// Trait for input sources
pub trait InputSource {
    /// Poll for one input event, waiting at most `timeout`
    fn poll(&mut self, timeout: Duration) -> anyhow::Result<Option<InputEvent>>;
}

/// Console input source reading crossterm events
#[derive(Debug, Default)]
pub struct ConsoleInput;

impl ConsoleInput {
    pub fn new() -> Self {
        Self
    }
}

impl InputSource for ConsoleInput {
    fn poll(&mut self, timeout: Duration) -> anyhow::Result<Option<InputEvent>> {
        if event::poll(timeout).context("Failed to poll terminal events")? {
            let event = event::read().context("Failed to read terminal event")?;
            return Ok(InputEvent::from_crossterm(event));
        }
        Ok(None)
    }
}

/// Terminal input events
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputEvent {
    Key(KeyEvent),
    Mouse(MouseEvent),
    Resize(u16, u16),
}

/// Key events
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyEvent {
    pub code: KeyCode,
    pub modifiers: KeyModifiers,
}

impl KeyEvent {
    pub fn plain(code: KeyCode) -> Self {
        Self {
            code,
            modifiers: KeyModifiers::default(),
        }
    }
}

/// Mouse events, positioned in terminal cells
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MouseEvent {
    Press(MouseButton, u16, u16),
    Release(u16, u16),
    Other(u16, u16),
}

/// Key codes the battle screen cares about
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyCode {
    Char(char),
    Enter,
    Esc,
    Other,
}

/// Key modifiers
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct KeyModifiers {
    pub ctrl: bool,
}

/// Mouse buttons
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MouseButton {
    Left,
    Right,
    Middle,
}

impl InputEvent {
    /// Convert crossterm events to our internal events; focus and paste
    /// events have no meaning here
    pub fn from_crossterm(event: CEvent) -> Option<Self> {
        match event {
            CEvent::Key(key_event) if key_event.kind == event::KeyEventKind::Press => {
                Some(InputEvent::Key(KeyEvent::from(key_event)))
            }
            CEvent::Mouse(mouse_event) => Some(InputEvent::Mouse(MouseEvent::from(mouse_event))),
            CEvent::Resize(width, height) => Some(InputEvent::Resize(width, height)),
            _ => None,
        }
    }
}

impl From<event::KeyEvent> for KeyEvent {
    fn from(key_event: event::KeyEvent) -> Self {
        Self {
            code: KeyCode::from(key_event.code),
            modifiers: KeyModifiers::from(key_event.modifiers),
        }
    }
}

impl From<event::KeyCode> for KeyCode {
    fn from(code: event::KeyCode) -> Self {
        match code {
            event::KeyCode::Char(c) => KeyCode::Char(c),
            event::KeyCode::Enter => KeyCode::Enter,
            event::KeyCode::Esc => KeyCode::Esc,
            _ => KeyCode::Other,
        }
    }
}

impl From<event::KeyModifiers> for KeyModifiers {
    fn from(modifiers: event::KeyModifiers) -> Self {
        Self {
            ctrl: modifiers.contains(event::KeyModifiers::CONTROL),
        }
    }
}

impl From<event::MouseEvent> for MouseEvent {
    fn from(event: event::MouseEvent) -> Self {
        match event.kind {
            event::MouseEventKind::Down(button) => {
                MouseEvent::Press(MouseButton::from(button), event.column, event.row)
            }
            event::MouseEventKind::Up(_) => MouseEvent::Release(event.column, event.row),
            _ => MouseEvent::Other(event.column, event.row),
        }
    }
}

impl From<event::MouseButton> for MouseButton {
    fn from(button: event::MouseButton) -> Self {
        match button {
            event::MouseButton::Left => MouseButton::Left,
            event::MouseButton::Right => MouseButton::Right,
            event::MouseButton::Middle => MouseButton::Middle,
        }
    }
}

/// What an input event asks the game to do
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Attack,
    Quit,
    Resize(u16, u16),
}

/// Map an input event to a command.
///
/// `attack_control` is the attack button as last drawn; a left press only
/// counts when it lands inside it. Without a visible button, clicks do
/// nothing.
pub fn to_command(event: &InputEvent, attack_control: Option<Rect>) -> Option<Command> {
    match event {
        InputEvent::Key(key) => match (key.code, key.modifiers.ctrl) {
            (KeyCode::Char('c'), true) => Some(Command::Quit),
            (KeyCode::Char('q'), _) | (KeyCode::Esc, _) => Some(Command::Quit),
            (KeyCode::Enter, _) | (KeyCode::Char(' '), _) | (KeyCode::Char('a'), _) => {
                Some(Command::Attack)
            }
            _ => None,
        },
        InputEvent::Mouse(MouseEvent::Press(MouseButton::Left, column, row)) => attack_control
            .filter(|rect| rect.contains(Position::new(*column, *row)))
            .map(|_| Command::Attack),
        InputEvent::Mouse(_) => None,
        InputEvent::Resize(width, height) => Some(Command::Resize(*width, *height)),
    }
}
