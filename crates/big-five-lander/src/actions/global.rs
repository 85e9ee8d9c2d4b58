//! Global actions - not tied to any specific screen

use ratatui::crossterm::event::KeyEvent;

use crate::views::View;

/// Global actions that affect the entire application
#[derive(Debug, Clone)]
pub enum GlobalAction {
    /// Raw key pressed (before translation)
    KeyPressed(KeyEvent),
    /// Quit the application
    Quit,
    /// Replace entire view stack with new view
    ReplaceView(Box<dyn View>),
    /// Periodic tick for animations
    Tick,
    /// Terminal size changed
    Resize { width: u16, height: u16 },
}
