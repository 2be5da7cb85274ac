pub mod confirm_dialog;
pub mod settings_panel;

use crossterm::event::Event;
use ratatui::{layout::Rect, Frame};

use crate::action::Action;
use crate::config::Theme;

pub use confirm_dialog::ConfirmDialog;
pub use settings_panel::SettingsPanel;

pub trait Component {
    fn handle_event(&mut self, event: &Event) -> Option<Action>;

    fn update(&mut self, action: &Action);

    fn render(&self, frame: &mut Frame, area: Rect, focused: bool, theme: &Theme);
}
