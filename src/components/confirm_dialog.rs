use crossterm::event::{Event, KeyCode};
use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use crate::action::Action;
use crate::components::Component;
use crate::config::Theme;

/// Unsaved-changes dialog shown when quitting with a dirty form.
pub struct ConfirmDialog {
    visible: bool,
}

impl ConfirmDialog {
    pub fn new() -> Self {
        Self { visible: false }
    }

    pub fn show(&mut self) {
        self.visible = true;
    }

    pub fn dismiss(&mut self) {
        self.visible = false;
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }
}

impl Default for ConfirmDialog {
    fn default() -> Self {
        Self::new()
    }
}

impl Component for ConfirmDialog {
    fn handle_event(&mut self, event: &Event) -> Option<Action> {
        if !self.visible {
            return None;
        }

        if let Event::Key(key) = event {
            match key.code {
                KeyCode::Char('y') | KeyCode::Char('Y') | KeyCode::Enter => {
                    return Some(Action::ConfirmSaveAndQuit);
                }
                KeyCode::Char('n') | KeyCode::Char('N') => {
                    return Some(Action::ConfirmDiscardAndQuit);
                }
                KeyCode::Esc => {
                    return Some(Action::ConfirmCancel);
                }
                _ => {}
            }
        }

        None
    }

    fn update(&mut self, action: &Action) {
        match action {
            Action::ConfirmSaveAndQuit | Action::ConfirmDiscardAndQuit | Action::ConfirmCancel => {
                self.dismiss();
            }
            _ => {}
        }
    }

    fn render(&self, frame: &mut Frame, area: Rect, _focused: bool, theme: &Theme) {
        if !self.visible {
            return;
        }

        let dialog_width = (area.width * 60 / 100).clamp(40, 60);
        let dialog_height = 7;

        let dialog_x = (area.width.saturating_sub(dialog_width)) / 2;
        let dialog_y = (area.height.saturating_sub(dialog_height)) / 2;

        let dialog_area = Rect::new(dialog_x, dialog_y, dialog_width, dialog_height);

        frame.render_widget(Clear, dialog_area);

        let block = Block::default()
            .title(" Unsaved Changes ")
            .title_style(
                Style::default()
                    .fg(theme.dialog.title_fg.to_color())
                    .add_modifier(Modifier::BOLD),
            )
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.dialog.border.to_color()));

        let lines = vec![
            Line::default(),
            Line::from(Span::styled(
                "The settings have been modified but not saved.",
                Style::default().fg(theme.dialog.body_fg.to_color()),
            )),
            Line::default(),
            Line::from(vec![
                Span::styled("[y]", Style::default().fg(theme.colors.success.to_color())),
                Span::styled(" save and quit  ", Style::default().fg(theme.dialog.hint_fg.to_color())),
                Span::styled("[n]", Style::default().fg(theme.colors.error.to_color())),
                Span::styled(" discard  ", Style::default().fg(theme.dialog.hint_fg.to_color())),
                Span::styled("[Esc]", Style::default().fg(theme.colors.muted.to_color())),
                Span::styled(" back", Style::default().fg(theme.dialog.hint_fg.to_color())),
            ]),
        ];

        let paragraph = Paragraph::new(lines)
            .block(block)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true });

        frame.render_widget(paragraph, dialog_area);
    }
}
