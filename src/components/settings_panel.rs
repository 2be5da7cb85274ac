//! Settings panel component for the Safety DB configuration
//!
//! Mirrors the persisted [`SecuritySettings`] into an editable form:
//! - Database source (exclusive four-way choice)
//! - PyUP API key (masked input)
//! - PyUP API URL
//! - Custom database URL
//!
//! Which text fields accept input follows the selected source mode; the
//! panel tracks its own dirty state against the record it was populated
//! from and writes back only on an explicit store.

use crossterm::event::{Event, KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::action::Action;
use crate::components::Component;
use crate::config::{SafetyDbMode, SecuritySettings, Theme};

/// Editable text fields of the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettingsField {
    ApiKey,
    ApiUrl,
    CustomUrl,
}

impl SettingsField {
    pub const ALL: &'static [SettingsField] = &[
        SettingsField::ApiKey,
        SettingsField::ApiUrl,
        SettingsField::CustomUrl,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            SettingsField::ApiKey => "PyUP API key",
            SettingsField::ApiUrl => "PyUP API URL",
            SettingsField::CustomUrl => "Custom database URL",
        }
    }

    /// API keys are secrets and render masked outside of an unmasked edit.
    pub fn is_secret(&self) -> bool {
        matches!(self, SettingsField::ApiKey)
    }
}

/// Which fields accept input under the current source selection. Stored
/// state, updated only when a mode becomes selected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldEnablement {
    pub api_key: bool,
    pub api_url: bool,
    pub custom_url: bool,
}

impl FieldEnablement {
    pub fn for_mode(mode: SafetyDbMode) -> Self {
        match mode {
            SafetyDbMode::Disabled | SafetyDbMode::Bundled => Self {
                api_key: false,
                api_url: false,
                custom_url: false,
            },
            SafetyDbMode::Api => Self {
                api_key: true,
                api_url: true,
                custom_url: false,
            },
            SafetyDbMode::Custom => Self {
                api_key: false,
                api_url: false,
                custom_url: true,
            },
        }
    }

    pub fn is_enabled(&self, field: SettingsField) -> bool {
        match field {
            SettingsField::ApiKey => self.api_key,
            SettingsField::ApiUrl => self.api_url,
            SettingsField::CustomUrl => self.custom_url,
        }
    }
}

/// A navigable row of the panel: one of the four source options or one of
/// the three text fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelRow {
    Mode(SafetyDbMode),
    Field(SettingsField),
}

impl PanelRow {
    pub const ALL: &'static [PanelRow] = &[
        PanelRow::Mode(SafetyDbMode::Disabled),
        PanelRow::Mode(SafetyDbMode::Bundled),
        PanelRow::Mode(SafetyDbMode::Api),
        PanelRow::Mode(SafetyDbMode::Custom),
        PanelRow::Field(SettingsField::ApiKey),
        PanelRow::Field(SettingsField::ApiUrl),
        PanelRow::Field(SettingsField::CustomUrl),
    ];
}

/// Input mode for the panel
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PanelInputMode {
    /// Normal navigation mode
    Normal,
    /// Editing a text field inline
    Editing {
        field: SettingsField,
        buffer: String,
        /// Whether the buffer renders as dots (secret fields)
        masked: bool,
        /// Mask temporarily lifted by the user
        show_plain: bool,
    },
}

/// Settings panel component
pub struct SettingsPanel {
    /// Cursor position over [`PanelRow::ALL`]
    cursor: usize,
    input_mode: PanelInputMode,
    /// Form state, populated from a settings record via [`Self::set_data`]
    api_key: String,
    api_url: String,
    custom_url: String,
    /// The active source option; `None` until one is selected
    selection: Option<SafetyDbMode>,
    enablement: FieldEnablement,
}

impl SettingsPanel {
    pub fn new() -> Self {
        Self {
            cursor: 0,
            input_mode: PanelInputMode::Normal,
            api_key: String::new(),
            api_url: String::new(),
            custom_url: String::new(),
            selection: None,
            enablement: FieldEnablement::for_mode(SafetyDbMode::Bundled),
        }
    }

    /// Populate the form from a settings record. Strings are copied
    /// verbatim; the selection is cleared and then set to the record's
    /// mode. Any in-progress edit is dropped.
    pub fn set_data(&mut self, settings: &SecuritySettings) {
        self.input_mode = PanelInputMode::Normal;
        self.api_key = settings.pyup_api_key.clone();
        self.api_url = settings.pyup_api_url.clone();
        self.custom_url = settings.pyup_custom_url.clone();
        self.selection = None;
        self.select_mode(settings.safety_db_mode);
    }

    /// True if any form field differs from the record by exact string
    /// equality, or the selected mode differs. Pure comparison.
    pub fn is_modified(&self, settings: &SecuritySettings) -> bool {
        settings.pyup_api_key != self.api_key
            || settings.safety_db_mode != self.selected_mode()
            || settings.pyup_api_url != self.api_url
            || settings.pyup_custom_url != self.custom_url
    }

    /// Write the form back into the record, unconditionally. No URL or
    /// key validation is performed.
    pub fn store_settings(&self, settings: &mut SecuritySettings) {
        settings.pyup_api_key = self.api_key.clone();
        settings.pyup_api_url = self.api_url.clone();
        settings.pyup_custom_url = self.custom_url.clone();
        settings.safety_db_mode = self.selected_mode();
    }

    /// The active source option; an empty selection reads as Bundled.
    pub fn selected_mode(&self) -> SafetyDbMode {
        self.selection.unwrap_or(SafetyDbMode::Bundled)
    }

    /// Select a source option. Field enablement transitions only on the
    /// became-selected edge; re-selecting the active option is a no-op.
    /// Returns whether the selection changed.
    pub fn select_mode(&mut self, mode: SafetyDbMode) -> bool {
        if self.selection == Some(mode) {
            return false;
        }
        self.selection = Some(mode);
        self.enablement = FieldEnablement::for_mode(mode);
        tracing::debug!("Safety DB source selected: {}", mode.as_str());
        true
    }

    pub fn is_field_enabled(&self, field: SettingsField) -> bool {
        self.enablement.is_enabled(field)
    }

    pub fn field_value(&self, field: SettingsField) -> &str {
        match field {
            SettingsField::ApiKey => &self.api_key,
            SettingsField::ApiUrl => &self.api_url,
            SettingsField::CustomUrl => &self.custom_url,
        }
    }

    fn field_value_mut(&mut self, field: SettingsField) -> &mut String {
        match field {
            SettingsField::ApiKey => &mut self.api_key,
            SettingsField::ApiUrl => &mut self.api_url,
            SettingsField::CustomUrl => &mut self.custom_url,
        }
    }

    pub fn is_editing(&self) -> bool {
        matches!(self.input_mode, PanelInputMode::Editing { .. })
    }

    fn current_row(&self) -> PanelRow {
        PanelRow::ALL[self.cursor]
    }

    pub fn next_row(&mut self) {
        self.cursor = (self.cursor + 1) % PanelRow::ALL.len();
    }

    pub fn prev_row(&mut self) {
        if self.cursor == 0 {
            self.cursor = PanelRow::ALL.len() - 1;
        } else {
            self.cursor -= 1;
        }
    }

    /// Begin editing the field under the cursor. Disabled fields refuse
    /// the edit.
    pub fn start_editing(&mut self) -> bool {
        if let PanelRow::Field(field) = self.current_row() {
            if !self.is_field_enabled(field) {
                tracing::debug!("Ignoring edit of disabled field {:?}", field);
                return false;
            }
            self.input_mode = PanelInputMode::Editing {
                field,
                buffer: self.field_value(field).to_string(),
                masked: field.is_secret(),
                show_plain: false,
            };
            return true;
        }
        false
    }

    pub fn cancel_editing(&mut self) {
        self.input_mode = PanelInputMode::Normal;
    }

    /// Commit the edit buffer into the form field.
    pub fn commit_edit(&mut self) {
        if let PanelInputMode::Editing { field, buffer, .. } = &self.input_mode {
            let field = *field;
            let value = buffer.clone();
            *self.field_value_mut(field) = value;
            self.input_mode = PanelInputMode::Normal;
        }
    }

    /// Toggle visibility of masked input (Ctrl+U)
    pub fn toggle_mask_visibility(&mut self) {
        if let PanelInputMode::Editing { show_plain, .. } = &mut self.input_mode {
            *show_plain = !*show_plain;
        }
    }

    /// Clear the current input buffer (Ctrl+K)
    pub fn clear_input(&mut self) {
        if let PanelInputMode::Editing { buffer, .. } = &mut self.input_mode {
            buffer.clear();
        }
    }

    /// Append pasted text into the active edit buffer. Control characters
    /// never belong in a key or URL and are dropped.
    pub fn paste_text(&mut self, text: &str) {
        if let PanelInputMode::Editing { buffer, masked, .. } = &mut self.input_mode {
            let filtered: String = if *masked {
                text.chars().filter(|c| c.is_ascii_graphic()).collect()
            } else {
                text.chars().filter(|c| !c.is_control()).collect()
            };
            buffer.push_str(&filtered);
        }
    }

    pub fn handle_edit_char(&mut self, c: char) {
        if let PanelInputMode::Editing { buffer, .. } = &mut self.input_mode {
            buffer.push(c);
        }
    }

    pub fn handle_edit_backspace(&mut self) {
        if let PanelInputMode::Editing { buffer, .. } = &mut self.input_mode {
            buffer.pop();
        }
    }

    fn handle_key_normal(&mut self, key: KeyEvent) -> Option<Action> {
        match key.code {
            KeyCode::Char('j') | KeyCode::Down | KeyCode::Tab => {
                self.next_row();
                Some(Action::PanelNextRow)
            }
            KeyCode::Char('k') | KeyCode::Up | KeyCode::BackTab => {
                self.prev_row();
                Some(Action::PanelPrevRow)
            }
            KeyCode::Enter | KeyCode::Char(' ') => match self.current_row() {
                PanelRow::Mode(mode) => {
                    if self.select_mode(mode) {
                        Some(Action::PanelSelectMode(mode))
                    } else {
                        None
                    }
                }
                PanelRow::Field(_) => {
                    if self.start_editing() {
                        Some(Action::PanelStartEdit)
                    } else {
                        None
                    }
                }
            },
            KeyCode::Char('s') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                Some(Action::SettingsSave)
            }
            KeyCode::Char('r') => Some(Action::SettingsReload),
            KeyCode::Esc | KeyCode::Char('q') => Some(Action::Quit),
            _ => None,
        }
    }

    fn handle_key_editing(&mut self, key: KeyEvent) -> Option<Action> {
        match key.code {
            KeyCode::Esc => {
                self.cancel_editing();
                Some(Action::PanelCancelEdit)
            }
            KeyCode::Enter => {
                self.commit_edit();
                Some(Action::PanelCommitEdit)
            }
            KeyCode::Backspace => {
                self.handle_edit_backspace();
                None
            }
            KeyCode::Char('u') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.toggle_mask_visibility();
                Some(Action::PanelToggleMask)
            }
            KeyCode::Char('k') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.clear_input();
                None
            }
            KeyCode::Char('v') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                // Clipboard access lives in the app; it feeds the text
                // back through paste_text.
                Some(Action::PanelPaste)
            }
            KeyCode::Char(c) => {
                self.handle_edit_char(c);
                None
            }
            _ => None,
        }
    }

    fn handle_key(&mut self, key: KeyEvent) -> Option<Action> {
        match &self.input_mode {
            PanelInputMode::Normal => self.handle_key_normal(key),
            PanelInputMode::Editing { .. } => self.handle_key_editing(key),
        }
    }

    fn display_value(&self, field: SettingsField) -> String {
        let value = self.field_value(field);
        if field.is_secret() && !value.is_empty() {
            "•".repeat(value.chars().count())
        } else {
            value.to_string()
        }
    }

    fn render_mode_row(&self, mode: SafetyDbMode, theme: &Theme, focused: bool) -> Line<'static> {
        let selected = self.selection == Some(mode);
        let under_cursor = self.current_row() == PanelRow::Mode(mode) && !self.is_editing();

        let radio = if selected {
            theme.panel.radio_selected.clone()
        } else {
            theme.panel.radio_unselected.clone()
        };

        let cursor = if under_cursor && focused {
            format!("{} ", theme.panel.cursor_indicator)
        } else {
            "  ".to_string()
        };

        let label_style = if under_cursor && focused {
            Style::default()
                .fg(theme.panel.selected_fg.to_color())
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(theme.panel.label_fg.to_color())
        };

        Line::from(vec![
            Span::styled(cursor, Style::default().fg(theme.colors.accent.to_color())),
            Span::styled(format!("{} ", radio), label_style),
            Span::styled(format!("{:20}", mode.label()), label_style),
            Span::styled(
                mode.description().to_string(),
                Style::default().fg(theme.colors.muted.to_color()),
            ),
        ])
    }

    fn render_field_row(&self, field: SettingsField, theme: &Theme, focused: bool) -> Vec<Line<'static>> {
        let enabled = self.is_field_enabled(field);
        let under_cursor = self.current_row() == PanelRow::Field(field);

        let cursor = if under_cursor && focused && !self.is_editing() {
            format!("{} ", theme.panel.cursor_indicator)
        } else {
            "  ".to_string()
        };

        let mut label_style = theme.field_label_style(enabled);
        if under_cursor && focused && !self.is_editing() {
            label_style = label_style.add_modifier(Modifier::BOLD);
        }

        let mut lines = Vec::new();

        // Inline edit rendering for the field being edited
        if let PanelInputMode::Editing { field: editing, buffer, masked, show_plain } = &self.input_mode {
            if *editing == field {
                let display = if *masked && !*show_plain {
                    "•".repeat(buffer.chars().count())
                } else {
                    buffer.clone()
                };
                lines.push(Line::from(vec![
                    Span::styled(cursor, Style::default().fg(theme.colors.accent.to_color())),
                    Span::styled(format!("{:22}", field.label()), label_style),
                    Span::styled("[", Style::default().fg(theme.colors.muted.to_color())),
                    Span::styled(display, Style::default().fg(theme.colors.accent.to_color())),
                    Span::styled("█", Style::default().fg(theme.colors.accent.to_color())),
                    Span::styled("]", Style::default().fg(theme.colors.muted.to_color())),
                    Span::styled(
                        format!(" ({} chars)", buffer.chars().count()),
                        Style::default().fg(theme.colors.muted.to_color()),
                    ),
                ]));
                let hint = if *masked {
                    "  ↵ confirm · Esc cancel · Ctrl+U unmask · Ctrl+K clear · Ctrl+V paste"
                } else {
                    "  ↵ confirm · Esc cancel · Ctrl+K clear · Ctrl+V paste"
                };
                lines.push(Line::from(Span::styled(
                    hint.to_string(),
                    Style::default().fg(theme.colors.muted.to_color()),
                )));
                return lines;
            }
        }

        let value = self.display_value(field);
        let value_display = if value.is_empty() {
            "<empty>".to_string()
        } else {
            value
        };

        lines.push(Line::from(vec![
            Span::styled(cursor, Style::default().fg(theme.colors.accent.to_color())),
            Span::styled(format!("{:22}", field.label()), label_style),
            Span::styled(value_display, theme.field_value_style(enabled)),
            Span::styled(
                if enabled { String::new() } else { "  (locked by source)".to_string() },
                Style::default().fg(theme.panel.disabled_fg.to_color()),
            ),
        ]));
        lines
    }

    fn render_panel(&self, frame: &mut Frame, area: Rect, focused: bool, theme: &Theme) {
        let block = Block::default()
            .title(" Safety DB Settings ")
            .title_style(theme.title_style(focused))
            .borders(Borders::ALL)
            .border_style(theme.border_style(focused));

        let mut lines: Vec<Line> = Vec::new();

        lines.push(Line::from(Span::styled(
            "Database source",
            Style::default()
                .fg(theme.colors.secondary.to_color())
                .add_modifier(Modifier::BOLD),
        )));
        for mode in SafetyDbMode::ALL {
            lines.push(self.render_mode_row(*mode, theme, focused));
        }

        lines.push(Line::default());
        lines.push(Line::from(Span::styled(
            "Connection",
            Style::default()
                .fg(theme.colors.secondary.to_color())
                .add_modifier(Modifier::BOLD),
        )));
        for field in SettingsField::ALL {
            lines.extend(self.render_field_row(*field, theme, focused));
        }

        lines.push(Line::default());
        lines.push(Line::from(Span::styled(
            "j/k navigate · ↵ select/edit · Ctrl+S save · r reload · q quit",
            Style::default().fg(theme.colors.muted.to_color()),
        )));

        let paragraph = Paragraph::new(lines).block(block);
        frame.render_widget(paragraph, area);
    }
}

impl Default for SettingsPanel {
    fn default() -> Self {
        Self::new()
    }
}

impl Component for SettingsPanel {
    fn handle_event(&mut self, event: &Event) -> Option<Action> {
        match event {
            Event::Key(key) => self.handle_key(*key),
            Event::Paste(text) => {
                self.paste_text(text);
                None
            }
            _ => None,
        }
    }

    fn update(&mut self, action: &Action) {
        match action {
            Action::PanelNextRow => self.next_row(),
            Action::PanelPrevRow => self.prev_row(),
            Action::PanelSelectMode(mode) => {
                self.select_mode(*mode);
            }
            Action::PanelCancelEdit => self.cancel_editing(),
            Action::PanelCommitEdit => self.commit_edit(),
            Action::PanelToggleMask => self.toggle_mask_visibility(),
            _ => {}
        }
    }

    fn render(&self, frame: &mut Frame, area: Rect, focused: bool, theme: &Theme) {
        self.render_panel(frame, area, focused, theme);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    fn sample_settings() -> SecuritySettings {
        SecuritySettings {
            pyup_api_key: String::new(),
            pyup_api_url: "https://pyup.io/api".to_string(),
            pyup_custom_url: String::new(),
            safety_db_mode: SafetyDbMode::Bundled,
        }
    }

    #[rstest]
    #[case(SafetyDbMode::Disabled)]
    #[case(SafetyDbMode::Bundled)]
    #[case(SafetyDbMode::Api)]
    #[case(SafetyDbMode::Custom)]
    fn mode_round_trips_through_set_data(#[case] mode: SafetyDbMode) {
        let mut panel = SettingsPanel::new();
        let settings = SecuritySettings {
            safety_db_mode: mode,
            ..sample_settings()
        };
        panel.set_data(&settings);
        assert_eq!(panel.selected_mode(), mode);
    }

    #[test]
    fn empty_selection_reads_as_bundled() {
        let panel = SettingsPanel::new();
        assert_eq!(panel.selected_mode(), SafetyDbMode::Bundled);
    }

    #[test]
    fn not_modified_after_set_data() {
        let mut panel = SettingsPanel::new();
        let settings = sample_settings();
        panel.set_data(&settings);
        assert!(!panel.is_modified(&settings));
    }

    #[test]
    fn modified_after_each_string_change() {
        let settings = sample_settings();

        for field in SettingsField::ALL {
            let mut panel = SettingsPanel::new();
            panel.set_data(&settings);
            *panel.field_value_mut(*field) = "changed".to_string();
            assert!(panel.is_modified(&settings), "{:?} change not detected", field);
        }
    }

    #[test]
    fn modified_after_mode_change() {
        let mut panel = SettingsPanel::new();
        let settings = sample_settings();
        panel.set_data(&settings);
        panel.select_mode(SafetyDbMode::Api);
        assert!(panel.is_modified(&settings));
    }

    #[test]
    fn store_then_is_modified_is_false() {
        let mut panel = SettingsPanel::new();
        let mut settings = sample_settings();
        panel.set_data(&settings);

        panel.select_mode(SafetyDbMode::Custom);
        *panel.field_value_mut(SettingsField::CustomUrl) = "https://db.internal".to_string();
        assert!(panel.is_modified(&settings));

        panel.store_settings(&mut settings);
        assert!(!panel.is_modified(&settings));
        assert_eq!(settings.safety_db_mode, SafetyDbMode::Custom);
        assert_eq!(settings.pyup_custom_url, "https://db.internal");
    }

    #[rstest]
    #[case(SafetyDbMode::Disabled, false, false, false)]
    #[case(SafetyDbMode::Bundled, false, false, false)]
    #[case(SafetyDbMode::Api, true, true, false)]
    #[case(SafetyDbMode::Custom, false, false, true)]
    fn enablement_follows_mode(
        #[case] mode: SafetyDbMode,
        #[case] api_key: bool,
        #[case] api_url: bool,
        #[case] custom_url: bool,
    ) {
        let mut panel = SettingsPanel::new();
        // Start from a different prior state to show the table holds
        // regardless of history.
        panel.select_mode(SafetyDbMode::Api);
        panel.select_mode(mode);
        assert_eq!(panel.is_field_enabled(SettingsField::ApiKey), api_key);
        assert_eq!(panel.is_field_enabled(SettingsField::ApiUrl), api_url);
        assert_eq!(panel.is_field_enabled(SettingsField::CustomUrl), custom_url);
    }

    #[test]
    fn reselecting_active_mode_is_a_no_op() {
        let mut panel = SettingsPanel::new();
        assert!(panel.select_mode(SafetyDbMode::Api));
        assert!(!panel.select_mode(SafetyDbMode::Api));
    }

    #[test]
    fn set_data_copies_strings_verbatim() {
        let mut panel = SettingsPanel::new();
        let settings = SecuritySettings {
            pyup_api_key: "  spaced key  ".to_string(),
            pyup_api_url: "not a url".to_string(),
            pyup_custom_url: "".to_string(),
            safety_db_mode: SafetyDbMode::Api,
        };
        panel.set_data(&settings);
        assert_eq!(panel.field_value(SettingsField::ApiKey), "  spaced key  ");
        assert_eq!(panel.field_value(SettingsField::ApiUrl), "not a url");
        assert_eq!(panel.field_value(SettingsField::CustomUrl), "");
    }

    #[test]
    fn editing_disabled_field_is_refused() {
        let mut panel = SettingsPanel::new();
        panel.set_data(&sample_settings());
        // Bundled locks every field; move the cursor to the API key row.
        while panel.current_row() != PanelRow::Field(SettingsField::ApiKey) {
            panel.next_row();
        }
        assert!(!panel.start_editing());
        assert!(!panel.is_editing());
    }

    #[test]
    fn edit_commit_and_cancel() {
        let mut panel = SettingsPanel::new();
        let mut settings = sample_settings();
        settings.safety_db_mode = SafetyDbMode::Api;
        panel.set_data(&settings);

        while panel.current_row() != PanelRow::Field(SettingsField::ApiUrl) {
            panel.next_row();
        }
        assert!(panel.start_editing());
        panel.clear_input();
        panel.handle_edit_char('x');
        panel.commit_edit();
        assert_eq!(panel.field_value(SettingsField::ApiUrl), "x");

        assert!(panel.start_editing());
        panel.handle_edit_char('y');
        panel.cancel_editing();
        assert_eq!(panel.field_value(SettingsField::ApiUrl), "x");
    }

    #[test]
    fn paste_filters_control_characters() {
        let mut panel = SettingsPanel::new();
        let mut settings = sample_settings();
        settings.safety_db_mode = SafetyDbMode::Api;
        panel.set_data(&settings);

        while panel.current_row() != PanelRow::Field(SettingsField::ApiKey) {
            panel.next_row();
        }
        assert!(panel.start_editing());
        panel.clear_input();
        panel.paste_text("abc\n123\t ");
        panel.commit_edit();
        assert_eq!(panel.field_value(SettingsField::ApiKey), "abc123");
    }

    #[test]
    fn secret_field_displays_masked() {
        let mut panel = SettingsPanel::new();
        let settings = SecuritySettings {
            pyup_api_key: "abc123".to_string(),
            ..sample_settings()
        };
        panel.set_data(&settings);
        assert_eq!(panel.display_value(SettingsField::ApiKey), "••••••");
        assert_eq!(panel.display_value(SettingsField::ApiUrl), "https://pyup.io/api");
    }

    // The end-to-end flow: populate from a bundled record, switch to the
    // API source, enter a key, store.
    #[test]
    fn api_key_entry_scenario() {
        let mut panel = SettingsPanel::new();
        let mut settings = sample_settings();
        panel.set_data(&settings);

        assert_eq!(panel.field_value(SettingsField::ApiKey), "");
        assert_eq!(panel.field_value(SettingsField::ApiUrl), "https://pyup.io/api");
        assert_eq!(panel.selected_mode(), SafetyDbMode::Bundled);
        assert!(!panel.is_field_enabled(SettingsField::ApiKey));
        assert!(!panel.is_field_enabled(SettingsField::ApiUrl));
        assert!(!panel.is_field_enabled(SettingsField::CustomUrl));

        panel.select_mode(SafetyDbMode::Api);
        assert!(panel.is_field_enabled(SettingsField::ApiKey));
        assert!(panel.is_field_enabled(SettingsField::ApiUrl));
        assert!(!panel.is_field_enabled(SettingsField::CustomUrl));

        while panel.current_row() != PanelRow::Field(SettingsField::ApiKey) {
            panel.next_row();
        }
        assert!(panel.start_editing());
        for c in "abc123".chars() {
            panel.handle_edit_char(c);
        }
        panel.commit_edit();
        assert!(panel.is_modified(&settings));

        panel.store_settings(&mut settings);
        assert_eq!(settings.pyup_api_key, "abc123");
        assert_eq!(settings.safety_db_mode, SafetyDbMode::Api);
        assert!(!panel.is_modified(&settings));
    }

    #[test]
    fn key_navigation_wraps() {
        let mut panel = SettingsPanel::new();
        assert_eq!(panel.current_row(), PanelRow::Mode(SafetyDbMode::Disabled));
        panel.prev_row();
        assert_eq!(panel.current_row(), PanelRow::Field(SettingsField::CustomUrl));
        panel.next_row();
        assert_eq!(panel.current_row(), PanelRow::Mode(SafetyDbMode::Disabled));
    }

    #[test]
    fn selecting_mode_via_keys_emits_action_once() {
        let mut panel = SettingsPanel::new();
        panel.set_data(&sample_settings());

        // Cursor starts on Disabled; select it.
        let enter = Event::Key(KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE));
        assert_eq!(
            panel.handle_event(&enter),
            Some(Action::PanelSelectMode(SafetyDbMode::Disabled))
        );
        // Selecting the same row again is the ignored re-select edge.
        assert_eq!(panel.handle_event(&enter), None);
    }
}
