//! App shell: terminal lifecycle, event loop, and action dispatch.
//!
//! Plays the settings-dialog host role: populates the panel from stored
//! settings on startup, asks the panel whether the form is dirty when the
//! user quits, and persists on save.

use std::io::{self, Stdout};
use std::time::{Duration, Instant};

use arboard::Clipboard;
use crossterm::{
    event::{self, DisableBracketedPaste, EnableBracketedPaste, Event, KeyCode, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};

use crate::action::Action;
use crate::cli::Cli;
use crate::components::{Component, ConfirmDialog, SettingsPanel};
use crate::config::ConfigManager;
use crate::error::{Result, SettingsError};

const TICK_INTERVAL_MS: u64 = 500;
const POLL_INTERVAL_MS: u64 = 16;

pub struct App {
    terminal: Terminal<CrosstermBackend<Stdout>>,
    should_quit: bool,
    config_manager: ConfigManager,
    settings_panel: SettingsPanel,
    confirm_dialog: ConfirmDialog,
    clipboard: Option<Clipboard>,
    last_tick: Instant,
    needs_redraw: bool,
}

impl App {
    pub fn with_cli(cli: &Cli, mut config_manager: ConfigManager) -> Result<Self> {
        // CLI/env key overrides the stored one, as if the user had typed it.
        if let Some(key) = &cli.pyup_api_key {
            config_manager.settings_mut().pyup_api_key = key.clone();
        }

        let mut settings_panel = SettingsPanel::new();
        settings_panel.set_data(config_manager.settings());

        let clipboard = match Clipboard::new() {
            Ok(c) => Some(c),
            Err(e) => {
                tracing::warn!("Clipboard unavailable: {}", e);
                None
            }
        };

        let terminal = Self::init_terminal()?;

        Ok(Self {
            terminal,
            should_quit: false,
            config_manager,
            settings_panel,
            confirm_dialog: ConfirmDialog::new(),
            clipboard,
            last_tick: Instant::now(),
            needs_redraw: true,
        })
    }

    fn init_terminal() -> Result<Terminal<CrosstermBackend<Stdout>>> {
        enable_raw_mode().map_err(|e| SettingsError::Terminal(e.to_string()))?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen, EnableBracketedPaste)
            .map_err(|e| SettingsError::Terminal(e.to_string()))?;
        Terminal::new(CrosstermBackend::new(stdout))
            .map_err(|e| SettingsError::Terminal(e.to_string()))
    }

    fn restore_terminal() {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen, DisableBracketedPaste);
    }

    pub fn run(&mut self) -> Result<()> {
        tracing::info!(
            "Editing settings under {}",
            self.config_manager.config_dir().display()
        );

        while !self.should_quit {
            if self.needs_redraw {
                self.draw()?;
                self.needs_redraw = false;
            }

            if event::poll(Duration::from_millis(POLL_INTERVAL_MS))
                .map_err(|e| SettingsError::Terminal(e.to_string()))?
            {
                let ev = event::read().map_err(|e| SettingsError::Terminal(e.to_string()))?;
                self.handle_event(ev);
                self.needs_redraw = true;
            }

            if self.last_tick.elapsed() >= Duration::from_millis(TICK_INTERVAL_MS) {
                self.last_tick = Instant::now();
                self.dispatch(Action::Tick);
            }
        }

        Ok(())
    }

    fn handle_event(&mut self, event: Event) {
        // Ctrl+C always force-quits, dirty form or not.
        if let Event::Key(key) = &event {
            if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
                self.dispatch(Action::ForceQuit);
                return;
            }
        }

        if let Event::Resize(_, _) = event {
            return;
        }

        let action = if self.confirm_dialog.is_visible() {
            self.confirm_dialog.handle_event(&event)
        } else {
            self.settings_panel.handle_event(&event)
        };

        if let Some(action) = action {
            self.dispatch(action);
        }
    }

    fn dispatch(&mut self, action: Action) {
        match action {
            Action::Quit => {
                if self.settings_panel.is_modified(self.config_manager.settings()) {
                    self.confirm_dialog.show();
                } else {
                    self.should_quit = true;
                }
            }
            Action::ForceQuit => {
                self.should_quit = true;
            }
            Action::SettingsSave => {
                self.save_settings();
            }
            Action::SettingsReload => {
                self.config_manager.reload_settings();
                self.settings_panel.set_data(self.config_manager.settings());
                tracing::info!("Reloaded settings from disk");
            }
            Action::ConfirmSaveAndQuit => {
                self.confirm_dialog.update(&Action::ConfirmSaveAndQuit);
                self.save_settings();
                self.should_quit = true;
            }
            Action::ConfirmDiscardAndQuit => {
                self.confirm_dialog.update(&Action::ConfirmDiscardAndQuit);
                self.should_quit = true;
            }
            Action::ConfirmCancel => {
                self.confirm_dialog.update(&Action::ConfirmCancel);
            }
            Action::PanelPaste => {
                if let Err(e) = self.paste_from_clipboard() {
                    tracing::warn!("Paste failed: {}", e);
                }
            }
            // Panel-local actions already applied inside handle_event.
            _ => {}
        }
    }

    fn save_settings(&mut self) {
        self.settings_panel
            .store_settings(self.config_manager.settings_mut());
        if let Err(e) = self.config_manager.save_settings() {
            tracing::error!("Failed to save settings: {}", e);
        }
    }

    fn paste_from_clipboard(&mut self) -> Result<()> {
        let clipboard = self
            .clipboard
            .as_mut()
            .ok_or_else(|| SettingsError::Clipboard("no clipboard backend".to_string()))?;
        let text = clipboard
            .get_text()
            .map_err(|e| SettingsError::Clipboard(e.to_string()))?;
        self.settings_panel.paste_text(&text);
        Ok(())
    }

    fn draw(&mut self) -> Result<()> {
        let Self {
            terminal,
            settings_panel,
            confirm_dialog,
            config_manager,
            ..
        } = self;
        let theme = config_manager.theme();

        terminal
            .draw(|frame| {
                let area = frame.area();
                settings_panel.render(frame, area, !confirm_dialog.is_visible(), theme);
                confirm_dialog.render(frame, area, true, theme);
            })
            .map_err(|e| SettingsError::Terminal(e.to_string()))?;

        Ok(())
    }
}

impl Drop for App {
    fn drop(&mut self) {
        Self::restore_terminal();
    }
}
