use ratatui::style::{Color, Modifier, Style};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Theme {
    pub name: String,
    pub colors: ThemeColors,
    pub focus: FocusStyle,
    pub panel: SettingsPaneStyle,
    pub dialog: DialogStyle,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            name: "default".to_string(),
            colors: ThemeColors::default(),
            focus: FocusStyle::default(),
            panel: SettingsPaneStyle::default(),
            dialog: DialogStyle::default(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ThemeColors {
    pub background: HexColor,
    pub foreground: HexColor,
    pub primary: HexColor,
    pub secondary: HexColor,
    pub accent: HexColor,
    pub success: HexColor,
    pub warning: HexColor,
    pub error: HexColor,
    pub muted: HexColor,
}

impl Default for ThemeColors {
    fn default() -> Self {
        Self {
            background: HexColor::new("#1a1b26"),
            foreground: HexColor::new("#c0caf5"),
            primary: HexColor::new("#7aa2f7"),
            secondary: HexColor::new("#9ece6a"),
            accent: HexColor::new("#bb9af7"),
            success: HexColor::new("#9ece6a"),
            warning: HexColor::new("#e0af68"),
            error: HexColor::new("#f7768e"),
            muted: HexColor::new("#565f89"),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FocusStyle {
    pub focused_border: HexColor,
    pub unfocused_border: HexColor,
    pub focused_title: HexColor,
    pub unfocused_title: HexColor,
    pub use_bold_focused: bool,
}

impl Default for FocusStyle {
    fn default() -> Self {
        Self {
            focused_border: HexColor::new("#7aa2f7"),
            unfocused_border: HexColor::new("#3b4261"),
            focused_title: HexColor::new("#bb9af7"),
            unfocused_title: HexColor::new("#565f89"),
            use_bold_focused: true,
        }
    }
}

/// Colors for the settings panel rows: radio options, field labels and
/// values, and the disabled rendering of fields the current mode locks.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SettingsPaneStyle {
    pub label_fg: HexColor,
    pub value_fg: HexColor,
    pub disabled_fg: HexColor,
    pub selected_fg: HexColor,
    pub cursor_indicator: String,
    pub radio_selected: String,
    pub radio_unselected: String,
}

impl Default for SettingsPaneStyle {
    fn default() -> Self {
        Self {
            label_fg: HexColor::new("#c0caf5"),
            value_fg: HexColor::new("#bb9af7"),
            disabled_fg: HexColor::new("#565f89"),
            selected_fg: HexColor::new("#7aa2f7"),
            cursor_indicator: "▸".to_string(),
            radio_selected: "(•)".to_string(),
            radio_unselected: "( )".to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DialogStyle {
    pub border: HexColor,
    pub title_fg: HexColor,
    pub body_fg: HexColor,
    pub hint_fg: HexColor,
}

impl Default for DialogStyle {
    fn default() -> Self {
        Self {
            border: HexColor::new("#e0af68"),
            title_fg: HexColor::new("#e0af68"),
            body_fg: HexColor::new("#c0caf5"),
            hint_fg: HexColor::new("#565f89"),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(transparent)]
pub struct HexColor(String);

impl HexColor {
    pub fn new(hex: &str) -> Self {
        Self(hex.to_string())
    }

    pub fn to_color(&self) -> Color {
        self.parse_hex().unwrap_or(Color::Reset)
    }

    fn parse_hex(&self) -> Option<Color> {
        let hex = self.0.trim_start_matches('#');
        if hex.len() != 6 {
            return None;
        }

        let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
        let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
        let b = u8::from_str_radix(&hex[4..6], 16).ok()?;

        Some(Color::Rgb(r, g, b))
    }
}

impl Default for HexColor {
    fn default() -> Self {
        Self("#ffffff".to_string())
    }
}

impl Theme {
    pub fn border_style(&self, focused: bool) -> Style {
        let color = if focused {
            self.focus.focused_border.to_color()
        } else {
            self.focus.unfocused_border.to_color()
        };

        let mut style = Style::default().fg(color);
        if focused && self.focus.use_bold_focused {
            style = style.add_modifier(Modifier::BOLD);
        }
        style
    }

    pub fn title_style(&self, focused: bool) -> Style {
        let color = if focused {
            self.focus.focused_title.to_color()
        } else {
            self.focus.unfocused_title.to_color()
        };

        let mut style = Style::default().fg(color);
        if focused && self.focus.use_bold_focused {
            style = style.add_modifier(Modifier::BOLD);
        }
        style
    }

    pub fn field_value_style(&self, enabled: bool) -> Style {
        if enabled {
            Style::default().fg(self.panel.value_fg.to_color())
        } else {
            Style::default()
                .fg(self.panel.disabled_fg.to_color())
                .add_modifier(Modifier::DIM)
        }
    }

    pub fn field_label_style(&self, enabled: bool) -> Style {
        if enabled {
            Style::default().fg(self.panel.label_fg.to_color())
        } else {
            Style::default().fg(self.panel.disabled_fg.to_color())
        }
    }
}
