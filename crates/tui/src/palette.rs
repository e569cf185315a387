//! Theme-driven color palette for the shell.

use ratatui::style::{Color, Modifier, Style};

use kirana_app::Theme;

/// Resolved colors for the active theme.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Palette {
    pub background: Color,
    pub text: Color,
    pub subtext: Color,
    pub accent: Color,
    pub border: Color,
    pub warn: Color,
}

impl Palette {
    pub fn for_theme(theme: Theme) -> Self {
        if theme.is_dark() {
            Self {
                background: Color::Reset,
                text: Color::White,
                subtext: Color::DarkGray,
                accent: Color::Green,
                border: Color::DarkGray,
                warn: Color::Red,
            }
        } else {
            Self {
                background: Color::White,
                text: Color::Black,
                subtext: Color::Gray,
                accent: Color::Green,
                border: Color::Gray,
                warn: Color::Red,
            }
        }
    }

    pub fn base(&self) -> Style {
        Style::default().fg(self.text).bg(self.background)
    }

    pub fn dim(&self) -> Style {
        Style::default().fg(self.subtext)
    }

    pub fn highlight(&self) -> Style {
        Style::default().fg(self.accent).add_modifier(Modifier::BOLD)
    }

    pub fn frame(&self) -> Style {
        Style::default().fg(self.border)
    }

    pub fn warning(&self) -> Style {
        Style::default().fg(self.warn)
    }
}
