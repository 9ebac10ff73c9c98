use ratatui::{
    style::{Color, Style},
    text::Span,
};

use crate::registry::IconId;

/// Icon display mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IconMode {
    Emoji,    // Standard emoji icons (⏳, ⬇️, etc.)
    NerdFont, // Nerd Fonts icons (U+F017, etc.)
}

/// Icon theme using terminal colors (respects user's terminal theme)
#[derive(Debug, Clone)]
pub struct IconTheme {
    pub pending_color: Color,  // init/info phases
    pub upload_color: Color,   // upload/share phases
    pub search_color: Color,   // search phase
    pub download_color: Color, // download phase
    pub success_color: Color,  // downloaded/uploaded/unchanged
    pub error_color: Color,    // notfound/error and unknown statuses
    pub action_color: Color,   // close/view/alternatives hints
}

impl Default for IconTheme {
    fn default() -> Self {
        Self {
            pending_color: Color::Yellow,
            upload_color: Color::Cyan,
            search_color: Color::Blue,
            download_color: Color::Cyan,
            success_color: Color::Green,
            error_color: Color::Red,
            action_color: Color::Gray,
        }
    }
}

/// Icon renderer that handles both emoji and Nerd Font modes
pub struct IconRenderer {
    mode: IconMode,
    theme: IconTheme,
}

impl IconRenderer {
    pub fn new(mode: IconMode, theme: IconTheme) -> Self {
        Self { mode, theme }
    }

    /// Get the glyph span for an icon id
    pub fn icon(&self, id: IconId) -> Span<'static> {
        let (emoji_icon, nerd_icon, color) = match id {
            IconId::Time => ("⏳ ", "\u{F017} ", self.theme.pending_color),
            IconId::Upload => ("⬆️ ", "\u{F093} ", self.theme.upload_color),
            IconId::Search => ("🔍 ", "\u{F002} ", self.theme.search_color),
            IconId::Download => ("⬇️ ", "\u{F019} ", self.theme.download_color),
            IconId::Check => ("✅ ", "\u{F00C} ", self.theme.success_color),
            IconId::CheckSmall => ("✔ ", "\u{F058} ", self.theme.success_color),
            IconId::Error => ("❌ ", "\u{F06A} ", self.theme.error_color),
            IconId::Close => ("✖ ", "\u{F00D} ", self.theme.action_color),
            IconId::View => ("👁 ", "\u{F06E} ", self.theme.action_color),
            IconId::Plus => ("➕ ", "\u{F067} ", self.theme.action_color),
        };

        let icon = match self.mode {
            IconMode::Emoji => emoji_icon,
            IconMode::NerdFont => nerd_icon,
        };

        Span::styled(icon, Style::default().fg(color))
    }
}
