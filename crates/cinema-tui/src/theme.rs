//! Color palette and style constants for the cinema TUI.

use ratatui::style::{Color, Modifier, Style};

use crate::page::MenuEmphasis;
use crate::shelf::EMPHASIS_FOCUSED;

// ── Color palette ─────────────────────────────────────────────────────────────

pub const C_BG: Color = Color::Rgb(11, 18, 36);
pub const C_HERO_BG: Color = Color::Rgb(17, 26, 48);
pub const C_BRAND: Color = Color::Rgb(248, 250, 252);
pub const C_PRIMARY: Color = Color::Rgb(226, 232, 240);
pub const C_SECONDARY: Color = Color::Rgb(203, 213, 225);
pub const C_MUTED: Color = Color::Rgb(148, 163, 184);
pub const C_MENU_SELECTED: Color = Color::Rgb(241, 245, 249);
pub const C_MENU_ACTIVE: Color = Color::Rgb(226, 232, 240);
pub const C_MENU_INACTIVE: Color = Color::Rgb(148, 163, 184);
pub const C_CARD_BORDER: Color = Color::Rgb(51, 65, 85);
pub const C_CARD_BORDER_FOCUSED: Color = Color::Rgb(56, 189, 248); // sky blue focus ring
pub const C_DIM: Color = Color::Rgb(71, 85, 105);

// ── Predefined styles ─────────────────────────────────────────────────────────

pub fn style_brand() -> Style {
    Style::default().fg(C_BRAND).add_modifier(Modifier::BOLD)
}

pub fn style_secondary() -> Style {
    Style::default().fg(C_SECONDARY)
}

pub fn style_muted() -> Style {
    Style::default().fg(C_MUTED)
}

pub fn style_dim() -> Style {
    Style::default().fg(C_DIM)
}

/// Full-strength emphasis is bold; anything lower is drawn dimmed.
pub fn style_emphasis(alpha: f32) -> Style {
    if alpha >= EMPHASIS_FOCUSED {
        Style::default().fg(C_PRIMARY).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(C_MUTED).add_modifier(Modifier::DIM)
    }
}

pub fn style_menu(emphasis: MenuEmphasis) -> Style {
    match emphasis {
        MenuEmphasis::Selected => Style::default()
            .fg(C_MENU_SELECTED)
            .add_modifier(Modifier::BOLD),
        MenuEmphasis::Active => Style::default().fg(C_MENU_ACTIVE),
        MenuEmphasis::Inactive => Style::default().fg(C_MENU_INACTIVE),
    }
}

pub fn style_card_border(focused: bool) -> Style {
    if focused {
        Style::default().fg(C_CARD_BORDER_FOCUSED)
    } else {
        Style::default().fg(C_CARD_BORDER)
    }
}
