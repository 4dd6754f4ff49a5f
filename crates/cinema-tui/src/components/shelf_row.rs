//! ShelfRow — a shelf title over a horizontally scrolled strip of cards.

use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::page::format_duration;
use crate::shelf::ShelfFocus;
use crate::theme::{style_card_border, style_emphasis, style_muted, style_secondary};

/// Title line plus one bordered card.
pub const ROW_HEIGHT: u16 = 6;

/// `show_focus` is false while input sits in the menu, so the card ring
/// is hidden even though the shelf keeps its item focus.
pub fn draw(frame: &mut Frame, area: Rect, row: &ShelfFocus, card_width: u16, show_focus: bool) {
    if area.height < 2 || area.width == 0 {
        return;
    }

    let title_area = Rect::new(area.x, area.y, area.width, 1);
    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(
            row.title().to_string(),
            style_emphasis(row.title_alpha()),
        ))),
        title_area,
    );

    let card_width = card_width.max(4);
    let visible = (area.width / card_width).max(1) as usize;
    let first = row.first_visible(visible);
    let card_height = area.height - 1;

    for (slot, (idx, item)) in row
        .items()
        .iter()
        .enumerate()
        .skip(first)
        .take(visible)
        .enumerate()
    {
        let x = area.x + slot as u16 * card_width;
        let width = card_width.min(area.x + area.width - x);
        let card_area = Rect::new(x, area.y + 1, width, card_height);

        let focused = show_focus && row.has_focus() && idx == row.focused();
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(style_card_border(focused));
        let inner = block.inner(card_area);
        frame.render_widget(block, card_area);

        let text_width = inner.width as usize;
        let title_style = if focused {
            style_emphasis(1.0)
        } else {
            style_secondary()
        };
        let lines = vec![
            Line::from(Span::styled(truncate(&item.title, text_width), title_style)),
            Line::from(Span::styled(
                truncate(&format_duration(item.duration), text_width),
                style_muted(),
            )),
        ];
        frame.render_widget(Paragraph::new(lines), inner);
    }
}

/// Clip `text` to `max` display columns, ending in `…` when cut.
pub fn truncate(text: &str, max: usize) -> String {
    if text.width() <= max {
        return text.to_string();
    }
    if max == 0 {
        return String::new();
    }

    let mut out = String::new();
    let mut used = 0;
    for ch in text.chars() {
        let w = ch.width().unwrap_or(0);
        if used + w > max - 1 {
            break;
        }
        out.push(ch);
        used += w;
    }
    out.push('…');
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truncate_keeps_short_text() {
        assert_eq!(truncate("Skydive", 10), "Skydive");
        assert_eq!(truncate("Skydive", 7), "Skydive");
    }

    #[test]
    fn truncate_cuts_on_display_width() {
        assert_eq!(truncate("Into the Forest", 8), "Into th…");
        assert_eq!(truncate("映画の夜", 5), "映画…");
        assert_eq!(truncate("anything", 0), "");
    }
}
