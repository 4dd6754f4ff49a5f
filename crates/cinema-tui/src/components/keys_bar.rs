//! Footer key hints.

use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::theme::{style_dim, style_muted};

const HINTS: [(&str, &str); 3] = [("←↑↓→ / hjkl", "navigate"), ("q", "quit"), ("esc", "quit")];

pub fn draw(frame: &mut Frame, area: Rect) {
    let spans: Vec<Span> = HINTS
        .iter()
        .flat_map(|(key, label)| {
            [
                Span::styled(format!(" {} ", key), style_muted()),
                Span::styled(format!("{}  ", label), style_dim()),
            ]
        })
        .collect();
    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}
