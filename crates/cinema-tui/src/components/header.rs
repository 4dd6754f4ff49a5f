//! Header — brand name and tagline.

use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::theme::{style_brand, style_secondary};

pub fn draw(frame: &mut Frame, area: Rect, brand: &str, tagline: &str) {
    let lines = vec![
        Line::from(Span::styled(brand.to_string(), style_brand())),
        Line::from(Span::styled(tagline.to_string(), style_secondary())),
    ];
    frame.render_widget(Paragraph::new(lines), area);
}
