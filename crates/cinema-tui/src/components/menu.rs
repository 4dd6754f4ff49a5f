//! Menu — one entry per shelf, highlighted by page focus.

use ratatui::{
    layout::Rect,
    style::Modifier,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::page::PageNav;
use crate::shelf::EMPHASIS_FOCUSED;
use crate::theme::style_menu;

pub fn draw(frame: &mut Frame, area: Rect, page: &PageNav) {
    let lines: Vec<Line> = page
        .menu_items()
        .iter()
        .enumerate()
        .flat_map(|(i, title)| {
            let mut style = style_menu(page.menu_emphasis(i));
            if page.menu_alpha(i) < EMPHASIS_FOCUSED {
                style = style.add_modifier(Modifier::DIM);
            }
            // blank spacer line between entries
            [Line::from(Span::styled(title.clone(), style)), Line::default()]
        })
        .collect();

    frame.render_widget(Paragraph::new(lines), area);
}
