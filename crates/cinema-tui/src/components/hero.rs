//! Hero panel — the most recently focused item, or a loading placeholder.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Paragraph, Wrap},
    Frame,
};

use crate::page::PageNav;
use crate::theme::{style_brand, style_dim, style_muted, style_secondary, C_HERO_BG};

pub fn draw(frame: &mut Frame, area: Rect, page: &PageNav) {
    let block = Block::default().style(Style::default().bg(C_HERO_BG));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Min(1),
            Constraint::Length(1),
        ])
        .split(inner);

    let top = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(0), Constraint::Length(12)])
        .split(rows[0]);

    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(
            format!(" {}", page.hero_title()),
            style_brand(),
        ))),
        top[0],
    );
    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(page.hero_meta(), style_muted())).right_aligned()),
        top[1],
    );

    let description_style = if page.hero().is_some() {
        style_secondary()
    } else {
        style_muted()
    };
    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(
            format!(" {}", page.hero_description()),
            description_style,
        )))
        .wrap(Wrap { trim: true }),
        rows[1],
    );

    if let Some(background) = page.hero_background().filter(|b| !b.is_empty()) {
        frame.render_widget(
            Paragraph::new(Line::from(Span::styled(format!(" ▣ {}", background), style_dim()))),
            rows[2],
        );
    }
}
