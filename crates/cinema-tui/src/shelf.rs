//! ShelfFocus — horizontal item focus within one shelf row.
//!
//! A shelf only answers `left`/`right`. Everything it wants the page to know
//! comes back as [`ShelfEvent`]s; the page never reads shelf internals.

use cinema_proto::catalog::{MediaItem, Shelf};

use crate::action::{NavKey, ShelfEvent};

/// Title emphasis while the shelf holds page focus.
pub const EMPHASIS_FOCUSED: f32 = 1.0;
/// Title emphasis otherwise.
pub const EMPHASIS_IDLE: f32 = 0.6;

pub struct ShelfFocus {
    index: usize,
    shelf: Shelf,
    focused: usize,
    has_focus: bool,
    title_alpha: f32,
}

impl ShelfFocus {
    pub fn new(index: usize, shelf: Shelf) -> Self {
        Self {
            index,
            shelf,
            focused: 0,
            has_focus: false,
            title_alpha: EMPHASIS_IDLE,
        }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn title(&self) -> &str {
        &self.shelf.title
    }

    pub fn items(&self) -> &[MediaItem] {
        &self.shelf.items
    }

    pub fn focused(&self) -> usize {
        self.focused
    }

    pub fn focused_item(&self) -> Option<&MediaItem> {
        self.shelf.items.get(self.focused)
    }

    pub fn has_focus(&self) -> bool {
        self.has_focus
    }

    pub fn title_alpha(&self) -> f32 {
        self.title_alpha
    }

    /// Handle a direction. `None` means the key is not ours and bubbles up.
    pub fn handle_nav(&mut self, key: NavKey) -> Option<Vec<ShelfEvent>> {
        match key {
            NavKey::Left => {
                if self.focused == 0 {
                    return Some(vec![ShelfEvent::ExitLeft(self.index)]);
                }
                Some(self.set_focused(self.focused - 1))
            }
            NavKey::Right => {
                let last = self.shelf.items.len().saturating_sub(1);
                Some(self.set_focused((self.focused + 1).min(last)))
            }
            NavKey::Up | NavKey::Down => None,
        }
    }

    /// Page focus arrived: re-announce the current item and raise emphasis.
    pub fn focus(&mut self) -> Vec<ShelfEvent> {
        self.has_focus = true;
        self.title_alpha = EMPHASIS_FOCUSED;
        self.announce()
    }

    pub fn unfocus(&mut self) {
        self.has_focus = false;
        self.title_alpha = EMPHASIS_IDLE;
    }

    /// First card of a `visible`-wide window that keeps the focused card on
    /// screen without scrolling past the end of the row.
    pub fn first_visible(&self, visible: usize) -> usize {
        self.focused
            .min(self.shelf.items.len().saturating_sub(visible))
    }

    fn set_focused(&mut self, index: usize) -> Vec<ShelfEvent> {
        if index == self.focused {
            return Vec::new();
        }
        self.focused = index;
        self.announce()
    }

    fn announce(&self) -> Vec<ShelfEvent> {
        self.focused_item()
            .map(|item| ShelfEvent::ItemFocused {
                shelf_index: self.index,
                item: item.clone(),
            })
            .into_iter()
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cinema_proto::catalog::default_resolved_shelves;

    fn shelf(index: usize) -> ShelfFocus {
        ShelfFocus::new(index, default_resolved_shelves()[index].clone())
    }

    fn focused_id(events: &[ShelfEvent]) -> Option<&str> {
        match events {
            [ShelfEvent::ItemFocused { item, .. }] => Some(item.id.as_str()),
            _ => None,
        }
    }

    #[test]
    fn left_on_first_item_exits_without_moving() {
        let mut row = shelf(1);
        let events = row.handle_nav(NavKey::Left).unwrap();
        assert_eq!(events, vec![ShelfEvent::ExitLeft(1)]);
        assert_eq!(row.focused(), 0);
    }

    #[test]
    fn right_is_clamped_to_last_item() {
        let mut row = shelf(0);
        for _ in 0..10 {
            row.handle_nav(NavKey::Right);
            assert!(row.focused() <= row.items().len() - 1);
        }
        assert_eq!(row.focused(), 2);
        // already at the end: nothing changes, nothing is announced
        assert_eq!(row.handle_nav(NavKey::Right), Some(vec![]));
    }

    #[test]
    fn moving_announces_the_new_item() {
        let mut row = shelf(0);
        let events = row.handle_nav(NavKey::Right).unwrap();
        assert_eq!(focused_id(&events), Some("demo-2"));
        match &events[0] {
            ShelfEvent::ItemFocused { shelf_index, .. } => assert_eq!(*shelf_index, 0),
            other => panic!("unexpected event {:?}", other),
        }

        let events = row.handle_nav(NavKey::Left).unwrap();
        assert_eq!(focused_id(&events), Some("demo-1"));
        assert_eq!(row.focused(), 0);
    }

    #[test]
    fn vertical_keys_bubble() {
        let mut row = shelf(0);
        assert!(row.handle_nav(NavKey::Up).is_none());
        assert!(row.handle_nav(NavKey::Down).is_none());
    }

    #[test]
    fn focus_reannounces_and_raises_emphasis() {
        let mut row = shelf(1);
        row.handle_nav(NavKey::Right);
        row.unfocus();
        assert_eq!(row.title_alpha(), EMPHASIS_IDLE);

        let events = row.focus();
        assert_eq!(focused_id(&events), Some("demo-5"));
        assert!(row.has_focus());
        assert_eq!(row.title_alpha(), EMPHASIS_FOCUSED);

        row.unfocus();
        assert!(!row.has_focus());
        assert_eq!(row.title_alpha(), EMPHASIS_IDLE);
    }

    #[test]
    fn empty_shelf_never_announces() {
        let mut empty = ShelfFocus::new(
            0,
            Shelf {
                title: "Empty".to_string(),
                playlist_id: "empty".to_string(),
                items: Vec::new(),
            },
        );
        assert!(empty.focus().is_empty());
        assert_eq!(empty.handle_nav(NavKey::Right), Some(vec![]));
        assert_eq!(empty.focused(), 0);
    }

    #[test]
    fn window_keeps_focus_visible_and_stops_at_end() {
        let mut row = shelf(0);
        assert_eq!(row.first_visible(2), 0);
        row.handle_nav(NavKey::Right);
        assert_eq!(row.first_visible(2), 1);
        row.handle_nav(NavKey::Right);
        assert_eq!(row.first_visible(2), 1);
        // everything fits: never scroll
        assert_eq!(row.first_visible(5), 0);
    }
}
