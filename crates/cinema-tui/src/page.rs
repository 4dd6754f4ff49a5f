//! PageNav — page-level navigation between the menu column and the shelves.
//!
//! Owns which shelf is active, which region has input, and the hero item.
//! Focus changes it wants applied go out as `Action::FocusShelf`; shelf
//! news comes in through [`PageNav::on_shelf_event`].

use cinema_proto::catalog::{MediaItem, Shelf};

use crate::action::{Action, FocusArea, NavKey, ShelfEvent};
use crate::shelf::{EMPHASIS_FOCUSED, EMPHASIS_IDLE};

pub const HERO_LOADING_TITLE: &str = "Loading your lineup";
pub const HERO_LOADING_DESCRIPTION: &str = "Fetching JW Player shelves and preparing focus rings.";

/// How strongly a menu entry is drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuEmphasis {
    /// Menu has input and this is the active shelf.
    Selected,
    /// Active shelf, but input is on the shelves.
    Active,
    Inactive,
}

pub struct PageNav {
    shelf_count: usize,
    active_shelf: usize,
    focus_area: FocusArea,
    hero: Option<MediaItem>,
    menu_items: Vec<String>,
}

impl PageNav {
    pub fn new() -> Self {
        Self {
            shelf_count: 0,
            active_shelf: 0,
            focus_area: FocusArea::Shelves,
            hero: None,
            menu_items: Vec::new(),
        }
    }

    pub fn active_shelf(&self) -> usize {
        self.active_shelf
    }

    pub fn focus_area(&self) -> FocusArea {
        self.focus_area
    }

    pub fn hero(&self) -> Option<&MediaItem> {
        self.hero.as_ref()
    }

    pub fn menu_items(&self) -> &[String] {
        &self.menu_items
    }

    pub fn handle_nav(&mut self, key: NavKey) -> Vec<Action> {
        match key {
            NavKey::Up => {
                let out = self.set_active(self.active_shelf.saturating_sub(1));
                if self.focus_area == FocusArea::Shelves && self.active_shelf == 0 {
                    self.focus_area = FocusArea::Menu;
                }
                out
            }
            NavKey::Down => {
                self.focus_area = FocusArea::Shelves;
                let last = self.shelf_count.saturating_sub(1);
                self.set_active((self.active_shelf + 1).min(last))
            }
            NavKey::Left => {
                if self.focus_area == FocusArea::Shelves {
                    self.focus_area = FocusArea::Menu;
                }
                Vec::new()
            }
            NavKey::Right => {
                if self.focus_area == FocusArea::Menu {
                    self.focus_area = FocusArea::Shelves;
                    return vec![Action::FocusShelf(self.active_shelf)];
                }
                Vec::new()
            }
        }
    }

    pub fn on_shelf_event(&mut self, event: &ShelfEvent) -> Vec<Action> {
        match event {
            ShelfEvent::ItemFocused { shelf_index, item } => {
                let out = self.set_active(*shelf_index);
                self.hero = Some(item.clone());
                out
            }
            ShelfEvent::ExitLeft(shelf_index) => {
                if *shelf_index == self.active_shelf {
                    self.focus_area = FocusArea::Menu;
                }
                Vec::new()
            }
        }
    }

    /// Record the lineup. The first load seeds the hero unless a focus event
    /// got there first.
    pub fn on_shelves_loaded(&mut self, shelves: &[Shelf]) {
        let was_empty = self.shelf_count == 0;
        self.shelf_count = shelves.len();
        self.menu_items = shelves.iter().map(|s| s.title.clone()).collect();

        if was_empty && self.hero.is_none() {
            self.hero = shelves.first().and_then(|s| s.items.first()).cloned();
        }
    }

    /// The page regained focus: input returns to the shelves.
    pub fn on_focus(&mut self) -> Vec<Action> {
        self.focus_area = FocusArea::Shelves;
        self.active_shelf = self.active_shelf.min(self.shelf_count.saturating_sub(1));
        vec![Action::FocusShelf(self.active_shelf)]
    }

    fn set_active(&mut self, index: usize) -> Vec<Action> {
        if index == self.active_shelf {
            return Vec::new();
        }
        self.active_shelf = index;
        vec![Action::FocusShelf(index)]
    }

    // ── Projections ──────────────────────────────────────────────────────────

    pub fn menu_emphasis(&self, index: usize) -> MenuEmphasis {
        let active = index == self.active_shelf;
        match (self.focus_area, active) {
            (FocusArea::Menu, true) => MenuEmphasis::Selected,
            (_, true) => MenuEmphasis::Active,
            _ => MenuEmphasis::Inactive,
        }
    }

    pub fn menu_alpha(&self, index: usize) -> f32 {
        if self.menu_emphasis(index) == MenuEmphasis::Selected {
            EMPHASIS_FOCUSED
        } else {
            EMPHASIS_IDLE
        }
    }

    /// Number of shelves scrolled off the top.
    pub fn shelf_offset(&self) -> usize {
        self.active_shelf
    }

    pub fn hero_title(&self) -> &str {
        self.hero
            .as_ref()
            .map(|h| h.title.as_str())
            .filter(|t| !t.is_empty())
            .unwrap_or(HERO_LOADING_TITLE)
    }

    pub fn hero_description(&self) -> &str {
        self.hero
            .as_ref()
            .map(|h| h.description.as_str())
            .filter(|d| !d.is_empty())
            .unwrap_or(HERO_LOADING_DESCRIPTION)
    }

    pub fn hero_background(&self) -> Option<&str> {
        self.hero.as_ref().map(|h| h.background.as_str())
    }

    pub fn hero_meta(&self) -> String {
        self.hero
            .as_ref()
            .map(|h| format_duration(h.duration))
            .unwrap_or_default()
    }
}

impl Default for PageNav {
    fn default() -> Self {
        Self::new()
    }
}

/// `"2m 05s"`. Missing (zero or invalid) durations render as nothing.
pub fn format_duration(secs: f64) -> String {
    if !secs.is_finite() || secs <= 0.0 {
        return String::new();
    }
    let minutes = (secs / 60.0).floor() as u64;
    let seconds = (secs % 60.0).floor() as u64;
    format!("{}m {:02}s", minutes, seconds)
}
