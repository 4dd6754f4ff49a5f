//! Action enum — remote-control input, controller events, and focus commands.

use cinema_proto::catalog::{MediaItem, Shelf};

/// The four directions of a living-room remote.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavKey {
    Up,
    Down,
    Left,
    Right,
}

/// Which region of the page owns directional input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusArea {
    Menu,
    Shelves,
}

/// Upward events from a shelf to the page.
#[derive(Debug, Clone, PartialEq)]
pub enum ShelfEvent {
    /// The shelf's highlighted item changed (or was re-announced on focus).
    ItemFocused { shelf_index: usize, item: MediaItem },
    /// `left` was pressed on the first item.
    ExitLeft(usize),
}

/// Everything the App dispatches.
/// Controllers produce Actions; the App routes them.
#[derive(Debug, Clone)]
pub enum Action {
    // ── Input ────────────────────────────────────────────────────────────────
    Nav(NavKey),

    // ── Page lifecycle ───────────────────────────────────────────────────────
    ShelvesLoaded(Vec<Shelf>),
    PageFocused,

    // ── Focus commands (page → shelf) ────────────────────────────────────────
    FocusShelf(usize),

    // ── Events (shelf → page) ────────────────────────────────────────────────
    Shelf(ShelfEvent),

    // ── System ───────────────────────────────────────────────────────────────
    Quit,
    Noop,
}

impl From<ShelfEvent> for Action {
    fn from(event: ShelfEvent) -> Self {
        Action::Shelf(event)
    }
}
