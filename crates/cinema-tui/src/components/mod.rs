//! Drawing for each region of the page. Components only read controller
//! state; input never flows through here.

pub mod header;
pub mod hero;
pub mod keys_bar;
pub mod menu;
pub mod shelf_row;
