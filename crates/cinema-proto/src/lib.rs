//! Shared types, configuration, and the JW Player playlist client.

pub mod catalog;
pub mod config;
pub mod jwplayer;
pub mod platform;
