//! Data models.

pub mod config;
pub mod line_item;
