//! Viewer systems: presentation adapters over the core's plain data

pub mod render;
