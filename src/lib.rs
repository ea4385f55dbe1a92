//! wire3d - Interactive 3D wireframe viewer
//!
//! A terminal shell around the `wire3d_core` domain model: layered
//! configuration, a command mapper turning REPL lines into semantic
//! actions, a demo model builder, and a character-grid plotter.

pub mod config;
pub mod input;
pub mod scene;
pub mod systems;
