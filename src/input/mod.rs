//! Input handling for the interactive viewer

mod command_mapper;

pub use command_mapper::{CommandError, CommandMapper, ViewerAction};
