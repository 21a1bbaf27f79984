//! Library side of the `jobboard` command-line tool.

pub mod listing;
pub mod logging;
pub mod render;
pub mod settings;
