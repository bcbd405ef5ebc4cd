//! Commands Layer
//!
//! Handlers that bridge the command line to the checklist panel.

mod item_cmd;
mod view_cmd;

pub use item_cmd::*;
pub use view_cmd::*;
