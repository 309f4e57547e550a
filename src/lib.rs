//! Simplified naval-battle board: ship placement across four orientations
//! and ability area-of-effect overlays on a fixed 10×10 grid.

mod ability;
mod common;
mod config;
mod grid;
mod logging;
mod overlay;
mod placement;
mod ship;
mod ui;

pub use ability::*;
pub use common::*;
pub use config::*;
pub use grid::*;
pub use logging::init_logging;
pub use overlay::*;
pub use placement::*;
pub use ship::*;
pub use ui::*;
