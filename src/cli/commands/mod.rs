//! Command implementations

mod locate;
mod presets;
mod prune;
mod selection;

pub use locate::locate;
pub use presets::presets;
pub use prune::prune;
