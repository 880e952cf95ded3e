pub mod actions;
pub mod charts;
pub mod config;
pub mod counter;
pub mod persistence;
pub mod reducer;
pub mod state;

pub use actions::*;
pub use reducer::*;
pub use state::*;

pub use persistence::*;
