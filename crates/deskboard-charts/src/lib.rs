pub mod backend;
pub mod contracts;
pub mod registry;

pub use backend::*;
pub use contracts::*;
pub use registry::*;
