// Utils compartidos

pub mod constants;
pub mod format;

pub use constants::*;
pub use format::*;
