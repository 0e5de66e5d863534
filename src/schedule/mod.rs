mod entry;
mod week;

pub use entry::*;
pub use week::*;
