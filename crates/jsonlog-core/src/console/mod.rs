//! Console output: where rendered lines go and how levels are styled

mod traits;
mod noop;
mod stdout;
mod memory;
mod style;

pub use traits::{Console, SharedConsole};
pub use noop::NoOpConsole;
pub use stdout::StdoutConsole;
pub use memory::MemoryConsole;
pub use style::{LevelStyle, StyleTable, DEFAULT_STYLES};
