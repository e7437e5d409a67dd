pub mod command;
pub use command::*;

pub mod console;
pub use console::*;

pub mod tally;
pub use tally::*;
