pub mod config;
pub use config::*;

pub mod machine;
pub use machine::*;

pub mod paytable;
pub use paytable::*;

pub mod pattern;
pub use pattern::*;
