pub mod reels;
pub use reels::*;

pub mod spinner;
pub use spinner::*;

pub mod symbol;
pub use symbol::*;

pub mod weights;
pub use weights::*;

pub mod wheel;
pub use wheel::*;
