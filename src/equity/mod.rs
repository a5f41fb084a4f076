pub mod river;
pub use river::*;

pub mod showdown;
pub use showdown::*;
