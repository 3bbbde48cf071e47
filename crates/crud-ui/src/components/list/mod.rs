mod component;
mod resolve;

pub use component::*;
pub use resolve::*;
