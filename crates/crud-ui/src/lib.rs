pub mod attributes;
pub mod components;
pub mod context;

#[cfg(test)]
mod testing;

pub use components::*;
pub use context::*;
