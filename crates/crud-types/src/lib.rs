pub mod config;
pub mod error;
pub mod i18n;
pub mod resource;
pub mod text;

pub use config::*;
pub use error::*;
pub use i18n::*;
pub use resource::*;
pub use text::*;
