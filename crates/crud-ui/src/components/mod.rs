// Leaf primitives
pub mod breadcrumb;
pub mod button;
pub mod card;

// Page layouts
pub mod list;

pub use breadcrumb::*;
pub use button::*;
pub use card::*;
pub use list::*;
