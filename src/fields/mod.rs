pub mod catalog;
pub mod constraint;
pub mod name;

pub use catalog::*;
pub use constraint::*;
pub use name::*;
