pub mod formatter;
pub mod transcript;

pub use formatter::*;
pub use transcript::*;
