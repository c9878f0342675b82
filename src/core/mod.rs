pub mod constants;
pub mod lang;
pub mod scroll;
pub mod spotlight;

pub use lang::*;
pub use scroll::*;
pub use spotlight::*;
