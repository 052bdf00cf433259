pub mod constant;
pub mod search;

pub use constant::*;
pub use search::*;
