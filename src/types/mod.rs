//! Data types for the booth layout.

mod booth;
mod detail;
mod layout;
mod selection;

pub use booth::*;
pub use detail::*;
pub use layout::*;
pub use selection::*;
