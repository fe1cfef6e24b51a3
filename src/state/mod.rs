//! Application state module

mod age;
mod forms;
mod validation;
mod view;

pub use age::*;
pub use forms::*;
pub use view::*;
