//! Application state module

mod app_state;
mod employment;
mod forms;
mod step;
mod update;

pub use app_state::*;
pub use employment::*;
pub use forms::*;
pub use step::*;
pub use update::*;
