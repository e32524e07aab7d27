pub mod category;
pub mod task;

pub use category::{Category, Priority};
pub use task::Task;
