pub mod tasks;

pub use tasks::*;
