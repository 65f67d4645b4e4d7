mod recipe;
pub mod repository;

pub use recipe::*;
