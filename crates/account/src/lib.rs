mod account;
pub mod password;
pub mod repository;

pub use account::*;
