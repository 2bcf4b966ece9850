// src/generators/mod.rs
pub mod password;

pub use password::{validate, PasswordGenerator, ValidationError, MAX_LENGTH, MIN_LENGTH};
