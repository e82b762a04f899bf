pub mod checker;
pub mod cli;
pub mod counter;
pub mod decoder;
pub mod error;
pub mod output;
pub mod reconstruct;
pub mod scanner;

pub use error::{Result, WordCountGuardError};

pub const EXIT_SUCCESS: i32 = 0;
pub const EXIT_CHECK_FAILED: i32 = 1;
pub const EXIT_CONFIG_ERROR: i32 = 2;

#[cfg(test)]
#[path = "lib_tests.rs"]
mod tests;
