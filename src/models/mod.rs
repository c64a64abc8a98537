//! Models module for the reading library
//!
//! This module contains the data models shared by the text engines,
//! the store and the JavaScript API.

pub mod core;
pub mod dictionary;
pub mod elements;

// Re-export commonly used types
pub use core::*;
pub use dictionary::*;
pub use elements::*;
