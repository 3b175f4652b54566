//! Domain models
//!
//! This module contains all domain models used throughout the application.

pub mod manifest;
pub mod result;
pub mod summary;

pub use manifest::*;
pub use result::*;
pub use summary::*;
