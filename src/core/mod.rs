// src/core/mod.rs

pub mod extract;
pub mod fetch;
pub mod sanitize;
