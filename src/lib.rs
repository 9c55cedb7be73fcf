// src/lib.rs

//! CAU RSS static site generator library

pub mod error;
pub mod models;
pub mod pipeline;
pub mod services;
pub mod utils;
