// src/lib.rs

#[macro_use]
pub mod macros;

pub mod cli;
pub mod config;
pub mod core;
pub mod specs;

pub mod csv;
pub mod data;
pub mod date;
pub mod engine;
pub mod error;
pub mod export;
pub mod file;
pub mod gui;
pub mod logging;
pub mod progress;
pub mod record;
pub mod store;
