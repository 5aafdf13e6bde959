// src/lib.rs

#[macro_use]
pub mod macros;

pub mod config;
pub mod core;
pub mod data;
pub mod error;
pub mod gui;
pub mod log;
pub mod normalize;
pub mod pipeline;
pub mod present;
pub mod progress;
pub mod specs;

pub use data::{Dataset, RawTable, Record};
pub use error::PipelineError;
