//! Main module for textsan library functionality

pub mod config;
pub mod input;
pub mod logging;
pub mod output;
pub mod pipeline;
pub mod sanitizing;
pub mod statistics;
