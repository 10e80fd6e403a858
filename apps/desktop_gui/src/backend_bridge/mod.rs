//! Backend bridge: command queue from the UI thread to the async loader.

pub mod commands;
pub mod runtime;
