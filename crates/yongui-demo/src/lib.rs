#![forbid(unsafe_code)]

//! YongUI dropdown demo.

pub mod app;
pub mod cli;
pub mod logging;
