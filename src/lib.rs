// src/lib.rs
#![deny(unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]

pub mod debrief;

pub mod util;
pub mod style;
pub mod logging;
pub mod settings;

pub mod catalog;
pub mod templates;
pub mod manifest;
pub mod registry;
pub mod plan;

pub mod prompt;
pub mod writer;
pub mod report;
pub mod install;

pub mod cli;
pub mod commands;
