//! md-issues library - Parse markdown task plans into issue records

pub mod cli;
pub mod config;
pub mod task;
pub mod upload;
