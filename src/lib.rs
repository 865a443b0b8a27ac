pub mod catalog;
pub mod cli;
pub mod config;
pub mod error;
pub mod quiz;
pub mod report;
