pub mod args;
pub mod call_site;
pub mod cli;
pub mod config;
pub mod logging;
