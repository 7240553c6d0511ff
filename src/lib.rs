pub mod catalog;
pub mod cli;
pub mod config;
pub mod logging;
pub mod router;
pub mod scheduling;
pub mod shutdown;
pub mod ui;
