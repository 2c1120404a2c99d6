pub mod args;
pub mod config;
pub mod db;
pub mod error;
pub mod log;
pub mod output;
pub mod reference;
