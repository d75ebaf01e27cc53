pub mod config;
pub mod generate;
pub mod verify;
pub mod watch;
