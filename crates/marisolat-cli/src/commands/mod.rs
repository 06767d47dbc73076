pub mod config;
pub mod night;
pub mod now;
pub mod qibla;
pub mod schedule;
pub mod watch;
