pub mod compile;
pub mod lifecycle;
pub mod watch;
