//! CLI module

mod app;

pub use app::run;
