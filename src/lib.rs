pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use config::{console::ConsoleSink, DemoConfig};
pub use core::{demo::DemoRunner, math};
pub use utils::error::{DemoError, Result};
