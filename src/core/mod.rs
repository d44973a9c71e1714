pub mod demo;
pub mod math;

pub use crate::domain::model::{Operation, Operator};
pub use crate::domain::ports::{ConfigProvider, ReportSink};
pub use crate::utils::error::Result;
