use crate::utils::error::Result;

pub trait ReportSink: Send + Sync {
    fn write_report(&mut self, report: &str) -> Result<()>;
}

pub trait ConfigProvider: Send + Sync {
    fn operand_a(&self) -> f64;

    fn operand_b(&self) -> f64;
}
