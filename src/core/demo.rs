use crate::core::{ConfigProvider, Operation, Operator, ReportSink};
use crate::utils::error::Result;

const REPORT_TITLE: &str = "CMake Learning Project";
const REPORT_RULE: &str = "----------------------";

pub struct DemoRunner<S: ReportSink, C: ConfigProvider> {
    sink: S,
    config: C,
}

impl<S: ReportSink, C: ConfigProvider> DemoRunner<S, C> {
    pub fn new(sink: S, config: C) -> Self {
        Self { sink, config }
    }

    /// Renders the demo report and hands it to the sink in a single write.
    /// Returns the rendered text.
    pub fn run(&mut self) -> Result<String> {
        let a = self.config.operand_a();
        let b = self.config.operand_b();

        tracing::debug!("Rendering demo report for a={}, b={}", a, b);

        // 固定順序：先加法，再減法
        let operations = [
            Operation::new(a, b, Operator::Add),
            Operation::new(a, b, Operator::Subtract),
        ];

        let mut report = String::new();
        report.push_str(REPORT_TITLE);
        report.push('\n');
        report.push_str(REPORT_RULE);
        report.push('\n');

        for op in &operations {
            report.push_str(&format!(
                "{} {} {} = {}",
                op.operand_a,
                op.operator.symbol(),
                op.operand_b,
                op.evaluate()
            ));
            report.push('\n');
        }

        self.sink.write_report(&report)?;

        tracing::debug!("Report written ({} bytes)", report.len());

        Ok(report)
    }
}
