use small_math::utils::{logger, validation::Validate};
use small_math::{ConsoleSink, DemoConfig, DemoRunner};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = DemoConfig::default();

    // 初始化日誌
    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting small-math demo");
    if config.verbose {
        tracing::debug!("Demo config: {:?}", config);
    }

    // 驗證配置
    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        eprintln!("❌ {}", e);
        std::process::exit(1);
    }

    let sink = ConsoleSink::new();
    let mut runner = DemoRunner::new(sink, config);

    match runner.run() {
        Ok(_) => {
            tracing::info!("✅ Demo completed successfully");
        }
        Err(e) => {
            tracing::error!("❌ Demo failed: {}", e);
            eprintln!("❌ {}", e);
            std::process::exit(1);
        }
    }

    Ok(())
}
