use anyhow::Context;
use clap::Parser;
use spiral_matrix::utils::error::ErrorSeverity;
use spiral_matrix::utils::{logger, validation::Validate};
use spiral_matrix::{run_configured, CliConfig, LocalStorage, SpiralError, TomlConfig};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    // 初始化日誌
    if config.log_json {
        logger::init_json_logger();
    } else {
        logger::init_cli_logger(config.verbose);
    }

    tracing::info!("Starting spiral-matrix CLI");
    tracing::debug!("CLI config: {:?}", config);

    let storage = LocalStorage::new(".");

    let result = match config.config.clone() {
        Some(path) => {
            tracing::info!("📁 Loading configuration from: {}", path);
            let toml_config = TomlConfig::from_file(&path)
                .with_context(|| format!("Failed to load config file '{}'", path))?;
            check(&toml_config);
            run_configured(toml_config, storage).await
        }
        None => {
            check(&config);
            run_configured(config, storage).await
        }
    };

    match result {
        Ok(destination) => {
            tracing::info!("✅ Spiral traversal completed, output: {}", destination);
        }
        Err(e) => exit_with(e),
    }

    Ok(())
}

// 驗證配置，失敗就直接結束
fn check(config: &impl Validate) {
    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        exit_with(e);
    }
}

fn exit_with(e: SpiralError) -> ! {
    tracing::error!(
        "❌ Spiral traversal failed: {} (Category: {:?}, Severity: {:?})",
        e,
        e.category(),
        e.severity()
    );
    tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

    eprintln!("❌ {}", e.user_friendly_message());
    eprintln!("💡 {}", e.recovery_suggestion());

    // 根據錯誤嚴重程度決定退出碼
    let exit_code = match e.severity() {
        ErrorSeverity::Low => 0,
        ErrorSeverity::Medium => 2,
        ErrorSeverity::High => 1,
        ErrorSeverity::Critical => 3,
    };
    std::process::exit(exit_code)
}
