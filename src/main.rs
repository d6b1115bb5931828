use anyhow::Context;
use clap::Parser;
use outreach_composer::config::OutputFormat;
use outreach_composer::utils::logger;
use outreach_composer::{CliConfig, ComposerError, ComposerSession};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    // 初始化日誌
    if config.format == OutputFormat::Json {
        logger::init_json_logger(config.verbose);
    } else {
        logger::init_cli_logger(config.verbose);
    }
    tracing::debug!("CLI config: {:?}", config);

    let settings = match config.resolve() {
        Ok(settings) => settings,
        Err(e) => exit_with(&e),
    };

    let clipboard = match settings.clipboard() {
        Ok(clipboard) => clipboard,
        Err(e) => exit_with(&e),
    };

    let copy_requested = settings.copy;
    let session = ComposerSession::new(settings, clipboard);
    let report = session.run().await.context("composing message")?;

    if copy_requested && !report.copied {
        tracing::warn!("Message was rendered but not copied");
    }

    let output = session.render(&report).context("rendering output")?;
    println!("{}", output);

    Ok(())
}

fn exit_with(e: &ComposerError) -> ! {
    tracing::error!("❌ {}", e);
    tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
    eprintln!("❌ {}", e.user_friendly_message());
    eprintln!("💡 {}", e.recovery_suggestion());
    std::process::exit(1);
}
