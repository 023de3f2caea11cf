use std::path::{Path, PathBuf};
use std::sync::Arc;

use clap::Parser;
use tracing::info;

use emojify::bridge::things::ThingsBridge;
use emojify::completer::openai::OpenAiCompleter;
use emojify::config::{RawSettings, Settings, load_env_file};
use emojify::consts::{
    DOTENV_FILE, ENV_API_KEY, ENV_API_URL, ENV_APP, ENV_LOG_FILE, ENV_LOG_LEVEL, ENV_MODEL,
};
use emojify::engine::DecisionEngine;
use emojify::engine::pipeline::{Pipeline, PipelineConfig};
use emojify::logging::init_logging;

/// Every flag is optional; a bare invocation runs once with defaults.
#[derive(Parser)]
#[command(name = "emojify", version, about = "Adds emojis to Things 3 to-do titles.")]
struct Cli {
    /// OpenAI API key
    #[arg(long, env = ENV_API_KEY, hide_env_values = true)]
    api_key: Option<String>,

    /// Chat model used for rewrites
    #[arg(short, long, env = ENV_MODEL)]
    model: Option<String>,

    /// Base URL of an OpenAI-compatible API
    #[arg(long, env = ENV_API_URL)]
    api_url: Option<String>,

    /// Scripting name of the task manager application
    #[arg(long, env = ENV_APP)]
    app: Option<String>,

    /// Append logs to this file
    #[arg(long, env = ENV_LOG_FILE)]
    log_file: Option<PathBuf>,

    /// trace, debug, info, warn or error
    #[arg(long, env = ENV_LOG_LEVEL)]
    log_level: Option<String>,

    /// Decide rewrites and log them without renaming anything
    #[arg(long, default_value_t = false)]
    dry_run: bool,
}

impl From<Cli> for RawSettings {
    fn from(cli: Cli) -> Self {
        Self {
            api_key: cli.api_key,
            model: cli.model,
            api_url: cli.api_url,
            app: cli.app,
            log_file: cli.log_file,
            log_level: cli.log_level,
            dry_run: cli.dry_run,
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Must run before parsing so the clap env fallbacks see `.env` values.
    load_env_file(Path::new(DOTENV_FILE))?;
    let settings = Settings::resolve(Cli::parse().into())?;
    let _guard = init_logging(&settings.log_file, settings.log_level)?;

    info!(
        model = %settings.model,
        app = %settings.app,
        dry_run = settings.dry_run,
        "starting run"
    );

    let completer = OpenAiCompleter::new(settings.api_key.clone(), Some(settings.model.clone()))
        .with_base_url(&settings.api_url);
    let bridge = ThingsBridge::new(settings.app.clone());

    let pipeline = Pipeline::new(
        Arc::new(bridge),
        DecisionEngine::new(Arc::new(completer)),
        PipelineConfig {
            dry_run: settings.dry_run,
        },
    );

    // A failed fetch is logged by the pipeline and not signalled through the
    // exit code.
    let _ = pipeline.run().await;

    Ok(())
}
