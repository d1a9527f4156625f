//! CLI entrypoint for docgen
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Context, Result, bail};
use clap::Parser;
use docgen_application::{
    AgentToolkits, AutoApproveFeedback, ConversationLogger, GenerateDocumentInput,
    GenerateDocumentUseCase, GroupChatProgress, HumanFeedbackPort, ToolExecutorPort,
};
use docgen_domain::Task;
use docgen_infrastructure::{
    CodeExecutionPlugin, ConfigLoader, FileConfig, JsonSchemaToolConverter,
    JsonlConversationLogger, OpenAiGateway, PluginRegistry, RepoFilePlugin, Severity, UserPlugin,
    has_errors,
};
use docgen_presentation::{
    Cli, ConsoleFormatter, ConsoleHumanFeedback, ProgressReporter, SimpleProgress,
};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;
use tracing::{Instrument, error, info, info_span, warn};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Set up stderr logging and, with `log_dir`, a daily rolling file log.
///
/// The returned guard flushes the file writer on drop.
fn init_logging(verbose: u8, log_dir: Option<&Path>) -> Option<WorkerGuard> {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    let (file_layer, guard) = match log_dir {
        Some(dir) => {
            let appender = tracing_appender::rolling::daily(dir, "docgen.log");
            let (writer, guard) = tracing_appender::non_blocking(appender);
            let layer = fmt::layer().with_ansi(false).with_writer(writer);
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .with(file_layer)
        .init();

    guard
}

fn load_config(cli: &Cli) -> Result<FileConfig> {
    if cli.no_config {
        return Ok(ConfigLoader::load_defaults());
    }
    ConfigLoader::load(cli.config.as_deref())
        .map_err(|e| anyhow::anyhow!("{}", e))
        .context("Failed to load configuration")
}

fn load_task(path: Option<&PathBuf>) -> Result<Task> {
    match path {
        Some(path) => {
            let content = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read task file {}", path.display()))?;
            Ok(Task::new(content)?)
        }
        None => Ok(Task::blog_post()),
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.show_config {
        ConfigLoader::print_config_sources(cli.config.as_deref());
        let config = load_config(&cli)?;
        println!();
        println!("{}", toml::to_string_pretty(&config)?);
        return Ok(());
    }

    let config = load_config(&cli)?;
    let _guard = init_logging(cli.verbose, config.logging.log_dir.as_deref());

    run(cli, config).instrument(info_span!("main")).await
}

async fn run(cli: Cli, config: FileConfig) -> Result<()> {
    info!("Starting docgen");

    // === Configuration ===
    let issues = config.validate();
    for issue in &issues {
        match issue.severity {
            Severity::Error => error!("{}", issue),
            Severity::Warning => warn!("{}", issue),
        }
    }
    if has_errors(&issues) {
        bail!("Invalid configuration; see the errors above");
    }

    let (models, _) = config.models.to_model_config();
    let mut execution = config.chat.to_execution_params();
    if let Some(max) = cli.max_iterations {
        execution = execution.with_max_iterations(max);
    }

    let task_file = cli.task_file.as_ref().or(config.chat.task_file.as_ref());
    let task = load_task(task_file)?;

    // === Dependency Injection ===
    let gateway = Arc::new(OpenAiGateway::from_config(&config.provider)?);

    let reporter = (!cli.quiet).then(ProgressReporter::new);
    let feedback: Arc<dyn HumanFeedbackPort> = if cli.auto_approve || config.chat.auto_approve {
        Arc::new(AutoApproveFeedback::new())
    } else {
        let console = match &reporter {
            Some(reporter) => ConsoleHumanFeedback::new().with_spinner(reporter.spinner()),
            None => ConsoleHumanFeedback::new(),
        };
        Arc::new(console)
    };

    let plugins = &config.plugins;
    let repo_files = RepoFilePlugin::new(&plugins.repo_root).with_context(|| {
        format!("Repository root {} is not accessible", plugins.repo_root.display())
    })?;
    let code = CodeExecutionPlugin::new(plugins.interpreter.clone())
        .with_args(plugins.interpreter_args.clone())
        .with_working_dir(repo_files.root().to_path_buf())
        .with_timeout(Duration::from_secs(plugins.timeout_secs))
        .with_max_output(plugins.max_output_bytes);

    let toolkits = AgentToolkits {
        content_creation: Arc::new(PluginRegistry::new().register(repo_files))
            as Arc<dyn ToolExecutorPort>,
        code_validation: Arc::new(PluginRegistry::new().register(code)),
        user: Arc::new(PluginRegistry::new().register(UserPlugin::new(feedback))),
    };

    let mut use_case =
        GenerateDocumentUseCase::new(gateway, toolkits, Arc::new(JsonSchemaToolConverter));
    if let Some(path) = &config.logging.conversation_log {
        let logger = JsonlConversationLogger::open(path).with_context(|| {
            format!("Failed to open conversation log {}", path.display())
        })?;
        info!(path = %path.display(), "Writing conversation log");
        let logger: Arc<dyn ConversationLogger> = Arc::new(logger);
        use_case = use_case.with_conversation_logger(logger);
    }

    let input = GenerateDocumentInput::new(task, models, execution);

    // Execute with or without the spinner
    let progress: &dyn GroupChatProgress = match &reporter {
        Some(reporter) => reporter,
        None => &SimpleProgress,
    };
    let output = use_case.execute(input, progress).await?;

    println!("{}", ConsoleFormatter::format_result(&output));

    Ok(())
}
