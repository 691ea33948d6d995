use cwe_tree::adapters::outbound::console::ConsoleProgressReporter;
use cwe_tree::adapters::outbound::filesystem::{FileSystemArtifactWriter, LocalArchiveSource};
use cwe_tree::adapters::outbound::formatters::JsAssignmentFormatter;
use cwe_tree::adapters::outbound::network::CweViewClient;
use cwe_tree::application::dto::{GenerateRequest, GenerateResponse};
use cwe_tree::application::use_cases::GenerateViewsUseCase;
use cwe_tree::cli::Args;
use cwe_tree::config::{discover_config, RunConfig, SourceLocation};
use cwe_tree::ports::outbound::TaxonomySource;
use cwe_tree::shared::error::ExitCode;
use cwe_tree::shared::logging;
use cwe_tree::shared::shutdown::{stop_channel, StopHandle, StopSignal};
use cwe_tree::shared::Result;
use std::process;

#[tokio::main]
async fn main() {
    logging::init();

    // Parse command-line arguments; clap exits with code 2 on invalid input
    let args = Args::parse_args();

    let (stop_handle, stop_signal) = stop_channel();
    spawn_interrupt_listener(stop_handle);

    if let Err(e) = run(args, stop_signal).await {
        eprintln!("\n❌ An error occurred:\n");
        eprintln!("{}", e);

        // Display error chain
        let mut source = e.source();
        while let Some(err) = source {
            eprintln!("\nCaused by: {}", err);
            source = err.source();
        }

        eprintln!();
        process::exit(ExitCode::ApplicationError.as_i32());
    }
}

/// Triggers the stop signal on the first Ctrl-C.
fn spawn_interrupt_listener(handle: StopHandle) {
    tokio::spawn(async move {
        match tokio::signal::ctrl_c().await {
            Ok(()) => {
                tracing::info!("interrupt received");
                handle.trigger();
            }
            Err(e) => tracing::warn!(error = %e, "unable to listen for Ctrl-C"),
        }
    });
}

async fn run(args: Args, stop: StopSignal) -> Result<GenerateResponse> {
    let config = resolve_config(args)?;

    if !config.quiet {
        eprintln!("cwe-tree v{}", env!("CARGO_PKG_VERSION"));
    }
    tracing::debug!(?config, "resolved run configuration");

    // Create adapters (Dependency Injection)
    let writer = FileSystemArtifactWriter::create(config.output_dir.clone())?;
    let progress_reporter = ConsoleProgressReporter::new(config.quiet);
    let request = GenerateRequest::new(config.views.clone());

    match &config.source {
        SourceLocation::Remote { base_url } => {
            let source = CweViewClient::new(
                base_url.clone(),
                config.schema_namespace.clone(),
                config.timeout,
            )?;
            generate(source, writer, progress_reporter, request, stop).await
        }
        SourceLocation::Local { archive_dir } => {
            let source =
                LocalArchiveSource::new(archive_dir.clone(), config.schema_namespace.clone());
            generate(source, writer, progress_reporter, request, stop).await
        }
    }
}

/// Defaults, then `cwe-tree.config.yml` from the working directory, then CLI flags.
fn resolve_config(args: Args) -> Result<RunConfig> {
    let mut config = match args.dir {
        Some(ref dir) => RunConfig::with_output_dir(dir.clone()),
        None => RunConfig::from_defaults()?,
    };

    let cwd = std::env::current_dir()?;
    if let Some(file) = discover_config(&cwd)? {
        config.apply_file(&file);
    }

    if let Some(dir) = args.dir {
        config.output_dir = dir;
    }
    if let Some(archive_dir) = args.archive_dir {
        config.source = SourceLocation::Local { archive_dir };
    }
    config.quiet = args.quiet;

    Ok(config)
}

async fn generate<S: TaxonomySource>(
    source: S,
    writer: FileSystemArtifactWriter,
    progress_reporter: ConsoleProgressReporter,
    request: GenerateRequest,
    stop: StopSignal,
) -> Result<GenerateResponse> {
    let use_case = GenerateViewsUseCase::new(
        source,
        JsAssignmentFormatter::new(),
        writer,
        progress_reporter,
    );

    use_case.execute(request, stop).await
}
