//! devsync CLI - pull production state down to a development machine
//!
//! Usage: devsync <COMMAND>
//!
//! Commands:
//!   db             Drop the local database and load it from the remote one
//!   dir            Copy a remote directory to a local path
//!   public-system  Copy the release's public/system directory

use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;

use devsync::application::{check_dependencies, plan_job, SyncOptions, SyncOrchestrator};
use devsync::config;
use devsync::domain::services::{AdapterRegistry, ProgressMeter, SyncContext};
use devsync::infrastructure::{CommandDatabase, SshShell, SystemShell, TracingEventSink};
use devsync::SyncError;

mod cli;

use cli::Cli;

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose, cli.quiet);

    match run(cli) {
        Ok(code) => ExitCode::from(u8::try_from(code).unwrap_or(1)),
        Err(err) => {
            eprintln!("FATAL: {:#}", err);
            let code = err
                .downcast_ref::<SyncError>()
                .map(SyncError::exit_code)
                .unwrap_or(1);
            ExitCode::from(u8::try_from(code).unwrap_or(1))
        }
    }
}

fn run(cli: Cli) -> Result<i32> {
    let (mut config, warnings) = config::load_or_default(cli.config.as_deref())?;
    for warning in &warnings {
        match &warning.suggestion {
            Some(suggestion) => tracing::warn!(
                "unknown key '{}' in {} (did you mean '{}'?)",
                warning.key,
                warning.file.display(),
                suggestion
            ),
            None => tracing::warn!(
                "unknown key '{}' in {}",
                warning.key,
                warning.file.display()
            ),
        }
    }
    cli.apply_overrides(&mut config);

    let local = SystemShell::new();
    let meter = ProgressMeter::new(config.progress_meter.clone());
    check_dependencies(&local, &meter)?;

    let dry_run = cli.dry_run;
    let mut job = plan_job(&config, cli.command.into_request())?;
    let target = config.remote_target()?;
    tracing::debug!(job = job.kind(), target = %target, "job planned");

    let remote = SshShell::new();
    let database = CommandDatabase::new(config.prepare_command.clone());
    let events = TracingEventSink;
    let registry = AdapterRegistry::with_builtin();
    let ctx = SyncContext::new(target, &remote, &events);

    let report = SyncOrchestrator::new(&ctx, &local, &database, &registry)
        .with_options(SyncOptions { meter, dry_run })
        .run(&mut job)?;

    if !report.executed {
        println!("{}", report.pipeline.compose());
    }
    Ok(report.exit_code)
}

fn init_logging(verbose: u8, quiet: bool) {
    use is_terminal::IsTerminal;
    use tracing_subscriber::{fmt, EnvFilter};

    let level = if quiet {
        "warn"
    } else {
        match verbose {
            0 => "info",
            1 => "debug",
            _ => "trace",
        }
    };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .with_target(false)
        .with_thread_ids(false)
        .with_thread_names(false)
        .without_time()
        .init();
}
