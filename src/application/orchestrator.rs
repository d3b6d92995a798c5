//! Sync Orchestrator
//!
//! Drives one job through
//! `Init → DependencyCheck → ConfigResolved → [LocalPrepared →] Executing → Done`.
//! Any failure moves the job to `FatalAbort` and is returned to the caller.
//!
//! For a database job both adapters are validated before the local database
//! is dropped, so an unsupported adapter never costs local data.

use crate::domain::entities::{DatabaseJob, DirectoryJob, SyncJob};
use crate::domain::ports::{LocalDatabase, LocalShell, SyncEvent};
use crate::domain::services::{
    AdapterRegistry, CommandPipeline, ConfigResolver, ProgressMeter, SizeEstimator, SyncContext,
};
use crate::domain::value_objects::SyncState;
use crate::error::{SyncError, SyncResult};

/// Options for the sync orchestrator
#[derive(Debug, Clone, Default)]
pub struct SyncOptions {
    /// Progress meter placed in the middle of every pipeline
    pub meter: ProgressMeter,
    /// Compose the pipeline but skip drop/create and execution
    pub dry_run: bool,
}

/// Outcome of a job that reached `Done`
#[derive(Debug, Clone)]
pub struct SyncReport {
    pub pipeline: CommandPipeline,
    /// Composite exit status of the pipeline (0 for a dry run)
    pub exit_code: i32,
    pub executed: bool,
}

impl SyncReport {
    pub fn is_success(&self) -> bool {
        self.exit_code == 0
    }
}

pub struct SyncOrchestrator<'a> {
    ctx: &'a SyncContext<'a>,
    local: &'a dyn LocalShell,
    database: &'a dyn LocalDatabase,
    registry: &'a AdapterRegistry,
    options: SyncOptions,
    state: SyncState,
}

impl<'a> SyncOrchestrator<'a> {
    pub fn new(
        ctx: &'a SyncContext<'a>,
        local: &'a dyn LocalShell,
        database: &'a dyn LocalDatabase,
        registry: &'a AdapterRegistry,
    ) -> Self {
        Self {
            ctx,
            local,
            database,
            registry,
            options: SyncOptions::default(),
            state: SyncState::Init,
        }
    }

    pub fn with_options(mut self, options: SyncOptions) -> Self {
        self.options = options;
        self
    }

    pub fn state(&self) -> SyncState {
        self.state
    }

    /// Run `job` to completion
    pub fn run(&mut self, job: &mut SyncJob) -> SyncResult<SyncReport> {
        match self.drive(job) {
            Ok(report) => Ok(report),
            Err(err) => {
                self.transition(SyncState::FatalAbort);
                Err(err)
            }
        }
    }

    fn drive(&mut self, job: &mut SyncJob) -> SyncResult<SyncReport> {
        self.transition(SyncState::DependencyCheck);
        check_dependencies(self.local, &self.options.meter)?;

        let pipeline = match job {
            SyncJob::Database(job) => self.prepare_database(job)?,
            SyncJob::Directory(job) => self.prepare_directory(job)?,
        };

        self.execute(pipeline)
    }

    fn prepare_database(&mut self, job: &mut DatabaseJob) -> SyncResult<CommandPipeline> {
        let resolver = ConfigResolver::new(self.ctx, self.local);
        let remote = job
            .remote_config
            .get_or_try_resolve(|| resolver.resolve(&job.remote_source, &job.remote_env))?
            .clone();
        let local = job
            .local_config
            .get_or_try_resolve(|| resolver.resolve(&job.local_source, &job.local_env))?
            .clone();

        let dump = self.registry.dump_builder(&remote.adapter)?;
        let load = self.registry.load_builder(&local.adapter)?;
        self.transition(SyncState::ConfigResolved);

        let dump_command = dump(&remote, &job.tables);
        let load_command = load(&local);

        if self.options.dry_run {
            self.ctx.step(format!(
                "dry run: not dropping local {} database",
                job.local_env
            ));
        } else {
            self.ctx.step("drop and create local database");
            let status = self.database.drop_and_create(&job.local_env)?;
            if status != 0 {
                self.ctx.warn(format!(
                    "drop and create of local {} database exited with status {}",
                    job.local_env, status
                ));
            }
            self.transition(SyncState::LocalPrepared);
        }

        self.ctx.step(format!(
            "dump from {} and load to local {} db (see progress)",
            self.ctx.target(),
            job.local_env
        ));
        Ok(CommandPipeline::for_database(
            self.ctx.target(),
            &dump_command,
            &self.options.meter,
            &load_command,
        ))
    }

    fn prepare_directory(&mut self, job: &mut DirectoryJob) -> SyncResult<CommandPipeline> {
        let estimator = SizeEstimator::new(self.ctx);
        let total = *job
            .total
            .get_or_try_resolve(|| estimator.estimate(&job.from))?;
        self.transition(SyncState::ConfigResolved);

        self.ctx.step(format!(
            "sync {}:{} -> local:{} (see progress)",
            self.ctx.target(),
            job.from,
            job.to
        ));
        Ok(CommandPipeline::for_directory(
            self.ctx.target(),
            &job.from,
            &job.to,
            &self.options.meter,
            total,
        ))
    }

    fn execute(&mut self, pipeline: CommandPipeline) -> SyncResult<SyncReport> {
        let command = pipeline.compose();

        if self.options.dry_run {
            self.ctx.step(format!("dry run: not executing `{}`", command));
            self.transition(SyncState::Done);
            return Ok(SyncReport {
                pipeline,
                exit_code: 0,
                executed: false,
            });
        }

        self.transition(SyncState::Executing);
        let exit_code = self.local.run_pipeline(&command)?;
        self.ctx.emit(SyncEvent::Completed { exit_code });
        self.transition(SyncState::Done);

        Ok(SyncReport {
            pipeline,
            exit_code,
            executed: true,
        })
    }

    fn transition(&mut self, to: SyncState) {
        let from = self.state;
        self.state = to;
        self.ctx.emit(SyncEvent::StateChanged { from, to });
    }
}

/// Fail unless every local program a pipeline needs is on PATH
///
/// Callers may run this before planning a job so a missing tool is reported
/// ahead of any configuration problem.
pub fn check_dependencies(local: &dyn LocalShell, meter: &ProgressMeter) -> SyncResult<()> {
    let program = meter.program();
    if !local.has_program(program) {
        return Err(SyncError::DependencyMissing {
            program: program.to_string(),
        });
    }
    Ok(())
}
