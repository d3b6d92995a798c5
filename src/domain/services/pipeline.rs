//! CommandPipeline - ordered shell stages joined by pipes
//!
//! The composed text runs as one shell invocation, so data streams from the
//! remote extractor through the meter into the local loader without touching
//! disk. The shell reports the exit status of the last stage only.

use crate::domain::value_objects::{shell_quote, shell_quote_path, RemoteTarget};

/// One named command in a pipeline
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PipelineStage {
    pub name: &'static str,
    pub command: String,
}

/// Pass-through stage that reports throughput
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProgressMeter {
    program: String,
}

impl ProgressMeter {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }

    pub fn program(&self) -> &str {
        &self.program
    }

    /// Meter with a known byte total
    pub fn sized(&self, total: u64) -> String {
        format!("{} -s {}", shell_quote(&self.program), total)
    }

    /// Meter with an unknown total
    pub fn without_total(&self) -> String {
        shell_quote(&self.program).into_owned()
    }
}

impl Default for ProgressMeter {
    fn default() -> Self {
        Self::new("pv")
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommandPipeline {
    stages: Vec<PipelineStage>,
}

impl CommandPipeline {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn stage(mut self, name: &'static str, command: impl Into<String>) -> Self {
        self.stages.push(PipelineStage {
            name,
            command: command.into(),
        });
        self
    }

    /// `ssh … "tar -cC <from> ." | pv -s <total> | tar -x -C <to>`
    pub fn for_directory(
        target: &RemoteTarget,
        from: &str,
        to: &str,
        meter: &ProgressMeter,
        total: u64,
    ) -> Self {
        let archive = format!("tar -cC {} .", shell_quote_path(from));
        Self::new()
            .stage("extract", remote(target, &archive))
            .stage("meter", meter.sized(total))
            .stage("unpack", format!("tar -x -C {}", shell_quote_path(to)))
    }

    /// `ssh … "<dump>" | pv | <load>`
    pub fn for_database(
        target: &RemoteTarget,
        dump: &str,
        meter: &ProgressMeter,
        load: &str,
    ) -> Self {
        Self::new()
            .stage("dump", remote(target, dump))
            .stage("meter", meter.without_total())
            .stage("load", load)
    }

    pub fn stages(&self) -> &[PipelineStage] {
        &self.stages
    }

    pub fn stage_names(&self) -> Vec<&'static str> {
        self.stages.iter().map(|s| s.name).collect()
    }

    /// Join every stage with the pipe operator, in order
    pub fn compose(&self) -> String {
        self.stages
            .iter()
            .map(|s| s.command.as_str())
            .collect::<Vec<_>>()
            .join(" | ")
    }
}

/// Run `command` on `target` through ssh as a single quoted argument
fn remote(target: &RemoteTarget, command: &str) -> String {
    format!("{} {}", target.ssh_command(), shell_quote(command))
}
