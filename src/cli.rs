use std::path::PathBuf;

use clap::{Parser, Subcommand};

use devsync::application::JobRequest;
use devsync::config::Config;

/// devsync - pull production state down to a development machine
#[derive(Parser, Debug)]
#[command(name = "devsync")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Config file (default: ./devsync.toml if present)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Remote host
    #[arg(long, global = true)]
    pub host: Option<String>,

    /// Remote ssh port
    #[arg(long, global = true)]
    pub port: Option<u16>,

    /// Remote login user
    #[arg(long, global = true)]
    pub user: Option<String>,

    /// Remote application root
    #[arg(long, global = true)]
    pub deploy_to: Option<String>,

    /// Print the pipeline instead of running it (no local database is dropped)
    #[arg(long, global = true)]
    pub dry_run: bool,

    /// Verbosity level (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Only report warnings and errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Drop the local database and load it from the remote one
    Db {
        /// Local environment to load into
        #[arg(long, env = "RAILS_ENV", default_value = "development")]
        local_env: String,

        /// Remote environment to dump from (default: remote_env from config)
        #[arg(long)]
        remote_env: Option<String>,

        /// Space-separated tables to dump (default: all tables)
        #[arg(long, env = "TABLES", default_value = "")]
        tables: String,
    },

    /// Copy a directory under deploy_to to a local path
    Dir {
        /// Source path, relative to deploy_to
        #[arg(long, env = "FROM", default_value = "")]
        from: String,

        /// Local destination path
        #[arg(long, env = "TO", default_value = "")]
        to: String,
    },

    /// Copy the release's public/system directory to ./public/system
    PublicSystem,
}

impl Cli {
    /// Apply command-line overrides on top of file and environment config
    pub fn apply_overrides(&self, config: &mut Config) {
        if let Some(host) = &self.host {
            config.remote.host = Some(host.clone());
        }
        if let Some(port) = self.port {
            config.remote.port = Some(port);
        }
        if let Some(user) = &self.user {
            config.remote.user = Some(user.clone());
        }
        if let Some(deploy_to) = &self.deploy_to {
            config.deploy_to = Some(deploy_to.clone());
        }
    }
}

impl Commands {
    pub fn into_request(self) -> JobRequest {
        match self {
            Commands::Db {
                local_env,
                remote_env,
                tables,
            } => JobRequest::Database {
                remote_env,
                local_env,
                tables,
            },
            Commands::Dir { from, to } => JobRequest::Directory { from, to },
            Commands::PublicSystem => JobRequest::PublicSystem,
        }
    }
}
