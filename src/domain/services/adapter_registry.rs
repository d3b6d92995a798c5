//! AdapterRegistry - dump and load command builders per database engine
//!
//! Builders are plain functions of the config record. Optional flags are
//! appended only when the matching field is present and non-empty, and every
//! interpolated value goes through [`shell_quote`].

use std::collections::BTreeMap;

use crate::domain::entities::DatabaseConfig;
use crate::domain::value_objects::{shell_quote, Direction, TableFilter};
use crate::error::{SyncError, SyncResult};

/// Builds the command that streams a database out
pub type DumpBuilder = fn(&DatabaseConfig, &TableFilter) -> String;

/// Builds the command that reads a stream into a database
pub type LoadBuilder = fn(&DatabaseConfig) -> String;

/// The pair of builders registered for one adapter
#[derive(Clone, Copy)]
pub struct AdapterBuilders {
    pub dump: DumpBuilder,
    pub load: LoadBuilder,
}

#[derive(Default)]
pub struct AdapterRegistry {
    adapters: BTreeMap<String, AdapterBuilders>,
}

impl AdapterRegistry {
    /// An empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry with the built-in `postgresql` and `mysql2` adapters
    pub fn with_builtin() -> Self {
        let mut registry = Self::new();
        registry.register("postgresql", postgresql_dump, postgresql_load);
        registry.register("mysql2", mysql_dump, mysql_load);
        registry
    }

    pub fn register(&mut self, adapter: impl Into<String>, dump: DumpBuilder, load: LoadBuilder) {
        self.adapters
            .insert(adapter.into(), AdapterBuilders { dump, load });
    }

    /// Registered adapter names, sorted
    pub fn adapters(&self) -> impl Iterator<Item = &str> {
        self.adapters.keys().map(String::as_str)
    }

    pub fn dump_builder(&self, adapter: &str) -> SyncResult<DumpBuilder> {
        self.lookup(adapter, Direction::Dump).map(|b| b.dump)
    }

    pub fn load_builder(&self, adapter: &str) -> SyncResult<LoadBuilder> {
        self.lookup(adapter, Direction::Load).map(|b| b.load)
    }

    fn lookup(&self, adapter: &str, direction: Direction) -> SyncResult<&AdapterBuilders> {
        self.adapters
            .get(adapter)
            .ok_or_else(|| SyncError::UnsupportedAdapter {
                adapter: adapter.to_string(),
                direction,
            })
    }
}

/// Incrementally built command text
struct CommandLine(String);

impl CommandLine {
    fn new(program: &str) -> Self {
        Self(program.to_string())
    }

    /// Literal flags, appended verbatim
    fn flags(mut self, flags: &str) -> Self {
        self.0.push(' ');
        self.0.push_str(flags);
        self
    }

    /// `--flag=value` when `value` is present
    fn opt(mut self, flag: &str, value: Option<&str>) -> Self {
        if let Some(value) = value {
            self.0.push_str(&format!(" {}={}", flag, shell_quote(value)));
        }
        self
    }

    fn positional(mut self, value: &str) -> Self {
        self.0.push(' ');
        self.0.push_str(&shell_quote(value));
        self
    }

    fn finish(self) -> String {
        self.0
    }
}

/// The password is never put on the `pg_dump` command line; credentials
/// come from `~/.pgpass` on the remote host.
fn postgresql_dump(config: &DatabaseConfig, _tables: &TableFilter) -> String {
    CommandLine::new("pg_dump")
        .flags("--no-owner --no-privileges --disable-triggers --inserts")
        .opt("--username", config.user())
        .opt("--host", config.host())
        .positional(&config.dbname)
        .finish()
}

fn postgresql_load(config: &DatabaseConfig) -> String {
    CommandLine::new("psql")
        .flags("--single-transaction --quiet -o /dev/null")
        .opt("--username", config.user())
        .opt("--password", config.pass())
        .opt("--host", config.host())
        .positional(&config.dbname)
        .finish()
}

fn mysql_dump(config: &DatabaseConfig, tables: &TableFilter) -> String {
    let mut cmd = CommandLine::new("mysqldump")
        .flags("--quick --single-transaction")
        .opt("--user", config.user())
        .opt("--password", config.pass())
        .opt("--socket", config.socket())
        .opt("--host", config.host())
        .flags("--opt")
        .positional(&config.dbname);
    for table in tables.tables() {
        cmd = cmd.positional(table);
    }
    cmd.finish()
}

/// The password is left to `~/.my.cnf`.
fn mysql_load(config: &DatabaseConfig) -> String {
    CommandLine::new("mysql")
        .opt("--user", config.user())
        .opt("--socket", config.socket())
        .opt("--host", config.host())
        .positional(&config.dbname)
        .finish()
}
