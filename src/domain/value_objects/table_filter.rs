//! Table filter for database dumps

/// Whitespace-separated list of tables to dump; empty means all tables
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TableFilter(Vec<String>);

impl TableFilter {
    /// Parse a filter such as `"users orders"`
    pub fn parse(tables: &str) -> Self {
        Self(tables.split_whitespace().map(str::to_string).collect())
    }

    /// The filter that selects every table
    pub fn all() -> Self {
        Self::default()
    }

    pub fn is_all(&self) -> bool {
        self.0.is_empty()
    }

    pub fn tables(&self) -> &[String] {
        &self.0
    }
}
