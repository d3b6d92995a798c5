//! Database connection settings for one side of a sync

/// Connection settings read from one environment entry of a database config
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DatabaseConfig {
    pub adapter: String,
    pub user: Option<String>,
    pub pass: Option<String>,
    pub dbname: String,
    pub socket: Option<String>,
    pub host: Option<String>,
}

impl DatabaseConfig {
    pub fn new(adapter: impl Into<String>, dbname: impl Into<String>) -> Self {
        Self {
            adapter: adapter.into(),
            dbname: dbname.into(),
            ..Default::default()
        }
    }

    pub fn with_user(mut self, user: impl Into<String>) -> Self {
        self.user = Some(user.into());
        self
    }

    pub fn with_pass(mut self, pass: impl Into<String>) -> Self {
        self.pass = Some(pass.into());
        self
    }

    pub fn with_socket(mut self, socket: impl Into<String>) -> Self {
        self.socket = Some(socket.into());
        self
    }

    pub fn with_host(mut self, host: impl Into<String>) -> Self {
        self.host = Some(host.into());
        self
    }

    pub fn user(&self) -> Option<&str> {
        present(&self.user)
    }

    pub fn pass(&self) -> Option<&str> {
        present(&self.pass)
    }

    pub fn socket(&self) -> Option<&str> {
        present(&self.socket)
    }

    pub fn host(&self) -> Option<&str> {
        present(&self.host)
    }
}

/// Empty strings count as absent
fn present(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}
