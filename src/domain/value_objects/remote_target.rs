//! Remote target value object - the host every remote command runs on

use std::fmt;

use super::shell::shell_quote;

/// Machine and login used for all remote operations of a job
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemoteTarget {
    host: String,
    port: Option<u16>,
    user: String,
}

impl RemoteTarget {
    pub fn new(host: impl Into<String>, user: impl Into<String>) -> Self {
        Self {
            host: host.into(),
            port: None,
            user: user.into(),
        }
    }

    pub fn with_port(mut self, port: Option<u16>) -> Self {
        self.port = port;
        self
    }

    pub fn host(&self) -> &str {
        &self.host
    }

    pub fn port(&self) -> Option<u16> {
        self.port
    }

    pub fn user(&self) -> &str {
        &self.user
    }

    /// Arguments for `ssh` preceding the remote command
    pub fn ssh_args(&self) -> Vec<String> {
        let mut args = vec!["-l".to_string(), self.user.clone()];
        if let Some(port) = self.port {
            args.push("-p".to_string());
            args.push(port.to_string());
        }
        args.push(self.host.clone());
        args
    }

    /// `ssh` invocation as shell text, ready to take a quoted remote command
    pub fn ssh_command(&self) -> String {
        let mut cmd = String::from("ssh");
        for arg in self.ssh_args() {
            cmd.push(' ');
            cmd.push_str(&shell_quote(&arg));
        }
        cmd
    }
}

impl fmt::Display for RemoteTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.port {
            Some(port) => write!(f, "{}:{}", self.host, port),
            None => write!(f, "{}", self.host),
        }
    }
}
