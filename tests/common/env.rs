//! Test environment builder for isolated devsync testing.
//!
//! `TestEnv` owns a temp directory used as the working directory, a fake
//! remote root, and a `bin/` directory placed first on PATH. The fake `ssh`
//! drops its login arguments and runs the remote command locally, so the
//! "remote host" is the fake remote root on this machine.

use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use tempfile::TempDir;

/// Result of running a devsync CLI command
#[derive(Debug)]
pub struct TestResult {
    pub success: bool,
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
}

impl TestResult {
    /// Check if command succeeded
    pub fn is_success(&self) -> bool {
        self.success
    }

    /// Combine stdout and stderr
    pub fn combined_output(&self) -> String {
        format!("{}\n{}", self.stdout, self.stderr)
    }
}

const FAKE_SSH: &str = r#"#!/bin/sh
while [ $# -gt 0 ]; do
  case "$1" in
    -l|-p) shift 2 ;;
    *) break ;;
  esac
done
shift
exec sh -c "$*"
"#;

const FAKE_PV: &str = "#!/bin/sh\nexec cat\n";

/// Isolated test environment with temp directories.
pub struct TestEnv {
    root: TempDir,
    devsync_bin: PathBuf,
}

impl TestEnv {
    pub fn new() -> Self {
        let env = Self {
            root: TempDir::new().expect("Failed to create temp dir"),
            devsync_bin: PathBuf::from(env!("CARGO_BIN_EXE_devsync")),
        };
        std::fs::create_dir_all(env.project_path("")).expect("Failed to create project dir");
        std::fs::create_dir_all(env.remote_path("")).expect("Failed to create remote dir");
        std::fs::create_dir_all(env.bin_dir()).expect("Failed to create bin dir");
        env
    }

    /// Environment with fake `ssh` and `pv` installed
    pub fn with_fake_tools() -> Self {
        let env = Self::new();
        env.install_tool("ssh", FAKE_SSH);
        env.install_tool("pv", FAKE_PV);
        env
    }

    /// Local working directory
    pub fn project_path(&self, relative: &str) -> PathBuf {
        self.root.path().join("project").join(relative)
    }

    /// Directory playing the part of the remote filesystem
    pub fn remote_path(&self, relative: &str) -> PathBuf {
        self.root.path().join("remote").join(relative)
    }

    pub fn bin_dir(&self) -> PathBuf {
        self.root.path().join("bin")
    }

    /// Write an executable script into `bin/`
    pub fn install_tool(&self, name: &str, script: &str) {
        let path = self.bin_dir().join(name);
        std::fs::write(&path, script).expect("Failed to write tool");
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o755))
                .expect("Failed to make tool executable");
        }
    }

    pub fn write_project_file(&self, relative_path: &str, content: &str) {
        write_file(&self.project_path(relative_path), content);
    }

    pub fn write_remote_file(&self, relative_path: &str, content: &str) {
        write_file(&self.remote_path(relative_path), content);
    }

    /// Write `devsync.toml` pointing at the fake remote root
    pub fn write_config(&self, extra: &str) {
        let config = format!(
            "deploy_to = \"{}\"\n{}\n[remote]\nhost = \"app1\"\nuser = \"deploy\"\n",
            self.remote_path("").display().to_string().trim_end_matches('/'),
            extra
        );
        self.write_project_file("devsync.toml", &config);
    }

    /// Run devsync from the project directory
    pub fn run(&self, args: &[&str]) -> TestResult {
        self.run_with_env(args, &[])
    }

    /// Run devsync from the project directory with extra env vars.
    pub fn run_with_env(&self, args: &[&str], env_vars: &[(&str, &str)]) -> TestResult {
        let path = match std::env::var_os("PATH") {
            Some(existing) => {
                let mut paths = vec![self.bin_dir()];
                paths.extend(std::env::split_paths(&existing));
                std::env::join_paths(paths).expect("Failed to build PATH")
            }
            None => self.bin_dir().into_os_string(),
        };

        let mut cmd = Command::new(&self.devsync_bin);
        cmd.current_dir(self.project_path(""))
            .args(args)
            .env("PATH", path)
            .env_remove("RUST_LOG");
        for key in [
            "DEVSYNC_HOST",
            "DEVSYNC_PORT",
            "DEVSYNC_USER",
            "DEVSYNC_DEPLOY_TO",
            "RAILS_ENV",
            "TABLES",
            "FROM",
            "TO",
        ] {
            cmd.env_remove(key);
        }
        for (key, value) in env_vars {
            cmd.env(key, value);
        }

        let output = cmd.output().expect("Failed to execute devsync");
        output_to_result(output)
    }
}

fn write_file(path: &Path, content: &str) {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).expect("Failed to create directories");
    }
    std::fs::write(path, content).expect("Failed to write file");
}

fn output_to_result(output: Output) -> TestResult {
    TestResult {
        success: output.status.success(),
        exit_code: output.status.code().unwrap_or(-1),
        stdout: String::from_utf8_lossy(&output.stdout).to_string(),
        stderr: String::from_utf8_lossy(&output.stderr).to_string(),
    }
}
