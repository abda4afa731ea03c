//! Execution of generated commands.
//!
//! [`Runner`] is the seam between building a command and running it. The
//! library ships [`ProcessRunner`], which spawns the command as a child
//! process; tests substitute their own implementations.

use std::{
    io,
    path::{Path, PathBuf},
    process::{Command, Stdio},
};

use log::{debug, error};
use thiserror::Error;

/// Executes an argument list and returns what it wrote to stdout.
pub trait Runner {
    /// Runs `args`, where `args[0]` selects the program.
    ///
    /// # Errors
    ///
    /// Returns a [`RunnerError`] if the program cannot be started or exits
    /// unsuccessfully.
    fn run(&self, args: &[String]) -> Result<Vec<u8>, RunnerError>;
}

/// Failure to execute a command.
#[derive(Debug, Error)]
pub enum RunnerError {
    #[error("no command to run")]
    EmptyCommand,

    #[error("failed to start `{program}`: {source}")]
    Spawn {
        program: String,
        #[source]
        source: io::Error,
    },

    #[error("`{program}` exited with {}: {stderr}", describe_exit(.code))]
    Failed {
        program: String,
        /// Exit code, `None` if the process was terminated by a signal.
        code: Option<i32>,
        stderr: String,
    },
}

fn describe_exit(code: &Option<i32>) -> String {
    match code {
        Some(code) => format!("exit code {code}"),
        None => "a signal".to_string(),
    }
}

/// Runs commands as child processes.
///
/// By default `args[0]` is looked up on `PATH`. A configured binary path
/// replaces it, which allows pointing at an rrdtool outside of `PATH` without
/// changing the generated command.
#[derive(Debug, Clone, Default)]
pub struct ProcessRunner {
    binary: Option<PathBuf>,
}

impl ProcessRunner {
    /// Creates a runner that executes `args[0]` as given.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a runner that executes `binary` in place of `args[0]`.
    pub fn with_binary(binary: impl Into<PathBuf>) -> Self {
        Self {
            binary: Some(binary.into()),
        }
    }

    pub fn binary(&self) -> Option<&Path> {
        self.binary.as_deref()
    }
}

impl Runner for ProcessRunner {
    fn run(&self, args: &[String]) -> Result<Vec<u8>, RunnerError> {
        let (program, rest) = args.split_first().ok_or(RunnerError::EmptyCommand)?;
        let binary = self
            .binary
            .clone()
            .unwrap_or_else(|| PathBuf::from(program));
        let program = binary.display().to_string();

        debug!(program = program, args_count = rest.len(); "Spawning process");

        let output = Command::new(&binary)
            .args(rest)
            .stdin(Stdio::null())
            .output()
            .map_err(|source| RunnerError::Spawn {
                program: program.clone(),
                source,
            })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
            error!(program = program, stderr = stderr; "Process failed");
            return Err(RunnerError::Failed {
                program,
                code: output.status.code(),
                stderr,
            });
        }

        debug!(program = program, stdout_bytes = output.stdout.len(); "Process finished");
        Ok(output.stdout)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(args: &[&str]) -> Vec<String> {
        args.iter().map(|arg| arg.to_string()).collect()
    }

    #[test]
    fn test_empty_command() {
        let result = ProcessRunner::new().run(&[]);
        assert!(matches!(result, Err(RunnerError::EmptyCommand)));
    }

    #[test]
    fn test_spawn_error() {
        let result = ProcessRunner::new().run(&args(&["/nonexistent/rrdtool", "graph", "-"]));
        match result {
            Err(RunnerError::Spawn { program, .. }) => assert_eq!(program, "/nonexistent/rrdtool"),
            other => panic!("expected spawn error, got {other:?}"),
        }
    }

    #[test]
    fn test_configured_binary_replaces_program() {
        let runner = ProcessRunner::with_binary("/nonexistent/bin/rrdtool");
        assert_eq!(runner.binary(), Some(Path::new("/nonexistent/bin/rrdtool")));

        let err = runner.run(&args(&["rrdtool", "graph", "-"])).unwrap_err();
        assert!(err.to_string().contains("/nonexistent/bin/rrdtool"));
    }

    #[cfg(unix)]
    #[test]
    fn test_captures_stdout() {
        let output = ProcessRunner::new()
            .run(&args(&["echo", "graph", "-"]))
            .unwrap();
        assert_eq!(output, b"graph -\n");
    }

    #[cfg(unix)]
    #[test]
    fn test_binary_receives_remaining_args() {
        let output = ProcessRunner::with_binary("echo")
            .run(&args(&["rrdtool", "graph", "-", "--end", "now"]))
            .unwrap();
        assert_eq!(output, b"graph - --end now\n");
    }

    #[cfg(unix)]
    #[test]
    fn test_non_zero_exit() {
        let err = ProcessRunner::new()
            .run(&args(&["sh", "-c", "echo 'ERROR: bad' >&2; exit 3"]))
            .unwrap_err();

        match &err {
            RunnerError::Failed { code, stderr, .. } => {
                assert_eq!(*code, Some(3));
                assert_eq!(stderr, "ERROR: bad");
            }
            other => panic!("expected failure, got {other:?}"),
        }
        assert_eq!(err.to_string(), "`sh` exited with exit code 3: ERROR: bad");
    }
}
