use log::debug;
use std::io;
use std::process::{Command, ExitStatus};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum InvokeError {
    #[error("failed to start {program}: {source}")]
    Spawn {
        program: String,
        #[source]
        source: io::Error,
    },
    #[error("{program} exited with {status}: {stderr}")]
    Failed {
        program: String,
        status: ExitStatus,
        stderr: String,
    },
}

/// Runs an external program and hands back its stdout.
///
/// A non-zero exit is reported as an error, never as partial output.
pub trait CommandRunner {
    fn run(&self, program: &str, args: &[&str]) -> Result<String, InvokeError>;
}

/// Spawns real processes and blocks until they finish.
pub struct SystemRunner;

impl CommandRunner for SystemRunner {
    fn run(&self, program: &str, args: &[&str]) -> Result<String, InvokeError> {
        debug!("Running {} {}", program, args.join(" "));

        let output = Command::new(program)
            .args(args)
            .output()
            .map_err(|source| InvokeError::Spawn {
                program: program.to_string(),
                source,
            })?;

        if !output.status.success() {
            return Err(InvokeError::Failed {
                program: program.to_string(),
                status: output.status,
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }

        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_program_is_spawn_error() {
        let err = SystemRunner
            .run("vbox-inventory-definitely-not-installed", &["list", "vms"])
            .unwrap_err();
        assert!(matches!(err, InvokeError::Spawn { .. }));
    }

    #[cfg(unix)]
    #[test]
    fn captures_stdout_on_success() {
        let stdout = SystemRunner.run("sh", &["-c", "echo hello"]).unwrap();
        assert_eq!(stdout, "hello\n");
    }

    #[cfg(unix)]
    #[test]
    fn nonzero_exit_is_failure() {
        let err = SystemRunner.run("sh", &["-c", "echo oops >&2; exit 3"]).unwrap_err();
        match err {
            InvokeError::Failed { status, stderr, .. } => {
                assert_eq!(status.code(), Some(3));
                assert_eq!(stderr, "oops");
            }
            other => panic!("expected Failed, got {:?}", other),
        }
    }
}
