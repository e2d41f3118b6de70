//! Blocking subprocess execution for pipeline steps
//!
//! Every external tool call goes through here: output is captured, a spinner
//! is shown while the child runs, and a nonzero exit becomes a
//! [`BotstrapError::SubprocessFailed`] carrying the child's stderr.

use std::ffi::OsStr;
use std::path::Path;
use std::process::Command;
use std::time::Duration;

use console::Style;
use indicatif::{ProgressBar, ProgressStyle};

use crate::error::{BotstrapError, Result};

/// Captured output of a successful child process
#[derive(Debug)]
pub struct ExecOutput {
    pub stdout: String,
    pub stderr: String,
}

fn display_command(program: &OsStr, args: &[&OsStr]) -> String {
    let mut parts = vec![program.to_string_lossy().into_owned()];
    parts.extend(args.iter().map(|a| a.to_string_lossy().into_owned()));
    parts.join(" ")
}

fn spinner(message: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.cyan} {msg}")
            .unwrap(),
    );
    pb.set_message(message.to_string());
    pb.enable_steady_tick(Duration::from_millis(100));
    pb
}

/// Run a command to completion, failing on a nonzero exit status.
///
/// Blocks until the child exits; there is no timeout. With `verbose` the full
/// command line is echoed before the call.
pub fn run_checked(
    program: impl AsRef<OsStr>,
    args: &[&OsStr],
    cwd: &Path,
    message: &str,
    verbose: bool,
) -> Result<ExecOutput> {
    let program = program.as_ref();
    let command_line = display_command(program, args);
    if verbose {
        println!("{} {}", Style::new().dim().apply_to("$"), command_line);
    }

    let pb = spinner(message);
    let output = Command::new(program)
        .args(args)
        .current_dir(cwd)
        .output()
        .map_err(|e| {
            pb.finish_and_clear();
            BotstrapError::SpawnFailed {
                command: command_line.clone(),
                reason: e.to_string(),
            }
        })?;
    pb.finish_and_clear();

    let stdout = String::from_utf8_lossy(&output.stdout).into_owned();
    let stderr = String::from_utf8_lossy(&output.stderr).into_owned();

    if !output.status.success() {
        if !stderr.trim().is_empty() {
            eprintln!("{}", stderr.trim_end());
        }
        let status = output
            .status
            .code()
            .map_or_else(|| "signal".to_string(), |c| c.to_string());
        return Err(BotstrapError::SubprocessFailed {
            command: command_line,
            status,
            stderr,
        });
    }

    if verbose && !stdout.trim().is_empty() {
        println!("{}", stdout.trim_end());
    }

    Ok(ExecOutput { stdout, stderr })
}

/// Convenience for string-slice argv
pub fn run_checked_str(
    program: &str,
    args: &[&str],
    cwd: &Path,
    message: &str,
    verbose: bool,
) -> Result<ExecOutput> {
    let os_args: Vec<&OsStr> = args.iter().map(OsStr::new).collect();
    run_checked(program, &os_args, cwd, message, verbose)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_spawn_failure_for_missing_program() {
        let temp = TempDir::new().unwrap();
        let err = run_checked_str(
            "botstrap-no-such-program",
            &[],
            temp.path(),
            "testing",
            false,
        )
        .unwrap_err();
        assert!(matches!(err, BotstrapError::SpawnFailed { .. }));
    }

    #[cfg(unix)]
    #[test]
    fn test_nonzero_exit_is_failure() {
        let temp = TempDir::new().unwrap();
        let err = run_checked_str("false", &[], temp.path(), "testing", false).unwrap_err();
        match err {
            BotstrapError::SubprocessFailed { status, .. } => assert_eq!(status, "1"),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[cfg(unix)]
    #[test]
    fn test_stdout_is_captured() {
        let temp = TempDir::new().unwrap();
        let out = run_checked_str("echo", &["hello"], temp.path(), "testing", false).unwrap();
        assert_eq!(out.stdout.trim(), "hello");
    }
}
