//! Interpreter prerequisite check
//!
//! Finds a Python on PATH and rejects versions below the minimum before any
//! step mutates the machine.

use std::path::PathBuf;

use crate::error::{BotstrapError, MIN_PYTHON_MAJOR, MIN_PYTHON_MINOR, Result};
use crate::exec;
use crate::pipeline::{Context, Step, StepOutcome};

const CANDIDATES: &[&str] = &["python3", "python"];

pub struct CheckInterpreter;

/// Parse "Python 3.11.2" into (3, 11)
fn parse_version(output: &str) -> Option<(u32, u32)> {
    let version = output.trim().split_whitespace().nth(1)?;
    let mut parts = version.split('.');
    let major = parts.next()?.parse().ok()?;
    let minor = parts.next()?.parse().ok()?;
    Some((major, minor))
}

fn find_python() -> Result<PathBuf> {
    CANDIDATES
        .iter()
        .find_map(|name| which::which(name).ok())
        .ok_or_else(|| BotstrapError::MissingInterpreter {
            message: format!("none of {} on PATH", CANDIDATES.join(", ")),
        })
}

impl Step for CheckInterpreter {
    fn name(&self) -> &'static str {
        "Check Python interpreter"
    }

    fn run(&self, ctx: &mut Context) -> Result<StepOutcome> {
        let python = find_python()?;

        let out = exec::run_checked(
            &python,
            &[std::ffi::OsStr::new("--version")],
            &ctx.root,
            "Checking Python version",
            ctx.options.verbose,
        )?;
        // Python 2 printed the version on stderr
        let banner = if out.stdout.trim().is_empty() {
            out.stderr
        } else {
            out.stdout
        };

        let (major, minor) =
            parse_version(&banner).ok_or_else(|| BotstrapError::MissingInterpreter {
                message: format!("could not parse version from '{}'", banner.trim()),
            })?;
        if (major, minor) < (MIN_PYTHON_MAJOR, MIN_PYTHON_MINOR) {
            return Err(BotstrapError::InterpreterTooOld {
                found: format!("{major}.{minor}"),
            });
        }

        println!("  found {} ({major}.{minor})", python.display());
        ctx.python = Some(python);
        Ok(StepOutcome::Completed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_version() {
        assert_eq!(parse_version("Python 3.11.2\n"), Some((3, 11)));
        assert_eq!(parse_version("Python 3.8.0"), Some((3, 8)));
        assert_eq!(parse_version("Python 2.7.18"), Some((2, 7)));
        assert_eq!(parse_version("garbage"), None);
        assert_eq!(parse_version(""), None);
    }

    #[test]
    fn test_minimum_version_boundary() {
        let old = (3, 7);
        let min = (MIN_PYTHON_MAJOR, MIN_PYTHON_MINOR);
        assert!(old < min);
        assert!((3, 8) >= min);
        assert!((3, 12) >= min);
    }
}
