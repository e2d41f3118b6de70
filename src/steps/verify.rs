//! Post-install verification
//!
//! Imports the bot's core modules inside the virtualenv. Any import failure
//! is fatal and the interpreter's stderr is surfaced verbatim.

use std::ffi::OsStr;

use console::Style;

use crate::error::{BotstrapError, Result};
use crate::exec;
use crate::pipeline::{Context, Step, StepOutcome};
use crate::steps::venv_bin;

const IMPORT_CHECK: &str = "import config, database_utils, insta_bot";

pub struct VerifyInstall;

impl Step for VerifyInstall {
    fn name(&self) -> &'static str {
        "Verify installation"
    }

    fn run(&self, ctx: &mut Context) -> Result<StepOutcome> {
        let python = venv_bin(&ctx.root, "python");
        exec::run_checked(
            &python,
            &[OsStr::new("-c"), OsStr::new(IMPORT_CHECK)],
            &ctx.root,
            "Importing bot modules",
            ctx.options.verbose,
        )
        .map_err(|e| match e {
            // run_checked already printed the interpreter's stderr verbatim
            BotstrapError::SubprocessFailed { stderr, .. } => {
                BotstrapError::VerificationFailed { detail: stderr }
            }
            other => other,
        })?;

        println!(
            "  {} bot modules import cleanly",
            Style::new().green().apply_to("✓")
        );
        Ok(StepOutcome::Completed)
    }
}
