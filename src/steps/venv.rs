//! Virtualenv provisioning
//!
//! Creates `venv/` under the project root. An existing directory is left
//! untouched (warning only, never recreated). pip is self-upgraded afterwards
//! in both cases.

use std::ffi::OsStr;

use crate::error::{BotstrapError, Result};
use crate::exec;
use crate::pipeline::{Context, Step, StepOutcome, warn};
use crate::steps::{VENV_DIR, venv_bin};

pub struct CreateVirtualenv;

impl Step for CreateVirtualenv {
    fn name(&self) -> &'static str {
        "Create virtualenv"
    }

    fn run(&self, ctx: &mut Context) -> Result<StepOutcome> {
        let venv_path = ctx.root.join(VENV_DIR);
        if venv_path.is_dir() {
            warn(&format!(
                "virtualenv already exists at {}; leaving it in place",
                venv_path.display()
            ));
        } else {
            let python = ctx
                .python
                .clone()
                .ok_or_else(|| BotstrapError::MissingInterpreter {
                    message: "interpreter check did not run".to_string(),
                })?;
            exec::run_checked(
                &python,
                &[OsStr::new("-m"), OsStr::new("venv"), OsStr::new(VENV_DIR)],
                &ctx.root,
                "Creating virtualenv",
                ctx.options.verbose,
            )?;
            println!("  created {}", venv_path.display());
        }

        let pip = venv_bin(&ctx.root, "pip");
        exec::run_checked(
            &pip,
            &[
                OsStr::new("install"),
                OsStr::new("--upgrade"),
                OsStr::new("pip"),
            ],
            &ctx.root,
            "Upgrading pip",
            ctx.options.verbose,
        )?;

        Ok(StepOutcome::Completed)
    }
}
