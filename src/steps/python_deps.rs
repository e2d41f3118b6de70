//! Python dependency installation from the manifest
//!
//! `requirements.txt` is mandatory; `requirements-dev.txt` is installed on top
//! with `--dev` when it exists.

use std::ffi::OsStr;
use std::path::Path;

use crate::error::{BotstrapError, Result};
use crate::exec;
use crate::pipeline::{Context, Step, StepOutcome, warn};
use crate::steps::venv_bin;

pub const MANIFEST: &str = "requirements.txt";
pub const DEV_MANIFEST: &str = "requirements-dev.txt";

pub struct InstallPythonDeps;

fn pip_install(ctx: &Context, manifest: &Path) -> Result<()> {
    let pip = venv_bin(&ctx.root, "pip");
    exec::run_checked(
        &pip,
        &[OsStr::new("install"), OsStr::new("-r"), manifest.as_os_str()],
        &ctx.root,
        &format!("Installing {}", manifest.display()),
        ctx.options.verbose,
    )?;
    Ok(())
}

impl Step for InstallPythonDeps {
    fn name(&self) -> &'static str {
        "Install Python dependencies"
    }

    fn run(&self, ctx: &mut Context) -> Result<StepOutcome> {
        let manifest = ctx.root.join(MANIFEST);
        if !manifest.is_file() {
            return Err(BotstrapError::ManifestNotFound {
                path: manifest.display().to_string(),
            });
        }
        pip_install(ctx, Path::new(MANIFEST))?;

        if ctx.options.dev {
            if ctx.root.join(DEV_MANIFEST).is_file() {
                pip_install(ctx, Path::new(DEV_MANIFEST))?;
            } else {
                warn(&format!("--dev given but {DEV_MANIFEST} not found; skipping"));
            }
        }

        Ok(StepOutcome::Completed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::InstallOptions;
    use tempfile::TempDir;

    #[test]
    fn test_missing_manifest_is_fatal_before_any_subprocess() {
        let temp = TempDir::new().unwrap();
        let mut ctx = Context::new(
            temp.path().to_path_buf(),
            InstallOptions {
                skip_system_deps: true,
                skip_db_setup: true,
                dev: false,
                assume_yes: false,
                verbose: false,
            },
        );
        let err = InstallPythonDeps.run(&mut ctx).unwrap_err();
        assert!(matches!(err, BotstrapError::ManifestNotFound { .. }));
    }
}
