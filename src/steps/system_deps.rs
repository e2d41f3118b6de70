//! System package installation with platform-dependent dispatch
//!
//! An unrecognized OS or a host without any known package manager is a
//! warning, not an error: the install is skipped and the pipeline continues.
//! A failing package manager invocation is fatal.

use crate::error::Result;
use crate::exec;
use crate::pipeline::{Context, Step, StepOutcome, warn};
use crate::platform::PlatformProfile;

pub struct InstallSystemDeps;

#[cfg(unix)]
fn is_root() -> bool {
    nix::unistd::geteuid().is_root()
}

#[cfg(not(unix))]
fn is_root() -> bool {
    false
}

impl Step for InstallSystemDeps {
    fn name(&self) -> &'static str {
        "Install system packages"
    }

    fn skip(&self, ctx: &Context) -> Option<String> {
        ctx.options
            .skip_system_deps
            .then(|| "--skip-system-deps".to_string())
    }

    fn run(&self, ctx: &mut Context) -> Result<StepOutcome> {
        let profile = PlatformProfile::detect();
        let Some(manager) = profile.manager else {
            warn("unsupported platform or no known package manager found; skipping system packages");
            return Ok(StepOutcome::Skipped("unsupported platform".to_string()));
        };

        println!(
            "  using {} to install: {}",
            manager.name(),
            manager.packages().join(" ")
        );

        // Package managers need elevated privileges; go through sudo unless
        // already root. Homebrew refuses to run as root and never needs it.
        let mut argv = manager.install_argv();
        if !is_root() && manager.name() != "brew" {
            argv.insert(0, "sudo".to_string());
        }
        let args: Vec<&str> = argv[1..].iter().map(String::as_str).collect();
        exec::run_checked_str(
            &argv[0],
            &args,
            &ctx.root,
            "Installing system packages",
            ctx.options.verbose,
        )?;

        Ok(StepOutcome::Completed)
    }
}
