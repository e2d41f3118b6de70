//! botstrap - runtime provisioner for the publishing bot
//!
//! Runs an ordered, idempotent, fail-fast pipeline that prepares a machine to
//! run the bot: system packages, virtualenv, Python dependencies, config file
//! with an injected secret, working directories, database schema, and a final
//! import check.

use std::path::PathBuf;

use clap::Parser;
use console::Style;

mod cli;
mod envfile;
mod error;
mod exec;
mod options;
mod pipeline;
mod platform;
mod secret;
mod steps;

use cli::Cli;
use error::{BotstrapError, Result};
use options::InstallOptions;
use pipeline::{Context, Pipeline};

/// Ask before provisioning as root; system-wide venvs and root-owned config
/// files are usually a mistake.
fn confirm_root_run(options: &InstallOptions) -> Result<()> {
    #[cfg(unix)]
    if nix::unistd::geteuid().is_root() && !options.assume_yes {
        use inquire::Confirm;

        let proceed = match Confirm::new("Running as root. Provision system-wide anyway?")
            .with_default(false)
            .with_help_message("The bot normally runs under a regular user account")
            .prompt()
        {
            Ok(answer) => answer,
            // No terminal to ask on counts as a decline
            Err(inquire::InquireError::NotTTY) => false,
            Err(e) => return Err(e.into()),
        };
        if !proceed {
            return Err(BotstrapError::Declined);
        }
    }
    #[cfg(not(unix))]
    let _ = options;
    Ok(())
}

fn run(root: PathBuf, options: InstallOptions) -> Result<()> {
    if !root.is_dir() {
        return Err(BotstrapError::ProjectDirNotFound {
            path: root.display().to_string(),
        });
    }
    confirm_root_run(&options)?;

    let mut ctx = Context::new(root, options);
    let report = Pipeline::new(steps::standard()).run(&mut ctx)?;
    report.print_summary();

    println!();
    println!(
        "{}",
        Style::new().green().bold().apply_to("Installation complete.")
    );
    println!("Useful post-install commands (run inside the project directory):");
    println!("  venv/bin/python {} backup", steps::database::DB_SCRIPT);
    println!("  venv/bin/python {} stats", steps::database::DB_SCRIPT);
    println!("  venv/bin/python {} cleanup", steps::database::DB_SCRIPT);
    Ok(())
}

fn main() {
    // clap exits 2 on bad usage by default; the installer contract is exit
    // code 1 for usage errors and 0 for --help/--version.
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            let code = if e.exit_code() == 0 { 0 } else { 1 };
            let _ = e.print();
            std::process::exit(code);
        }
    };

    let options = InstallOptions::resolve(&cli, |name| std::env::var(name).ok());

    if let Err(e) = run(cli.dir, options) {
        eprintln!("Error: {e}");
        if let BotstrapError::StepFailed { ref source, .. } = e {
            eprintln!("  caused by: {source}");
        }
        std::process::exit(1);
    }
}
