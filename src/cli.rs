//! CLI definitions using clap derive API

use clap::Parser;
use clap::builder::{Styles, styling::AnsiColor};
use std::path::PathBuf;

/// botstrap - runtime provisioner for the publishing bot
#[derive(Parser, Debug)]
#[command(
    name = "botstrap",
    author,
    version,
    color = clap::ColorChoice::Always,
    styles = Styles::styled()
        .header(AnsiColor::Green.on_default().bold())
        .usage(AnsiColor::Green.on_default().bold())
        .literal(AnsiColor::Cyan.on_default().bold())
        .placeholder(AnsiColor::Cyan.on_default()),
    about = "Provision a local runtime environment for the publishing bot",
    long_about = "botstrap prepares a machine to run the publishing bot: it installs system \
                  packages, creates a Python virtualenv, installs the dependency manifest, \
                  materializes .env from its template, injects an encryption secret, creates \
                  working directories, initializes the database and verifies the result. \
                  Safe to re-run: every step is idempotent.",
    after_help = "\x1b[1m\x1b[32mExamples:\x1b[0m\n    \
                  botstrap\n    \
                  botstrap --skip-system-deps\n    \
                  botstrap --dev --dir ~/src/bot\n    \
                  SKIP_DB_SETUP=1 botstrap\n\n\
                  \x1b[1m\x1b[32mEnvironment:\x1b[0m\n    \
                  SKIP_SYSTEM_DEPS=1    same as --skip-system-deps\n    \
                  SKIP_DB_SETUP=1       same as --skip-db-setup"
)]
pub struct Cli {
    /// Do not install system packages (ffmpeg, sqlite, Python tooling)
    #[arg(long)]
    pub skip_system_deps: bool,

    /// Do not initialize the database schema
    #[arg(long)]
    pub skip_db_setup: bool,

    /// Also install development dependencies (requirements-dev.txt)
    #[arg(long)]
    pub dev: bool,

    /// Project directory to provision (defaults to current directory)
    #[arg(long, short = 'd', default_value = ".")]
    pub dir: PathBuf,

    /// Assume "yes" for confirmation prompts
    #[arg(long, short = 'y')]
    pub yes: bool,

    /// Echo external commands before running them
    #[arg(long, short = 'v')]
    pub verbose: bool,
}
