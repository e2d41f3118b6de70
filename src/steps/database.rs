//! Database schema initialization (external boundary)
//!
//! Shells out to the bot's own `database_utils.py create` inside the
//! virtualenv. Its schema semantics are its own business; we only care about
//! the exit status. The same entrypoint supports `backup`, `stats` and
//! `cleanup` as post-install operator commands (documented in the final
//! summary, not invoked here).

use std::ffi::OsStr;

use crate::error::Result;
use crate::exec;
use crate::pipeline::{Context, Step, StepOutcome};
use crate::steps::venv_bin;

pub const DB_SCRIPT: &str = "database_utils.py";

pub struct InitializeDatabase;

impl Step for InitializeDatabase {
    fn name(&self) -> &'static str {
        "Initialize database"
    }

    fn skip(&self, ctx: &Context) -> Option<String> {
        ctx.options.skip_db_setup.then(|| "--skip-db-setup".to_string())
    }

    fn run(&self, ctx: &mut Context) -> Result<StepOutcome> {
        let python = venv_bin(&ctx.root, "python");
        exec::run_checked(
            &python,
            &[OsStr::new(DB_SCRIPT), OsStr::new("create")],
            &ctx.root,
            "Creating database schema",
            ctx.options.verbose,
        )?;
        Ok(StepOutcome::Completed)
    }
}
