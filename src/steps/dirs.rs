//! Working directory creation
//!
//! The bot expects `tmp/` for downloaded media and `logs/` for its rotating
//! log files. Creation is recursive and idempotent.

use crate::error::{BotstrapError, Result};
use crate::pipeline::{Context, Step, StepOutcome};

pub const WORK_DIRS: &[&str] = &["tmp", "logs"];

pub struct CreateDirectories;

impl Step for CreateDirectories {
    fn name(&self) -> &'static str {
        "Create working directories"
    }

    fn run(&self, ctx: &mut Context) -> Result<StepOutcome> {
        for dir in WORK_DIRS {
            let path = ctx.root.join(dir);
            std::fs::create_dir_all(&path).map_err(|e| BotstrapError::DirCreateFailed {
                path: path.display().to_string(),
                reason: e.to_string(),
            })?;
        }
        println!("  ensured {}", WORK_DIRS.join(", "));
        Ok(StepOutcome::Completed)
    }
}
