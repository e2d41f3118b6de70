//! Config materialization
//!
//! Copies `.env.example` to `.env` on first run only. An existing `.env` is
//! never touched, so operator edits survive re-runs.

use crate::error::{BotstrapError, Result};
use crate::pipeline::{Context, Step, StepOutcome, warn};

pub const CONFIG_FILE: &str = ".env";
pub const CONFIG_TEMPLATE: &str = ".env.example";

pub struct MaterializeConfig;

impl Step for MaterializeConfig {
    fn name(&self) -> &'static str {
        "Materialize config"
    }

    fn run(&self, ctx: &mut Context) -> Result<StepOutcome> {
        let config = ctx.root.join(CONFIG_FILE);
        if config.is_file() {
            warn(&format!("{CONFIG_FILE} already exists; keeping it as-is"));
            return Ok(StepOutcome::Skipped("config already present".to_string()));
        }

        let template = ctx.root.join(CONFIG_TEMPLATE);
        if !template.is_file() {
            return Err(BotstrapError::TemplateNotFound {
                path: template.display().to_string(),
            });
        }

        std::fs::copy(&template, &config).map_err(|e| BotstrapError::CopyFailed {
            from: template.display().to_string(),
            to: config.display().to_string(),
            reason: e.to_string(),
        })?;
        println!("  created {CONFIG_FILE} from {CONFIG_TEMPLATE}");
        Ok(StepOutcome::Completed)
    }
}
