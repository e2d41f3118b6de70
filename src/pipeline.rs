//! Sequential, fail-fast provisioning pipeline
//!
//! Steps run in a fixed order. Each one completes, is skipped (by its skip
//! predicate or by an already-provisioned check inside the step), or fails,
//! which aborts the run immediately. There is no retry and no rollback:
//! completed steps keep their side effects.

use std::path::PathBuf;

use console::Style;

use crate::error::{BotstrapError, Result};
use crate::options::InstallOptions;

/// Shared state threaded through the pipeline.
///
/// Steps read the immutable options and project root; the interpreter check
/// records the Python it found for the later venv step.
pub struct Context {
    pub root: PathBuf,
    pub options: InstallOptions,
    pub python: Option<PathBuf>,
}

impl Context {
    pub fn new(root: PathBuf, options: InstallOptions) -> Self {
        Self {
            root,
            options,
            python: None,
        }
    }
}

/// How a step ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StepOutcome {
    Completed,
    Skipped(String),
}

/// One unit of the provisioning pipeline
pub trait Step {
    fn name(&self) -> &'static str;

    /// Reason to skip without running, evaluated before `run`
    fn skip(&self, _ctx: &Context) -> Option<String> {
        None
    }

    fn run(&self, ctx: &mut Context) -> Result<StepOutcome>;
}

/// Ordered log of step outcomes, printed as the final summary
#[derive(Debug, Default)]
pub struct RunReport {
    entries: Vec<(&'static str, StepOutcome)>,
}

impl RunReport {
    fn record(&mut self, name: &'static str, outcome: StepOutcome) {
        self.entries.push((name, outcome));
    }

    pub fn entries(&self) -> &[(&'static str, StepOutcome)] {
        &self.entries
    }

    pub fn print_summary(&self) {
        let ok = Style::new().green();
        let dim = Style::new().dim();
        println!();
        println!("{}", Style::new().bold().apply_to("Summary:"));
        for (name, outcome) in self.entries() {
            match outcome {
                StepOutcome::Completed => println!("  {} {name}", ok.apply_to("✓")),
                StepOutcome::Skipped(reason) => {
                    println!("  {} {name} ({reason})", dim.apply_to("-"));
                }
            }
        }
    }
}

/// Runs steps in order, fail-fast
pub struct Pipeline {
    steps: Vec<Box<dyn Step>>,
}

impl Pipeline {
    pub fn new(steps: Vec<Box<dyn Step>>) -> Self {
        Self { steps }
    }

    /// Execute all steps against `ctx`.
    ///
    /// On failure the error is wrapped in [`BotstrapError::StepFailed`] naming
    /// the step that was running, and no further steps execute.
    pub fn run(&self, ctx: &mut Context) -> Result<RunReport> {
        let mut report = RunReport::default();
        let header = Style::new().bold().cyan();
        let dim = Style::new().dim();
        let total = self.steps.len();

        for (i, step) in self.steps.iter().enumerate() {
            if let Some(reason) = step.skip(ctx) {
                println!(
                    "{} {} {}",
                    header.apply_to(format!("[{}/{total}]", i + 1)),
                    step.name(),
                    dim.apply_to(format!("(skipped: {reason})"))
                );
                report.record(step.name(), StepOutcome::Skipped(reason));
                continue;
            }

            println!(
                "{} {}",
                header.apply_to(format!("[{}/{total}]", i + 1)),
                step.name()
            );
            match step.run(ctx) {
                Ok(outcome) => report.record(step.name(), outcome),
                Err(e) => {
                    println!(
                        "{} {}",
                        Style::new().red().bold().apply_to("✗"),
                        step.name()
                    );
                    return Err(BotstrapError::StepFailed {
                        step: step.name().to_string(),
                        source: Box::new(e),
                    });
                }
            }
        }

        Ok(report)
    }
}

/// Print a yellow warning line, used by steps for non-fatal conditions
pub fn warn(message: &str) {
    println!(
        "{} {message}",
        Style::new().yellow().bold().apply_to("warning:")
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;
    use tempfile::TempDir;

    fn test_ctx(temp: &TempDir) -> Context {
        Context::new(
            temp.path().to_path_buf(),
            InstallOptions {
                skip_system_deps: false,
                skip_db_setup: false,
                dev: false,
                assume_yes: false,
                verbose: false,
            },
        )
    }

    struct Recorded {
        name: &'static str,
        skip_reason: Option<&'static str>,
        fail: bool,
        log: Rc<RefCell<Vec<&'static str>>>,
    }

    impl Step for Recorded {
        fn name(&self) -> &'static str {
            self.name
        }

        fn skip(&self, _ctx: &Context) -> Option<String> {
            self.skip_reason.map(ToString::to_string)
        }

        fn run(&self, _ctx: &mut Context) -> Result<StepOutcome> {
            self.log.borrow_mut().push(self.name);
            if self.fail {
                Err(BotstrapError::ManifestNotFound {
                    path: "requirements.txt".to_string(),
                })
            } else {
                Ok(StepOutcome::Completed)
            }
        }
    }

    fn step(
        name: &'static str,
        skip_reason: Option<&'static str>,
        fail: bool,
        log: &Rc<RefCell<Vec<&'static str>>>,
    ) -> Box<dyn Step> {
        Box::new(Recorded {
            name,
            skip_reason,
            fail,
            log: Rc::clone(log),
        })
    }

    #[test]
    fn test_steps_run_in_order() {
        let temp = TempDir::new().unwrap();
        let log = Rc::new(RefCell::new(Vec::new()));
        let pipeline = Pipeline::new(vec![
            step("one", None, false, &log),
            step("two", None, false, &log),
            step("three", None, false, &log),
        ]);
        let report = pipeline.run(&mut test_ctx(&temp)).unwrap();
        assert_eq!(*log.borrow(), ["one", "two", "three"]);
        assert_eq!(report.entries().len(), 3);
    }

    #[test]
    fn test_failure_aborts_remaining_steps() {
        let temp = TempDir::new().unwrap();
        let log = Rc::new(RefCell::new(Vec::new()));
        let pipeline = Pipeline::new(vec![
            step("one", None, false, &log),
            step("boom", None, true, &log),
            step("never", None, false, &log),
        ]);
        let err = pipeline.run(&mut test_ctx(&temp)).unwrap_err();
        assert_eq!(*log.borrow(), ["one", "boom"]);
        match err {
            BotstrapError::StepFailed { step, .. } => assert_eq!(step, "boom"),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_skipped_step_does_not_run_but_is_recorded() {
        let temp = TempDir::new().unwrap();
        let log = Rc::new(RefCell::new(Vec::new()));
        let pipeline = Pipeline::new(vec![
            step("skipped", Some("--flag"), false, &log),
            step("ran", None, false, &log),
        ]);
        let report = pipeline.run(&mut test_ctx(&temp)).unwrap();
        assert_eq!(*log.borrow(), ["ran"]);
        assert_eq!(
            report.entries()[0],
            ("skipped", StepOutcome::Skipped("--flag".to_string()))
        );
        assert_eq!(report.entries()[1], ("ran", StepOutcome::Completed));
    }
}
