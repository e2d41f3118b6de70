//! Effective install options, merged from CLI flags and environment overrides

use crate::cli::Cli;

/// Environment variable equivalents of the skip flags. The value must be
/// exactly "1" to take effect; any other value is ignored.
pub const ENV_SKIP_SYSTEM_DEPS: &str = "SKIP_SYSTEM_DEPS";
pub const ENV_SKIP_DB_SETUP: &str = "SKIP_DB_SETUP";

/// Immutable options for one provisioning run.
///
/// Built once by [`InstallOptions::resolve`] and passed by reference into the
/// pipeline; a flag is effective when set by either the CLI or its environment
/// variable, and neither source can force it back off.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InstallOptions {
    pub skip_system_deps: bool,
    pub skip_db_setup: bool,
    pub dev: bool,
    pub assume_yes: bool,
    pub verbose: bool,
}

impl InstallOptions {
    /// Merge CLI flags with environment overrides.
    ///
    /// The environment is passed as a lookup closure so tests do not have to
    /// mutate process-wide state.
    pub fn resolve(cli: &Cli, env: impl Fn(&str) -> Option<String>) -> Self {
        let env_on = |name: &str| env(name).is_some_and(|v| v == "1");

        Self {
            skip_system_deps: cli.skip_system_deps || env_on(ENV_SKIP_SYSTEM_DEPS),
            skip_db_setup: cli.skip_db_setup || env_on(ENV_SKIP_DB_SETUP),
            dev: cli.dev,
            assume_yes: cli.yes,
            verbose: cli.verbose,
        }
    }
}
