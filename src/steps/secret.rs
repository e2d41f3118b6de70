//! Encryption secret generation and injection
//!
//! Generates a fresh secret on every run and upserts it into `.env` under
//! `ENCRYPTION_PASSWORD`, the key the bot's config module reads. The upsert
//! goes through the line-oriented [`EnvFile`] model: exact anchored key match,
//! atomic write-then-rename, never a duplicate line.

use crate::envfile::EnvFile;
use crate::error::Result;
use crate::pipeline::{Context, Step, StepOutcome};
use crate::secret;
use crate::steps::config::CONFIG_FILE;

/// Key under which the secret is stored in `.env`
pub const SECRET_KEY: &str = "ENCRYPTION_PASSWORD";

pub struct InjectSecret;

impl Step for InjectSecret {
    fn name(&self) -> &'static str {
        "Inject encryption secret"
    }

    fn run(&self, ctx: &mut Context) -> Result<StepOutcome> {
        let path = ctx.root.join(CONFIG_FILE);
        let mut env = EnvFile::load(&path)?;
        let action = if env.get(SECRET_KEY).is_some() {
            "replaced"
        } else {
            "added"
        };
        env.set(SECRET_KEY, &secret::generate());
        env.save()?;
        println!(
            "  {action} {SECRET_KEY} with a fresh {}-character secret",
            secret::SECRET_LEN
        );
        Ok(StepOutcome::Completed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::InstallOptions;
    use tempfile::TempDir;

    fn ctx(temp: &TempDir) -> Context {
        Context::new(
            temp.path().to_path_buf(),
            InstallOptions {
                skip_system_deps: true,
                skip_db_setup: true,
                dev: false,
                assume_yes: false,
                verbose: false,
            },
        )
    }

    fn secret_lines(content: &str) -> Vec<&str> {
        content
            .lines()
            .filter(|l| l.starts_with(&format!("{SECRET_KEY}=")))
            .collect()
    }

    #[test]
    fn test_appends_secret_when_key_absent() {
        let temp = TempDir::new().unwrap();
        std::fs::write(temp.path().join(CONFIG_FILE), "TELEGRAM_TOKEN=abc\n").unwrap();
        InjectSecret.run(&mut ctx(&temp)).unwrap();
        let content = std::fs::read_to_string(temp.path().join(CONFIG_FILE)).unwrap();
        let lines = secret_lines(&content);
        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0].len(), SECRET_KEY.len() + 1 + secret::SECRET_LEN);
        assert!(content.starts_with("TELEGRAM_TOKEN=abc\n"));
    }

    #[test]
    fn test_reruns_replace_instead_of_append() {
        let temp = TempDir::new().unwrap();
        std::fs::write(
            temp.path().join(CONFIG_FILE),
            format!("A=1\n{SECRET_KEY}=default_password_change_me\nB=2\n"),
        )
        .unwrap();

        let mut previous = String::new();
        for _ in 0..3 {
            InjectSecret.run(&mut ctx(&temp)).unwrap();
            let content = std::fs::read_to_string(temp.path().join(CONFIG_FILE)).unwrap();
            let lines = secret_lines(&content);
            assert_eq!(lines.len(), 1, "exactly one secret line after each run");
            assert_ne!(lines[0], previous, "secret is regenerated each run");
            previous = lines[0].to_string();
            // Other lines and their order survive
            assert!(content.starts_with("A=1\n"));
            assert!(content.ends_with("B=2\n"));
        }
    }

    #[test]
    fn test_missing_config_is_fatal() {
        let temp = TempDir::new().unwrap();
        assert!(InjectSecret.run(&mut ctx(&temp)).is_err());
    }
}
