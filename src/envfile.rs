//! Line-oriented model of the bot's `.env` config file
//!
//! The file is an ordered sequence of lines, each either a `KEY=VALUE`
//! assignment or an opaque line (comment, blank, anything else). Opaque lines
//! are preserved byte for byte. A line only counts as an assignment when
//! `KEY=` is anchored at the very start of the line, so a key that is a
//! substring of another key (`ENCRYPTION_PASSWORD` vs
//! `ENCRYPTION_PASSWORD_FILE`) can never be matched by mistake.
//!
//! After every operation keys are unique: `set` replaces the first occurrence
//! in place and drops any later duplicates instead of appending a second line.

use std::io::Write;
use std::path::{Path, PathBuf};

use crate::error::{BotstrapError, Result};

#[derive(Debug, Clone, PartialEq, Eq)]
enum Line {
    Entry { key: String, value: String },
    Raw(String),
}

/// An `.env`-style config file held in memory as ordered line records
#[derive(Debug)]
pub struct EnvFile {
    path: PathBuf,
    lines: Vec<Line>,
}

/// True when `key` is usable on the left of an unquoted `KEY=VALUE` line
fn is_valid_key(key: &str) -> bool {
    let mut chars = key.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

fn parse_line(line: &str) -> Line {
    if let Some((key, value)) = line.split_once('=') {
        if is_valid_key(key) {
            return Line::Entry {
                key: key.to_string(),
                value: value.to_string(),
            };
        }
    }
    Line::Raw(line.to_string())
}

impl EnvFile {
    /// Load and parse the config file at `path`
    pub fn load(path: &Path) -> Result<Self> {
        let content =
            std::fs::read_to_string(path).map_err(|e| BotstrapError::EnvFileReadFailed {
                path: path.display().to_string(),
                reason: e.to_string(),
            })?;
        Ok(Self {
            path: path.to_path_buf(),
            lines: content.lines().map(parse_line).collect(),
        })
    }

    /// Value of the assignment line for `key`, if any
    pub fn get(&self, key: &str) -> Option<&str> {
        self.lines.iter().find_map(|line| match line {
            Line::Entry { key: k, value } if k == key => Some(value.as_str()),
            _ => None,
        })
    }

    /// Upsert `key` to `value`.
    ///
    /// Replaces the first matching assignment line in place, preserving the
    /// order of every other line; removes any later lines with the same key;
    /// appends a new line at end of file when the key is absent.
    pub fn set(&mut self, key: &str, value: &str) {
        debug_assert!(is_valid_key(key));
        let mut replaced = false;
        self.lines.retain_mut(|line| {
            if let Line::Entry { key: k, value: v } = line {
                if k == key {
                    if replaced {
                        return false;
                    }
                    *v = value.to_string();
                    replaced = true;
                }
            }
            true
        });
        if !replaced {
            self.lines.push(Line::Entry {
                key: key.to_string(),
                value: value.to_string(),
            });
        }
    }

    /// Write the file back atomically: temp file in the same directory, then
    /// rename over the original. A failed write leaves the original untouched.
    pub fn save(&self) -> Result<()> {
        let write_err = |reason: String| BotstrapError::EnvFileWriteFailed {
            path: self.path.display().to_string(),
            reason,
        };

        let dir = self.path.parent().unwrap_or_else(|| Path::new("."));
        let mut tmp = tempfile::NamedTempFile::new_in(dir).map_err(|e| write_err(e.to_string()))?;
        for line in &self.lines {
            match line {
                Line::Entry { key, value } => writeln!(tmp, "{key}={value}"),
                Line::Raw(text) => writeln!(tmp, "{text}"),
            }
            .map_err(|e| write_err(e.to_string()))?;
        }
        tmp.persist(&self.path)
            .map_err(|e| write_err(e.to_string()))?;
        Ok(())
    }

    /// Number of assignment lines whose key equals `key`
    #[cfg(test)]
    fn count_key(&self, key: &str) -> usize {
        self.lines
            .iter()
            .filter(|line| matches!(line, Line::Entry { key: k, .. } if k == key))
            .count()
    }
}
