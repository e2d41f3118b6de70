//! Error types and handling for botstrap
//!
//! Uses `thiserror` for error definitions and `miette` for pretty diagnostics.

use miette::Diagnostic;
use thiserror::Error;

/// Minimum supported interpreter version
pub const MIN_PYTHON_MAJOR: u32 = 3;
pub const MIN_PYTHON_MINOR: u32 = 8;

/// Main error type for botstrap operations
#[derive(Error, Diagnostic, Debug)]
pub enum BotstrapError {
    // Prerequisite errors
    #[error("No compatible Python interpreter found: {message}")]
    #[diagnostic(
        code(botstrap::prereq::missing_interpreter),
        help("Install Python 3.8 or newer and make sure it is on PATH")
    )]
    MissingInterpreter { message: String },

    #[error("Python {found} is too old (need {MIN_PYTHON_MAJOR}.{MIN_PYTHON_MINOR}+)")]
    #[diagnostic(
        code(botstrap::prereq::interpreter_too_old),
        help("Upgrade the system Python, or point PATH at a newer interpreter")
    )]
    InterpreterTooOld { found: String },

    #[error("Project directory not found: {path}")]
    #[diagnostic(
        code(botstrap::prereq::project_dir_not_found),
        help("Pass the bot checkout directory with --dir")
    )]
    ProjectDirNotFound { path: String },

    // Artifact errors
    #[error("Dependency manifest not found: {path}")]
    #[diagnostic(
        code(botstrap::deps::manifest_not_found),
        help("requirements.txt must exist in the project directory before installing")
    )]
    ManifestNotFound { path: String },

    #[error("Config template not found: {path}")]
    #[diagnostic(
        code(botstrap::config::template_not_found),
        help("Neither .env nor .env.example exists; restore .env.example from the repository")
    )]
    TemplateNotFound { path: String },

    // Subprocess errors
    #[error("Failed to launch '{command}': {reason}")]
    #[diagnostic(code(botstrap::subprocess::spawn_failed))]
    SpawnFailed { command: String, reason: String },

    #[error("Command '{command}' exited with status {status}")]
    #[diagnostic(code(botstrap::subprocess::failed))]
    SubprocessFailed {
        command: String,
        status: String,
        stderr: String,
    },

    // Config file errors
    #[error("Failed to read config file '{path}': {reason}")]
    #[diagnostic(code(botstrap::envfile::read_failed))]
    EnvFileReadFailed { path: String, reason: String },

    #[error("Failed to write config file '{path}': {reason}")]
    #[diagnostic(code(botstrap::envfile::write_failed))]
    EnvFileWriteFailed { path: String, reason: String },

    // Filesystem errors
    #[error("Failed to create directory '{path}': {reason}")]
    #[diagnostic(code(botstrap::fs::dir_create_failed))]
    DirCreateFailed { path: String, reason: String },

    #[error("Failed to copy '{from}' to '{to}': {reason}")]
    #[diagnostic(code(botstrap::fs::copy_failed))]
    CopyFailed {
        from: String,
        to: String,
        reason: String,
    },

    // Verification errors
    #[error("Installation verification failed")]
    #[diagnostic(
        code(botstrap::verify::failed),
        help("The bot modules could not be imported; the interpreter output is shown above")
    )]
    VerificationFailed { detail: String },

    // Pipeline errors
    #[error("Step '{step}' failed")]
    #[diagnostic(code(botstrap::pipeline::step_failed))]
    StepFailed {
        step: String,
        #[source]
        source: Box<BotstrapError>,
    },

    #[error("Installation aborted by operator")]
    #[diagnostic(code(botstrap::prompt::declined))]
    Declined,

    #[error("Prompt failed: {0}")]
    #[diagnostic(code(botstrap::prompt::failed))]
    PromptFailed(String),
}

impl From<inquire::InquireError> for BotstrapError {
    fn from(err: inquire::InquireError) -> Self {
        BotstrapError::PromptFailed(err.to_string())
    }
}

pub type Result<T> = miette::Result<T, BotstrapError>;
