//! Host platform detection module
//!
//! This module handles:
//! - OS family identification (Linux, Darwin, unknown)
//! - Package manager probing and selection (via managers module)

pub mod managers;

pub use managers::PackageManager;

/// Host operating system family
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OsFamily {
    Linux,
    Darwin,
    Unknown,
}

impl OsFamily {
    /// Map a `std::env::consts::OS` identifier to an OS family
    pub fn from_os_str(os: &str) -> Self {
        match os {
            "linux" => OsFamily::Linux,
            "macos" => OsFamily::Darwin,
            _ => OsFamily::Unknown,
        }
    }

    /// Detect the family of the running host
    pub fn current() -> Self {
        Self::from_os_str(std::env::consts::OS)
    }
}

/// Detected host profile: OS family plus the first available package manager.
///
/// `manager` is `None` on unsupported platforms; that is a warning condition,
/// not an error, and system package installation is skipped.
pub struct PlatformProfile {
    pub os: OsFamily,
    pub manager: Option<&'static dyn PackageManager>,
}

impl PlatformProfile {
    /// Probe package manager candidates for the given OS family in preference
    /// order and keep the first one whose executable is on PATH.
    pub fn detect_for(os: OsFamily) -> Self {
        let manager = managers::candidates(os).iter().copied().find(|m| m.detect());
        Self { os, manager }
    }

    /// Detect the profile of the running host
    pub fn detect() -> Self {
        Self::detect_for(OsFamily::current())
    }
}
