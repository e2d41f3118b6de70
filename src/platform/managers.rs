//! Package manager capability and candidate registry
//!
//! Each supported manager knows its executable, its non-interactive install
//! invocation and the package names the bot runtime needs on that platform
//! (Python tooling, ffmpeg for media processing, SQLite for storage).

use super::OsFamily;

/// A system package manager capability
pub trait PackageManager: Sync {
    /// Short identifier shown to the operator (e.g. "apt")
    fn name(&self) -> &'static str;

    /// Executable probed on PATH during detection
    fn executable(&self) -> &'static str;

    /// Packages the bot runtime needs, in this manager's naming
    fn packages(&self) -> &'static [&'static str];

    /// Full non-interactive install argv, program first
    fn install_argv(&self) -> Vec<String>;

    /// True when the manager's executable is available on PATH
    fn detect(&self) -> bool {
        which::which(self.executable()).is_ok()
    }
}

struct Apt;

impl PackageManager for Apt {
    fn name(&self) -> &'static str {
        "apt"
    }

    fn executable(&self) -> &'static str {
        "apt-get"
    }

    fn packages(&self) -> &'static [&'static str] {
        &["python3", "python3-venv", "python3-pip", "ffmpeg", "sqlite3"]
    }

    fn install_argv(&self) -> Vec<String> {
        let mut argv = vec!["apt-get".to_string(), "install".to_string(), "-y".to_string()];
        argv.extend(self.packages().iter().map(ToString::to_string));
        argv
    }
}

struct Dnf;

impl PackageManager for Dnf {
    fn name(&self) -> &'static str {
        "dnf"
    }

    fn executable(&self) -> &'static str {
        "dnf"
    }

    fn packages(&self) -> &'static [&'static str] {
        &["python3", "python3-pip", "ffmpeg", "sqlite"]
    }

    fn install_argv(&self) -> Vec<String> {
        let mut argv = vec!["dnf".to_string(), "install".to_string(), "-y".to_string()];
        argv.extend(self.packages().iter().map(ToString::to_string));
        argv
    }
}

struct Pacman;

impl PackageManager for Pacman {
    fn name(&self) -> &'static str {
        "pacman"
    }

    fn executable(&self) -> &'static str {
        "pacman"
    }

    fn packages(&self) -> &'static [&'static str] {
        &["python", "python-pip", "ffmpeg", "sqlite"]
    }

    fn install_argv(&self) -> Vec<String> {
        let mut argv = vec![
            "pacman".to_string(),
            "-S".to_string(),
            "--noconfirm".to_string(),
        ];
        argv.extend(self.packages().iter().map(ToString::to_string));
        argv
    }
}

struct Brew;

impl PackageManager for Brew {
    fn name(&self) -> &'static str {
        "brew"
    }

    fn executable(&self) -> &'static str {
        "brew"
    }

    fn packages(&self) -> &'static [&'static str] {
        &["python", "ffmpeg", "sqlite"]
    }

    fn install_argv(&self) -> Vec<String> {
        let mut argv = vec!["brew".to_string(), "install".to_string()];
        argv.extend(self.packages().iter().map(ToString::to_string));
        argv
    }
}

static APT: Apt = Apt;
static DNF: Dnf = Dnf;
static PACMAN: Pacman = Pacman;
static BREW: Brew = Brew;

static LINUX_CANDIDATES: [&dyn PackageManager; 3] = [&APT, &DNF, &PACMAN];
static DARWIN_CANDIDATES: [&dyn PackageManager; 1] = [&BREW];

/// Candidate managers for an OS family, in preference order
pub fn candidates(os: OsFamily) -> &'static [&'static dyn PackageManager] {
    match os {
        OsFamily::Linux => &LINUX_CANDIDATES,
        OsFamily::Darwin => &DARWIN_CANDIDATES,
        OsFamily::Unknown => &[],
    }
}
