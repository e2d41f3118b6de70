//! The provisioning steps, one module per concern, in pipeline order

pub mod interpreter;
pub mod system_deps;
pub mod venv;
pub mod python_deps;
pub mod config;
pub mod secret;
pub mod dirs;
pub mod database;
pub mod verify;

use std::path::{Path, PathBuf};

use crate::pipeline::Step;

/// Virtualenv directory name under the project root
pub const VENV_DIR: &str = "venv";

/// Path of a tool inside the project virtualenv
pub fn venv_bin(root: &Path, tool: &str) -> PathBuf {
    #[cfg(windows)]
    {
        root.join(VENV_DIR).join("Scripts").join(format!("{tool}.exe"))
    }
    #[cfg(not(windows))]
    {
        root.join(VENV_DIR).join("bin").join(tool)
    }
}

/// The full pipeline in its fixed execution order
pub fn standard() -> Vec<Box<dyn Step>> {
    vec![
        Box::new(interpreter::CheckInterpreter),
        Box::new(system_deps::InstallSystemDeps),
        Box::new(venv::CreateVirtualenv),
        Box::new(python_deps::InstallPythonDeps),
        Box::new(config::MaterializeConfig),
        Box::new(secret::InjectSecret),
        Box::new(dirs::CreateDirectories),
        Box::new(database::InitializeDatabase),
        Box::new(verify::VerifyInstall),
    ]
}
