//! Common test utilities for botstrap integration tests

use std::path::PathBuf;
use tempfile::TempDir;

/// A throwaway project directory for integration tests
pub struct TestProject {
    #[allow(dead_code)]
    pub temp: TempDir,
    pub path: PathBuf,
}

impl TestProject {
    pub fn new() -> Self {
        let temp = TempDir::new().expect("Failed to create temp directory");
        let path = temp.path().to_path_buf();
        Self { temp, path }
    }

    /// A project that looks like a bot checkout: manifest, config template
    /// and importable stub modules.
    #[allow(dead_code)]
    pub fn with_bot_stub() -> Self {
        let project = Self::new();
        project.write_file("requirements.txt", "");
        project.write_file(
            ".env.example",
            "# bot configuration\nTELEGRAM_TOKEN=\nDATABASE_URL=sqlite:///bot.db\n",
        );
        project.write_file("config.py", "");
        project.write_file(
            "database_utils.py",
            "import sys\n\nif __name__ == '__main__':\n    assert sys.argv[1:] == ['create']\n",
        );
        project.write_file("insta_bot.py", "");
        project
    }

    pub fn write_file(&self, path: &str, content: &str) {
        let file_path = self.path.join(path);
        if let Some(parent) = file_path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create parent directory");
        }
        std::fs::write(&file_path, content).expect("Failed to write file");
    }

    #[allow(dead_code)]
    pub fn read_file(&self, path: &str) -> String {
        std::fs::read_to_string(self.path.join(path)).expect("Failed to read file")
    }

    #[allow(dead_code)]
    pub fn file_exists(&self, path: &str) -> bool {
        self.path.join(path).exists()
    }

    /// Entries directly under the project root, sorted by name
    #[allow(dead_code)]
    pub fn list_root(&self) -> Vec<String> {
        let mut names: Vec<String> = std::fs::read_dir(&self.path)
            .expect("Failed to read project dir")
            .map(|e| e.expect("dir entry").file_name().to_string_lossy().into_owned())
            .collect();
        names.sort();
        names
    }
}
