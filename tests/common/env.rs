use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};

use tempfile::TempDir;

use blogger::ProjectLayout;

/// An isolated blog project whose output lands in `<tmp>/_out`.
pub struct TestBlog {
    dir: TempDir,
}

impl TestBlog {
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().unwrap(),
        }
    }

    pub fn root(&self) -> &Path {
        self.dir.path()
    }

    pub fn out_dir(&self) -> PathBuf {
        self.root().join("_out")
    }

    pub fn layout(&self) -> ProjectLayout {
        ProjectLayout::with_out_dir(self.root(), self.out_dir())
    }

    pub fn with_file(self, rel: &str, text: &str) -> Self {
        self.write(rel, text);
        self
    }

    pub fn write(&self, rel: &str, text: &str) {
        let path = self.root().join(rel);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, text).unwrap();
    }

    pub fn read_out(&self, rel: &str) -> String {
        fs::read_to_string(self.out_dir().join(rel)).unwrap()
    }

    /// Run the real binary against this project with `--output-dir` set.
    pub fn run_bin(&self, args: &[&str]) -> Output {
        Command::new(env!("CARGO_BIN_EXE_blogger"))
            .arg("-C")
            .arg(self.root())
            .args(args)
            .env("NO_COLOR", "1")
            .env("BLOGGER_DATA_DIR", self.root().join(".data"))
            .env_remove("BLOGGER_LOG")
            .output()
            .unwrap()
    }
}
