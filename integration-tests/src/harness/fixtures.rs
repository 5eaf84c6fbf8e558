use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Temporary log root that is removed when dropped.
pub struct LogDir {
    dir: TempDir,
}

impl LogDir {
    pub fn new() -> Self {
        Self {
            dir: tempfile::tempdir().expect("failed to create temp log dir"),
        }
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Write `lines` (newline-terminated) to `name` under the root.
    pub fn write<I, S>(&self, name: &str, lines: I) -> PathBuf
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let path = self.dir.path().join(name);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("failed to create fixture dir");
        }

        let mut body = String::new();
        for line in lines {
            body.push_str(line.as_ref());
            body.push('\n');
        }
        fs::write(&path, body).expect("failed to write fixture log");
        path
    }
}

impl Default for LogDir {
    fn default() -> Self {
        Self::new()
    }
}

pub fn combined_line(ip: &str, url: &str, status: u16, bytes: u64, user_agent: &str) -> String {
    format!(
        r#"{ip} - - [19/Oct/2026:10:00:00 +0000] "GET {url} HTTP/1.1" {status} {bytes} "-" "{user_agent}""#
    )
}
