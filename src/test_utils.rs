// git-review: branch delta review tool
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Shared test fixtures: throwaway repositories driven by the git CLI.

use std::path::Path;
use std::process::Command;

use tempfile::TempDir;

/// A repository in a temporary directory with one commit on `main`.
pub(crate) struct TestRepo {
    dir: TempDir,
}

impl TestRepo {
    pub(crate) fn new() -> Self {
        let dir = tempfile::tempdir().expect("failed to create temp dir");
        let repo = Self { dir };
        repo.git(&["init", "-q", "--initial-branch=main"]);
        repo.git(&["config", "user.email", "test@example.com"]);
        repo.git(&["config", "user.name", "Test"]);
        repo.git(&["config", "commit.gpgsign", "false"]);
        repo.write("README.md", "# Test\n");
        repo.commit_all("Initial commit");
        repo
    }

    pub(crate) fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Run git in the repository, panicking on failure. Returns trimmed stdout.
    pub(crate) fn git(&self, args: &[&str]) -> String {
        let output = Command::new("git")
            .args(args)
            .current_dir(self.path())
            .output()
            .expect("failed to spawn git");
        assert!(
            output.status.success(),
            "git {} failed: {}",
            args.join(" "),
            String::from_utf8_lossy(&output.stderr)
        );
        String::from_utf8_lossy(&output.stdout).trim().to_string()
    }

    pub(crate) fn write(&self, file: &str, content: &str) {
        let path = self.path().join(file);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).expect("failed to create parent dir");
        }
        std::fs::write(path, content).expect("failed to write file");
    }

    pub(crate) fn read(&self, file: &str) -> String {
        std::fs::read_to_string(self.path().join(file)).expect("failed to read file")
    }

    pub(crate) fn commit_all(&self, message: &str) {
        self.git(&["add", "-A"]);
        self.git(&["commit", "-q", "-m", message]);
    }

    pub(crate) fn branch_exists(&self, name: &str) -> bool {
        Command::new("git")
            .args(["show-ref", "--verify", "--quiet", &format!("refs/heads/{name}")])
            .current_dir(self.path())
            .status()
            .map(|s| s.success())
            .unwrap_or(false)
    }

    pub(crate) fn head_branch(&self) -> String {
        self.git(&["branch", "--show-current"])
    }

    /// Create `feat/x` off `main` with `a.txt` changed, then return to `feat/x`.
    pub(crate) fn with_feature_branch(self) -> Self {
        self.write("a.txt", "one\n");
        self.commit_all("add a.txt");
        self.git(&["checkout", "-q", "-b", "feat/x"]);
        self.write("a.txt", "one\ntwo\n");
        self.commit_all("change a.txt");
        self
    }
}
