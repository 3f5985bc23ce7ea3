//! Shared test utilities for the CLI end-to-end tests.
//!
//! Add `mod common;` to a test file, then `use common::prelude::*;`.

use assert_fs::prelude::*;
use std::path::Path;
use std::process::Command;

/// Re-export commonly used test dependencies for convenience.
pub mod prelude {
    pub use assert_cmd::cargo::cargo_bin_cmd;
    pub use assert_fs::prelude::*;
    #[allow(unused_imports)]
    pub use assert_fs::TempDir;
    pub use predicates::prelude::*;

    #[allow(unused_imports)]
    pub use super::docs;
    pub use super::TestFixture;
}

/// Docs config snippets.
#[allow(dead_code)]
pub mod docs {
    /// The central docs site.
    pub const SITE: &str = r##"{
  "name": "Acme Docs",
  "colors": { "primary": "#0D9373" },
  "navigation": [
    { "group": "Get Started", "pages": ["introduction"] },
    { "group": "API Reference", "pages": ["api/legacy"] }
  ],
  "footerSocials": { "github": "https://github.com/acme" }
}
"##;

    /// Docs of the `api` repository; replaces "API Reference".
    pub const API: &str = r#"{
  "navigation": [
    { "group": "API Reference", "pages": ["users", { "group": "Keys", "pages": ["keys/create"] }] }
  ]
}
"#;

    /// Docs of the `sdk` repository; adds a new group.
    pub const SDK: &str = r#"{
  "navigation": [{ "group": "SDKs", "pages": ["python", "node"] }]
}
"#;

    /// Repository list for `api` and `sdk`.
    pub const REPOS: &str = "- owner: acme\n  repo: api\n- owner: acme\n  repo: sdk\n";
}

/// A temporary directory holding a docs site and, optionally, source
/// directories next to it.
pub struct TestFixture {
    temp_dir: assert_fs::TempDir,
}

impl TestFixture {
    pub fn new() -> Self {
        Self {
            temp_dir: assert_fs::TempDir::new().expect("Failed to create temp directory"),
        }
    }

    /// Writes the central `mint.json`.
    pub fn with_site(self, content: &str) -> Self {
        self.with_file("mint.json", content)
    }

    /// Writes `<repo>/mint.json`.
    pub fn with_source(self, repo: &str, content: &str) -> Self {
        self.with_file(&format!("{}/mint.json", repo), content)
    }

    pub fn with_file(self, path: &str, content: &str) -> Self {
        self.temp_dir
            .child(path)
            .write_str(content)
            .expect("Failed to write file");
        self
    }

    pub fn path(&self) -> &Path {
        self.temp_dir.path()
    }

    #[allow(dead_code)]
    pub fn child(&self, path: &str) -> assert_fs::fixture::ChildPath {
        self.temp_dir.child(path)
    }

    /// Create a command configured to run in this fixture's directory.
    pub fn command(&self) -> assert_cmd::Command {
        let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("docs-merge");
        cmd.current_dir(self.path());
        for var in [
            "DOCS_MERGE_REPOS",
            "DOCS_MERGE_REPOS_FILE",
            "DOCS_MERGE_TOKEN",
            "DOCS_MERGE_LOG_LEVEL",
            "RUST_LOG",
            "NO_COLOR",
            "CLICOLOR_FORCE",
        ] {
            cmd.env_remove(var);
        }
        cmd
    }
}

impl Default for TestFixture {
    fn default() -> Self {
        Self::new()
    }
}

/// Runs `git` in `dir`, panicking on failure.
#[allow(dead_code)]
pub fn git(dir: &Path, args: &[&str]) -> String {
    let output = Command::new("git")
        .args(args)
        .current_dir(dir)
        .output()
        .expect("Failed to run git");
    assert!(
        output.status.success(),
        "git {:?} failed: {}",
        args,
        String::from_utf8_lossy(&output.stderr)
    );
    String::from_utf8_lossy(&output.stdout).trim().to_string()
}

/// Commits every file of `dir` as a new repository on branch `main`.
#[allow(dead_code)]
pub fn init_repo(dir: &Path) {
    git(dir, &["init", "-q", "-b", "main"]);
    git(dir, &["add", "."]);
    git(
        dir,
        &["-c", "user.name=t", "-c", "user.email=t@example.com", "commit", "-q", "-m", "init"],
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixture_writes_site_and_sources() {
        let fixture = TestFixture::new()
            .with_site(docs::SITE)
            .with_source("api", docs::API);
        assert!(fixture.path().join("mint.json").exists());
        assert!(fixture.path().join("api/mint.json").exists());
    }

    #[test]
    fn test_doc_snippets_are_valid_json() {
        for doc in [docs::SITE, docs::API, docs::SDK] {
            serde_json::from_str::<serde_json::Value>(doc).unwrap();
        }
    }
}
