//! Shared testing harness for `catalog` integration tests.

#![allow(dead_code)]

use assert_cmd::Command;
use mockito::{Mock, Server, ServerGuard};
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Isolated working directory plus a mock products server.
pub(crate) struct TestContext {
    root: TempDir,
    work_dir: PathBuf,
    server: ServerGuard,
}

impl TestContext {
    pub(crate) fn new() -> Self {
        let root = TempDir::new().expect("Failed to create temp directory for tests");
        let work_dir = root.path().join("work");
        fs::create_dir_all(&work_dir).expect("Failed to create test work directory");
        Self { root, work_dir, server: Server::new() }
    }

    pub(crate) fn work_dir(&self) -> &Path {
        &self.work_dir
    }

    pub(crate) fn server(&mut self) -> &mut ServerGuard {
        &mut self.server
    }

    pub(crate) fn api_url(&self) -> String {
        self.server.url()
    }

    /// `catalog` invocation pointed at the mock server.
    pub(crate) fn cli(&self) -> Command {
        let mut cmd = self.bare_cli();
        cmd.args(["--api-url", &self.api_url()]);
        cmd
    }

    /// `catalog` invocation relying on config file and environment only.
    pub(crate) fn bare_cli(&self) -> Command {
        let mut cmd = Command::cargo_bin("catalog").expect("Failed to find catalog binary");
        cmd.current_dir(&self.work_dir)
            .env_remove("CATALOG_API_URL")
            .env_remove("CATALOG_LOG");
        cmd
    }

    pub(crate) fn write_config(&self, content: &str) -> PathBuf {
        let path = self.work_dir.join("catalog.toml");
        fs::write(&path, content).expect("Failed to write catalog.toml");
        path
    }

    /// Serve `body` as the full listing at `/products`.
    pub(crate) fn serve_listing(&mut self, body: &str) -> Mock {
        self.server
            .mock("GET", "/products")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(body)
            .create()
    }

    /// Serve `body` for `GET /products?name=<name>`.
    pub(crate) fn serve_search(&mut self, name: &str, body: &str) -> Mock {
        self.server
            .mock("GET", "/products")
            .match_query(mockito::Matcher::UrlEncoded("name".into(), name.into()))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(body)
            .create()
    }
}

pub(crate) const MOUSE: &str =
    r#"{"id":7,"name":"mouse","price":19.99,"category":"accessories"}"#;

pub(crate) const THREE_PRODUCTS: &str = r#"[
    {"id":1,"name":"mouse","price":19.99,"category":"accessories"},
    {"id":2,"name":"laptop","price":999,"category":"electronics"},
    {"id":3,"name":"keyboard","price":49.5,"category":"accessories"}
]"#;
