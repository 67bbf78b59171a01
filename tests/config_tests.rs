//! Integration tests for config command

#![allow(deprecated)]

use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

mod common;
use common::sitemap_cmd;

#[test]
fn test_config_defaults() {
    let temp = TempDir::new().unwrap();

    sitemap_cmd()
        .current_dir(temp.path())
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("output = sitemap.xml"))
        .stdout(predicate::str::contains("disks = local"));
}

#[test]
fn test_config_list_from_local_file() {
    let temp = TempDir::new().unwrap();
    fs::write(
        temp.path().join("sitemap.toml"),
        "output = \"public/sitemap.xml\"\n\n[disks.public]\nroot = \"public\"\n",
    )
    .unwrap();

    sitemap_cmd()
        .current_dir(temp.path())
        .args(["config", "--list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("output = public/sitemap.xml"))
        .stdout(predicate::str::contains("disk public = public"));
}

#[test]
fn test_config_from_env() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("elsewhere.toml");
    fs::write(&path, "output = \"env.xml\"\n").unwrap();

    sitemap_cmd()
        .current_dir(temp.path())
        .env("SITEMAP_CONFIG", &path)
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("output = env.xml"));
}

#[test]
fn test_config_invalid_file() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("sitemap.toml"), "output = [").unwrap();

    sitemap_cmd()
        .current_dir(temp.path())
        .arg("config")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to parse"));
}
