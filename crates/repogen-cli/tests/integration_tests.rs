//! End-to-end tests driving the compiled `repogen` binary.

use std::fs;
use std::path::{Path, PathBuf};

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn repogen() -> Command {
    let mut cmd = Command::cargo_bin("repogen").expect("binary builds");
    // Keep output deterministic regardless of the host terminal.
    cmd.env("NO_COLOR", "1");
    cmd
}

/// Seed `<tmp>/Shop` with the conventional layout.
fn seed_project(tmp: &TempDir, entities: &[&str], contexts: &[&str]) -> PathBuf {
    let root = tmp.path().join("Shop");
    let entity_dir = root.join("Shop.Domain").join("Entity");
    let context_dir = root.join("Shop.Infrastructure").join("Context");
    fs::create_dir_all(&entity_dir).unwrap();
    fs::create_dir_all(&context_dir).unwrap();
    for entity in entities {
        fs::write(entity_dir.join(format!("{entity}.cs")), "").unwrap();
    }
    for ctx in contexts {
        fs::write(context_dir.join(format!("{ctx}.cs")), "").unwrap();
    }
    root
}

fn infra(root: &Path, relative: &str) -> PathBuf {
    root.join("Shop.Infrastructure").join(relative)
}

#[test]
fn generate_creates_all_files() {
    let tmp = TempDir::new().unwrap();
    let root = seed_project(&tmp, &["Order", "Customer"], &["ShopDbContext"]);

    repogen()
        .args(["generate"])
        .arg(&root)
        .assert()
        .success()
        .stdout(predicate::str::contains("Generated 8 file(s)"));

    for relative in [
        "Abstractions/IOrderRepository.cs",
        "Abstractions/ICustomerRepository.cs",
        "Repositories/OrderRepository.cs",
        "Repositories/CustomerRepository.cs",
        "Base/IUnitOfWork.cs",
        "Base/UnitOfWork.cs",
        "Base/IRepository.cs",
        "Base/Repository.cs",
    ] {
        assert!(infra(&root, relative).is_file(), "missing {relative}");
    }

    let body = fs::read_to_string(infra(&root, "Repositories/OrderRepository.cs")).unwrap();
    assert!(body.contains("OrderRepository(ShopDbContext context)"));
    assert!(body.contains("namespace Shop.Infrastructure.Repositories;"));
}

#[test]
fn second_run_leaves_files_untouched() {
    let tmp = TempDir::new().unwrap();
    let root = seed_project(&tmp, &["Order"], &["ShopDbContext"]);

    repogen().arg("generate").arg(&root).assert().success();

    // Simulate a hand edit, then rerun.
    let target = infra(&root, "Base/IUnitOfWork.cs");
    fs::write(&target, "// customized").unwrap();

    repogen()
        .arg("generate")
        .arg(&root)
        .assert()
        .success()
        .stdout(predicate::str::contains("skipped 6 existing"));

    assert_eq!(fs::read_to_string(&target).unwrap(), "// customized");
}

#[test]
fn dry_run_creates_nothing() {
    let tmp = TempDir::new().unwrap();
    let root = seed_project(&tmp, &["Order"], &["ShopDbContext"]);

    repogen()
        .args(["generate", "--dry-run"])
        .arg(&root)
        .assert()
        .success()
        .stdout(predicate::str::contains("Would generate 6 file(s)"));

    assert!(!infra(&root, "Abstractions").exists());
    assert!(!infra(&root, "Base/IUnitOfWork.cs").exists());
}

#[test]
fn no_entities_is_success_with_warning() {
    let tmp = TempDir::new().unwrap();
    let root = seed_project(&tmp, &[], &["ShopDbContext"]);

    repogen()
        .arg("generate")
        .arg(&root)
        .assert()
        .success()
        .stdout(predicate::str::contains("No entit"));

    assert!(!infra(&root, "Base/IUnitOfWork.cs").exists());
}

#[test]
fn context_flag_overrides_detection_fallback() {
    let tmp = TempDir::new().unwrap();
    let root = seed_project(&tmp, &["Order"], &[]);

    repogen()
        .args(["generate", "--context", "BillingDbContext"])
        .arg(&root)
        .assert()
        .success();

    let body = fs::read_to_string(infra(&root, "Repositories/OrderRepository.cs")).unwrap();
    assert!(body.contains("OrderRepository(BillingDbContext context)"));
}

#[test]
fn json_output_is_parseable() {
    let tmp = TempDir::new().unwrap();
    let root = seed_project(&tmp, &["Order"], &["ShopDbContext"]);

    let output = repogen()
        .args(["--output-format", "json", "generate"])
        .arg(&root)
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let report: serde_json::Value = serde_json::from_slice(&output).expect("valid JSON report");
    assert_eq!(report["namespace"], "Shop");
    assert_eq!(report["context"], "ShopDbContext");
    assert_eq!(report["outcome"], "completed");
    assert_eq!(report["written"].as_array().unwrap().len(), 6);
}

#[test]
fn quiet_mode_suppresses_summary() {
    let tmp = TempDir::new().unwrap();
    let root = seed_project(&tmp, &["Order"], &["ShopDbContext"]);

    repogen()
        .args(["--quiet", "generate"])
        .arg(&root)
        .assert()
        .success()
        .stdout(predicate::str::is_empty());

    assert!(infra(&root, "Base/IUnitOfWork.cs").is_file());
}

#[test]
fn config_get_prints_default() {
    repogen()
        .args(["config", "get", "defaults.context_class"])
        .assert()
        .success()
        .stdout(predicate::str::contains("AppDbContext"));
}

#[test]
fn config_list_is_toml() {
    repogen()
        .args(["config", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("[defaults]"))
        .stdout(predicate::str::contains("context_class"));
}

#[test]
fn completions_bash_emits_script() {
    repogen()
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("repogen"));
}

#[test]
fn help_shows_subcommands() {
    repogen()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("generate"))
        .stdout(predicate::str::contains("completions"));
}

#[test]
fn version_flag() {
    repogen()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}
