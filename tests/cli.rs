use std::path::Path;
use std::process::{Command, Output};

use tempfile::TempDir;

const LIGHT_DEPRECATION: &str = "'--light' option is deprecated and will be removed. See also: https://github.com/aquasecurity/trivy/discussions/1649";

const TRIVY_ENV: &[&str] = &[
    "TRIVY_RESET",
    "TRIVY_DOWNLOAD_DB_ONLY",
    "TRIVY_SKIP_DB_UPDATE",
    "TRIVY_DOWNLOAD_JAVA_DB_ONLY",
    "TRIVY_SKIP_JAVA_DB_UPDATE",
    "TRIVY_NO_PROGRESS",
    "TRIVY_DB_REPOSITORY",
    "TRIVY_JAVA_DB_REPOSITORY",
    "TRIVY_LIGHT",
];

fn command(cwd: &Path) -> Command {
    let bin = env!("CARGO_BIN_EXE_trivy-dbflags");
    let mut cmd = Command::new(bin);
    cmd.current_dir(cwd).env_remove("RUST_LOG");
    for var in TRIVY_ENV {
        cmd.env_remove(var);
    }
    cmd
}

fn run(cwd: &Path, args: &[&str]) -> Output {
    command(cwd).args(args).output().unwrap()
}

fn stdout_json(out: &Output) -> serde_json::Value {
    assert!(
        out.status.success(),
        "stderr: {}",
        String::from_utf8_lossy(&out.stderr)
    );
    serde_json::from_slice(&out.stdout).unwrap()
}

#[test]
fn prints_default_options_as_json() {
    let dir = TempDir::new().unwrap();
    let out = run(dir.path(), &["--no-config", "--skip-db-update"]);

    let value = stdout_json(&out);
    assert_eq!(value["skip_db_update"], true);
    assert_eq!(value["download_db_only"], false);
    assert_eq!(value["db_repository"], "ghcr.io/aquasecurity/trivy-db:latest");
    assert_eq!(
        value["java_db_repository"],
        "ghcr.io/aquasecurity/trivy-java-db:latest"
    );
    assert!(!String::from_utf8_lossy(&out.stderr).contains("deprecated"));
}

#[test]
fn conflicting_flags_fail() {
    let dir = TempDir::new().unwrap();
    let out = run(
        dir.path(),
        &["--no-config", "--skip-db-update", "--download-db-only"],
    );

    assert!(!out.status.success());
    assert!(out.stdout.is_empty());
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(
        stderr.contains("--skip-db-update and --download-db-only options can not be specified both"),
        "stderr: {stderr}"
    );
}

#[test]
fn invalid_repository_fails() {
    let dir = TempDir::new().unwrap();
    let out = run(
        dir.path(),
        &["--no-config", "--db-repository", "foo:bar:baz"],
    );

    assert!(!out.status.success());
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("invalid db repository"), "stderr: {stderr}");
}

#[test]
fn light_logs_deprecation_warning() {
    let dir = TempDir::new().unwrap();
    let out = run(dir.path(), &["--no-config", "--light"]);

    let value = stdout_json(&out);
    assert_eq!(value["light"], true);
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert_eq!(stderr.matches(LIGHT_DEPRECATION).count(), 1, "stderr: {stderr}");
}

#[test]
fn env_vars_set_flags() {
    let dir = TempDir::new().unwrap();
    let out = command(dir.path())
        .args(["--no-config"])
        .env("TRIVY_DOWNLOAD_JAVA_DB_ONLY", "true")
        .env("TRIVY_JAVA_DB_REPOSITORY", "mirror.example.com/java-db:1")
        .output()
        .unwrap();

    let value = stdout_json(&out);
    assert_eq!(value["download_java_db_only"], true);
    assert_eq!(value["java_db_repository"], "mirror.example.com/java-db:1");
}

#[test]
fn env_vars_accept_boolish_values() {
    let dir = TempDir::new().unwrap();
    let out = command(dir.path())
        .args(["--no-config"])
        .env("TRIVY_SKIP_DB_UPDATE", "1")
        .env("TRIVY_NO_PROGRESS", "yes")
        .env("TRIVY_RESET", "0")
        .output()
        .unwrap();

    let value = stdout_json(&out);
    assert_eq!(value["skip_db_update"], true);
    assert_eq!(value["no_progress"], true);
    assert_eq!(value["reset"], false);
}

#[test]
fn cli_flag_still_works_with_boolish_parser() {
    let dir = TempDir::new().unwrap();
    let value = stdout_json(&run(dir.path(), &["--no-config", "--download-db-only"]));
    assert_eq!(value["download_db_only"], true);
    assert_eq!(value["skip_db_update"], false);
}

#[test]
fn discovers_config_in_parent_directory() {
    let dir = TempDir::new().unwrap();
    std::fs::write(
        dir.path().join("trivy.toml"),
        "[db]\nno-progress = true\nrepository = \"mirror.example.com/trivy-db\"\n",
    )
    .unwrap();
    let nested = dir.path().join("a/b");
    std::fs::create_dir_all(&nested).unwrap();

    let value = stdout_json(&run(&nested, &[]));
    assert_eq!(value["no_progress"], true);
    assert_eq!(value["db_repository"], "mirror.example.com/trivy-db:latest");
}

#[test]
fn no_config_skips_discovery() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("trivy.toml"), "[db]\nreset = true\n").unwrap();

    let value = stdout_json(&run(dir.path(), &["--no-config"]));
    assert_eq!(value["reset"], false);
}

#[test]
fn explicit_config_must_exist() {
    let dir = TempDir::new().unwrap();
    let out = run(dir.path(), &["--config", "missing.toml"]);

    assert!(!out.status.success());
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("failed to read config file"), "stderr: {stderr}");
}

#[test]
fn text_output_written_to_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("options.txt");
    let out = run(
        dir.path(),
        &[
            "--no-config",
            "--quiet",
            "--format",
            "text",
            "--output",
            path.to_str().unwrap(),
        ],
    );

    assert!(
        out.status.success(),
        "stderr: {}",
        String::from_utf8_lossy(&out.stderr)
    );
    assert!(out.stdout.is_empty());
    let written = std::fs::read_to_string(&path).unwrap();
    assert!(written.contains("db-repository: ghcr.io/aquasecurity/trivy-db:latest"));
}
