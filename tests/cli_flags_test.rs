//! Integration tests for flag handling, using --dry-run.

use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use tempfile::TempDir;

/// Command isolated from any user config, run in an empty directory.
fn isolated(tmp: &TempDir) -> assert_cmd::Command {
    let config = tmp.path().join("config.toml");
    std::fs::write(&config, "").unwrap();

    let mut cmd = cargo_bin_cmd!("svj-siginj");
    cmd.current_dir(tmp.path())
        .env("SVJ_SIGINJ_CONFIG", &config)
        .env_remove("RUST_LOG");
    cmd
}

fn dry_run_lines(stdout: &[u8]) -> Vec<String> {
    String::from_utf8_lossy(stdout)
        .lines()
        .filter_map(|line| line.strip_prefix("dry run: "))
        .map(ToString::to_string)
        .collect()
}

#[test]
fn test_unknown_flag_exits_1_without_invocations() {
    let tmp = TempDir::new().unwrap();
    let mut cmd = isolated(&tmp);
    cmd.arg("--dry-run").arg("--bogus");

    cmd.assert()
        .code(1)
        .stderr(predicate::str::contains("Unknown parameter passed: --bogus"))
        .stdout(predicate::str::contains("dry run:").not());
}

#[test]
fn test_unknown_flag_message_has_no_prefix() {
    let tmp = TempDir::new().unwrap();
    let mut cmd = isolated(&tmp);
    cmd.arg("--bogus");

    cmd.assert()
        .code(1)
        .stderr(predicate::str::starts_with("Unknown parameter passed: --bogus"))
        .stderr(predicate::str::contains("error:").not());
}

#[test]
fn test_repeated_flag_takes_last_value() {
    let tmp = TempDir::new().unwrap();
    let mut cmd = isolated(&tmp);
    cmd.args(["--dry-run", "-f", "-f", "--sel", "a", "--sel", "b"]);

    let output = cmd.assert().success();
    let lines = dry_run_lines(&output.get_output().stdout);
    assert_eq!(lines.len(), 2);
    assert!(lines[0].contains("sel-b"));
    assert!(lines.iter().all(|l| !l.contains("sel-a")));
}

#[test]
fn test_help_succeeds() {
    let tmp = TempDir::new().unwrap();
    let mut cmd = isolated(&tmp);
    cmd.arg("--help");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("--mMed_values"))
        .stdout(predicate::str::contains("--only_inj"));
}

#[test]
fn test_one_datacard_per_mass_in_order() {
    let tmp = TempDir::new().unwrap();
    let mut cmd = isolated(&tmp);
    cmd.args(["--dry-run", "--mMed_values", "450 200 300"]);

    let output = cmd.assert().success();
    let lines = dry_run_lines(&output.get_output().stdout);
    let datacards: Vec<&String> = lines
        .iter()
        .filter(|l| l.contains(" gen_datacards "))
        .collect();

    assert_eq!(datacards.len(), 3);
    assert!(datacards[0].contains("mMed-450_"));
    assert!(datacards[1].contains("mMed-200_"));
    assert!(datacards[2].contains("mMed-300_"));
}

#[test]
fn test_datacard_paths_for_default_selection() {
    let tmp = TempDir::new().unwrap();
    let mut cmd = isolated(&tmp);
    cmd.args(["--dry-run", "--mMed_values", "300"]);

    let output = cmd.assert().success();
    let lines = dry_run_lines(&output.get_output().stdout);
    let datacard = &lines[0];

    assert!(datacard.starts_with(
        "python3 cli_boosted.py gen_datacards --bkg hists/merged_20241115/bkg_sel-bdt=0.67.json --sig "
    ));
    assert!(datacard.contains("mMed-300_mDark-10_rinv-0p3"));
}

#[test]
fn test_fits_only_skips_generation() {
    let tmp = TempDir::new().unwrap();
    let mut cmd = isolated(&tmp);
    cmd.args(["--dry-run", "-f"]);

    let output = cmd.assert().success();
    let lines = dry_run_lines(&output.get_output().stdout);

    assert_eq!(lines.len(), 2);
    assert!(lines.iter().all(|l| !l.contains("gen_datacards")));
    assert!(lines.iter().all(|l| !l.contains("gentoys")));
    assert!(lines[0].contains("likelihood_scan_mp"));
    assert!(lines[0].contains("--toysFile"));
    assert!(lines[1].starts_with("python3 quick_plot.py brazil "));
}

#[test]
fn test_only_inj_skips_expected_scan() {
    let tmp = TempDir::new().unwrap();
    let mut cmd = isolated(&tmp);
    cmd.args(["--dry-run", "--only_inj", "--mMed_values", "350"]);

    let output = cmd.assert().success();
    let lines = dry_run_lines(&output.get_output().stdout);

    assert_eq!(lines.len(), 4);
    assert!(lines[1].contains(" gentoys "));
    assert!(lines.iter().all(|l| !l.contains("--asimov")));
    assert!(lines[2].contains("--toysFile"));
}

#[test]
fn test_observed_scan_uses_injected_toy() {
    let tmp = TempDir::new().unwrap();
    let mut cmd = isolated(&tmp);
    cmd.args(["--dry-run", "--mInj", "250", "--mMed_values", "250"]);

    let output = cmd.assert().success();
    let lines = dry_run_lines(&output.get_output().stdout);
    let observed = lines
        .iter()
        .find(|l| l.contains("--toysFile"))
        .unwrap();
    let toy = observed.split("--toysFile ").nth(1).unwrap();

    assert!(toy.contains("Observed"));
    assert!(toy.contains("mMed-250"));
    assert!(lines[1].contains(" gentoys dc_"));
    assert!(lines[1].ends_with("-t -1 --expectSignal 0.2 -s 1001"));
}

#[test]
fn test_toys_date_is_accepted() {
    let tmp = TempDir::new().unwrap();
    let mut cmd = isolated(&tmp);
    cmd.args(["--dry-run", "-f", "-d", "20240901"]);

    let output = cmd.assert().success();
    let lines = dry_run_lines(&output.get_output().stdout);
    assert_eq!(lines.len(), 2);
    assert!(lines.iter().all(|l| !l.contains("20240901")));
}

#[test]
fn test_invalid_mass_is_usage_error() {
    let tmp = TempDir::new().unwrap();
    let mut cmd = isolated(&tmp);
    cmd.args(["--dry-run", "--mInj", "heavy"]);

    cmd.assert()
        .code(2)
        .stdout(predicate::str::contains("dry run:").not());
}

#[test]
fn test_missing_explicit_config_fails() {
    let tmp = TempDir::new().unwrap();
    let mut cmd = isolated(&tmp);
    cmd.args(["--dry-run", "--config"])
        .arg(tmp.path().join("missing.toml"));

    cmd.assert()
        .code(1)
        .stderr(predicate::str::contains("failed to read config file"));
}
