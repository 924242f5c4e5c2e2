use assert_cmd::Command;
use predicates::str::contains;
use tempfile::TempDir;

fn cmd() -> Command {
    let mut cmd = Command::cargo_bin("lumenrate").unwrap();
    cmd.env_remove("LUMENRATE__TOLERANCE__DEFAULT_FACTOR")
        .env_remove("LUMENRATE__LOGGING__FILTER")
        .env_remove("RUN_MODE")
        .env_remove("RUST_LOG");
    cmd
}

#[test]
fn to_outside() {
    cmd()
        .args(["to-outside", "100.0000000", "2"])
        .assert()
        .success()
        .stdout("200.0000000\n");
}

#[test]
fn from_outside() {
    cmd()
        .args(["from-outside", "200", "2"])
        .assert()
        .success()
        .stdout("100.0000000\n");
}

#[test]
fn compare_prints_sign() {
    cmd().args(["compare", "1", "2"]).assert().success().stdout("-1\n");
    cmd().args(["compare", "2", "1"]).assert().success().stdout("1\n");
    cmd().args(["compare", "1", "1.0"]).assert().success().stdout("0\n");
}

#[test]
fn within_default_factor() {
    cmd()
        .args(["within", "100", "101"])
        .assert()
        .success()
        .stdout("true\n");
    cmd()
        .args(["within", "100", "200"])
        .assert()
        .success()
        .stdout("false\n");
}

#[test]
fn within_factor_from_env() {
    cmd()
        .env("LUMENRATE__TOLERANCE__DEFAULT_FACTOR", "0.5")
        .args(["within", "100", "200"])
        .assert()
        .success()
        .stdout("true\n");
}

#[test]
fn within_json() {
    cmd()
        .args(["--json", "within", "100", "101", "--factor", "0.01"])
        .assert()
        .success()
        .stdout(contains("\"within\": true"))
        .stdout(contains("\"kind\": \"within\""));
}

#[test]
fn negative_rate_is_rejected() {
    cmd()
        .args(["to-outside", "1", "-2"])
        .assert()
        .code(2)
        .stderr(contains("negative exchange rate"));
}

#[test]
fn zero_rate_is_rejected_as_json() {
    cmd()
        .args(["--json", "from-outside", "1", "0"])
        .assert()
        .code(2)
        .stdout(contains("\"ok\": false"))
        .stdout(contains("VALIDATION_ERROR"))
        .stdout(contains("zero-value exchange rate"));
}

#[test]
fn negative_factor_is_rejected() {
    cmd()
        .args(["within", "1", "1", "--factor=-0.01"])
        .assert()
        .code(2)
        .stderr(contains("negative factor"));
}

#[test]
fn bad_outside_amount_names_decimal_parser() {
    cmd()
        .args(["from-outside", "1/2", "2"])
        .assert()
        .code(2)
        .stderr(contains(
            "parsing outside amount to convert: \"1/2\": expected decimal number: 1/2",
        ));
}

#[test]
fn parse_rejects_exponent() {
    cmd()
        .args(["parse", "1e10"])
        .assert()
        .code(2)
        .stderr(contains("expected decimal number: 1e10"));
}

#[test]
fn parse_negative_decimal() {
    cmd().args(["parse", "-.5"]).assert().success().stdout("-1/2\n");
}

#[test]
fn negative_amount_converts() {
    cmd()
        .args(["to-outside", "-3", "1.5"])
        .assert()
        .success()
        .stdout("-4.5000000\n");
}

fn workdir_with_config(default_toml: &str) -> TempDir {
    let tmp = TempDir::new().unwrap();
    std::fs::create_dir(tmp.path().join("config")).unwrap();
    std::fs::write(tmp.path().join("config/default.toml"), default_toml).unwrap();
    tmp
}

#[test]
fn malformed_config_file_is_json_configuration_error() {
    let tmp = workdir_with_config("tolerance = 5\n");
    cmd()
        .current_dir(tmp.path())
        .args(["--json", "within", "1", "1"])
        .assert()
        .code(1)
        .stdout(contains("\"ok\": false"))
        .stdout(contains("CONFIGURATION_ERROR"))
        .stdout(contains("tolerance"));
}

#[test]
fn malformed_config_file_is_reported_as_text() {
    let tmp = workdir_with_config("tolerance = 5\n");
    cmd()
        .current_dir(tmp.path())
        .args(["compare", "1", "2"])
        .assert()
        .code(1)
        .stdout("")
        .stderr(contains("error: Configuration error:"));
}

#[test]
fn config_file_default_factor_is_used() {
    let tmp = workdir_with_config("[tolerance]\ndefault_factor = \"0.5\"\n");
    cmd()
        .current_dir(tmp.path())
        .args(["within", "100", "200"])
        .assert()
        .success()
        .stdout("true\n");
}
