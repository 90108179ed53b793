use std::process::Command;

fn xs128(args: &[&str]) -> std::process::Output {
    Command::new(env!("CARGO_BIN_EXE_xs128"))
        .args(args)
        .env_remove("XS128_COUNT")
        .output()
        .expect("failed to run xs128")
}

#[test]
fn seed_prints_state_then_outputs() {
    let out = xs128(&["seed", "1", "3"]);
    assert!(out.status.success());
    let stdout = String::from_utf8(out.stdout).unwrap();
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(
        lines,
        ["DBFFE6DC714ACB3F6C07896600000001", "DBFFF5AA", "8BE31B0A", "ACD72A7A"]
    );
}

#[test]
fn state_mode_defaults_to_eight_values() {
    let out = xs128(&["state", "dbffe6dc714acb3f6c07896600000001"]);
    assert!(out.status.success());
    let stdout = String::from_utf8(out.stdout).unwrap();
    assert_eq!(stdout.lines().count(), 9);
    assert_eq!(stdout.lines().last(), Some("759194D2"));
}

#[test]
fn count_from_environment() {
    let out = Command::new(env!("CARGO_BIN_EXE_xs128"))
        .args(["seed", "0x1"])
        .env("XS128_COUNT", "2")
        .output()
        .expect("failed to run xs128");
    assert!(out.status.success());
    assert_eq!(String::from_utf8(out.stdout).unwrap().lines().count(), 3);
}

#[test]
fn bad_arguments_exit_with_usage() {
    let out = xs128(&["state", "XYZ"]);
    assert_eq!(out.status.code(), Some(2));
    let stderr = String::from_utf8(out.stderr).unwrap();
    assert!(stderr.contains("invalid state"));
    assert!(stderr.contains("usage: xs128"));

    assert_eq!(xs128(&[]).status.code(), Some(2));
}
