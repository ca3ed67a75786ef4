use std::{
    io::Write,
    process::{Command, Output, Stdio},
};

fn run(args: &[&str], stdin: &[u8]) -> Output {
    let mut child = Command::new(env!("CARGO_BIN_EXE_stones"))
        .args(args)
        .env_remove("RUST_LOG")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .unwrap();

    // the binary may exit before reading stdin when arguments are invalid
    let _ = child.stdin.take().unwrap().write_all(stdin);
    child.wait_with_output().unwrap()
}

#[test]
fn reference_depths() {
    let output = run(&[], b"125 17\n");
    assert!(output.status.success());
    assert_eq!(
        String::from_utf8(output.stdout).unwrap(),
        "55312\n65601038650482\n"
    );
}

#[test]
fn configured_depths_in_order() {
    let output = run(&["--depth", "6", "--depth", "25", "--capacity", "8"], b"125 17");
    assert!(output.status.success());
    assert_eq!(String::from_utf8(output.stdout).unwrap(), "22\n55312\n");
}

#[test]
fn repeated_runs_identical() {
    let first = run(&[], b"0 1 10 99 999\n");
    let second = run(&["--strategy", "grouped"], b"0 1 10 99 999\n");
    let third = run(&[], b"0 1 10 99 999\n");
    assert!(first.status.success());
    assert_eq!(first.stdout, third.stdout);
    assert_eq!(first.stdout, second.stdout);
}

#[test]
fn bad_input_fails_without_output() {
    for stdin in [&b""[..], &b"\n"[..], &b"12 x 4\n"[..], &b"-1\n"[..]] {
        let output = run(&[], stdin);
        assert!(!output.status.success(), "{stdin:?}");
        assert!(output.stdout.is_empty());
        assert!(!output.stderr.is_empty());
    }
}

#[test]
fn bad_arguments_fail() {
    let output = run(&["--depth", "200"], b"1\n");
    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
}
