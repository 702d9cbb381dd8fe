//! Process-based tests for the `strategy-demo` binary.

use std::process::{Command, Output};

fn run_demo(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_strategy-demo"))
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .expect("Failed to run strategy-demo")
}

fn stdout_of(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).to_string()
}

#[test]
fn test_default_is_aramex_with_weight_five() {
    // テスト項目: 既定では Aramex・重さ 5 で 50 を出力する
    // when (操作):
    let output = run_demo(&[]);

    // then (期待する結果):
    assert!(output.status.success());
    assert_eq!(stdout_of(&output), "50\n");
}

#[test]
fn test_each_company_prices_weight_five() {
    // テスト項目: 各社の料金が CLI からも得られる
    for (company, expected) in [("fedex", "65\n"), ("aramex", "50\n"), ("dhl", "80\n")] {
        // when (操作):
        let output = run_demo(&["--company", company, "--weight", "5"]);

        // then (期待する結果):
        assert!(output.status.success());
        assert_eq!(stdout_of(&output), expected);
    }
}

#[test]
fn test_legacy_known_method() {
    // テスト項目: legacy モードでも既知の配送方法は計算できる
    // when (操作):
    let output = run_demo(&["--legacy", "fedex"]);

    // then (期待する結果):
    assert!(output.status.success());
    assert_eq!(stdout_of(&output), "65\n");
}

#[test]
fn test_legacy_unknown_method_exits_with_failure() {
    // テスト項目: legacy モードで未知の配送方法はプロセスが失敗終了する
    // when (操作):
    let output = run_demo(&["--legacy", "ups"]);

    // then (期待する結果):
    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("Unknown shipping method"));
}

#[test]
fn test_negative_weight_exits_with_failure() {
    // テスト項目: 負の重さはプロセスが失敗終了する
    // when (操作):
    let output = run_demo(&["--weight", "-1"]);

    // then (期待する結果):
    assert_eq!(output.status.code(), Some(1));
    assert!(stdout_of(&output).is_empty());
}
