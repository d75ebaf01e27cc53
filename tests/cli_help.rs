use std::process::Command;

fn agentrules(args: &[&str]) -> std::process::Output {
    Command::new(env!("CARGO_BIN_EXE_agentrules"))
        .args(args)
        .env("NO_COLOR", "1")
        .output()
        .unwrap()
}

#[test]
fn help_lists_every_command() {
    let output = agentrules(&["--help"]);
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    for command in ["generate", "init", "auto-config", "import-tree", "verify-config", "watch"] {
        assert!(stdout.contains(command), "help is missing {command}:\n{stdout}");
    }
}

#[test]
fn watch_rejects_zero_interval() {
    let output = agentrules(&["watch", "--interval", "0"]);
    assert!(!output.status.success());
}

#[test]
fn version_flag_prints_package_version() {
    let output = agentrules(&["--version"]);
    assert!(output.status.success());
    assert!(String::from_utf8_lossy(&output.stdout).contains(env!("CARGO_PKG_VERSION")));
}
