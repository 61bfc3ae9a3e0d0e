use assert_cmd::Command;
use assert_cmd::cargo_bin;

/// Builds a `shopsim` invocation with a fixed approval rate and the given stdin script.
///
/// Each element of `lines` is one answer to a prompt.
pub fn session(approval_rate: &str, lines: &[&str]) -> Command {
    let mut cmd = Command::new(cargo_bin!("shopsim"));
    cmd.arg("--approval-rate")
        .arg(approval_rate)
        .env("RUST_LOG", "warn")
        .write_stdin(script(lines));
    cmd
}

pub fn script(lines: &[&str]) -> String {
    let mut input = lines.join("\n");
    input.push('\n');
    input
}
