use assert_cmd::Command;

pub fn trenlog_cmd() -> Command {
    Command::cargo_bin("trenlog").unwrap()
}
