use assert_cmd::Command;

pub fn sitelog_cmd() -> Command {
    Command::cargo_bin("sitelog").unwrap()
}
