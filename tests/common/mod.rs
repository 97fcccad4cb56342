use assert_cmd::Command;

pub fn amity_cmd() -> Command {
    let mut cmd = Command::cargo_bin("amity").unwrap();
    cmd.env_remove("AMITY_ROOT");
    cmd.env_remove("RUST_LOG");
    cmd
}
