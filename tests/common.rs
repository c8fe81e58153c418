#![allow(dead_code)]

use assert_cmd::Command;
use std::path::Path;

/// Create the command for the binary with its config in `home_dir`.
pub fn booktriage(home_dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin(env!("CARGO_PKG_NAME")).unwrap();
    cmd.env("BOOKTRIAGE_HOME", home_dir);
    cmd.env_remove("RUST_LOG");
    cmd
}

pub fn test_data(file_name: &str) -> String {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("test_data")
        .join(file_name)
        .display()
        .to_string()
}
