use assert_cmd::Command;

pub fn sitemap_cmd() -> Command {
    let mut cmd = Command::cargo_bin("sitemap").unwrap();
    cmd.env_remove("SITEMAP_CONFIG");
    cmd.env_remove("RUST_LOG");
    cmd
}
