//! Integration tests for tailwindcss-bin

mod cli_tests {
    use assert_cmd::{cargo::cargo_bin_cmd, Command};
    use predicates::prelude::*;
    use tempfile::TempDir;

    /// Command isolated from any user config
    fn tailwindcss_bin(temp: &TempDir) -> Command {
        let mut cmd = cargo_bin_cmd!("tailwindcss-bin");
        cmd.env("TAILWINDCSS_BIN_CONFIG", temp.path().join("config.toml"))
            .env_remove("TAILWINDCSS_BIN_PATH")
            .env_remove("TAILWINDCSS_BIN_DIR")
            .env("TAILWINDCSS_BIN_CACHE_DIR", temp.path().join("cache"));
        cmd
    }

    #[test]
    fn help_displays() {
        let temp = TempDir::new().unwrap();
        tailwindcss_bin(&temp)
            .arg("--help")
            .assert()
            .success()
            .stdout(predicate::str::contains("Tailwind CSS"));
    }

    #[test]
    fn version_displays() {
        let temp = TempDir::new().unwrap();
        tailwindcss_bin(&temp)
            .arg("--version")
            .assert()
            .success()
            .stdout(predicate::str::contains("tailwindcss-bin"));
    }

    #[test]
    fn watch_with_explicit_bin_path() {
        let temp = TempDir::new().unwrap();
        tailwindcss_bin(&temp)
            .args([
                "watch",
                "--bin-path",
                "/path/to/tailwindcss",
                "-i",
                "input.css",
                "-o",
                "output.css",
            ])
            .assert()
            .success()
            .stdout("/path/to/tailwindcss\n-i\ninput.css\n-o\noutput.css\n--watch\n");

        // Explicit path never touches the cache
        assert!(!temp.path().join("cache").exists());
    }

    #[test]
    fn build_json_output() {
        let temp = TempDir::new().unwrap();
        let output = tailwindcss_bin(&temp)
            .args([
                "build",
                "--bin-path",
                "/path/to/tailwindcss",
                "-i",
                "in.css",
                "-o",
                "out.css",
                "--minify",
                "--format",
                "json",
            ])
            .output()
            .unwrap();

        assert!(output.status.success());
        let args: Vec<String> = serde_json::from_slice(&output.stdout).unwrap();
        assert_eq!(
            args,
            ["/path/to/tailwindcss", "-i", "in.css", "-o", "out.css", "--minify"]
        );
    }

    #[test]
    fn path_with_explicit_bin_path() {
        let temp = TempDir::new().unwrap();
        tailwindcss_bin(&temp)
            .args(["path", "--bin-path", "/opt/tailwindcss"])
            .assert()
            .success()
            .stdout("/opt/tailwindcss\n");
    }

    #[test]
    fn path_reuses_existing_binary_without_download() {
        let temp = TempDir::new().unwrap();
        let Ok(filename) = tailwindcss_bin::Platform::detect().executable_filename() else {
            return;
        };
        let bin = temp.path().join("bin");
        std::fs::create_dir_all(&bin).unwrap();
        std::fs::write(bin.join(filename), b"prebuilt").unwrap();

        tailwindcss_bin(&temp)
            .args(["path", "--bin-dir"])
            .arg(&bin)
            .assert()
            .success()
            .stdout(predicate::str::contains(filename));

        assert!(temp.path().join("cache").is_dir());
    }

    #[test]
    fn platform_shows_os() {
        let temp = TempDir::new().unwrap();
        tailwindcss_bin(&temp)
            .arg("platform")
            .assert()
            .success()
            .stdout(predicate::str::contains("OS:").and(predicate::str::contains("Arch:")));
    }

    #[test]
    fn cache_dir_honours_override() {
        let temp = TempDir::new().unwrap();
        tailwindcss_bin(&temp)
            .args(["cache", "dir"])
            .assert()
            .success()
            .stdout(predicate::str::contains("cache"));
    }

    #[test]
    fn cache_clear_on_empty_cache() {
        let temp = TempDir::new().unwrap();
        tailwindcss_bin(&temp)
            .args(["cache", "clear"])
            .assert()
            .success()
            .stdout(predicate::str::contains("Removed 0 cache entries"));
    }

    #[test]
    fn config_show() {
        let temp = TempDir::new().unwrap();
        tailwindcss_bin(&temp)
            .args(["config", "show"])
            .assert()
            .success()
            .stdout(predicate::str::contains("[general]"));
    }

    #[test]
    fn config_init_writes_file() {
        let temp = TempDir::new().unwrap();
        tailwindcss_bin(&temp)
            .args(["config", "init"])
            .assert()
            .success();

        assert!(temp.path().join("config.toml").is_file());
    }

    #[test]
    fn invalid_config_fails() {
        let temp = TempDir::new().unwrap();
        std::fs::write(temp.path().join("config.toml"), "[binary\n").unwrap();

        tailwindcss_bin(&temp)
            .arg("platform")
            .assert()
            .failure()
            .stderr(predicate::str::contains("Invalid configuration"));
    }

    #[test]
    fn completions_bash() {
        let temp = TempDir::new().unwrap();
        tailwindcss_bin(&temp)
            .args(["completions", "bash"])
            .assert()
            .success()
            .stdout(predicate::str::contains("tailwindcss-bin"));
    }
}
