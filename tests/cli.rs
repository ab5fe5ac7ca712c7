//! CLI Configuration Integration Tests
//!
//! Tests that only the commands reading configuration fail on a broken
//! environment. Kept in its own test binary because it sets process-wide
//! environment variables.

use clap::Parser;
use shelf::cli::Cli;
use shelf::config::{ENV_FORMAT, ENV_YEAR};

fn run(args: &[&str]) -> (anyhow::Result<()>, String) {
    let cli = Cli::try_parse_from(args).unwrap();
    let mut out = Vec::new();
    let result = cli.execute_to(&mut out);
    (result, String::from_utf8(out).unwrap())
}

#[test]
fn test_invalid_environment_only_affects_config_commands() {
    std::env::set_var(ENV_YEAR, "eighteen sixty-nine");
    std::env::set_var(ENV_FORMAT, "yaml");

    // list and check never read configuration
    let (result, output) = run(&["shelf", "list"]);
    assert!(result.is_ok());
    assert!(output.ends_with("Total: 7 of 7 entries\n"));

    let (result, output) = run(&["shelf", "check"]);
    assert!(result.is_ok());
    assert!(output.ends_with("2 of 4 identifier codes are malformed\n"));

    // demo (also the default) and config surface the error
    let failing: [&[&str]; 3] = [&["shelf"], &["shelf", "demo"], &["shelf", "config"]];
    for args in failing {
        let (result, output) = run(args);
        let err = result.unwrap_err();
        assert!(err.to_string().contains("Invalid SHELF_"), "{}", err);
        assert!(output.is_empty());
    }
}
