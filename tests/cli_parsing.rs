use std::path::PathBuf;

use clap::Parser;

use deflector::cli::{Cli, Commands};

#[test]
fn test_parse_check() {
    let cli = Cli::try_parse_from(vec!["deflector", "check", "conf/deflector.yaml"]).unwrap();

    match cli.command {
        Commands::Check { path, environment } => {
            assert_eq!(path, PathBuf::from("conf/deflector.yaml"));
            assert!(environment.is_none());
        }
        Commands::Show { .. } => panic!("Wrong top-level command"),
    }
    assert!(!cli.json);
}

#[test]
fn test_parse_check_with_environment_override() {
    let cli = Cli::try_parse_from(vec![
        "deflector",
        "check",
        "deflector.yaml",
        "--environment",
        "staging",
    ])
    .unwrap();

    match cli.command {
        Commands::Check { environment, .. } => {
            assert_eq!(environment.as_deref(), Some("staging"));
        }
        Commands::Show { .. } => panic!("Wrong top-level command"),
    }
}

#[test]
fn test_parse_show_with_overrides() {
    let cli = Cli::try_parse_from(vec![
        "deflector",
        "show",
        "--config",
        "/etc/deflector.yaml",
        "--environment",
        "production",
        "--json",
    ])
    .unwrap();

    match cli.command {
        Commands::Show {
            config,
            environment,
        } => {
            assert_eq!(config, Some(PathBuf::from("/etc/deflector.yaml")));
            assert_eq!(environment.as_deref(), Some("production"));
        }
        Commands::Check { .. } => panic!("Wrong top-level command"),
    }
    assert!(cli.json);
}

#[test]
fn test_check_requires_a_path() {
    assert!(Cli::try_parse_from(vec!["deflector", "check"]).is_err());
}
