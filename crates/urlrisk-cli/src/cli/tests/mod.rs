use super::*;
use clap::CommandFactory;

fn parse(args: &[&str]) -> Cli {
    Cli::try_parse_from(args).unwrap()
}

#[test]
fn cli_parse_check_single() {
    match parse(&["urlrisk", "check", "https://bit.ly/abc123"]).command {
        CliCommand::Check { urls, json, width } => {
            assert_eq!(urls, vec!["https://bit.ly/abc123"]);
            assert!(!json);
            assert!(width.is_none());
        }
        _ => panic!("expected Check"),
    }
}

#[test]
fn cli_parse_check_many_with_flags() {
    match parse(&["urlrisk", "check", "example.com", "http://1.2.3.4", "--json", "--width", "40"])
        .command
    {
        CliCommand::Check { urls, json, width } => {
            assert_eq!(urls, vec!["example.com", "http://1.2.3.4"]);
            assert!(json);
            assert_eq!(width, Some(40));
        }
        _ => panic!("expected Check with flags"),
    }
}

#[test]
fn cli_check_requires_a_url() {
    assert!(Cli::try_parse_from(["urlrisk", "check"]).is_err());
}

#[test]
fn cli_parse_watch() {
    match parse(&["urlrisk", "watch"]).command {
        CliCommand::Watch { json } => assert!(!json),
        _ => panic!("expected Watch"),
    }
    match parse(&["urlrisk", "watch", "--json"]).command {
        CliCommand::Watch { json } => assert!(json),
        _ => panic!("expected Watch --json"),
    }
}

#[test]
fn cli_parse_completions() {
    match parse(&["urlrisk", "completions", "bash"]).command {
        CliCommand::Completions { shell } => assert_eq!(shell, Shell::Bash),
        _ => panic!("expected Completions"),
    }
}

#[test]
fn cli_parse_man() {
    assert!(matches!(parse(&["urlrisk", "man"]).command, CliCommand::Man));
}

#[test]
fn cli_parse_global_config() {
    let cli = parse(&["urlrisk", "check", "example.com", "--config", "/tmp/urlrisk.toml"]);
    assert_eq!(cli.config.as_deref(), Some(std::path::Path::new("/tmp/urlrisk.toml")));
}

#[test]
fn cli_definition_is_consistent() {
    Cli::command().debug_assert();
}

#[test]
fn output_options_prefer_flags_over_config() {
    let cfg = UrlriskConfig {
        format: OutputFormat::Text,
        bar_width: 20,
        fail_threshold: None,
    };
    let opts = output_options(&cfg, true, Some(8));
    assert_eq!(opts.format, OutputFormat::Json);
    assert_eq!(opts.bar_width, 8);

    let defaults = output_options(&cfg, false, None);
    assert_eq!(defaults.format, OutputFormat::Text);
    assert_eq!(defaults.bar_width, 20);
}

#[test]
fn output_options_keep_json_from_config() {
    let cfg = UrlriskConfig {
        format: OutputFormat::Json,
        ..UrlriskConfig::default()
    };
    assert_eq!(output_options(&cfg, false, None).format, OutputFormat::Json);
}
