use super::*;

#[test]
fn no_command_is_none() {
    let cli = Cli::try_parse_from(["trendlens-cli"]).expect("expected valid cli args");
    assert!(cli.command.is_none());
}

#[test]
fn parses_db_ping_command() {
    let cli = Cli::try_parse_from(["trendlens-cli", "db", "ping"]).expect("expected valid cli args");
    assert!(matches!(
        cli.command,
        Some(Commands::Db {
            command: DbCommands::Ping
        })
    ));
}

#[test]
fn crawl_defaults_to_storing() {
    let cli = Cli::try_parse_from(["trendlens-cli", "crawl"]).unwrap();
    assert!(matches!(cli.command, Some(Commands::Crawl { dry_run: false })));

    let cli = Cli::try_parse_from(["trendlens-cli", "crawl", "--dry-run"]).unwrap();
    assert!(matches!(cli.command, Some(Commands::Crawl { dry_run: true })));
}

#[test]
fn items_category_defaults_to_best100() {
    let cli = Cli::try_parse_from(["trendlens-cli", "items"]).unwrap();
    assert!(matches!(
        cli.command,
        Some(Commands::Items { ref category }) if category == "전체"
    ));

    let cli = Cli::try_parse_from(["trendlens-cli", "items", "--category", "인기상품"]).unwrap();
    assert!(matches!(
        cli.command,
        Some(Commands::Items { ref category }) if category == "인기상품"
    ));
}

#[test]
fn scan_category_takes_a_name() {
    let cli = Cli::try_parse_from(["trendlens-cli", "scan", "category", "뷰티"]).unwrap();
    assert!(matches!(
        cli.command,
        Some(Commands::Scan {
            command: ScanCommands::Category { ref name }
        }) if name == "뷰티"
    ));
}

#[test]
fn analyze_requires_keyword() {
    assert!(Cli::try_parse_from(["trendlens-cli", "analyze"]).is_err());
    let cli = Cli::try_parse_from(["trendlens-cli", "analyze", "노트북"]).unwrap();
    assert!(matches!(
        cli.command,
        Some(Commands::Analyze { ref keyword }) if keyword == "노트북"
    ));
}

#[test]
fn blank_keywords_are_rejected() {
    assert!(Cli::try_parse_from(["trendlens-cli", "analyze", "   "]).is_err());
    assert!(Cli::try_parse_from(["trendlens-cli", "analyze", ""]).is_err());
    assert!(Cli::try_parse_from(["trendlens-cli", "trend", ""]).is_err());
    assert!(Cli::try_parse_from(["trendlens-cli", "trend", "\t"]).is_err());
}

#[test]
fn keywords_are_trimmed() {
    let cli = Cli::try_parse_from(["trendlens-cli", "trend", " 노트북 "]).unwrap();
    assert!(matches!(
        cli.command,
        Some(Commands::Trend { ref keyword }) if keyword == "노트북"
    ));

    let cli = Cli::try_parse_from(["trendlens-cli", "analyze", "  수건"]).unwrap();
    assert!(matches!(
        cli.command,
        Some(Commands::Analyze { ref keyword }) if keyword == "수건"
    ));
}
