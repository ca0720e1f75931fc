use anyhow::{bail, Context, Result};
use clap::{Arg, ArgMatches, Command};
use log::LevelFilter;
use phish_score::report::{render_json, render_text};
use phish_score::{samples, AnalysisInput, Analyzer, Config};
use std::io::Read;
use std::path::Path;
use std::process;

fn main() {
    let matches = Command::new("phish-score")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Rule-based phishing scorer for email subject and body text")
        .long_about("phish-score classifies an email as phishing or legitimate using:\n\
                    • Weighted urgency, request, incentive, threat and legitimacy phrase lists\n\
                    • Untrusted link detection in the message body\n\
                    • Grammar and formatting anomaly checks\n\
                    Every verdict comes with its indicators and a recommendation.")
        .arg(
            Arg::new("config")
                .short('c')
                .long("config")
                .value_name("FILE")
                .help("Configuration file path")
                .default_value("/etc/phish-score.yaml"),
        )
        .arg(
            Arg::new("generate-config")
                .long("generate-config")
                .value_name("FILE")
                .help("Generate a default configuration file")
                .action(clap::ArgAction::Set),
        )
        .arg(
            Arg::new("subject")
                .short('s')
                .long("subject")
                .value_name("TEXT")
                .help("Email subject line")
                .action(clap::ArgAction::Set),
        )
        .arg(
            Arg::new("body")
                .short('b')
                .long("body")
                .value_name("TEXT")
                .help("Email body text")
                .conflicts_with_all(["body-file", "email", "sample"])
                .action(clap::ArgAction::Set),
        )
        .arg(
            Arg::new("body-file")
                .long("body-file")
                .value_name("FILE")
                .help("Read the email body from a file ('-' for stdin)")
                .conflicts_with_all(["email", "sample"])
                .action(clap::ArgAction::Set),
        )
        .arg(
            Arg::new("email")
                .long("email")
                .value_name("FILE")
                .help("Analyze a stored message (headers, blank line, body)")
                .conflicts_with_all(["subject", "sample"])
                .action(clap::ArgAction::Set),
        )
        .arg(
            Arg::new("sample")
                .long("sample")
                .value_name("ID")
                .help("Analyze a preset sample email (see --list-samples)")
                .conflicts_with("subject")
                .action(clap::ArgAction::Set),
        )
        .arg(
            Arg::new("list-samples")
                .long("list-samples")
                .help("List the preset sample emails")
                .action(clap::ArgAction::SetTrue),
        )
        .arg(
            Arg::new("list-patterns")
                .long("list-patterns")
                .help("List the pattern catalog in use and its weights")
                .action(clap::ArgAction::SetTrue),
        )
        .arg(
            Arg::new("format")
                .short('f')
                .long("format")
                .value_name("FORMAT")
                .help("Output format")
                .value_parser(["text", "json"])
                .default_value("text"),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("Enable verbose logging with per-rule scoring details")
                .action(clap::ArgAction::SetTrue),
        )
        .get_matches();

    let config_path = matches
        .get_one::<String>("config")
        .cloned()
        .unwrap_or_default();
    let config_found = Path::new(&config_path).exists();
    let config = if config_found {
        Config::from_file(&config_path)
    } else {
        Ok(Config::default())
    };

    init_logging(matches.get_flag("verbose"), config.as_ref().ok());

    let config = match config {
        Ok(config) => {
            if config_found {
                log::info!("Loaded configuration from {}", config_path);
            } else {
                log::warn!(
                    "Configuration file '{}' not found, using default configuration",
                    config_path
                );
            }
            config
        }
        Err(e) => {
            eprintln!("Error loading configuration: {e:#}");
            process::exit(1);
        }
    };

    if let Err(e) = run(&matches, &config) {
        eprintln!("❌ Analysis failed: {e:#}");
        process::exit(1);
    }
}

fn init_logging(verbose: bool, config: Option<&Config>) {
    let log_level = if verbose {
        LevelFilter::Debug
    } else {
        config
            .and_then(|c| c.logging.as_ref())
            .and_then(|l| l.level.parse::<LevelFilter>().ok())
            .unwrap_or(LevelFilter::Info)
    };

    env_logger::Builder::new()
        .filter_level(log_level)
        .parse_default_env()
        .init();
}

fn run(matches: &ArgMatches, config: &Config) -> Result<()> {
    if let Some(path) = matches.get_one::<String>("generate-config") {
        Config::default().to_file(path)?;
        println!("Default configuration written to: {path}");
        println!("Please edit the configuration file to suit your needs.");
        return Ok(());
    }

    if matches.get_flag("list-samples") {
        println!("📋 Available Sample Emails");
        println!("═══════════════════════════════════════");
        for sample in samples::all() {
            println!("  {:<12} {}", sample.id, sample.description);
            println!("    Subject: {}", sample.subject);
        }
        return Ok(());
    }

    let analyzer = Analyzer::from_config(config)?;

    if matches.get_flag("list-patterns") {
        list_patterns(&analyzer);
        return Ok(());
    }

    let input = read_input(matches)?.validated(&config.input)?;
    log::debug!(
        "Analyzing message: subject {} chars, body {} chars",
        input.subject.chars().count(),
        input.body.chars().count()
    );

    let result = analyzer.analyze(&input);
    log::info!(
        "Verdict: {} ({}% confidence, risk score {})",
        if result.is_phishing { "phishing" } else { "legitimate" },
        result.confidence_percent,
        result.risk_score
    );

    match matches.get_one::<String>("format").map(String::as_str) {
        Some("json") => println!("{}", render_json(&result)?),
        _ => print!("{}", render_text(&result)),
    }

    Ok(())
}

fn read_input(matches: &ArgMatches) -> Result<AnalysisInput> {
    if let Some(id) = matches.get_one::<String>("sample") {
        let sample = match samples::get(id) {
            Some(sample) => sample,
            None => bail!("Unknown sample '{id}'. Use --list-samples to see the options."),
        };
        return Ok(AnalysisInput::new(sample.subject, sample.body));
    }

    if let Some(path) = matches.get_one::<String>("email") {
        let raw = read_source(path)?;
        return Ok(AnalysisInput::from_message(&raw));
    }

    let subject = matches
        .get_one::<String>("subject")
        .cloned()
        .unwrap_or_default();

    let body = if let Some(body) = matches.get_one::<String>("body") {
        body.clone()
    } else if let Some(path) = matches.get_one::<String>("body-file") {
        read_source(path)?
    } else {
        String::new()
    };

    Ok(AnalysisInput::new(subject, body))
}

fn read_source(path: &str) -> Result<String> {
    if path == "-" {
        let mut content = String::new();
        std::io::stdin()
            .read_to_string(&mut content)
            .context("Failed to read from stdin")?;
        Ok(content)
    } else {
        std::fs::read_to_string(path).with_context(|| format!("Failed to read {path}"))
    }
}

fn list_patterns(analyzer: &Analyzer) {
    let catalog = analyzer.catalog();
    println!("📋 Pattern Catalog");
    println!("═══════════════════════════════════════");
    for list in catalog
        .risk_lists()
        .into_iter()
        .chain(std::iter::once(catalog.legitimacy()))
    {
        println!("  {} ({:+} per match)", list.label(), list.weight());
        println!("    {}", list.terms().join(", "));
        println!();
    }
}
