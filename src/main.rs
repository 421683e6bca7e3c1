use clap::{ArgMatches, CommandFactory, FromArgMatches, Parser, Subcommand};
use reviewgram::config::Config;
use reviewgram::error::RgResult;
use reviewgram::source::DirectorySource;
use reviewgram::stopwords::StopWords;
use std::process;
use tracing::{error, info, Level};

mod cmd;
mod reports;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Directory holding `<content-id>/page-<n>.{txt,json,csv}`.
    #[arg(global = true, short, long, default_value = "data/reviews")]
    source: String,

    /// One stop word per line. Defaults to the built-in English list.
    #[arg(global = true, long)]
    stopwords: Option<String>,

    #[arg(global = true, long, default_value_t = false, conflicts_with = "stopwords")]
    no_stopwords: bool,

    /// JSON config file. Flags given on the command line win over it.
    #[arg(global = true, short, long)]
    config: Option<String>,

    #[arg(global = true, long, default_value_t = false)]
    debug: bool,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Rank the most frequent phrases for one gram size.
    Top(cmd::top::TopArgs),
    /// Rank phrases for every gram size from 1 to --max-gram.
    Sweep(cmd::sweep::SweepArgs),
}

fn main() {
    let matches = Cli::command().get_matches();
    let cli = Cli::from_arg_matches(&matches).unwrap_or_else(|e| e.exit());

    let level = if cli.debug { Level::DEBUG } else { Level::INFO };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = run(cli, &matches) {
        error!("❌ {}", e);
        process::exit(1);
    }
}

fn run(cli: Cli, matches: &ArgMatches) -> RgResult<()> {
    let (cli_config, sub_matches) = match &cli.command {
        Commands::Top(args) => (&args.config, matches.subcommand_matches("top")),
        Commands::Sweep(args) => (&args.config, matches.subcommand_matches("sweep")),
    };

    let config = resolve_config(cli.config.as_deref(), cli_config, sub_matches)?;
    let stopwords = load_stopwords(&cli)?;
    let source = DirectorySource::new(&cli.source);
    info!("📂 Review source: {}", source.root().display());

    match &cli.command {
        Commands::Top(args) => cmd::top::run(&config, args.format, &source, stopwords),
        Commands::Sweep(args) => cmd::sweep::run(&config, args.max_gram, &source, stopwords),
    }
}

fn resolve_config(
    path: Option<&str>,
    cli_config: &Config,
    sub_matches: Option<&ArgMatches>,
) -> RgResult<Config> {
    let Some(path) = path else {
        return Ok(cli_config.clone());
    };

    info!("⚙️  Loading config from: {}", path);
    let mut config = Config::load_from_file(path)?;
    if let Some(m) = sub_matches {
        config.merge_from_cli(cli_config, m);
    }
    Ok(config)
}

fn load_stopwords(cli: &Cli) -> RgResult<StopWords> {
    if cli.no_stopwords {
        info!("Stop-word filtering disabled");
        return Ok(StopWords::empty());
    }
    match &cli.stopwords {
        Some(path) => {
            info!("📖 Loading stop words from: {}", path);
            StopWords::load_from_file(path)
        }
        None => Ok(StopWords::english()),
    }
}
