use clap::{ArgMatches, CommandFactory, FromArgMatches, Parser, Subcommand};
use std::process;
use synastry::error::SynResult;
use synastry::roster;
use tracing::{error, Level};

mod cmd;
mod reports;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    #[arg(global = true, short, long, default_value = "data/roster.json")]
    roster: String,

    /// JSON config file; flags typed on the command line override it.
    #[arg(global = true, long)]
    config: Option<String>,

    #[arg(global = true, long, default_value_t = false)]
    debug: bool,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Split the roster into teams.
    Teams(cmd::teams::TeamsArgs),
    /// Score a single pair in detail.
    Compare(cmd::compare::CompareArgs),
    /// Print the pair score matrix.
    Matrix(cmd::matrix::MatrixArgs),
}

fn main() {
    // 1. Parse raw matches (to tell typed flags from defaults)
    let matches = Cli::command().get_matches();
    let cli = Cli::from_arg_matches(&matches).unwrap_or_else(|e| e.exit());

    // 2. Logging goes to stderr, stdout is for reports
    let level = if cli.debug { Level::DEBUG } else { Level::INFO };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = run(cli, &matches) {
        error!("{}", e);
        process::exit(1);
    }
}

fn run(cli: Cli, matches: &ArgMatches) -> SynResult<()> {
    let persons = roster::load_roster(&cli.roster)?;
    let config_path = cli.config.as_deref();

    match cli.command {
        Commands::Teams(args) => {
            let sub = matches.subcommand_matches("teams");
            let config = cmd::resolve_config(config_path, &args.config, sub)?;
            cmd::teams::run(&args, &config, &persons)
        }
        Commands::Compare(args) => {
            let sub = matches.subcommand_matches("compare");
            let scoring = cmd::resolve_scoring(config_path, &args.scoring, sub)?;
            cmd::compare::run(&args, &scoring, &persons)
        }
        Commands::Matrix(args) => {
            let sub = matches.subcommand_matches("matrix");
            let scoring = cmd::resolve_scoring(config_path, &args.scoring, sub)?;
            cmd::matrix::run(&args, &scoring, &persons)
        }
    }
}
