use booktriage::{cmd, Args, Config, Logger, Subcommands};
use clap::Parser;

fn main() -> Result<(), anyhow::Error> {
    let args = Args::parse();
    Logger::init(args.verbose);

    run_app(args)?;

    Ok(())
}

fn run_app(args: Args) -> Result<(), anyhow::Error> {
    match args.subcommands {
        Subcommands::Config(args) => cmd::configure(Config::init()?, args)?,
        Subcommands::Import(args) => cmd::import(Config::init()?, args)?,
        Subcommands::Export(args) => cmd::export(Config::init()?, args)?,
        Subcommands::Domain(args) => cmd::domain(args)?,
        Subcommands::Tweet(args) => cmd::tweet(args)?,
        Subcommands::Query(args) => cmd::query(args)?,
    }

    Ok(())
}
