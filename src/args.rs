use crate::bookmark_reader::ParseStrategy;
use clap::{ArgAction, Args as ClapArgs, Parser, Subcommand};
use std::path::PathBuf;

/// Describes the available arguments in the CLI.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,
    #[command(subcommand)]
    pub subcommands: Subcommands,
}

/// Describes the available subcommands in the CLI.
#[derive(Subcommand, Debug)]
pub enum Subcommands {
    /// Configure the last keeper and the parse strategy.
    Config(ConfigArgs),
    /// Import a Chrome bookmarks export and split it into keepers and
    /// bookmarks to be categorized.
    Import(ImportArgs),
    /// Export keepers to a Chrome bookmarks file.
    Export(ExportArgs),
    /// Print the domain of a url.
    Domain(DomainArgs),
    /// Print the id of a tweet.
    Tweet(TweetArgs),
    /// Print the full-text search query for the given search terms.
    Query(QueryArgs),
}

/// Describes the arguments for the `config` subcommand.
#[derive(ClapArgs, Debug)]
pub struct ConfigArgs {
    /// Run command in dry mode.
    #[arg(short = 'n', long = "dry-run")]
    pub dry_run: bool,
    #[command(flatten)]
    pub set_marker: SetMarker,
    /// The strategy to parse bookmark exports.
    #[arg(long, value_enum)]
    pub strategy: Option<ParseStrategy>,
}

#[derive(ClapArgs, Debug)]
#[group(required = false, multiple = true)]
pub struct SetMarker {
    /// The url of the last keeper.
    #[arg(long)]
    pub marker_url: Option<String>,
    /// The folder of the last keeper (case-insensitive).
    #[arg(long)]
    pub marker_folder: Option<String>,
}

/// Describes the arguments for the `import` subcommand.
#[derive(ClapArgs, Debug)]
pub struct ImportArgs {
    /// The bookmarks file exported from Chrome.
    pub source: PathBuf,
    /// The path of the import report.
    ///
    /// Defaults to `bookmarks.json` in the config directory.
    #[arg(short, long)]
    pub output: Option<PathBuf>,
    /// The strategy to parse the bookmarks file.
    #[arg(short, long, value_enum)]
    pub strategy: Option<ParseStrategy>,
    #[command(flatten)]
    pub set_marker: SetMarker,
    /// Run command in dry mode.
    #[arg(short = 'n', long = "dry-run")]
    pub dry_run: bool,
}

/// Describes the arguments for the `export` subcommand.
#[derive(ClapArgs, Debug)]
pub struct ExportArgs {
    /// The import report or a list of keepers in JSON format.
    ///
    /// Defaults to `bookmarks.json` in the config directory.
    #[arg(short, long)]
    pub input: Option<PathBuf>,
    /// The path of the exported bookmarks file.
    ///
    /// If missing, the bookmarks are written to stdout.
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// Describes the arguments for the `domain` subcommand.
#[derive(ClapArgs, Debug)]
pub struct DomainArgs {
    /// Urls separated by a whitespace.
    #[arg(num_args = 1.., value_name = "URLs", value_delimiter = ' ')]
    pub urls: Vec<String>,
}

/// Describes the arguments for the `tweet` subcommand.
#[derive(ClapArgs, Debug)]
pub struct TweetArgs {
    /// Urls separated by a whitespace.
    #[arg(num_args = 1.., value_name = "URLs", value_delimiter = ' ')]
    pub urls: Vec<String>,
}

/// Describes the arguments for the `query` subcommand.
#[derive(ClapArgs, Debug)]
pub struct QueryArgs {
    /// The search terms.
    #[arg(num_args = 0..)]
    pub terms: Vec<String>,
}
