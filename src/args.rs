use crate::errors::*;
use std::io::stdout;
use std::path::PathBuf;
use structopt::clap::{AppSettings, Shell};
use structopt::StructOpt;

#[derive(Debug, StructOpt)]
#[structopt(global_settings = &[AppSettings::ColoredHelp])]
pub struct Args {
    /// Verbose logging output (Can be set multiple times)
    #[structopt(short, long, global = true, parse(from_occurrences))]
    pub verbose: u8,
    /// Silent output (except errors)
    #[structopt(short, long, global = true)]
    pub quiet: bool,
    #[structopt(
        short,
        long,
        value_name = "path",
        default_value = "/etc/acme-chain.conf",
        env = "ACME_CHAIN_CONFIG"
    )]
    pub config: String,
    /// Name of the issuer the chain should lead up to, eg. "ISRG Root X1"
    #[structopt(long, value_name = "name", env = "ACME_PREFERRED_CHAIN")]
    pub preferred_chain: Option<String>,
    /// Accept the chain if any certificate was issued by the preferred issuer,
    /// instead of only the last one
    #[structopt(long)]
    pub match_any: bool,
    #[structopt(subcommand)]
    pub subcommand: SubCommand,
}

#[derive(Debug, Clone, StructOpt)]
pub enum SubCommand {
    #[structopt(flatten)]
    Cmds(Cmd),
    /// Generate shell completions
    Completions(Completions),
}

#[derive(Debug, Clone, StructOpt)]
pub enum Cmd {
    /// Show the certificates of a bundle and who issued them
    Inspect(InspectArgs),
    /// Check if bundles match the preferred chain
    Check(CheckArgs),
    /// Pick the preferred chain out of a default chain and its alternates
    Select(SelectArgs),
}

#[derive(Debug, Clone, StructOpt)]
pub struct InspectArgs {
    /// The pem bundle as returned by the acme server
    pub bundle: PathBuf,
}

#[derive(Debug, Clone, StructOpt)]
pub struct CheckArgs {
    /// The pem bundles to check
    #[structopt(required = true)]
    pub bundles: Vec<PathBuf>,
}

#[derive(Debug, Clone, StructOpt)]
pub struct SelectArgs {
    /// Write the selected chain to this file instead of stdout
    #[structopt(short, long, value_name = "path")]
    pub output: Option<PathBuf>,
    /// The default chain
    pub default: PathBuf,
    /// Alternate chains, in the order the server offered them
    pub alternates: Vec<PathBuf>,
}

#[derive(Debug, Clone, StructOpt)]
pub struct Completions {
    #[structopt(possible_values=&Shell::variants())]
    pub shell: Shell,
}

pub fn gen_completions(args: &Completions) -> Result<()> {
    Args::clap().gen_completions_to("acme-chain", args.shell, &mut stdout());
    Ok(())
}
