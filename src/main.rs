use acme_chain::args::{gen_completions, Args, Cmd, SubCommand};
use acme_chain::check;
use acme_chain::config;
use acme_chain::errors::*;
use acme_chain::inspect;
use acme_chain::select;
use env_logger::Env;
use structopt::StructOpt;

fn main() -> Result<()> {
    let args = Args::from_args();

    let logging = match (args.quiet, args.verbose) {
        (true, _) => "warn",
        (false, 0) => "info",
        (false, 1) => "debug",
        (false, _) => "trace",
    };
    env_logger::init_from_env(Env::default().default_filter_or(logging));

    let config = config::load(&args)?;
    trace!("Loaded runtime config: {:?}", config);

    match args.subcommand {
        SubCommand::Cmds(Cmd::Inspect(args)) => inspect::run(config, args)?,
        SubCommand::Cmds(Cmd::Check(args)) => check::run(config, args)?,
        SubCommand::Cmds(Cmd::Select(args)) => select::run(config, args)?,
        SubCommand::Completions(completions) => gen_completions(&completions)?,
    }

    Ok(())
}
