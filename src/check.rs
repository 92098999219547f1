use crate::args::CheckArgs;
use crate::config::Config;
use crate::errors::*;
use crate::persist;
use colored::Colorize;

pub fn run(config: Config, args: CheckArgs) -> Result<()> {
    let preference = config.preference();
    if preference.name().is_empty() {
        warn!("No preferred chain configured, every bundle is going to match");
    }

    for path in &args.bundles {
        let chain = persist::load_chain(path)?;
        let status = if preference
            .matches(&chain)
            .with_context(|| anyhow!("Failed to check certificate bundle: {:?}", path))?
        {
            "matches".green()
        } else {
            "doesn't match".red()
        };
        println!("{:50} {}", path.display().to_string().bold(), status);
    }

    Ok(())
}
