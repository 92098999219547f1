use crate::args::Args;
use crate::chain::Preference;
use crate::errors::*;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::fs;
use std::path::Path;

#[derive(Debug, Default, PartialEq, Eq, Deserialize)]
pub struct ConfigFile {
    #[serde(default)]
    pub chain: ChainConfig,
}

#[derive(Debug, Default, PartialEq, Eq, Clone, Deserialize)]
pub struct ChainConfig {
    pub preferred_chain: Option<String>,
    #[serde(default)]
    pub match_any: bool,
}

#[derive(Debug, Clone)]
pub struct Config {
    pub chain: ChainConfig,
}

impl Config {
    pub fn preference(&self) -> Preference {
        Preference {
            name: self.chain.preferred_chain.clone(),
            match_any: self.chain.match_any,
        }
    }
}

fn load_str<T: DeserializeOwned>(s: &str) -> Result<T> {
    let conf = toml::from_str(s).context("Failed to load config")?;
    Ok(conf)
}

fn load_file<P: AsRef<Path>, T: DeserializeOwned>(path: P) -> Result<T> {
    let buf = fs::read_to_string(path.as_ref()).context("Failed to read file")?;
    load_str(&buf)
}

fn merge(file: ConfigFile, args: &Args) -> Config {
    let mut chain = file.chain;
    if let Some(name) = &args.preferred_chain {
        chain.preferred_chain = Some(name.clone());
    }
    if args.match_any {
        chain.match_any = true;
    }
    Config { chain }
}

pub fn load(args: &Args) -> Result<Config> {
    let path = Path::new(&args.config);
    let file = if path.exists() {
        load_file(path).with_context(|| anyhow!("Failed to load config file {:?}", path))?
    } else {
        debug!("Config file {:?} doesn't exist, using defaults", path);
        ConfigFile::default()
    };
    Ok(merge(file, args))
}
