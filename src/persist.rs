use crate::chain::CertificateChain;
use crate::errors::*;
use std::fs;
use std::fs::OpenOptions;
use std::io::prelude::*;
use std::os::unix::fs::OpenOptionsExt;
use std::path::{Path, PathBuf};

const CERT_MODE: u32 = 0o644;

pub fn load_chain(path: &Path) -> Result<CertificateChain> {
    debug!("Loading certificate bundle from {:?}", path);
    let buf = fs::read_to_string(path)
        .with_context(|| anyhow!("Failed to read certificate bundle: {:?}", path))?;
    let chain = CertificateChain::from_pem(&buf)
        .with_context(|| anyhow!("Failed to parse certificate bundle: {:?}", path))?;
    Ok(chain)
}

pub fn load_chains(paths: &[PathBuf]) -> Result<Vec<CertificateChain>> {
    paths.iter().map(|p| load_chain(p)).collect()
}

pub fn write_pem(path: &Path, pem: &str) -> Result<()> {
    debug!("Writing certificate chain to {:?}", path);
    let mut file = OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .mode(CERT_MODE)
        .open(path)
        .with_context(|| anyhow!("Failed to open {:?}", path))?;

    file.write_all(pem.as_bytes())
        .with_context(|| anyhow!("Failed to write certificate chain to {:?}", path))?;
    Ok(())
}
