use crate::args::SelectArgs;
use crate::chain::{self, CertificateChain, ChainError};
use crate::config::Config;
use crate::errors::*;
use crate::persist;
use crate::x509::X509Codec;
use std::io::{self, Write};

/// Run every certificate of the chain through the codec, so only parseable
/// certificates are written out.
pub fn normalize<C: X509Codec>(codec: &C, chain: &CertificateChain) -> Result<String, ChainError> {
    let mut out = String::new();
    for (index, cert) in chain.certificates().enumerate() {
        let decoded = cert
            .decode_with(codec)
            .map_err(ChainError::encoding(index))?;
        let pem = codec.encode(&decoded).map_err(ChainError::encoding(index))?;
        out.push_str(&pem);
    }
    Ok(out)
}

pub fn run(config: Config, args: SelectArgs) -> Result<()> {
    let default = persist::load_chain(&args.default)?;
    let alternates = persist::load_chains(&args.alternates)?;

    let preference = config.preference();
    let selected = chain::select_preferred(&default, &alternates, &preference)
        .context("Failed to select preferred chain")?;

    let pem = normalize(&crate::x509::OpensslCodec, selected)
        .context("Failed to encode selected chain")?;

    if let Some(path) = &args.output {
        persist::write_pem(path, &pem)?;
        info!("Wrote certificate chain to {:?}", path);
    } else {
        io::stdout()
            .write_all(pem.as_bytes())
            .context("Failed to write to stdout")?;
    }

    Ok(())
}
