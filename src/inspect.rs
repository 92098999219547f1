use crate::args::InspectArgs;
use crate::chain::ChainError;
use crate::config::Config;
use crate::errors::*;
use crate::persist;
use crate::x509::OpensslCodec;
use colored::Colorize;

fn role(index: usize, len: usize) -> &'static str {
    if index == 0 {
        "leaf"
    } else if index + 1 == len {
        "last issuer"
    } else {
        "issuer"
    }
}

pub fn run(config: Config, args: InspectArgs) -> Result<()> {
    let chain = persist::load_chain(&args.bundle)?;
    let preference = config.preference();
    let preferred = preference.name();

    for (index, cert) in chain.certificates().enumerate() {
        let decoded = cert
            .decode_with(&OpensslCodec)
            .map_err(ChainError::encoding(index))?;

        let subject = decoded.subject.join(", ");
        let issuer = decoded.issuer.join(", ");
        let issuer = if !preferred.is_empty() && decoded.issued_by(preferred) {
            issuer.green()
        } else {
            issuer.normal()
        };

        println!(
            "#{} {:12} {:40} <- {}",
            index,
            role(index, chain.len()),
            subject.bold(),
            issuer
        );
    }

    if preferred.is_empty() {
        info!("No preferred chain configured");
    } else if preference.matches(&chain)? {
        println!("{} {:?}", "matches".green(), preferred);
    } else {
        println!("{} {:?}", "doesn't match".red(), preferred);
    }

    Ok(())
}
