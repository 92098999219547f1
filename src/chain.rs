use crate::bundle;
use crate::cert::CertificateBlock;
use crate::errors::*;
use crate::x509::{OpensslCodec, X509Codec};
use std::str::FromStr;

#[derive(Debug, thiserror::Error)]
pub enum ChainError {
    #[error("No certificate found in bundle")]
    MalformedChain,
    #[error("Failed to decode certificate #{index} in chain")]
    InvalidCertificateEncoding {
        index: usize,
        #[source]
        source: DecodeError,
    },
}

impl ChainError {
    pub(crate) fn encoding(index: usize) -> impl FnOnce(DecodeError) -> ChainError {
        move |source| ChainError::InvalidCertificateEncoding { index, source }
    }
}

/// The certificate chain returned by an acme server: the leaf followed by its
/// issuers, in the order the server sent them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CertificateChain {
    leaf: CertificateBlock,
    issuers: Vec<CertificateBlock>,
}

impl CertificateChain {
    pub fn from_pem(input: &str) -> Result<CertificateChain, ChainError> {
        let mut blocks = bundle::split(input).into_iter().enumerate().map(
            |(index, block)| {
                CertificateBlock::from_pem(&block).map_err(ChainError::encoding(index))
            },
        );

        let leaf = blocks.next().ok_or(ChainError::MalformedChain)??;
        let issuers = blocks.collect::<Result<Vec<_>, _>>()?;

        debug!("Loaded certificate chain with {} issuers", issuers.len());
        Ok(CertificateChain { leaf, issuers })
    }

    pub fn leaf(&self) -> &CertificateBlock {
        &self.leaf
    }

    pub fn issuers(&self) -> &[CertificateBlock] {
        &self.issuers
    }

    /// All certificates, leaf first
    pub fn certificates(&self) -> impl Iterator<Item = &CertificateBlock> {
        std::iter::once(&self.leaf).chain(self.issuers.iter())
    }

    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize {
        1 + self.issuers.len()
    }

    pub fn to_pem(&self) -> String {
        self.certificates().map(CertificateBlock::to_pem).collect()
    }

    /// Check if the chain was issued by `preferred`.
    ///
    /// An empty name matches every chain. Unless `match_any` is set only the
    /// last certificate is inspected, which is the one closest to the root
    /// if the server sent the chain in the usual order.
    pub fn matches_preferred_chain(
        &self,
        preferred: &str,
        match_any: bool,
    ) -> Result<bool, ChainError> {
        self.matches_preferred_chain_with(&OpensslCodec, preferred, match_any)
    }

    pub fn matches_preferred_chain_with<C: X509Codec>(
        &self,
        codec: &C,
        preferred: &str,
        match_any: bool,
    ) -> Result<bool, ChainError> {
        if preferred.is_empty() {
            return Ok(true);
        }

        let candidates = self.certificates().enumerate().collect::<Vec<_>>();
        let candidates = if match_any {
            &candidates[..]
        } else {
            // there's always at least the leaf
            &candidates[candidates.len() - 1..]
        };

        for (index, cert) in candidates {
            let decoded = cert
                .decode_with(codec)
                .map_err(ChainError::encoding(*index))?;
            if decoded.issued_by(preferred) {
                debug!("Certificate #{} was issued by {:?}", index, preferred);
                return Ok(true);
            }
        }

        Ok(false)
    }
}

impl FromStr for CertificateChain {
    type Err = ChainError;

    fn from_str(s: &str) -> Result<CertificateChain, ChainError> {
        CertificateChain::from_pem(s)
    }
}

/// Which issuer the caller would like the chain to lead up to
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Preference {
    pub name: Option<String>,
    pub match_any: bool,
}

impl Preference {
    pub fn new<S: Into<String>>(name: S, match_any: bool) -> Preference {
        Preference {
            name: Some(name.into()),
            match_any,
        }
    }

    pub fn name(&self) -> &str {
        self.name.as_deref().unwrap_or("")
    }

    pub fn matches(&self, chain: &CertificateChain) -> Result<bool, ChainError> {
        chain.matches_preferred_chain(self.name(), self.match_any)
    }
}

/// Pick the chain issued by the preferred issuer out of the default chain and
/// the alternates offered by the server. Falls back to the default chain if
/// none of them match.
pub fn select_preferred<'a>(
    default: &'a CertificateChain,
    alternates: &'a [CertificateChain],
    preference: &Preference,
) -> Result<&'a CertificateChain, ChainError> {
    if preference.matches(default)? {
        return Ok(default);
    }

    for (i, chain) in alternates.iter().enumerate() {
        if preference.matches(chain)? {
            info!(
                "Using alternate chain #{} issued by {:?}",
                i + 1,
                preference.name()
            );
            return Ok(chain);
        }
    }

    warn!(
        "No chain issued by {:?}, using default chain",
        preference.name()
    );
    Ok(default)
}
