use crate::errors::DecodeError;
use crate::x509::{Decoded, OpensslCodec, X509Codec};

const CERTIFICATE_TAG: &str = "CERTIFICATE";

/// A single pem encoded certificate out of a bundle
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CertificateBlock {
    raw: String,
    der: Vec<u8>,
}

impl CertificateBlock {
    /// Decode the pem armor of a block. The body is only checked to be valid
    /// base64, parsing it as x509 happens later.
    pub fn from_pem(raw: &str) -> Result<CertificateBlock, DecodeError> {
        let pem = pem::parse(raw)?;
        if pem.tag != CERTIFICATE_TAG {
            return Err(DecodeError::UnexpectedTag(pem.tag));
        }

        Ok(CertificateBlock {
            raw: raw.to_string(),
            der: pem.contents,
        })
    }

    /// The block exactly as it was found in the bundle
    pub fn raw(&self) -> &str {
        &self.raw
    }

    pub fn der(&self) -> &[u8] {
        &self.der
    }

    pub fn to_pem(&self) -> String {
        pem::encode(&pem::Pem {
            tag: CERTIFICATE_TAG.to_string(),
            contents: self.der.clone(),
        })
    }

    /// Parse the certificate as x509
    pub fn decode_with<C: X509Codec>(&self, codec: &C) -> Result<Decoded, DecodeError> {
        codec.decode(&self.to_pem())
    }

    /// Values of the issuer DN entries, in certificate order
    pub fn issuer(&self) -> Result<Vec<String>, DecodeError> {
        let decoded = self.decode_with(&OpensslCodec)?;
        Ok(decoded.issuer)
    }
}
