use crate::errors::DecodeError;
use openssl::x509::{X509NameRef, X509};

/// The parts of a parsed certificate we care about
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Decoded {
    pub der: Vec<u8>,
    pub subject: Vec<String>,
    /// Values of the issuer DN entries, in certificate order
    pub issuer: Vec<String>,
}

impl Decoded {
    #[inline]
    pub fn issued_by(&self, name: &str) -> bool {
        self.issuer.iter().any(|value| value == name)
    }
}

/// Anything that can parse a pem certificate and write it back out
pub trait X509Codec {
    fn decode(&self, pem: &str) -> Result<Decoded, DecodeError>;

    fn encode(&self, cert: &Decoded) -> Result<String, DecodeError>;
}

#[derive(Debug, Default, Clone, Copy)]
pub struct OpensslCodec;

fn name_values(name: &X509NameRef) -> Result<Vec<String>, DecodeError> {
    let mut values = Vec::new();
    for entry in name.entries() {
        let value = entry.data().as_utf8()?;
        values.push(value.to_string());
    }
    Ok(values)
}

impl X509Codec for OpensslCodec {
    fn decode(&self, pem: &str) -> Result<Decoded, DecodeError> {
        let x509 = X509::from_pem(pem.as_bytes())?;
        let subject = name_values(x509.subject_name())?;
        let issuer = name_values(x509.issuer_name())?;
        let der = x509.to_der()?;
        Ok(Decoded {
            der,
            subject,
            issuer,
        })
    }

    fn encode(&self, cert: &Decoded) -> Result<String, DecodeError> {
        let x509 = X509::from_der(&cert.der)?;
        let pem = String::from_utf8(x509.to_pem()?)?;
        Ok(pem)
    }
}
