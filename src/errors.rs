pub use anyhow::{anyhow, bail, Context, Error, Result};
pub use log::{debug, error, info, trace, warn};

/// Reasons a single PEM block could not be turned into a certificate
#[derive(Debug, thiserror::Error)]
pub enum DecodeError {
    #[error("Invalid pem encoding")]
    Pem(#[from] pem::PemError),
    #[error("Unexpected pem tag {0:?}, expected \"CERTIFICATE\"")]
    UnexpectedTag(String),
    #[error("Failed to parse x509 certificate")]
    X509(#[from] openssl::error::ErrorStack),
    #[error("Encoded certificate is not valid utf-8")]
    Utf8(#[from] std::string::FromUtf8Error),
}
