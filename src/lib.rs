pub mod args;
pub mod bundle;
pub mod cert;
pub mod chain;
pub mod check;
pub mod config;
pub mod errors;
pub mod inspect;
pub mod persist;
pub mod select;
pub mod x509;

#[cfg(test)]
mod test_utils;

pub use crate::chain::{select_preferred, CertificateChain, ChainError, Preference};
