use openssl::asn1::Asn1Time;
use openssl::bn::{BigNum, MsbOption};
use openssl::ec::{EcGroup, EcKey};
use openssl::hash::MessageDigest;
use openssl::nid::Nid;
use openssl::pkey::PKey;
use openssl::x509::{X509Builder, X509NameBuilder};

/// Mint a throwaway certificate with the given subject CN and issuer name.
/// The signature is made with the certificate's own key, nothing in here
/// verifies it.
pub fn cert(subject_cn: &str, issuer: &[(&str, &str)]) -> String {
    let group = EcGroup::from_curve_name(Nid::X9_62_PRIME256V1).unwrap();
    let key = PKey::from_ec_key(EcKey::generate(&group).unwrap()).unwrap();

    let mut subject = X509NameBuilder::new().unwrap();
    subject.append_entry_by_nid(Nid::COMMONNAME, subject_cn).unwrap();
    let subject = subject.build();

    let mut issuer_name = X509NameBuilder::new().unwrap();
    for (field, value) in issuer {
        issuer_name.append_entry_by_text(field, value).unwrap();
    }
    let issuer_name = issuer_name.build();

    let mut serial = BigNum::new().unwrap();
    serial.rand(64, MsbOption::MAYBE_ZERO, false).unwrap();
    let serial = serial.to_asn1_integer().unwrap();

    let mut builder = X509Builder::new().unwrap();
    builder.set_version(2).unwrap();
    builder.set_serial_number(&serial).unwrap();
    builder.set_subject_name(&subject).unwrap();
    builder.set_issuer_name(&issuer_name).unwrap();
    builder.set_pubkey(&key).unwrap();
    let not_before = Asn1Time::days_from_now(0).unwrap();
    builder.set_not_before(&not_before).unwrap();
    let not_after = Asn1Time::days_from_now(90).unwrap();
    builder.set_not_after(&not_after).unwrap();
    builder.sign(&key, MessageDigest::sha256()).unwrap();

    String::from_utf8(builder.build().to_pem().unwrap()).unwrap()
}

/// A block with valid pem armor whose body is not a certificate
pub fn corrupted() -> String {
    "-----BEGIN CERTIFICATE-----\naGVsbG8gd29ybGQsIHRoaXMgaXMgbm90IGRlcg==\n-----END CERTIFICATE-----\n"
        .to_string()
}

/// leaf <- intermediate <- root, the way an acme server returns them.
/// Only the leaf names "Mid" and only the root names "ExampleRoot".
pub fn bundle() -> String {
    let leaf = cert("example.com", &[("CN", "Mid"), ("O", "Example CA")]);
    let intermediate = cert("Mid", &[("CN", "Cross Root"), ("O", "Example CA")]);
    let root = cert(
        "Cross Root",
        &[("C", "US"), ("O", "Example Trust"), ("CN", "ExampleRoot")],
    );
    format!("{}\n{}\n{}", leaf, intermediate, root)
}
