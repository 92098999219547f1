use crate::errors::*;

pub const END_CERTIFICATE: &str = "-----END CERTIFICATE-----";

/// Split a concatenated pem bundle into its certificate blocks.
///
/// Every returned block ends with the `-----END CERTIFICATE-----` footer,
/// blocks are returned in the order they appear in the bundle. Fragments that
/// only contain whitespace are skipped.
///
/// Input without any footer yields no blocks. If there is at least one footer,
/// non-whitespace text after the last one is a truncated certificate: it is
/// kept as a block of its own so building or matching the chain fails on it
/// instead of silently skipping it.
pub fn split(bundle: &str) -> Vec<String> {
    if !bundle.contains(END_CERTIFICATE) {
        debug!("No certificate footer found in bundle");
        return Vec::new();
    }

    let blocks = bundle
        .split(END_CERTIFICATE)
        .filter(|fragment| !fragment.trim().is_empty())
        .map(|fragment| {
            let mut block = String::with_capacity(fragment.len() + END_CERTIFICATE.len());
            block.push_str(fragment);
            block.push_str(END_CERTIFICATE);
            block
        })
        .collect::<Vec<_>>();

    debug!("Found {} certificate blocks in bundle", blocks.len());
    blocks
}

#[cfg(test)]
mod tests {
    use super::*;

    const A: &str = "-----BEGIN CERTIFICATE-----\nQUFBQQ==\n-----END CERTIFICATE-----";
    const B: &str = "-----BEGIN CERTIFICATE-----\nQkJCQg==\n-----END CERTIFICATE-----";
    const C: &str = "-----BEGIN CERTIFICATE-----\nQ0NDQw==\n-----END CERTIFICATE-----";

    #[test]
    fn empty_bundle() {
        assert!(split("").is_empty());
        assert!(split("\n\n  \n").is_empty());
    }

    #[test]
    fn no_footer() {
        assert!(split("-----BEGIN CERTIFICATE-----\nQUFBQQ==\n").is_empty());
        assert!(split("hello world").is_empty());
    }

    #[test]
    fn single_block() {
        let blocks = split(&format!("{}\n", A));
        assert_eq!(blocks, vec![A.to_string()]);
    }

    #[test]
    fn keeps_bundle_order() {
        let bundle = format!("{}\n{}\n{}\n", A, B, C);
        let blocks = split(&bundle);
        assert_eq!(blocks.len(), 3);
        assert_eq!(blocks[0], A);
        assert_eq!(blocks[1].trim_start(), B);
        assert_eq!(blocks[2].trim_start(), C);
    }

    #[test]
    fn no_separator_between_blocks() {
        let bundle = format!("{}{}", A, B);
        assert_eq!(split(&bundle), vec![A.to_string(), B.to_string()]);
    }

    #[test]
    fn blank_lines_between_blocks() {
        let bundle = format!("\n\n{}\n\n\n{}\r\n\r\n  \t\n", A, B);
        let blocks = split(&bundle);
        assert_eq!(blocks.len(), 2);
        for block in &blocks {
            assert!(block.ends_with(END_CERTIFICATE));
            assert!(block.trim_start().starts_with("-----BEGIN CERTIFICATE-----"));
        }
    }

    #[test]
    fn whitespace_only_fragment_between_footers() {
        let bundle = format!("{}\n\n{}\n", A, END_CERTIFICATE);
        assert_eq!(split(&bundle), vec![A.to_string()]);
    }

    #[test]
    fn malformed_block_is_passed_through() {
        let bundle = format!("not base64 at all\n{}\n{}", END_CERTIFICATE, B);
        let blocks = split(&bundle);
        assert_eq!(blocks.len(), 2);
        assert_eq!(blocks[0], format!("not base64 at all\n{}", END_CERTIFICATE));
    }

    #[test]
    fn truncated_trailing_block_is_kept() {
        let bundle = format!("{}\n-----BEGIN CERTIFICATE-----\nQkJC", A);
        let blocks = split(&bundle);
        assert_eq!(blocks.len(), 2);
        assert_eq!(blocks[0], A);
        assert_eq!(
            blocks[1],
            format!("\n-----BEGIN CERTIFICATE-----\nQkJC{}", END_CERTIFICATE)
        );
    }
}
