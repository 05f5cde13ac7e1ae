// Copyright (c) The tmc-tester Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

use crate::secret::Secret;
use hmac::{Hmac, Mac};
use sha2::Sha256;

type HmacSha256 = Hmac<Sha256>;

/// Computes the HMAC-SHA256 digest of `payload` under `secret`, as a
/// 64-character lowercase hex string.
///
/// The grading server recomputes this over the result artifact's exact bytes
/// and compares, so callers must sign the byte sequence they actually write.
pub(crate) fn hex_digest(secret: &Secret, payload: &[u8]) -> String {
    let mut mac = HmacSha256::new_from_slice(secret.as_bytes())
        .expect("HMAC accepts keys of any size");
    mac.update(payload);
    hex::encode(mac.finalize().into_bytes())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_vector() {
        // RFC 4231 test case 2.
        let secret = Secret::new(&b"Jefe"[..]);
        let digest = hex_digest(&secret, b"what do ya want for nothing?");
        assert_eq!(
            digest,
            "5bdcc146bf60754e6a042426089575c75a003f089d2739839dec58b964ec3843"
        );
    }

    #[test]
    fn deterministic_across_calls() {
        let secret = Secret::new(&b"047QzQx8RAYLR3lf0UfB75WX5EFnx7AV"[..]);
        let payload = br#"[{"name":"a","status":"passed"}]"#;
        assert_eq!(hex_digest(&secret, payload), hex_digest(&secret, payload));
    }

    #[test]
    fn digest_is_lowercase_hex() {
        let secret = Secret::new(&b"key"[..]);
        let digest = hex_digest(&secret, b"[]");
        assert_eq!(digest.len(), 64);
        assert!(digest.chars().all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase()));
    }
}
