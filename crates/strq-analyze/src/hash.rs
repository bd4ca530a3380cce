use sha2::{Digest, Sha256};

/// Lower-hex SHA-256 digest of a string's UTF-8 bytes.
///
/// This digest is both the record's `id` and its `sha256_hash` property:
/// a pure function of the normalized value, so two distinct records can
/// never share an id.
pub fn sha256_hex(value: &str) -> String {
    hex::encode(Sha256::digest(value.as_bytes()))
}
