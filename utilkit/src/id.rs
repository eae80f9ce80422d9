//! Random identifiers in UUID-like layout.
//!
//! Identifiers are 16 bytes from the operating system's CSPRNG printed as
//! lowercase hex in 8-4-4-4-12 groups, e.g.
//! `bcaf4890-8b63-423b-258f-7a11004a8bf0`.
//!
//! The RFC 4122 version and variant bits are NOT set: all 128 bits are random.
//! Treat the result as an opaque random id with UUID formatting, not as a
//! standards-compliant v4 UUID.

use rand::{RngCore, rngs::OsRng};
use uuid::Uuid;

/// Number of random bytes in an identifier.
pub const ID_BYTES: usize = 16;

/// Length of the formatted identifier.
pub const ID_LENGTH: usize = 36;

/// Generates a random identifier, terminating the process if the OS random
/// source cannot be read.
pub fn generate_uuid() -> String {
    crate::fatal::die_on_error(
        try_generate_uuid(),
        format_args!("cannot read from the OS random source"),
    )
}

/// Generates a random identifier, returning the RNG error instead of exiting.
pub fn try_generate_uuid() -> Result<String, rand::Error> {
    let mut bytes = [0u8; ID_BYTES];
    OsRng.try_fill_bytes(&mut bytes)?;
    Ok(format_identifier(bytes))
}

/// Formats raw bytes as `xxxxxxxx-xxxx-xxxx-xxxx-xxxxxxxxxxxx` without
/// touching any bits.
pub fn format_identifier(bytes: [u8; ID_BYTES]) -> String {
    Uuid::from_bytes(bytes).hyphenated().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use std::collections::HashSet;

    fn is_identifier(id: &str) -> bool {
        let groups: Vec<&str> = id.split('-').collect();
        id.len() == ID_LENGTH
            && groups.iter().map(|g| g.len()).eq([8, 4, 4, 4, 12])
            && groups
                .iter()
                .all(|g| g.chars().all(|c| matches!(c, '0'..='9' | 'a'..='f')))
    }

    #[test]
    fn test_generated_identifier_layout() {
        let id = generate_uuid();
        assert!(is_identifier(&id), "unexpected identifier layout: {id}");
    }

    #[test]
    fn test_no_duplicates_in_ten_thousand_calls() {
        let ids: HashSet<String> = (0..10_000).map(|_| generate_uuid()).collect();
        assert_eq!(ids.len(), 10_000);
    }

    #[test]
    fn test_format_keeps_version_and_variant_bits_untouched() {
        let id = format_identifier([0xff; ID_BYTES]);
        assert_eq!(id, "ffffffff-ffff-ffff-ffff-ffffffffffff");

        let id = format_identifier([0x00; ID_BYTES]);
        assert_eq!(id, "00000000-0000-0000-0000-000000000000");
    }

    #[test]
    fn test_format_groups_bytes_in_order() {
        let bytes = [
            0xbc, 0xaf, 0x48, 0x90, 0x8b, 0x63, 0x42, 0x3b, 0x25, 0x8f, 0x7a, 0x11, 0x00, 0x4a,
            0x8b, 0xf0,
        ];
        assert_eq!(
            format_identifier(bytes),
            "bcaf4890-8b63-423b-258f-7a11004a8bf0"
        );
    }

    proptest! {
        #[test]
        fn test_any_bytes_format_to_identifier(bytes in any::<[u8; 16]>()) {
            prop_assert!(is_identifier(&format_identifier(bytes)));
        }
    }
}
