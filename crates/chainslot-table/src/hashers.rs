//! The catalogue of byte-level hash functions.
//!
//! From deliberately terrible ([`zero`] puts every key in one bucket) to
//! reasonable ([`elf`], [`crc32c_first_word`]). All of them take the key's
//! content bytes and are usable through [`ByteHash`](crate::ByteHash) or
//! [`HashKind`].

use std::fmt;
use std::str::FromStr;

use crate::hasher::ByteHash;

/// Always 0.
pub fn zero(_bytes: &[u8]) -> u64 {
    0
}

/// The first byte, or 0 for an empty key.
pub fn first_byte(bytes: &[u8]) -> u64 {
    bytes.first().map_or(0, |&b| u64::from(b))
}

/// The key length in bytes.
pub fn length(bytes: &[u8]) -> u64 {
    bytes.len() as u64
}

/// Wrapping sum of all bytes.
pub fn byte_sum(bytes: &[u8]) -> u64 {
    bytes
        .iter()
        .fold(0u64, |sum, &b| sum.wrapping_add(u64::from(b)))
}

/// Rotate left by one, then xor the next byte. The first byte is skipped.
pub fn rotate_xor(bytes: &[u8]) -> u64 {
    bytes
        .iter()
        .skip(1)
        .fold(0u64, |hash, &b| hash.rotate_left(1) ^ u64::from(b))
}

/// PJW/ELF hash widened to 64 bits: the nibble at bits 56..60 is folded
/// back into the low byte and then cleared.
pub fn elf(bytes: &[u8]) -> u64 {
    const HIGH_SHIFT: u32 = u64::BITS - 8;
    bytes.iter().fold(0u64, |hash, &b| {
        let mut hash = (hash << 4).wrapping_add(u64::from(b));
        let high = hash & (0xF << HIGH_SHIFT);
        if high != 0 {
            hash ^= high >> HIGH_SHIFT;
        }
        hash & !high
    })
}

/// CRC-32C (Castagnoli) of the first 8 bytes, zero-padded, seeded with 0
/// and without the final inversion. Matches the SSE4.2 `crc32` instruction
/// applied to one little-endian 64-bit word.
pub fn crc32c_first_word(bytes: &[u8]) -> u64 {
    let mut word = [0u8; 8];
    let len = bytes.len().min(word.len());
    word[..len].copy_from_slice(&bytes[..len]);
    u64::from(crc32c_update(0, &word))
}

const CRC32C_POLY: u32 = 0x82F6_3B78;

const CRC32C_TABLE: [u32; 256] = {
    let mut table = [0u32; 256];
    let mut i = 0;
    while i < 256 {
        let mut crc = i as u32;
        let mut bit = 0;
        while bit < 8 {
            crc = if crc & 1 == 1 {
                (crc >> 1) ^ CRC32C_POLY
            } else {
                crc >> 1
            };
            bit += 1;
        }
        table[i] = crc;
        i += 1;
    }
    table
};

/// Reflected CRC-32C update with no pre or post conditioning.
fn crc32c_update(crc: u32, bytes: &[u8]) -> u32 {
    bytes.iter().fold(crc, |crc, &b| {
        CRC32C_TABLE[((crc ^ u32::from(b)) & 0xFF) as usize] ^ (crc >> 8)
    })
}

/// Names the catalogue entries, for drivers and benchmarks.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum HashKind {
    /// [`zero`]
    Zero,
    /// [`first_byte`]
    FirstByte,
    /// [`length`]
    Length,
    /// [`byte_sum`]
    ByteSum,
    /// [`rotate_xor`]
    RotateXor,
    /// [`elf`]
    Elf,
    /// [`crc32c_first_word`]
    Crc32c,
}

impl HashKind {
    /// Every kind, worst distribution first.
    pub const ALL: [HashKind; 7] = [
        HashKind::Zero,
        HashKind::FirstByte,
        HashKind::Length,
        HashKind::ByteSum,
        HashKind::RotateXor,
        HashKind::Elf,
        HashKind::Crc32c,
    ];

    /// Short lowercase name, as accepted by [`FromStr`].
    pub fn name(self) -> &'static str {
        match self {
            HashKind::Zero => "zero",
            HashKind::FirstByte => "first-byte",
            HashKind::Length => "length",
            HashKind::ByteSum => "byte-sum",
            HashKind::RotateXor => "rotate-xor",
            HashKind::Elf => "elf",
            HashKind::Crc32c => "crc32c",
        }
    }

    /// The underlying byte hash function.
    pub fn function(self) -> fn(&[u8]) -> u64 {
        match self {
            HashKind::Zero => zero,
            HashKind::FirstByte => first_byte,
            HashKind::Length => length,
            HashKind::ByteSum => byte_sum,
            HashKind::RotateXor => rotate_xor,
            HashKind::Elf => elf,
            HashKind::Crc32c => crc32c_first_word,
        }
    }

    /// A table hasher for any byte-addressable key.
    pub fn hasher(self) -> ByteHash {
        ByteHash(self.function())
    }
}

impl fmt::Display for HashKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Returned when parsing an unknown [`HashKind`] name.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UnknownHashKind(pub String);

impl fmt::Display for UnknownHashKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown hash function {:?}", self.0)
    }
}

impl std::error::Error for UnknownHashKind {}

impl FromStr for HashKind {
    type Err = UnknownHashKind;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        HashKind::ALL
            .into_iter()
            .find(|kind| kind.name() == s)
            .ok_or_else(|| UnknownHashKind(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trivial_hashes() {
        assert_eq!(zero(b"anything"), 0);
        assert_eq!(first_byte(b"abc"), 97);
        assert_eq!(first_byte(b""), 0);
        assert_eq!(length(b"abcd"), 4);
        assert_eq!(byte_sum(b"ab"), 97 + 98);
        assert_eq!(byte_sum(&[0xFF; 3]), 765);
    }

    #[test]
    fn rotate_xor_skips_first_byte() {
        assert_eq!(rotate_xor(b""), 0);
        assert_eq!(rotate_xor(b"a"), 0);
        assert_eq!(rotate_xor(b"ab"), 98);
        assert_eq!(rotate_xor(b"abc"), (98 << 1) ^ 99);
        assert_eq!(rotate_xor(b"xbc"), rotate_xor(b"abc"));
    }

    #[test]
    fn rotate_xor_wraps_top_bit() {
        let mut bytes = vec![0u8, 1];
        bytes.extend_from_slice(&[0; 64]);
        // 1 rotated 64 times returns to bit 0.
        assert_eq!(rotate_xor(&bytes), 1);
    }

    #[test]
    fn elf_small_inputs() {
        assert_eq!(elf(b""), 0);
        assert_eq!(elf(b"a"), 97);
        assert_eq!(elf(b"ab"), 97 * 16 + 98);
    }

    #[test]
    fn elf_keeps_top_nibble_clear() {
        let long = [0xFFu8; 64];
        assert_eq!(elf(&long) >> 60, 0);
    }

    #[test]
    fn crc32c_matches_check_value() {
        // Standard CRC-32C check value, with the usual conditioning.
        assert_eq!(!crc32c_update(!0, b"123456789"), 0xE306_9283);
    }

    #[test]
    fn crc32c_reads_first_word_only() {
        assert_eq!(crc32c_first_word(b""), 0);
        assert_eq!(crc32c_first_word(b"\0\0\0\0\0\0\0\0"), 0);
        assert_eq!(
            crc32c_first_word(b"abcdefgh-one"),
            crc32c_first_word(b"abcdefgh-two")
        );
        assert_ne!(crc32c_first_word(b"abc"), crc32c_first_word(b"abd"));
        assert_eq!(crc32c_first_word(b"abc"), crc32c_first_word(b"abc\0\0"));
        assert!(crc32c_first_word(b"anything") <= u64::from(u32::MAX));
    }

    #[test]
    fn kinds_round_trip_through_names() {
        for kind in HashKind::ALL {
            assert_eq!(kind.name().parse::<HashKind>(), Ok(kind));
            assert_eq!(kind.to_string(), kind.name());
        }
        assert_eq!(
            "md5".parse::<HashKind>(),
            Err(UnknownHashKind("md5".to_string()))
        );
    }

    #[test]
    fn kind_dispatches_to_function() {
        assert_eq!((HashKind::Length.function())(b"four"), 4);
        assert_eq!(HashKind::Elf.function()(b"a"), elf(b"a"));
    }
}
