//! Key representations.
//!
//! Hash functions in this crate work on raw bytes. [`KeyBytes`] exposes
//! those bytes for borrowed and owned strings, byte slices and the inline
//! [`FixedKey`].

use std::fmt;

/// Access to a key's content bytes.
pub trait KeyBytes {
    /// The bytes hashed and compared for this key.
    fn key_bytes(&self) -> &[u8];
}

impl KeyBytes for str {
    fn key_bytes(&self) -> &[u8] {
        self.as_bytes()
    }
}

impl KeyBytes for [u8] {
    fn key_bytes(&self) -> &[u8] {
        self
    }
}

impl KeyBytes for String {
    fn key_bytes(&self) -> &[u8] {
        self.as_bytes()
    }
}

impl KeyBytes for Vec<u8> {
    fn key_bytes(&self) -> &[u8] {
        self
    }
}

impl<const N: usize> KeyBytes for [u8; N] {
    fn key_bytes(&self) -> &[u8] {
        self
    }
}

impl<T: KeyBytes + ?Sized> KeyBytes for &T {
    fn key_bytes(&self) -> &[u8] {
        (**self).key_bytes()
    }
}

/// A key stored inline in a 64-byte, NUL-padded buffer.
///
/// Construction copies at most [`FixedKey::MAX_LEN`] bytes and stops at the
/// first NUL, so the buffer always ends in at least one NUL. Equality,
/// ordering and hashing use the whole buffer, which for padded keys is
/// the same as comparing content bytes.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct FixedKey {
    bytes: [u8; KEY_SIZE],
}

const KEY_SIZE: usize = 64;

impl FixedKey {
    /// Buffer size in bytes.
    pub const SIZE: usize = KEY_SIZE;

    /// Longest content that fits (one byte is kept for the terminator).
    pub const MAX_LEN: usize = Self::SIZE - 1;

    /// Copy `bytes` into a new key, truncating as described above.
    pub fn from_bytes(bytes: &[u8]) -> Self {
        let content = bytes.split(|&b| b == 0).next().unwrap_or_default();
        let len = content.len().min(Self::MAX_LEN);
        let mut buf = [0; Self::SIZE];
        buf[..len].copy_from_slice(&content[..len]);
        Self { bytes: buf }
    }

    /// Copy `text` into a new key. Truncation may split a multi-byte
    /// character.
    pub fn new(text: &str) -> Self {
        Self::from_bytes(text.as_bytes())
    }

    /// Content length, excluding the padding.
    pub fn len(&self) -> usize {
        self.bytes
            .iter()
            .position(|&b| b == 0)
            .unwrap_or(Self::SIZE)
    }

    /// Whether the key has no content.
    pub fn is_empty(&self) -> bool {
        self.bytes[0] == 0
    }

    /// The content bytes.
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes[..self.len()]
    }

    /// The whole padded buffer.
    pub fn as_padded(&self) -> &[u8; Self::SIZE] {
        &self.bytes
    }
}

impl Default for FixedKey {
    fn default() -> Self {
        Self {
            bytes: [0; Self::SIZE],
        }
    }
}

impl KeyBytes for FixedKey {
    fn key_bytes(&self) -> &[u8] {
        self.as_bytes()
    }
}

impl AsRef<[u8]> for FixedKey {
    fn as_ref(&self) -> &[u8] {
        self.as_bytes()
    }
}

impl From<&str> for FixedKey {
    fn from(text: &str) -> Self {
        Self::new(text)
    }
}

impl From<&[u8]> for FixedKey {
    fn from(bytes: &[u8]) -> Self {
        Self::from_bytes(bytes)
    }
}

impl fmt::Display for FixedKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&String::from_utf8_lossy(self.as_bytes()))
    }
}

impl fmt::Debug for FixedKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "FixedKey({:?})", String::from_utf8_lossy(self.as_bytes()))
    }
}
