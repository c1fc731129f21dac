use crate::error::{HuffmanError, Result};

/// Bits packed MSB-first into bytes.
///
/// `trailing_bits` is the number of meaningful bits in the last byte
/// (`1..=8`), or `0` when the stream is empty. Everything after it in the
/// last byte is zero padding.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Bitstream {
    bytes: Vec<u8>,
    trailing_bits: u8,
}

impl Bitstream {
    pub fn new() -> Self {
        Bitstream {
            bytes: Vec::new(),
            trailing_bits: 0,
        }
    }

    pub fn with_capacity(bits: usize) -> Self {
        Bitstream {
            bytes: Vec::with_capacity(bits.div_ceil(8)),
            trailing_bits: 0,
        }
    }

    /// Reassembles a stream from a stored buffer and its valid-bit count.
    pub fn from_parts(bytes: Vec<u8>, trailing_bits: u8) -> Result<Self> {
        let valid = if bytes.is_empty() {
            trailing_bits == 0
        } else {
            (1..=8).contains(&trailing_bits)
        };
        if !valid {
            return Err(HuffmanError::InvalidTrailingBits {
                bytes: bytes.len(),
                trailing: trailing_bits,
            });
        }

        let mut stream = Bitstream {
            bytes,
            trailing_bits,
        };
        // Clear whatever sits in the padding so equal streams compare equal.
        if let Some(last) = stream.bytes.last_mut() {
            *last &= 0xFFu8 << (8 - trailing_bits as u32);
        }
        Ok(stream)
    }

    pub fn into_parts(self) -> (Vec<u8>, u8) {
        (self.bytes, self.trailing_bits)
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn trailing_bits(&self) -> u8 {
        self.trailing_bits
    }

    /// Number of valid bits.
    pub fn len(&self) -> usize {
        match self.bytes.len() {
            0 => 0,
            n => (n - 1) * 8 + self.trailing_bits as usize,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    pub fn push_bit(&mut self, bit: bool) {
        if self.bytes.is_empty() || self.trailing_bits == 8 {
            self.bytes.push(0);
            self.trailing_bits = 0;
        }
        if bit {
            let last = self.bytes.len() - 1;
            self.bytes[last] |= 1 << (7 - self.trailing_bits);
        }
        self.trailing_bits += 1;
    }

    pub fn get(&self, index: usize) -> Option<bool> {
        if index >= self.len() {
            return None;
        }
        let byte = self.bytes[index / 8];
        Some((byte >> (7 - index % 8)) & 1 == 1)
    }

    pub fn iter(&self) -> impl Iterator<Item = bool> + '_ {
        (0..self.len()).filter_map(move |i| self.get(i))
    }
}
