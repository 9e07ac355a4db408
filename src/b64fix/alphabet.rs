use super::error::Error;

/// A 64-symbol Base64 table plus its pad symbol.
///
/// Indexed by a 6-bit value; the pad symbol is never one of the 64.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alphabet {
    symbols: [u8; 64],
    pad: u8,
}

impl Alphabet {
    /// RFC 4648 standard alphabet with `=` padding.
    pub const STANDARD: Alphabet = Alphabet {
        symbols: *b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789+/",
        pad: b'=',
    };

    /// Build a custom alphabet. Symbols must be distinct and must not
    /// include the pad.
    pub fn new(symbols: [u8; 64], pad: u8) -> Result<Self, Error> {
        let mut seen = [false; 256];
        for (i, &b) in symbols.iter().enumerate() {
            if seen[b as usize] {
                return Err(Error::InvalidAlphabet(format!(
                    "symbol 0x{:02x} repeated at index {}",
                    b, i
                )));
            }
            seen[b as usize] = true;
        }
        if seen[pad as usize] {
            return Err(Error::InvalidAlphabet(format!(
                "pad 0x{:02x} is also an alphabet symbol",
                pad
            )));
        }
        Ok(Alphabet { symbols, pad })
    }

    /// Symbol for a 6-bit index. Bits above the low six are ignored.
    #[inline]
    pub fn symbol(&self, index: u8) -> u8 {
        self.symbols[(index & 0x3f) as usize]
    }

    #[inline]
    pub fn pad(&self) -> u8 {
        self.pad
    }

    pub fn symbols(&self) -> &[u8; 64] {
        &self.symbols
    }

    /// True for the 64 symbols and the pad.
    #[inline]
    pub fn contains(&self, b: u8) -> bool {
        b == self.pad || self.symbols.contains(&b)
    }
}

impl Default for Alphabet {
    fn default() -> Self {
        Alphabet::STANDARD
    }
}
