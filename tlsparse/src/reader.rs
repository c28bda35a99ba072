use crate::Malformed;

/// Forward-only cursor over a borrowed byte slice holding big-endian, length-prefixed data.
///
/// Every read either consumes exactly the bytes it claims from the front of the
/// buffer or fails with [`Malformed`] and consumes nothing.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Reader<'a>(&'a [u8]);

impl<'a> Reader<'a> {
    /// Creates a `Reader` positioned at the first byte of `input`.
    #[must_use]
    pub const fn new(input: &'a [u8]) -> Self {
        Self(input)
    }

    /// Returns the number of bytes that have not been read yet.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` when every byte has been read.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns the unread bytes without consuming them.
    #[must_use]
    pub const fn as_slice(&self) -> &'a [u8] {
        self.0
    }

    /// Consumes exactly `n` bytes.
    ///
    /// # Errors
    /// If fewer than `n` bytes remain.
    pub fn read_bytes(&mut self, n: usize) -> Result<&'a [u8], Malformed> {
        if n > self.0.len() {
            return Err(Malformed::Truncated {
                required: n,
                remaining: self.0.len(),
            });
        }
        let (head, tail) = self.0.split_at(n);
        self.0 = tail;
        Ok(head)
    }

    // `n` is at most 8, so the value always fits.
    fn read_be(&mut self, n: usize) -> Result<u64, Malformed> {
        let bytes = self.read_bytes(n)?;
        Ok(bytes
            .iter()
            .fold(0u64, |acc, byte| (acc << 8) | u64::from(*byte)))
    }

    /// Reads one byte.
    ///
    /// # Errors
    /// If the buffer is empty.
    pub fn read_u8(&mut self) -> Result<u8, Malformed> {
        Ok(self.read_bytes(1)?[0])
    }

    /// Reads a big-endian `u16`.
    ///
    /// # Errors
    /// If fewer than 2 bytes remain.
    pub fn read_u16(&mut self) -> Result<u16, Malformed> {
        let bytes = self.read_bytes(2)?;
        Ok(u16::from_be_bytes([bytes[0], bytes[1]]))
    }

    /// Reads a big-endian 24 bit unsigned integer.
    ///
    /// # Errors
    /// If fewer than 3 bytes remain.
    #[allow(clippy::cast_possible_truncation)]
    pub fn read_u24(&mut self) -> Result<u32, Malformed> {
        Ok(self.read_be(3)? as u32)
    }

    /// Reads a big-endian `u32`.
    ///
    /// # Errors
    /// If fewer than 4 bytes remain.
    pub fn read_u32(&mut self) -> Result<u32, Malformed> {
        let bytes = self.read_bytes(4)?;
        Ok(u32::from_be_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]))
    }

    /// Reads a big-endian 48 bit unsigned integer.
    ///
    /// # Errors
    /// If fewer than 6 bytes remain.
    pub fn read_u48(&mut self) -> Result<u64, Malformed> {
        self.read_be(6)
    }

    /// Reads a big-endian `u64`.
    ///
    /// # Errors
    /// If fewer than 8 bytes remain.
    pub fn read_u64(&mut self) -> Result<u64, Malformed> {
        self.read_be(8)
    }

    // The prefix is read from a copy so a short payload leaves `self` untouched.
    #[allow(clippy::cast_possible_truncation)]
    fn read_length_prefixed(&mut self, prefix_bytes: usize) -> Result<Reader<'a>, Malformed> {
        let mut rest = *self;
        let len = rest.read_be(prefix_bytes)? as usize;
        let body = rest.read_bytes(len)?;
        *self = rest;
        Ok(Reader(body))
    }

    /// Reads an 8 bit length `N` followed by `N` bytes, returning a `Reader` over those `N` bytes.
    ///
    /// # Errors
    /// If the length or the `N` bytes following it are not available.
    pub fn read_u8_length_prefixed(&mut self) -> Result<Reader<'a>, Malformed> {
        self.read_length_prefixed(1)
    }

    /// Reads a 16 bit length `N` followed by `N` bytes, returning a `Reader` over those `N` bytes.
    ///
    /// # Errors
    /// If the length or the `N` bytes following it are not available.
    pub fn read_u16_length_prefixed(&mut self) -> Result<Reader<'a>, Malformed> {
        self.read_length_prefixed(2)
    }

    /// Reads a 24 bit length `N` followed by `N` bytes, returning a `Reader` over those `N` bytes.
    ///
    /// # Errors
    /// If the length or the `N` bytes following it are not available.
    pub fn read_u24_length_prefixed(&mut self) -> Result<Reader<'a>, Malformed> {
        self.read_length_prefixed(3)
    }

    /// Checks that nothing is left to read.
    ///
    /// # Errors
    /// If any bytes remain.
    pub fn finish(&self) -> Result<(), Malformed> {
        if self.0.is_empty() {
            Ok(())
        } else {
            Err(Malformed::TrailingBytes {
                remaining: self.0.len(),
            })
        }
    }
}
