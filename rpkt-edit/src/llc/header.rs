#![allow(missing_docs)]

use byteorder::{ByteOrder, NetworkEndian};

/// A constant that defines the fixed byte length of the combined 802.2 LLC
/// and SNAP headers.
pub const LLC_SNAP_HEADER_LEN: usize = 8;

/// A view of an LLC header followed by a SNAP header.
///
/// ```text
/// | dsap (1) | ssap (1) | cntl (1) | oui (3) | snap type (2) |
/// ```
#[derive(Debug, Clone, Copy)]
pub struct LlcSnapHeader<T> {
    buf: T,
}
impl<T: AsRef<[u8]>> LlcSnapHeader<T> {
    #[inline]
    pub fn parse_unchecked(buf: T) -> Self {
        Self { buf }
    }
    #[inline]
    pub fn buf(&self) -> &T {
        &self.buf
    }
    #[inline]
    pub fn parse(buf: T) -> Result<Self, T> {
        let remaining_len = buf.as_ref().len();
        if remaining_len < LLC_SNAP_HEADER_LEN {
            return Err(buf);
        }
        let container = Self { buf };
        Ok(container)
    }
    #[inline]
    pub fn dsap(&self) -> u8 {
        self.buf.as_ref()[0]
    }
    #[inline]
    pub fn ssap(&self) -> u8 {
        self.buf.as_ref()[1]
    }
    #[inline]
    pub fn cntl(&self) -> u8 {
        self.buf.as_ref()[2]
    }
    /// The 24-bit organization id.
    #[inline]
    pub fn oui(&self) -> u32 {
        NetworkEndian::read_u24(&self.buf.as_ref()[3..6])
    }
    #[inline]
    pub fn snap_type(&self) -> u16 {
        NetworkEndian::read_u16(&self.buf.as_ref()[6..8])
    }
}
impl<T: AsMut<[u8]>> LlcSnapHeader<T> {
    #[inline]
    pub fn set_dsap(&mut self, value: u8) {
        self.buf.as_mut()[0] = value;
    }
    #[inline]
    pub fn set_ssap(&mut self, value: u8) {
        self.buf.as_mut()[1] = value;
    }
    #[inline]
    pub fn set_cntl(&mut self, value: u8) {
        self.buf.as_mut()[2] = value;
    }
    /// Write the low 24 bits of `value` as the organization id.
    #[inline]
    pub fn set_oui(&mut self, value: u32) {
        NetworkEndian::write_u24(&mut self.buf.as_mut()[3..6], value & 0xffffff);
    }
    #[inline]
    pub fn set_snap_type(&mut self, value: u16) {
        NetworkEndian::write_u16(&mut self.buf.as_mut()[6..8], value);
    }
}
