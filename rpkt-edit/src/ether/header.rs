#![allow(missing_docs)]

use byteorder::{ByteOrder, NetworkEndian};

use super::{EtherAddr, EtherType};

/// A constant that defines the fixed byte length of the Ethernet II header.
pub const ETHER_HEADER_LEN: usize = 14;

/// A view of an Ethernet header at the start of `buf`.
///
/// The type field doubles as the 802.3 length field for LLC framed packets,
/// see [`EtherHeader::packet_len`].
#[derive(Debug, Clone, Copy)]
pub struct EtherHeader<T> {
    buf: T,
}
impl<T: AsRef<[u8]>> EtherHeader<T> {
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
        if remaining_len < ETHER_HEADER_LEN {
            return Err(buf);
        }
        let container = Self { buf };
        Ok(container)
    }
    #[inline]
    pub fn dst_addr(&self) -> EtherAddr {
        EtherAddr::from_bytes(&self.buf.as_ref()[0..6])
    }
    #[inline]
    pub fn src_addr(&self) -> EtherAddr {
        EtherAddr::from_bytes(&self.buf.as_ref()[6..12])
    }
    #[inline]
    pub fn ethertype(&self) -> EtherType {
        EtherType::from(NetworkEndian::read_u16(&self.buf.as_ref()[12..14]))
    }
    /// The type field read as an 802.3 length.
    #[inline]
    pub fn packet_len(&self) -> u16 {
        NetworkEndian::read_u16(&self.buf.as_ref()[12..14])
    }
}
impl<T: AsMut<[u8]>> EtherHeader<T> {
    #[inline]
    pub fn set_dst_addr(&mut self, value: EtherAddr) {
        (&mut self.buf.as_mut()[0..6]).copy_from_slice(value.as_bytes());
    }
    #[inline]
    pub fn set_src_addr(&mut self, value: EtherAddr) {
        (&mut self.buf.as_mut()[6..12]).copy_from_slice(value.as_bytes());
    }
    #[inline]
    pub fn set_ethertype(&mut self, value: EtherType) {
        NetworkEndian::write_u16(&mut self.buf.as_mut()[12..14], u16::from(value));
    }
    #[inline]
    pub fn set_packet_len(&mut self, value: u16) {
        NetworkEndian::write_u16(&mut self.buf.as_mut()[12..14], value);
    }
}
