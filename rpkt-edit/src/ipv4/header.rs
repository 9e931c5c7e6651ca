#![allow(missing_docs)]

use byteorder::{ByteOrder, NetworkEndian};

use super::{IpProtocol, Ipv4Addr};

/// A constant that defines the fixed byte length of the Ipv4 header without
/// options.
pub const IPV4_HEADER_LEN: usize = 20;

/// A view of an IPv4 header at the start of `buf`.
#[derive(Debug, Clone, Copy)]
pub struct Ipv4Header<T> {
    buf: T,
}
impl<T: AsRef<[u8]>> Ipv4Header<T> {
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
        if remaining_len < IPV4_HEADER_LEN {
            return Err(buf);
        }
        let container = Self { buf };
        if ((container.header_len() as usize) < IPV4_HEADER_LEN)
            || ((container.header_len() as usize) > remaining_len)
        {
            return Err(container.buf);
        }
        Ok(container)
    }
    #[inline]
    pub fn tos(&self) -> u8 {
        self.buf.as_ref()[1]
    }
    #[inline]
    pub fn packet_len(&self) -> u16 {
        NetworkEndian::read_u16(&self.buf.as_ref()[2..4])
    }
    #[inline]
    pub fn ttl(&self) -> u8 {
        self.buf.as_ref()[8]
    }
    #[inline]
    pub fn protocol(&self) -> IpProtocol {
        IpProtocol::from(self.buf.as_ref()[9])
    }
    #[inline]
    pub fn checksum(&self) -> u16 {
        NetworkEndian::read_u16(&self.buf.as_ref()[10..12])
    }
    #[inline]
    pub fn src_addr(&self) -> Ipv4Addr {
        Ipv4Addr::from(NetworkEndian::read_u32(&self.buf.as_ref()[12..16]))
    }
    #[inline]
    pub fn dst_addr(&self) -> Ipv4Addr {
        Ipv4Addr::from(NetworkEndian::read_u32(&self.buf.as_ref()[16..20]))
    }
    /// The header length in bytes, the IHL field times 4.
    #[inline]
    pub fn header_len(&self) -> u8 {
        (self.buf.as_ref()[0] & 0xf) * 4
    }
}
impl<T: AsMut<[u8]>> Ipv4Header<T> {
    #[inline]
    pub fn set_tos(&mut self, value: u8) {
        self.buf.as_mut()[1] = value;
    }
    #[inline]
    pub fn set_ttl(&mut self, value: u8) {
        self.buf.as_mut()[8] = value;
    }
    #[inline]
    pub fn set_checksum(&mut self, value: u16) {
        NetworkEndian::write_u16(&mut self.buf.as_mut()[10..12], value);
    }
    #[inline]
    pub fn set_src_addr(&mut self, value: Ipv4Addr) {
        NetworkEndian::write_u32(&mut self.buf.as_mut()[12..16], u32::from(value));
    }
    #[inline]
    pub fn set_dst_addr(&mut self, value: Ipv4Addr) {
        NetworkEndian::write_u32(&mut self.buf.as_mut()[16..20], u32::from(value));
    }
}
