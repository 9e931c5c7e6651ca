#![allow(missing_docs)]

use byteorder::{ByteOrder, NetworkEndian};

use super::VlanTci;
use crate::ether::{EtherAddr, EtherType};

/// Length of an 802.1Q tag.
pub const VLAN_HEADER_LEN: usize = 4;

/// A constant that defines the fixed byte length of an Ethernet header
/// carrying one 802.1Q tag.
pub const VLAN_ETH_HEADER_LEN: usize = 18;

/// A view of an 802.1Q tagged Ethernet header at the start of `buf`.
///
/// Layout: destination, source, tag protocol identifier, TCI and the
/// Ethertype of the encapsulated frame.
#[derive(Debug, Clone, Copy)]
pub struct VlanEtherHeader<T> {
    buf: T,
}
impl<T: AsRef<[u8]>> VlanEtherHeader<T> {
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
        if remaining_len < VLAN_ETH_HEADER_LEN {
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
    pub fn tpid(&self) -> EtherType {
        EtherType::from(NetworkEndian::read_u16(&self.buf.as_ref()[12..14]))
    }
    #[inline]
    pub fn tci(&self) -> VlanTci {
        VlanTci::from(NetworkEndian::read_u16(&self.buf.as_ref()[14..16]))
    }
    #[inline]
    pub fn inner_ethertype(&self) -> EtherType {
        EtherType::from(NetworkEndian::read_u16(&self.buf.as_ref()[16..18]))
    }
}
impl<T: AsMut<[u8]>> VlanEtherHeader<T> {
    #[inline]
    pub fn set_dst_addr(&mut self, value: EtherAddr) {
        (&mut self.buf.as_mut()[0..6]).copy_from_slice(value.as_bytes());
    }
    #[inline]
    pub fn set_src_addr(&mut self, value: EtherAddr) {
        (&mut self.buf.as_mut()[6..12]).copy_from_slice(value.as_bytes());
    }
    #[inline]
    pub fn set_tpid(&mut self, value: EtherType) {
        NetworkEndian::write_u16(&mut self.buf.as_mut()[12..14], u16::from(value));
    }
    #[inline]
    pub fn set_tci(&mut self, value: VlanTci) {
        NetworkEndian::write_u16(&mut self.buf.as_mut()[14..16], u16::from(value));
    }
    #[inline]
    pub fn set_inner_ethertype(&mut self, value: EtherType) {
        NetworkEndian::write_u16(&mut self.buf.as_mut()[16..18], u16::from(value));
    }
}
