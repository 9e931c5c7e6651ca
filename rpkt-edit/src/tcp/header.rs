#![allow(missing_docs)]

use byteorder::{ByteOrder, NetworkEndian};

/// A constant that defines the fixed byte length of the Tcp header without
/// options.
pub const TCP_HEADER_LEN: usize = 20;

/// A view of a TCP header at the start of `buf`.
#[derive(Debug, Clone, Copy)]
pub struct TcpHeader<T> {
    buf: T,
}
impl<T: AsRef<[u8]>> TcpHeader<T> {
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
        if remaining_len < TCP_HEADER_LEN {
            return Err(buf);
        }
        let container = Self { buf };
        if ((container.header_len() as usize) < TCP_HEADER_LEN)
            || ((container.header_len() as usize) > remaining_len)
        {
            return Err(container.buf);
        }
        Ok(container)
    }
    #[inline]
    pub fn src_port(&self) -> u16 {
        NetworkEndian::read_u16(&self.buf.as_ref()[0..2])
    }
    #[inline]
    pub fn dst_port(&self) -> u16 {
        NetworkEndian::read_u16(&self.buf.as_ref()[2..4])
    }
    #[inline]
    pub fn seq_num(&self) -> u32 {
        NetworkEndian::read_u32(&self.buf.as_ref()[4..8])
    }
    #[inline]
    pub fn ack_num(&self) -> u32 {
        NetworkEndian::read_u32(&self.buf.as_ref()[8..12])
    }
    /// The control bits in byte 13: CWR, ECE, URG, ACK, PSH, RST, SYN, FIN
    /// from the most significant bit down.
    #[inline]
    pub fn flags(&self) -> u8 {
        self.buf.as_ref()[13]
    }
    #[inline]
    pub fn window_size(&self) -> u16 {
        NetworkEndian::read_u16(&self.buf.as_ref()[14..16])
    }
    #[inline]
    pub fn checksum(&self) -> u16 {
        NetworkEndian::read_u16(&self.buf.as_ref()[16..18])
    }
    #[inline]
    pub fn urgent_pointer(&self) -> u16 {
        NetworkEndian::read_u16(&self.buf.as_ref()[18..20])
    }
    /// The header length in bytes, the data offset field times 4.
    #[inline]
    pub fn header_len(&self) -> u8 {
        (self.buf.as_ref()[12] >> 4) * 4
    }
}
impl<T: AsMut<[u8]>> TcpHeader<T> {
    #[inline]
    pub fn set_src_port(&mut self, value: u16) {
        NetworkEndian::write_u16(&mut self.buf.as_mut()[0..2], value);
    }
    #[inline]
    pub fn set_dst_port(&mut self, value: u16) {
        NetworkEndian::write_u16(&mut self.buf.as_mut()[2..4], value);
    }
    #[inline]
    pub fn set_flags(&mut self, value: u8) {
        self.buf.as_mut()[13] = value;
    }
    #[inline]
    pub fn set_checksum(&mut self, value: u16) {
        NetworkEndian::write_u16(&mut self.buf.as_mut()[16..18], value);
    }
}
