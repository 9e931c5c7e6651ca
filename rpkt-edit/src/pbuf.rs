use alloc::vec::Vec;

use crate::{Layers, PktBuf};

/// A heap-backed packet buffer with headroom and tailroom.
///
/// The backing storage is laid out as `[headroom | data | tailroom]`. Growing
/// the tailroom may reallocate, but the headroom is only ever consumed, so a
/// prepend never moves the data.
#[derive(Debug, Clone, Default)]
pub struct Pbuf {
    buf: Vec<u8>,
    data_off: usize,
    data_len: usize,
    layers: Layers,
}

impl Pbuf {
    /// Create an empty buffer without any storage.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty buffer with `headroom` bytes of headroom and `tailroom`
    /// bytes of tailroom.
    pub fn with_capacity(headroom: usize, tailroom: usize) -> Self {
        let mut pbuf = Self {
            buf: Vec::with_capacity(headroom + tailroom),
            ..Self::default()
        };
        pbuf.reserve(headroom + tailroom);
        pbuf.reserve_front(headroom);
        pbuf
    }

    /// Create a buffer holding a copy of `data`, preceded by `headroom` bytes
    /// of headroom.
    pub fn from_slice(headroom: usize, data: &[u8]) -> Self {
        let mut pbuf = Self::with_capacity(headroom, data.len());
        pbuf.extend(data.len()).copy_from_slice(data);
        pbuf
    }
}

impl PktBuf for Pbuf {
    #[inline]
    fn data(&self) -> &[u8] {
        &self.buf[self.data_off..self.data_off + self.data_len]
    }

    #[inline]
    fn data_mut(&mut self) -> &mut [u8] {
        &mut self.buf[self.data_off..self.data_off + self.data_len]
    }

    #[inline]
    fn len(&self) -> usize {
        self.data_len
    }

    #[inline]
    fn front_capacity(&self) -> usize {
        self.data_off
    }

    #[inline]
    fn capacity(&self) -> usize {
        self.buf.len() - self.data_off - self.data_len
    }

    #[inline]
    fn layers(&self) -> &Layers {
        &self.layers
    }

    #[inline]
    fn layers_mut(&mut self) -> &mut Layers {
        &mut self.layers
    }

    fn clear(&mut self) {
        self.data_off = 0;
        self.data_len = 0;
        self.layers.clear();
    }

    fn reserve(&mut self, cnt: usize) {
        if self.capacity() < cnt {
            self.buf.resize(self.data_off + self.data_len + cnt, 0);
        }
    }

    fn reserve_front(&mut self, cnt: usize) {
        assert!(
            self.data_len == 0,
            "headroom can only be reserved in an empty buffer"
        );
        self.reserve(cnt);
        self.data_off += cnt;
    }

    fn extend(&mut self, cnt: usize) -> &mut [u8] {
        self.reserve(cnt);
        let start = self.data_off + self.data_len;
        self.data_len += cnt;
        &mut self.buf[start..start + cnt]
    }

    fn extend_front(&mut self, cnt: usize) -> &mut [u8] {
        assert!(
            self.front_capacity() >= cnt,
            "prepending {} bytes with only {} bytes of headroom",
            cnt,
            self.front_capacity()
        );
        self.data_off -= cnt;
        self.data_len += cnt;
        self.layers.shift_up(cnt);
        &mut self.buf[self.data_off..self.data_off + cnt]
    }

    fn trim_front(&mut self, cnt: usize) {
        assert!(cnt <= self.data_len);
        self.data_off += cnt;
        self.data_len -= cnt;
        self.layers.shift_down(cnt);
    }
}
