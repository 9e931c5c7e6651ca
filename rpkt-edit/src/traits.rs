/// Offsets of the protocol headers inside a packet buffer.
///
/// Each marker is either unset or an offset relative to the first data byte
/// of the buffer: `l2` is the Ethernet header, `l3` the network header, `l4`
/// the transport header and `l7` the transport payload.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Layers {
    /// Start of the Ethernet header.
    pub l2: Option<usize>,
    /// Start of the network header.
    pub l3: Option<usize>,
    /// Start of the transport header.
    pub l4: Option<usize>,
    /// Start of the transport payload.
    pub l7: Option<usize>,
}

impl Layers {
    /// Unset all the markers.
    #[inline]
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Move every set marker `cnt` bytes towards the end of the buffer.
    ///
    /// Used after `cnt` bytes are prepended, so the markers keep pointing at
    /// the same header bytes.
    #[inline]
    pub fn shift_up(&mut self, cnt: usize) {
        for marker in self.markers_mut() {
            if let Some(off) = marker {
                *off += cnt;
            }
        }
    }

    /// Move every set marker `cnt` bytes towards the start of the buffer.
    ///
    /// Used after `cnt` bytes are removed from the front. Markers that pointed
    /// into the removed region are clamped to the new start.
    #[inline]
    pub fn shift_down(&mut self, cnt: usize) {
        for marker in self.markers_mut() {
            if let Some(off) = marker {
                *off = off.saturating_sub(cnt);
            }
        }
    }

    /// Check that the set markers are non-decreasing and lie in `[0, len]`.
    pub fn is_valid(&self, len: usize) -> bool {
        let mut last = 0;
        for off in [self.l2, self.l3, self.l4, self.l7].into_iter().flatten() {
            if off < last || off > len {
                return false;
            }
            last = off;
        }
        true
    }

    fn markers_mut(&mut self) -> [&mut Option<usize>; 4] {
        [&mut self.l2, &mut self.l3, &mut self.l4, &mut self.l7]
    }
}

/// The packet buffer interface consumed by the composition, tagging and
/// rewrite operations of this crate.
///
/// A buffer owns a contiguous byte region with reserved space before the data
/// (headroom, reported by `front_capacity`) and after it (tailroom, reported
/// by `capacity`).
pub trait PktBuf {
    /// The data bytes.
    fn data(&self) -> &[u8];

    /// The mutable data bytes.
    fn data_mut(&mut self) -> &mut [u8];

    /// Number of data bytes.
    #[inline]
    fn len(&self) -> usize {
        self.data().len()
    }

    /// Whether the buffer holds no data.
    #[inline]
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Size of the headroom.
    fn front_capacity(&self) -> usize;

    /// Size of the tailroom.
    fn capacity(&self) -> usize;

    /// The layer markers.
    fn layers(&self) -> &Layers;

    /// The mutable layer markers.
    fn layers_mut(&mut self) -> &mut Layers;

    /// Drop all the data and the headroom, and unset the layer markers.
    fn clear(&mut self);

    /// Make sure the tailroom is at least `cnt` bytes.
    fn reserve(&mut self, cnt: usize);

    /// Turn `cnt` bytes of tailroom into headroom.
    ///
    /// # Panics
    /// Panics if the buffer is not empty.
    fn reserve_front(&mut self, cnt: usize);

    /// Append `cnt` bytes and return them. Their content is unspecified.
    fn extend(&mut self, cnt: usize) -> &mut [u8];

    /// Append `cnt` zero bytes and return them.
    #[inline]
    fn extend_zeroed(&mut self, cnt: usize) -> &mut [u8] {
        let data = self.extend(cnt);
        data.fill(0);
        data
    }

    /// Prepend `cnt` bytes taken from the headroom and return them. Their
    /// content is unspecified. Set layer markers move by `cnt`.
    ///
    /// # Panics
    /// Panics if the headroom is smaller than `cnt`.
    fn extend_front(&mut self, cnt: usize) -> &mut [u8];

    /// Remove `cnt` bytes from the front, turning them into headroom. Set
    /// layer markers move back by `cnt`.
    ///
    /// # Panics
    /// Panics if `cnt` exceeds the data length.
    fn trim_front(&mut self, cnt: usize);
}

impl<T: PktBuf + ?Sized> PktBuf for &mut T {
    #[inline]
    fn data(&self) -> &[u8] {
        (**self).data()
    }

    #[inline]
    fn data_mut(&mut self) -> &mut [u8] {
        (**self).data_mut()
    }

    #[inline]
    fn front_capacity(&self) -> usize {
        (**self).front_capacity()
    }

    #[inline]
    fn capacity(&self) -> usize {
        (**self).capacity()
    }

    #[inline]
    fn layers(&self) -> &Layers {
        (**self).layers()
    }

    #[inline]
    fn layers_mut(&mut self) -> &mut Layers {
        (**self).layers_mut()
    }

    #[inline]
    fn clear(&mut self) {
        (**self).clear()
    }

    #[inline]
    fn reserve(&mut self, cnt: usize) {
        (**self).reserve(cnt)
    }

    #[inline]
    fn reserve_front(&mut self, cnt: usize) {
        (**self).reserve_front(cnt)
    }

    #[inline]
    fn extend(&mut self, cnt: usize) -> &mut [u8] {
        (**self).extend(cnt)
    }

    #[inline]
    fn extend_front(&mut self, cnt: usize) -> &mut [u8] {
        (**self).extend_front(cnt)
    }

    #[inline]
    fn trim_front(&mut self, cnt: usize) {
        (**self).trim_front(cnt)
    }
}
