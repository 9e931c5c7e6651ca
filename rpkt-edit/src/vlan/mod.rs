//! IEEE 802.1Q tagging.
//!
//! A frame is either untagged, with its Ethernet header at the start of the
//! buffer, or tagged, with a 4-byte tag inserted between the source address
//! and the Ethertype:
//!
//! ```text
//! untagged: | dst (6) | src (6) | type (2)                              |
//! tagged:   | dst (6) | src (6) | 0x8100 (2) | tci (2) | inner type (2) |
//! ```
//!
//! [`push_vlan`] moves a frame from the first shape to the second using the
//! buffer headroom, [`pop_vlan`] moves it back. [`VlanFrame`] classifies the
//! outermost header of a frame.

use core::fmt;

use crate::ether::{EtherAddr, EtherHeader, EtherType, ETHER_HEADER_LEN};
use crate::PktBuf;

mod header;
pub use header::{VlanEtherHeader, VLAN_ETH_HEADER_LEN, VLAN_HEADER_LEN};

/// The canonical format indicator bit of a TCI.
pub const VLAN_CFI: u16 = 0x1000;

/// The 16-bit tag control information of an 802.1Q tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct VlanTci(pub u16);

impl VlanTci {
    /// Build a TCI from a priority code point and a VLAN ID, with the CFI bit
    /// cleared.
    ///
    /// # Panics
    /// Panics if `pcp` exceeds 7 or `vid` exceeds 0xfff.
    pub fn new(pcp: u8, vid: u16) -> Self {
        assert!(pcp <= 0x7 && vid <= 0xfff);
        Self(((pcp as u16) << 13) | vid)
    }

    /// The 3-bit priority code point.
    #[inline]
    pub const fn pcp(&self) -> u8 {
        (self.0 >> 13) as u8
    }

    /// The canonical format indicator bit.
    #[inline]
    pub const fn cfi(&self) -> bool {
        self.0 & VLAN_CFI != 0
    }

    /// The 12-bit VLAN identifier.
    #[inline]
    pub const fn vid(&self) -> u16 {
        self.0 & 0xfff
    }
}

impl From<u16> for VlanTci {
    #[inline]
    fn from(value: u16) -> Self {
        Self(value)
    }
}

impl From<VlanTci> for u16 {
    #[inline]
    fn from(value: VlanTci) -> Self {
        value.0
    }
}

impl fmt::Display for VlanTci {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "vlan {} pcp {}", self.vid(), self.pcp())
    }
}

/// The outermost link layer header of a frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VlanFrame {
    /// A plain Ethernet header.
    Untagged {
        /// Destination address.
        dst: EtherAddr,
        /// Source address.
        src: EtherAddr,
        /// Ethertype, or 802.3 length.
        ethertype: EtherType,
    },
    /// An Ethernet header carrying an 802.1Q tag.
    Tagged {
        /// Destination address.
        dst: EtherAddr,
        /// Source address.
        src: EtherAddr,
        /// The tag control information.
        tci: VlanTci,
        /// Ethertype of the encapsulated frame.
        inner_ethertype: EtherType,
    },
}

impl VlanFrame {
    /// Classify the link layer header at the start of `data`.
    ///
    /// Returns `None` if `data` cannot hold the header it announces.
    pub fn parse(data: &[u8]) -> Option<Self> {
        let eth = EtherHeader::parse(data).ok()?;
        if eth.ethertype() != EtherType::VLAN {
            return Some(VlanFrame::Untagged {
                dst: eth.dst_addr(),
                src: eth.src_addr(),
                ethertype: eth.ethertype(),
            });
        }

        let veh = VlanEtherHeader::parse(data).ok()?;
        Some(VlanFrame::Tagged {
            dst: veh.dst_addr(),
            src: veh.src_addr(),
            tci: veh.tci(),
            inner_ethertype: veh.inner_ethertype(),
        })
    }
}

/// Insert an 802.1Q tag carrying `tci` in front of the Ethernet frame at the
/// start of `pkt`.
///
/// The CFI bit of `tci` is written as 0 and the inner Ethertype is the
/// frame's previous Ethertype, so pushing onto a tagged frame stacks a second
/// tag. `l2` is set to the new header, other markers keep pointing at their
/// headers.
///
/// # Panics
/// Panics if `l2` is set to anything but the data start, if `pkt` has less
/// than `VLAN_HEADER_LEN` bytes of headroom or if it holds less than an
/// Ethernet header.
pub fn push_vlan<B: PktBuf>(pkt: &mut B, tci: VlanTci) {
    assert_l2_at_start(pkt);

    let eth = match EtherHeader::parse(pkt.data()) {
        Ok(eth) => eth,
        Err(_) => panic!("push_vlan on a buffer without an ethernet header"),
    };
    let (dst, src, ethertype) = (eth.dst_addr(), eth.src_addr(), eth.ethertype());

    pkt.extend_front(VLAN_HEADER_LEN);

    let mut veh = VlanEtherHeader::parse_unchecked(pkt.data_mut());
    veh.set_dst_addr(dst);
    veh.set_src_addr(src);
    veh.set_tpid(EtherType::VLAN);
    veh.set_tci(VlanTci(tci.0 & !VLAN_CFI));
    veh.set_inner_ethertype(ethertype);

    pkt.layers_mut().l2 = Some(0);
    tracing::trace!(tci = tci.0, "pushed vlan tag");
}

/// Remove the outermost 802.1Q tag of the frame at the start of `pkt`.
///
/// The remaining bytes are rewritten into a plain Ethernet header whose
/// Ethertype is the popped tag's inner Ethertype, and every set layer marker
/// moves back with the data. A frame that is not tagged, or too short to
/// hold a tag, is left untouched.
///
/// # Panics
/// Panics if `l2` is set to anything but the data start.
pub fn pop_vlan<B: PktBuf>(pkt: &mut B) {
    assert_l2_at_start(pkt);

    let (dst, src, inner_ethertype) = match VlanFrame::parse(pkt.data()) {
        Some(VlanFrame::Tagged {
            dst,
            src,
            inner_ethertype,
            ..
        }) => (dst, src, inner_ethertype),
        _ => {
            tracing::debug!(len = pkt.len(), "no vlan tag to pop");
            return;
        }
    };

    pkt.trim_front(VLAN_HEADER_LEN);

    let mut eth = EtherHeader::parse_unchecked(&mut pkt.data_mut()[..ETHER_HEADER_LEN]);
    eth.set_dst_addr(dst);
    eth.set_src_addr(src);
    eth.set_ethertype(inner_ethertype);
    tracing::trace!("popped vlan tag");
}

// The editors address the frame at the data start, so `l2` must agree.
fn assert_l2_at_start<B: PktBuf>(pkt: &B) {
    if let Some(l2) = pkt.layers().l2 {
        assert!(l2 == 0, "vlan edit with l2 at offset {}, not at the data start", l2);
    }
}
