//! 802.2 LLC with SNAP encapsulation over 802.3 length framing.
//!
//! A SNAP frame replaces the Ethertype with the byte count of everything that
//! follows the Ethernet header, then carries its protocol type behind an LLC
//! header whose service access points are both [`LLC_DSAP_SNAP`]:
//!
//! ```text
//! | dst (6) | src (6) | len (2) | aa aa 03 | oui (3) | snap type (2) | payload |
//! ```

use crate::ether::{EtherAddr, EtherHeader, ETHER_HEADER_LEN};
use crate::vlan::VLAN_HEADER_LEN;
use crate::PktBuf;

mod header;
pub use header::{LlcSnapHeader, LLC_SNAP_HEADER_LEN};

/// Destination service access point announcing a SNAP header.
pub const LLC_DSAP_SNAP: u8 = 0xaa;

/// Source service access point announcing a SNAP header.
pub const LLC_SSAP_SNAP: u8 = 0xaa;

/// LLC control value of a SNAP frame, an unnumbered information PDU.
pub const LLC_CNTL_SNAP: u8 = 3;

/// Nicira's organization id, used for the payload of benign frames.
pub const NICIRA_OUI: u32 = 0x002320;

/// Compose an 802.3 frame carrying an LLC+SNAP header and a `size`-byte
/// payload into `b`.
///
/// The buffer gets the same headroom treatment as
/// [`compose_ethernet`](crate::ether::compose_ethernet). The Ethernet type
/// field holds the length of the LLC+SNAP header plus payload, the SNAP header
/// carries the low 24 bits of `oui` and `snap_type`.
///
/// Unlike [`compose_ethernet`](crate::ether::compose_ethernet), this leaves
/// every layer marker unset.
///
/// The length is written as given, keeping its low 16 bits. Past 1500 bytes
/// it no longer reads as an 802.3 length, receivers take it for an Ethertype.
pub fn compose_llc_snap<'a, B: PktBuf>(
    b: &'a mut B,
    dst: EtherAddr,
    src: EtherAddr,
    oui: u32,
    snap_type: u16,
    size: usize,
) -> &'a mut [u8] {
    let frame_len = LLC_SNAP_HEADER_LEN + size;

    b.clear();
    b.reserve(ETHER_HEADER_LEN + VLAN_HEADER_LEN + frame_len);
    b.reserve_front(VLAN_HEADER_LEN);

    let mut eth = EtherHeader::parse_unchecked(b.extend_zeroed(ETHER_HEADER_LEN));
    eth.set_dst_addr(dst);
    eth.set_src_addr(src);
    eth.set_packet_len(frame_len as u16);

    let mut llc_snap = LlcSnapHeader::parse_unchecked(b.extend_zeroed(LLC_SNAP_HEADER_LEN));
    llc_snap.set_dsap(LLC_DSAP_SNAP);
    llc_snap.set_ssap(LLC_SSAP_SNAP);
    llc_snap.set_cntl(LLC_CNTL_SNAP);
    llc_snap.set_oui(oui);
    llc_snap.set_snap_type(snap_type);

    tracing::trace!(%dst, %src, oui, snap_type, size, "composed llc snap frame");
    b.extend(size)
}

/// Compose a broadcast SNAP frame from `src` whose payload is `tag`, a NUL
/// byte and then `src` again.
///
/// The frame uses [`NICIRA_OUI`]. Its content carries no protocol meaning, it
/// only makes the frame easy to recognize in a capture.
pub fn compose_benign_tagged_frame<B: PktBuf>(
    b: &mut B,
    tag: &str,
    snap_type: u16,
    src: EtherAddr,
) {
    let tag_len = tag.len() + 1;
    let payload = compose_llc_snap(
        b,
        EtherAddr::BROADCAST,
        src,
        NICIRA_OUI,
        snap_type,
        tag_len + src.as_bytes().len(),
    );

    let (tag_part, addr_part) = payload.split_at_mut(tag_len);
    tag_part[..tag.len()].copy_from_slice(tag.as_bytes());
    tag_part[tag.len()] = 0;
    addr_part.copy_from_slice(src.as_bytes());
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ether::EtherType;
    use crate::{Layers, Pbuf};

    const SRC: EtherAddr = EtherAddr([0x00, 0x23, 0x20, 0x12, 0x34, 0x56]);

    #[test]
    fn llc_snap_layout() {
        let mut pbuf = Pbuf::new();
        let payload = compose_llc_snap(
            &mut pbuf,
            EtherAddr::BROADCAST,
            SRC,
            0x00abcdef,
            0x88cc,
            3,
        );
        assert_eq!(payload.len(), 3);
        payload.copy_from_slice(&[7, 8, 9]);

        assert_eq!(pbuf.front_capacity(), VLAN_HEADER_LEN);
        assert_eq!(pbuf.len(), ETHER_HEADER_LEN + LLC_SNAP_HEADER_LEN + 3);
        assert_eq!(
            &pbuf.data()[12..],
            &[0x00, 0x0b, 0xaa, 0xaa, 0x03, 0xab, 0xcd, 0xef, 0x88, 0xcc, 7, 8, 9]
        );

        let eth = EtherHeader::parse(pbuf.data()).unwrap();
        assert!(eth.ethertype().is_length());
        assert_eq!(eth.packet_len(), 11);

        let llc_snap = LlcSnapHeader::parse(&pbuf.data()[ETHER_HEADER_LEN..]).unwrap();
        assert_eq!(llc_snap.dsap(), LLC_DSAP_SNAP);
        assert_eq!(llc_snap.ssap(), LLC_SSAP_SNAP);
        assert_eq!(llc_snap.cntl(), LLC_CNTL_SNAP);
        assert_eq!(llc_snap.oui(), 0xabcdef);
        assert_eq!(llc_snap.snap_type(), 0x88cc);
    }

    #[test]
    fn llc_snap_leaves_markers_unset() {
        let mut pbuf = Pbuf::new();
        pbuf.layers_mut().l3 = Some(0);
        compose_llc_snap(&mut pbuf, EtherAddr::BROADCAST, SRC, NICIRA_OUI, 0, 0);
        assert_eq!(*pbuf.layers(), Layers::default());
    }

    #[test]
    fn oui_is_truncated_to_24_bits() {
        let mut pbuf = Pbuf::new();
        compose_llc_snap(&mut pbuf, EtherAddr::BROADCAST, SRC, 0x7f002320, 0, 0);
        assert_eq!(&pbuf.data()[17..20], &[0x00, 0x23, 0x20]);
    }

    #[test]
    fn benign_frame() {
        let mut pbuf = Pbuf::new();
        compose_benign_tagged_frame(&mut pbuf, "probe", 0xfeed, SRC);

        let data = pbuf.data();
        assert_eq!(data.len(), ETHER_HEADER_LEN + LLC_SNAP_HEADER_LEN + 6 + 6);
        assert_eq!(&data[..6], EtherAddr::BROADCAST.as_bytes());
        assert_eq!(&data[6..12], SRC.as_bytes());
        assert_eq!(EtherHeader::parse(data).unwrap().packet_len(), 20);
        assert_eq!(EtherHeader::parse(data).unwrap().ethertype(), EtherType::from(20));

        let llc_snap = LlcSnapHeader::parse(&data[ETHER_HEADER_LEN..]).unwrap();
        assert_eq!(llc_snap.oui(), NICIRA_OUI);
        assert_eq!(llc_snap.snap_type(), 0xfeed);

        let payload = &data[ETHER_HEADER_LEN + LLC_SNAP_HEADER_LEN..];
        assert_eq!(&payload[..6], b"probe\0");
        assert_eq!(&payload[6..], SRC.as_bytes());
    }

    #[test]
    fn oversized_frames_are_written() {
        let mut pbuf = Pbuf::new();
        compose_llc_snap(&mut pbuf, EtherAddr::BROADCAST, SRC, NICIRA_OUI, 0, 1528).fill(0);
        assert_eq!(pbuf.len(), ETHER_HEADER_LEN + LLC_SNAP_HEADER_LEN + 1528);
        assert_eq!(&pbuf.data()[12..14], &[0x06, 0x00]);

        let tag = "x".repeat(1600);
        compose_benign_tagged_frame(&mut pbuf, &tag, 0, SRC);
        let frame_len = LLC_SNAP_HEADER_LEN + 1600 + 1 + 6;
        assert_eq!(pbuf.len(), ETHER_HEADER_LEN + frame_len);
        assert_eq!(
            EtherHeader::parse(pbuf.data()).unwrap().packet_len() as usize,
            frame_len
        );
        assert_eq!(&pbuf.data()[pbuf.len() - 6..], SRC.as_bytes());
    }

    #[test]
    fn benign_frame_empty_tag() {
        let mut pbuf = Pbuf::new();
        compose_benign_tagged_frame(&mut pbuf, "", 0, SRC);
        let payload = &pbuf.data()[ETHER_HEADER_LEN + LLC_SNAP_HEADER_LEN..];
        assert_eq!(payload[0], 0);
        assert_eq!(&payload[1..], SRC.as_bytes());
    }
}
