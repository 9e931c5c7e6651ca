//! Provide utilitiy functions for calculating packet checksums.
//!
//! The full computations follow smoltcp. The incremental updates follow
//! RFC 1624: when a 16-bit word `m` covered by checksum `HC` changes to `m'`,
//! the new checksum is `~(~HC + ~m + m')` in one's complement arithmetic.
//!
//! All words are taken in network byte order, i.e. as read from the wire with
//! [`NetworkEndian`], and the checksum field itself is read the same way.

use byteorder::{ByteOrder, NetworkEndian};

/// Compute an RFC 1071 compliant checksum (without the final complement).
pub fn from_slice(mut data: &[u8]) -> u16 {
    let mut accum = 0;

    // For each 32-byte chunk...
    const CHUNK_SIZE: usize = 32;
    while data.len() >= CHUNK_SIZE {
        let mut d = &data[..CHUNK_SIZE];
        // ... take by 2 bytes and sum them.
        while d.len() >= 2 {
            accum += NetworkEndian::read_u16(d) as u32;
            d = &d[2..];
        }

        data = &data[CHUNK_SIZE..];
    }

    // Sum the rest that does not fit the last 32-byte chunk,
    // taking by 2 bytes.
    while data.len() >= 2 {
        accum += NetworkEndian::read_u16(data) as u32;
        data = &data[2..];
    }

    // Add the last remaining odd byte, if any.
    if let Some(&value) = data.first() {
        accum += (value as u32) << 8;
    }

    propagate_carries(accum)
}

/// Combine several RFC 1071 compliant checksums.
pub fn combine(checksums: &[u16]) -> u16 {
    let mut accum: u32 = 0;
    for &word in checksums {
        accum += word as u32;
    }
    propagate_carries(accum)
}

/// Update checksum `csum` after a covered 16-bit word changes from `old` to
/// `new`.
///
/// The result equals the checksum recomputed from scratch over the modified
/// data.
#[inline]
pub fn recalc16(csum: u16, old: u16, new: u16) -> u16 {
    let sum = (!csum) as u32 + (!old) as u32 + new as u32;
    !propagate_carries(sum)
}

/// Update checksum `csum` after a covered, 16-bit aligned 32-bit field (such
/// as an IPv4 address) changes from `old` to `new`.
///
/// Both values are the field read in network byte order. The low half is
/// folded first, then the high half.
#[inline]
pub fn recalc32(csum: u16, old: u32, new: u32) -> u16 {
    let csum = recalc16(csum, old as u16, new as u16);
    recalc16(csum, (old >> 16) as u16, (new >> 16) as u16)
}

/// Replace a computed UDP checksum of zero with all-ones.
///
/// A UDP checksum field of zero means "no checksum". Arithmetically, RFC 1071
/// checksums of all-zeroes and all-ones behave identically, so no action is
/// necessary on the remote end.
#[inline]
pub fn udp_finalize(csum: u16) -> u16 {
    if csum == 0 {
        0xffff
    } else {
        csum
    }
}

// Fold a 32-bit accumulator into 16 bits with end-around carry. Two rounds
// are enough for any sum of up to 65537 words.
fn propagate_carries(word: u32) -> u16 {
    let sum = (word >> 16) + (word & 0xffff);
    ((sum >> 16) as u16) + (sum as u16)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn ipv4_header_checksum(header: &mut [u8; 20]) -> u16 {
        NetworkEndian::write_u16(&mut header[10..12], 0);
        let csum = !from_slice(&header[..]);
        NetworkEndian::write_u16(&mut header[10..12], csum);
        csum
    }

    #[test]
    fn full_checksum() {
        let mut header = [
            0x45, 0x00, 0x00, 0x73, 0x00, 0x00, 0x40, 0x00, 0x40, 0x11, 0x00, 0x00, 0xc0, 0xa8,
            0x00, 0x01, 0xc0, 0xa8, 0x00, 0xc7,
        ];
        assert_eq!(ipv4_header_checksum(&mut header), 0xb861);
        assert_eq!(!from_slice(&header[..]), 0);
    }

    #[test]
    fn combine_partial_sums() {
        let data = [0x12u8, 0x34, 0x56, 0x78, 0x9a, 0xbc, 0xde];
        assert_eq!(
            combine(&[from_slice(&data[..4]), from_slice(&data[4..])]),
            from_slice(&data[..])
        );
    }

    #[test]
    fn recalc16_keeps_the_carry() {
        // ~0x0000 + ~0x0000 + 0x0001 = 0x1ffff, which needs two folds
        assert_eq!(recalc16(0x0000, 0x0000, 0x0001), 0xfffe);
        assert_eq!(recalc16(0xb861, 0x4011, 0x4011), 0xb861);
    }

    #[test]
    fn recalc_to_zero_remap() {
        assert_eq!(recalc16(0x1234, 0x0000, 0x1234), 0x0000);
        assert_eq!(udp_finalize(recalc16(0x1234, 0x0000, 0x1234)), 0xffff);
        assert_eq!(udp_finalize(0x1234), 0x1234);
    }

    proptest! {
        #[test]
        fn prop_recalc16_matches_full_recompute(
            mut header in any::<[u8; 20]>(),
            word in (1usize..10).prop_filter("checksum word", |w| *w != 5),
            value in any::<u16>(),
        ) {
            // a fixed version/ihl byte keeps the header from summing to zero
            header[0] = 0x45;
            let csum = ipv4_header_checksum(&mut header);
            let old = NetworkEndian::read_u16(&header[word * 2..]);

            let incremental = recalc16(csum, old, value);

            NetworkEndian::write_u16(&mut header[word * 2..word * 2 + 2], value);
            let full = ipv4_header_checksum(&mut header);
            prop_assert_eq!(incremental, full);
        }

        #[test]
        fn prop_recalc32_matches_full_recompute(
            mut header in any::<[u8; 20]>(),
            addr_off in prop_oneof![Just(12usize), Just(16usize)],
            value in any::<u32>(),
        ) {
            header[0] = 0x45;
            let csum = ipv4_header_checksum(&mut header);
            let old = NetworkEndian::read_u32(&header[addr_off..]);

            let incremental = recalc32(csum, old, value);

            NetworkEndian::write_u32(&mut header[addr_off..addr_off + 4], value);
            let full = ipv4_header_checksum(&mut header);
            prop_assert_eq!(incremental, full);
        }
    }
}
