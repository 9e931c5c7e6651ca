//! IPv6 netmask arithmetic and masked address formatting.
//!
//! Masks are treated as 16 bytes in network order. A CIDR mask is a run of
//! `0xff` bytes, one byte with contiguous leading 1-bits, and then zero bytes.

use alloc::string::{String, ToString};
use core::fmt;

pub use core::net::Ipv6Addr;

/// The all-ones mask, matching a single address exactly.
pub const IPV6_EXACT: Ipv6Addr = Ipv6Addr::new(
    0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff,
);

/// Byte-wise AND of two addresses.
pub fn ipv6_bitand(a: &Ipv6Addr, b: &Ipv6Addr) -> Ipv6Addr {
    let (a, b) = (a.octets(), b.octets());
    let mut dst = [0; 16];
    for (d, (x, y)) in dst.iter_mut().zip(a.iter().zip(b.iter())) {
        *d = x & y;
    }
    Ipv6Addr::from(dst)
}

/// The netmask with the `n` leading bits set.
///
/// # Panics
/// Panics if `n` exceeds 128.
pub fn ipv6_create_mask(mut n: u32) -> Ipv6Addr {
    assert!(n <= 128);
    let mut netmask = [0u8; 16];
    let mut bytes = netmask.iter_mut();
    while n > 8 {
        if let Some(b) = bytes.next() {
            *b = 0xff;
        }
        n -= 8;
    }
    if n > 0 {
        if let Some(b) = bytes.next() {
            *b = 0xff << (8 - n);
        }
    }
    Ipv6Addr::from(netmask)
}

#[inline]
fn byte_is_cidr(b: u8) -> bool {
    let x = !b;
    x & x.wrapping_add(1) == 0
}

/// Whether `mask` is a run of 1-bits from the most significant bit followed
/// only by 0-bits.
pub fn ipv6_is_cidr(mask: &Ipv6Addr) -> bool {
    let octets = mask.octets();
    match octets.iter().position(|&b| b != 0xff) {
        None => true,
        Some(i) => byte_is_cidr(octets[i]) && octets[i + 1..].iter().all(|&b| b == 0),
    }
}

/// The prefix length of a CIDR netmask.
///
/// # Panics
/// Panics if `mask` is not a CIDR netmask.
pub fn ipv6_cidr_bit_count(mask: &Ipv6Addr) -> u32 {
    assert!(ipv6_is_cidr(mask), "{} is not a cidr netmask", mask);
    mask.octets()
        .iter()
        .take_while(|&&b| b != 0)
        .map(|b| b.leading_ones())
        .sum()
}

/// Whether `mask` matches a single address.
#[inline]
pub fn ipv6_mask_is_exact(mask: &Ipv6Addr) -> bool {
    *mask == IPV6_EXACT
}

/// Whether `mask` matches every address.
#[inline]
pub fn ipv6_mask_is_any(mask: &Ipv6Addr) -> bool {
    mask.is_unspecified()
}

/// Displays an address followed by an optional netmask.
///
/// A missing or exact mask is omitted, a CIDR mask is written as
/// `/<prefix length>` and any other mask in address form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ipv6Masked<'a> {
    /// The address.
    pub addr: &'a Ipv6Addr,
    /// The netmask.
    pub mask: Option<&'a Ipv6Addr>,
}

impl fmt::Display for Ipv6Masked<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.addr)?;
        match self.mask {
            Some(mask) if !ipv6_mask_is_exact(mask) => {
                if ipv6_is_cidr(mask) {
                    write!(f, "/{}", ipv6_cidr_bit_count(mask))
                } else {
                    write!(f, "/{}", mask)
                }
            }
            _ => Ok(()),
        }
    }
}

/// Format `addr` with `mask`, see [`Ipv6Masked`].
pub fn format_ipv6_masked(addr: &Ipv6Addr, mask: Option<&Ipv6Addr>) -> String {
    Ipv6Masked { addr, mask }.to_string()
}
