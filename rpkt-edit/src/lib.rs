#![warn(missing_docs, missing_debug_implementations, rust_2018_idioms)]
#![no_std]

//! Compose, tag and rewrite Ethernet/VLAN/LLC-SNAP/IPv4/IPv6/TCP/UDP headers
//! directly inside wire-format packet buffers.
//!
//! The crate is built for a switch forwarding path. Frames are composed with
//! enough headroom for a later 802.1Q push, VLAN tags are pushed and popped in
//! place, and address/port rewrites fold into the IP/TCP/UDP checksums
//! incrementally instead of re-scanning the packet.
//!
//! Every operation works on a caller-owned buffer implementing [`PktBuf`].
//! [`Pbuf`] is the in-crate implementation.

extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

#[macro_use]
mod macros;

mod traits;
pub use traits::{Layers, PktBuf};

mod pbuf;
pub use pbuf::Pbuf;

pub mod checksum_utils;
pub mod error;

pub mod dpid;
pub mod ether;
pub mod ipv4;
pub mod ipv6;
pub mod llc;
pub mod tcp;
pub mod udp;
pub mod vlan;
