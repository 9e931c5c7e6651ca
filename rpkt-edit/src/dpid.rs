//! Datapath identifiers.

/// Number of hex digits in the text form of a datapath ID.
pub const DPID_HEX_LEN: usize = 16;

/// Parse `s` as a 16-digit hexadecimal datapath ID.
///
/// Any other length, any non-hex character and the all-zero ID yield `None`.
pub fn parse_datapath_id<T: AsRef<str>>(s: T) -> Option<u64> {
    let s = s.as_ref();
    if s.len() != DPID_HEX_LEN || !s.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }
    match u64::from_str_radix(s, 16) {
        Ok(0) | Err(_) => None,
        Ok(dpid) => Some(dpid),
    }
}
