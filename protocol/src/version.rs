//! Protocol version management.

/// Highest protocol version this node understands.
pub const PROTOCOL_VERSION_MAX: u8 = 1;

/// Protocol version this node speaks.
pub const PROTOCOL_VERSION: u8 = 1;

/// Minimum supported protocol version.
pub const MIN_PROTOCOL_VERSION: u8 = 1;

/// Check if a peer's protocol version is compatible.
pub fn is_compatible(peer_version: u8) -> bool {
    (MIN_PROTOCOL_VERSION..=PROTOCOL_VERSION_MAX).contains(&peer_version)
}
