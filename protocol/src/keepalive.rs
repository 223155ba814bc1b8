//! Keepalive: liveness probe carrying a fixed-size list of known peers.

use std::net::{Ipv6Addr, SocketAddr, SocketAddrV6};

use crate::codec::{check_size, expect_end, read_array, read_u16_be};
use crate::header::{Header, MessageType};
use crate::ProtocolError;

/// Number of peer slots in every keepalive.
pub const KEEPALIVE_PEERS: usize = 8;

const PEER_LEN: usize = 16 + 2;

/// A keepalive message.
///
/// Each slot is an IPv6 address and port; IPv4 peers are stored as
/// IPv4-mapped addresses and unused slots as `[::]:0`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Keepalive {
    pub peers: [SocketAddrV6; KEEPALIVE_PEERS],
}

fn unspecified() -> SocketAddrV6 {
    SocketAddrV6::new(Ipv6Addr::UNSPECIFIED, 0, 0, 0)
}

fn to_v6(addr: SocketAddr) -> SocketAddrV6 {
    match addr {
        SocketAddr::V4(v4) => SocketAddrV6::new(v4.ip().to_ipv6_mapped(), v4.port(), 0, 0),
        SocketAddr::V6(v6) => SocketAddrV6::new(*v6.ip(), v6.port(), 0, 0),
    }
}

impl Default for Keepalive {
    fn default() -> Self {
        Self {
            peers: [unspecified(); KEEPALIVE_PEERS],
        }
    }
}

impl Keepalive {
    /// Fill the slots from `peers`; extra peers are ignored.
    pub fn new(peers: impl IntoIterator<Item = SocketAddr>) -> Self {
        let mut message = Self::default();
        for (slot, peer) in message.peers.iter_mut().zip(peers) {
            *slot = to_v6(peer);
        }
        message
    }

    /// Peers in use, skipping empty slots.
    pub fn known_peers(&self) -> impl Iterator<Item = &SocketAddrV6> {
        self.peers
            .iter()
            .filter(|p| !p.ip().is_unspecified() || p.port() != 0)
    }

    pub fn header(&self) -> Header {
        Header::new(MessageType::Keepalive)
    }

    pub fn serialize(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(crate::HEADER_LEN + KEEPALIVE_PEERS * PEER_LEN);
        self.header().write(&mut out);
        self.write_payload(&mut out);
        out
    }

    /// Decode a complete keepalive message, header included.
    pub fn deserialize(bytes: &[u8]) -> Result<Self, ProtocolError> {
        check_size(bytes)?;
        let mut input = bytes;
        Header::read(&mut input)?.expect(MessageType::Keepalive)?;
        let message = Self::read_payload(&mut input)?;
        expect_end(input)?;
        Ok(message)
    }

    pub(crate) fn write_payload(&self, out: &mut Vec<u8>) {
        for peer in &self.peers {
            out.extend_from_slice(&peer.ip().octets());
            out.extend_from_slice(&peer.port().to_be_bytes());
        }
    }

    pub(crate) fn read_payload(input: &mut &[u8]) -> Result<Self, ProtocolError> {
        let mut peers = [unspecified(); KEEPALIVE_PEERS];
        for slot in peers.iter_mut() {
            let ip = Ipv6Addr::from(read_array::<16>(input)?);
            let port = read_u16_be(input)?;
            *slot = SocketAddrV6::new(ip, port, 0, 0);
        }
        Ok(Self { peers })
    }
}
