//! Wire protocol: message header, keepalive and publish framing.
//!
//! Every message starts with a 16-byte [`Header`]. All integers and hashes
//! in payloads are big-endian, matching the byte view of
//! [`mu_types::Uint256Union`], so block hashes computed on either side of
//! the wire agree.

pub mod codec;
pub mod error;
pub mod header;
pub mod keepalive;
pub mod message;
pub mod publish;
pub mod version;

pub use codec::{MAX_BLOCK_ENTRIES, MAX_MESSAGE_SIZE};
pub use error::ProtocolError;
pub use header::{read_header, Extensions, Flag, Header, MessageType, HEADER_LEN, MAGIC};
pub use keepalive::{Keepalive, KEEPALIVE_PEERS};
pub use message::Message;
pub use publish::Publish;
pub use version::{PROTOCOL_VERSION, PROTOCOL_VERSION_MAX, MIN_PROTOCOL_VERSION};
