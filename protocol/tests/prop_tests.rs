use std::net::{Ipv6Addr, SocketAddrV6};

use proptest::prelude::*;

use mu_ledger::{BlockType, LedgerEntry, TransactionBlock};
use mu_protocol::{Keepalive, Message, Publish, HEADER_LEN, KEEPALIVE_PEERS};
use mu_types::{Address, Uint256Union, Uint512Union};

fn arb_peer() -> impl Strategy<Value = SocketAddrV6> {
    (any::<[u8; 16]>(), any::<u16>())
        .prop_map(|(ip, port)| SocketAddrV6::new(Ipv6Addr::from(ip), port, 0, 0))
}

fn arb_keepalive() -> impl Strategy<Value = Keepalive> {
    prop::collection::vec(arb_peer(), KEEPALIVE_PEERS).prop_map(|peers| {
        let mut message = Keepalive::default();
        message.peers.copy_from_slice(&peers);
        message
    })
}

fn arb_entry() -> impl Strategy<Value = LedgerEntry> {
    (
        prop::array::uniform32(any::<u8>()),
        prop::array::uniform32(any::<u8>()),
        prop::collection::vec(any::<u8>(), 64),
    )
        .prop_map(|(address, packed, signature)| {
            let mut sig = [0u8; 64];
            sig.copy_from_slice(&signature);
            LedgerEntry {
                address: Address::from(address),
                packed: Uint256Union::from_bytes(packed),
                signature: Uint512Union::from_bytes(sig),
            }
        })
}

fn arb_block_type() -> impl Strategy<Value = BlockType> {
    prop_oneof![
        Just(BlockType::Send),
        Just(BlockType::Receive),
        Just(BlockType::Open),
        Just(BlockType::Change),
    ]
}

fn arb_publish() -> impl Strategy<Value = Publish> {
    (
        arb_block_type(),
        prop::collection::vec(arb_entry(), 0..8),
        any::<bool>(),
    )
        .prop_map(|(block_type, entries, ipv4_only)| {
            let mut publish = Publish::new(TransactionBlock::with_entries(block_type, entries));
            publish.set_ipv4_only(ipv4_only);
            publish
        })
}

proptest! {
    /// Keepalive serialize -> deserialize preserves every peer slot.
    #[test]
    fn keepalive_roundtrip(message in arb_keepalive()) {
        let bytes = message.serialize();
        prop_assert_eq!(Keepalive::deserialize(&bytes).unwrap(), message);
    }

    /// Publish serialize -> deserialize preserves flags, type and entries.
    #[test]
    fn publish_roundtrip(message in arb_publish()) {
        let bytes = message.serialize().unwrap();
        let decoded = Publish::deserialize(&bytes).unwrap();
        prop_assert_eq!(decoded.block.hash(), message.block.hash());
        prop_assert_eq!(decoded, message);
    }

    /// Every proper prefix of a valid message fails to decode.
    #[test]
    fn truncation_always_fails(message in arb_publish(), cut in 0usize..1024) {
        let bytes = message.serialize().unwrap();
        let len = cut % bytes.len();
        prop_assert!(Message::deserialize(&bytes[..len]).is_err());
    }

    /// Arbitrary input never panics the decoder.
    #[test]
    fn garbage_never_panics(bytes in prop::collection::vec(any::<u8>(), 0..512)) {
        let _ = Message::deserialize(&bytes);
    }

    /// Garbage after a valid header is either a whole message or an error.
    #[test]
    fn payload_garbage_is_all_or_nothing(
        tail in prop::collection::vec(any::<u8>(), 0..256),
    ) {
        let mut bytes = Keepalive::default().serialize();
        bytes.truncate(HEADER_LEN);
        bytes.extend_from_slice(&tail);
        if let Ok(Message::Keepalive(k)) = Message::deserialize(&bytes) {
            prop_assert_eq!(k.serialize(), bytes);
        }
    }
}
