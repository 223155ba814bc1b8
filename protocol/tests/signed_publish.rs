//! Signatures survive the wire: a block signed on one side validates on the
//! other after a publish round trip.

use mu_crypto::{generate_keypair, CryptoContext};
use mu_ledger::{BlockType, LedgerEntry, TransactionBlock};
use mu_protocol::{Message, Publish};
use mu_types::U256;

#[test]
fn signatures_validate_after_round_trip() {
    let ctx = CryptoContext::from_seed(42);
    let alice = generate_keypair(&ctx);
    let bob = generate_keypair(&ctx);

    let mut block = TransactionBlock::with_entries(
        BlockType::Send,
        vec![
            LedgerEntry::new(alice.address(), U256::from(10u64), 3),
            LedgerEntry::new(bob.address(), U256::from(89u64), 7),
        ],
    );
    assert!(block.sign_entry(&ctx, &alice.address(), &alice.private).unwrap());
    assert!(block.sign_entry(&ctx, &bob.address(), &bob.private).unwrap());

    let bytes = Publish::new(block.clone()).serialize().unwrap();
    let decoded = match Message::deserialize(&bytes).unwrap() {
        Message::Publish(publish) => publish.block,
        other => panic!("expected publish, got {other:?}"),
    };

    assert_eq!(decoded.hash(), block.hash());
    assert!(decoded.entries[0].validate(&alice.public));
    assert!(decoded.entries[1].validate(&bob.public));
    assert!(decoded.entries.iter().all(LedgerEntry::validate_address));
}

#[test]
fn corrupted_signature_fails_after_round_trip() {
    let ctx = CryptoContext::from_seed(43);
    let alice = generate_keypair(&ctx);
    let mut entry = LedgerEntry::new(alice.address(), U256::from(5u64), 1);
    entry.sign(&ctx, &alice.private).unwrap();

    let mut bytes = Publish::new(TransactionBlock::with_entries(BlockType::Send, vec![entry]))
        .serialize()
        .unwrap();
    let last = bytes.len() - 1;
    bytes[last] ^= 0x01;

    let decoded = Publish::deserialize(&bytes).unwrap();
    assert!(!decoded.block.entries[0].validate(&alice.public));
}
