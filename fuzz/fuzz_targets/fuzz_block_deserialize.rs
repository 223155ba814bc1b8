#![no_main]

use libfuzzer_sys::fuzz_target;
use mu_ledger::BlockType;
use mu_protocol::codec::{read_block, write_block};

fuzz_target!(|data: &[u8]| {
    let mut input = data;
    if let Ok(block) = read_block(&mut input, BlockType::Send) {
        let consumed = data.len() - input.len();
        let mut out = Vec::new();
        write_block(&block, &mut out).expect("decoded block re-encodes");
        assert_eq!(out, &data[..consumed]);
        let _ = block.hash();
    }
});
