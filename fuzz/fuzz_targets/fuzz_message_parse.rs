#![no_main]

use libfuzzer_sys::fuzz_target;
use mu_protocol::Message;

fuzz_target!(|data: &[u8]| {
    // Decoding arbitrary bytes must never panic. Unused header bits are not
    // preserved, so a decoded message is checked against its own re-encoding
    // rather than the input.
    if let Ok(message) = Message::deserialize(data) {
        let encoded = message.serialize().expect("decoded message re-encodes");
        assert_eq!(encoded.len(), data.len());
        assert_eq!(Message::deserialize(&encoded).ok(), Some(message));
    }
    let _ = mu_protocol::Keepalive::deserialize(data);
    let _ = mu_protocol::Publish::deserialize(data);
});
