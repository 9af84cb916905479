//! CBOR wire codec.
//!
//! Transports move messages as opaque byte buffers. Decoding re-checks the
//! message model invariants (a file destination is always a bare name), so a
//! peer cannot smuggle a path through the wire format.

use crate::{CodecError, Message};

/// Serialize a message to CBOR.
pub fn encode(message: &Message) -> Result<Vec<u8>, CodecError> {
    let mut data = Vec::new();
    ciborium::ser::into_writer(message, &mut data)
        .map_err(|e| CodecError::Encode(e.to_string()))?;
    Ok(data)
}

/// Deserialize a message from CBOR.
///
/// # Errors
///
/// - `Decode`: malformed CBOR, unknown payload variant, or a file destination
///   that is not a bare file name
pub fn decode(data: &[u8]) -> Result<Message, CodecError> {
    ciborium::de::from_reader(data).map_err(|e| CodecError::Decode(e.to_string()))
}
