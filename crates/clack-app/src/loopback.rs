//! In-process transport.
//!
//! Every sent message is encoded, queued, and decoded again on receipt, so
//! the wire format is exercised even without a network peer.

use std::collections::VecDeque;

use clack_core::{CodecError, Message, codec};

/// FIFO transport that delivers each sent message back to the sender.
#[derive(Debug, Default, Clone)]
pub struct Loopback {
    queue: VecDeque<Vec<u8>>,
}

impl Loopback {
    /// Create an empty transport.
    pub fn new() -> Self {
        Self::default()
    }

    /// Encode and enqueue a message.
    pub fn send(&mut self, message: &Message) -> Result<(), CodecError> {
        let bytes = codec::encode(message)?;
        tracing::trace!(kind = %message.kind(), bytes = bytes.len(), "queued message");
        self.queue.push_back(bytes);
        Ok(())
    }

    /// Dequeue and decode the oldest message. `None` if the queue is empty.
    pub fn recv(&mut self) -> Result<Option<Message>, CodecError> {
        self.queue.pop_front().map(|bytes| codec::decode(&bytes)).transpose()
    }

    /// Number of messages waiting.
    pub fn len(&self) -> usize {
        self.queue.len()
    }

    /// Whether no messages are waiting.
    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }
}
