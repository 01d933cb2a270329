//! Bounded receive buffer for raw UART bytes.
//!
//! [`RxBuffer`] is a fixed-capacity FIFO: bytes appended past
//! [`RX_BUFFER_MAX`] evict the oldest byte first, so the buffer length never
//! exceeds the cap no matter how much noise the transport delivers. The
//! frame scanner consumes bytes from the front in bulk once a frame (or a
//! resync decision) has been made.

use crate::consts::RX_BUFFER_MAX;

#[cfg(not(feature = "std"))]
use heapless::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

/// Fixed-capacity FIFO over the bytes most recently read from the transport.
///
/// Owned by the driver; the receive phase appends to the tail, the parse
/// phase removes from the front. Eviction on overflow is silent: the driver
/// treats stale unparseable bytes as noise, never as an error.
#[derive(Debug, Default)]
pub struct RxBuffer {
    #[cfg(feature = "std")]
    bytes: Vec<u8>,
    #[cfg(not(feature = "std"))]
    bytes: Vec<u8, RX_BUFFER_MAX>,
}

impl RxBuffer {
    /// Creates an empty buffer.
    pub const fn new() -> Self {
        Self { bytes: Vec::new() }
    }

    /// Appends one byte at the tail, evicting the oldest byte first if the
    /// buffer is at capacity.
    ///
    /// The length is at most [`RX_BUFFER_MAX`] after every call.
    pub fn append(&mut self, byte: u8) {
        if self.bytes.len() >= RX_BUFFER_MAX {
            trace!("rx buffer full, evicting oldest byte");
            let _ = self.bytes.remove(0);
        }
        let _ = self.bytes.push(byte);
    }

    /// Discards the first `n` bytes, clamped to the current length.
    pub fn remove_front(&mut self, n: usize) {
        let n = n.min(self.bytes.len());
        self.bytes.rotate_left(n);
        let rest = self.bytes.len() - n;
        self.bytes.truncate(rest);
    }

    /// Number of bytes currently buffered.
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// Whether the buffer holds no bytes.
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// The byte at index `i` counted from the front, if present.
    pub fn get(&self, i: usize) -> Option<u8> {
        self.bytes.get(i).copied()
    }

    /// The buffered bytes, oldest first.
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_append_and_read_back() {
        let mut buf = RxBuffer::new();
        buf.append(0x01);
        buf.append(0x02);
        assert_eq!(buf.len(), 2);
        assert_eq!(buf.get(0), Some(0x01));
        assert_eq!(buf.get(1), Some(0x02));
        assert_eq!(buf.get(2), None);
        assert_eq!(buf.as_bytes(), &[0x01, 0x02]);
    }

    #[test]
    fn test_length_never_exceeds_cap() {
        let mut buf = RxBuffer::new();
        for i in 0..100u8 {
            buf.append(i);
            assert!(buf.len() <= RX_BUFFER_MAX);
        }
        assert_eq!(buf.len(), RX_BUFFER_MAX);
    }

    #[test]
    fn test_overflow_evicts_from_head() {
        let mut buf = RxBuffer::new();
        for i in 0..=RX_BUFFER_MAX as u8 {
            buf.append(i);
        }
        // Byte 0 was evicted to make room for byte 20.
        assert_eq!(buf.get(0), Some(1));
        assert_eq!(buf.get(RX_BUFFER_MAX - 1), Some(RX_BUFFER_MAX as u8));
    }

    #[test]
    fn test_remove_front() {
        let mut buf = RxBuffer::new();
        for i in 0..5u8 {
            buf.append(i);
        }
        buf.remove_front(2);
        assert_eq!(buf.as_bytes(), &[2, 3, 4]);
    }

    #[test]
    fn test_remove_front_clamps_to_length() {
        let mut buf = RxBuffer::new();
        buf.append(0xAA);
        buf.remove_front(10);
        assert!(buf.is_empty());
        buf.remove_front(1); // no-op on an empty buffer
        assert_eq!(buf.len(), 0);
    }
}
