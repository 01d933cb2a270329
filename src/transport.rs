//! UART transport seam between the driver and the platform's serial HAL.
//!
//! The driver never talks to hardware directly; it pulls bytes through
//! [`UartTransport`], a minimal non-blocking capability: how many bytes are
//! ready right now, read one of them, and (optionally) drop whatever the
//! peripheral accumulated before the driver was ready.
//!
//! Any type implementing `embedded_io::Read + embedded_io::ReadReady` gets
//! the trait for free, so HAL UART peripherals plug in without adapter code.

use embedded_io::{Read, ReadReady};

/// Non-blocking byte source backing the driver's receive phase.
///
/// Reads are best-effort: a `None` from [`read_byte`](Self::read_byte) is
/// tolerated and the byte is dropped without retry. Implementations are
/// expected to consume a byte from their own queue on every read attempt, so
/// repeated availability checks make progress.
pub trait UartTransport {
    /// Number of bytes that can be read right now without blocking.
    fn bytes_available(&mut self) -> usize;

    /// Reads one byte, or `None` on a short or failed read.
    fn read_byte(&mut self) -> Option<u8>;

    /// Discards bytes buffered inside the peripheral itself.
    ///
    /// Called once during driver startup to drop anything that arrived while
    /// the module was still booting. Transports without such a buffer keep
    /// this default no-op.
    fn clear_rx_buffer(&mut self) {}
}

impl<T> UartTransport for T
where
    T: Read + ReadReady,
{
    fn bytes_available(&mut self) -> usize {
        // `ReadReady` only reports readiness, not a count; the driver
        // re-checks availability before every read, so 0 or 1 is enough.
        match self.read_ready() {
            Ok(true) => 1,
            Ok(false) | Err(_) => 0,
        }
    }

    fn read_byte(&mut self) -> Option<u8> {
        let mut byte = [0u8; 1];
        match self.read(&mut byte) {
            Ok(1) => Some(byte[0]),
            Ok(_) | Err(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use embedded_io::ErrorType;
    use std::collections::VecDeque;
    use std::convert::Infallible;

    struct QueueUart {
        queue: VecDeque<u8>,
    }

    impl ErrorType for QueueUart {
        type Error = Infallible;
    }

    impl Read for QueueUart {
        fn read(&mut self, buf: &mut [u8]) -> Result<usize, Self::Error> {
            match self.queue.pop_front() {
                Some(byte) if !buf.is_empty() => {
                    buf[0] = byte;
                    Ok(1)
                }
                _ => Ok(0),
            }
        }
    }

    impl ReadReady for QueueUart {
        fn read_ready(&mut self) -> Result<bool, Self::Error> {
            Ok(!self.queue.is_empty())
        }
    }

    #[test]
    fn test_embedded_io_types_get_the_transport_for_free() {
        let mut uart = QueueUart {
            queue: VecDeque::from(vec![0xAA, 0x55]),
        };
        assert!(uart.bytes_available() > 0);
        assert_eq!(uart.read_byte(), Some(0xAA));
        assert_eq!(uart.read_byte(), Some(0x55));
        assert_eq!(uart.bytes_available(), 0);
        assert_eq!(uart.read_byte(), None);
        uart.clear_rx_buffer(); // default no-op
    }
}
