//! Constants used across the Unit-ASR serial protocol implementation.
//!
//! This module defines the wire-format markers, buffer sizing, and timing
//! values for the module's UART protocol.
//!
//! The resync threshold and buffer capacity are tuned empirically for the
//! sensor's bit rate and the 5-byte frame size; treat them as configuration,
//! not arbitrary literals, if adapting this driver to a related module.

/// Maximum number of bytes retained in the receive buffer.
///
/// Once the buffer holds this many bytes, each newly appended byte evicts
/// the oldest one, so memory use is fixed regardless of how noisy or fast
/// the transport is.
pub const RX_BUFFER_MAX: usize = 20;

/// Total length (in bytes) of one command frame on the wire.
///
/// A frame is `0xAA 0x55 CMD 0x55 0xAA`; only the middle byte varies.
pub const FRAME_LEN: usize = 5;

/// The two fixed bytes that open every frame.
pub const FRAME_HEAD: [u8; 2] = [0xAA, 0x55];

/// The two fixed bytes that close every frame.
pub const FRAME_TAIL: [u8; 2] = [0x55, 0xAA];

/// Offset of the command byte within a frame.
pub const FRAME_CMD_OFFSET: usize = 2;

/// Buffer length above which a scan that found no frame discards bytes.
///
/// A buffer at or below this length may still be holding the prefix of a
/// frame whose tail has not arrived, so it is left untouched.
pub const RESYNC_THRESHOLD: usize = 10;

/// Number of bytes discarded from the head of the buffer on each resync.
///
/// One frame's worth, so recovery from a corrupted or misaligned stream is
/// bounded to a few scan cycles.
pub const RESYNC_DISCARD: usize = 5;

/// Command number the module sends when it wakes on its trigger phrase.
///
/// The first dispatch of this command latches the driver's awake flag; the
/// flag is never cleared by the driver afterwards.
pub const WAKEUP_CMD: u8 = 0xFF;

/// Initial settle delay (in milliseconds) before the module boot delay.
pub const SETTLE_DELAY_MS: u32 = 100;

/// Boot delay (in milliseconds) the module needs before it starts
/// reporting commands.
pub const STARTUP_DELAY_MS: u32 = 3000;
