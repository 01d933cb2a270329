//! Frame scanning and resynchronization over the receive buffer.
//!
//! The Unit-ASR module frames each recognized command as five bytes,
//! `0xAA 0x55 CMD 0x55 0xAA`, with no checksum and no length field. The
//! transport may hand the driver partial frames, line noise, or frames that
//! straddle two poll cycles, so the scanner works on whatever happens to be
//! buffered and makes no alignment assumptions.
//!
//! ## Scan policy
//!
//! 1. Fewer than [`FRAME_LEN`] bytes buffered: not enough data, leave the
//!    buffer untouched.
//! 2. Otherwise test every offset, left to right, against the frame markers
//!    (the command byte is unconstrained). The first match wins: its command
//!    byte is returned and the frame, plus everything before it, is removed.
//! 3. No match and more than [`RESYNC_THRESHOLD`] bytes buffered: discard
//!    [`RESYNC_DISCARD`] bytes from the head. This bounds how long garbage
//!    can sit in the buffer while never discarding a prefix that could still
//!    grow into a valid frame.
//!
//! At most one frame is extracted per call, even when several complete
//! frames are queued; the driver surfaces one command per poll cycle.

use crate::buffer::RxBuffer;
use crate::consts::{FRAME_CMD_OFFSET, FRAME_HEAD, FRAME_LEN, FRAME_TAIL, RESYNC_DISCARD, RESYNC_THRESHOLD};

/// Extracts the leftmost complete frame from `buf`, if one is present.
///
/// On a match, returns the frame's command byte and removes the matched
/// frame along with any bytes preceding it. On a miss, either applies the
/// resync heuristic (overlong buffer) or leaves the buffer as-is (more data
/// may still complete a frame).
pub fn scan(buf: &mut RxBuffer) -> Option<u8> {
    if buf.len() < FRAME_LEN {
        return None;
    }

    for i in 0..=buf.len() - FRAME_LEN {
        if frame_at(buf.as_bytes(), i) {
            let cmd = buf.as_bytes()[i + FRAME_CMD_OFFSET];
            buf.remove_front(i + FRAME_LEN);
            debug!("frame at offset {}, command {}", i, cmd);
            return Some(cmd);
        }
    }

    if buf.len() > RESYNC_THRESHOLD {
        debug!("no frame in {} buffered bytes, resyncing", buf.len());
        buf.remove_front(RESYNC_DISCARD);
    }

    None
}

/// Whether the five bytes starting at `i` carry the frame markers.
fn frame_at(bytes: &[u8], i: usize) -> bool {
    bytes[i] == FRAME_HEAD[0]
        && bytes[i + 1] == FRAME_HEAD[1]
        && bytes[i + 3] == FRAME_TAIL[0]
        && bytes[i + 4] == FRAME_TAIL[1]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn buffer_of(bytes: &[u8]) -> RxBuffer {
        let mut buf = RxBuffer::new();
        for &b in bytes {
            buf.append(b);
        }
        buf
    }

    #[test]
    fn test_exact_frame_is_extracted() {
        let mut buf = buffer_of(&[0xAA, 0x55, 0x07, 0x55, 0xAA]);
        assert_eq!(scan(&mut buf), Some(0x07));
        assert!(buf.is_empty());
    }

    #[test]
    fn test_short_buffer_is_untouched() {
        let mut buf = buffer_of(&[0xAA, 0x55, 0x07, 0x55]);
        assert_eq!(scan(&mut buf), None);
        assert_eq!(buf.len(), 4);
    }

    #[test]
    fn test_leading_garbage_is_discarded_with_the_frame() {
        let mut buf = buffer_of(&[0x01, 0x02, 0xAA, 0x55, 0x09, 0x55, 0xAA]);
        assert_eq!(scan(&mut buf), Some(0x09));
        assert!(buf.is_empty());
    }

    #[test]
    fn test_leftmost_frame_wins() {
        // A frame whose command byte is 0xAA makes the tail of the first
        // frame double as the head of a second candidate; the scan must
        // still take the one starting at the smaller index.
        let mut buf = buffer_of(&[0xAA, 0x55, 0xAA, 0x55, 0xAA, 0x55, 0xAA]);
        assert_eq!(scan(&mut buf), Some(0xAA));
        assert_eq!(buf.len(), 2);
    }

    #[test]
    fn test_only_first_of_two_queued_frames_is_extracted() {
        let mut buf = buffer_of(&[
            0xAA, 0x55, 0x01, 0x55, 0xAA, // frame 1
            0xAA, 0x55, 0x02, 0x55, 0xAA, // frame 2
        ]);
        assert_eq!(scan(&mut buf), Some(0x01));
        assert_eq!(buf.len(), FRAME_LEN);
        assert_eq!(scan(&mut buf), Some(0x02));
        assert!(buf.is_empty());
    }

    #[test]
    fn test_resync_discards_five_bytes_of_garbage() {
        let garbage = [0x11u8; 11];
        let mut buf = buffer_of(&garbage);
        assert_eq!(scan(&mut buf), None);
        assert_eq!(buf.len(), garbage.len() - RESYNC_DISCARD);
    }

    #[test]
    fn test_no_resync_at_or_below_threshold() {
        // 10 bytes of garbage could still be the prefix of noise followed
        // by a frame; wait for more data instead of discarding.
        let mut buf = buffer_of(&[0x22u8; 10]);
        assert_eq!(scan(&mut buf), None);
        assert_eq!(buf.len(), 10);
    }

    #[test]
    fn test_partial_frame_survives_resync_threshold_boundary() {
        // Garbage followed by a frame head; nothing above the threshold,
        // so the head must remain for the tail to complete later.
        let mut buf = buffer_of(&[0x00, 0x00, 0x00, 0xAA, 0x55, 0x03]);
        assert_eq!(scan(&mut buf), None);
        assert_eq!(buf.len(), 6);
        buf.append(0x55);
        buf.append(0xAA);
        assert_eq!(scan(&mut buf), Some(0x03));
    }

    #[test]
    fn test_wakeup_command_byte_is_unconstrained_payload() {
        let mut buf = buffer_of(&[0xAA, 0x55, 0xFF, 0x55, 0xAA]);
        assert_eq!(scan(&mut buf), Some(0xFF));
    }
}
