//! # unit-asr
//!
//! A portable, no_std Rust driver for the M5Stack Unit-ASR offline voice
//! recognition module (CI-03T), which reports each recognized phrase over
//! UART as a fixed five-byte frame.
//!
//! This driver implements the receive side of the module's serial protocol:
//! - `embedded-hal` traits for startup timing
//! - a bounded receive buffer that can never outgrow its fixed capacity
//! - a frame scanner that tolerates noise, partial frames, and misaligned
//!   data, and resynchronizes automatically
//! - a per-command handler registry with a fallback for unknown commands
//! - optional `critical-section` helpers for polling from a timer interrupt
//!
//! ## Crate features
//! | Feature               | Description |
//! |-----------------------|-------------|
//! | `std`                 | Disables `#![no_std]` support and replaces `heapless::Vec`s with
//! `std::vec::Vec`s |
//! | `timer-isr`           | Enables `critical_section`-guarded global driver helpers |
//! | `defmt-0-3`           | Uses `defmt` logging |
//! | `log`                 | Uses `log` logging |
//!
//! ## Wire format
//!
//! The module emits one frame per recognized phrase:
//!
//! | Offset | Value | Meaning |
//! |--------|-------|---------|
//! | 0      | `0xAA` | preamble |
//! | 1      | `0x55` | preamble |
//! | 2      | `CMD`  | command number (0–255) |
//! | 3      | `0x55` | postamble |
//! | 4      | `0xAA` | postamble |
//!
//! There is no checksum and no length field. `CMD = 0xFF` is reserved as the
//! wakeup notification; its first arrival latches
//! [`AsrDriver::is_awake`](driver::AsrDriver::is_awake).
//!
//! ## Usage
//!
//! ```rust
//! use embedded_hal_mock::eh1::delay::NoopDelay;
//! use unit_asr::driver::AsrDriver;
//! use unit_asr::transport::UartTransport;
//!
//! struct FixedUart(Vec<u8>);
//!
//! impl UartTransport for FixedUart {
//!     fn bytes_available(&mut self) -> usize {
//!         self.0.len()
//!     }
//!     fn read_byte(&mut self) -> Option<u8> {
//!         if self.0.is_empty() { None } else { Some(self.0.remove(0)) }
//!     }
//! }
//!
//! let uart = FixedUart(vec![0xAA, 0x55, 0x07, 0x55, 0xAA]);
//! let mut delay = NoopDelay::new();
//! let mut on_seven = || { /* react to voice command 7 */ };
//!
//! let mut driver = AsrDriver::new(uart, &mut delay);
//! driver.on(0x07, &mut on_seven);
//!
//! driver.update(); // call repeatedly from the main loop
//! assert_eq!(driver.current_command_num(), Some(0x07));
//! ```
//!
//! On hardware, `update()` is called from the firmware's main loop (or from a
//! timer ISR via the `timer-isr` helpers) and the UART peripheral plugs in
//! through [`transport::UartTransport`] — implemented automatically for any
//! type providing `embedded_io::Read + embedded_io::ReadReady`.
//!
//! ## Integration notes
//!
//! - Construction blocks for roughly 3.1 s while the module boots; call
//!   [`AsrDriver::new`](driver::AsrDriver::new) once, early.
//! - `update()` itself never blocks and extracts at most one frame per call,
//!   so a caller observes commands in arrival order, one per cycle.
//! - The driver is not reentrant; drive it from a single loop or guard it
//!   externally.
//!
//! --
//! Designed for `#![no_std]` use in resource-constrained embedded environments.

#![deny(
    bad_style,
    dead_code,
    improper_ctypes,
    non_shorthand_field_patterns,
    no_mangle_generic_items,
    overflowing_literals,
    path_statements,
    patterns_in_fns_without_body,
    unconditional_recursion,
    unused,
    while_true,
    missing_debug_implementations,
    missing_docs,
    trivial_casts,
    trivial_numeric_casts,
    unused_extern_crates,
    unused_import_braces,
    unused_qualifications,
    unused_results
)]
#![cfg_attr(not(feature = "std"), no_std)]

// Must come first so the logging macros are visible to the other modules.
mod fmt;

#[cfg(feature = "timer-isr")]
pub use critical_section;

#[cfg(not(feature = "std"))]
pub use heapless;

pub mod buffer;
pub mod consts;
pub mod driver;
pub mod frame;
#[cfg(feature = "timer-isr")]
pub mod isr;
pub mod registry;
pub mod transport;
