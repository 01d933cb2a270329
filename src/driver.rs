//! Polling driver for the Unit-ASR voice recognition module.
//!
//! This module provides the [`AsrDriver`] struct, which owns the UART
//! transport, the bounded receive buffer, and the command dispatch table,
//! and turns the module's raw byte stream into per-command handler calls.
//!
//! The driver is strictly single-threaded and cooperative: the embedding
//! firmware calls [`update()`](AsrDriver::update) from its main loop (or a
//! timer ISR, see [`crate::isr`] with the `timer-isr` feature), and each
//! call performs one non-blocking receive-and-parse cycle. The only blocking
//! waits are the two fixed delays during construction, while the module
//! itself boots.
//!
//! ## Example
//!
//! ```rust
//! # use embedded_hal_mock::eh1::delay::NoopDelay;
//! use unit_asr::driver::AsrDriver;
//! use unit_asr::transport::UartTransport;
//!
//! # struct FixedUart(Vec<u8>);
//! # impl UartTransport for FixedUart {
//! #     fn bytes_available(&mut self) -> usize { self.0.len() }
//! #     fn read_byte(&mut self) -> Option<u8> {
//! #         if self.0.is_empty() { None } else { Some(self.0.remove(0)) }
//! #     }
//! # }
//! # let uart = FixedUart(vec![0xAA, 0x55, 0xFF, 0x55, 0xAA]);
//! # let mut delay = NoopDelay::new();
//! let mut driver = AsrDriver::new(uart, &mut delay);
//!
//! loop {
//!     driver.update();
//!     if driver.is_awake() {
//!         break;
//!     }
//!     # panic!("wakeup frame was queued, the driver must be awake");
//! }
//! ```
//!
//! ## Design notes
//!
//! One frame is surfaced per `update()` call even when several complete
//! frames are queued, so the mapping from poll cycles to observed commands
//! is deterministic. Queued frames are surfaced by subsequent calls in
//! arrival order.
//!
//! For the scan and resynchronization policy, see [`crate::frame`].

use crate::buffer::RxBuffer;
use crate::consts::{SETTLE_DELAY_MS, STARTUP_DELAY_MS, WAKEUP_CMD};
use crate::frame;
use crate::registry::{CommandHandler, CommandRegistry, FallbackHandler};
use crate::transport::UartTransport;
use embedded_hal::delay::DelayNs;

/// Driver for the Unit-ASR module's command stream.
///
/// Owns a [`UartTransport`], a bounded receive buffer, a
/// [`CommandRegistry`], and the wake/last-command state. All mutation goes
/// through `&mut self`; the driver holds no locks and spawns nothing.
///
/// ## Lifecycle
///
/// - [`new()`](AsrDriver::new) runs the one-time blocking startup sequence
///   (100 ms settle, 3000 ms module boot, stale-byte flush) and returns the
///   driver in its steady polling state.
/// - [`update()`](AsrDriver::update) is then called repeatedly; it drains
///   whatever bytes the transport reports available and extracts at most one
///   command frame.
/// - Handlers registered with [`on()`](AsrDriver::on) /
///   [`on_unknown()`](AsrDriver::on_unknown) are borrowed for the driver's
///   lifetime `'a` and may be installed before or between poll cycles.
///
/// ## Type parameters
///
/// - `U`: the UART seam, see [`UartTransport`]
#[derive(Debug)]
pub struct AsrDriver<'a, U: UartTransport> {
    /// The UART transport. Exposed so callers can reclaim or inspect the
    /// peripheral; the driver itself only reads from it during `update()`.
    pub uart: U,
    rx_buffer: RxBuffer,
    registry: CommandRegistry<'a>,
    current_command_num: Option<u8>,
    is_awake: bool,
}

impl<'a, U: UartTransport> AsrDriver<'a, U> {
    /// Creates the driver and runs the module's startup sequence.
    ///
    /// Blocks on `delay` for the fixed settle and boot delays, then flushes
    /// any stale bytes the peripheral accumulated while the module was
    /// booting. The delay provider is only borrowed for construction.
    pub fn new(mut uart: U, delay: &mut impl DelayNs) -> Self {
        delay.delay_ms(SETTLE_DELAY_MS);
        delay.delay_ms(STARTUP_DELAY_MS);
        uart.clear_rx_buffer();
        debug!("module boot sequence complete");
        Self {
            uart,
            rx_buffer: RxBuffer::new(),
            registry: CommandRegistry::new(),
            current_command_num: None,
            is_awake: false,
        }
    }

    /// Registers `handler` for voice command `cmd_num`, replacing any
    /// previous handler for that command.
    pub fn on(&mut self, cmd_num: u8, handler: CommandHandler<'a>) {
        self.registry.register(cmd_num, handler);
    }

    /// Registers the handler invoked (with the command number) for commands
    /// that have no handler of their own. The default is a no-op.
    pub fn on_unknown(&mut self, handler: FallbackHandler<'a>) {
        self.registry.register_fallback(handler);
    }

    /// Runs one poll cycle: drain available transport bytes, then extract
    /// and dispatch at most one command frame.
    ///
    /// Never blocks. If a frame is mid-flight when the transport runs dry,
    /// its bytes stay buffered and a later cycle completes it.
    pub fn update(&mut self) {
        self.receive();
        self.parse();
    }

    /// The most recently recognized command number, or `None` if no frame
    /// has been recognized yet. Persists across cycles.
    pub fn current_command_num(&self) -> Option<u8> {
        self.current_command_num
    }

    /// Whether the module has reported its wakeup command at least once.
    ///
    /// Latches on the first [`WAKEUP_CMD`] dispatch and is never cleared by
    /// the driver.
    pub fn is_awake(&self) -> bool {
        self.is_awake
    }

    /// Number of bytes currently held in the receive buffer.
    pub fn buffer_size(&self) -> usize {
        self.rx_buffer.len()
    }

    /// Receive phase: pull every byte the transport reports available at
    /// the time of each check. A failed single-byte read is dropped without
    /// retry.
    fn receive(&mut self) {
        while self.uart.bytes_available() > 0 {
            if let Some(byte) = self.uart.read_byte() {
                self.rx_buffer.append(byte);
            }
        }
    }

    /// Parse phase: scan the buffer once and dispatch on a match.
    ///
    /// The wake latch is set before the handler runs, so a wakeup handler
    /// already observes the driver awake.
    fn parse(&mut self) {
        if let Some(cmd) = frame::scan(&mut self.rx_buffer) {
            self.current_command_num = Some(cmd);
            if cmd == WAKEUP_CMD {
                self.is_awake = true;
            }
            self.registry.dispatch(cmd);
        }
    }
}
