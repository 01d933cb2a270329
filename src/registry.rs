//! Command-to-handler dispatch table.
//!
//! The command space is a single byte, so the registry is a flat 256-slot
//! table of handler references plus one fallback slot — no hashing and no
//! allocation. Handlers are mutable closure references borrowed from the
//! embedding application; the registry (and the driver that owns it) must
//! not outlive them.

use core::array;
use core::fmt;

/// Zero-argument handler invoked when its registered command is recognized.
pub type CommandHandler<'a> = &'a mut (dyn FnMut() + 'a);

/// Fallback handler invoked with the command number when no per-command
/// handler is registered for it.
pub type FallbackHandler<'a> = &'a mut (dyn FnMut(u8) + 'a);

/// Table mapping each possible command byte to an optional handler, with a
/// single fallback slot for everything unmatched.
///
/// The default fallback is a no-op: an unregistered command is not an error,
/// it is simply ignored. The last registration for a given command wins.
pub struct CommandRegistry<'a> {
    handlers: [Option<CommandHandler<'a>>; 256],
    fallback: Option<FallbackHandler<'a>>,
}

impl<'a> CommandRegistry<'a> {
    /// Creates a registry with no handlers and the no-op fallback.
    pub fn new() -> Self {
        Self {
            handlers: array::from_fn(|_| None),
            fallback: None,
        }
    }

    /// Installs (or overwrites) the handler for `cmd_num`.
    pub fn register(&mut self, cmd_num: u8, handler: CommandHandler<'a>) {
        self.handlers[cmd_num as usize] = Some(handler);
    }

    /// Installs the fallback handler, replacing the default no-op.
    pub fn register_fallback(&mut self, handler: FallbackHandler<'a>) {
        self.fallback = Some(handler);
    }

    /// Invokes the handler registered for `cmd_num`, or the fallback with
    /// `cmd_num` when none is registered. Never fails.
    pub fn dispatch(&mut self, cmd_num: u8) {
        match self.handlers[cmd_num as usize].as_mut() {
            Some(handler) => {
                trace!("dispatching command {}", cmd_num);
                handler();
            }
            None => {
                trace!("no handler for command {}, using fallback", cmd_num);
                if let Some(fallback) = self.fallback.as_mut() {
                    fallback(cmd_num);
                }
            }
        }
    }
}

impl Default for CommandRegistry<'_> {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for CommandRegistry<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CommandRegistry")
            .field(
                "registered",
                &self.handlers.iter().filter(|h| h.is_some()).count(),
            )
            .field("has_fallback", &self.fallback.is_some())
            .finish()
    }
}
