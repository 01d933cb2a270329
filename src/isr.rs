//! `critical-section` helpers for polling the driver from a timer interrupt.
//!
//! Firmware that prefers a hardware timer over a main-loop poll can park the
//! driver in a `static` and run [`global_asr_driver_update`] from the timer's
//! interrupt handler. All access goes through `critical_section::with`, so
//! the ISR and any foreground code that inspects the driver cannot observe
//! it mid-cycle.
//!
//! Handlers registered on a global driver must themselves be `'static`.

use crate::driver::AsrDriver;
use crate::transport::UartTransport;
use core::cell::RefCell;
use critical_section::Mutex;
use embedded_hal::delay::DelayNs;

/// Initializes the global static slot for an [`AsrDriver`].
///
/// # Example
/// ```ignore
/// use core::cell::RefCell;
/// use critical_section::Mutex;
/// use unit_asr::driver::AsrDriver;
/// use unit_asr::isr::global_asr_driver_init;
/// use some_hal::Uart1;
///
/// static ASR_DRIVER: Mutex<RefCell<Option<AsrDriver<'static, Uart1>>>> =
///     global_asr_driver_init::<Uart1>();
/// ```
pub const fn global_asr_driver_init<U: UartTransport>()
-> Mutex<RefCell<Option<AsrDriver<'static, U>>>> {
    Mutex::new(RefCell::new(None))
}

/// Constructs the driver (running its blocking startup sequence) and stores
/// it in the global slot.
///
/// Call once from `main` before enabling the timer interrupt.
///
/// # Example
/// ```ignore
/// global_asr_driver_setup(&ASR_DRIVER, uart, &mut delay);
/// ```
pub fn global_asr_driver_setup<U: UartTransport>(
    global_driver: &'static Mutex<RefCell<Option<AsrDriver<'static, U>>>>,
    uart: U,
    delay: &mut impl DelayNs,
) {
    let driver = AsrDriver::new(uart, delay);
    critical_section::with(|cs| {
        let _ = global_driver.borrow(cs).replace(Some(driver));
    });
}

/// Runs one poll cycle on the global driver, if it has been set up.
///
/// # Example
/// ```ignore
/// #[interrupt]
/// fn TIM2() {
///     global_asr_driver_update(&ASR_DRIVER);
/// }
/// ```
pub fn global_asr_driver_update<U: UartTransport>(
    global_driver: &'static Mutex<RefCell<Option<AsrDriver<'static, U>>>>,
) {
    critical_section::with(|cs| {
        if let Some(driver) = global_driver.borrow(cs).borrow_mut().as_mut() {
            driver.update();
        }
    });
}
