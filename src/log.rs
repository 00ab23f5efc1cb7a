//! Feature-gated event logging.
//!
//! With `esp32-log` enabled every event is printed through `esp_println`.
//! Without it the arguments are still type-checked, then dropped.

macro_rules! log_event {
    ($($arg:tt)*) => {{
        #[cfg(feature = "esp32-log")]
        esp_println::println!($($arg)*);
        #[cfg(not(feature = "esp32-log"))]
        $crate::log::discard(format_args!($($arg)*));
    }};
}

pub(crate) use log_event;

#[cfg(not(feature = "esp32-log"))]
#[inline(always)]
pub(crate) fn discard(_args: core::fmt::Arguments<'_>) {}
