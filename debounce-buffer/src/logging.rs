// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

// Conditional logging shim: `tracing` when enabled. Without it, warnings go
// to stderr and debug/trace events are dropped.
//
// Declared with `#[macro_use]` ahead of the other modules so the macros are in
// textual scope everywhere; a `use` re-export of `warn` collides with the
// built-in attribute of the same name.

#[cfg(feature = "tracing")]
macro_rules! trace {
    ($($arg:tt)*) => {{
        tracing::trace!($($arg)*);
    }};
}

#[cfg(feature = "tracing")]
macro_rules! debug {
    ($($arg:tt)*) => {{
        tracing::debug!($($arg)*);
    }};
}

#[cfg(feature = "tracing")]
macro_rules! warn {
    ($($arg:tt)*) => {{
        tracing::warn!($($arg)*);
    }};
}

#[cfg(not(feature = "tracing"))]
macro_rules! trace {
    ($($arg:tt)*) => {{}};
}

#[cfg(not(feature = "tracing"))]
macro_rules! debug {
    ($($arg:tt)*) => {{}};
}

#[cfg(not(feature = "tracing"))]
macro_rules! warn {
    ($field:ident = ?$value:expr, $message:literal) => {{
        eprintln!(
            concat!("WARN ", $message, " ", stringify!($field), "={:?}"),
            $value
        );
    }};
    ($($arg:tt)*) => {{
        eprintln!($($arg)*);
    }};
}
