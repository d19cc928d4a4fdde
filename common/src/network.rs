//! # Domain Models
//!
//! The normalized, caller-facing view of scanner output.
//!
//! * [`host::Host`]: one scanned host with its names and ports.
//! * [`port::Port`]: one probed port together with script results.

pub mod host;
pub mod port;
