//! Darwin SMC - read sensor telemetry from the Apple System Management Controller
//!
//! The SMC exposes temperatures, fan speeds and other registers as four character keys. This crate speaks the SMC
//! key/value protocol over the IOKit user client: it packs keys, runs the two-phase read (key info, then bytes) and
//! decodes the returned buffer.
//!
//! # Examples
//!
//! ```no_run
//! # #[cfg(target_os = "macos")]
//! # fn main() -> darwin_smc::Result<()> {
//! use darwin_smc::prelude::*;
//!
//! let session = Session::open()?;
//! println!("CPU: {:.1}°C", session.read_temperature("TC0H"));
//! println!("Fan 0: {} rpm", session.read_fan_rpm("F0Ac"));
//! session.close()
//! # }
//! # #[cfg(not(target_os = "macos"))]
//! # fn main() {}
//! ```
//!
//! # Error Handling
//!
//! Opening, closing and raw reads return [`Result`]. The typed readers `read_temperature` and `read_fan_rpm` never
//! fail: anything they can't produce reads as zero.
//!
//! ```rust
//! use darwin_smc::{Error, Result};
//!
//! fn example() -> Result<()> {
//!     Err(Error::ServiceNotFound)
//! }
//! # assert!(example().is_err());
//! ```
//!
//! # Thread Safety
//!
//! A [`Session`](smc::Session) serializes its reads internally and is `Send + Sync`, so one session can be shared
//! between threads. Opening several sessions is also safe; each owns its own connection.
//!
//! # Platform Support
//!
//! Only macOS has an SMC. Elsewhere the codec, the session over a custom [`SmcChannel`](smc::SmcChannel) and the
//! report still build, but [`Session::open`](smc::Session) does not exist.

#![doc(html_root_url = "https://docs.rs/darwin-smc/0.1.0")]

pub mod error;
pub mod report;
pub mod smc;
pub mod utils;

pub use error::{Error, Result};

/// Re-export common types for convenience
pub mod prelude {
    pub use crate::report::{Report, ReportConfig};
    #[cfg(target_os = "macos")]
    pub use crate::smc::IoKitChannel;
    pub use crate::smc::{RawValue, Session, SmcChannel, SmcKey, TypeTag};
    pub use crate::Error;
    pub use crate::Result;
}
