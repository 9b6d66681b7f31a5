//! The SMC key/value protocol.
//!
//! Every SMC register is addressed by a four character key. Reading one takes two calls on the same channel: the
//! first returns the value's size and type tag, the second returns that many bytes. [`Session`] runs both calls as one
//! transaction and [`codec`] turns the bytes into numbers.
//!
//! # Examples
//!
//! ```no_run
//! # #[cfg(target_os = "macos")]
//! # fn main() -> darwin_smc::Result<()> {
//! use darwin_smc::smc::{constants::SMC_KEY_CPU_HEATSINK_TEMP, Session};
//!
//! let session = Session::open()?;
//! println!("CPU: {:.1}°C", session.read_temperature(SMC_KEY_CPU_HEATSINK_TEMP));
//!
//! // The typed readers report failures as zero; the raw read keeps the error
//! let raw = session.read_raw_value("F0Ac")?;
//! println!("{} bytes of {}", raw.data_size, raw.data_type);
//! session.close()
//! # }
//! # #[cfg(not(target_os = "macos"))]
//! # fn main() {}
//! ```

pub mod channel;
pub mod codec;
pub mod constants;
#[cfg(target_os = "macos")]
pub mod iokit;
pub mod session;
pub mod types;


#[cfg(test)]
pub use channel::MockSmcChannel;
pub use channel::SmcChannel;
#[cfg(target_os = "macos")]
pub use iokit::IoKitChannel;
pub use session::Session;
pub use types::{RawValue, SmcKey, TypeTag, SMC_BYTES_LEN};
