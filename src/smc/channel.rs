use std::fmt::Debug;

#[cfg(test)]
use mockall::automock;

use crate::{error::Result, utils::bindings::SMCKeyData};

/// A synchronous call channel to the SMC.
///
/// The channel only moves frames. It knows nothing about the two-phase read protocol, which lives in
/// [`Session`](super::Session). Implementations block until the host answers.
#[cfg_attr(test, automock)]
pub trait SmcChannel: Debug + Send {
    /// Send `input` to the struct method `selector` and return the reply frame.
    fn call(&self, selector: u32, input: &SMCKeyData) -> Result<SMCKeyData>;

    /// Release the underlying connection.
    fn close(&mut self) -> Result<()>;
}
