use parking_lot::Mutex;
use tracing::{debug, instrument, warn};

use super::{
    channel::SmcChannel,
    types::{RawValue, SmcKey, TypeTag},
};
use crate::{
    error::Result,
    utils::bindings::{SMCKeyData, KERNEL_INDEX_SMC, SMC_CMD_READ_BYTES, SMC_CMD_READ_KEYINFO},
};

/// An open connection to the SMC.
///
/// A session owns exactly one channel and closes it once, either through [`Session::close`] or when dropped. Each
/// read runs both protocol phases under the session lock, so a session can be shared between threads without one
/// reader's key-info call landing between another reader's calls.
#[derive(Debug)]
pub struct Session<C: SmcChannel> {
    channel: Mutex<C>,
    closed: bool,
}

impl<C: SmcChannel> Session<C> {
    /// Wrap an already open channel
    pub fn with_channel(channel: C) -> Self {
        Self { channel: Mutex::new(channel), closed: false }
    }

    /// Read the raw value of `key`.
    ///
    /// Fails with [`Error::InvalidKey`](crate::Error::InvalidKey) if `key` isn't 4 bytes long, or with the channel's
    /// error if either protocol phase fails.
    pub fn read_raw_value(&self, key: &str) -> Result<RawValue> {
        self.read_key(key.parse()?)
    }

    /// Read the raw value of an already parsed key.
    ///
    /// The SMC is asked for the key's size and type first, then for that many bytes. A failed first call is returned
    /// without issuing the second.
    #[instrument(level = "debug", skip_all, fields(key = %key))]
    pub fn read_key(&self, key: SmcKey) -> Result<RawValue> {
        let channel = self.channel.lock();

        let info = channel.call(KERNEL_INDEX_SMC, &key_info_request(key))?;
        let data_size = info.key_info.data_size;
        let data_type = TypeTag::from_raw(info.key_info.data_type);
        debug!(data_size, %data_type, "read key info");

        let reply = channel.call(KERNEL_INDEX_SMC, &read_bytes_request(key, data_size))?;

        Ok(RawValue { data_size, data_type, bytes: reply.bytes })
    }

    /// Read a temperature in degrees Celsius.
    ///
    /// Returns `0.0` when the read fails or the value isn't a non-empty `sp78`. Use [`Session::read_raw_value`] to
    /// tell a missing sensor from one that reads zero.
    pub fn read_temperature(&self, key: &str) -> f64 {
        match self.read_raw_value(key) {
            Ok(value) => value.temperature(),
            Err(e) => {
                debug!(key, error = %e, "temperature read failed, reporting 0");
                0.0
            }
        }
    }

    /// Read a fan speed in RPM.
    ///
    /// Returns `0` when the read fails, the value is empty, or its type is neither an unsigned integer nor `fpe2`.
    pub fn read_fan_rpm(&self, key: &str) -> u32 {
        match self.read_raw_value(key) {
            Ok(value) => value.fan_rpm(),
            Err(e) => {
                debug!(key, error = %e, "fan read failed, reporting 0");
                0
            }
        }
    }

    /// Close the session, reporting a failed close to the caller.
    pub fn close(mut self) -> Result<()> {
        self.closed = true;
        self.channel.get_mut().close()
    }
}

impl<C: SmcChannel> Drop for Session<C> {
    fn drop(&mut self) {
        if self.closed {
            return;
        }
        if let Err(e) = self.channel.get_mut().close() {
            warn!(error = %e, "failed to close SMC session");
        }
    }
}

fn key_info_request(key: SmcKey) -> SMCKeyData {
    SMCKeyData { key: key.to_u32(), data8: SMC_CMD_READ_KEYINFO, ..Default::default() }
}

fn read_bytes_request(key: SmcKey, data_size: u32) -> SMCKeyData {
    let mut request = SMCKeyData { key: key.to_u32(), data8: SMC_CMD_READ_BYTES, ..Default::default() };
    request.key_info.data_size = data_size;
    request
}
