//! The IOKit transport for the SMC.
//!
//! # Safety
//!
//! Every IOKit call here is wrapped so that the returned handles are released on all paths, including the error paths
//! of [`IoKitChannel::open`]. A channel owns its connection and nothing else holds a copy of it.

use std::{ffi::c_void, mem, os::raw::c_char};

use scopeguard::defer;
use tracing::debug;

use super::{channel::SmcChannel, codec, session::Session, types::SmcKey};
use crate::{
    error::{Error, Result},
    utils::bindings::{
        io_connect_t, io_iterator_t, mach_task_self_, IOConnectCallStructMethod, IOIteratorNext, IOObjectRelease,
        IOServiceClose, IOServiceGetMatchingServices, IOServiceMatching, IOServiceOpen, SMCKeyData, IO_RETURN_SUCCESS,
        K_IOMAIN_PORT_DEFAULT, SMC_SERVICE_NAME,
    },
};

/// A user-client connection to the `AppleSMC` service
#[derive(Debug)]
pub struct IoKitChannel {
    conn: io_connect_t,
    open: bool,
}

impl IoKitChannel {
    /// Match the `AppleSMC` service and open a connection to the first match.
    pub fn open() -> Result<Self> {
        unsafe {
            let matching = IOServiceMatching(SMC_SERVICE_NAME.as_ptr() as *const c_char);
            if matching.is_null() {
                return Err(Error::ServiceNotFound);
            }

            // IOServiceGetMatchingServices consumes the matching dictionary
            let mut iterator: io_iterator_t = 0;
            let result = IOServiceGetMatchingServices(K_IOMAIN_PORT_DEFAULT, matching, &mut iterator);
            if result != IO_RETURN_SUCCESS {
                debug!(result, "IOServiceGetMatchingServices failed");
                return Err(Error::ServiceNotFound);
            }

            let device = IOIteratorNext(iterator);
            IOObjectRelease(iterator);
            if device == 0 {
                return Err(Error::ServiceNotFound);
            }
            defer! {
                IOObjectRelease(device);
            }

            let mut conn: io_connect_t = 0;
            let result = IOServiceOpen(device, mach_task_self_, 0, &mut conn);
            if result != IO_RETURN_SUCCESS {
                return Err(Error::open_failed(result));
            }

            debug!(conn, "opened AppleSMC connection");
            Ok(Self { conn, open: true })
        }
    }
}

impl SmcChannel for IoKitChannel {
    fn call(&self, selector: u32, input: &SMCKeyData) -> Result<SMCKeyData> {
        let mut output = SMCKeyData::default();
        let mut output_size = mem::size_of::<SMCKeyData>();

        let result = unsafe {
            IOConnectCallStructMethod(
                self.conn,
                selector,
                input as *const SMCKeyData as *const c_void,
                mem::size_of::<SMCKeyData>(),
                &mut output as *mut SMCKeyData as *mut c_void,
                &mut output_size,
            )
        };

        if result != IO_RETURN_SUCCESS {
            let key = SmcKey::from_bytes(codec::unpack_type_tag(input.key));
            return Err(Error::call_failed(key.to_string(), result));
        }

        Ok(output)
    }

    fn close(&mut self) -> Result<()> {
        if !self.open {
            return Ok(());
        }
        self.open = false;

        let result = unsafe { IOServiceClose(self.conn) };
        if result != IO_RETURN_SUCCESS {
            return Err(Error::close_failed(result));
        }
        Ok(())
    }
}

impl Session<IoKitChannel> {
    /// Open a session on the machine's SMC.
    ///
    /// Fails with [`Error::ServiceNotFound`] when no `AppleSMC` service exists and with [`Error::OpenFailed`] when the
    /// service refuses the connection. Every call opens a new, independent connection.
    pub fn open() -> Result<Self> {
        Ok(Self::with_channel(IoKitChannel::open()?))
    }
}
