//! FFI bindings for the SMC user client.
//!
//! The frame layout below is shared by every platform because the session builds and inspects frames without
//! touching IOKit. The IOKit functions themselves only exist on macOS.

//------------------------------------------------------------------------------
// SMC constants
//------------------------------------------------------------------------------

/// Selector of the SMC user-client struct method
pub const KERNEL_INDEX_SMC: u32 = 2;
/// SMC command to read bytes
pub const SMC_CMD_READ_BYTES: u8 = 5;
/// SMC command to read key info
pub const SMC_CMD_READ_KEYINFO: u8 = 9;
/// Successful IOKit operation
pub const IO_RETURN_SUCCESS: i32 = 0;

/// IOKit service class of the management controller
pub const SMC_SERVICE_NAME: &[u8] = b"AppleSMC\0";

//------------------------------------------------------------------------------
// SMC data structures
//------------------------------------------------------------------------------

/// SMC firmware version block
#[repr(C)]
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq)]
pub struct SMCVersion {
    pub major: u8,
    pub minor: u8,
    pub build: u8,
    pub reserved: [u8; 1],
    pub release: u16,
}

/// SMC power limit block
#[repr(C)]
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq)]
pub struct SMCPLimitData {
    pub version: u16,
    pub length: u16,
    pub cpu_plimit: u32,
    pub gpu_plimit: u32,
    pub mem_plimit: u32,
}

/// Metadata the SMC reports for a key
#[repr(C)]
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq)]
pub struct SMCKeyInfo {
    pub data_size: u32,
    pub data_type: u32,
    pub data_attributes: u8,
}

/// Request and response frame of the SMC user client.
///
/// The same layout travels in both directions. `Default` yields an all-zero frame, which is how every request must
/// start.
#[repr(C)]
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq)]
pub struct SMCKeyData {
    pub key: u32,
    pub vers: SMCVersion,
    pub p_limit_data: SMCPLimitData,
    pub key_info: SMCKeyInfo,
    pub result: u8,
    pub status: u8,
    pub data8: u8,
    pub data32: u32,
    pub bytes: [u8; 32],
}

// The kernel side rejects any other struct size
const _: () = assert!(std::mem::size_of::<SMCKeyData>() == 80);

//------------------------------------------------------------------------------
// IOKit function declarations
//------------------------------------------------------------------------------

#[cfg(target_os = "macos")]
pub use self::iokit::*;

#[cfg(target_os = "macos")]
#[allow(non_camel_case_types)]
mod iokit {
    use std::os::raw::{c_char, c_int, c_void};

    use libc::mach_port_t;

    pub type kern_return_t = c_int;
    pub type io_object_t = mach_port_t;
    pub type io_iterator_t = io_object_t;
    pub type io_service_t = io_object_t;
    pub type io_connect_t = io_object_t;

    /// `kIOMainPortDefault`
    pub const K_IOMAIN_PORT_DEFAULT: mach_port_t = 0;

    #[link(name = "IOKit", kind = "framework")]
    extern "C" {
        pub fn IOServiceMatching(name: *const c_char) -> *mut c_void;
        pub fn IOServiceGetMatchingServices(
            main_port: mach_port_t,
            matching: *mut c_void,
            existing: *mut io_iterator_t,
        ) -> kern_return_t;
        pub fn IOIteratorNext(iterator: io_iterator_t) -> io_object_t;
        pub fn IOObjectRelease(object: io_object_t) -> kern_return_t;
        pub fn IOServiceOpen(
            service: io_service_t,
            owning_task: mach_port_t,
            type_: u32,
            connect: *mut io_connect_t,
        ) -> kern_return_t;
        pub fn IOServiceClose(connect: io_connect_t) -> kern_return_t;
        pub fn IOConnectCallStructMethod(
            connection: io_connect_t,
            selector: u32,
            input_struct: *const c_void,
            input_struct_cnt: usize,
            output_struct: *mut c_void,
            output_struct_cnt: *mut usize,
        ) -> kern_return_t;
    }

    extern "C" {
        pub static mach_task_self_: mach_port_t;
    }
}
