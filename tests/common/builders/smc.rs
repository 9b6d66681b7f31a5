use std::{collections::HashMap, sync::Arc};

use darwin_smc::{
    error::{Error, Result},
    smc::{SmcChannel, SmcKey, TypeTag},
    utils::bindings::{SMCKeyData, SMC_CMD_READ_BYTES, SMC_CMD_READ_KEYINFO},
};
use parking_lot::Mutex;

/// A call seen by a [`ScriptedChannel`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedCall {
    pub selector: u32,
    pub key: String,
    pub sub_command: u8,
    pub data_size: u32,
}

#[derive(Debug, Clone)]
enum Reply {
    Value { data_size: u32, data_type: TypeTag, bytes: Vec<u8> },
    Fail(i32),
}

/// A channel that answers from a fixed table of keys and records every call
#[derive(Debug)]
pub struct ScriptedChannel {
    replies: HashMap<u32, Reply>,
    calls: Arc<Mutex<Vec<RecordedCall>>>,
    closes: Arc<Mutex<usize>>,
    close_error: Option<i32>,
}

impl SmcChannel for ScriptedChannel {
    fn call(&self, selector: u32, input: &SMCKeyData) -> Result<SMCKeyData> {
        let key = SmcKey::from_bytes(input.key.to_be_bytes()).to_string();
        self.calls.lock().push(RecordedCall {
            selector,
            key: key.clone(),
            sub_command: input.data8,
            data_size: input.key_info.data_size,
        });

        // Unknown keys fail like the real SMC does
        let reply = self.replies.get(&input.key).cloned().unwrap_or(Reply::Fail(0x84));
        let (data_size, data_type, bytes) = match reply {
            Reply::Fail(code) => return Err(Error::CallFailed { key, code }),
            Reply::Value { data_size, data_type, bytes } => (data_size, data_type, bytes),
        };

        let mut output = SMCKeyData::default();
        match input.data8 {
            SMC_CMD_READ_KEYINFO => {
                output.key_info.data_size = data_size;
                output.key_info.data_type = u32::from_be_bytes(*data_type.as_bytes());
            }
            SMC_CMD_READ_BYTES => output.bytes[..bytes.len()].copy_from_slice(&bytes),
            other => panic!("unexpected sub-command {}", other),
        }
        Ok(output)
    }

    fn close(&mut self) -> Result<()> {
        *self.closes.lock() += 1;
        match self.close_error {
            Some(code) => Err(Error::CloseFailed { code }),
            None => Ok(()),
        }
    }
}

/// Builder for creating scripted SMC channels
#[derive(Debug, Default)]
pub struct TestSmcBuilder {
    replies: HashMap<u32, Reply>,
    close_error: Option<i32>,
}

impl TestSmcBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Answer `key` with the given value
    pub fn with_value(mut self, key: &str, data_type: TypeTag, bytes: &[u8]) -> Self {
        let reply = Reply::Value { data_size: bytes.len() as u32, data_type, bytes: bytes.to_vec() };
        self.replies.insert(Self::wire_key(key), reply);
        self
    }

    /// Answer `key` with an `sp78` temperature
    pub fn with_temperature(self, key: &str, celsius: f64) -> Self {
        let raw = ((celsius * 256.0) as i16).to_be_bytes();
        self.with_value(key, TypeTag::SP78, &raw)
    }

    /// Answer `key` with an `fpe2` fan speed
    pub fn with_fan_rpm(self, key: &str, rpm: u16) -> Self {
        self.with_value(key, TypeTag::FPE2, &(rpm << 2).to_be_bytes())
    }

    /// Fail every call for `key` with `code`
    pub fn with_failure(mut self, key: &str, code: i32) -> Self {
        self.replies.insert(Self::wire_key(key), Reply::Fail(code));
        self
    }

    pub fn with_close_error(mut self, code: i32) -> Self {
        self.close_error = Some(code);
        self
    }

    pub fn build(self) -> (ScriptedChannel, ChannelLog) {
        let log = ChannelLog::default();
        let channel = ScriptedChannel {
            replies: self.replies,
            calls: Arc::clone(&log.calls),
            closes: Arc::clone(&log.closes),
            close_error: self.close_error,
        };
        (channel, log)
    }

    fn wire_key(key: &str) -> u32 {
        key.parse::<SmcKey>().expect("test keys are 4 bytes").to_u32()
    }
}

/// What a [`ScriptedChannel`] saw, readable after the channel moved into a session
#[derive(Debug, Default, Clone)]
pub struct ChannelLog {
    calls: Arc<Mutex<Vec<RecordedCall>>>,
    closes: Arc<Mutex<usize>>,
}

impl ChannelLog {
    pub fn calls(&self) -> Vec<RecordedCall> {
        self.calls.lock().clone()
    }

    pub fn closes(&self) -> usize {
        *self.closes.lock()
    }
}
