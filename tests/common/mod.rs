pub mod builders;

pub use builders::smc::{ChannelLog, RecordedCall, ScriptedChannel, TestSmcBuilder};
