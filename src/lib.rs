pub mod codec;
pub mod command;
pub mod rdb;
pub mod sink;

pub type Error = Box<dyn std::error::Error + Send + Sync>;
pub type Result<T> = std::result::Result<T, Error>;
