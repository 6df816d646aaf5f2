pub mod file;
pub mod format;
pub mod polling;
pub mod storage;
pub mod time;
pub mod validate;
