pub mod format;
pub mod platform;
pub mod poll;
pub mod schedule;
pub mod storage;
pub mod story;
pub mod streak;
pub mod timing;
pub mod wear;
