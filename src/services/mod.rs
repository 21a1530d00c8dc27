pub mod matcher;
pub mod media;
pub mod storage;
pub mod urls;
