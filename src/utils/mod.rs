pub mod fs_atomic;
pub mod json_io;
pub mod merge;
pub mod merge_key;
