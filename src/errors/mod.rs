mod merge_error;

pub use merge_error::{MergeError, MergeErrorKind};
