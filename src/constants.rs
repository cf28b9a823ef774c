pub mod merge {
    pub const DEFAULT_KEYS: &[&str] = &["name", "id", "refId"];
    pub const NAME_KEY: &str = "name";
}

pub mod output {
    pub const INDENT: &[u8] = b"  ";
    pub const FILE_MODE: u32 = 0o644;
    pub const TEMP_TOKEN_LENGTH: usize = 8;
}

pub mod process {
    pub const BIN_NAME: &str = "json-merger";
    pub const EXIT_FAILURE: i32 = 1;
}
