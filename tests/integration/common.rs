use std::path::PathBuf;

pub const BINARY_PATH: &str = env!("CARGO_BIN_EXE_hearth");

pub fn fixture(relative: &str) -> String {
    let root = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    root.join(relative).display().to_string()
}
