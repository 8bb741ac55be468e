mod reader;

pub use reader::{BOX_KEYS, read_box};
