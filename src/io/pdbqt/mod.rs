mod reader;

pub use reader::{read_coordinates, read_receptor_types};
