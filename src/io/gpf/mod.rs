mod writer;

pub use writer::{GpfFields, TEMPLATE, render, write};
