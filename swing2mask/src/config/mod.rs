mod writer;

pub use writer::ConfigWriter;
