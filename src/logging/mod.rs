pub mod histogram_log_writer;
pub mod histogram_log_reader;
pub mod log_writer_builder;

pub use self::histogram_log_reader::{HistogramLogReader, LogEntry};
pub use self::histogram_log_writer::HistogramLogWriter;
pub use self::log_writer_builder::{builder, LogWriterBuilder};
