use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use crate::core::{Counter, GutterPolicy, LogError};
use crate::serialization::SerializableHistogram;
use crate::st::Histogram1DImpl;
use std::fmt::Arguments;
use std::io::{self, Write};

/// Writes one line per histogram: `Tag=<name>,<total>,<gutter>,<base64 payload>`.
pub struct HistogramLogWriter<T> {
    target_buffer: Vec<u8>,
    encode_buffer: String,
    sink: T,
}

fn has_delimiters(text: &str) -> bool {
    text.chars().any(|c| c == ',' || c == ' ' || c == '\r' || c == '\n')
}

impl<T: Write> HistogramLogWriter<T> {
    pub fn new(sink: T) -> HistogramLogWriter<T> {
        HistogramLogWriter {
            target_buffer: Vec::with_capacity(64),
            encode_buffer: String::with_capacity(64),
            sink,
        }
    }

    pub fn write_fmt(&mut self, args: Arguments) -> Result<(), LogError> {
        Ok(self.sink.write_fmt(args)?)
    }

    pub fn flush(&mut self) -> Result<(), io::Error> {
        self.sink.flush()
    }

    pub fn output_comment(&mut self, comment: &str) -> Result<(), LogError> {
        writeln!(self.sink, "#{}", comment)?;
        Ok(())
    }

    pub fn log<C: Counter, P: GutterPolicy>(&mut self, histogram: &Histogram1DImpl<C, P>) -> Result<(), LogError> {
        self.target_buffer.clear();
        histogram.serialize_into_compressed(&mut self.target_buffer)?;

        let name = histogram.name();
        if has_delimiters(name) {
            warn!("histogram name {:?} contains delimiters, logging it untagged", name);
        } else if !name.is_empty() {
            write!(self.sink, "Tag={},", name)?;
        }

        write!(self.sink, "{},{},", histogram.get_total_count(), histogram.gutter_count())?;

        self.encode_buffer.clear();
        STANDARD.encode_string(&self.target_buffer, &mut self.encode_buffer);
        self.sink.write_all(self.encode_buffer.as_bytes())?;
        writeln!(self.sink)?;

        Ok(())
    }

    pub fn into_inner(self) -> T {
        self.sink
    }
}
