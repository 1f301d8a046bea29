use crate::core::LogError;
use crate::logging::histogram_log_writer::HistogramLogWriter;
use std::io::Write;

pub const HISTOGRAM_LOG_FORMAT_VERSION: &str = "1.0";
pub const LOG_LEGEND: &str = r#""Tag","Total_Count","Gutter_Count","Compressed_Histogram""#;

/// Typestate of a builder that has no sink yet.
pub struct NeedsSink;

/// Lines written once at the top of a log, all of them optional.
#[derive(Default)]
struct LogHeader<'a> {
    comment: Option<&'a str>,
    sample: Option<&'a str>,
    format_version: bool,
    legend: bool,
}

impl<'a> LogHeader<'a> {
    fn write_to<T: Write>(&self, sink: &mut T) -> Result<(), LogError> {
        for line in self.comment.iter().flat_map(|c| c.lines()) {
            writeln!(sink, "#{}", line)?;
        }
        if self.format_version {
            writeln!(sink, "#[Histogram log format version {}]", HISTOGRAM_LOG_FORMAT_VERSION)?;
        }
        if let Some(sample) = self.sample {
            writeln!(sink, "#[Sample: {}]", sample)?;
        }
        if self.legend {
            writeln!(sink, "{}", LOG_LEGEND)?;
        }
        Ok(())
    }
}

/// Configures a `HistogramLogWriter`. `S` is `NeedsSink` until `sink` is called,
/// then the sink itself, so `build` only exists once there is something to write to.
pub struct LogWriterBuilder<'a, S> {
    header: LogHeader<'a>,
    sink: S,
}

pub fn builder<'a>() -> LogWriterBuilder<'a, NeedsSink> {
    LogWriterBuilder {
        header: LogHeader::default(),
        sink: NeedsSink,
    }
}

impl<'a, S> LogWriterBuilder<'a, S> {
    pub fn write_format_version(mut self) -> Self {
        self.header.format_version = true;
        self
    }

    pub fn write_legend(mut self) -> Self {
        self.header.legend = true;
        self
    }

    /// Free text written as `#` comment lines, one per line of `comment`.
    pub fn header_comment<'b: 'a>(mut self, comment: &'b str) -> Self {
        self.header.comment = Some(comment);
        self
    }

    /// Sample or tube the logged histograms were acquired from.
    pub fn sample<'b: 'a>(mut self, sample: &'b str) -> Self {
        self.header.sample = Some(sample);
        self
    }

    pub fn sink<T: Write>(self, sink: T) -> LogWriterBuilder<'a, T> {
        LogWriterBuilder {
            header: self.header,
            sink,
        }
    }
}

impl<'a, T: Write> LogWriterBuilder<'a, T> {
    pub fn build(self) -> Result<HistogramLogWriter<T>, LogError> {
        let mut sink = self.sink;
        self.header.write_to(&mut sink)?;
        Ok(HistogramLogWriter::new(sink))
    }

    pub fn build_with_header(mut self) -> Result<HistogramLogWriter<T>, LogError> {
        self.header.format_version = true;
        self.header.legend = true;
        self.build()
    }
}
