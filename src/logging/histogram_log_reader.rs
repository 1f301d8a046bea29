use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use crate::core::{Counter, LogError};
use crate::serialization::DeserializableHistogram;
use crate::st::Histogram1D;
use lazycell::LazyCell;
use std::io::{BufRead, Lines};
use std::marker::PhantomData;

/// One histogram line of a log. The histogram itself is decoded on first access.
pub struct LogEntry<C: Counter> {
    tag: Option<String>,
    total_count: u64,
    gutter_count: u64,
    raw_histogram: String,
    histogram: LazyCell<Result<Histogram1D<C>, LogError>>,
}

impl<C: Counter> LogEntry<C> {
    fn deserialize_histogram(raw_histogram: &str) -> Result<Histogram1D<C>, LogError> {
        let decoded = STANDARD.decode(raw_histogram)?;
        Ok(Histogram1D::<C>::deserialize_any(&decoded)?)
    }

    pub fn tag(&self) -> Option<&str> {
        self.tag.as_deref()
    }

    pub fn total_count(&self) -> u64 {
        self.total_count
    }

    pub fn gutter_count(&self) -> u64 {
        self.gutter_count
    }

    pub fn histogram(&self) -> &Result<Histogram1D<C>, LogError> {
        let raw_histogram = &self.raw_histogram;
        self.histogram.borrow_with(|| Self::deserialize_histogram(raw_histogram))
    }
}

pub struct HistogramLogReader<R, C = u64> {
    lines: Lines<R>,
    phantom: PhantomData<C>,
}

impl<R: BufRead, C: Counter> HistogramLogReader<R, C> {
    pub fn new(source: R) -> HistogramLogReader<R, C> {
        HistogramLogReader {
            lines: source.lines(),
            phantom: PhantomData,
        }
    }
}

fn is_header_line(line: &str) -> bool {
    line.is_empty() || line.starts_with('#') || line.starts_with('"')
}

fn parse_count(field: Option<&str>, line: &str) -> Result<u64, LogError> {
    field
        .and_then(|f| f.trim().parse::<u64>().ok())
        .ok_or_else(|| LogError::MalformedLine(line.to_string()))
}

fn parse_line<C: Counter>(line: &str) -> Result<LogEntry<C>, LogError> {
    let (tag, rest) = match line.strip_prefix("Tag=") {
        Some(tagged) => match tagged.split_once(',') {
            Some((tag, rest)) => (Some(tag.to_string()), rest),
            None => return Err(LogError::MalformedLine(line.to_string())),
        },
        None => (None, line),
    };
    let mut fields = rest.splitn(3, ',');
    let total_count = parse_count(fields.next(), line)?;
    let gutter_count = parse_count(fields.next(), line)?;
    let raw_histogram = match fields.next() {
        Some(raw) if !raw.trim().is_empty() => raw.trim().to_string(),
        _ => return Err(LogError::MalformedLine(line.to_string())),
    };
    Ok(LogEntry {
        tag,
        total_count,
        gutter_count,
        raw_histogram,
        histogram: LazyCell::new(),
    })
}

impl<R: BufRead, C: Counter> Iterator for HistogramLogReader<R, C> {
    type Item = Result<LogEntry<C>, LogError>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let line = match self.lines.next()? {
                Ok(line) => line,
                Err(e) => return Some(Err(LogError::Io(e))),
            };
            let line = line.trim();
            if is_header_line(line) {
                continue;
            }
            let entry = parse_line(line);
            if entry.is_err() {
                warn!("malformed histogram log line: {}", line);
            }
            return Some(entry);
        }
    }
}
