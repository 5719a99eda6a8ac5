use crate::error::PopulateError;
use crate::generator::Row;
use std::fmt;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;
use std::str::FromStr;

pub const WRITER_BUFFER_SIZE: usize = 256 * 1024;
pub const ROW_BUFFER_COUNT: usize = 1000;

/// How values containing delimiters are written
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Escape {
    /// Wrap fields containing a tab, quote, CR or LF in double quotes,
    /// doubling embedded quotes
    #[default]
    Quote,
    /// Write values verbatim
    None,
}

impl FromStr for Escape {
    type Err = PopulateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "quote" => Ok(Escape::Quote),
            "none" => Ok(Escape::None),
            _ => Err(PopulateError::InvalidArgument {
                name: "--escape",
                value: s.to_string(),
                reason: "expected one of: quote, none".to_string(),
            }),
        }
    }
}

impl fmt::Display for Escape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Escape::Quote => f.write_str("quote"),
            Escape::None => f.write_str("none"),
        }
    }
}

fn needs_quoting(value: &str) -> bool {
    value.contains(['\t', '"', '\r', '\n'])
}

/// Writes rows as `id<TAB>value<LF>`, no header
pub struct TsvWriter<W: Write> {
    writer: BufWriter<W>,
    escape: Escape,
    rows_written: u64,
    write_count: usize,
    max_row_buffer: usize,
}

impl TsvWriter<File> {
    pub fn create(filename: &Path, escape: Escape) -> io::Result<Self> {
        let file = File::create(filename)?;
        Ok(Self::new(file, escape))
    }
}

impl<W: Write> TsvWriter<W> {
    pub fn new(inner: W, escape: Escape) -> Self {
        Self {
            writer: BufWriter::with_capacity(WRITER_BUFFER_SIZE, inner),
            escape,
            rows_written: 0,
            write_count: 0,
            max_row_buffer: ROW_BUFFER_COUNT,
        }
    }

    pub fn write_row(&mut self, row: &Row) -> io::Result<()> {
        write!(self.writer, "{}\t", row.id)?;

        if self.escape == Escape::Quote && needs_quoting(&row.value) {
            self.writer.write_all(b"\"")?;
            self.writer
                .write_all(row.value.replace('"', "\"\"").as_bytes())?;
            self.writer.write_all(b"\"")?;
        } else {
            self.writer.write_all(row.value.as_bytes())?;
        }
        self.writer.write_all(b"\n")?;

        self.rows_written += 1;
        self.write_count += 1;
        if self.write_count >= self.max_row_buffer {
            self.write_count = 0;
            self.writer.flush()?;
        }

        Ok(())
    }

    pub fn rows_written(&self) -> u64 {
        self.rows_written
    }

    pub fn flush(&mut self) -> io::Result<()> {
        self.write_count = 0;
        self.writer.flush()
    }

    /// Flush and hand back the underlying writer
    pub fn into_inner(self) -> io::Result<W> {
        self.writer.into_inner().map_err(|e| e.into_error())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(id: u64, value: &str) -> Row {
        Row {
            id,
            value: value.to_string(),
        }
    }

    fn render(escape: Escape, rows: &[Row]) -> String {
        let mut writer = TsvWriter::new(Vec::new(), escape);
        for r in rows {
            writer.write_row(r).unwrap();
        }
        String::from_utf8(writer.into_inner().unwrap()).unwrap()
    }

    #[test]
    fn test_plain_rows() {
        let out = render(Escape::Quote, &[row(0, "John"), row(1, "Mary")]);
        assert_eq!(out, "0\tJohn\n1\tMary\n");
    }

    #[test]
    fn test_quote_embedded_delimiters() {
        let out = render(
            Escape::Quote,
            &[row(0, "a\tb"), row(1, "line\nbreak"), row(2, "say \"hi\"")],
        );
        assert_eq!(
            out,
            "0\t\"a\tb\"\n1\t\"line\nbreak\"\n2\t\"say \"\"hi\"\"\"\n"
        );
    }

    #[test]
    fn test_no_escape() {
        let out = render(Escape::None, &[row(0, "a\tb")]);
        assert_eq!(out, "0\ta\tb\n");
    }

    #[test]
    fn test_parse_escape() {
        assert_eq!("quote".parse::<Escape>().unwrap(), Escape::Quote);
        assert_eq!("NONE".parse::<Escape>().unwrap(), Escape::None);
        assert!("csv".parse::<Escape>().is_err());
    }
}
