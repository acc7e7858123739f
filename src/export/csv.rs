use crate::errors::{AppError, AppResult};
use crate::models::record::EventRecord;
use csv::{QuoteStyle, Terminator, Writer, WriterBuilder};
use std::io::Write;
use std::path::Path;

/// Writer for the sleep log format: `date,time,action`, no header and no
/// quoting. A comma inside `action` is written as is.
fn sleeplog_writer<W: Write>(out: W) -> Writer<W> {
    WriterBuilder::new()
        .has_headers(false)
        .quote_style(QuoteStyle::Never)
        .terminator(Terminator::Any(b'\n'))
        .from_writer(out)
}

fn write_records<W: Write>(wtr: &mut Writer<W>, records: &[EventRecord]) -> csv::Result<()> {
    for r in records {
        wtr.write_record([r.date.as_str(), r.time.as_str(), r.action.as_str()])?;
    }
    wtr.flush()?;
    Ok(())
}

fn write_failed(path: &Path, reason: String) -> AppError {
    AppError::WriteFailed {
        path: path.display().to_string(),
        reason,
    }
}

/// Write through `out`. Bytes already handed to `out` are not rolled back
/// when a later write fails.
fn write_to<W: Write>(out: &mut W, path: &Path, records: &[EventRecord]) -> AppResult<()> {
    let mut wtr = sleeplog_writer(out);
    write_records(&mut wtr, records).map_err(|e| write_failed(path, e.to_string()))
}

/// Write the records, in the given order, to `path`. The file is truncated
/// first; on failure whatever was written stays on disk.
pub fn write_csv(path: &Path, records: &[EventRecord]) -> AppResult<()> {
    let mut file =
        std::fs::File::create(path).map_err(|e| write_failed(path, e.to_string()))?;
    write_to(&mut file, path, records)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rec(id: i64, date: &str, time: &str, action: &str) -> EventRecord {
        EventRecord {
            id,
            date: date.into(),
            time: time.into(),
            action: action.into(),
        }
    }

    fn render(records: &[EventRecord]) -> String {
        let mut wtr = sleeplog_writer(Vec::new());
        write_records(&mut wtr, records).unwrap();
        let bytes = match wtr.into_inner() {
            Ok(b) => b,
            Err(_) => panic!("in-memory writer failed to flush"),
        };
        String::from_utf8(bytes).unwrap()
    }

    #[test]
    fn one_line_per_record_without_header() {
        let out = render(&[
            rec(2, "2024-01-02", "07:10", "wake"),
            rec(1, "2024-01-01", "23:05", "sleep"),
        ]);
        assert_eq!(out, "2024-01-02,07:10,wake\n2024-01-01,23:05,sleep\n");
    }

    #[test]
    fn embedded_commas_are_not_quoted() {
        let out = render(&[rec(1, "2024-01-01", "23:05", "sleep, finally")]);
        assert_eq!(out, "2024-01-01,23:05,sleep, finally\n");
    }

    /// Accepts `limit` bytes, then fails every write.
    struct ShortWriter {
        out: Vec<u8>,
        limit: usize,
    }

    impl Write for ShortWriter {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            let room = self.limit.saturating_sub(self.out.len());
            if room == 0 {
                return Err(std::io::Error::other("no space left on medium"));
            }
            let n = room.min(buf.len());
            self.out.extend_from_slice(&buf[..n]);
            Ok(n)
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn failure_midway_is_write_failed_and_keeps_prefix() {
        let records = [
            rec(2, "2024-01-02", "07:10", "wake"),
            rec(1, "2024-01-01", "23:05", "sleep"),
        ];
        let mut sink = ShortWriter {
            out: Vec::new(),
            limit: 30,
        };

        let err = write_to(&mut sink, Path::new("sleeplogger.csv"), &records).unwrap_err();

        assert!(matches!(err, AppError::WriteFailed { .. }));
        let full = "2024-01-02,07:10,wake\n2024-01-01,23:05,sleep\n";
        assert_eq!(String::from_utf8(sink.out).unwrap(), &full[..30]);
    }

    #[test]
    fn empty_log_writes_nothing() {
        assert_eq!(render(&[]), "");
    }
}
