use std::{
    borrow::Cow,
    io::{BufRead, Read, Seek},
};

use super::{ObjParsingError, ObjParsingErrorDetail};

/// Reads one line at a time into a buffer that lives as long as the read.
///
/// Lines are handed out without their `\n` / `\r\n` terminator. A line whose
/// content is longer than `max_line_length` bytes is an error, it is never
/// cut short.
pub(crate) struct LineReader<R> {
    reader: R,
    buffer: Vec<u8>,
    line_number: usize,
    max_line_length: usize,
}

impl<R: BufRead> LineReader<R> {
    pub fn new(reader: R, max_line_length: usize) -> Self {
        Self {
            reader,
            buffer: Vec::new(),
            line_number: 0,
            max_line_length,
        }
    }

    /// Returns the 1-based number of the line along with its content.
    pub fn next_line(&mut self) -> Result<Option<(usize, Cow<'_, str>)>, ObjParsingError> {
        self.buffer.clear();

        // Room for the content plus a "\r\n" terminator.
        let limit = self.max_line_length.saturating_add(2) as u64;
        let read = (&mut self.reader)
            .take(limit)
            .read_until(b'\n', &mut self.buffer)
            .map_err(ObjParsingErrorDetail::FailedToReadFile)?;
        if read == 0 {
            return Ok(None);
        }
        self.line_number += 1;

        if self.buffer.last() == Some(&b'\n') {
            self.buffer.pop();
        }
        if self.buffer.last() == Some(&b'\r') {
            self.buffer.pop();
        }

        let line = String::from_utf8_lossy(&self.buffer);
        if self.buffer.len() > self.max_line_length {
            return Err(ObjParsingError::at_line(
                self.line_number,
                &line,
                ObjParsingErrorDetail::LineTooLong {
                    max: self.max_line_length,
                },
            ));
        }

        Ok(Some((self.line_number, line)))
    }
}

impl<R: BufRead + Seek> LineReader<R> {
    /// Goes back to the first line so the input can be read again.
    pub fn rewind(&mut self) -> Result<(), ObjParsingError> {
        self.reader
            .rewind()
            .map_err(ObjParsingErrorDetail::FailedToReadFile)?;
        self.line_number = 0;
        Ok(())
    }
}

#[cfg(test)]
mod test {
    use std::io::Cursor;

    use super::*;
    use crate::obj::ErrorKind;

    fn collect_lines(input: &str, max: usize) -> Result<Vec<(usize, String)>, ObjParsingError> {
        let mut reader = LineReader::new(Cursor::new(input), max);
        let mut lines = Vec::new();
        while let Some((number, line)) = reader.next_line()? {
            lines.push((number, line.into_owned()));
        }
        Ok(lines)
    }

    #[test]
    fn strips_terminators() {
        let lines = collect_lines("v 1 2 3\r\nf 1 1 1\n\nlast", 64).unwrap();
        assert_eq!(
            lines,
            vec![
                (1, "v 1 2 3".to_owned()),
                (2, "f 1 1 1".to_owned()),
                (3, String::new()),
                (4, "last".to_owned()),
            ]
        );
    }

    #[test]
    fn line_at_the_bound_is_accepted() {
        let lines = collect_lines("12345\r\n123\n", 5).unwrap();
        assert_eq!(lines[0].1, "12345");
        assert_eq!(lines[1].1, "123");
    }

    #[test]
    fn line_over_the_bound_is_an_error() {
        let err = collect_lines("123\n123456\n", 5).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::LineTooLong);
        assert_eq!(err.line_number(), Some(2));

        let err = collect_lines("1234567890", 5).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::LineTooLong);
    }

    #[test]
    fn rewind_starts_over() {
        let mut reader = LineReader::new(Cursor::new("a\nb\n"), 16);
        while reader.next_line().unwrap().is_some() {}
        reader.rewind().unwrap();
        let (number, line) = reader.next_line().unwrap().unwrap();
        assert_eq!((number, line.as_ref()), (1, "a"));
    }
}
