//! Line reader that gives up on a blocking read when an interrupt arrives.

use super::interrupt;
use std::io::{self, BufRead};
use std::sync::atomic::AtomicBool;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Input {
    Line(String),
    Eof,
    Interrupted,
}

pub struct LineReader<R> {
    reader: R,
    flag: &'static AtomicBool,
}

impl<R: BufRead> LineReader<R> {
    pub fn new(reader: R) -> Self {
        Self::with_flag(reader, &interrupt::INTERRUPTED)
    }

    pub fn with_flag(reader: R, flag: &'static AtomicBool) -> Self {
        Self { reader, flag }
    }

    /// Next line without its terminator. A partial line at end of input is
    /// still returned; a line cut short by an interrupt is discarded.
    pub fn next_line(&mut self) -> io::Result<Input> {
        let mut line = Vec::new();
        loop {
            if interrupt::take(self.flag) {
                return Ok(Input::Interrupted);
            }
            let available = match self.reader.fill_buf() {
                Ok(buf) => buf,
                Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                Err(e) => return Err(e),
            };
            if available.is_empty() {
                return Ok(if line.is_empty() { Input::Eof } else { Input::Line(decode(line)) });
            }
            match available.iter().position(|&b| b == b'\n') {
                Some(i) => {
                    line.extend_from_slice(&available[..i]);
                    self.reader.consume(i + 1);
                    return Ok(Input::Line(decode(line)));
                }
                None => {
                    let n = available.len();
                    line.extend_from_slice(available);
                    self.reader.consume(n);
                }
            }
        }
    }
}

fn decode(mut bytes: Vec<u8>) -> String {
    if bytes.last() == Some(&b'\r') {
        bytes.pop();
    }
    String::from_utf8_lossy(&bytes).into_owned()
}
