use std::str::FromStr;

use regex::Regex;
use once_cell::sync::Lazy;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Point {
    pub x: i64,
    pub y: i64,
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Segment {
    pub src: Point,
    pub dst: Point,
}

#[derive(PartialEq, Eq, Debug)]
pub enum ParseError {
    InvalidFormat(String),
}

// anchored at both ends: a partial match must not count as a segment line
static SEGMENT_LINE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(\d+),(\d+) -> (\d+),(\d+)$").expect("segment line regex"));

impl Segment {
    pub fn coords(&self) -> (i64, i64, i64, i64) {
        (self.src.x, self.src.y, self.dst.x, self.dst.y)
    }
}

impl FromStr for Segment {
    type Err = ParseError;

    fn from_str(line: &str) -> Result<Segment, ParseError> {
        let captures = SEGMENT_LINE_RE.captures(line)
            .ok_or_else(|| ParseError::InvalidFormat(line.to_string()))?;
        let mut fields = [0; 4];
        for (field, capture) in fields.iter_mut().zip(captures.iter().skip(1)) {
            let digits = capture
                .ok_or_else(|| ParseError::InvalidFormat(line.to_string()))?;
            // digit groups too large for i64 are rejected like any other bad line
            *field = digits.as_str().parse()
                .map_err(|_| ParseError::InvalidFormat(line.to_string()))?;
        }
        Ok(Segment {
            src: Point { x: fields[0], y: fields[1], },
            dst: Point { x: fields[2], y: fields[3], },
        })
    }
}
