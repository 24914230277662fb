use std::io::{self, BufRead, BufReader};
use std::fs::File;
use std::path::Path;

use md5;

pub fn read_lines<P>(path: P) -> Result<Vec<String>, io::Error> where P: AsRef<Path> {
    let reader = BufReader::new(File::open(path)?);
    reader.lines().collect()
}

pub fn md5_hex(input: &str) -> String {
    format!("{:x}", md5::compute(input))
}
