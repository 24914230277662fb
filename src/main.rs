extern crate md5;
extern crate regex;
extern crate once_cell;
extern crate env_logger;
#[macro_use] extern crate log;
#[macro_use] extern crate clap;
#[cfg(test)] extern crate tempfile;

use std::{io, process};

use clap::Arg;

mod common;
mod util;

use common::{Segment, ParseError};

fn main() {
    env_logger::init();
    match run() {
        Ok(()) =>
            info!("graceful shutdown"),
        Err(e) => {
            error!("fatal error: {:?}", e);
            process::exit(1);
        },
    }
}

#[derive(Debug)]
enum Error {
    MissingParameter(&'static str),
    ReadInput { file: String, error: io::Error, },
    Parse(ParseError),
}

fn run() -> Result<(), Error> {
    let matches = app_from_crate!()
        .arg(Arg::with_name("input")
             .short("i")
             .long("input")
             .value_name("FILE")
             .help("Puzzle input file, one segment per line")
             .default_value("./input.txt")
             .takes_value(true))
        .get_matches();

    let input_file = matches.value_of("input")
        .ok_or(Error::MissingParameter("input"))?;

    let lines = util::read_lines(input_file)
        .map_err(|error| Error::ReadInput { file: input_file.to_string(), error, })?;

    let mut segments: Vec<Segment> = Vec::with_capacity(lines.len());
    for line in &lines {
        let segment = line.parse().map_err(Error::Parse)?;
        debug!("parsed {:?} from {:?}", segment, line);
        segments.push(segment);
    }

    info!("{} segments parsed from {}", segments.len(), input_file);
    println!(
        "{}: {} segments, input md5 = {}",
        input_file,
        segments.len(),
        util::md5_hex(&lines.join("\n")),
    );

    Ok(())
}
