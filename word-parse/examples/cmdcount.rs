//! Count the relations and queries in a relation file read from stdin.

use std::io::{self, Read};
use word_parse::{CmdIter, Command};

fn main() -> io::Result<()> {
    let mut buffer = String::new();
    let mut stdin = io::stdin();
    stdin.read_to_string(&mut buffer)?;

    let (mut relations, mut queries) = (0, 0);

    for cmd in CmdIter::new(&buffer) {
        match cmd {
            Ok(Command::Relation(..)) => relations += 1,
            Ok(Command::Query(_)) => queries += 1,
            Err(e) => {
                let err = format!("parsing command {}: {}", relations + queries, e);
                return Err(io::Error::new(io::ErrorKind::InvalidData, err));
            }
        }
    }
    println!("{} relations, {} queries", relations, queries);

    Ok(())
}
