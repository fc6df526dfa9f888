
// imports
use std::error::Error;
use std::fs::File;
use std::io::{self, BufRead, BufReader, Lines};

/// An integer-encoded corpus: one sequence per line, ids separated by
/// whitespace, already mapped by the external vocabulary builder. Sequences
/// are right-padded with 0 (or truncated) to a fixed length so every row the
/// pipeline sees has the same shape.
pub struct Corpus {
    pub sequences: Vec<Vec<usize>>,
}

impl Corpus {

    fn read_file(file_path: &str) -> Result<Lines<BufReader<File>>, Box<dyn Error>> {

        match File::open(file_path) {
            Ok(f) => Ok(io::BufReader::new(f).lines()),
            Err(e) => Err(Box::new(e)),
        }
    }

    fn parse_line(line: &str) -> Result<Vec<usize>, Box<dyn Error>> {

        let mut ids = Vec::new();
        for tok in line.split_whitespace() {
            match tok.parse::<usize>() {
                Ok(id) => ids.push(id),
                Err(_) => return Err(format!("corpus line holds a non-integer token: {}", tok).into()),
            }
        }
        Ok(ids)
    }

    pub fn load(file_path: &str, sequence_length: usize) -> Result<Corpus, Box<dyn Error>> {

        if sequence_length == 0 {
            return Err(format!("sequence_length must be positive").into());
        }

        let mut sequences: Vec<Vec<usize>> = Vec::new();
        let lines = Corpus::read_file(file_path)?;

        for line in lines {

            let mut ids = Corpus::parse_line(&line?)?;
            if ids.is_empty() {
                continue;
            }

            // fixed shape: truncate long lines, pad short ones with 0
            ids.truncate(sequence_length);
            ids.resize(sequence_length, 0);
            sequences.push(ids);
        }

        Ok(Corpus { sequences })
    }
}
