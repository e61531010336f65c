//! Loading of single-record FASTA sequence files.

use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

use flate2::read::MultiGzDecoder;
use noodles::fasta;
use tracing::{debug, warn};

use crate::errors::ParetoError;

/// Read the sequence of the first record of a FASTA file. Files ending in `.gz` are
/// decompressed on the fly.
pub fn read_sequence<P>(path: P) -> Result<Vec<u8>, ParetoError>
where
    P: AsRef<Path>,
{
    let path = path.as_ref();
    let is_gzipped = path
        .file_name()
        .map(|v| v.to_string_lossy().ends_with(".gz"))
        .unwrap_or(false);

    let file = File::open(path).map_err(|source| ParetoError::FileReadError {
        path: path.to_path_buf(),
        source,
    })?;

    let reader: Box<dyn BufRead> = if is_gzipped {
        Box::new(BufReader::new(MultiGzDecoder::new(file)))
    } else {
        Box::new(BufReader::new(file))
    };

    read_sequence_from(reader, path)
}

/// Read the sequence of the first FASTA record from `reader`. `path` is only used for error
/// reporting.
///
/// The input must start with a `>` header line. Sequence lines are concatenated, with any
/// whitespace removed. Symbols are kept as-is, without case conversion or alphabet checks.
pub fn read_sequence_from<R>(mut reader: R, path: &Path) -> Result<Vec<u8>, ParetoError>
where
    R: BufRead,
{
    let read_error = |source| ParetoError::FileReadError {
        path: path.to_path_buf(),
        source,
    };

    match reader.fill_buf().map_err(read_error)?.first() {
        None => return Err(ParetoError::EmptyFastaFile(path.to_path_buf())),
        Some(b'>') => (),
        Some(_) => return Err(ParetoError::MissingFastaHeader(path.to_path_buf())),
    }

    let mut reader = fasta::io::Reader::new(reader);
    let mut records = reader.records();

    let record = match records.next() {
        Some(result) => result.map_err(|source| match source.kind() {
            io::ErrorKind::InvalidData => ParetoError::InvalidFastaRecord {
                path: path.to_path_buf(),
                source,
            },
            _ => read_error(source),
        })?,
        None => return Err(ParetoError::EmptyFastaFile(path.to_path_buf())),
    };

    let sequence: Vec<u8> = record
        .sequence()
        .as_ref()
        .iter()
        .copied()
        .filter(|c| !c.is_ascii_whitespace())
        .collect();

    let name = String::from_utf8_lossy(record.name());
    debug!("Read {} ({} symbols) from {}", name, sequence.len(), path.display());

    if records.next().is_some() {
        warn!("{} contains more than one record, only using {}", path.display(), name);
    }

    Ok(sequence)
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use crate::errors::ParetoError;

    use super::read_sequence_from;

    fn read(contents: &[u8]) -> Result<Vec<u8>, ParetoError> {
        read_sequence_from(contents, Path::new("test.fa"))
    }

    #[test]
    fn test_multiline_record() {
        let seq = read(b">seq1 some description\nACGT\nTTGA\nNN\n").unwrap();
        assert_eq!(seq, b"ACGTTTGANN");
    }

    #[test]
    fn test_keeps_case_and_symbols() {
        let seq = read(b">x\nacgTX*\n").unwrap();
        assert_eq!(seq, b"acgTX*");
    }

    #[test]
    fn test_strips_carriage_returns() {
        let seq = read(b">x\r\nAC\r\nGT\r\n").unwrap();
        assert_eq!(seq, b"ACGT");
    }

    #[test]
    fn test_header_only() {
        let seq = read(b">empty\n").unwrap();
        assert!(seq.is_empty());
    }

    #[test]
    fn test_only_first_record() {
        let seq = read(b">a\nAAB\n>b\nCC\n").unwrap();
        assert_eq!(seq, b"AAB");
    }

    #[test]
    fn test_missing_header() {
        let result = read(b"ACGT\n");
        assert!(matches!(result, Err(ParetoError::MissingFastaHeader(ref p)) if p == Path::new("test.fa")));
    }

    #[test]
    fn test_header_without_name() {
        let result = read(b">\nACGT\n");
        assert!(matches!(result, Err(ParetoError::InvalidFastaRecord { .. })));
        assert!(result.unwrap_err().to_string().starts_with("Sequence file test.fa is not in FASTA format"));
    }

    #[test]
    fn test_empty_input() {
        assert!(matches!(read(b""), Err(ParetoError::EmptyFastaFile(_))));
    }
}
