use std::error::Error;
use std::fmt::{Display, Formatter};
use std::io;
use std::path::PathBuf;

#[derive(Debug)]
pub enum ParetoError {
    /// A cell's non-dominated set would grow beyond the configured number of states
    CapacityExceeded { capacity: usize },

    /// The sequence file does not start with a FASTA header line
    MissingFastaHeader(PathBuf),

    /// The FASTA record cannot be parsed, e.g. a header line without a name
    InvalidFastaRecord { path: PathBuf, source: io::Error },

    /// The sequence file is empty
    EmptyFastaFile(PathBuf),

    /// Error variant when we couldn't open or read a sequence file
    FileReadError { path: PathBuf, source: io::Error },

    /// The sequence is longer than what a score counter can represent
    SequenceTooLong(usize),

    /// Other IO errors
    IOError(io::Error),
}

impl Error for ParetoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match *self {
            Self::FileReadError { ref source, .. } => Some(source),
            Self::InvalidFastaRecord { ref source, .. } => Some(source),
            Self::IOError(ref source) => Some(source),
            _ => None
        }
    }
}

impl From<io::Error> for ParetoError {
    fn from(value: io::Error) -> Self {
        Self::IOError(value)
    }
}

impl Display for ParetoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match *self {
            Self::CapacityExceeded { capacity } =>
                write!(f, "The set of non-dominated scores of a DP cell exceeds the maximum of {capacity} states!"),
            Self::MissingFastaHeader(ref path) =>
                write!(f, "Sequence file {} is not in FASTA format (missing '>' header line)!", path.display()),
            Self::InvalidFastaRecord { ref path, ref source } =>
                write!(f, "Sequence file {} is not in FASTA format: {source}", path.display()),
            Self::EmptyFastaFile(ref path) =>
                write!(f, "Sequence file {} is empty!", path.display()),
            Self::FileReadError { ref path, ref source } =>
                write!(f, "Failed to open sequence file {}: {source}", path.display()),
            Self::SequenceTooLong(len) =>
                write!(f, "Sequence of length {len} is too long to score!"),
            Self::IOError(ref err) =>
                err.fmt(f),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::error::Error;
    use std::io;

    use super::ParetoError;

    #[test]
    fn test_file_read_error_keeps_source() {
        let err = ParetoError::FileReadError {
            path: "missing.fa".into(),
            source: io::Error::new(io::ErrorKind::NotFound, "No such file or directory"),
        };

        assert!(err.source().is_some());
        assert_eq!(
            err.to_string(),
            "Failed to open sequence file missing.fa: No such file or directory"
        );
    }

    #[test]
    fn test_capacity_message() {
        let err = ParetoError::CapacityExceeded { capacity: 2 };
        assert!(err.to_string().contains("maximum of 2 states"));
        assert!(err.source().is_none());
    }
}
