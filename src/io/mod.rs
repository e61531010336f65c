pub mod fasta;

pub use fasta::{read_sequence, read_sequence_from};
