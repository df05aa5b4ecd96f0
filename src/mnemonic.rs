use crate::words::WORDLIST;
use rand::rngs::OsRng;
use rand::Rng;
use std::fmt;

/// Accepted phrase lengths
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MnemonicLength {
    Words12,
    Words24,
}

impl MnemonicLength {
    /// Number of words for this length
    pub fn word_count(&self) -> usize {
        match self {
            MnemonicLength::Words12 => 12,
            MnemonicLength::Words24 => 24,
        }
    }
}

/// A space-joined recovery phrase.
///
/// The phrase is immutable once constructed. `from_phrase` accepts any
/// string so imported phrases can be carried around before being checked;
/// shape checking is the job of [`Mnemonic::validate`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mnemonic {
    phrase: String,
}

impl Mnemonic {
    /// Generate a 12-word phrase from the operating system CSPRNG
    pub fn generate() -> Self {
        Mnemonic::generate_with(MnemonicLength::Words12)
    }

    /// Generate a phrase of the given length.
    ///
    /// Every word is an independent uniform draw from the word list.
    pub fn generate_with(length: MnemonicLength) -> Self {
        let mut rng = OsRng;
        let words: Vec<&str> = (0..length.word_count())
            .map(|_| WORDLIST[rng.gen_range(0..WORDLIST.len())])
            .collect();
        Mnemonic {
            phrase: words.join(" "),
        }
    }

    /// Wrap an existing phrase without checking it
    pub fn from_phrase(phrase: &str) -> Self {
        Mnemonic {
            phrase: phrase.to_string(),
        }
    }

    /// Check that a candidate phrase has an accepted word count.
    ///
    /// Words are split on whitespace runs, so extra spaces, tabs, and
    /// surrounding whitespace do not affect the count. True iff the count
    /// is exactly 12 or exactly 24; membership in the word list is not
    /// required.
    pub fn validate(candidate: &str) -> bool {
        let count = candidate.split_whitespace().count();
        count == 12 || count == 24
    }

    /// The space-joined phrase
    pub fn phrase(&self) -> &str {
        &self.phrase
    }

    /// Words of the phrase in order
    pub fn words(&self) -> Vec<&str> {
        self.phrase.split_whitespace().collect()
    }

    /// Number of words in the phrase
    pub fn word_count(&self) -> usize {
        self.words().len()
    }
}

impl fmt::Display for Mnemonic {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.phrase)
    }
}
