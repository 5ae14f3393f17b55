use std::collections::BTreeMap;

use crate::error::Error;

/// Numeric code of a letter: A..=Z map to 1..=26 regardless of case. Zero is
/// reserved for black squares.
pub fn letter_code(ch: char) -> Result<i64, Error> {
    let up = ch.to_ascii_uppercase();
    if up.is_ascii_uppercase() {
        Ok((up as u8 - b'A' + 1) as i64)
    } else {
        Err(Error::new(format!("not a letter: {:?}", ch)))
    }
}

/// Wordlist indexed by length. Each entry of length `l` is stored as a tuple
/// of `l` letter codes followed by the word's identifier, which is its
/// position in the input order. Identifiers are assigned to every input word,
/// including single-letter words that are never indexed (a single letter can
/// only ever be a lone letter, not a word placement).
#[derive(Debug, Default)]
pub struct WordIndex {
    by_len: BTreeMap<usize, Vec<Vec<i64>>>,
    word_count: usize,
}

impl WordIndex {
    pub fn from_words<I, S>(words: I) -> Result<Self, Error>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut by_len: BTreeMap<usize, Vec<Vec<i64>>> = BTreeMap::new();
        let mut word_count = 0usize;
        for word in words {
            let word = word.as_ref();
            if word.is_empty() {
                return Err(Error::new_const("empty word in wordlist"));
            }
            let id = word_count as i64;
            word_count += 1;
            let mut tuple = Vec::with_capacity(word.chars().count() + 1);
            for ch in word.chars() {
                tuple.push(letter_code(ch)?);
            }
            let len = tuple.len();
            if len < 2 {
                continue;
            }
            tuple.push(id);
            by_len.entry(len).or_default().push(tuple);
        }
        Ok(WordIndex { by_len, word_count })
    }

    /// The (letters..., id) tuples of all words of the given length, if any.
    pub fn tuples(&self, len: usize) -> Option<&[Vec<i64>]> {
        self.by_len.get(&len).map(|v| v.as_slice())
    }

    pub fn lengths(&self) -> impl Iterator<Item = usize> + '_ {
        self.by_len.keys().copied()
    }

    /// Total identifiers consumed, including unindexed single-letter words.
    pub fn word_count(&self) -> usize {
        self.word_count
    }

    /// Whether some indexed word has exactly these letters.
    pub fn contains_spelling(&self, word: &str) -> bool {
        let Ok(codes) = word.chars().map(letter_code).collect::<Result<Vec<_>, _>>() else {
            return false;
        };
        self.by_len
            .get(&codes.len())
            .is_some_and(|tuples| tuples.iter().any(|t| t[..t.len() - 1] == codes[..]))
    }
}
