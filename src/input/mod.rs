//! # Input Module
//!
//! Reads the difficulty choice and move keys from a line-oriented reader.
//!
//! Input is tokenised the way a whitespace-skipping console read would be:
//! the difficulty is the first word typed, and after that every
//! non-whitespace character is one move, so `ddss` on a single line plays
//! four turns.

use crate::game::Difficulty;
use crate::CrawlResult;
use log::trace;
use std::collections::VecDeque;
use std::io::BufRead;

/// Splits a typed word into its leading integer and whatever follows it,
/// the way a numeric console read stops at the first non-digit.
///
/// A word that does not start with a number is taken whole.
///
/// # Examples
///
/// ```
/// use treasure_crawl::split_choice;
///
/// assert_eq!(split_choice("2dd"), ("2", "dd"));
/// assert_eq!(split_choice("-1"), ("-1", ""));
/// assert_eq!(split_choice("abc"), ("abc", ""));
/// ```
pub fn split_choice(word: &str) -> (&str, &str) {
    let sign = usize::from(word.starts_with(|c: char| c == '+' || c == '-'));
    let end = word[sign..]
        .find(|c: char| !c.is_ascii_digit())
        .map_or(word.len(), |index| index + sign);

    if end == sign {
        (word, "")
    } else {
        word.split_at(end)
    }
}

/// Interprets a typed difficulty choice.
///
/// Anything that is not the number 1, 2 or 3 is [`Difficulty::Invalid`].
pub fn parse_difficulty(token: &str) -> Difficulty {
    token
        .trim()
        .parse::<i64>()
        .map(Difficulty::from_choice)
        .unwrap_or(Difficulty::Invalid)
}

/// Input handler for processing player commands.
pub struct InputHandler<R> {
    reader: R,
    pending: VecDeque<char>,
}

impl<R: BufRead> InputHandler<R> {
    /// Creates a new input handler over a reader.
    ///
    /// # Examples
    ///
    /// ```
    /// use std::io::Cursor;
    /// use treasure_crawl::{Difficulty, InputHandler};
    ///
    /// let mut input = InputHandler::new(Cursor::new("2\nd\n"));
    /// assert_eq!(input.read_difficulty().unwrap(), Some(Difficulty::Medium));
    /// assert_eq!(input.next_symbol().unwrap(), Some('d'));
    /// assert_eq!(input.next_symbol().unwrap(), None);
    /// ```
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            pending: VecDeque::new(),
        }
    }

    /// Reads the next non-blank line, or None once the reader is exhausted.
    fn read_nonblank_line(&mut self) -> CrawlResult<Option<String>> {
        loop {
            let mut line = String::new();
            if self.reader.read_line(&mut line)? == 0 {
                return Ok(None);
            }
            if !line.trim().is_empty() {
                trace!("Read input line {:?}", line.trim_end());
                return Ok(Some(line));
            }
        }
    }

    /// Reads the difficulty choice.
    ///
    /// Only the leading number of the first word is the choice; anything
    /// typed after it on the same line is kept as move keys. Returns None if
    /// input ends first.
    pub fn read_difficulty(&mut self) -> CrawlResult<Option<Difficulty>> {
        let line = match self.read_nonblank_line()? {
            Some(line) => line,
            None => return Ok(None),
        };

        let mut words = line.split_whitespace();
        let choice = match words.next() {
            Some(word) => {
                let (number, rest) = split_choice(word);
                self.pending.extend(rest.chars());
                Some(parse_difficulty(number))
            }
            None => None,
        };
        self.pending.extend(words.flat_map(str::chars));
        Ok(choice)
    }

    /// Reads the next move key, or None if input has ended.
    pub fn next_symbol(&mut self) -> CrawlResult<Option<char>> {
        while self.pending.is_empty() {
            match self.read_nonblank_line()? {
                Some(line) => self
                    .pending
                    .extend(line.chars().filter(|c| !c.is_whitespace())),
                None => return Ok(None),
            }
        }
        Ok(self.pending.pop_front())
    }
}
