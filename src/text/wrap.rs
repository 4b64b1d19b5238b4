//! Word wrapper: lines in, tokens out.

use super::Token;
use crate::error::{PrompterError, Result};
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::iter::FusedIterator;
use std::path::Path;

/// Column budget used when none is configured.
pub const DEFAULT_WRAP_WIDTH: usize = 70;

/// Word wrapper reading straight from a file.
pub type FileWrapper = WordWrapper<LossyLines<BufReader<File>>>;

/// Lines of a reader, decoded leniently.
///
/// Invalid UTF-8 becomes U+FFFD instead of an error, and a trailing `\r`
/// is stripped along with the `\n`. Only genuine read failures are errors.
#[derive(Debug)]
pub struct LossyLines<R> {
    reader: R,
    buf: Vec<u8>,
}

impl<R: BufRead> LossyLines<R> {
    /// Read lines from `reader`.
    pub const fn new(reader: R) -> Self {
        Self {
            reader,
            buf: Vec::new(),
        }
    }
}

impl<R: BufRead> Iterator for LossyLines<R> {
    type Item = io::Result<String>;

    fn next(&mut self) -> Option<Self::Item> {
        self.buf.clear();
        match self.reader.read_until(b'\n', &mut self.buf) {
            Ok(0) => None,
            Ok(_) => {
                if self.buf.last() == Some(&b'\n') {
                    self.buf.pop();
                    if self.buf.last() == Some(&b'\r') {
                        self.buf.pop();
                    }
                }
                Some(Ok(String::from_utf8_lossy(&self.buf).into_owned()))
            }
            Err(e) => Some(Err(e)),
        }
    }
}

/// Position inside the line currently being split.
#[derive(Debug)]
struct LineCursor {
    text: String,
    /// Byte offset of the next unread character.
    pos: usize,
    /// Characters emitted on the current output line.
    line_length: usize,
    /// A wrap break is owed before the next word.
    wrap_pending: bool,
}

impl LineCursor {
    const fn new(text: String) -> Self {
        Self {
            text,
            pos: 0,
            line_length: 0,
            wrap_pending: false,
        }
    }

    /// Byte range of the next non-empty word, skipping runs of spaces.
    fn next_word(&mut self) -> Option<(usize, usize)> {
        let rest = &self.text[self.pos..];
        let skipped = rest.len() - rest.trim_start_matches(' ').len();
        let start = self.pos + skipped;
        if start >= self.text.len() {
            self.pos = self.text.len();
            return None;
        }
        let end = self.text[start..]
            .find(' ')
            .map_or(self.text.len(), |offset| start + offset);
        self.pos = end;
        Some((start, end))
    }
}

/// Lazy token producer over a sequence of lines.
///
/// Each word becomes a [`Token::Word`]. A [`Token::Break`] follows the word
/// that pushes the running line length past the wrap width, and another
/// closes every source line, so a line whose last word crosses the width
/// ends with two breaks.
///
/// The iterator is single-pass and fuses after the first read error.
/// The line source is owned and released when the wrapper is dropped.
pub struct WordWrapper<L> {
    lines: L,
    width: usize,
    current: Option<LineCursor>,
    done: bool,
}

impl<L> WordWrapper<L>
where
    L: Iterator<Item = io::Result<String>>,
{
    /// Wrap the given lines at `width` columns.
    pub const fn new(lines: L, width: usize) -> Self {
        Self {
            lines,
            width,
            current: None,
            done: false,
        }
    }

    /// Column budget of this wrapper.
    pub const fn width(&self) -> usize {
        self.width
    }
}

impl<R: BufRead> WordWrapper<LossyLines<R>> {
    /// Wrap every line read from `reader`.
    pub const fn from_reader(reader: R, width: usize) -> Self {
        Self::new(LossyLines::new(reader), width)
    }
}

impl FileWrapper {
    /// Open `path` and wrap its lines.
    ///
    /// # Errors
    ///
    /// Returns [`PrompterError::Open`] if the file cannot be opened.
    pub fn open(path: impl AsRef<Path>, width: usize) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| PrompterError::Open {
            path: path.to_path_buf(),
            source,
        })?;
        log::debug!("opened {} for playback", path.display());
        Ok(Self::from_reader(BufReader::new(file), width))
    }
}

impl<L> Iterator for WordWrapper<L>
where
    L: Iterator<Item = io::Result<String>>,
{
    type Item = io::Result<Token>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if self.done {
                return None;
            }

            if let Some(cursor) = self.current.as_mut() {
                if cursor.wrap_pending {
                    cursor.wrap_pending = false;
                    return Some(Ok(Token::Break));
                }

                if let Some((start, end)) = cursor.next_word() {
                    let word = &cursor.text[start..end];
                    let token = Token::word(word);
                    cursor.line_length += word.chars().count() + 1;
                    if cursor.line_length > self.width {
                        cursor.wrap_pending = true;
                        cursor.line_length = 0;
                    }
                    return Some(Ok(token));
                }

                // End of the source line.
                self.current = None;
                return Some(Ok(Token::Break));
            }

            match self.lines.next() {
                Some(Ok(line)) => self.current = Some(LineCursor::new(line)),
                Some(Err(e)) => {
                    self.done = true;
                    return Some(Err(e));
                }
                None => {
                    self.done = true;
                    return None;
                }
            }
        }
    }
}

impl<L> FusedIterator for WordWrapper<L> where L: Iterator<Item = io::Result<String>> {}

impl<L> std::fmt::Debug for WordWrapper<L> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WordWrapper")
            .field("width", &self.width)
            .field("current", &self.current)
            .field("done", &self.done)
            .finish_non_exhaustive()
    }
}
