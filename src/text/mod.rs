//! Text: Turning lines of a file into display tokens.
//!
//! The [`WordWrapper`] is a lazy, single-pass iterator. It owns its line
//! source, so dropping the wrapper (exhausted or not) closes the file.
//!
//! # Example
//!
//! ```rust
//! use teleprompter::text::{Token, WordWrapper};
//!
//! let lines = vec![Ok("hello world".to_string())];
//! let tokens: Vec<Token> = WordWrapper::new(lines.into_iter(), 70)
//!     .collect::<std::io::Result<_>>()
//!     .unwrap();
//!
//! assert_eq!(tokens, vec![Token::word("hello"), Token::word("world"), Token::Break]);
//! ```

mod token;
mod wrap;

pub use token::{Token, NEWLINE};
pub use wrap::{FileWrapper, LossyLines, WordWrapper, DEFAULT_WRAP_WIDTH};
