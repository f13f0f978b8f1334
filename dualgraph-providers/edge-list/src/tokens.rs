//! Whitespace tokenizer that remembers the line each token came from.

use std::str::FromStr;

use crate::errors::EdgeListError;

pub(crate) struct Tokens<'a> {
    inner: Box<dyn Iterator<Item = (usize, &'a str)> + 'a>,
}

impl<'a> Tokens<'a> {
    pub(crate) fn new(text: &'a str) -> Self {
        let inner = text
            .lines()
            .enumerate()
            .flat_map(|(index, line)| line.split_whitespace().map(move |token| (index + 1, token)));
        Self {
            inner: Box::new(inner),
        }
    }

    /// Parses the next token as `T`. `Ok(None)` means the input is exhausted.
    pub(crate) fn next_parsed<T: FromStr>(
        &mut self,
        expected: &'static str,
    ) -> Result<Option<T>, EdgeListError> {
        let Some((line, token)) = self.inner.next() else {
            return Ok(None);
        };
        token
            .parse()
            .map(Some)
            .map_err(|_| EdgeListError::InvalidToken {
                line,
                token: token.to_owned(),
                expected,
            })
    }
}
