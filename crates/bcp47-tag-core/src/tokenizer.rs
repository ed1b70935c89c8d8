use alloc::string::{String, ToString};
use alloc::vec::Vec;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub(crate) struct TokenStream {
    pub tokens: Vec<String>,
    pub has_blank: bool,
    pub illegal_characters: Vec<String>,
}

pub(crate) fn tokenize(input: &str) -> TokenStream {
    let mut stream = TokenStream::default();

    for ch in input.chars() {
        if !ch.is_ascii_alphanumeric() && ch != '-' {
            stream.illegal_characters.push(ch.to_string());
        }
    }

    for token in input.split('-') {
        if token.is_empty() {
            stream.has_blank = true;
        }
        stream.tokens.push(token.to_string());
    }

    stream
}
