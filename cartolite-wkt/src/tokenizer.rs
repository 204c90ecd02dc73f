use std::fmt::{Display, Formatter};
use std::iter::Peekable;
use std::str::CharIndices;

use crate::error::WktError;

/// Lexical token of the WKT grammar.
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum Token<'a> {
    Word(&'a str),
    Number(f64),
    LeftParen,
    RightParen,
    Comma,
}

impl Display for Token<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Token::Word(v) => write!(f, "'{v}'"),
            Token::Number(v) => write!(f, "number {v}"),
            Token::LeftParen => write!(f, "'('"),
            Token::RightParen => write!(f, "')'"),
            Token::Comma => write!(f, "','"),
        }
    }
}

/// Token together with its byte offset in the source text.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Spanned<'a> {
    pub token: Token<'a>,
    pub position: usize,
}

/// Splits WKT text into tokens, skipping any whitespace between them.
pub(crate) struct Tokenizer<'a> {
    text: &'a str,
    chars: Peekable<CharIndices<'a>>,
}

impl<'a> Tokenizer<'a> {
    pub fn new(text: &'a str) -> Self {
        Self {
            text,
            chars: text.char_indices().peekable(),
        }
    }

    fn consume_while(&mut self, start: usize, predicate: impl Fn(char) -> bool) -> &'a str {
        let mut end = self.text.len();
        while let Some(&(index, c)) = self.chars.peek() {
            if !predicate(c) {
                end = index;
                break;
            }
            self.chars.next();
        }

        &self.text[start..end]
    }
}

fn is_number_char(c: char) -> bool {
    c.is_ascii_digit() || matches!(c, '-' | '+' | '.' | 'e' | 'E')
}

impl<'a> Iterator for Tokenizer<'a> {
    type Item = Result<Spanned<'a>, WktError>;

    fn next(&mut self) -> Option<Self::Item> {
        while self.chars.next_if(|(_, c)| c.is_whitespace()).is_some() {}

        let &(position, c) = self.chars.peek()?;
        let token = match c {
            '(' => {
                self.chars.next();
                Token::LeftParen
            }
            ')' => {
                self.chars.next();
                Token::RightParen
            }
            ',' => {
                self.chars.next();
                Token::Comma
            }
            c if c.is_ascii_alphabetic() => Token::Word(
                self.consume_while(position, |c| c.is_ascii_alphanumeric() || c == '_'),
            ),
            c if c.is_ascii_digit() || matches!(c, '-' | '+' | '.') => {
                let lexeme = self.consume_while(position, is_number_char);
                match lexeme.parse::<f64>() {
                    Ok(v) if v.is_finite() => Token::Number(v),
                    _ => {
                        return Some(Err(WktError::InvalidNumber {
                            lexeme: lexeme.to_string(),
                            position,
                        }))
                    }
                }
            }
            character => {
                self.chars.next();
                return Some(Err(WktError::UnexpectedCharacter {
                    character,
                    position,
                }));
            }
        };

        log::trace!("WKT token {token} at {position}");
        Some(Ok(Spanned { token, position }))
    }
}
