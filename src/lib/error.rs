use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum Error {
    /// A parenthesized body without a keyword appeared before any typed literal.
    #[error("geometry body `{0}` has no type keyword and nothing to inherit one from")]
    MalformedLiteral(String),
    #[error("invalid coordinate `{token}`")]
    NumericParse { token: String },
}

pub type Result<T> = std::result::Result<T, Error>;
