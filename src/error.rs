use std::{fmt, io};

#[derive(Debug)]
pub enum FontError {
    BadMagic {
        found: [u8; 8],
    },
    UnexpectedEof,
    ZeroEm,
    /// A command word that should have been a segment tag matched none of
    /// `'m'`, `'l'`, `'c'`. The offset is relative to the start of the
    /// glyph's command stream.
    UnknownCommandTag {
        tag: u32,
        offset: usize,
    },
    TruncatedCommandStream {
        len: usize,
    },
    CodepointOutOfRange {
        codepoint: u32,
    },
    DuplicateCodepoint {
        codepoint: u32,
    },
    CopyrightTooLong {
        len: usize,
    },
    FontTooLarge {
        offset: usize,
    },
    MathDomain {
        discriminant: f32,
    },
    IoError(io::Error),
}

impl From<io::Error> for FontError {
    fn from(err: io::Error) -> Self {
        match err.kind() {
            io::ErrorKind::UnexpectedEof => Self::UnexpectedEof,
            _ => Self::IoError(err),
        }
    }
}

impl fmt::Display for FontError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:#?}", self)
    }
}

impl std::error::Error for FontError {}

pub type FontResult<T> = Result<T, FontError>;
