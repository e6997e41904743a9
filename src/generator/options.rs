/// The 62 alphanumeric characters, lowercase first, then uppercase, then digits.
pub const DEFAULT_ALPHABET: &str =
    "abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";
pub const DEFAULT_LENGTH: i64 = 3;
pub const DEFAULT_BOUNDARY: char = '_';

/// Options for generating combinations.
///
/// Nothing is validated here; see [`Alphabet::new`](super::Alphabet::new) and
/// [`Length::new`](super::Length::new) for the rules applied by `generate`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorOptions {
    /// Characters to draw from, in enumeration order.
    pub alphabet: String,
    /// Width of each generated string. Signed so that a negative width can be
    /// reported instead of silently wrapping.
    pub length: i64,
    /// Character that may not open or close a valid string.
    pub boundary: char,
}

impl GeneratorOptions {
    pub fn new() -> Self {
        Self::default()
    }
    pub fn alphabet<S: Into<String>>(&mut self, alphabet: S) -> &mut Self {
        self.alphabet = alphabet.into();
        self
    }
    pub fn length(&mut self, length: i64) -> &mut Self {
        self.length = length;
        self
    }
    pub fn boundary(&mut self, boundary: char) -> &mut Self {
        self.boundary = boundary;
        self
    }
}

impl Default for GeneratorOptions {
    fn default() -> Self {
        Self {
            alphabet: DEFAULT_ALPHABET.to_owned(),
            length: DEFAULT_LENGTH,
            boundary: DEFAULT_BOUNDARY,
        }
    }
}

/// Parse a boundary given as text. It has to be exactly one character.
pub fn parse_boundary(s: &str) -> super::Result<char> {
    let mut chars = s.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Ok(c),
        _ => Err(super::Error::InvalidArgument(format!(
            "boundary must be a single character, got {:?}",
            s
        ))),
    }
}
