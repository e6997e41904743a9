// Design
//
// Enumeration is an odometer over alphabet indices (see utils::Odometer);
// position 0 moves slowest, the last position fastest. The odometer is
// mapped to strings by `Candidates`, and the boundary filter is a plain
// iterator adapter on top of it, so the whole pipeline is lazy.
//
// `generate` is the eager entry point: it validates options, refuses
// enumerations that do not fit in memory, and collects the survivors.

mod alphabet;
mod candidates;
mod error;
mod options;

pub use alphabet::{Alphabet, Length};
pub use candidates::{is_valid, Candidates, ValidCandidates};
pub use error::{Error, Result};
pub use options::{
    parse_boundary, GeneratorOptions, DEFAULT_ALPHABET, DEFAULT_BOUNDARY, DEFAULT_LENGTH,
};

use tracing::debug;

/// The materialised result of one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Generation {
    /// Surviving strings, in generation order.
    pub valid: Vec<String>,
    /// How many candidates were enumerated before filtering.
    pub candidates: usize,
}

impl Generation {
    pub fn count(&self) -> usize {
        self.valid.len()
    }

    /// Candidates dropped by the boundary filter.
    pub fn removed(&self) -> usize {
        self.candidates.saturating_sub(self.valid.len())
    }
}

/// Validate `opts` and build the lazy pipeline without enumerating anything.
pub fn valid_candidates(opts: &GeneratorOptions) -> Result<ValidCandidates> {
    let alphabet = Alphabet::new(&opts.alphabet)?;
    let length = Length::new(opts.length)?;
    Ok(Candidates::new(alphabet, length)?.valid(opts.boundary))
}

/// Enumerate all candidates for `opts` and keep the ones not bounded by
/// `opts.boundary`.
pub fn generate(opts: &GeneratorOptions) -> Result<Generation> {
    let alphabet = Alphabet::new(&opts.alphabet)?;
    let length = Length::new(opts.length)?;
    let alphabet_len = alphabet.len();
    let boundary_in_alphabet = alphabet.contains(opts.boundary);

    let candidates = Candidates::new(alphabet, length)?;
    let total = candidates.total().ok_or(Error::TooManyCandidates {
        alphabet: alphabet_len,
        length: length.get(),
    })?;
    debug!(
        alphabet = alphabet_len,
        length = length.get(),
        boundary = %opts.boundary,
        total,
        "enumerating candidates"
    );
    if !boundary_in_alphabet {
        debug!(boundary = %opts.boundary, "boundary is not in the alphabet, nothing will be filtered");
    }

    let capacity = expected_valid_count(alphabet_len, length.get(), boundary_in_alphabet)
        .unwrap_or(total);
    let mut valid = Vec::with_capacity(capacity);
    let mut iter = candidates.valid(opts.boundary);
    valid.extend(iter.by_ref());

    let generation = Generation {
        valid,
        candidates: iter.scanned(),
    };
    debug!(
        candidates = generation.candidates,
        valid = generation.count(),
        removed = generation.removed(),
        "generation finished"
    );
    Ok(generation)
}

/// Number of survivors, computed without enumerating.
///
/// With `n` characters and width `L`, and the boundary in the alphabet, this
/// is `n^L - 2*n^(L-1) + n^(L-2)`, i.e. `(n-1)^2 * n^(L-2)` for `L >= 2`.
/// Returns `None` on overflow.
pub fn expected_valid_count(
    alphabet_len: usize,
    length: usize,
    boundary_in_alphabet: bool,
) -> Option<usize> {
    let pow = |exp: usize| u32::try_from(exp).ok().and_then(|e| alphabet_len.checked_pow(e));
    match (length, boundary_in_alphabet) {
        (0, _) => Some(0),
        (_, false) => pow(length),
        (1, true) => Some(alphabet_len.saturating_sub(1)),
        (_, true) => {
            let inner = alphabet_len.saturating_sub(1);
            inner.checked_mul(inner)?.checked_mul(pow(length - 2)?)
        }
    }
}
