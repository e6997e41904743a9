use super::alphabet::{Alphabet, Length};
use super::Result;
use crate::utils::Odometer;

/// Every string of a fixed length over an alphabet, in odometer order.
#[derive(Debug, Clone)]
pub struct Candidates {
    alphabet: Alphabet,
    odometer: Odometer,
}

impl Candidates {
    pub fn new(alphabet: Alphabet, length: Length) -> Result<Self> {
        let odometer = Odometer::new(length.get(), alphabet.len(), 0)?;
        Ok(Self { alphabet, odometer })
    }

    /// Size of the full enumeration, `None` on overflow.
    pub fn total(&self) -> Option<usize> {
        self.odometer.total()
    }

    /// Start over from the first candidate.
    pub fn reset(&mut self) {
        self.odometer.reset()
    }

    /// Keep only the candidates for which [`is_valid`] holds.
    pub fn valid(self, boundary: char) -> ValidCandidates {
        ValidCandidates {
            inner: self,
            boundary,
        }
    }
}

impl Iterator for Candidates {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        let alphabet = &self.alphabet;
        self.odometer.next().map(|indices| alphabet.spell(indices))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match self.total() {
            Some(total) => {
                let left = total.saturating_sub(self.odometer.yielded());
                (left, Some(left))
            }
            None => (usize::MAX, None),
        }
    }
}

/// True unless `candidate` starts or ends with `boundary`.
pub fn is_valid(candidate: &str, boundary: char) -> bool {
    !(candidate.starts_with(boundary) || candidate.ends_with(boundary))
}

/// [`Candidates`] with the boundary filter applied. Order is preserved.
#[derive(Debug, Clone)]
pub struct ValidCandidates {
    inner: Candidates,
    boundary: char,
}

impl ValidCandidates {
    pub fn boundary(&self) -> char {
        self.boundary
    }

    /// How many candidates have been scanned so far, survivors or not.
    pub fn scanned(&self) -> usize {
        self.inner.odometer.yielded()
    }
}

impl Iterator for ValidCandidates {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        let boundary = self.boundary;
        self.inner.by_ref().find(|c| is_valid(c, boundary))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let (_, upper) = self.inner.size_hint();
        (0, upper)
    }
}
