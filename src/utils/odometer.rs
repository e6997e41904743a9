use crate::generator::{Error, Result};

/// An iterator-like object that yields index vectors in odometer order.
///
/// Every position holds an index in `0..radix`. The last position moves
/// fastest and carries into the one before it, so the vectors come out
/// sorted.
///
/// ```rust
/// use edgegen::utils::Odometer;
/// let mut odo = Odometer::new(2, 3, 0).unwrap();
///
/// assert_eq!(odo.next(), Some(&[0, 0][..]));
/// assert_eq!(odo.next(), Some(&[0, 1][..]));
/// assert_eq!(odo.next(), Some(&[0, 2][..]));
/// assert_eq!(odo.next(), Some(&[1, 0][..]));
/// assert_eq!(odo.next(), Some(&[1, 1][..]));
/// assert_eq!(odo.next(), Some(&[1, 2][..]));
/// assert_eq!(odo.next(), Some(&[2, 0][..]));
/// assert_eq!(odo.next(), Some(&[2, 1][..]));
/// assert_eq!(odo.next(), Some(&[2, 2][..]));
///
/// assert_eq!(odo.next(), None);
/// assert_eq!(odo.next(), None);
/// ```
#[derive(Debug)]
pub struct Odometer {
    buf: Vec<usize>,
    // points to the position being made larger.
    current: usize,
    radix: usize,
    counter: usize,
    limit: usize,
}

impl Clone for Odometer {
    fn clone(&self) -> Self {
        let length = self.buf.len();
        Self {
            buf: vec![0; length],
            current: length,
            radix: self.radix,
            counter: 0,
            limit: self.limit,
        }
    }
}

impl Odometer {
    /// Create an `Odometer` over `length` positions, each counting through
    /// `0..radix`. A non-zero `limit` caps how many vectors are yielded.
    ///
    /// A zero `length` yields nothing.
    pub fn new(length: usize, radix: usize, limit: usize) -> Result<Self> {
        if radix == 0 {
            return Err(Error::InvalidArgument("radix should be greater than 0".into()));
        }
        Ok(Self {
            buf: vec![0; length],
            current: length,
            radix,
            counter: 0,
            limit,
        })
    }

    /// Reset the state of the odometer to initial.
    pub fn reset(&mut self) {
        for v in self.buf.iter_mut() {
            *v = 0;
        }
        self.current = self.buf.len();
        self.counter = 0;
    }

    /// How many vectors a full, unlimited run yields, or `None` when that
    /// does not fit in `usize`.
    pub fn total(&self) -> Option<usize> {
        match self.buf.len() {
            0 => Some(0),
            length => {
                let exp = u32::try_from(length).ok()?;
                self.radix.checked_pow(exp)
            }
        }
    }

    /// How many vectors have been yielded since creation or the last reset.
    pub fn yielded(&self) -> usize {
        self.counter
    }

    pub fn len(&self) -> usize {
        self.buf.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    #[allow(clippy::should_implement_trait)]
    pub fn next(&mut self) -> Option<&[usize]> {
        let buflen = self.buf.len();
        if buflen == 0 {
            return None;
        }
        if self.limit > 0 && self.counter == self.limit {
            return None;
        }
        let last = self.radix - 1;
        if self.current == buflen {
            self.current = buflen - 1;
        } else {
            loop {
                let val = &mut self.buf[self.current];
                if *val < last {
                    *val += 1;
                    for v in self.buf.iter_mut().skip(self.current + 1) {
                        *v = 0
                    }
                    self.current = buflen - 1;
                    break;
                } else {
                    match self.current {
                        0 => return None,
                        _ => self.current -= 1,
                    }
                }
            }
        }
        self.counter += 1;
        Some(&self.buf)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sequence() {
        let mut odo = Odometer::new(3, 2, 0).unwrap();

        assert_eq!(odo.next(), Some(&[0, 0, 0][..]));
        assert_eq!(odo.next(), Some(&[0, 0, 1][..]));
        assert_eq!(odo.next(), Some(&[0, 1, 0][..]));
        assert_eq!(odo.next(), Some(&[0, 1, 1][..]));
        assert_eq!(odo.next(), Some(&[1, 0, 0][..]));
        assert_eq!(odo.next(), Some(&[1, 0, 1][..]));
        assert_eq!(odo.next(), Some(&[1, 1, 0][..]));
        assert_eq!(odo.next(), Some(&[1, 1, 1][..]));

        assert_eq!(odo.next(), None);
        assert_eq!(odo.next(), None);
        assert_eq!(odo.yielded(), 8);
    }

    #[test]
    fn test_radix_one() {
        let mut odo = Odometer::new(4, 1, 0).unwrap();
        assert_eq!(odo.next(), Some(&[0, 0, 0, 0][..]));
        assert_eq!(odo.next(), None);
    }

    #[test]
    fn test_zero_length_yields_nothing() {
        let mut odo = Odometer::new(0, 5, 0).unwrap();
        assert!(odo.is_empty());
        assert_eq!(odo.total(), Some(0));
        assert_eq!(odo.next(), None);
    }

    #[test]
    fn test_zero_radix_is_rejected() {
        assert!(matches!(
            Odometer::new(3, 0, 0),
            Err(Error::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_limit() {
        let mut odo = Odometer::new(3, 10, 4).unwrap();
        let mut seen = Vec::new();
        while let Some(v) = odo.next() {
            seen.push(v.to_vec());
        }
        assert_eq!(
            seen,
            vec![vec![0, 0, 0], vec![0, 0, 1], vec![0, 0, 2], vec![0, 0, 3]]
        );
    }

    #[test]
    fn test_reset_and_clone_restart() {
        let mut odo = Odometer::new(2, 3, 0).unwrap();
        odo.next();
        odo.next();
        let mut cloned = odo.clone();
        assert_eq!(cloned.next(), Some(&[0, 0][..]));

        odo.reset();
        assert_eq!(odo.yielded(), 0);
        assert_eq!(odo.next(), Some(&[0, 0][..]));
    }

    #[test]
    fn test_total() {
        assert_eq!(Odometer::new(3, 62, 0).unwrap().total(), Some(238_328));
        assert_eq!(Odometer::new(64, 62, 0).unwrap().total(), None);
    }
}
