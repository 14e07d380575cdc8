//! Ordered sequence of normalised generator output.

use std::ops::Deref;

/// An ordered list of values in `[0, 1)`.
///
/// Produced by [`CongruentialGenerator::take_sequence`](super::CongruentialGenerator::take_sequence)
/// and the `generate` helpers. Order is the generation order and is never
/// changed, so the simulator sees values exactly as they were drawn.
///
/// Dereferences to `[f64]`, so a `&Sequence` can be passed wherever a slice
/// is expected.
///
/// # Examples
///
/// ```
/// use congruent_sim::rng::Sequence;
///
/// let sequence = Sequence::from(vec![0.25, 0.5]);
/// assert_eq!(sequence.len(), 2);
/// assert_eq!(sequence[1], 0.5);
///
/// let total: f64 = sequence.iter().sum();
/// assert_eq!(total, 0.75);
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Sequence {
    values: Vec<f64>,
}

impl Sequence {
    /// Creates an empty sequence with room for `capacity` values.
    #[inline]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            values: Vec::with_capacity(capacity),
        }
    }

    /// Returns the values as a slice.
    #[inline]
    pub fn as_slice(&self) -> &[f64] {
        &self.values
    }

    /// Consumes the sequence and returns the underlying vector.
    #[inline]
    pub fn into_vec(self) -> Vec<f64> {
        self.values
    }

    pub(crate) fn push(&mut self, value: f64) {
        self.values.push(value);
    }
}

impl Deref for Sequence {
    type Target = [f64];

    #[inline]
    fn deref(&self) -> &[f64] {
        &self.values
    }
}

impl AsRef<[f64]> for Sequence {
    #[inline]
    fn as_ref(&self) -> &[f64] {
        &self.values
    }
}

impl From<Vec<f64>> for Sequence {
    #[inline]
    fn from(values: Vec<f64>) -> Self {
        Self { values }
    }
}

impl FromIterator<f64> for Sequence {
    fn from_iter<I: IntoIterator<Item = f64>>(iter: I) -> Self {
        Self {
            values: iter.into_iter().collect(),
        }
    }
}

impl IntoIterator for Sequence {
    type Item = f64;
    type IntoIter = std::vec::IntoIter<f64>;

    fn into_iter(self) -> Self::IntoIter {
        self.values.into_iter()
    }
}

impl<'a> IntoIterator for &'a Sequence {
    type Item = &'a f64;
    type IntoIter = std::slice::Iter<'a, f64>;

    fn into_iter(self) -> Self::IntoIter {
        self.values.iter()
    }
}
