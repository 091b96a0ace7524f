//! A module for working with ranked vertex counts.

use std::cmp::Ordering;

use itertools::Itertools;

/// A vertex paired with a count, e.g. its in-degree, out-degree or reach.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Degree<T> {
    vertex: T,
    count: usize,
}

impl<T> Degree<T> {
    /// Creates a new entry from a vertex and its count.
    ///
    /// # Examples
    ///
    /// ```
    /// use follower_net::degree::Degree;
    ///
    /// let degree = Degree::new("a", 2);
    /// assert_eq!(degree.vertex(), &"a");
    /// assert_eq!(degree.count(), 2);
    /// ```
    pub fn new(vertex: T, count: usize) -> Self {
        Self { vertex, count }
    }

    /// Returns the vertex.
    pub fn vertex(&self) -> &T {
        &self.vertex
    }

    /// Returns the count associated with the vertex.
    pub fn count(&self) -> usize {
        self.count
    }

    /// Consumes the entry, returning the `(vertex, count)` pair.
    pub fn into_inner(self) -> (T, usize) {
        (self.vertex, self.count)
    }
}

impl<T: Ord> Degree<T> {
    /// The ranking order shared by every table: count descending, then vertex ascending.
    ///
    /// # Examples
    ///
    /// ```
    /// use std::cmp::Ordering;
    ///
    /// use follower_net::degree::Degree;
    ///
    /// // Higher counts rank first.
    /// assert_eq!(Degree::new("b", 2).rank(&Degree::new("a", 1)), Ordering::Less);
    /// // Ties are broken by the vertex's natural order.
    /// assert_eq!(Degree::new("a", 1).rank(&Degree::new("b", 1)), Ordering::Less);
    /// ```
    pub fn rank(&self, other: &Self) -> Ordering {
        other
            .count
            .cmp(&self.count)
            .then_with(|| self.vertex.cmp(&other.vertex))
    }
}

impl<T> From<(T, usize)> for Degree<T> {
    fn from((vertex, count): (T, usize)) -> Self {
        Self::new(vertex, count)
    }
}

/// Ranks `(vertex, count)` pairs with [`Degree::rank`].
///
/// Keys are expected to be unique, which makes the resulting order total.
pub fn ranked<T, I>(counts: I) -> Vec<Degree<T>>
where
    T: Ord,
    I: IntoIterator<Item = (T, usize)>,
{
    counts
        .into_iter()
        .map(Degree::from)
        .sorted_by(Degree::rank)
        .collect()
}
