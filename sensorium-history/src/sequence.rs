//! ReadingSequence - an owned chain of readings

use std::fmt;
use std::iter::FusedIterator;

use crate::Numeric;

/// A single link of the chain, owned by its predecessor
struct Node<T> {
    value: T,
    next: Option<Box<Node<T>>>,
}

impl<T> Node<T> {
    fn new(value: T) -> Box<Self> {
        Box::new(Self { value, next: None })
    }
}

/// An ordered, append-only history of readings
///
/// Readings are kept in recording order in a singly linked chain. Appending
/// walks to the tail, search is a linear scan, and removal unlinks exactly one
/// node. Histories are small and interactive, so the chain favours a short,
/// auditable implementation over throughput.
///
/// Cloning is deep: the copy owns freshly built nodes and never shares state
/// with its source.
pub struct ReadingSequence<T> {
    head: Option<Box<Node<T>>>,
    len: usize,
}

impl<T> ReadingSequence<T> {
    /// Create a new empty history
    pub const fn new() -> Self {
        Self { head: None, len: 0 }
    }

    /// Append a reading at the tail
    pub fn append(&mut self, value: T) {
        let mut cursor = &mut self.head;
        while let Some(node) = cursor {
            cursor = &mut node.next;
        }
        *cursor = Some(Node::new(value));

        self.len += 1;
    }

    /// Get the number of readings
    pub fn len(&self) -> usize {
        self.len
    }

    /// Check if there are no readings
    pub fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    /// Oldest reading, if any
    pub fn first(&self) -> Option<&T> {
        self.head.as_deref().map(|node| &node.value)
    }

    /// Most recent reading, if any
    pub fn last(&self) -> Option<&T> {
        self.iter().last()
    }

    /// Iterate over readings in recording order
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            next: self.head.as_deref(),
            remaining: self.len,
        }
    }

    /// Release every reading
    ///
    /// Nodes are unlinked one at a time so that dropping a long history never
    /// recurses through the chain.
    pub fn clear(&mut self) {
        let mut cursor = self.head.take();
        while let Some(mut node) = cursor {
            cursor = node.next.take();
        }
        self.len = 0;
    }

    /// Remove and return the oldest reading
    pub fn pop_front(&mut self) -> Option<T> {
        let mut node = self.head.take()?;
        self.head = node.next.take();
        self.len -= 1;
        Some(node.value)
    }

    /// Unlink the node at `index` and return its value
    fn remove_at(&mut self, index: usize) -> Option<T> {
        if index >= self.len {
            return None;
        }

        let mut cursor = &mut self.head;
        for _ in 0..index {
            cursor = &mut cursor.as_mut()?.next;
        }

        let mut node = cursor.take()?;
        *cursor = node.next.take();
        self.len -= 1;
        Some(node.value)
    }
}

impl<T: PartialEq> ReadingSequence<T> {
    /// Check if a reading equal to `value` is present
    pub fn contains(&self, value: &T) -> bool {
        self.iter().any(|v| v == value)
    }

    /// Remove the first reading equal to `value`
    ///
    /// Returns `false` if no reading matched.
    pub fn remove_first(&mut self, value: &T) -> bool {
        match self.iter().position(|v| v == value) {
            Some(index) => self.remove_at(index).is_some(),
            None => false,
        }
    }
}

impl<T: Numeric> ReadingSequence<T> {
    /// Average of all readings
    ///
    /// Integral readings use truncating division. Returns the zero value when
    /// the history is empty.
    pub fn average(&self) -> T {
        T::mean(self.iter().copied(), self.len)
    }

    /// Smallest reading without removing it
    ///
    /// Ties resolve to the earliest reading.
    pub fn minimum(&self) -> Option<T> {
        self.minimum_position().map(|(_, value)| value)
    }

    /// Remove the smallest reading and return it
    ///
    /// When several readings share the minimum, only the earliest one is
    /// removed. Returns the zero value when the history is empty.
    pub fn extract_minimum(&mut self) -> T {
        match self.minimum_position() {
            Some((index, _)) => self.remove_at(index).unwrap_or_default(),
            None => T::default(),
        }
    }

    fn minimum_position(&self) -> Option<(usize, T)> {
        let mut readings = self.iter().copied().enumerate();
        let mut best = readings.next()?;

        for (index, value) in readings {
            if value < best.1 {
                best = (index, value);
            }
        }

        Some(best)
    }
}

impl<T> Default for ReadingSequence<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for ReadingSequence<T> {
    fn drop(&mut self) {
        self.clear();
    }
}

impl<T: Clone> Clone for ReadingSequence<T> {
    fn clone(&self) -> Self {
        self.iter().cloned().collect()
    }

    /// Releases the current readings, then copies `source` in order
    fn clone_from(&mut self, source: &Self) {
        self.clear();
        self.extend(source.iter().cloned());
    }
}

impl<T: PartialEq> PartialEq for ReadingSequence<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.iter().eq(other.iter())
    }
}

impl<T: fmt::Debug> fmt::Debug for ReadingSequence<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

/// Readings separated by single spaces, oldest first
impl<T: fmt::Display> fmt::Display for ReadingSequence<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, value) in self.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{}", value)?;
        }
        Ok(())
    }
}

impl<T> Extend<T> for ReadingSequence<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        // Seek the tail once, then keep appending behind the newest node.
        let mut cursor = &mut self.head;
        while let Some(node) = cursor {
            cursor = &mut node.next;
        }

        for value in iter {
            let node = cursor.insert(Node::new(value));
            cursor = &mut node.next;
            self.len += 1;
        }
    }
}

impl<T> FromIterator<T> for ReadingSequence<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut sequence = Self::new();
        sequence.extend(iter);
        sequence
    }
}

impl<'a, T> IntoIterator for &'a ReadingSequence<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T> IntoIterator for ReadingSequence<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter(self)
    }
}

/// Borrowing iterator over a [`ReadingSequence`]
pub struct Iter<'a, T> {
    next: Option<&'a Node<T>>,
    remaining: usize,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.next.map(|node| {
            self.next = node.next.as_deref();
            self.remaining -= 1;
            &node.value
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}
impl<T> FusedIterator for Iter<'_, T> {}

/// Owning iterator over a [`ReadingSequence`]
pub struct IntoIter<T>(ReadingSequence<T>);

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        self.0.pop_front()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.0.len, Some(self.0.len))
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}
impl<T> FusedIterator for IntoIter<T> {}
