//! Fixed-capacity history of the most recent telemetry samples.

/// One telemetry tick: a value per channel, in pad registry order.
pub type Sample = Vec<f32>;

/// Circular store that keeps the newest `capacity` items.
///
/// Until full, items are appended. Once full, each push overwrites the slot at
/// `oldest` and advances it, so the logical order is always
/// `buf[oldest..] ++ buf[..oldest]`.
#[derive(Clone, Debug)]
pub struct RingBuffer<T> {
    buf: Vec<T>,
    oldest: usize,
    capacity: usize,
}

impl<T> RingBuffer<T> {
    /// A capacity of zero is bumped to one so `push` is always defined.
    pub fn with_capacity(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            buf: Vec::with_capacity(capacity),
            oldest: 0,
            capacity,
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn len(&self) -> usize {
        self.buf.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.buf.len() == self.capacity
    }

    pub fn push(&mut self, item: T) {
        if self.buf.len() < self.capacity {
            self.buf.push(item);
        } else {
            self.buf[self.oldest] = item;
            self.oldest = (self.oldest + 1) % self.capacity;
        }
    }

    /// Drop all items, keeping the allocation.
    pub fn clear(&mut self) {
        self.buf.clear();
        self.oldest = 0;
    }

    /// Clear and re-initialize to a new capacity (used when a connection is
    /// (re)established with a different history length).
    pub fn reset_capacity(&mut self, capacity: usize) {
        self.clear();
        self.capacity = capacity.max(1);
        self.buf.reserve_exact(self.capacity);
    }

    /// Most recently pushed item.
    pub fn latest(&self) -> Option<&T> {
        if self.buf.is_empty() {
            None
        } else if self.buf.len() < self.capacity {
            self.buf.last()
        } else {
            let idx = (self.oldest + self.capacity - 1) % self.capacity;
            self.buf.get(idx)
        }
    }

    /// Iterate oldest to newest. Each call starts a fresh pass.
    pub fn iter(&self) -> Iter<'_, T> {
        let (newer, older) = self.buf.split_at(self.oldest);
        Iter {
            inner: older.iter().chain(newer.iter()),
        }
    }
}

impl<T: Clone> RingBuffer<T> {
    pub fn to_vec(&self) -> Vec<T> {
        self.iter().cloned().collect()
    }
}

impl<'a, T> IntoIterator for &'a RingBuffer<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Chronological iterator over a [`RingBuffer`].
pub struct Iter<'a, T> {
    inner: std::iter::Chain<std::slice::Iter<'a, T>, std::slice::Iter<'a, T>>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<T> DoubleEndedIterator for Iter<'_, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back()
    }
}
