/// First allocation of a queue; doubled on demand up to its limit.
const INITIAL_CAPACITY: usize = 16;

/// Bounded FIFO of raw bytes awaiting encoding.
///
/// Ring buffer indexed by `(head + offset) % buf.len()`. The ring starts
/// small and doubles when a push finds it full, never past `limit`, so a huge
/// run length costs nothing until the bytes actually arrive.
#[derive(Debug, Clone)]
pub struct ByteQueue {
    buf: Box<[u8]>,
    head: usize,
    len: usize,
    limit: usize,
}

impl ByteQueue {
    /// Queue holding at most `limit` bytes.
    pub fn with_capacity(limit: usize) -> Self {
        ByteQueue {
            buf: vec![0u8; limit.min(INITIAL_CAPACITY)].into_boxed_slice(),
            head: 0,
            len: 0,
            limit,
        }
    }

    /// Bytes currently allocated.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.buf.len()
    }

    /// Most bytes the queue will ever hold.
    #[inline]
    pub fn limit(&self) -> usize {
        self.limit
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Append a byte, growing the ring if needed.
    ///
    /// Panics past `limit`: callers size the limit for their run.
    #[inline]
    pub fn push_back(&mut self, b: u8) {
        assert!(
            self.len < self.limit,
            "byte queue overflow (capacity {})",
            self.limit
        );
        if self.len == self.buf.len() {
            self.grow();
        }
        let tail = (self.head + self.len) % self.buf.len();
        self.buf[tail] = b;
        self.len += 1;
    }

    /// Double the ring (capped at `limit`), unwrapping contents to index 0.
    #[cold]
    fn grow(&mut self) {
        let new_cap = self.buf.len().saturating_mul(2).clamp(1, self.limit);
        let mut buf = vec![0u8; new_cap].into_boxed_slice();
        for (i, slot) in buf.iter_mut().take(self.len).enumerate() {
            *slot = self.buf[(self.head + i) % self.buf.len()];
        }
        self.buf = buf;
        self.head = 0;
    }

    /// Byte at `offset` from the front, if present.
    #[inline]
    pub fn get(&self, offset: usize) -> Option<u8> {
        if offset < self.len {
            Some(self.buf[(self.head + offset) % self.buf.len()])
        } else {
            None
        }
    }

    /// Peek at up to `n` bytes from the front without removing them.
    pub fn front_n(&self, n: usize) -> impl Iterator<Item = u8> + '_ {
        (0..n.min(self.len)).map(move |i| self.buf[(self.head + i) % self.buf.len()])
    }

    #[inline]
    pub fn pop_front(&mut self) -> Option<u8> {
        if self.len == 0 {
            return None;
        }
        let b = self.buf[self.head];
        self.head = (self.head + 1) % self.buf.len();
        self.len -= 1;
        Some(b)
    }
}
