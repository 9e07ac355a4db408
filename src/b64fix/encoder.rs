use super::alphabet::Alphabet;
use super::error::Error;
use super::queue::ByteQueue;

/// Position within the 3-byte / 4-symbol Base64 group.
///
/// Each variant is named after the bit window it reads:
/// `High6` = bits 7..2 of byte 0, `Low2High4` = bits 1..0 of byte 0 and
/// 7..4 of byte 1, `Low4High2` = bits 3..0 of byte 1 and 7..6 of byte 2,
/// `Low6` = bits 5..0 of byte 2.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    #[default]
    High6,
    Low2High4,
    Low4High2,
    Low6,
}

/// What a phase produces from the front of the queue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Emit {
    /// 6-bit alphabet index.
    Sextet(u8),
    Pad,
}

impl Phase {
    #[inline]
    pub fn index(self) -> usize {
        match self {
            Phase::High6 => 0,
            Phase::Low2High4 => 1,
            Phase::Low4High2 => 2,
            Phase::Low6 => 3,
        }
    }

    #[inline]
    pub fn next(self) -> Phase {
        match self {
            Phase::High6 => Phase::Low2High4,
            Phase::Low2High4 => Phase::Low4High2,
            Phase::Low4High2 => Phase::Low6,
            Phase::Low6 => Phase::High6,
        }
    }

    /// Compute this phase's output from the first two queued bytes.
    ///
    /// A missing second byte contributes zero bits. A missing first byte
    /// yields a pad at the last two phases and `Starved` at the first two,
    /// which the driver loop never reaches.
    #[inline]
    pub fn emit(self, first: Option<u8>, second: Option<u8>) -> Result<Emit, Error> {
        let low = second.unwrap_or(0);
        let sextet = match (self, first) {
            (Phase::High6, Some(b)) => b >> 2,
            (Phase::Low2High4, Some(b)) => ((b << 4) & 0x3f) | (low >> 4),
            (Phase::Low4High2, Some(b)) => ((b << 2) & 0x3f) | (low >> 6),
            (Phase::Low6, Some(b)) => b & 0x3f,
            (Phase::Low4High2 | Phase::Low6, None) => return Ok(Emit::Pad),
            (Phase::High6 | Phase::Low2High4, None) => {
                return Err(Error::Starved {
                    phase: self.index(),
                });
            }
        };
        Ok(Emit::Sextet(sextet))
    }

    /// Whether advancing past this phase consumes the front byte.
    #[inline]
    fn consumes(self, queued: usize) -> bool {
        match self {
            Phase::High6 => false,
            Phase::Low2High4 => true,
            Phase::Low4High2 | Phase::Low6 => queued > 0,
        }
    }
}

/// Streaming Base64 encoder over a `ByteQueue`.
///
/// `front` reads the next symbol without touching state; `pop_front`
/// advances. Keeping them apart lets a caller push the symbol it just saw
/// back into the queue before the encoder moves on.
#[derive(Debug, Clone)]
pub struct StreamEncoder<'a> {
    alphabet: &'a Alphabet,
    queue: ByteQueue,
    phase: Phase,
}

impl<'a> StreamEncoder<'a> {
    pub fn new(alphabet: &'a Alphabet, queue_capacity: usize) -> Self {
        StreamEncoder {
            alphabet,
            queue: ByteQueue::with_capacity(queue_capacity),
            phase: Phase::default(),
        }
    }

    #[inline]
    pub fn push_back(&mut self, b: u8) {
        self.queue.push_back(b);
    }

    /// Next symbol, without consuming input or advancing the phase.
    #[inline]
    pub fn front(&self) -> Result<u8, Error> {
        let mut bytes = self.queue.front_n(2);
        let first = bytes.next();
        let second = bytes.next();
        Ok(match self.phase.emit(first, second)? {
            Emit::Sextet(i) => self.alphabet.symbol(i),
            Emit::Pad => self.alphabet.pad(),
        })
    }

    /// Advance one phase, dequeuing the byte this phase finished with.
    #[inline]
    pub fn pop_front(&mut self) -> Result<(), Error> {
        if self.queue.is_empty() && matches!(self.phase, Phase::High6 | Phase::Low2High4) {
            return Err(Error::Starved {
                phase: self.phase.index(),
            });
        }
        if self.phase.consumes(self.queue.len()) {
            self.queue.pop_front();
        }
        self.phase = self.phase.next();
        Ok(())
    }

    /// `front` followed by `pop_front`.
    #[inline]
    pub fn next_symbol(&mut self) -> Result<u8, Error> {
        let c = self.front()?;
        self.pop_front()?;
        Ok(c)
    }

    #[inline]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    #[inline]
    pub fn queued(&self) -> usize {
        self.queue.len()
    }

    /// True once every queued byte is encoded and the group is closed.
    #[inline]
    pub fn is_drained(&self) -> bool {
        self.queue.is_empty() && self.phase == Phase::High6
    }
}
