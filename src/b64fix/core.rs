use std::io::Write;

use tracing::debug;

use super::alphabet::Alphabet;
use super::encoder::StreamEncoder;
use super::error::Error;
use super::seed::{SEED_LEN, Seed};

/// Output chunk size for `write_to`. One `write_all` per full chunk.
const WRITE_CHUNK: usize = 64 * 1024;

/// How the final partial group is handled once `count` symbols are out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Termination {
    /// Stop at exactly `count` symbols.
    #[default]
    Exact,
    /// Keep draining without feedback until the group closes, padding with
    /// the alphabet's pad symbol. Output is 4 * ceil(count / 3) symbols.
    Padded,
}

/// Queue capacity needed for a run of `count` symbols.
///
/// Priming holds at most two bytes; steady state grows by one byte every
/// four symbols.
#[inline]
pub fn queue_capacity(count: usize) -> usize {
    count.div_ceil(4).max(SEED_LEN)
}

/// Self-feeding Base64 stream of a fixed length.
///
/// Primes the encoder with the seed, then feeds every emitted symbol back
/// in as raw input, then (for `Termination::Padded`) drains.
pub struct Generator<'a> {
    encoder: StreamEncoder<'a>,
    seed: &'a Seed,
    count: usize,
    emitted: usize,
    termination: Termination,
}

impl<'a> Generator<'a> {
    pub fn new(
        alphabet: &'a Alphabet,
        seed: &'a Seed,
        count: usize,
        termination: Termination,
    ) -> Self {
        Generator {
            encoder: StreamEncoder::new(alphabet, queue_capacity(count)),
            seed,
            count,
            emitted: 0,
            termination,
        }
    }

    /// Emit the next symbol, or `None` once the stream is complete.
    pub fn next_symbol(&mut self) -> Result<Option<u8>, Error> {
        let i = self.emitted;
        let c = if i < self.count {
            if i < SEED_LEN {
                self.encoder.push_back(self.seed.as_bytes()[i]);
                self.encoder.next_symbol()?
            } else {
                let c = self.encoder.next_symbol()?;
                self.encoder.push_back(c);
                c
            }
        } else if self.termination == Termination::Padded && !self.encoder.is_drained() {
            self.encoder.next_symbol()?
        } else {
            return Ok(None);
        };
        self.emitted += 1;
        Ok(Some(c))
    }

    /// Symbols emitted so far.
    #[inline]
    pub fn emitted(&self) -> usize {
        self.emitted
    }

    /// Total symbols this generator will emit (saturating).
    pub fn output_len(&self) -> usize {
        match self.termination {
            Termination::Exact => self.count,
            Termination::Padded => self.count.div_ceil(3).saturating_mul(4),
        }
    }

    /// Stream the remaining symbols to `out` in fixed-size chunks, then flush.
    /// Returns the number of bytes written.
    pub fn write_to(&mut self, out: &mut impl Write) -> Result<u64, Error> {
        let mut buf = vec![0u8; WRITE_CHUNK.min(self.output_len())];
        let mut total = 0u64;

        loop {
            let mut n = 0;
            while n < buf.len() {
                match self.next_symbol()? {
                    Some(c) => {
                        buf[n] = c;
                        n += 1;
                    }
                    None => break,
                }
            }
            if n == 0 {
                break;
            }
            out.write_all(&buf[..n])?;
            total += n as u64;
            if n < buf.len() {
                break;
            }
        }

        out.flush()?;
        debug!(
            written = total,
            queued = self.encoder.queued(),
            phase = self.encoder.phase().index(),
            "stream complete"
        );
        Ok(total)
    }
}

/// Generate the whole stream into memory.
pub fn generate(
    alphabet: &Alphabet,
    seed: &Seed,
    count: usize,
    termination: Termination,
) -> Result<Vec<u8>, Error> {
    let mut generator = Generator::new(alphabet, seed, count, termination);
    let mut out = Vec::with_capacity(generator.output_len());
    generator.write_to(&mut out)?;
    Ok(out)
}
