use tracing::trace;

use super::alphabet::Alphabet;
use super::encoder::StreamEncoder;
use super::error::Error;

/// Number of seed bytes: one per phase that does not depend on feedback.
pub const SEED_LEN: usize = 3;

/// The 3-byte fixed point that starts a self-feeding stream.
///
/// Fed one byte at a time into a fresh `StreamEncoder`, each byte comes
/// straight back out as the encoder's next symbol.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Seed([u8; SEED_LEN]);

impl Seed {
    /// Seed of `Alphabet::STANDARD`.
    pub const STANDARD: Seed = Seed(*b"Vm0");

    /// Search `alphabet` for its unique seed, one phase at a time.
    ///
    /// At each phase every symbol is tried on top of the prefix found so far;
    /// exactly one must reproduce itself, otherwise the alphabet has no
    /// usable fixed point.
    pub fn find(alphabet: &Alphabet) -> Result<Seed, Error> {
        let mut seed = [0u8; SEED_LEN];
        for phase in 0..SEED_LEN {
            let mut found = None;
            let mut matches = 0;
            for &candidate in alphabet.symbols() {
                if reproduces(alphabet, &seed[..phase], candidate)? {
                    matches += 1;
                    found = Some(candidate);
                }
            }
            trace!(phase, matches, "seed search");
            match found {
                Some(b) if matches == 1 => seed[phase] = b,
                _ => return Err(Error::AmbiguousSeed { phase, matches }),
            }
        }
        Ok(Seed(seed))
    }

    #[inline]
    pub fn as_bytes(&self) -> &[u8; SEED_LEN] {
        &self.0
    }
}

/// Prime a fresh encoder with `prefix`, push `candidate`, and check the
/// encoder's next symbol is `candidate` itself.
fn reproduces(alphabet: &Alphabet, prefix: &[u8], candidate: u8) -> Result<bool, Error> {
    let mut enc = StreamEncoder::new(alphabet, SEED_LEN);
    for &b in prefix {
        enc.push_back(b);
        enc.pop_front()?;
    }
    enc.push_back(candidate);
    Ok(enc.front()? == candidate)
}
