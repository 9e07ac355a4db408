mod alphabet;
pub mod cli;
pub mod core;
mod encoder;
mod error;
mod queue;
mod seed;


pub use self::alphabet::Alphabet;
pub use self::core::{Generator, Termination, generate, queue_capacity};
pub use self::encoder::{Emit, Phase, StreamEncoder};
pub use self::error::{CountError, Error};
pub use self::queue::ByteQueue;
pub use self::seed::{SEED_LEN, Seed};
