// Utility module exports

pub mod prng;

pub use prng::PRNG;
