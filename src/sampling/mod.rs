//! Random draws over the word corpus: characters, words, mangled words and
//! whole nicknames. Every function is generic over the engine so the same
//! code runs on 32-bit and 64-bit generators.

pub mod chars;
pub mod nickname;
pub mod word;

pub use nickname::sample_nickname;
