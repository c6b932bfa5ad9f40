//! Shared buffer types.
mod bytestr;

pub use bytestr::ByteStr;
