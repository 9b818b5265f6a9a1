pub mod codec;
pub mod error;
pub mod types;

pub use codec::{convert, decode, encode, encode_int};
pub use error::{RadixError, Result, Stage};
pub use types::{CaseSensitivity, Context, InputSource, Magnitude, OutputDest, Radix, RadixMeta};
