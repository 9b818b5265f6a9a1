mod convert;
mod decode;
mod digit;
mod encode;
pub mod registry;

pub use convert::convert;
pub use decode::{decode, decode_radix};
pub use digit::{char_for_value, value_of_char, ALPHABET};
pub use encode::{encode, encode_int, encode_radix};
pub use registry::Registry;
