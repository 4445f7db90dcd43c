pub mod decoded;
pub mod entry;

pub use decoded::*;
pub use entry::*;
