//! Claims intake: the console session cookie and the claims source consulted by guards.

pub mod cookie;
pub mod source;

pub use cookie::*;
pub use source::*;
