//! Principal-side domain: scope identifiers, the role hierarchy, and claims records.

pub mod claims;
pub mod id;
pub mod role;

pub use claims::*;
pub use id::*;
pub use role::*;
