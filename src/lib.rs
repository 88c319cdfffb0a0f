//! Role-based access control for multi-tenant diocese and parish administration consoles.

#![deny(clippy::all, missing_docs, unused_crate_dependencies)]

pub mod auth;
pub mod config;
pub mod error;
pub mod guard;
pub mod obs;
pub mod policy;
pub mod session;

mod _prelude {
	pub use std::{
		collections::BTreeSet,
		fmt::{Debug, Display, Formatter, Result as FmtResult},
		str::FromStr,
		sync::Arc,
	};

	pub use parking_lot::RwLock;
	pub use serde::{Deserialize, Serialize};
	pub use thiserror::Error as ThisError;
	pub use time::OffsetDateTime;
	pub use url::Url;

	pub use crate::error::{Error, Result};
}

pub use policy::{can_access, can_create, can_create_named, can_publish};
pub use url;
#[cfg(test)] use tokio as _;
