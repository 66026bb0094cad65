//! Provider catalog for notification channel integrations
//!
//! This crate holds the static metadata and the pure selection logic behind
//! the provider picker:
//! - An exhaustive [`Channel`] enum with a fixed display order
//! - A per-channel [`Catalog`] of providers, narrowed (never widened) by search
//! - Case-insensitive substring filtering over display names
//! - Channel-specific priority ordering
//! - Logo asset path resolution keyed by provider id and color scheme
//!
//! # Example
//!
//! ```rust
//! use provider_catalog::{builtin_catalog, Channel};
//!
//! let catalog = builtin_catalog();
//! let refined = catalog.refine("mail");
//!
//! // Only channels with matches keep entries; order follows the channel sort.
//! assert!(!refined.providers(Channel::Email).is_empty());
//! assert!(refined.providers(Channel::Sms).is_empty());
//! ```

mod assets;
mod builtin;
mod channel;
mod provider;
mod search;
mod sort;

pub use assets::{logo_path, ColorScheme};
pub use builtin::builtin_catalog;
pub use channel::{Channel, ParseChannelError};
pub use provider::{Catalog, Provider};
pub use search::filter_providers;
pub use sort::{priority_providers, sort_providers};
