//! Release group registry.
//!
//! Maps the tag a release group leaves in its filenames to a canonical name
//! and the spellings each subtitle provider knows it by. Filenames whose tag
//! is not registered get a synthesized group (see [`ReleaseGroup::synthesized`]).

mod builtin;
mod registry;
mod types;

pub use registry::{RegistryError, ReleaseGroupRegistry};
pub use types::{ReleaseGroup, SearchableAliases};
