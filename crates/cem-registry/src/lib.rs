//! Registry + Watcher (§4.I): loads custom-element manifests from the
//! workspace and from additional npm/jsr/URL packages into a single
//! `tagName -> ElementInfo` index, kept fresh by a debounced file
//! watcher.

pub mod discovery;
pub mod error;
pub mod index;
pub mod package_spec;
pub mod registry;
pub mod remote;
pub mod types;
pub mod watcher;

pub use error::RegistryError;
pub use package_spec::PackageSpec;
pub use registry::{Registry, RegistryConfig};
pub use remote::{HttpRemoteFetcher, RemoteFetcher};
pub use types::{ElementInfo, Source};
pub use watcher::{watch, Watcher};
