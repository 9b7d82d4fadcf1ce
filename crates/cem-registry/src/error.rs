//! Registry-specific error taxonomy (§7): `RemoteFetchError` and
//! `IOError` are fatal to the one package/path they concern, never to
//! the registry as a whole.

#[derive(Debug, thiserror::Error)]
pub enum RegistryError {
    #[error("io error reading {path}: {source}")]
    Io { path: String, #[source] source: std::io::Error },
    #[error("malformed manifest json in {path}: {source}")]
    Json { path: String, #[source] source: serde_json::Error },
    #[error("remote fetch of {url} failed after {attempts} attempts: {message}")]
    RemoteFetch { url: String, attempts: u32, message: String },
    #[error("unrecognized package specifier: {0}")]
    InvalidPackageSpec(String),
}
