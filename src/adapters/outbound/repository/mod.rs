/// Project resolver adapters: local license index, remote registry and the
/// per-run cache that fronts either of them
mod caching_resolver;
mod http_registry;
mod index_document;
mod local_index;

pub use caching_resolver::CachingProjectResolver;
pub use http_registry::HttpRegistryResolver;
pub use index_document::IndexDocument;
pub use local_index::{LocalIndexResolver, DEFAULT_INDEX_DIRECTORY};
