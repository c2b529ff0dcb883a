mod store;

pub use store::{CacheStore, TranslationCache, cache_key, fingerprint};
