mod catalog_port;
mod key_value_store;

pub use catalog_port::CatalogPort;
pub use key_value_store::KeyValueStore;

#[cfg(test)]
pub mod mocks {
    pub use super::key_value_store::mock::{FailingStore, MemoryStore};
}
