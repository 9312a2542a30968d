/// Storage adapters backing the session store
mod in_memory_storage;
mod json_file_storage;

pub use in_memory_storage::InMemoryStorage;
pub use json_file_storage::JsonFileStorage;
