use crate::shared::Result;

/// KeyValueStorage port for small persistent string values
///
/// Mirrors the browser's local storage: string keys, string values, and
/// removal of a missing key is not an error.
pub trait KeyValueStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>>;

    fn set_item(&self, key: &str, value: &str) -> Result<()>;

    fn remove_item(&self, key: &str) -> Result<()>;
}
