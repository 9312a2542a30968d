use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Attribute the backend may echo back in the user record; never persisted
const PASSWORD_ATTRIBUTE: &str = "senha";

/// Login credentials, serialized in the backend's wire shape
#[derive(Clone, Serialize)]
pub struct Credentials {
    #[serde(rename = "nome")]
    name: String,
    #[serde(rename = "senha")]
    password: String,
}

impl Credentials {
    pub fn new(name: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            password: password.into(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Both fields must be non-empty before a login request is sent
    pub fn is_complete(&self) -> bool {
        !self.name.is_empty() && !self.password.is_empty()
    }
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("name", &self.name)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// User record returned by a successful login
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    #[serde(rename = "nome")]
    pub name: String,
    /// Any further attributes the backend returned (id, e-mail, ...)
    #[serde(flatten)]
    pub attributes: Map<String, Value>,
}

impl User {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            attributes: Map::new(),
        }
    }

    /// Returns a copy safe to persist: the password attribute is removed
    pub fn without_secrets(&self) -> Self {
        let mut user = self.clone();
        user.attributes.remove(PASSWORD_ATTRIBUTE);
        user
    }
}
