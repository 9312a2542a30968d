use async_trait::async_trait;
use fleet_dashboard::prelude::*;
use fleet_dashboard::shared::error::FleetError;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

/// Mock AuthGateway accepting exactly one name/password pair
#[derive(Clone)]
pub struct MockAuthGateway {
    name: String,
    password: String,
    calls: Arc<AtomicUsize>,
}

impl MockAuthGateway {
    pub fn accepting(name: &str, password: &str) -> Self {
        Self {
            name: name.to_string(),
            password: password.to_string(),
            calls: Arc::new(AtomicUsize::new(0)),
        }
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl AuthGateway for MockAuthGateway {
    async fn login(&self, credentials: &Credentials) -> Result<User> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let wire = serde_json::to_value(credentials)?;
        if wire["nome"] == self.name.as_str() && wire["senha"] == self.password.as_str() {
            let mut user = User::new(&self.name);
            user.attributes.insert("id".to_string(), serde_json::json!(1));
            user.attributes
                .insert("senha".to_string(), serde_json::json!(self.password));
            Ok(user)
        } else {
            Err(FleetError::HttpStatus {
                endpoint: "/login".to_string(),
                status: 401,
            }
            .into())
        }
    }
}
