//! Preservation provider trait

use std::collections::BTreeMap;

use async_trait::async_trait;

use super::entity::{ItemName, PreservationInfo};
use crate::domain::DomainError;

/// Provider response: raw item name to metadata
///
/// The response may hold zero, one or several names, including names that were
/// not in the requested batch.
pub type ProviderResponse = BTreeMap<String, PreservationInfo>;

/// External knowledge source for preservation metadata
#[async_trait]
pub trait PreservationProvider: Send + Sync + std::fmt::Debug {
    /// Look up a batch of normalized item names in a single request
    async fn lookup(&self, items: &[ItemName]) -> Result<ProviderResponse, DomainError>;

    /// Provider name, used in errors and metrics
    fn provider_name(&self) -> &'static str;
}

#[cfg(test)]
pub mod mock {
    use super::*;
    use std::sync::Mutex;
    use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
    use std::time::Duration;

    /// Scriptable provider that records every batch it receives
    #[derive(Debug)]
    pub struct MockPreservationProvider {
        responses: Mutex<BTreeMap<String, ProviderResponse>>,
        error: Mutex<Option<DomainError>>,
        delay: Option<Duration>,
        panic_next: AtomicBool,
        calls: AtomicUsize,
        batches: Mutex<Vec<Vec<String>>>,
    }

    impl Default for MockPreservationProvider {
        fn default() -> Self {
            Self::new()
        }
    }

    impl MockPreservationProvider {
        pub fn new() -> Self {
            Self {
                responses: Mutex::new(BTreeMap::new()),
                error: Mutex::new(None),
                delay: None,
                panic_next: AtomicBool::new(false),
                calls: AtomicUsize::new(0),
                batches: Mutex::new(Vec::new()),
            }
        }

        /// Answer `{name: info}` when `name` is requested
        pub fn with_item(self, name: &str, info: PreservationInfo) -> Self {
            let mut response = ProviderResponse::new();
            response.insert(name.to_string(), info);
            self.with_response(name, response)
        }

        /// Answer with an arbitrary mapping when `query` is requested
        pub fn with_response(self, query: &str, response: ProviderResponse) -> Self {
            self.responses
                .lock()
                .unwrap()
                .insert(query.to_string(), response);
            self
        }

        pub fn with_error(self, error: DomainError) -> Self {
            *self.error.lock().unwrap() = Some(error);
            self
        }

        pub fn with_delay(mut self, delay: Duration) -> Self {
            self.delay = Some(delay);
            self
        }

        /// Panic inside the next `lookup`, then behave normally
        pub fn panic_on_next_call(self) -> Self {
            self.panic_next.store(true, Ordering::SeqCst);
            self
        }

        pub fn set_error(&self, error: Option<DomainError>) {
            *self.error.lock().unwrap() = error;
        }

        pub fn call_count(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }

        pub fn batches(&self) -> Vec<Vec<String>> {
            self.batches.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl PreservationProvider for MockPreservationProvider {
        async fn lookup(&self, items: &[ItemName]) -> Result<ProviderResponse, DomainError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.batches
                .lock()
                .unwrap()
                .push(items.iter().map(|i| i.as_str().to_string()).collect());

            if self.panic_next.swap(false, Ordering::SeqCst) {
                panic!("mock provider failure");
            }

            if let Some(delay) = self.delay {
                tokio::time::sleep(delay).await;
            }

            if let Some(error) = self.error.lock().unwrap().clone() {
                return Err(error);
            }

            let responses = self.responses.lock().unwrap();
            let mut merged = ProviderResponse::new();

            for item in items {
                if let Some(response) = responses.get(item.as_str()) {
                    merged.extend(response.clone());
                }
            }

            Ok(merged)
        }

        fn provider_name(&self) -> &'static str {
            "mock"
        }
    }
}
