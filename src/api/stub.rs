use crate::api::traits::ListingsApi;
use crate::api::types::{Address, LocationRecord};
use crate::error::ApiError;
use crate::models::FeaturedProperty;
use async_trait::async_trait;
use reqwest::StatusCode;
use std::collections::HashMap;
use std::sync::Mutex;
use std::time::Duration;

/// Scripted backend: records every call and answers from canned data
#[derive(Default)]
pub struct ListingsApiStub {
    pub location_calls: Mutex<Vec<String>>,
    pub featured_calls: Mutex<usize>,
    pub locations: Mutex<HashMap<String, Vec<LocationRecord>>>,
    pub delays: Mutex<HashMap<String, Duration>>,
    pub fail_locations: Mutex<bool>,
    pub featured: Mutex<Option<Vec<FeaturedProperty>>>,
}

impl ListingsApiStub {
    pub fn with_locations(query: &str, records: Vec<LocationRecord>) -> Self {
        let stub = Self::default();
        stub.locations.lock().unwrap().insert(query.to_string(), records);
        stub
    }

    pub fn add_locations(&self, query: &str, records: Vec<LocationRecord>) {
        self.locations.lock().unwrap().insert(query.to_string(), records);
    }

    pub fn delay(&self, query: &str, delay: Duration) {
        self.delays.lock().unwrap().insert(query.to_string(), delay);
    }

    pub fn calls(&self) -> Vec<String> {
        self.location_calls.lock().unwrap().clone()
    }
}

pub fn record(id: &str, name: &str, city: Option<&str>, district: Option<&str>) -> LocationRecord {
    LocationRecord {
        id: Some(id.to_string()),
        name: name.to_string(),
        address: Address {
            city: city.map(str::to_string),
            district: district.map(str::to_string),
        },
        latitude: None,
        longitude: None,
    }
}

#[async_trait]
impl ListingsApi for ListingsApiStub {
    async fn search_locations(&self, city: &str) -> Result<Vec<LocationRecord>, ApiError> {
        self.location_calls.lock().unwrap().push(city.to_string());

        let delay = self.delays.lock().unwrap().get(city).copied();
        if let Some(delay) = delay {
            tokio::time::sleep(delay).await;
        }

        if *self.fail_locations.lock().unwrap() {
            return Err(ApiError::Status(StatusCode::INTERNAL_SERVER_ERROR));
        }

        Ok(self.locations.lock().unwrap().get(city).cloned().unwrap_or_default())
    }

    async fn featured_properties(&self) -> Result<Vec<FeaturedProperty>, ApiError> {
        *self.featured_calls.lock().unwrap() += 1;

        self.featured
            .lock()
            .unwrap()
            .clone()
            .ok_or(ApiError::Status(StatusCode::BAD_GATEWAY))
    }
}
