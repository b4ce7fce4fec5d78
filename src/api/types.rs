use crate::models::LocationSuggestion;
use serde::{Deserialize, Deserializer};

/// Location record as returned by `GET /api/locations/search`
#[derive(Debug, Clone, Deserialize)]
pub struct LocationRecord {
    #[serde(default, deserialize_with = "string_or_number")]
    pub id: Option<String>,
    pub name: String,
    #[serde(default)]
    pub address: Address,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
}

/// Address sub-record; the backend fills either `city` or `district`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Address {
    pub city: Option<String>,
    pub district: Option<String>,
}

impl Address {
    /// City when present and non-empty, otherwise district
    pub fn district_name(&self) -> Option<&str> {
        [self.city.as_deref(), self.district.as_deref()]
            .into_iter()
            .flatten()
            .find(|s| !s.is_empty())
    }
}

impl From<LocationRecord> for LocationSuggestion {
    fn from(record: LocationRecord) -> Self {
        let district = record.address.district_name().map(str::to_string);
        Self {
            id: record.id.unwrap_or_default(),
            name: record.name,
            district,
            latitude: record.latitude,
            longitude: record.longitude,
        }
    }
}

fn string_or_number<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Id {
        Text(String),
        Number(serde_json::Number),
    }

    Ok(Option::<Id>::deserialize(deserializer)?.map(|id| match id {
        Id::Text(s) => s,
        Id::Number(n) => n.to_string(),
    }))
}
