use serde::Deserialize;

/// Editable fields of the search form
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchField {
    Location,
    District,
    PropertyType,
    MinPrice,
    MaxPrice,
    Bedrooms,
}

impl SearchField {
    /// Query parameter name used by the results page
    pub fn key(self) -> &'static str {
        match self {
            SearchField::Location => "location",
            SearchField::District => "district",
            SearchField::PropertyType => "propertyType",
            SearchField::MinPrice => "minPrice",
            SearchField::MaxPrice => "maxPrice",
            SearchField::Bedrooms => "bedrooms",
        }
    }
}

/// Filter values chosen by the user, later serialized into the results query string
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SearchCriteria {
    pub location: String,
    pub district: String,
    pub property_type: String,
    pub min_price: String,
    pub max_price: String,
    pub bedrooms: String,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
}

impl SearchCriteria {
    pub fn set(&mut self, field: SearchField, value: impl Into<String>) {
        let value = value.into();
        match field {
            SearchField::Location => self.location = value,
            SearchField::District => self.district = value,
            SearchField::PropertyType => self.property_type = value,
            SearchField::MinPrice => self.min_price = value,
            SearchField::MaxPrice => self.max_price = value,
            SearchField::Bedrooms => self.bedrooms = value,
        }
    }

    pub fn get(&self, field: SearchField) -> &str {
        match field {
            SearchField::Location => &self.location,
            SearchField::District => &self.district,
            SearchField::PropertyType => &self.property_type,
            SearchField::MinPrice => &self.min_price,
            SearchField::MaxPrice => &self.max_price,
            SearchField::Bedrooms => &self.bedrooms,
        }
    }

    /// Non-empty fields as query parameters, in form order.
    ///
    /// Empty strings and absent or zero coordinates are left out entirely.
    pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
        const FIELDS: [SearchField; 6] = [
            SearchField::Location,
            SearchField::District,
            SearchField::PropertyType,
            SearchField::MinPrice,
            SearchField::MaxPrice,
            SearchField::Bedrooms,
        ];

        let mut pairs: Vec<(&'static str, String)> = FIELDS
            .iter()
            .filter(|field| !self.get(**field).is_empty())
            .map(|field| (field.key(), self.get(*field).to_string()))
            .collect();

        for (key, coord) in [("latitude", self.latitude), ("longitude", self.longitude)] {
            if let Some(value) = coord.filter(|v| *v != 0.0) {
                pairs.push((key, value.to_string()));
            }
        }

        pairs
    }
}

/// A candidate location shown under the search input
#[derive(Debug, Clone, PartialEq)]
pub struct LocationSuggestion {
    pub id: String,
    pub name: String,
    pub district: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
}

/// Listing summary rendered as a card on the home page
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct FeaturedProperty {
    #[serde(rename = "_id")]
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub location: String,
    pub price: f64,
    #[serde(default)]
    pub images: Vec<String>,
}

impl FeaturedProperty {
    pub fn cover_image(&self) -> Option<&str> {
        self.images.first().map(String::as_str)
    }
}
