use crate::api::ListingsApi;
use crate::catalog;
use crate::models::FeaturedProperty;
use crate::navigation::{district_path, property_path, results_path, Navigator};
use std::sync::Arc;
use tracing::{error, info};

/// Fields of the compact search widget in the hero section
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HomeField {
    District,
    PropertyType,
    Category,
    MinPrice,
    MaxPrice,
    Bedrooms,
}

impl HomeField {
    pub const ALL: [HomeField; 6] = [
        HomeField::District,
        HomeField::PropertyType,
        HomeField::Category,
        HomeField::MinPrice,
        HomeField::MaxPrice,
        HomeField::Bedrooms,
    ];

    pub fn key(self) -> &'static str {
        match self {
            HomeField::District => "district",
            HomeField::PropertyType => "propertyType",
            HomeField::Category => "category",
            HomeField::MinPrice => "minPrice",
            HomeField::MaxPrice => "maxPrice",
            HomeField::Bedrooms => "bedrooms",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct HomeSearch {
    pub district: String,
    pub property_type: String,
    pub category: String,
    pub min_price: String,
    pub max_price: String,
    pub bedrooms: String,
}

impl HomeSearch {
    fn slot(&mut self, field: HomeField) -> &mut String {
        match field {
            HomeField::District => &mut self.district,
            HomeField::PropertyType => &mut self.property_type,
            HomeField::Category => &mut self.category,
            HomeField::MinPrice => &mut self.min_price,
            HomeField::MaxPrice => &mut self.max_price,
            HomeField::Bedrooms => &mut self.bedrooms,
        }
    }

    fn value(&self, field: HomeField) -> &str {
        match field {
            HomeField::District => &self.district,
            HomeField::PropertyType => &self.property_type,
            HomeField::Category => &self.category,
            HomeField::MinPrice => &self.min_price,
            HomeField::MaxPrice => &self.max_price,
            HomeField::Bedrooms => &self.bedrooms,
        }
    }
}

/// Landing page: featured listings plus the hero search widget
pub struct HomePage {
    api: Arc<dyn ListingsApi>,
    featured: Vec<FeaturedProperty>,
    loading: bool,
    search: HomeSearch,
}

impl HomePage {
    pub fn new(api: Arc<dyn ListingsApi>) -> Self {
        Self {
            api,
            featured: Vec::new(),
            loading: true,
            search: HomeSearch::default(),
        }
    }

    /// One-shot fetch; failure is logged and leaves the grid empty
    pub async fn load_featured(&mut self) {
        match self.api.featured_properties().await {
            Ok(properties) => {
                info!("Loaded {} featured properties", properties.len());
                self.featured = properties;
            }
            Err(e) => error!("Error fetching featured properties: {}", e),
        }
        self.loading = false;
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn featured(&self) -> &[FeaturedProperty] {
        &self.featured
    }

    pub fn search(&self) -> &HomeSearch {
        &self.search
    }

    pub fn set_field(&mut self, field: HomeField, value: &str) {
        *self.search.slot(field) = value.to_string();
    }

    /// Every widget field goes into the query string, empty ones included
    pub fn submit(&self, navigator: &dyn Navigator) -> String {
        let path = results_path(HomeField::ALL.iter().map(|f| (f.key(), self.search.value(*f))));
        navigator.navigate(&path);
        path
    }

    pub fn district_links(&self) -> Vec<(&'static str, String)> {
        catalog::featured_districts()
            .iter()
            .map(|d| (*d, district_path(d)))
            .collect()
    }
}

/// Text card for one featured listing
pub fn render_card(property: &FeaturedProperty) -> String {
    let mut lines = vec![
        property.title.clone(),
        format!("   {}", property.location),
        format!("   {}", format_price(property.price)),
    ];
    if let Some(image) = property.cover_image() {
        lines.push(format!("   Image: {}", image));
    }
    lines.push(format!("   View Details: {}", property_path(&property.id)));
    lines.join("\n")
}

/// Rupee amount with comma thousands separators and up to three decimals
pub fn format_price(price: f64) -> String {
    let fixed = format!("{:.3}", price.abs());
    let (whole, fraction) = fixed.split_once('.').unwrap_or((fixed.as_str(), ""));
    let fraction = fraction.trim_end_matches('0');

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, c) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    if !fraction.is_empty() {
        grouped.push('.');
        grouped.push_str(fraction);
    }

    let sign = if price < 0.0 { "-" } else { "" };
    format!("₹{}{}", sign, grouped)
}
