//! In-memory visa product catalog.

use super::error::{CatalogError, CatalogResult};
use super::seed::SEED_PRODUCTS;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use tokio::sync::RwLock;
use tracing::{debug, info};

pub const DEFAULT_PAGE: u32 = 1;
pub const DEFAULT_LIMIT: u32 = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EntryType {
    Single,
    Multiple,
}

impl fmt::Display for EntryType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EntryType::Single => write!(f, "Single"),
            EntryType::Multiple => write!(f, "Multiple"),
        }
    }
}

impl FromStr for EntryType {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "single" => Ok(EntryType::Single),
            "multiple" => Ok(EntryType::Multiple),
            _ => Err(CatalogError::Invalid(format!(
                "numberOfEntries must be one of: Single, Multiple (got {s})"
            ))),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VisaProduct {
    pub id: String,
    pub country: String,
    pub visa_type: String,
    pub price: f64,
    /// Days.
    pub length_of_stay: u32,
    pub number_of_entries: EntryType,
    pub filing_fee: f64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewVisaProduct {
    pub country: String,
    pub visa_type: String,
    pub price: f64,
    pub length_of_stay: u32,
    pub number_of_entries: EntryType,
    pub filing_fee: f64,
}

/// Partial update; absent fields keep their current value.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct VisaProductUpdate {
    pub country: Option<String>,
    pub visa_type: Option<String>,
    pub price: Option<f64>,
    pub length_of_stay: Option<u32>,
    pub number_of_entries: Option<EntryType>,
    pub filing_fee: Option<f64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProductQuery {
    pub page: Option<u32>,
    pub limit: Option<u32>,
    pub country: Option<String>,
    pub visa_type: Option<String>,
    pub min_price: Option<f64>,
    pub max_price: Option<f64>,
    pub number_of_entries: Option<EntryType>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    pub data: Vec<T>,
    pub total: usize,
    pub page: u32,
    pub limit: u32,
    pub total_pages: usize,
}

fn require_text(field: &str, value: &str) -> CatalogResult<()> {
    if value.trim().is_empty() {
        return Err(CatalogError::Invalid(format!("{field} should not be empty")));
    }
    Ok(())
}

fn require_min(field: &str, value: f64, min: f64) -> CatalogResult<()> {
    if !value.is_finite() || value < min {
        return Err(CatalogError::Invalid(format!(
            "{field} must not be less than {min}"
        )));
    }
    Ok(())
}

impl NewVisaProduct {
    pub fn validate(&self) -> CatalogResult<()> {
        require_text("country", &self.country)?;
        require_text("visaType", &self.visa_type)?;
        require_min("price", self.price, 0.0)?;
        require_min("lengthOfStay", f64::from(self.length_of_stay), 1.0)?;
        require_min("filingFee", self.filing_fee, 0.0)
    }
}

impl VisaProductUpdate {
    pub fn validate(&self) -> CatalogResult<()> {
        if let Some(country) = &self.country {
            require_text("country", country)?;
        }
        if let Some(visa_type) = &self.visa_type {
            require_text("visaType", visa_type)?;
        }
        if let Some(price) = self.price {
            require_min("price", price, 0.0)?;
        }
        if let Some(days) = self.length_of_stay {
            require_min("lengthOfStay", f64::from(days), 1.0)?;
        }
        if let Some(fee) = self.filing_fee {
            require_min("filingFee", fee, 0.0)?;
        }
        Ok(())
    }
}

impl ProductQuery {
    pub fn validate(&self) -> CatalogResult<()> {
        if self.page == Some(0) {
            return Err(CatalogError::Invalid("page must not be less than 1".to_string()));
        }
        if self.limit == Some(0) {
            return Err(CatalogError::Invalid("limit must not be less than 1".to_string()));
        }
        if let Some(min) = self.min_price {
            require_min("minPrice", min, 0.0)?;
        }
        if let Some(max) = self.max_price {
            require_min("maxPrice", max, 0.0)?;
        }
        Ok(())
    }

    fn matches(&self, product: &VisaProduct) -> bool {
        let contains = |haystack: &str, needle: &Option<String>| {
            needle
                .as_ref()
                .is_none_or(|n| haystack.to_lowercase().contains(&n.to_lowercase()))
        };

        contains(&product.country, &self.country)
            && contains(&product.visa_type, &self.visa_type)
            && self.min_price.is_none_or(|min| product.price >= min)
            && self.max_price.is_none_or(|max| product.price <= max)
            && self
                .number_of_entries
                .is_none_or(|entries| product.number_of_entries == entries)
    }
}

struct CatalogState {
    products: Vec<VisaProduct>,
    next_id: u64,
}

impl CatalogState {
    fn insert(&mut self, new: NewVisaProduct) -> VisaProduct {
        let now = Utc::now();
        let product = VisaProduct {
            id: self.next_id.to_string(),
            country: new.country,
            visa_type: new.visa_type,
            price: new.price,
            length_of_stay: new.length_of_stay,
            number_of_entries: new.number_of_entries,
            filing_fee: new.filing_fee,
            created_at: now,
            updated_at: now,
        };
        self.next_id += 1;
        self.products.push(product.clone());
        product
    }

    fn position(&self, id: &str) -> CatalogResult<usize> {
        self.products
            .iter()
            .position(|p| p.id == id)
            .ok_or_else(|| CatalogError::NotFound(id.to_string()))
    }
}

/// Thread-safe product list with sequential string ids.
pub struct VisaCatalog {
    state: RwLock<CatalogState>,
}

impl VisaCatalog {
    pub fn new() -> Self {
        Self {
            state: RwLock::new(CatalogState {
                products: Vec::new(),
                next_id: 1,
            }),
        }
    }

    /// Creates a catalog pre-populated with the standard product list.
    pub fn seeded() -> Self {
        let mut state = CatalogState {
            products: Vec::with_capacity(SEED_PRODUCTS.len()),
            next_id: 1,
        };
        for (country, visa_type, price, length_of_stay, number_of_entries, filing_fee) in
            SEED_PRODUCTS.iter().copied()
        {
            state.insert(NewVisaProduct {
                country: country.to_string(),
                visa_type: visa_type.to_string(),
                price,
                length_of_stay,
                number_of_entries,
                filing_fee,
            });
        }
        info!(count = state.products.len(), "Seeded visa product catalog");
        Self {
            state: RwLock::new(state),
        }
    }

    pub async fn find_all(&self, query: &ProductQuery) -> CatalogResult<Page<VisaProduct>> {
        query.validate()?;
        let page = query.page.unwrap_or(DEFAULT_PAGE);
        let limit = query.limit.unwrap_or(DEFAULT_LIMIT);

        let state = self.state.read().await;
        let filtered: Vec<&VisaProduct> =
            state.products.iter().filter(|p| query.matches(p)).collect();
        let total = filtered.len();
        let start = (page as usize - 1).saturating_mul(limit as usize);
        let data = filtered
            .into_iter()
            .skip(start)
            .take(limit as usize)
            .cloned()
            .collect();
        debug!(total, page, limit, "Filtered visa products");

        Ok(Page {
            data,
            total,
            page,
            limit,
            total_pages: total.div_ceil(limit as usize),
        })
    }

    pub async fn find_one(&self, id: &str) -> CatalogResult<VisaProduct> {
        let state = self.state.read().await;
        let index = state.position(id)?;
        Ok(state.products[index].clone())
    }

    pub async fn create(&self, new: NewVisaProduct) -> CatalogResult<VisaProduct> {
        new.validate()?;
        let mut state = self.state.write().await;
        let product = state.insert(new);
        info!(id = %product.id, "Created visa product");
        Ok(product)
    }

    pub async fn update(&self, id: &str, update: VisaProductUpdate) -> CatalogResult<VisaProduct> {
        update.validate()?;
        let mut state = self.state.write().await;
        let index = state.position(id)?;
        let product = &mut state.products[index];

        if let Some(country) = update.country {
            product.country = country;
        }
        if let Some(visa_type) = update.visa_type {
            product.visa_type = visa_type;
        }
        if let Some(price) = update.price {
            product.price = price;
        }
        if let Some(days) = update.length_of_stay {
            product.length_of_stay = days;
        }
        if let Some(entries) = update.number_of_entries {
            product.number_of_entries = entries;
        }
        if let Some(fee) = update.filing_fee {
            product.filing_fee = fee;
        }
        product.updated_at = Utc::now();
        info!(id, "Updated visa product");
        Ok(product.clone())
    }

    pub async fn remove(&self, id: &str) -> CatalogResult<VisaProduct> {
        let mut state = self.state.write().await;
        let index = state.position(id)?;
        info!(id, "Removed visa product");
        Ok(state.products.remove(index))
    }
}

impl Default for VisaCatalog {
    fn default() -> Self {
        Self::new()
    }
}
