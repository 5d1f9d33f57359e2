use std::fs;
use std::path::Path;

use serde::de::DeserializeOwned;

use crate::domain::model::{Book, Product, StaffRecord};
use crate::utils::error::Result;
use crate::utils::validation::validate_path;

/// Books rated strictly above `min_rating`, in their original order.
pub fn featured(books: &[Book], min_rating: f32) -> Vec<Book> {
    books
        .iter()
        .filter(|book| book.rating > min_rating)
        .cloned()
        .collect()
}

/// Concatenate any number of same-typed lists, preserving order and count.
pub fn merge<T>(lists: impl IntoIterator<Item = Vec<T>>) -> Vec<T> {
    lists.into_iter().flatten().collect()
}

/// The single highest-priced product. Ties keep the first one encountered;
/// non-finite prices are skipped; an empty catalog yields `None`.
pub fn priciest(products: &[Product]) -> Option<&Product> {
    let mut best: Option<&Product> = None;
    for product in products {
        if !product.price.is_finite() {
            continue;
        }
        match best {
            None => best = Some(product),
            Some(current) if product.price > current.price => best = Some(product),
            Some(_) => {}
        }
    }
    best
}

pub fn read_books(path: &Path) -> Result<Vec<Book>> {
    read_records(path)
}

pub fn read_products(path: &Path) -> Result<Vec<Product>> {
    read_records(path)
}

pub fn read_staff(path: &Path) -> Result<Vec<StaffRecord>> {
    read_records(path)
}

fn read_records<T: DeserializeOwned>(path: &Path) -> Result<Vec<T>> {
    validate_path("input", &path.to_string_lossy())?;

    tracing::debug!("Reading records from {}", path.display());
    let raw = fs::read_to_string(path)?;
    let records: Vec<T> = serde_json::from_str(&raw)?;

    tracing::debug!("Read {} records", records.len());
    Ok(records)
}
