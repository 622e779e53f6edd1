//! Turns raw CSV row maps into validated [`Product`] records.
//!
//! Column names are matched case-sensitively as they appear in the published
//! sheet: `id, name, Category, description, price, Discount, sizes,
//! imageUrls`.

use std::collections::HashMap;

use chrono::Utc;
use uuid::Uuid;

use super::{
    Product, SizeOption, DEFAULT_CATEGORY, DEFAULT_DESCRIPTION, DEFAULT_SIZE,
    DEFAULT_SIZE_QUANTITY, FALLBACK_IMAGE_URLS,
};

/// Normalize one row map into a `Product`.
///
/// Returns `None` when the `name` field is missing or empty after trimming;
/// such rows are dropped from the catalog.
pub fn normalize_row(row: &HashMap<String, String>) -> Option<Product> {
    let name = row.get("name").map(|v| v.trim()).unwrap_or_default();
    if name.is_empty() {
        return None;
    }

    let price = clean_money(row.get("price").map(String::as_str).unwrap_or_default());
    let discount = match row.get("Discount") {
        Some(raw) => {
            let cleaned = clean_money(raw);
            if cleaned.is_empty() {
                "0".to_string()
            } else {
                cleaned
            }
        }
        None => "0".to_string(),
    };

    let final_price = compute_final_price(&price, &discount);

    Some(Product {
        id: row
            .get("id")
            .map(|v| v.trim())
            .filter(|v| !v.is_empty())
            .map(str::to_string)
            .unwrap_or_else(generate_id),
        name: name.to_string(),
        category: non_empty_or(row.get("Category"), DEFAULT_CATEGORY),
        description: non_empty_or(row.get("description"), DEFAULT_DESCRIPTION),
        price,
        discount,
        final_price,
        sizes: parse_sizes(row.get("sizes")),
        image_urls: parse_image_urls(row.get("imageUrls")),
    })
}

/// Normalize all rows, keeping source order and dropping rejected ones.
pub fn normalize_rows(rows: &[HashMap<String, String>]) -> Vec<Product> {
    rows.iter().filter_map(normalize_row).collect()
}

/// Strip a leading "$" and surrounding whitespace from a money field.
fn clean_money(raw: &str) -> String {
    raw.trim().trim_start_matches('$').trim().to_string()
}

/// `price - discount` when both parse, `price` alone when only it parses,
/// `None` when the price is not numeric.
fn compute_final_price(price: &str, discount: &str) -> Option<f64> {
    let price = price.parse::<f64>().ok()?;
    match discount.parse::<f64>() {
        Ok(discount) => Some(price - discount),
        Err(_) => Some(price),
    }
}

fn non_empty_or(value: Option<&String>, default: &str) -> String {
    value
        .map(|v| v.trim())
        .filter(|v| !v.is_empty())
        .map(str::to_string)
        .unwrap_or_else(|| default.to_string())
}

/// Split the `sizes` column on commas into size entries with the fixed
/// default quantity. A missing column, or one with no usable token, yields a
/// single "One Size" entry so every product stays orderable.
fn parse_sizes(raw: Option<&String>) -> Vec<SizeOption> {
    let sizes: Vec<SizeOption> = raw
        .map(String::as_str)
        .unwrap_or_default()
        .split(',')
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .map(|token| SizeOption::new(token, DEFAULT_SIZE_QUANTITY))
        .collect();

    if sizes.is_empty() {
        vec![SizeOption::new(DEFAULT_SIZE, DEFAULT_SIZE_QUANTITY)]
    } else {
        sizes
    }
}

fn parse_image_urls(raw: Option<&String>) -> Vec<String> {
    match raw.map(|v| v.trim()).filter(|v| !v.is_empty()) {
        Some(url) => vec![url.to_string()],
        None => FALLBACK_IMAGE_URLS.iter().map(|u| u.to_string()).collect(),
    }
}

/// Best-effort unique id for rows without an `id` column: epoch millis plus a
/// short random suffix.
fn generate_id() -> String {
    let suffix = Uuid::new_v4().simple().to_string();
    format!("{}-{}", Utc::now().timestamp_millis(), &suffix[..8])
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn rejects_rows_without_name() {
        assert!(normalize_row(&row(&[("price", "10")])).is_none());
        assert!(normalize_row(&row(&[("name", "  ")])).is_none());
    }

    #[test]
    fn applies_defaults_for_missing_fields() {
        let p = normalize_row(&row(&[("name", "Cap")])).unwrap();
        assert_eq!(p.category, DEFAULT_CATEGORY);
        assert_eq!(p.description, DEFAULT_DESCRIPTION);
        assert_eq!(p.discount, "0");
        assert_eq!(p.sizes, vec![SizeOption::new(DEFAULT_SIZE, 10)]);
        assert_eq!(p.image_urls.len(), FALLBACK_IMAGE_URLS.len());
        assert!(!p.id.is_empty());
    }

    #[test]
    fn computes_final_price_from_price_and_discount() {
        let p = normalize_row(&row(&[("name", "Cap"), ("price", "12"), ("Discount", "4")]))
            .unwrap();
        assert_eq!(p.final_price, Some(8.0));
    }

    #[test]
    fn empty_discount_defaults_to_zero() {
        let p = normalize_row(&row(&[("name", "Cap"), ("price", "12"), ("Discount", "")]))
            .unwrap();
        assert_eq!(p.discount, "0");
        assert_eq!(p.final_price, Some(12.0));
    }

    #[test]
    fn non_numeric_discount_falls_back_to_price() {
        let p = normalize_row(&row(&[("name", "Cap"), ("price", "12"), ("Discount", "n/a")]))
            .unwrap();
        assert_eq!(p.final_price, Some(12.0));
    }

    #[test]
    fn non_numeric_price_yields_no_final_price() {
        let p = normalize_row(&row(&[("name", "Cap"), ("price", "abc")])).unwrap();
        assert_eq!(p.final_price, None);
    }

    #[test]
    fn strips_dollar_sign_and_whitespace() {
        let p = normalize_row(&row(&[("name", "Cap"), ("price", " $ 19.99 "), ("Discount", "$5")]))
            .unwrap();
        assert_eq!(p.price, "19.99");
        assert_eq!(p.discount, "5");
        assert!((p.final_price.unwrap() - 14.99).abs() < 1e-9);
    }

    #[test]
    fn splits_sizes_on_commas() {
        let p = normalize_row(&row(&[("name", "Cap"), ("sizes", "S, M ,L,,")])).unwrap();
        let sizes: Vec<&str> = p.sizes.iter().map(|s| s.size.as_str()).collect();
        assert_eq!(sizes, vec!["S", "M", "L"]);
        assert!(p.sizes.iter().all(|s| s.quantity == DEFAULT_SIZE_QUANTITY));
    }

    #[test]
    fn blank_sizes_column_falls_back_to_one_size() {
        let p = normalize_row(&row(&[("name", "Cap"), ("sizes", " , ")])).unwrap();
        assert_eq!(p.sizes, vec![SizeOption::new(DEFAULT_SIZE, 10)]);
    }

    #[test]
    fn single_image_url_is_kept() {
        let p = normalize_row(&row(&[("name", "Cap"), ("imageUrls", "https://x/y.png")]))
            .unwrap();
        assert_eq!(p.image_urls, vec!["https://x/y.png"]);
    }

    #[test]
    fn keeps_explicit_id() {
        let p = normalize_row(&row(&[("name", "Cap"), ("id", "sku-1")])).unwrap();
        assert_eq!(p.id, "sku-1");
    }

    #[test]
    fn normalize_rows_keeps_source_order() {
        let rows = vec![
            row(&[("name", "A")]),
            row(&[("name", "")]),
            row(&[("name", "B")]),
        ];
        let products = normalize_rows(&rows);
        let names: Vec<&str> = products.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["A", "B"]);
    }
}
