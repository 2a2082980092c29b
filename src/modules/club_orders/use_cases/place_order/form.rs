// Turns submitted form fields into typed line-items.
//
// Catalog items use `qty_<item>`, `size_<item>`, `color_<item>`, `pay_<item>`;
// a missing, blank or zero quantity skips the item. Custom items use indexed
// fields `c_item_N`, `c_qty_N`, `c_color_N`, `c_size_N`, `c_pay_N` scanned from
// N = 0 until `c_item_N` is absent; each of them must be present.

use std::collections::HashMap;

use crate::modules::club_orders::core::catalog::Catalog;
use crate::modules::club_orders::core::order::{DEFAULT_COLOR, LineItem, Payment, Size};

pub type FormFields = HashMap<String, String>;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum FormError {
    #[error("missing form field {0}")]
    MissingField(String),

    #[error("invalid quantity {value:?} in {field}")]
    InvalidQuantity { field: String, value: String },

    #[error("unknown size {value:?} in {field}")]
    InvalidSize { field: String, value: String },

    #[error("custom item {index} has no name")]
    BlankCustomItem { index: usize },
}

pub fn parse_articles(fields: &FormFields, catalog: &Catalog) -> Result<Vec<LineItem>, FormError> {
    let mut articles = Vec::new();
    for name in catalog.names() {
        if let Some(article) = parse_catalog_article(fields, name)? {
            articles.push(article);
        }
    }
    for index in 0usize.. {
        if !fields.contains_key(&format!("c_item_{index}")) {
            break;
        }
        articles.push(parse_custom_article(fields, index)?);
    }
    Ok(articles)
}

fn parse_catalog_article(fields: &FormFields, name: &str) -> Result<Option<LineItem>, FormError> {
    let qty_field = format!("qty_{name}");
    let qty = match fields.get(&qty_field) {
        Some(raw) => parse_quantity(&qty_field, raw)?,
        None => 0,
    };
    if qty == 0 {
        return Ok(None);
    }

    let size_field = format!("size_{name}");
    let size = parse_size(&size_field, optional(fields, &size_field))?;

    Ok(Some(LineItem {
        item: name.to_string(),
        qty,
        size,
        color: color_or_default(optional(fields, &format!("color_{name}"))),
        payment: payment_or_default(optional(fields, &format!("pay_{name}"))),
        custom: false,
    }))
}

fn parse_custom_article(fields: &FormFields, index: usize) -> Result<LineItem, FormError> {
    let item = required(fields, &format!("c_item_{index}"))?.trim();
    if item.is_empty() {
        return Err(FormError::BlankCustomItem { index });
    }

    let qty_field = format!("c_qty_{index}");
    let raw_qty = required(fields, &qty_field)?;
    let qty = parse_quantity(&qty_field, raw_qty)?;
    if qty == 0 {
        return Err(FormError::InvalidQuantity {
            field: qty_field,
            value: raw_qty.to_string(),
        });
    }

    let color = required(fields, &format!("c_color_{index}"))?;
    let size_field = format!("c_size_{index}");
    let size = parse_size(&size_field, required(fields, &size_field)?)?;
    let payment = required(fields, &format!("c_pay_{index}"))?;

    Ok(LineItem {
        item: item.to_string(),
        qty,
        size,
        color: color_or_default(color),
        payment: payment_or_default(payment),
        custom: true,
    })
}

fn optional<'a>(fields: &'a FormFields, field: &str) -> &'a str {
    fields.get(field).map(String::as_str).unwrap_or("")
}

fn required<'a>(fields: &'a FormFields, field: &str) -> Result<&'a str, FormError> {
    fields
        .get(field)
        .map(String::as_str)
        .ok_or_else(|| FormError::MissingField(field.to_string()))
}

/// Blank counts as zero.
fn parse_quantity(field: &str, raw: &str) -> Result<u32, FormError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Ok(0);
    }
    trimmed.parse().map_err(|_| FormError::InvalidQuantity {
        field: field.to_string(),
        value: raw.to_string(),
    })
}

fn parse_size(field: &str, raw: &str) -> Result<Size, FormError> {
    Size::parse(raw).ok_or_else(|| FormError::InvalidSize {
        field: field.to_string(),
        value: raw.to_string(),
    })
}

fn color_or_default(raw: &str) -> String {
    let color = raw.trim();
    if color.is_empty() {
        DEFAULT_COLOR.to_string()
    } else {
        color.to_string()
    }
}

fn payment_or_default(raw: &str) -> Payment {
    let raw = raw.trim();
    if raw.is_empty() {
        Payment::default()
    } else {
        Payment::parse(raw)
    }
}
