//! Validation and normalisation of raw inputs.
//!
//! Each entity has one explicit function that turns a raw input into the
//! validated value a store accepts, or names the first rule it breaks. The
//! per-field rules are shared between creation and partial update; the only
//! difference is that a patch tolerates absent fields.
//!
//! "Today" is always a parameter so the rules stay pure.

use chrono::NaiveDate;

use crate::{
  ValidationError,
  category::{CategoryInput, NewCategory},
  medicine::{MedicineInput, MedicinePatch, MedicinePatchInput, NewMedicine},
};

pub const MAX_NAME_LEN: usize = 200;
pub const MAX_CATEGORY_LEN: usize = 100;
pub const MAX_DOSAGE_LEN: usize = 100;
pub const MAX_MANUFACTURER_LEN: usize = 200;
pub const MAX_MEDICINE_DESCRIPTION_LEN: usize = 500;
pub const MAX_CATEGORY_NAME_LEN: usize = 100;
pub const MAX_CATEGORY_DESCRIPTION_LEN: usize = 300;

type Result<T> = std::result::Result<T, ValidationError>;

// ─── Entities ────────────────────────────────────────────────────────────────

/// Validate every field of a new medicine.
pub fn medicine(input: MedicineInput, today: NaiveDate) -> Result<NewMedicine> {
  Ok(NewMedicine {
    name:           display_text("name", &input.name, MAX_NAME_LEN)?,
    category:       category_text(&input.category)?,
    dosage:         dosage_text(&input.dosage)?,
    manufacturer:   display_text(
      "manufacturer",
      &input.manufacturer,
      MAX_MANUFACTURER_LEN,
    )?,
    expiry_date:    expiry(input.expiry_date, today)?,
    stock_quantity: stock(input.stock_quantity)?,
    price:          input.price.map(price).transpose()?,
    description:    input
      .description
      .map(|d| description(d, MAX_MEDICINE_DESCRIPTION_LEN))
      .transpose()?,
  })
}

/// Validate the fields present in a partial update.
pub fn medicine_patch(
  input: MedicinePatchInput,
  today: NaiveDate,
) -> Result<MedicinePatch> {
  Ok(MedicinePatch {
    name:           input
      .name
      .map(|n| display_text("name", &n, MAX_NAME_LEN))
      .transpose()?,
    category:       input.category.map(|c| category_text(&c)).transpose()?,
    dosage:         input.dosage.map(|d| dosage_text(&d)).transpose()?,
    manufacturer:   input
      .manufacturer
      .map(|m| display_text("manufacturer", &m, MAX_MANUFACTURER_LEN))
      .transpose()?,
    expiry_date:    input.expiry_date.map(|d| expiry(d, today)).transpose()?,
    stock_quantity: input.stock_quantity.map(stock).transpose()?,
    price:          match input.price {
      Some(Some(p)) => Some(Some(price(p)?)),
      other => other,
    },
    description:    match input.description {
      Some(Some(d)) => {
        Some(Some(description(d, MAX_MEDICINE_DESCRIPTION_LEN)?))
      }
      other => other,
    },
  })
}

/// Validate a new category.
pub fn category(input: CategoryInput) -> Result<NewCategory> {
  within("name", &input.name, MAX_CATEGORY_NAME_LEN)?;
  let name = lowered(&input.name).ok_or(ValidationError::EmptyCategoryName)?;
  let description = input
    .description
    .map(|d| description(d, MAX_CATEGORY_DESCRIPTION_LEN))
    .transpose()?;
  Ok(NewCategory::new(name, description.as_deref()))
}

// ─── Field rules ─────────────────────────────────────────────────────────────

/// Name-like text: trimmed and title-cased.
fn display_text(field: &'static str, raw: &str, max: usize) -> Result<String> {
  within(field, raw, max)?;
  let trimmed = raw.trim();
  if trimmed.is_empty() {
    return Err(ValidationError::Blank { field });
  }
  Ok(title_case(trimmed))
}

fn category_text(raw: &str) -> Result<String> {
  within("category", raw, MAX_CATEGORY_LEN)?;
  lowered(raw).ok_or(ValidationError::EmptyCategory)
}

fn dosage_text(raw: &str) -> Result<String> {
  within("dosage", raw, MAX_DOSAGE_LEN)?;
  let trimmed = raw.trim();
  if trimmed.is_empty() {
    return Err(ValidationError::EmptyDosage);
  }
  Ok(trimmed.to_owned())
}

fn expiry(date: NaiveDate, today: NaiveDate) -> Result<NaiveDate> {
  if date <= today {
    return Err(ValidationError::ExpiryNotInFuture);
  }
  Ok(date)
}

fn stock(quantity: i64) -> Result<u64> {
  u64::try_from(quantity).map_err(|_| ValidationError::NegativeStock)
}

fn price(value: f64) -> Result<f64> {
  if value < 0.0 || value.is_nan() {
    return Err(ValidationError::NegativePrice);
  }
  Ok(value)
}

fn description(text: String, max: usize) -> Result<String> {
  within("description", &text, max)?;
  Ok(text)
}

/// Length bounds apply to the raw value, before trimming.
fn within(field: &'static str, raw: &str, max: usize) -> Result<()> {
  if raw.chars().count() > max {
    return Err(ValidationError::TooLong { field, max });
  }
  Ok(())
}

/// Trimmed and lower-cased, or `None` if nothing but whitespace remains.
fn lowered(raw: &str) -> Option<String> {
  let trimmed = raw.trim();
  (!trimmed.is_empty()).then(|| trimmed.to_lowercase())
}

/// Upper-case the first letter of every run of letters and lower-case the
/// rest. Any non-letter (space, digit, apostrophe, hyphen) starts a new run,
/// so `"500mg"` becomes `"500Mg"` and `"o'brien"` becomes `"O'Brien"`.
pub fn title_case(text: &str) -> String {
  let mut out = String::with_capacity(text.len());
  let mut in_word = false;
  for c in text.chars() {
    if c.is_alphabetic() {
      if in_word {
        out.extend(c.to_lowercase());
      } else {
        out.extend(c.to_uppercase());
      }
      in_word = true;
    } else {
      out.push(c);
      in_word = false;
    }
  }
  out
}
