// ============================================================================
// VALIDACIÓN - Esquemas de los formularios antes de llegar a la red
// ============================================================================

use chrono::{Datelike, Utc};
use lazy_static::lazy_static;
use regex::Regex;
use url::Url;

use super::darkweb::{DarkWebSearch, KeywordSearch};
use super::email::EmailAnalysis;
use super::government::{CourtSearch, VehicleSearch};
use super::image::ImageSearch;
use super::news::{NewsAnalysis, NewsEntity, NewsMonitorOptions};
use super::social::SocialMediaSearch;
use crate::error::ValidationError;

lazy_static! {
    static ref EMAIL_RE: Regex =
        Regex::new(r"^[A-Za-z0-9._%+-]+@[A-Za-z0-9-]+(\.[A-Za-z0-9-]+)*\.[A-Za-z]{2,}$")
            .expect("email regex");
    static ref PHONE_RE: Regex = Regex::new(r"^\+?[1-9]\d{1,14}$").expect("phone regex");
    static ref VEHICLE_RE: Regex =
        Regex::new(r"^[A-Z]{2}[0-9]{1,2}[A-Z]{1,2}[0-9]{4}$").expect("vehicle regex");
}

pub const MIN_NEWS_CONTENT: usize = 10;
pub const MIN_COURT_NAME: usize = 2;
pub const MIN_COURT_YEAR: i32 = 1950;

/// Request que se puede comprobar en cliente
pub trait Validate {
    fn validate(&self) -> Result<(), ValidationError>;
}

pub fn validate_email(field: &str, value: &str) -> Result<(), ValidationError> {
    if EMAIL_RE.is_match(value) {
        Ok(())
    } else {
        Err(ValidationError::new(field, "Invalid email format"))
    }
}

pub fn validate_phone(field: &str, value: &str) -> Result<(), ValidationError> {
    if PHONE_RE.is_match(value) {
        Ok(())
    } else {
        Err(ValidationError::new(field, "Invalid phone number"))
    }
}

/// Solo URLs absolutas http(s)
pub fn validate_url(field: &str, value: &str) -> Result<(), ValidationError> {
    match Url::parse(value) {
        Ok(url) if matches!(url.scheme(), "http" | "https") && url.has_host() => Ok(()),
        _ => Err(ValidationError::new(field, "Invalid URL format")),
    }
}

pub fn validate_domain(field: &str, value: &str) -> Result<(), ValidationError> {
    let trimmed = value.trim();
    if trimmed.is_empty() || trimmed.contains(char::is_whitespace) || !trimmed.contains('.') {
        return Err(ValidationError::new(field, "Invalid domain"));
    }
    url::Host::parse(trimmed)
        .map(|_| ())
        .map_err(|_| ValidationError::new(field, "Invalid domain"))
}

/// Al menos una keyword y ninguna vacía
pub fn validate_keywords(field: &str, keywords: &[String]) -> Result<(), ValidationError> {
    if keywords.is_empty() {
        return Err(ValidationError::new(field, "At least one keyword is required"));
    }
    if keywords.iter().any(|k| k.trim().is_empty()) {
        return Err(ValidationError::new(field, "Keywords cannot be empty"));
    }
    Ok(())
}

impl Validate for NewsAnalysis {
    fn validate(&self) -> Result<(), ValidationError> {
        if let Some(url) = &self.url {
            validate_url("url", url)?;
        }
        if self.content.chars().count() < MIN_NEWS_CONTENT {
            return Err(ValidationError::new(
                "content",
                format!("Content must be at least {} characters", MIN_NEWS_CONTENT),
            ));
        }
        Ok(())
    }
}

impl Validate for NewsEntity {
    fn validate(&self) -> Result<(), ValidationError> {
        if self.value.is_empty() {
            return Err(ValidationError::new("value", "Value is required"));
        }
        if !(0.0..=1.0).contains(&self.confidence) {
            return Err(ValidationError::new("confidence", "Confidence must be between 0 and 1"));
        }
        Ok(())
    }
}

impl Validate for NewsMonitorOptions {
    fn validate(&self) -> Result<(), ValidationError> {
        if self.interval == 0 {
            return Err(ValidationError::new("interval", "Interval must be at least 1 minute"));
        }
        if self.keywords.iter().any(|k| k.trim().is_empty()) {
            return Err(ValidationError::new("keywords", "Keywords cannot be empty"));
        }
        Ok(())
    }
}

impl Validate for ImageSearch {
    fn validate(&self) -> Result<(), ValidationError> {
        match (&self.image_url, &self.image_file) {
            (None, None) => Err(ValidationError::new(
                "image",
                "Either image URL or image file is required",
            )),
            (Some(url), _) => validate_url("imageUrl", url),
            (None, Some(file)) if file.bytes.is_empty() => {
                Err(ValidationError::new("imageFile", "Image file is empty"))
            }
            (None, Some(_)) => Ok(()),
        }
    }
}

impl Validate for SocialMediaSearch {
    fn validate(&self) -> Result<(), ValidationError> {
        if self.identifier.trim().is_empty() {
            return Err(ValidationError::new("identifier", "Identifier is required"));
        }
        if self.platforms.is_empty() {
            return Err(ValidationError::new("platforms", "Select at least one platform"));
        }
        Ok(())
    }
}

impl Validate for VehicleSearch {
    fn validate(&self) -> Result<(), ValidationError> {
        if VEHICLE_RE.is_match(&self.vehicle_number) {
            Ok(())
        } else {
            Err(ValidationError::new("vehicleNumber", "Invalid vehicle number format"))
        }
    }
}

impl Validate for CourtSearch {
    fn validate(&self) -> Result<(), ValidationError> {
        if self.name.chars().count() < MIN_COURT_NAME {
            return Err(ValidationError::new(
                "name",
                format!("Name must be at least {} characters", MIN_COURT_NAME),
            ));
        }
        if let Some(year) = self.year {
            let current = Utc::now().year();
            if !(MIN_COURT_YEAR..=current).contains(&year) {
                return Err(ValidationError::new(
                    "year",
                    format!("Year must be between {} and {}", MIN_COURT_YEAR, current),
                ));
            }
        }
        Ok(())
    }
}

impl Validate for EmailAnalysis {
    fn validate(&self) -> Result<(), ValidationError> {
        validate_email("email", &self.email)
    }
}

impl Validate for DarkWebSearch {
    fn validate(&self) -> Result<(), ValidationError> {
        validate_keywords("keywords", &self.keywords)
    }
}

impl Validate for KeywordSearch {
    fn validate(&self) -> Result<(), ValidationError> {
        validate_keywords("keywords", &self.keywords)
    }
}
