use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use super::FieldError;

/// Something shaped like `local@domain.tld`, with no whitespace in the run.
static EMAIL_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\S+@\S+\.\S+").expect("email pattern is valid"));

/// Delivery details entered at checkout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ShippingInfo {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub city: String,
    pub country: String,
    pub zip: String,
}

impl Default for ShippingInfo {
    fn default() -> Self {
        Self {
            first_name: String::new(),
            last_name: String::new(),
            email: String::new(),
            phone: String::new(),
            address: String::new(),
            city: String::new(),
            country: "USA".to_string(),
            zip: String::new(),
        }
    }
}

impl ShippingInfo {
    /// Checks the required fields, reporting every failure at once.
    pub fn validate(&self) -> Result<(), Vec<FieldError>> {
        let mut errors = Vec::new();
        if self.first_name.trim().is_empty() {
            errors.push(FieldError::FirstName);
        }
        if self.address.trim().is_empty() {
            errors.push(FieldError::Address);
        }
        if !EMAIL_REGEX.is_match(&self.email) {
            errors.push(FieldError::Email);
        }
        if self.zip.trim().is_empty() {
            errors.push(FieldError::Zip);
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn complete() -> ShippingInfo {
        ShippingInfo {
            first_name: "Ada".to_string(),
            email: "ada@example.com".to_string(),
            address: "1 Analytical Way".to_string(),
            zip: "02139".to_string(),
            ..ShippingInfo::default()
        }
    }

    #[test]
    fn defaults_to_usa() {
        assert_eq!(ShippingInfo::default().country, "USA");
        let parsed: ShippingInfo = serde_json::from_str(r#"{"firstName":"Ada"}"#).unwrap();
        assert_eq!(parsed.first_name, "Ada");
        assert_eq!(parsed.country, "USA");
    }

    #[test]
    fn complete_form_passes() {
        assert_eq!(complete().validate(), Ok(()));
    }

    #[test]
    fn reports_every_missing_field() {
        let errors = ShippingInfo::default().validate().unwrap_err();
        assert_eq!(
            errors,
            [
                FieldError::FirstName,
                FieldError::Address,
                FieldError::Email,
                FieldError::Zip
            ]
        );
        assert_eq!(errors[0].to_string(), "First name is required.");
    }

    #[test]
    fn email_needs_at_and_dotted_domain() {
        for bad in ["", "ada", "ada@example", "@example.com", "ada@.com", "ada@example.", "ada @example.com"] {
            let info = ShippingInfo {
                email: bad.to_string(),
                ..complete()
            };
            assert_eq!(info.validate(), Err(vec![FieldError::Email]), "{:?}", bad);
        }
        for good in ["a@b.c", "first.last@mail.example.org", " padded@example.com "] {
            let info = ShippingInfo {
                email: good.to_string(),
                ..complete()
            };
            assert!(info.validate().is_ok(), "{:?}", good);
        }
    }
}
