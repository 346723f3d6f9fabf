use aims_core::{validation, CoreError, CoreResult};
use aims_shared::Masked;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

pub const ADDRESS: &str = "Address";
pub const NAME: &str = "Name";
pub const PHONE_NUMBER: &str = "Phone number";

/// Shipping details entered by the customer.
///
/// Keys the form did not send are `None`. Every field is masked in `Debug`
/// output so logging the whole struct is safe.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DeliveryInfo {
    pub address: Option<Masked<String>>,
    pub name: Option<Masked<String>>,
    pub phone_number: Option<Masked<String>>,
}

impl DeliveryInfo {
    /// Pick the known keys out of a form submission; other keys are ignored
    pub fn from_map(info: &HashMap<String, String>) -> Self {
        Self {
            address: info.get(ADDRESS).cloned().map(Masked::new),
            name: info.get(NAME).cloned().map(Masked::new),
            phone_number: info.get(PHONE_NUMBER).cloned().map(Masked::new),
        }
    }

    pub fn address(&self) -> Option<&str> {
        self.address.as_ref().map(|a| a.expose().as_str())
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_ref().map(|n| n.expose().as_str())
    }

    pub fn phone_number(&self) -> Option<&str> {
        self.phone_number.as_ref().map(|p| p.expose().as_str())
    }

    /// All three fields valid; does not say which one failed
    pub fn is_valid(&self) -> bool {
        validation::validate_address(self.address())
            && validation::validate_name(self.name())
            && validation::validate_phone_number(self.phone_number())
    }

    /// Same checks as [`DeliveryInfo::is_valid`], naming the first field that fails
    pub fn check(&self) -> CoreResult<()> {
        if !validation::validate_address(self.address()) {
            return Err(invalid(ADDRESS, "must contain only letters and spaces"));
        }
        if !validation::validate_name(self.name()) {
            return Err(invalid(NAME, "must contain only letters"));
        }
        if !validation::validate_phone_number(self.phone_number()) {
            return Err(invalid(PHONE_NUMBER, "must be 10 digits starting with 0"));
        }
        Ok(())
    }
}

fn invalid(field: &str, reason: &str) -> CoreError {
    CoreError::Validation {
        field: field.to_string(),
        reason: reason.to_string(),
    }
}
