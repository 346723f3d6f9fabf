use aims_config::RushOrderRules;
use aims_core::validation;
use serde::{Deserialize, Serialize};

/// Details a customer supplies when asking for rush delivery
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RushOrderRequest {
    pub location: Option<String>,
    pub item_id: i32,
    /// `dd-MM-yyyy HH:mm`
    pub receive_time: Option<String>,
    pub info: Option<String>,
    pub instruction: Option<String>,
}

/// Decides whether a delivery may be rushed, from configured allow-lists
#[derive(Debug, Clone, Default)]
pub struct RushEligibility {
    rules: RushOrderRules,
}

impl RushEligibility {
    pub fn new(rules: RushOrderRules) -> Self {
        Self { rules }
    }

    pub fn is_location_support_rush_order(&self, location: Option<&str>) -> bool {
        location.is_some_and(|l| self.rules.provinces.iter().any(|p| p == l))
    }

    pub fn is_items_support_rush_order(&self, item_id: i32) -> bool {
        self.rules.item_ids.contains(&item_id)
    }

    pub fn is_support_rush_order(&self, location: Option<&str>, item_id: i32) -> bool {
        self.is_location_support_rush_order(location) && self.is_items_support_rush_order(item_id)
    }

    pub fn validate_receive_time(&self, time: Option<&str>) -> bool {
        validation::validate_receive_time(time)
    }

    pub fn validate_rush_order_info(&self, info: Option<&str>) -> bool {
        validation::validate_basic_string(info)
    }

    pub fn validate_rush_order_instruction(&self, instruction: Option<&str>) -> bool {
        validation::validate_basic_string(instruction)
    }

    /// Run every rush-order check and report the first one that fails
    pub fn check_rush_order(&self, request: &RushOrderRequest) -> Result<(), RushOrderError> {
        let location = request.location.as_deref();

        if !self.is_location_support_rush_order(location) {
            tracing::warn!("Rush order rejected: location {:?} not supported", location);
            return Err(RushOrderError::LocationNotSupported(
                location.unwrap_or_default().to_string(),
            ));
        }

        if !self.is_items_support_rush_order(request.item_id) {
            tracing::warn!("Rush order rejected: item {} not supported", request.item_id);
            return Err(RushOrderError::ItemNotSupported(request.item_id));
        }

        if !self.validate_receive_time(request.receive_time.as_deref()) {
            return Err(RushOrderError::InvalidReceiveTime(
                request.receive_time.clone().unwrap_or_default(),
            ));
        }

        if !self.validate_rush_order_info(request.info.as_deref()) {
            return Err(RushOrderError::InvalidInfo);
        }

        if !self.validate_rush_order_instruction(request.instruction.as_deref()) {
            return Err(RushOrderError::InvalidInstruction);
        }

        tracing::info!(
            "Rush order accepted for item {} to {}",
            request.item_id,
            location.unwrap_or_default()
        );
        Ok(())
    }
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum RushOrderError {
    #[error("Rush delivery not supported for location: {0}")]
    LocationNotSupported(String),

    #[error("Rush delivery not supported for item: {0}")]
    ItemNotSupported(i32),

    #[error("Invalid receive time (expected dd-MM-yyyy HH:mm): {0}")]
    InvalidReceiveTime(String),

    #[error("Rush order info may only contain letters and spaces")]
    InvalidInfo,

    #[error("Rush order instruction may only contain letters and spaces")]
    InvalidInstruction,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request() -> RushOrderRequest {
        RushOrderRequest {
            location: Some("Hà Nội".to_string()),
            item_id: 38,
            receive_time: Some("24-12-2023 18:30".to_string()),
            info: Some("Fragile vinyl".to_string()),
            instruction: Some("Call before arriving".to_string()),
        }
    }

    #[test]
    fn test_default_allow_lists() {
        let rush = RushEligibility::default();

        assert!(rush.is_support_rush_order(Some("Hà Nội"), 38));
        assert!(!rush.is_support_rush_order(Some("Hà Nội"), 1));
        assert!(!rush.is_support_rush_order(Some("Other City"), 38));
        assert!(!rush.is_support_rush_order(None, 38));
    }

    #[test]
    fn test_location_match_is_exact() {
        let rush = RushEligibility::default();

        assert!(rush.is_location_support_rush_order(Some("Hà Nội")));
        assert!(!rush.is_location_support_rush_order(Some("Ha Noi")));
        assert!(!rush.is_location_support_rush_order(Some("hà nội")));
        assert!(!rush.is_location_support_rush_order(Some("")));
    }

    #[test]
    fn test_configured_allow_lists() {
        let rush = RushEligibility::new(RushOrderRules {
            provinces: vec!["Đà Nẵng".to_string(), "Huế".to_string()],
            item_ids: vec![1, 2],
        });

        assert!(rush.is_support_rush_order(Some("Huế"), 2));
        assert!(!rush.is_support_rush_order(Some("Hà Nội"), 38));
        assert!(!rush.is_items_support_rush_order(38));
    }

    #[test]
    fn test_empty_allow_lists_reject_everything() {
        let rush = RushEligibility::new(RushOrderRules {
            provinces: vec![],
            item_ids: vec![],
        });
        assert!(!rush.is_support_rush_order(Some("Hà Nội"), 38));
    }

    #[test]
    fn test_free_text_checks() {
        let rush = RushEligibility::default();

        assert!(rush.validate_rush_order_info(Some("Leave with the guard")));
        assert!(!rush.validate_rush_order_info(Some("Gate 3")));
        assert!(!rush.validate_rush_order_instruction(None));
        assert!(rush.validate_receive_time(Some("24-12-2023 18:30")));
        assert!(!rush.validate_receive_time(Some("2023-12-24 18:30")));
    }

    #[test]
    fn test_check_rush_order_accepts_valid_request() {
        assert_eq!(RushEligibility::default().check_rush_order(&request()), Ok(()));
    }

    #[test]
    fn test_check_rush_order_reports_first_failure() {
        let rush = RushEligibility::default();

        let mut req = request();
        req.location = Some("Other City".to_string());
        req.item_id = 1;
        assert_eq!(
            rush.check_rush_order(&req),
            Err(RushOrderError::LocationNotSupported("Other City".to_string()))
        );

        let mut req = request();
        req.item_id = 1;
        assert_eq!(rush.check_rush_order(&req), Err(RushOrderError::ItemNotSupported(1)));

        let mut req = request();
        req.receive_time = Some("2023-12-24 18:30".to_string());
        assert!(matches!(
            rush.check_rush_order(&req),
            Err(RushOrderError::InvalidReceiveTime(_))
        ));

        let mut req = request();
        req.info = Some("Floor #2".to_string());
        assert_eq!(rush.check_rush_order(&req), Err(RushOrderError::InvalidInfo));

        let mut req = request();
        req.instruction = None;
        assert_eq!(rush.check_rush_order(&req), Err(RushOrderError::InvalidInstruction));
    }
}
