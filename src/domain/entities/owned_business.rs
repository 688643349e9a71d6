//! Owned business entity - a location the player has bought

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::value_objects::{
    AddressId, CustomData, LedgerSettings, UNKNOWN_BUSINESS_TYPE,
};

/// A business owned by the player.
///
/// The serialized form is the save-file record, so field names are fixed in
/// PascalCase and every field except the address id has a default.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct OwnedBusiness {
    pub address_id: AddressId,
    #[serde(rename = "BusinessName", default)]
    pub name: String,
    #[serde(rename = "Type", default = "unknown_business_type")]
    pub business_type: String,
    #[serde(default)]
    pub purchase_price: i64,
    #[serde(default)]
    pub purchase_date: String,
    #[serde(default)]
    pub last_income_collection: DateTime<Utc>,
    #[serde(default)]
    pub daily_income: i64,
    #[serde(default)]
    pub upgrade_level: u32,
    #[serde(default)]
    pub employee_count: u32,
    #[serde(default = "unknown_floor")]
    pub floor_name: String,
    #[serde(default)]
    pub custom_data: CustomData,
}

fn unknown_business_type() -> String {
    UNKNOWN_BUSINESS_TYPE.to_string()
}

fn unknown_floor() -> String {
    "Unknown".to_string()
}

impl OwnedBusiness {
    pub fn new(address_id: AddressId, name: impl Into<String>) -> Self {
        Self {
            address_id,
            name: name.into(),
            business_type: unknown_business_type(),
            purchase_price: 0,
            purchase_date: String::new(),
            last_income_collection: Utc::now(),
            daily_income: 0,
            upgrade_level: 0,
            employee_count: 0,
            floor_name: unknown_floor(),
            custom_data: CustomData::new(),
        }
    }

    pub fn with_business_type(mut self, business_type: impl Into<String>) -> Self {
        self.business_type = business_type.into();
        self
    }

    pub fn with_purchase(mut self, price: i64, date: impl Into<String>) -> Self {
        self.purchase_price = price;
        self.purchase_date = date.into();
        self
    }

    pub fn with_daily_income(mut self, daily_income: i64) -> Self {
        self.daily_income = daily_income;
        self
    }

    pub fn with_upgrade_level(mut self, level: u32) -> Self {
        self.upgrade_level = level;
        self
    }

    pub fn with_employees(mut self, employee_count: u32) -> Self {
        self.employee_count = employee_count;
        self
    }

    pub fn with_floor(mut self, floor_name: impl Into<String>) -> Self {
        self.floor_name = floor_name.into();
        self
    }

    /// Income produced by one collection.
    ///
    /// `round(daily * (1 + level * step) + employees * per_employee)`, clamped
    /// to the `i64` range.
    pub fn income(&self, settings: &LedgerSettings) -> i64 {
        let upgrade_multiplier = 1.0 + f64::from(self.upgrade_level) * settings.upgrade_income_step;
        let staff_bonus =
            i64::from(self.employee_count).saturating_mul(settings.income_per_employee);
        // float-to-int `as` saturates at the bounds
        (self.daily_income as f64 * upgrade_multiplier + staff_bonus as f64).round() as i64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_income() {
        let business = OwnedBusiness::new(AddressId::new(1), "Corner Bar").with_daily_income(500);
        assert_eq!(business.income(&LedgerSettings::default()), 500);
    }

    #[test]
    fn test_upgraded_and_staffed_income() {
        let business = OwnedBusiness::new(AddressId::new(1), "Corner Bar")
            .with_daily_income(500)
            .with_upgrade_level(2)
            .with_employees(3);
        assert_eq!(business.income(&LedgerSettings::default()), 730);
    }

    #[test]
    fn test_income_rounds_to_nearest() {
        let business = OwnedBusiness::new(AddressId::new(1), "Kiosk")
            .with_daily_income(333)
            .with_upgrade_level(1);
        // 333 * 1.2 = 399.6
        assert_eq!(business.income(&LedgerSettings::default()), 400);
    }

    #[test]
    fn test_record_uses_save_file_field_names() {
        let business = OwnedBusiness::new(AddressId::new(7), "Joe's Diner")
            .with_business_type("Diner")
            .with_purchase(5000, "2024-01-01");
        let json = serde_json::to_value(&business).unwrap();

        for field in [
            "AddressId",
            "BusinessName",
            "Type",
            "PurchasePrice",
            "PurchaseDate",
            "LastIncomeCollection",
            "DailyIncome",
            "UpgradeLevel",
            "EmployeeCount",
            "FloorName",
            "CustomData",
        ] {
            assert!(json.get(field).is_some(), "missing field {}", field);
        }
        assert_eq!(json["AddressId"], 7);
        assert_eq!(json["BusinessName"], "Joe's Diner");
    }

    #[test]
    fn test_sparse_record_fills_defaults() {
        let business: OwnedBusiness =
            serde_json::from_str(r#"{"AddressId": 12, "BusinessName": "Laundromat"}"#).unwrap();

        assert_eq!(business.address_id, AddressId::new(12));
        assert_eq!(business.business_type, "Unknown");
        assert_eq!(business.floor_name, "Unknown");
        assert_eq!(business.upgrade_level, 0);
        assert!(business.custom_data.is_empty());
    }

    #[test]
    fn test_income_clamps_instead_of_overflowing() {
        let settings = LedgerSettings {
            income_per_employee: i64::MAX,
            ..LedgerSettings::default()
        };
        let business = OwnedBusiness::new(AddressId::new(1), "Mega Corp")
            .with_daily_income(i64::MAX)
            .with_upgrade_level(3)
            .with_employees(4);

        assert_eq!(business.income(&settings), i64::MAX);
    }
}
