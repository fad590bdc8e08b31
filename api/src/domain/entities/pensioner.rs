//! Pensioner domain entities
//!
//! Pensioner records are owned by the upstream pensioner detail service;
//! this service only ever reads a transient copy.

use serde::{Deserialize, Serialize};

/// Classification affecting the payout rate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PensionType {
    /// Pension drawn by the pensioner themselves.
    #[serde(rename = "Self")]
    SelfPension,
    /// Pension drawn by a surviving family member.
    Family,
}

impl PensionType {
    /// Fraction of the earned salary paid out as pension.
    pub fn payout_rate(&self) -> f64 {
        match self {
            PensionType::SelfPension => 0.8,
            PensionType::Family => 0.5,
        }
    }
}

impl std::fmt::Display for PensionType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PensionType::SelfPension => write!(f, "self"),
            PensionType::Family => write!(f, "family"),
        }
    }
}

/// Classification determining the fixed bank service charge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BankType {
    Public,
    Private,
}

impl std::fmt::Display for BankType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BankType::Public => write!(f, "public"),
            BankType::Private => write!(f, "private"),
        }
    }
}

/// Bank account details attached to a pensioner record.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BankDetail {
    pub bank_name: Option<String>,
    pub account_number: Option<String>,
    pub bank_type: BankType,
}

/// A pensioner record as served by the upstream detail service.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PensionerDetail {
    pub aadhar_number: String,
    pub salary_earned: f64,
    pub allowances: f64,
    pub pension_type: PensionType,
    pub bank_detail: BankDetail,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn payout_rate_by_pension_type() {
        assert_eq!(PensionType::SelfPension.payout_rate(), 0.8);
        assert_eq!(PensionType::Family.payout_rate(), 0.5);
    }

    #[test]
    fn deserialize_pensioner_detail() {
        let json = r#"{
            "aadharNumber": "123412341234",
            "salaryEarned": 100000.0,
            "allowances": 20000.0,
            "pensionType": "Self",
            "bankDetail": {
                "bankName": "National Bank",
                "accountNumber": "AC-1042",
                "bankType": "Public"
            }
        }"#;
        let detail: PensionerDetail = serde_json::from_str(json).unwrap();
        assert_eq!(detail.aadhar_number, "123412341234");
        assert_eq!(detail.salary_earned, 100000.0);
        assert_eq!(detail.pension_type, PensionType::SelfPension);
        assert_eq!(detail.bank_detail.bank_type, BankType::Public);
    }

    #[test]
    fn deserialize_detail_without_bank_account_fields() {
        let json = r#"{
            "aadharNumber": "123412341234",
            "salaryEarned": 100000.0,
            "allowances": 20000.0,
            "pensionType": "Family",
            "bankDetail": {"bankType": "Private"}
        }"#;
        let detail: PensionerDetail = serde_json::from_str(json).unwrap();
        assert_eq!(detail.pension_type, PensionType::Family);
        assert_eq!(detail.bank_detail.bank_type, BankType::Private);
        assert!(detail.bank_detail.bank_name.is_none());
        assert!(detail.bank_detail.account_number.is_none());
    }

    #[test]
    fn reject_unknown_pension_type() {
        let result: Result<PensionType, _> = serde_json::from_str(r#""Widow""#);
        assert!(result.is_err());
    }
}
