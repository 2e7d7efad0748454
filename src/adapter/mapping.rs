//! Backend code → domain enum tables.
//!
//! The backend has shipped two vocabularies for the same classifier output:
//! Turkish codes (`DOLANDIRICILIK_YETKISIZ_ISLEM`, `YUKSEK`, …) and the
//! classifier's own English codes (`FRAUD_UNAUTHORIZED_TX`, `HIGH`, …). Both
//! are accepted. Codes outside these tables, including the legacy `TEKNIK`,
//! have no category of their own and return `None`; the caller decides the
//! fallback.

use crate::types::{ComplaintCategory, Priority};

pub fn category_from_code(code: &str) -> Option<ComplaintCategory> {
    let category = match code {
        "DOLANDIRICILIK_YETKISIZ_ISLEM" | "FRAUD_UNAUTHORIZED_TX" => {
            ComplaintCategory::FraudUnauthorizedTx
        }
        "IADE_ITIRAZ" | "CHARGEBACK_DISPUTE" => ComplaintCategory::ChargebackDispute,
        "TRANSFER_GECIKMESI" | "TRANSFER_DELAY" => ComplaintCategory::TransferDelay,
        "ERISIM_GIRIS_MOBIL" | "ACCESS_LOGIN_MOBILE" => ComplaintCategory::AccessLoginMobile,
        "KART_LIMIT_KREDI" | "CARD_LIMIT_CREDIT" => ComplaintCategory::CardLimitCredit,
        "BILGI_TALEBI" | "INFORMATION_REQUEST" => ComplaintCategory::InformationRequest,
        "KAMPANYA_PUAN_ODUL" | "CAMPAIGN_POINTS_REWARDS" => {
            ComplaintCategory::CampaignPointsRewards
        }
        "MANUEL_INCELEME" | "UNKNOWN" => ComplaintCategory::Unknown,
        _ => return None,
    };
    Some(category)
}

pub fn priority_from_code(code: &str) -> Option<Priority> {
    let priority = match code {
        "DUSUK" | "LOW" => Priority::Low,
        "ORTA" | "MEDIUM" => Priority::Medium,
        "YUKSEK" | "HIGH" => Priority::High,
        "CRITICAL" => Priority::Critical,
        _ => return None,
    };
    Some(priority)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn turkish_and_english_codes_agree() {
        let pairs = [
            ("DOLANDIRICILIK_YETKISIZ_ISLEM", "FRAUD_UNAUTHORIZED_TX"),
            ("IADE_ITIRAZ", "CHARGEBACK_DISPUTE"),
            ("TRANSFER_GECIKMESI", "TRANSFER_DELAY"),
            ("ERISIM_GIRIS_MOBIL", "ACCESS_LOGIN_MOBILE"),
            ("KART_LIMIT_KREDI", "CARD_LIMIT_CREDIT"),
            ("BILGI_TALEBI", "INFORMATION_REQUEST"),
            ("KAMPANYA_PUAN_ODUL", "CAMPAIGN_POINTS_REWARDS"),
            ("MANUEL_INCELEME", "UNKNOWN"),
        ];
        for (tr, en) in pairs {
            let category = category_from_code(tr);
            assert!(category.is_some(), "{tr} should be mapped");
            assert_eq!(category, category_from_code(en));
            assert_eq!(category.map(|c| c.as_str()), Some(en));
        }
    }

    #[test]
    fn every_category_is_reachable() {
        for category in ComplaintCategory::ALL {
            assert_eq!(category_from_code(category.as_str()), Some(category));
        }
    }

    #[test]
    fn unmapped_codes_return_none() {
        assert_eq!(category_from_code("TEKNIK"), None);
        assert_eq!(category_from_code("BILINMIYOR"), None);
        assert_eq!(category_from_code(""), None);
        assert_eq!(priority_from_code("ACIL"), None);
    }

    #[test]
    fn priority_codes() {
        assert_eq!(priority_from_code("YUKSEK"), Some(Priority::High));
        assert_eq!(priority_from_code("ORTA"), Some(Priority::Medium));
        assert_eq!(priority_from_code("DUSUK"), Some(Priority::Low));
        assert_eq!(priority_from_code("HIGH"), Some(Priority::High));
        assert_eq!(priority_from_code("CRITICAL"), Some(Priority::Critical));
    }
}
