use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumString};

/// Operational state of a camera. Wire and store values are the Spanish
/// labels the inventory frontend displays.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    EnumIter,
    DeriveActiveEnum,
    Serialize,
    Deserialize,
    EnumString,
    Display,
)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(20))")]
pub enum CameraStatus {
    #[sea_orm(string_value = "Disponible")]
    #[serde(rename = "Disponible")]
    #[strum(serialize = "Disponible")]
    Available,
    #[sea_orm(string_value = "En uso")]
    #[serde(rename = "En uso")]
    #[strum(serialize = "En uso")]
    InUse,
    #[sea_orm(string_value = "Mantenimiento")]
    #[serde(rename = "Mantenimiento")]
    #[strum(serialize = "Mantenimiento")]
    Maintenance,
    #[sea_orm(string_value = "Dañada")]
    #[serde(rename = "Dañada")]
    #[strum(serialize = "Dañada")]
    Damaged,
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use super::CameraStatus;

    #[test]
    fn parses_wire_labels() {
        assert_eq!(
            CameraStatus::from_str("Disponible").unwrap(),
            CameraStatus::Available
        );
        assert_eq!(
            CameraStatus::from_str("En uso").unwrap(),
            CameraStatus::InUse
        );
        assert_eq!(
            CameraStatus::from_str("Mantenimiento").unwrap(),
            CameraStatus::Maintenance
        );
        assert_eq!(
            CameraStatus::from_str("Dañada").unwrap(),
            CameraStatus::Damaged
        );
        assert!(CameraStatus::from_str("Retirada").is_err());
    }

    #[test]
    fn serializes_wire_labels() {
        assert_eq!(
            serde_json::to_value(CameraStatus::InUse).unwrap(),
            serde_json::json!("En uso")
        );
    }
}
