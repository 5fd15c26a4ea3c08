//! Modelo de Car
//!
//! Este módulo contiene el agregado Car (condición, detalles, ubicación)
//! y su mapeo desde la tabla `cars`. El precio y la dirección no se
//! persisten: se agregan en tiempo de lectura.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::{postgres::PgRow, FromRow, Row};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;
use validator::Validate;

use crate::utils::validation::validate_not_blank;

/// Condición del vehículo
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "UPPERCASE")]
pub enum Condition {
    New,
    Used,
}

impl Condition {
    pub fn as_str(&self) -> &'static str {
        match self {
            Condition::New => "NEW",
            Condition::Used => "USED",
        }
    }
}

impl fmt::Display for Condition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Error)]
#[error("unknown car condition '{0}'")]
pub struct UnknownCondition(pub String);

impl FromStr for Condition {
    type Err = UnknownCondition;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "NEW" => Ok(Condition::New),
            "USED" => Ok(Condition::Used),
            other => Err(UnknownCondition(other.to_string())),
        }
    }
}

/// Fabricante (código + nombre)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Validate)]
pub struct Manufacturer {
    #[validate(range(min = 1))]
    pub code: i32,
    #[validate(custom = "validate_not_blank")]
    pub name: String,
}

impl Manufacturer {
    pub fn new(code: i32, name: impl Into<String>) -> Self {
        Self { code, name: name.into() }
    }
}

/// Atributos descriptivos del vehículo
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Validate)]
#[serde(rename_all = "camelCase")]
pub struct Details {
    #[validate(custom = "validate_not_blank")]
    pub body: String,
    #[validate(custom = "validate_not_blank")]
    pub model: String,
    #[validate]
    pub manufacturer: Manufacturer,
    #[validate(range(min = 1, max = 10))]
    pub number_of_doors: Option<i32>,
    pub fuel_type: Option<String>,
    pub engine: Option<String>,
    #[validate(range(min = 0))]
    pub mileage: Option<i32>,
    #[validate(range(min = 1886, max = 2100))]
    pub model_year: Option<i32>,
    #[validate(range(min = 1886, max = 2100))]
    pub production_year: Option<i32>,
    pub external_color: Option<String>,
}

/// Ubicación del vehículo. Sólo lat/lon se persisten.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Validate)]
pub struct Location {
    #[validate(range(min = -90.0, max = 90.0))]
    pub lat: f64,
    #[validate(range(min = -180.0, max = 180.0))]
    pub lon: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub zip: Option<String>,
}

impl Location {
    pub fn new(lat: f64, lon: f64) -> Self {
        Self {
            lat,
            lon,
            address: None,
            city: None,
            state: None,
            zip: None,
        }
    }
}

/// Agregado Car
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Car {
    pub id: Option<i64>,
    pub created_at: Option<DateTime<Utc>>,
    pub modified_at: Option<DateTime<Utc>>,
    pub condition: Condition,
    pub details: Details,
    pub location: Location,
    #[serde(default)]
    pub price: Option<String>,
}

impl Car {
    /// Car sin persistir (sin id ni timestamps)
    pub fn new(condition: Condition, details: Details, location: Location) -> Self {
        Self {
            id: None,
            created_at: None,
            modified_at: None,
            condition,
            details,
            location,
            price: None,
        }
    }
}

impl<'r> FromRow<'r, PgRow> for Car {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        let condition: String = row.try_get("condition")?;
        let condition = condition
            .parse::<Condition>()
            .map_err(|e| sqlx::Error::ColumnDecode {
                index: "condition".to_string(),
                source: Box::new(e),
            })?;

        Ok(Self {
            id: Some(row.try_get("id")?),
            created_at: Some(row.try_get("created_at")?),
            modified_at: Some(row.try_get("modified_at")?),
            condition,
            details: Details {
                body: row.try_get("body")?,
                model: row.try_get("model")?,
                manufacturer: Manufacturer {
                    code: row.try_get("manufacturer_code")?,
                    name: row.try_get("manufacturer_name")?,
                },
                number_of_doors: row.try_get("number_of_doors")?,
                fuel_type: row.try_get("fuel_type")?,
                engine: row.try_get("engine")?,
                mileage: row.try_get("mileage")?,
                model_year: row.try_get("model_year")?,
                production_year: row.try_get("production_year")?,
                external_color: row.try_get("external_color")?,
            },
            location: Location::new(row.try_get("lat")?, row.try_get("lon")?),
            price: None,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_condition_round_trips_through_text() {
        assert_eq!("USED".parse::<Condition>().unwrap(), Condition::Used);
        assert_eq!(Condition::New.to_string(), "NEW");
        assert!("used".parse::<Condition>().is_err());
    }

    #[test]
    fn test_details_use_camel_case() {
        let details = Details {
            body: "sedan".to_string(),
            model: "Impala".to_string(),
            manufacturer: Manufacturer::new(101, "Chevrolet"),
            number_of_doors: Some(4),
            fuel_type: Some("Gasoline".to_string()),
            engine: Some("3.6L V6".to_string()),
            mileage: Some(32280),
            model_year: Some(2018),
            production_year: Some(2018),
            external_color: Some("white".to_string()),
        };

        let value = serde_json::to_value(&details).unwrap();
        assert_eq!(value["numberOfDoors"], 4);
        assert_eq!(value["externalColor"], "white");
        assert_eq!(value["manufacturer"]["code"], 101);
    }

    #[test]
    fn test_location_rejects_out_of_range_coordinates() {
        assert!(Location::new(40.730610, -73.935242).validate().is_ok());
        assert!(Location::new(90.5, 0.0).validate().is_err());
        assert!(Location::new(0.0, -180.1).validate().is_err());
    }

    #[test]
    fn test_manufacturer_code_must_be_positive() {
        assert!(Manufacturer::new(101, "Chevrolet").validate().is_ok());
        assert!(Manufacturer::new(0, "Chevrolet").validate().is_err());
    }

    #[test]
    fn test_location_omits_unresolved_address() {
        let value = serde_json::to_value(Location::new(40.730610, -73.935242)).unwrap();
        assert_eq!(value, json!({ "lat": 40.730610, "lon": -73.935242 }));
    }
}
