//! Anchor and country reference data
//!
//! The corridor directory is explicit immutable configuration: callers build
//! one (usually via [`AnchorDirectory::builtin`]) and pass it into the route
//! synthesizer. Nothing in this module mutates after construction.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use utoipa::ToSchema;

/// Role an anchor plays in a remittance corridor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "kebab-case")]
pub enum AnchorKind {
    OnRamp,
    OffRamp,
    Bridge,
}

impl AnchorKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            AnchorKind::OnRamp => "on-ramp",
            AnchorKind::OffRamp => "off-ramp",
            AnchorKind::Bridge => "bridge",
        }
    }
}

/// Operational status reported by an anchor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum AnchorStatus {
    Operational,
    Degraded,
    Offline,
}

/// A named on/off-ramp or bridging service participating in a route.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Anchor {
    pub id: String,
    pub name: String,
    pub country: String,
    pub currency: String,
    #[serde(rename = "type")]
    pub kind: AnchorKind,
    pub status: AnchorStatus,
    pub available: bool,
}

impl Anchor {
    /// Synthesize a placeholder "<Country> Gateway" anchor for a corridor
    /// side that has no directory entry. Always operational and available.
    pub fn gateway_for(country: &Country, kind: AnchorKind) -> Self {
        let side = match kind {
            AnchorKind::OffRamp => "off",
            _ => "on",
        };
        Self {
            id: format!("anc-mock-{}-{}", side, country.code),
            name: format!("{} Gateway", country.name),
            country: country.code.clone(),
            currency: country.currency.clone(),
            kind,
            status: AnchorStatus::Operational,
            available: true,
        }
    }
}

/// Country reference row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Country {
    pub code: String,
    pub name: String,
    pub currency: String,
    pub region: String,
}

fn country(code: &str, name: &str, currency: &str, region: &str) -> Country {
    Country {
        code: code.to_string(),
        name: name.to_string(),
        currency: currency.to_string(),
        region: region.to_string(),
    }
}

fn anchor(
    id: &str,
    name: &str,
    country: &str,
    currency: &str,
    kind: AnchorKind,
    status: AnchorStatus,
) -> Anchor {
    Anchor {
        id: id.to_string(),
        name: name.to_string(),
        country: country.to_string(),
        currency: currency.to_string(),
        kind,
        status,
        available: true,
    }
}

/// Immutable directory of supported countries and known anchors.
#[derive(Debug, Clone)]
pub struct AnchorDirectory {
    countries: Vec<Country>,
    anchors: Vec<Anchor>,
}

impl AnchorDirectory {
    pub fn new(countries: Vec<Country>, anchors: Vec<Anchor>) -> Self {
        Self { countries, anchors }
    }

    /// The demo corridor set: the Americas, seeded at startup.
    pub fn builtin() -> Self {
        use AnchorKind::{OffRamp, OnRamp};
        use AnchorStatus::{Degraded, Operational};

        let countries = vec![
            // North America
            country("US", "United States", "USD", "North America"),
            country("CA", "Canada", "CAD", "North America"),
            country("MX", "Mexico", "MXN", "North America"),
            // Central America
            country("CR", "Costa Rica", "CRC", "Central America"),
            country("PA", "Panama", "USD", "Central America"),
            // South America
            country("CO", "Colombia", "COP", "South America"),
            country("AR", "Argentina", "ARS", "South America"),
            country("BR", "Brazil", "BRL", "South America"),
            country("CL", "Chile", "CLP", "South America"),
            country("PE", "Peru", "PEN", "South America"),
            country("EC", "Ecuador", "USD", "South America"),
            country("BO", "Bolivia", "BOB", "South America"),
        ];

        let anchors = vec![
            anchor("anc-1", "MoneyGram", "US", "USD", OnRamp, Operational),
            anchor("anc-2", "Bitso", "MX", "MXN", OffRamp, Operational),
            anchor("anc-3", "Tempo", "US", "USD", OnRamp, Operational),
            anchor("anc-4", "SatoshiTango", "AR", "ARS", OffRamp, Operational),
            anchor("anc-5", "AnchorUSD", "US", "USD", OnRamp, Operational),
            anchor("anc-6", "Settle Network", "CO", "COP", OffRamp, Operational),
            anchor("anc-7", "Mercado Pago", "BR", "BRL", OffRamp, Operational),
            anchor("anc-8", "Buda.com", "CL", "CLP", OffRamp, Operational),
            anchor("anc-9", "CoolPay CR", "CR", "CRC", OffRamp, Operational),
            anchor("anc-10", "TowerBank", "PA", "USD", OffRamp, Operational),
            anchor("anc-11", "Interbank Peru", "PE", "PEN", OffRamp, Operational),
            anchor("anc-12", "Produbanco", "EC", "USD", OffRamp, Degraded),
            anchor("anc-13", "Banco Ganadero", "BO", "BOB", OffRamp, Operational),
            anchor("anc-14", "Shakepay", "CA", "CAD", OnRamp, Operational),
        ];

        Self::new(countries, anchors)
    }

    pub fn countries(&self) -> &[Country] {
        &self.countries
    }

    pub fn anchors(&self) -> &[Anchor] {
        &self.anchors
    }

    pub fn country(&self, code: &str) -> Option<&Country> {
        self.countries.iter().find(|c| c.code == code)
    }

    /// Anchors able to originate a transfer for `origin`: located in the
    /// country, or any on-ramp operating in its currency.
    pub fn origin_candidates(&self, origin: &Country) -> Vec<Anchor> {
        self.anchors
            .iter()
            .filter(|a| {
                a.country == origin.code
                    || (a.kind == AnchorKind::OnRamp && a.currency == origin.currency)
            })
            .cloned()
            .collect()
    }

    /// Anchors able to deliver into `dest`: located in the country, or any
    /// off-ramp operating in its currency.
    pub fn destination_candidates(&self, dest: &Country) -> Vec<Anchor> {
        self.anchors
            .iter()
            .filter(|a| {
                a.country == dest.code
                    || (a.kind == AnchorKind::OffRamp && a.currency == dest.currency)
            })
            .cloned()
            .collect()
    }
}

/// Sparse exchange-rate table keyed by `"<origin>-<dest>"` currency pair.
///
/// Pairs absent from the table fall back to 1:1. There is deliberately no
/// triangulation through USD: the original mock behaves this way, and the
/// scenario bands in the tests depend on it.
#[derive(Debug, Clone)]
pub struct RateTable {
    rates: HashMap<String, f64>,
}

impl RateTable {
    pub fn new(pairs: impl IntoIterator<Item = (String, f64)>) -> Self {
        Self {
            rates: pairs.into_iter().collect(),
        }
    }

    /// The demo's hardcoded mid-market snapshot.
    pub fn builtin() -> Self {
        let pairs: &[(&str, f64)] = &[
            // USD pairs
            ("USD-MXN", 17.15),
            ("USD-COP", 3950.0),
            ("USD-ARS", 875.0),
            ("USD-BRL", 4.97),
            ("USD-CLP", 890.0),
            ("USD-PEN", 3.72),
            ("USD-CRC", 525.0),
            ("USD-BOB", 6.91),
            ("USD-CAD", 1.36),
            ("USD-USD", 1.0),
            // Reverse to USD
            ("MXN-USD", 0.058),
            ("COP-USD", 0.00025),
            ("ARS-USD", 0.00114),
            ("BRL-USD", 0.201),
            ("CLP-USD", 0.00112),
            ("PEN-USD", 0.269),
            ("CRC-USD", 0.0019),
            ("BOB-USD", 0.145),
            ("CAD-USD", 0.735),
            // Cross-LATAM common pairs
            ("MXN-COP", 230.3),
            ("BRL-ARS", 176.0),
            ("COP-MXN", 0.00434),
            ("ARS-BRL", 0.00568),
            ("CLP-COP", 4.44),
            ("PEN-COP", 1062.0),
            ("CAD-MXN", 12.61),
        ];
        Self::new(pairs.iter().map(|(k, v)| (k.to_string(), *v)))
    }

    /// Base rate for a currency pair, defaulting to 1.0 for unknown pairs.
    pub fn base_rate(&self, origin_currency: &str, dest_currency: &str) -> f64 {
        let key = format!("{}-{}", origin_currency, dest_currency);
        match self.rates.get(&key) {
            Some(rate) => *rate,
            None => {
                tracing::debug!(pair = %key, "no rate for pair, defaulting to 1:1");
                1.0
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_country_lookup() {
        let dir = AnchorDirectory::builtin();
        assert_eq!(dir.country("US").unwrap().currency, "USD");
        assert_eq!(dir.country("MX").unwrap().currency, "MXN");
        assert!(dir.country("ZZ").is_none());
    }

    #[test]
    fn test_origin_candidates_match_country_or_currency() {
        let dir = AnchorDirectory::builtin();
        let panama = dir.country("PA").unwrap();
        // Panama uses USD, so all USD on-ramps qualify alongside TowerBank.
        let candidates = dir.origin_candidates(panama);
        let names: Vec<&str> = candidates.iter().map(|a| a.name.as_str()).collect();
        assert!(names.contains(&"TowerBank"));
        assert!(names.contains(&"MoneyGram"));
        assert!(names.contains(&"AnchorUSD"));
    }

    #[test]
    fn test_destination_candidates_for_mexico() {
        let dir = AnchorDirectory::builtin();
        let mx = dir.country("MX").unwrap();
        let candidates = dir.destination_candidates(mx);
        assert_eq!(candidates.len(), 1);
        assert_eq!(candidates[0].name, "Bitso");
        assert_eq!(candidates[0].kind, AnchorKind::OffRamp);
    }

    #[test]
    fn test_gateway_placeholder() {
        let dir = AnchorDirectory::builtin();
        let us = dir.country("US").unwrap();
        let on = Anchor::gateway_for(us, AnchorKind::OnRamp);
        assert_eq!(on.id, "anc-mock-on-US");
        assert_eq!(on.name, "United States Gateway");
        assert!(on.available);
        assert_eq!(on.status, AnchorStatus::Operational);

        let off = Anchor::gateway_for(us, AnchorKind::OffRamp);
        assert_eq!(off.id, "anc-mock-off-US");
    }

    #[test]
    fn test_rate_table_lookup_and_fallback() {
        let rates = RateTable::builtin();
        assert_eq!(rates.base_rate("USD", "MXN"), 17.15);
        assert_eq!(rates.base_rate("USD", "USD"), 1.0);
        // Unknown cross-pair silently falls back to 1:1.
        assert_eq!(rates.base_rate("CRC", "BOB"), 1.0);
    }

    #[test]
    fn test_anchor_serializes_with_type_field() {
        let dir = AnchorDirectory::builtin();
        let json = serde_json::to_value(&dir.anchors()[0]).unwrap();
        assert_eq!(json["type"], "on-ramp");
        assert_eq!(json["status"], "operational");
    }
}
