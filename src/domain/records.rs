// Typed CSV row schemas
use serde::de::DeserializeOwned;
use serde::Deserialize;

/// A row type read from a CSV source, with the header columns it requires.
pub trait CsvRecord: DeserializeOwned {
    const COLUMNS: &'static [&'static str];
}

// Numeric cells are optional: an empty cell reads as `None` and is drawn as a
// gap, while a non-numeric value is still a parse error.

/// Click counts per user, from `phishing.csv`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ClickRecord {
    #[serde(rename = "User")]
    pub user: String,
    #[serde(rename = "ClicksPermitted")]
    pub clicks_permitted: Option<f64>,
    #[serde(rename = "ClicksBlocked")]
    pub clicks_blocked: Option<f64>,
}

impl CsvRecord for ClickRecord {
    const COLUMNS: &'static [&'static str] = &["User", "ClicksPermitted", "ClicksBlocked"];
}

/// Threat counts per user, from the same `phishing.csv`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ThreatCountRecord {
    #[serde(rename = "User")]
    pub user: String,
    #[serde(rename = "Spam")]
    pub spam: Option<f64>,
    #[serde(rename = "Malware")]
    pub malware: Option<f64>,
    #[serde(rename = "Phish")]
    pub phish: Option<f64>,
}

impl CsvRecord for ThreatCountRecord {
    const COLUMNS: &'static [&'static str] = &["User", "Spam", "Malware", "Phish"];
}

/// One IDS/IPS signature hit with its geolocated source, from `ids_threats.csv`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SignatureHitRecord {
    #[serde(rename = "longdec.src")]
    pub longitude: Option<f64>,
    #[serde(rename = "latdec.src")]
    pub latitude: Option<f64>,
    #[serde(rename = "policy.name")]
    pub policy_name: String,
}

impl CsvRecord for SignatureHitRecord {
    const COLUMNS: &'static [&'static str] = &["longdec.src", "latdec.src", "policy.name"];
}
