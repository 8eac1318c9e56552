// Repository trait for the security data sources
use crate::application::error::DashboardError;
use crate::domain::records::{ClickRecord, SignatureHitRecord, ThreatCountRecord};
use async_trait::async_trait;

/// Source tables, read fresh on every call.
#[async_trait]
pub trait SecurityDataRepository: Send + Sync {
    /// Per-user permitted and blocked clicks
    async fn load_clicks(&self) -> Result<Vec<ClickRecord>, DashboardError>;

    /// Per-user spam, malware and phishing counts
    async fn load_threat_counts(&self) -> Result<Vec<ThreatCountRecord>, DashboardError>;

    /// Geolocated IDS/IPS signature hits
    async fn load_signature_hits(&self) -> Result<Vec<SignatureHitRecord>, DashboardError>;
}
