// Per-chart pipelines: load rows, build series, assemble the figure
use crate::application::error::DashboardError;
use crate::application::figure_assembler::{
    phishing_threats_figure, phishing_victims_figure, threat_map_figure,
};
use crate::application::security_repository::SecurityDataRepository;
use crate::domain::figure::Figure;
use async_trait::async_trait;
use std::sync::Arc;

#[async_trait]
pub trait FigureProducer: Send + Sync {
    /// Recompute the figure from the current source contents
    async fn produce(&self) -> Result<Figure, DashboardError>;
}

#[derive(Clone)]
pub struct PhishingVictimsChart {
    repository: Arc<dyn SecurityDataRepository>,
}

impl PhishingVictimsChart {
    pub fn new(repository: Arc<dyn SecurityDataRepository>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl FigureProducer for PhishingVictimsChart {
    async fn produce(&self) -> Result<Figure, DashboardError> {
        let rows = self.repository.load_clicks().await?;
        Ok(phishing_victims_figure(&rows))
    }
}

#[derive(Clone)]
pub struct PhishingThreatsChart {
    repository: Arc<dyn SecurityDataRepository>,
}

impl PhishingThreatsChart {
    pub fn new(repository: Arc<dyn SecurityDataRepository>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl FigureProducer for PhishingThreatsChart {
    async fn produce(&self) -> Result<Figure, DashboardError> {
        let rows = self.repository.load_threat_counts().await?;
        Ok(phishing_threats_figure(&rows))
    }
}

#[derive(Clone)]
pub struct ThreatMapChart {
    repository: Arc<dyn SecurityDataRepository>,
}

impl ThreatMapChart {
    pub fn new(repository: Arc<dyn SecurityDataRepository>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl FigureProducer for ThreatMapChart {
    async fn produce(&self) -> Result<Figure, DashboardError> {
        let rows = self.repository.load_signature_hits().await?;
        Ok(threat_map_figure(&rows))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::figure::{GeoMode, Trace};
    use crate::domain::series::HOME;
    use crate::infrastructure::csv_repository::CsvRepository;
    use std::fs;
    use tempfile::TempDir;

    fn repository(dir: &TempDir, phishing: &str, ids: &str) -> Arc<dyn SecurityDataRepository> {
        let phishing_path = dir.path().join("phishing.csv");
        let ids_path = dir.path().join("ids_threats.csv");
        fs::write(&phishing_path, phishing).unwrap();
        fs::write(&ids_path, ids).unwrap();
        Arc::new(CsvRepository::new(phishing_path, ids_path))
    }

    #[tokio::test]
    async fn test_missing_spam_column_only_breaks_threats_chart() {
        let dir = TempDir::new().unwrap();
        let repo = repository(
            &dir,
            "User,ClicksPermitted,ClicksBlocked,Malware,Phish\nalice,1,2,0,3\n",
            "longdec.src,latdec.src,policy.name\n",
        );

        let threats = PhishingThreatsChart::new(repo.clone()).produce().await;
        assert_eq!(threats.unwrap_err().code(), "parse_error");

        let victims = PhishingVictimsChart::new(repo).produce().await.unwrap();
        assert_eq!(victims.data.len(), 2);
    }

    #[tokio::test]
    async fn test_threat_map_from_file() {
        let dir = TempDir::new().unwrap();
        let repo = repository(
            &dir,
            "User,ClicksPermitted,ClicksBlocked,Spam,Malware,Phish\n",
            "longdec.src,latdec.src,policy.name\n\
             121.47,31.23,ET SCAN Suspicious inbound\n\
             -0.13,51.51,ET POLICY RDP\n",
        );

        let figure = ThreatMapChart::new(repo).produce().await.unwrap();
        let paths: Vec<_> = figure
            .data
            .iter()
            .filter_map(|t| match t {
                Trace::Scattergeo(g) if g.mode == GeoMode::Lines => Some(g),
                _ => None,
            })
            .collect();

        assert_eq!(paths.len(), 2);
        for path in paths {
            assert_eq!(path.lon[1], Some(HOME.lon));
            assert_eq!(path.lat[1], Some(HOME.lat));
        }
    }

    #[tokio::test]
    async fn test_recompute_is_deterministic() {
        let dir = TempDir::new().unwrap();
        let repo = repository(
            &dir,
            "User,ClicksPermitted,ClicksBlocked,Spam,Malware,Phish\nalice,3,1,10,2,4\nbob,0,5,7,0,1\n",
            "longdec.src,latdec.src,policy.name\n2.35,48.85,ET SCAN\n",
        );

        let producers: Vec<Box<dyn FigureProducer>> = vec![
            Box::new(PhishingVictimsChart::new(repo.clone())),
            Box::new(PhishingThreatsChart::new(repo.clone())),
            Box::new(ThreatMapChart::new(repo)),
        ];

        for producer in producers {
            let first = producer.produce().await.unwrap();
            let second = producer.produce().await.unwrap();
            assert_eq!(first, second);
            assert_eq!(
                serde_json::to_string(&first).unwrap(),
                serde_json::to_string(&second).unwrap()
            );
        }
    }
}
