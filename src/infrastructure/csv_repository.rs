// CSV file repository implementation
use crate::application::error::DashboardError;
use crate::application::security_repository::SecurityDataRepository;
use crate::domain::records::{ClickRecord, CsvRecord, SignatureHitRecord, ThreatCountRecord};
use async_trait::async_trait;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone)]
pub struct CsvRepository {
    phishing_path: PathBuf,
    ids_threats_path: PathBuf,
}

impl CsvRepository {
    pub fn new(phishing_path: PathBuf, ids_threats_path: PathBuf) -> Self {
        Self {
            phishing_path,
            ids_threats_path,
        }
    }

    async fn read_records<T: CsvRecord>(path: &Path) -> Result<Vec<T>, DashboardError> {
        let bytes = tokio::fs::read(path).await.map_err(|e| match e.kind() {
            ErrorKind::NotFound => DashboardError::FileNotFound {
                path: path.to_path_buf(),
            },
            _ => DashboardError::Io {
                path: path.to_path_buf(),
                source: e,
            },
        })?;

        let records = parse_records::<T>(path, &bytes)?;
        tracing::debug!("Loaded {} rows from {}", records.len(), path.display());
        Ok(records)
    }
}

/// Parse CSV bytes into typed rows, checking the header for every required column first.
pub fn parse_records<T: CsvRecord>(path: &Path, bytes: &[u8]) -> Result<Vec<T>, DashboardError> {
    let parse_error = |source: csv::Error| DashboardError::Parse {
        path: path.to_path_buf(),
        source,
    };

    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(bytes);

    let headers = reader.headers().map_err(parse_error)?.clone();
    if let Some(&column) = T::COLUMNS
        .iter()
        .find(|column| !headers.iter().any(|h| h == **column))
    {
        return Err(DashboardError::MissingColumn {
            path: path.to_path_buf(),
            column,
        });
    }

    reader
        .deserialize()
        .collect::<Result<Vec<T>, csv::Error>>()
        .map_err(parse_error)
}

#[async_trait]
impl SecurityDataRepository for CsvRepository {
    async fn load_clicks(&self) -> Result<Vec<ClickRecord>, DashboardError> {
        Self::read_records(&self.phishing_path).await
    }

    async fn load_threat_counts(&self) -> Result<Vec<ThreatCountRecord>, DashboardError> {
        Self::read_records(&self.phishing_path).await
    }

    async fn load_signature_hits(&self) -> Result<Vec<SignatureHitRecord>, DashboardError> {
        Self::read_records(&self.ids_threats_path).await
    }
}
