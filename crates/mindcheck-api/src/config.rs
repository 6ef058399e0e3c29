use std::env;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use mindcheck_core::models::risk::{AssessmentKind, RiskBand, RiskTier};
use mindcheck_scoring::ReferenceData;

/// Current reference data file version. Bump this when changing the file
/// shape; each bump requires a corresponding step in [`migrate`].
const CURRENT_VERSION: u32 = 1;

/// Process settings, read from the environment.
#[derive(Debug, Clone)]
pub struct ServiceConfig {
    pub bucket: String,
    /// S3-compatible endpoint for local development.
    pub s3_endpoint: Option<String>,
    /// JSON file with thresholds and risk bands. Built-in defaults when unset.
    pub reference_data_path: Option<PathBuf>,
    /// Serve over plain HTTP on this address instead of running as a Lambda.
    pub listen_addr: Option<String>,
}

impl ServiceConfig {
    pub fn from_env() -> Self {
        Self {
            bucket: env::var("MINDCHECK_BUCKET").unwrap_or_else(|_| "mindcheck".to_string()),
            s3_endpoint: env::var("MINDCHECK_S3_ENDPOINT").ok(),
            reference_data_path: env::var("MINDCHECK_REFERENCE_DATA").ok().map(PathBuf::from),
            listen_addr: env::var("MINDCHECK_LISTEN_ADDR").ok(),
        }
    }
}

/// Load and validate reference data, falling back to the built-in tables.
pub fn load_reference_data(path: Option<&Path>) -> eyre::Result<ReferenceData> {
    let Some(path) = path else {
        tracing::info!("no reference data file configured, using built-in thresholds and bands");
        return Ok(ReferenceData::default());
    };

    let contents = std::fs::read_to_string(path)
        .map_err(|e| eyre::eyre!("failed to read reference data at {}: {e}", path.display()))?;
    let reference = parse_reference_data(&contents)?;
    tracing::info!(
        path = %path.display(),
        bands = reference.bands.len(),
        "reference data loaded"
    );
    Ok(reference)
}

/// Parse a reference data file of any supported version, migrate it and
/// validate the result.
pub fn parse_reference_data(contents: &str) -> eyre::Result<ReferenceData> {
    // Parse as raw JSON so we can run migrations before deserializing.
    let json: serde_json::Value = serde_json::from_str(contents)?;
    let on_disk_version = match json.get("config_version") {
        None => 0,
        Some(v) => v
            .as_u64()
            .and_then(|n| u32::try_from(n).ok())
            .ok_or_else(|| eyre::eyre!("config_version {v} is not a supported version number"))?,
    };

    let migrated = migrate(json, on_disk_version)?;
    let reference: ReferenceData = serde_json::from_value(migrated)?;
    reference.validate()?;
    Ok(reference)
}

/// A v0 file row: the legacy result-guidance table.
#[derive(Deserialize)]
struct LegacyBand {
    risk_level: RiskTier,
    title: String,
    description: String,
    #[serde(default)]
    recommendations: String,
    #[serde(default)]
    resources: String,
    min_score: i64,
    max_score: i64,
    #[serde(default = "legacy_active")]
    is_active: bool,
}

fn legacy_active() -> bool {
    true
}

/// Run sequential migrations from `from_version` up to [`CURRENT_VERSION`].
///
/// Each migration is a pure transform on the raw JSON value.
fn migrate(mut json: serde_json::Value, from_version: u32) -> eyre::Result<serde_json::Value> {
    if from_version > CURRENT_VERSION {
        return Err(eyre::eyre!(
            "config_version {from_version} is newer than this build supports ({CURRENT_VERSION})"
        ));
    }

    // v0 → v1: a bare array of quick-check guidance rows becomes
    // { policies, bands } with the built-in policies.
    if from_version < 1 {
        let rows: Vec<LegacyBand> = serde_json::from_value(json)
            .map_err(|e| eyre::eyre!("unversioned reference data is not a guidance table: {e}"))?;
        let bands: Vec<RiskBand> = rows.into_iter().map(upgrade_legacy_band).collect();
        json = serde_json::json!({
            "config_version": 1,
            "policies": ReferenceData::default().policies,
            "bands": bands,
        });
        tracing::info!("migrated reference data v0 → v1 (legacy guidance table)");
    }

    Ok(json)
}

fn upgrade_legacy_band(row: LegacyBand) -> RiskBand {
    let split = |text: &str| -> Vec<String> {
        text.split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(String::from)
            .collect()
    };

    RiskBand {
        kind: AssessmentKind::Quick,
        tier: row.risk_level,
        min_score: row.min_score,
        max_score: row.max_score,
        title: row.title,
        description: row.description,
        actions: if row.recommendations.trim().is_empty() {
            Vec::new()
        } else {
            vec![row.recommendations.trim().to_string()]
        },
        resources: split(&row.resources),
        is_active: row.is_active,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn current_version_file_is_accepted() {
        let mut json = serde_json::to_value(ReferenceData::default()).unwrap();
        json["config_version"] = 1.into();

        let parsed = parse_reference_data(&json.to_string()).unwrap();
        assert_eq!(parsed, ReferenceData::default());
    }

    #[test]
    fn legacy_guidance_table_is_migrated() {
        let legacy = r#"[
            {"risk_level": "low", "title": "You're doing well!", "description": "Managing well.",
             "recommendations": "Continue your current self-care practices.",
             "resources": "Mindfulness apps, exercise routines, social activities",
             "min_score": 0, "max_score": 12},
            {"risk_level": "moderate", "title": "Some areas for improvement", "description": "Some support may help.",
             "min_score": 13, "max_score": 18},
            {"risk_level": "high", "title": "Professional support recommended", "description": "Please reach out.",
             "min_score": 19, "max_score": 25}
        ]"#;

        let parsed = parse_reference_data(legacy).unwrap();
        let quick = parsed.bands_for(AssessmentKind::Quick);
        assert_eq!(quick.len(), 3);
        assert_eq!(quick[0].resources.len(), 3);
        assert_eq!(quick[0].actions, vec!["Continue your current self-care practices."]);
        assert!(quick[1].actions.is_empty());
        assert!(parsed.bands_for(AssessmentKind::Full).is_empty());
        assert!(parsed.policy(AssessmentKind::Full).is_some());
    }

    #[test]
    fn newer_versions_are_rejected() {
        let err = parse_reference_data(r#"{"config_version": 7, "policies": {}, "bands": []}"#)
            .unwrap_err();
        assert!(err.to_string().contains("newer than this build supports"));
    }

    #[test]
    fn versions_beyond_u32_are_rejected() {
        for version in ["4294967297", "-1", "\"1\""] {
            let contents = format!(r#"{{"config_version": {version}, "policies": {{}}, "bands": []}}"#);
            assert!(parse_reference_data(&contents).is_err(), "accepted {version}");
        }
    }

    #[test]
    fn overlapping_bands_are_rejected_at_load() {
        let mut reference = ReferenceData::default();
        reference.bands[1].min_score = 10;
        let mut json = serde_json::to_value(&reference).unwrap();
        json["config_version"] = 1.into();

        assert!(parse_reference_data(&json.to_string()).is_err());
    }
}
