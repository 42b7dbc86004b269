use crate::error::AuditError;
use crate::types::report::QualityLevel;
use serde::Deserialize;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct AuditConfig {
    pub project: Option<ProjectConfig>,
    pub report: Option<ReportConfig>,
    pub gate: Option<GateConfig>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ProjectConfig {
    pub name: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ReportConfig {
    pub format: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GateConfig {
    pub min_level: Option<String>,
}

const ALLOWED_FORMATS: [&str; 2] = ["md", "json"];

impl AuditConfig {
    /// Default report format, `md` unless overridden by `[report]`.
    pub fn default_format(&self) -> &str {
        self.report
            .as_ref()
            .and_then(|report| report.format.as_deref())
            .unwrap_or("md")
    }

    /// Minimum acceptable quality level from `[gate]`, if configured.
    pub fn min_level(&self) -> Result<Option<QualityLevel>, AuditError> {
        match self
            .gate
            .as_ref()
            .and_then(|gate| gate.min_level.as_deref())
        {
            Some(raw) => raw
                .parse::<QualityLevel>()
                .map(Some)
                .map_err(|e| AuditError::ConfigParse(format!("gate.min_level: {e}"))),
            None => Ok(None),
        }
    }

    pub fn validate(&self) -> Result<(), AuditError> {
        let format = self.default_format();
        if !ALLOWED_FORMATS.contains(&format) {
            return Err(AuditError::ConfigParse(format!(
                "report.format must be one of md, json (found {format})"
            )));
        }

        self.min_level()?;

        if let Some(project) = &self.project {
            if project.name.trim().is_empty() {
                return Err(AuditError::ConfigParse(
                    "project.name must be non-empty".to_string(),
                ));
            }
        }

        Ok(())
    }
}
