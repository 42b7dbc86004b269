use crate::types::report::AuditResult;

pub fn to_json(result: &AuditResult) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analyze::audit_repository;

    #[test]
    fn json_report_exposes_every_top_level_field() {
        let result = audit_repository(
            &["src/".to_string(), "tests/".to_string()],
            &["README.md".to_string(), "LICENSE".to_string()],
        );

        let rendered = to_json(&result).expect("json should serialize");
        let parsed: serde_json::Value =
            serde_json::from_str(&rendered).expect("json should parse back");

        assert!(parsed.get("structure").is_some());
        assert!(parsed.get("community").is_some());
        assert_eq!(
            parsed["overall_score"].as_u64(),
            Some(u64::from(result.overall_score))
        );
        assert!(parsed["level"].is_string());
        assert!(parsed["recommendations"].is_array());
    }

    #[test]
    fn json_report_preserves_analysis_details() {
        let result = audit_repository(&["SRC/".to_string()], &[]);
        let rendered = to_json(&result).expect("json should serialize");
        let parsed: serde_json::Value =
            serde_json::from_str(&rendered).expect("json should parse back");

        assert_eq!(parsed["structure"]["present"][0].as_str(), Some("SRC/"));
        assert_eq!(
            parsed["structure"]["missing"][0]["priority"].as_str(),
            Some("required")
        );
        assert_eq!(parsed["level"].as_str(), Some("raw"));
    }
}
