use crate::types::report::{AnalysisResult, AuditResult};

pub fn to_markdown(result: &AuditResult) -> String {
    let mut output = String::new();
    output.push_str("# Repository Audit\n\n");

    output.push_str("## Overall Score\n\n");
    output.push_str(&format!("{}/100\n\n", result.overall_score));

    output.push_str("## Quality Level\n\n");
    output.push_str(&format!("{}\n\n", result.level));

    output.push_str("## Structure Analysis\n\n");
    push_analysis(&mut output, &result.structure);

    output.push_str("## Community Standards Analysis\n\n");
    push_analysis(&mut output, &result.community);

    output.push_str("## Recommendations\n\n");
    if result.recommendations.is_empty() {
        output.push_str("- none\n");
    } else {
        for recommendation in &result.recommendations {
            output.push_str(&format!("- {recommendation}\n"));
        }
    }

    output
}

fn push_analysis(output: &mut String, analysis: &AnalysisResult) {
    output.push_str(&format!("Score: {}/100\n\n", analysis.score));

    output.push_str("Present:\n");
    if analysis.present.is_empty() {
        output.push_str("- none\n");
    } else {
        for path in &analysis.present {
            output.push_str(&format!("- {path}\n"));
        }
    }
    output.push('\n');

    output.push_str("Missing:\n");
    if analysis.missing.is_empty() {
        output.push_str("- none\n");
    } else {
        for item in &analysis.missing {
            output.push_str(&format!(
                "- [{}] {} ({})\n",
                item.priority.as_str(),
                item.path,
                item.purpose
            ));
        }
    }
    output.push('\n');
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analyze::audit_repository;

    #[test]
    fn markdown_report_contains_fixed_sections() {
        let result = audit_repository(
            &["src/".to_string()],
            &["README.md".to_string(), "LICENSE".to_string()],
        );

        let rendered = to_markdown(&result);
        assert!(rendered.contains("## Overall Score"));
        assert!(rendered.contains("## Quality Level"));
        assert!(rendered.contains("## Structure Analysis"));
        assert!(rendered.contains("## Community Standards Analysis"));
        assert!(rendered.contains("## Recommendations"));
        assert!(rendered.contains(&format!("{}/100", result.overall_score)));
    }

    #[test]
    fn markdown_report_lists_missing_items_with_priority() {
        let result = audit_repository(&[], &[]);
        let rendered = to_markdown(&result);
        assert!(rendered.contains("- [required] src/"));
        assert!(rendered.contains("- [recommended] docs/"));
        assert!(rendered.contains("- [optional] MAINTAINERS.md"));
    }

    #[test]
    fn markdown_report_is_deterministic() {
        let result = audit_repository(&["src/".to_string()], &["README.md".to_string()]);
        assert_eq!(to_markdown(&result), to_markdown(&result));
    }
}
