pub mod community;
pub mod structure;

use crate::types::checks::{is_license_alias, Priority, LICENSE_ALIASES};
use crate::types::report::{AnalysisResult, AuditResult, QualityLevel, Score};
use std::collections::HashSet;

pub use community::analyze_community_standards;
pub use structure::analyze_structure;

/// Runs both analyzers and combines them into the audited result.
///
/// Community standards weigh 0.6 against 0.4 for structure; any level above
/// raw additionally requires the compliance gate to pass.
pub fn audit_repository(existing_paths: &[String], existing_files: &[String]) -> AuditResult {
    let structure = analyze_structure(existing_paths);
    let community = analyze_community_standards(existing_files);

    let overall_score = overall(structure.score, community.score);
    let compliant = rsr_compliant(existing_files);
    let level = assign_level(overall_score, compliant);
    tracing::debug!(
        structure = structure.score,
        community = community.score,
        overall = overall_score,
        compliant,
        level = %level,
        "audit scores computed"
    );

    let recommendations = build_recommendations(&structure, &community, overall_score);

    AuditResult {
        structure,
        community,
        overall_score,
        level,
        recommendations,
    }
}

pub(crate) fn ratio_score(earned_points: u32, max_points: u32) -> Score {
    if max_points == 0 {
        return 0;
    }
    (f64::from(earned_points) * 100.0 / f64::from(max_points)).round() as Score
}

fn overall(structure: Score, community: Score) -> Score {
    (f64::from(structure) * 0.4 + f64::from(community) * 0.6).round() as Score
}

const GATE_FILES: [&str; 4] = [
    "readme.md",
    "security.md",
    "contributing.md",
    "code_of_conduct.md",
];

/// Compliance gate: the five community-health files every tier above raw
/// requires, matched case-insensitively. Independent of the score.
pub fn rsr_compliant(existing_files: &[String]) -> bool {
    let normalized: HashSet<String> = existing_files
        .iter()
        .map(|file| community::normalize_file(file))
        .collect();

    GATE_FILES.iter().all(|name| normalized.contains(*name))
        && LICENSE_ALIASES
            .iter()
            .any(|alias| normalized.contains(*alias))
}

fn assign_level(overall_score: Score, compliant: bool) -> QualityLevel {
    if !compliant {
        return QualityLevel::Raw;
    }
    match overall_score {
        95..=100 => QualityLevel::Rhodium,
        85..=94 => QualityLevel::Gold,
        75..=84 => QualityLevel::Silver,
        60..=74 => QualityLevel::Bronze,
        _ => QualityLevel::Raw,
    }
}

fn build_recommendations(
    structure: &AnalysisResult,
    community: &AnalysisResult,
    overall_score: Score,
) -> Vec<String> {
    let mut lines = Vec::new();
    push_remediations(&mut lines, structure, community, Priority::Required, "high");
    push_remediations(
        &mut lines,
        structure,
        community,
        Priority::Recommended,
        "medium",
    );
    lines.push(summary_line(overall_score));
    lines
}

fn push_remediations(
    lines: &mut Vec<String>,
    structure: &AnalysisResult,
    community: &AnalysisResult,
    priority: Priority,
    label: &str,
) {
    for item in structure
        .missing
        .iter()
        .filter(|item| item.priority == priority)
    {
        lines.push(format!("[{label}] Create {} ({})", item.path, item.purpose));
    }

    // The two missing license rows collapse into one actionable line.
    let mut license_noted = false;
    for item in community
        .missing
        .iter()
        .filter(|item| item.priority == priority)
    {
        if is_license_alias(item.path) {
            if !license_noted {
                lines.push(format!(
                    "[{label}] Add a license file (LICENSE, LICENSE.txt, or LICENSE.md)"
                ));
                license_noted = true;
            }
            continue;
        }
        lines.push(format!("[{label}] Add {} ({})", item.path, item.purpose));
    }
}

fn summary_line(overall_score: Score) -> String {
    let verdict = if overall_score >= 100 {
        "repository checklist is complete"
    } else if overall_score >= 80 {
        "repository checklist is mostly complete"
    } else if overall_score >= 60 {
        "repository checklist needs improvement"
    } else {
        "repository checklist is incomplete"
    };
    format!("Summary: {verdict} ({overall_score}/100)")
}
