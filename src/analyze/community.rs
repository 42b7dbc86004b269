use super::ratio_score;
use crate::types::checks::{is_license_alias, Priority, COMMUNITY_CHECKS, LICENSE_ALIASES};
use crate::types::report::AnalysisResult;

/// Scores community-health files against the community registry.
///
/// The license aliases (`LICENSE`, `LICENSE.txt`, `LICENSE.md`) are one
/// equivalence class: they contribute a single required-weight slot to the
/// maximum, and at most one earned slot no matter how many aliases appear.
/// Every alias actually supplied is reported in `present`; when none is,
/// both license registry rows land in `missing`.
pub fn analyze_community_standards(existing_files: &[String]) -> AnalysisResult {
    let normalized = normalize_inputs(existing_files);
    let mut missing = Vec::new();
    let mut present = Vec::new();
    let mut max_points = 0u32;
    let mut earned_points = 0u32;

    // Equivalence class first, so the generic loop never sees license rows.
    let license_weight = Priority::Required.weight();
    max_points += license_weight;
    let mut license_present = false;
    for (norm, raw) in &normalized {
        if LICENSE_ALIASES.contains(&norm.as_str()) {
            present.push(raw.clone());
            license_present = true;
        }
    }
    if license_present {
        earned_points += license_weight;
    } else {
        missing.extend(
            COMMUNITY_CHECKS
                .iter()
                .filter(|check| is_license_alias(check.path))
                .copied(),
        );
    }

    for check in COMMUNITY_CHECKS
        .iter()
        .filter(|check| !is_license_alias(check.path))
    {
        max_points += check.priority.weight();
        let target = normalize_file(check.path);
        match normalized.iter().find(|(norm, _)| *norm == target) {
            Some((_, raw)) => {
                earned_points += check.priority.weight();
                present.push(raw.clone());
            }
            None => missing.push(*check),
        }
    }

    AnalysisResult {
        missing,
        present,
        score: ratio_score(earned_points, max_points),
    }
}

/// Lowercases and converts backslashes; files keep their trailing characters.
pub(crate) fn normalize_file(path: &str) -> String {
    path.trim().replace('\\', "/").to_lowercase()
}

fn normalize_inputs(files: &[String]) -> Vec<(String, String)> {
    let mut seen: Vec<(String, String)> = Vec::new();
    for raw in files {
        let norm = normalize_file(raw);
        if norm.is_empty() {
            continue;
        }
        if !seen.iter().any(|(existing, _)| existing == &norm) {
            seen.push((norm, raw.clone()));
        }
    }
    seen
}
