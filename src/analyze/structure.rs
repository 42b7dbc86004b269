use super::ratio_score;
use crate::types::checks::STRUCTURE_CHECKS;
use crate::types::report::AnalysisResult;

/// Scores the directory layout against the structure registry.
///
/// Inputs are matched case-insensitively with trailing slashes ignored;
/// duplicates collapse to the first spelling supplied.
pub fn analyze_structure(existing_paths: &[String]) -> AnalysisResult {
    let normalized = normalize_inputs(existing_paths);
    let mut missing = Vec::new();
    let mut present = Vec::new();
    let mut max_points = 0u32;
    let mut earned_points = 0u32;

    for check in STRUCTURE_CHECKS.iter() {
        max_points += check.priority.weight();
        let target = normalize_dir(check.path);
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

fn normalize_dir(path: &str) -> String {
    path.trim().trim_end_matches('/').to_lowercase()
}

fn normalize_inputs(paths: &[String]) -> Vec<(String, String)> {
    let mut seen: Vec<(String, String)> = Vec::new();
    for raw in paths {
        let norm = normalize_dir(raw);
        if norm.is_empty() {
            continue;
        }
        if !seen.iter().any(|(existing, _)| existing == &norm) {
            seen.push((norm, raw.clone()));
        }
    }
    seen
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::checks::Priority;

    fn paths(values: &[&str]) -> Vec<String> {
        values.iter().map(|value| value.to_string()).collect()
    }

    #[test]
    fn empty_input_scores_zero_with_all_items_missing() {
        let result = analyze_structure(&[]);
        assert_eq!(result.score, 0);
        assert!(result.present.is_empty());
        assert_eq!(result.missing.len(), STRUCTURE_CHECKS.len());
    }

    #[test]
    fn full_registry_scores_one_hundred() {
        let result = analyze_structure(&paths(&[
            "src/",
            "tests/",
            "docs/",
            "examples/",
            "scripts/",
            ".github/",
            ".gitlab/",
            ".well-known/",
        ]));
        assert_eq!(result.score, 100);
        assert!(result.missing.is_empty());
    }

    #[test]
    fn matching_is_case_insensitive_and_slash_tolerant() {
        let result = analyze_structure(&paths(&["SRC/", "Tests"]));
        assert!(result.present.contains(&"SRC/".to_string()));
        assert!(result.present.contains(&"Tests".to_string()));
        assert!(!result
            .missing
            .iter()
            .any(|item| item.path == "src/" || item.path == "tests/"));
    }

    #[test]
    fn required_directories_outweigh_optional_ones() {
        let required = analyze_structure(&paths(&["src/", "tests/"]));
        let optional = analyze_structure(&paths(&[".gitlab/", ".github/"]));
        assert_eq!(required.score, 53);
        assert_eq!(optional.score, 5);
        assert!(required.score > optional.score);
    }

    #[test]
    fn duplicates_count_once_and_keep_first_spelling() {
        let result = analyze_structure(&paths(&["SRC/", "src", "src/"]));
        assert_eq!(result.present, vec!["SRC/".to_string()]);
        assert_eq!(result.score, analyze_structure(&paths(&["src/"])).score);
    }

    #[test]
    fn unknown_directories_do_not_affect_the_score() {
        let baseline = analyze_structure(&paths(&["src/"]));
        let with_noise = analyze_structure(&paths(&["src/", "vendor/", "node_modules/"]));
        assert_eq!(baseline.score, with_noise.score);
    }

    #[test]
    fn adding_a_registry_directory_never_lowers_the_score() {
        let mut supplied = vec!["src/".to_string()];
        let mut last = analyze_structure(&supplied).score;
        for check in STRUCTURE_CHECKS
            .iter()
            .filter(|check| check.priority != Priority::Optional)
        {
            supplied.push(check.path.to_string());
            let next = analyze_structure(&supplied).score;
            assert!(next >= last);
            last = next;
        }
    }
}
