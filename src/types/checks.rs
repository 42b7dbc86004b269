use serde::Serialize;

/// Scoring weight band for a checklist entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Required,
    Recommended,
    Optional,
}

impl Priority {
    pub fn weight(self) -> u32 {
        match self {
            Priority::Required => 10,
            Priority::Recommended => 5,
            Priority::Optional => 1,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Priority::Required => "required",
            Priority::Recommended => "recommended",
            Priority::Optional => "optional",
        }
    }
}

/// One expected directory or file in a checklist registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CheckItem {
    pub path: &'static str,
    pub purpose: &'static str,
    pub priority: Priority,
}

/// Expected directory layout. Order is fixed; paths carry a trailing slash.
pub const STRUCTURE_CHECKS: [CheckItem; 8] = [
    CheckItem {
        path: "src/",
        purpose: "primary source code",
        priority: Priority::Required,
    },
    CheckItem {
        path: "tests/",
        purpose: "automated test suites",
        priority: Priority::Required,
    },
    CheckItem {
        path: "docs/",
        purpose: "project documentation",
        priority: Priority::Recommended,
    },
    CheckItem {
        path: "examples/",
        purpose: "runnable usage examples",
        priority: Priority::Recommended,
    },
    CheckItem {
        path: "scripts/",
        purpose: "maintenance and release scripts",
        priority: Priority::Recommended,
    },
    CheckItem {
        path: ".github/",
        purpose: "GitHub workflows and issue templates",
        priority: Priority::Optional,
    },
    CheckItem {
        path: ".gitlab/",
        purpose: "GitLab CI and merge request templates",
        priority: Priority::Optional,
    },
    CheckItem {
        path: ".well-known/",
        purpose: "machine-readable site metadata",
        priority: Priority::Optional,
    },
];

/// Expected community-health files.
///
/// `LICENSE` and `LICENSE.txt` are two registry rows for one requirement:
/// scoring collapses them (plus `LICENSE.md`) into a single slot.
pub const COMMUNITY_CHECKS: [CheckItem; 9] = [
    CheckItem {
        path: "LICENSE",
        purpose: "license grant",
        priority: Priority::Required,
    },
    CheckItem {
        path: "LICENSE.txt",
        purpose: "license grant",
        priority: Priority::Required,
    },
    CheckItem {
        path: "README.md",
        purpose: "project overview and entry point",
        priority: Priority::Required,
    },
    CheckItem {
        path: "CONTRIBUTING.md",
        purpose: "contribution guidelines",
        priority: Priority::Recommended,
    },
    CheckItem {
        path: "CODE_OF_CONDUCT.md",
        purpose: "community behavior expectations",
        priority: Priority::Recommended,
    },
    CheckItem {
        path: "SECURITY.md",
        purpose: "vulnerability reporting policy",
        priority: Priority::Recommended,
    },
    CheckItem {
        path: "CHANGELOG.md",
        purpose: "release history",
        priority: Priority::Recommended,
    },
    CheckItem {
        path: "MAINTAINERS.md",
        purpose: "maintainer roster",
        priority: Priority::Optional,
    },
    CheckItem {
        path: ".well-known/security.txt",
        purpose: "machine-readable security contact",
        priority: Priority::Optional,
    },
];

/// Interchangeable evidence of a license file, normalized form.
pub const LICENSE_ALIASES: [&str; 3] = ["license", "license.txt", "license.md"];

pub fn is_license_alias(path: &str) -> bool {
    LICENSE_ALIASES.contains(&path.to_lowercase().as_str())
}
