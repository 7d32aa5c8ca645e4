use serde::{Deserialize, Serialize};

/// The six fixed Ishikawa cause categories.
///
/// The category set and its order are part of the diagram contract: renderers map
/// each category to a fixed branch slot, so this enum is the single source of
/// truth for both naming and ordering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    Machine,
    Method,
    Material,
    Manpower,
    Measurement,
    Environment,
}

impl Category {
    /// All categories in canonical order: three top branches, then three bottom branches.
    pub const ALL: [Category; 6] = [
        Category::Machine,
        Category::Method,
        Category::Material,
        Category::Manpower,
        Category::Measurement,
        Category::Environment,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Category::Machine => "Machine",
            Category::Method => "Method",
            Category::Material => "Material",
            Category::Manpower => "Manpower",
            Category::Measurement => "Measurement",
            Category::Environment => "Environment",
        }
    }
}

/// Cause lists for the six fixed categories.
///
/// Missing slots deserialize as empty lists and unknown keys are ignored, so a
/// front end can submit any subset of `{"Machine": [...], ...}` without
/// negotiating a schema version.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CauseCategories {
    #[serde(default, rename = "Machine")]
    pub machine: Vec<String>,
    #[serde(default, rename = "Method")]
    pub method: Vec<String>,
    #[serde(default, rename = "Material")]
    pub material: Vec<String>,
    #[serde(default, rename = "Manpower")]
    pub manpower: Vec<String>,
    #[serde(default, rename = "Measurement")]
    pub measurement: Vec<String>,
    #[serde(default, rename = "Environment")]
    pub environment: Vec<String>,
}

impl CauseCategories {
    pub fn causes(&self, category: Category) -> &[String] {
        match category {
            Category::Machine => &self.machine,
            Category::Method => &self.method,
            Category::Material => &self.material,
            Category::Manpower => &self.manpower,
            Category::Measurement => &self.measurement,
            Category::Environment => &self.environment,
        }
    }

    pub fn causes_mut(&mut self, category: Category) -> &mut Vec<String> {
        match category {
            Category::Machine => &mut self.machine,
            Category::Method => &mut self.method,
            Category::Material => &mut self.material,
            Category::Manpower => &mut self.manpower,
            Category::Measurement => &mut self.measurement,
            Category::Environment => &mut self.environment,
        }
    }

    pub fn is_empty(&self) -> bool {
        Category::ALL.iter().all(|&c| self.causes(c).is_empty())
    }
}

/// Splits a free-text blob into trimmed, non-blank cause lines.
///
/// Front ends typically collect each category as one multi-line text area;
/// blank lines are not meaningful causes and must be dropped before the lists
/// reach the diagram renderer.
pub fn parse_lines(text: &str) -> Vec<String> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

/// Document-control header fields.
///
/// Dates are plain text: the input layer is responsible for coercing dates to a
/// consistent textual representation before building the record.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Header {
    #[serde(default)]
    pub document_no: String,
    #[serde(default)]
    pub change_no: String,
    #[serde(default)]
    pub issue_date: String,
    #[serde(default)]
    pub rev_no: String,
    #[serde(default)]
    pub product_name: String,
    #[serde(default)]
    pub rma_no: String,
    #[serde(default)]
    pub product_model: String,
    #[serde(default)]
    pub received_date: String,
    #[serde(default)]
    pub notification_date: String,
    #[serde(default)]
    pub serial_imei: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamMember {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub department: String,
}

/// One row of a containment/corrective/preventive action list.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionItem {
    #[serde(default)]
    pub action: String,
    #[serde(default)]
    pub responsible: String,
    #[serde(default)]
    pub date: String,
}

/// The 5W-style investigation section (WHAT / HOW / WHO / WHERE).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Investigation {
    #[serde(default)]
    pub what: String,
    #[serde(default)]
    pub how: String,
    #[serde(default)]
    pub who: String,
    #[serde(default)]
    pub r#where: String,
}

/// The complete input to report assembly.
///
/// No field is validated here: absent text renders as empty cells, and the
/// input layer owns the 1-10 bounds on the repeated sections. The record is
/// never mutated after construction.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportRecord {
    #[serde(default)]
    pub header: Header,
    #[serde(default)]
    pub problem_description: String,
    #[serde(default)]
    pub team_members: Vec<TeamMember>,
    #[serde(default)]
    pub containment_actions: Vec<ActionItem>,
    #[serde(default)]
    pub investigation: Investigation,
    #[serde(default)]
    pub cause_categories: CauseCategories,
    #[serde(default)]
    pub root_cause: String,
    #[serde(default)]
    pub corrective_actions: Vec<ActionItem>,
    #[serde(default)]
    pub preventive_actions: Vec<ActionItem>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_lines_drops_blank_and_whitespace_entries() {
        let lines = parse_lines("worn tooling\n\n   \n  loose fixture  \n");
        assert_eq!(lines, vec!["worn tooling".to_string(), "loose fixture".to_string()]);
    }

    #[test]
    fn parse_lines_of_empty_text_is_empty() {
        assert!(parse_lines("").is_empty());
        assert!(parse_lines("\n\n").is_empty());
    }

    #[test]
    fn categories_default_to_empty_slots() {
        let cats = CauseCategories::default();
        assert!(cats.is_empty());
        for cat in Category::ALL {
            assert!(cats.causes(cat).is_empty());
        }
    }

    #[test]
    fn categories_deserialize_with_missing_and_unknown_keys() {
        let json = r#"{ "Machine": ["spindle wear"], "Climate": ["ignored"] }"#;
        let cats: CauseCategories = serde_json::from_str(json).unwrap();
        assert_eq!(cats.machine, vec!["spindle wear".to_string()]);
        assert!(cats.method.is_empty());
        assert!(cats.environment.is_empty());
    }

    #[test]
    fn category_order_is_three_top_then_three_bottom() {
        let names: Vec<&str> = Category::ALL.iter().map(|c| c.as_str()).collect();
        assert_eq!(
            names,
            ["Machine", "Method", "Material", "Manpower", "Measurement", "Environment"]
        );
    }

    #[test]
    fn record_deserializes_from_sparse_json() {
        let json = r#"{
            "header": { "document_no": "FM2-011a", "rev_no": "3" },
            "problem_description": "Unit fails power-on self test",
            "team_members": [ { "name": "A. Reyes", "department": "QA" } ]
        }"#;
        let record: ReportRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.header.document_no, "FM2-011a");
        assert_eq!(record.team_members.len(), 1);
        assert!(record.containment_actions.is_empty());
        assert!(record.cause_categories.is_empty());
    }
}
