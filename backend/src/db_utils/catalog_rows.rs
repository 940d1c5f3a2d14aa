//! Raw catalog rows as the REST backend returns them, and their normalization
//! into discovery models.

use std::collections::BTreeSet;

use common::course::{Badge, Course, Difficulty, LEGACY_BADGES, NamedEntity};
use serde::Deserialize;
use tracing::{debug, warn};

pub const COURSES_TABLE: &str = "courses";
pub const COURSES_SELECT: &str = "id,title,description,badges,category_id,difficulty,course_tools(tool_id)";
pub const TOOLS_TABLE: &str = "tools";
pub const CATEGORIES_TABLE: &str = "categories";
pub const NAMED_SELECT: &str = "id,name";


#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CourseRow {
    pub id: serde_json::Value,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub badges: Option<Vec<String>>,
    #[serde(default)]
    pub category_id: Option<serde_json::Value>,
    #[serde(default)]
    pub difficulty: Option<String>,
    #[serde(default)]
    pub course_tools: Option<Vec<CourseToolRow>>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CourseToolRow {
    pub tool_id: serde_json::Value,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct NamedRow {
    pub id: serde_json::Value,
    pub name: String,
}


/// Ids come back as uuid strings or integers depending on the table.
pub fn id_string(value: &serde_json::Value) -> anyhow::Result<String> {
    match value {
        serde_json::Value::String(s) => Ok(s.clone()),
        serde_json::Value::Number(n) => Ok(n.to_string()),
        _ => anyhow::bail!("Invalid id value from catalog: {:#?}", value),
    }
}

pub fn normalize_course(row: CourseRow) -> anyhow::Result<Course> {
    let id = id_string(&row.id)?;

    let mut badges = BTreeSet::new();
    for badge in row.badges.unwrap_or_default() {
        match badge.parse::<Badge>() {
            Ok(badge) => {
                badges.insert(badge);
            }
            Err(_) if LEGACY_BADGES.contains(&badge.trim().to_ascii_lowercase().as_str()) => {
                debug!("course {}: dropping legacy badge {:?}", id, badge);
            }
            Err(e) => warn!("course {}: {}", id, e),
        }
    }

    let difficulty = match row.difficulty.as_deref().map(str::trim) {
        None | Some("") => None,
        Some(raw) => match raw.parse::<Difficulty>() {
            Ok(level) => Some(level),
            Err(e) => {
                warn!("course {}: {}", id, e);
                None
            }
        },
    };

    let category_id = match &row.category_id {
        None | Some(serde_json::Value::Null) => None,
        Some(value) => Some(id_string(value)?),
    };

    let tool_ids = row
        .course_tools
        .unwrap_or_default()
        .iter()
        .map(|link| id_string(&link.tool_id))
        .collect::<anyhow::Result<BTreeSet<_>>>()?;

    Ok(Course {
        id,
        title: row.title,
        description: row.description.unwrap_or_default(),
        badges,
        tool_ids,
        category_id,
        difficulty,
    })
}

pub fn normalize_named(row: NamedRow) -> anyhow::Result<NamedEntity> {
    Ok(NamedEntity {
        id: id_string(&row.id)?,
        name: row.name,
    })
}
