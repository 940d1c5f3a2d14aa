//! The in-memory catalog snapshot every discovery request runs against.

use std::collections::HashSet;
use std::path::Path;

use anyhow::Context;
use common::course::{Course, NamedEntity};
use common::filter_tags::LabelResolver;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::config::CatalogSource;
use crate::db_utils::catalog_rows::{
    CATEGORIES_TABLE, COURSES_SELECT, COURSES_TABLE, CourseRow, NAMED_SELECT, NamedRow, TOOLS_TABLE,
    normalize_course, normalize_named,
};
use crate::db_utils::rest_utils::RestClient;


#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogSnapshot {
    pub courses: Vec<Course>,
    pub tools: Vec<NamedEntity>,
    pub categories: Vec<NamedEntity>,
}

impl CatalogSnapshot {
    pub fn labels(&self) -> LabelResolver {
        LabelResolver::new(&self.tools, &self.categories)
    }

    /// Course ids must be unique; later duplicates are dropped.
    pub fn deduplicated(mut self) -> Self {
        let mut seen = HashSet::new();
        self.courses.retain(|course| {
            let fresh = seen.insert(course.id.clone());
            if !fresh {
                warn!("catalog: dropping duplicate course id {}", course.id);
            }
            fresh
        });
        self
    }

    pub async fn from_json_file(path: &Path) -> anyhow::Result<Self> {
        let text = tokio::fs::read_to_string(path)
            .await
            .with_context(|| format!("failed to read catalog snapshot {}", path.display()))?;
        let snapshot: CatalogSnapshot = serde_json::from_str(&text)
            .with_context(|| format!("failed to parse catalog snapshot {}", path.display()))?;
        Ok(snapshot.deduplicated())
    }

    pub async fn fetch(client: &RestClient) -> anyhow::Result<Self> {
        let (course_rows, tool_rows, category_rows) = futures::try_join!(
            client.select_all::<CourseRow>(COURSES_TABLE, COURSES_SELECT),
            client.select_all::<NamedRow>(TOOLS_TABLE, NAMED_SELECT),
            client.select_all::<NamedRow>(CATEGORIES_TABLE, NAMED_SELECT),
        )?;

        let snapshot = CatalogSnapshot {
            courses: course_rows.into_iter().map(normalize_course).collect::<anyhow::Result<_>>()?,
            tools: tool_rows.into_iter().map(normalize_named).collect::<anyhow::Result<_>>()?,
            categories: category_rows.into_iter().map(normalize_named).collect::<anyhow::Result<_>>()?,
        };
        Ok(snapshot.deduplicated())
    }

    pub async fn load(source: &CatalogSource) -> anyhow::Result<Self> {
        let snapshot = match source {
            CatalogSource::File(path) => {
                info!("Loading catalog snapshot from {}", path.display());
                Self::from_json_file(path).await?
            }
            CatalogSource::Rest { url, api_key } => {
                info!("Loading catalog from {}", url);
                Self::fetch(&RestClient::new(url.clone(), api_key.clone())).await?
            }
        };
        info!(
            "Catalog loaded: {} courses, {} tools, {} categories",
            snapshot.courses.len(),
            snapshot.tools.len(),
            snapshot.categories.len(),
        );
        Ok(snapshot)
    }
}
