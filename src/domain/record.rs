//! Bibliographic record view consumed by the call-number engine.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum ContributorRole {
    #[default]
    Author,
    Editor,
    Translator,
    Compiler,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct Contributor {
    /// Display name, e.g. "García Márquez, Gabriel"
    pub name: String,
    #[serde(default)]
    pub role: ContributorRole,
}

/// Plain metadata of a bibliographic record. Every field may be blank.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
#[serde(default)]
pub struct RecordView {
    pub title: String,
    pub subtitle: Option<String>,
    pub notes: Option<String>,
    pub series: Option<String>,
    pub publish_place: Option<String>,
    pub publish_year: Option<i32>,
    pub publisher: Option<String>,
    /// Contributors in catalogue order
    pub contributors: Vec<Contributor>,
}

impl RecordView {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Default::default()
        }
    }

    pub fn with_author(mut self, name: impl Into<String>) -> Self {
        self.contributors.push(Contributor {
            name: name.into(),
            role: ContributorRole::Author,
        });
        self
    }

    /// Display name of the first contributor whose role is author.
    pub fn first_author(&self) -> Option<&str> {
        self.contributors
            .iter()
            .filter(|c| c.role == ContributorRole::Author)
            .map(|c| c.name.trim())
            .find(|name| !name.is_empty())
    }

    pub fn publisher_name(&self) -> Option<&str> {
        non_blank(self.publisher.as_deref())
    }

    /// Publication year as exactly four digits, if it can be written that way.
    pub fn year(&self) -> Option<String> {
        self.publish_year
            .filter(|y| (1..=9999).contains(y))
            .map(|y| format!("{:04}", y))
    }

    /// Secondary text searched when the subjects do not classify the record.
    pub fn descriptive_text(&self) -> String {
        [
            self.series.as_deref(),
            self.publish_place.as_deref(),
            self.notes.as_deref(),
            Some(self.title.as_str()),
            self.subtitle.as_deref(),
        ]
        .into_iter()
        .filter_map(non_blank)
        .collect::<Vec<_>>()
        .join(" ")
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}
