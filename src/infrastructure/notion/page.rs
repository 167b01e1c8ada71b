//! Wire types for the Notion `POST /v1/pages` call.

use serde::{Deserialize, Serialize};

use crate::domain::entities::ContactRecord;

/// Body of a page-create request targeting a database.
#[derive(Debug, Serialize)]
pub struct PageRequest<'a> {
    pub parent: Parent<'a>,
    pub properties: ContactProperties<'a>,
}

#[derive(Debug, Serialize)]
pub struct Parent<'a> {
    pub database_id: &'a str,
}

/// Database properties of a contact record, keyed by column name.
#[derive(Debug, Serialize)]
pub struct ContactProperties<'a> {
    #[serde(rename = "Name")]
    pub name: TitleProperty<'a>,
    #[serde(rename = "Phone")]
    pub phone: RichTextProperty<'a>,
    #[serde(rename = "Email")]
    pub email: EmailProperty<'a>,
    #[serde(rename = "Submission Date")]
    pub submission_date: DateProperty,
}

#[derive(Debug, Serialize)]
pub struct TitleProperty<'a> {
    pub title: Vec<RichText<'a>>,
}

#[derive(Debug, Serialize)]
pub struct RichTextProperty<'a> {
    pub rich_text: Vec<RichText<'a>>,
}

#[derive(Debug, Serialize)]
pub struct RichText<'a> {
    pub text: TextContent<'a>,
}

#[derive(Debug, Serialize)]
pub struct TextContent<'a> {
    pub content: &'a str,
}

#[derive(Debug, Serialize)]
pub struct EmailProperty<'a> {
    pub email: &'a str,
}

#[derive(Debug, Serialize)]
pub struct DateProperty {
    pub date: DateValue,
}

#[derive(Debug, Serialize)]
pub struct DateValue {
    pub start: String,
}

impl<'a> PageRequest<'a> {
    /// Maps `record` onto the contact database columns.
    pub fn new(database_id: &'a str, record: &'a ContactRecord) -> Self {
        Self {
            parent: Parent { database_id },
            properties: ContactProperties {
                name: TitleProperty {
                    title: vec![RichText::plain(&record.name)],
                },
                phone: RichTextProperty {
                    rich_text: vec![RichText::plain(&record.phone)],
                },
                email: EmailProperty {
                    email: &record.email,
                },
                submission_date: DateProperty {
                    date: DateValue {
                        start: record.submitted_at_iso(),
                    },
                },
            },
        }
    }
}

impl<'a> RichText<'a> {
    fn plain(content: &'a str) -> Self {
        Self {
            text: TextContent { content },
        }
    }
}

/// Error object returned by the Notion API on non-2xx responses.
#[derive(Debug, Deserialize)]
pub struct NotionErrorBody {
    #[serde(default)]
    pub code: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}
