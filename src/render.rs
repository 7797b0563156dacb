//! HTML pages. All interpolated values go through askama's HTML escaping.

use askama::Template;

use crate::client::{Decoded, Error};
use crate::core::models::Record;

#[derive(Template)]
#[template(path = "table.html")]
struct Table<'a> {
    rows: &'a [(String, String)],
}

/// Renders `rows` as a two-column table, one `<tr>` per row.
pub fn table(rows: &[(String, String)]) -> Result<String, askama::Error> {
    Table { rows }.render()
}

#[derive(Template)]
#[template(path = "login.html")]
pub struct LoginPage {
    pub sign_in_url: String,
}

#[derive(Template)]
#[template(path = "handoff.html")]
pub struct HandoffPage {
    pub location: String,
}

#[derive(Template)]
#[template(path = "error.html")]
pub struct ErrorPage {
    pub title: String,
    pub message: String,
}

impl ErrorPage {
    pub fn new(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            message: message.into(),
        }
    }
}

/// One resource on the data page. A failed fetch keeps its section and shows why.
#[derive(Debug, Clone)]
pub struct Section {
    pub title: String,
    pub table: String,
    pub notice: Option<String>,
    pub failure: Option<String>,
}

impl Section {
    pub fn from_result<R: Record>(
        title: &str,
        result: Result<Decoded<R>, Error>,
    ) -> Result<Self, askama::Error> {
        let section = match result {
            Ok(Decoded::Parsed(record)) => Self {
                title: title.to_string(),
                table: table(&record.rows())?,
                notice: None,
                failure: None,
            },
            Ok(Decoded::Malformed { value, reason }) => Self {
                title: title.to_string(),
                table: table(&value.rows())?,
                notice: Some(format!("The response could not be decoded ({}).", reason)),
                failure: None,
            },
            Err(e) => Self {
                title: title.to_string(),
                table: String::new(),
                notice: None,
                failure: Some(e.to_string()),
            },
        };
        Ok(section)
    }
}

#[derive(Template)]
#[template(path = "data.html")]
pub struct DataPage {
    pub sections: Vec<Section>,
}
