//! Knowledge-base article types.

use gymstore_core::ArticleId;
use serde::{Deserialize, Serialize};

use super::validation::{ValidationError, required, required_url};

/// Category of supplement knowledge articles.
pub const SUPPLEMENT_KNOWLEDGE: &str = "Kiến thức Supplement";

/// Category of nutrition knowledge articles.
pub const NUTRITION_KNOWLEDGE: &str = "Kiến thức Dinh dưỡng";

/// A knowledge article linking out to the full text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Article {
    pub id: ArticleId,
    pub title: String,
    /// `dd/mm/yyyy`.
    pub date: String,
    pub snippet: String,
    pub image: String,
    pub category: String,
    /// Link to the full article.
    pub url: String,
}

/// Article form submitted from the admin back-office.
#[derive(Debug, Clone, Deserialize)]
pub struct ArticleDraft {
    pub title: String,
    pub category: String,
    pub snippet: String,
    pub image: String,
    pub url: String,
}

/// Validated article fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArticleFields {
    pub title: String,
    pub category: String,
    pub snippet: String,
    pub image: String,
    pub url: String,
}

impl ArticleDraft {
    /// Validate the draft.
    ///
    /// # Errors
    ///
    /// Returns an error if a text field is blank or a URL field is malformed.
    pub fn validate(&self) -> Result<ArticleFields, ValidationError> {
        Ok(ArticleFields {
            title: required("title", &self.title)?,
            category: required("category", &self.category)?,
            snippet: required("snippet", &self.snippet)?,
            image: required_url("image", &self.image)?,
            url: required_url("url", &self.url)?,
        })
    }
}

impl Article {
    /// Create an article from validated fields.
    #[must_use]
    pub fn from_fields(id: ArticleId, date: String, fields: ArticleFields) -> Self {
        Self {
            id,
            title: fields.title,
            date,
            snippet: fields.snippet,
            image: fields.image,
            category: fields.category,
            url: fields.url,
        }
    }

    /// Overwrite the editable fields, keeping the id and publish date.
    pub fn apply(&mut self, fields: ArticleFields) {
        self.title = fields.title;
        self.category = fields.category;
        self.snippet = fields.snippet;
        self.image = fields.image;
        self.url = fields.url;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_requires_every_field() {
        let draft = ArticleDraft {
            title: "BMR là gì?".to_string(),
            category: NUTRITION_KNOWLEDGE.to_string(),
            snippet: String::new(),
            image: "https://picsum.photos/seed/article3/400/200".to_string(),
            url: "https://tamanhhospital.vn/bmr".to_string(),
        };
        assert_eq!(
            draft.validate(),
            Err(ValidationError::Required { field: "snippet" })
        );
    }
}
