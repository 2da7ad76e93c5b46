//! Brand types.

use gymstore_core::BrandId;
use serde::{Deserialize, Serialize};

use super::validation::{ValidationError, required, required_url};

/// A supplement brand shown on the brands page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Brand {
    pub id: BrandId,
    pub name: String,
    /// Logo image URL.
    pub logo: String,
    /// Shown in the featured brands strip on the home page.
    pub is_featured: bool,
}

/// Brand form submitted from the admin back-office.
#[derive(Debug, Clone, Deserialize)]
pub struct BrandDraft {
    pub name: String,
    pub logo: String,
    #[serde(default)]
    pub is_featured: bool,
}

impl BrandDraft {
    /// Validate the draft into a brand with the given id.
    ///
    /// # Errors
    ///
    /// Returns an error if the name is blank or the logo is not an absolute URL.
    pub fn into_brand(self, id: BrandId) -> Result<Brand, ValidationError> {
        Ok(Brand {
            id,
            name: required("name", &self.name)?,
            logo: required_url("logo", &self.logo)?,
            is_featured: self.is_featured,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_into_brand() {
        let draft = BrandDraft {
            name: " Redcon1 ".to_string(),
            logo: "https://picsum.photos/seed/redconlogo/200/100".to_string(),
            is_featured: false,
        };
        let brand = draft.into_brand(BrandId::new(10));
        assert_eq!(brand.map(|b| b.name), Ok("Redcon1".to_string()));
    }

    #[test]
    fn test_into_brand_rejects_bad_logo() {
        let draft = BrandDraft {
            name: "Redcon1".to_string(),
            logo: "logo.png".to_string(),
            is_featured: true,
        };
        assert!(matches!(
            draft.into_brand(BrandId::new(10)),
            Err(ValidationError::InvalidUrl { field: "logo", .. })
        ));
    }
}
