//! Product catalog types.

use gymstore_core::{Price, ProductId, ReviewId};
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

use super::validation::{ValidationError, non_blank, optional, required, required_url};
use crate::navigation::{FilterKind, ListingFilter};

/// A sellable product.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub sku: String,
    pub name: String,
    /// Image URLs, main image first. Never empty.
    pub images: Vec<String>,
    pub price: Decimal,
    /// Pre-discount price, shown struck through.
    pub old_price: Option<Decimal>,
    /// Average review rating, one decimal place.
    pub rating: f64,
    /// Number of reviews.
    pub reviews: u32,
    pub sold: u32,
    pub stock_quantity: u32,
    pub category: String,
    pub sub_category: Option<String>,
    pub brand: String,
    pub in_stock: bool,
    pub description: String,
    pub sizes: Vec<String>,
    pub flavors: Vec<String>,
    pub product_reviews: Vec<Review>,
    pub is_featured: bool,
}

impl Product {
    /// Create a product from validated form fields.
    #[must_use]
    pub fn from_fields(id: ProductId, fields: ProductFields) -> Self {
        let mut product = Self {
            id,
            sku: String::new(),
            name: String::new(),
            images: Vec::new(),
            price: Decimal::ZERO,
            old_price: None,
            rating: 0.0,
            reviews: 0,
            sold: 0,
            stock_quantity: 0,
            category: String::new(),
            sub_category: None,
            brand: String::new(),
            in_stock: false,
            description: String::new(),
            sizes: Vec::new(),
            flavors: Vec::new(),
            product_reviews: Vec::new(),
            is_featured: false,
        };
        product.apply(fields);
        product
    }

    /// Overwrite the editable fields, keeping reviews, sales and the
    /// featured flag.
    pub fn apply(&mut self, fields: ProductFields) {
        self.sku = fields.sku;
        self.name = fields.name;
        self.images = fields.images;
        self.price = fields.price;
        self.old_price = fields.old_price;
        self.stock_quantity = fields.stock_quantity;
        self.in_stock = fields.stock_quantity > 0;
        self.category = fields.category;
        self.sub_category = fields.sub_category;
        self.brand = fields.brand;
        self.description = fields.description;
        self.sizes = fields.sizes;
        self.flavors = fields.flavors;
    }

    /// The main product image.
    #[must_use]
    pub fn primary_image(&self) -> Option<&str> {
        self.images.first().map(String::as_str)
    }

    /// Display price in the store currency.
    #[must_use]
    pub fn display_price(&self) -> String {
        Price::vnd(self.price).display()
    }

    /// Discount relative to `old_price`, rounded to a whole percent.
    #[must_use]
    pub fn discount_percentage(&self) -> Option<Decimal> {
        let old = self.old_price.filter(|old| *old > self.price && !old.is_zero())?;
        Some(round_half_up((old - self.price) * Decimal::ONE_HUNDRED / old))
    }

    /// Whether the product belongs on a listing with `filter`.
    ///
    /// Category filters match either the category or the sub-category, so
    /// menu entries like "Pre-Workout" list the right products.
    #[must_use]
    pub fn matches_filter(&self, filter: &ListingFilter) -> bool {
        match filter.kind {
            FilterKind::Category => {
                self.category == filter.value
                    || self.sub_category.as_deref() == Some(filter.value.as_str())
            }
            FilterKind::Brand => self.brand == filter.value,
        }
    }

    /// Case-insensitive match against name, brand or SKU.
    #[must_use]
    pub fn matches_query(&self, query: &str) -> bool {
        let query = query.trim().to_lowercase();
        if query.is_empty() {
            return false;
        }
        [&self.name, &self.brand, &self.sku]
            .iter()
            .any(|field| field.to_lowercase().contains(&query))
    }

    /// Prepend a review and recompute the review count and average rating.
    pub fn add_review(&mut self, review: Review) {
        self.product_reviews.insert(0, review);
        self.reviews = u32::try_from(self.product_reviews.len()).unwrap_or(u32::MAX);
        self.rating = average_rating(&self.product_reviews);
    }
}

/// Round to a whole number, halves away from zero.
fn round_half_up(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
}

/// Mean rating rounded to one decimal place, `0.0` without reviews.
fn average_rating(reviews: &[Review]) -> f64 {
    if reviews.is_empty() {
        return 0.0;
    }
    let total: u32 = reviews.iter().map(|r| u32::from(r.rating)).sum();
    let count = u32::try_from(reviews.len()).unwrap_or(u32::MAX);
    let mean = f64::from(total) / f64::from(count);
    (mean * 10.0).round() / 10.0
}

/// A customer review.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Review {
    pub id: ReviewId,
    pub author: String,
    /// 1 to 5 stars.
    pub rating: u8,
    pub comment: String,
    /// `dd/mm/yyyy`.
    pub date: String,
}

/// Review form submitted from a product page.
#[derive(Debug, Clone, Deserialize)]
pub struct NewReview {
    pub author: String,
    pub rating: u8,
    pub comment: String,
}

impl NewReview {
    /// Validate and turn into a stored review.
    ///
    /// # Errors
    ///
    /// Returns an error if the author or comment is blank or the rating is
    /// not between 1 and 5.
    pub fn into_review(self, id: ReviewId, date: String) -> Result<Review, ValidationError> {
        if !(1..=5).contains(&self.rating) {
            return Err(ValidationError::OutOfRange {
                field: "rating",
                expected: "must be between 1 and 5",
            });
        }
        Ok(Review {
            id,
            author: required("author", &self.author)?,
            rating: self.rating,
            comment: required("comment", &self.comment)?,
            date,
        })
    }
}

/// Product form submitted from the admin back-office.
#[derive(Debug, Clone, Deserialize)]
pub struct ProductDraft {
    pub sku: String,
    pub name: String,
    /// Price before discount.
    pub original_price: Decimal,
    /// Discount in percent, 0 to 100.
    #[serde(default)]
    pub discount_percentage: Option<Decimal>,
    pub stock_quantity: u32,
    pub images: Vec<String>,
    pub category: String,
    #[serde(default)]
    pub sub_category: Option<String>,
    pub brand: String,
    pub description: String,
    #[serde(default)]
    pub sizes: Vec<String>,
    #[serde(default)]
    pub flavors: Vec<String>,
}

/// Validated product fields with the selling price worked out.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductFields {
    pub sku: String,
    pub name: String,
    pub images: Vec<String>,
    pub price: Decimal,
    pub old_price: Option<Decimal>,
    pub stock_quantity: u32,
    pub category: String,
    pub sub_category: Option<String>,
    pub brand: String,
    pub description: String,
    pub sizes: Vec<String>,
    pub flavors: Vec<String>,
}

impl ProductDraft {
    /// Validate the draft.
    ///
    /// # Errors
    ///
    /// Returns the first failing check: blank required fields, a
    /// non-positive price, a discount outside 0-100, no images, or an image
    /// that is not an absolute URL.
    pub fn validate(&self) -> Result<ProductFields, ValidationError> {
        let sku = required("sku", &self.sku)?;
        let name = required("name", &self.name)?;

        if self.original_price <= Decimal::ZERO {
            return Err(ValidationError::OutOfRange {
                field: "original_price",
                expected: "must be a positive number",
            });
        }

        let discount = self.discount_percentage.unwrap_or(Decimal::ZERO);
        if discount < Decimal::ZERO || discount > Decimal::ONE_HUNDRED {
            return Err(ValidationError::OutOfRange {
                field: "discount_percentage",
                expected: "must be between 0 and 100",
            });
        }

        let images = non_blank(&self.images);
        if images.is_empty() {
            return Err(ValidationError::Required { field: "images" });
        }
        for image in &images {
            required_url("images", image)?;
        }

        let category = required("category", &self.category)?;
        let brand = required("brand", &self.brand)?;
        let description = required("description", &self.description)?;

        let (price, old_price) = if discount.is_zero() {
            (self.original_price, None)
        } else {
            let discounted =
                self.original_price * (Decimal::ONE_HUNDRED - discount) / Decimal::ONE_HUNDRED;
            (round_half_up(discounted), Some(self.original_price))
        };

        Ok(ProductFields {
            sku,
            name,
            images,
            price,
            old_price,
            stock_quantity: self.stock_quantity,
            category,
            sub_category: optional(self.sub_category.as_deref()),
            brand,
            description,
            sizes: non_blank(&self.sizes),
            flavors: non_blank(&self.flavors),
        })
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn draft() -> ProductDraft {
        ProductDraft {
            sku: "TR-CRE-450G".to_string(),
            name: " Thorne Creatine 450g ".to_string(),
            original_price: Decimal::from(1_000_000),
            discount_percentage: None,
            stock_quantity: 12,
            images: vec![
                "https://picsum.photos/seed/product13/400/400".to_string(),
                "  ".to_string(),
            ],
            category: "Tăng sức mạnh".to_string(),
            sub_category: Some("Creatine".to_string()),
            brand: "Thorne Research".to_string(),
            description: "Creatine monohydrate.".to_string(),
            sizes: Vec::new(),
            flavors: Vec::new(),
        }
    }

    fn review(id: i32, rating: u8) -> Review {
        Review {
            id: ReviewId::new(id),
            author: "Lê Minh Khôi".to_string(),
            rating,
            comment: "Good".to_string(),
            date: "15/07/2023".to_string(),
        }
    }

    #[test]
    fn test_validate_without_discount() {
        let fields = draft().validate().unwrap();
        assert_eq!(fields.name, "Thorne Creatine 450g");
        assert_eq!(fields.price, Decimal::from(1_000_000));
        assert_eq!(fields.old_price, None);
        assert_eq!(fields.images.len(), 1);
    }

    #[test]
    fn test_validate_applies_discount() {
        let mut d = draft();
        d.discount_percentage = Some(Decimal::from(15));
        let fields = d.validate().unwrap();
        assert_eq!(fields.price, Decimal::from(850_000));
        assert_eq!(fields.old_price, Some(Decimal::from(1_000_000)));
    }

    #[test]
    fn test_discounted_price_rounds_halves_up() {
        let mut d = draft();
        d.original_price = Decimal::from(1_000_001);
        d.discount_percentage = Some(Decimal::from(50));
        let fields = d.validate().unwrap();
        assert_eq!(fields.price, Decimal::from(500_001));
    }

    #[test]
    fn test_validate_rejects_bad_input() {
        let mut d = draft();
        d.sku = " ".to_string();
        assert_eq!(d.validate(), Err(ValidationError::Required { field: "sku" }));

        let mut d = draft();
        d.original_price = Decimal::ZERO;
        assert!(matches!(
            d.validate(),
            Err(ValidationError::OutOfRange { field: "original_price", .. })
        ));

        let mut d = draft();
        d.discount_percentage = Some(Decimal::from(101));
        assert!(matches!(
            d.validate(),
            Err(ValidationError::OutOfRange { field: "discount_percentage", .. })
        ));

        let mut d = draft();
        d.images = vec![String::new()];
        assert_eq!(d.validate(), Err(ValidationError::Required { field: "images" }));

        let mut d = draft();
        d.images = vec!["picsum/product.png".to_string()];
        assert!(matches!(d.validate(), Err(ValidationError::InvalidUrl { .. })));
    }

    #[test]
    fn test_in_stock_follows_quantity() {
        let mut d = draft();
        d.stock_quantity = 0;
        let product = Product::from_fields(ProductId::new(16), d.validate().unwrap());
        assert!(!product.in_stock);
    }

    #[test]
    fn test_filter_matches_sub_category_and_brand() {
        let product = Product::from_fields(ProductId::new(16), draft().validate().unwrap());
        assert!(product.matches_filter(&ListingFilter::category("Tăng sức mạnh")));
        assert!(product.matches_filter(&ListingFilter::category("Creatine")));
        assert!(!product.matches_filter(&ListingFilter::category("Whey Protein")));
        assert!(product.matches_filter(&ListingFilter::brand("Thorne Research")));
    }

    #[test]
    fn test_matches_query() {
        let product = Product::from_fields(ProductId::new(16), draft().validate().unwrap());
        assert!(product.matches_query("creatine"));
        assert!(product.matches_query("THORNE"));
        assert!(product.matches_query("tr-cre"));
        assert!(!product.matches_query("  "));
    }

    #[test]
    fn test_add_review_recomputes_rating() {
        let mut product = Product::from_fields(ProductId::new(1), draft().validate().unwrap());
        product.add_review(review(1, 5));
        product.add_review(review(2, 4));
        product.add_review(review(3, 4));
        assert_eq!(product.reviews, 3);
        assert!((product.rating - 4.3).abs() < f64::EPSILON);
        assert_eq!(product.product_reviews.first().unwrap().id, ReviewId::new(3));
    }

    #[test]
    fn test_new_review_validation() {
        let bad = NewReview {
            author: "An".to_string(),
            rating: 6,
            comment: "ok".to_string(),
        };
        assert!(bad.into_review(ReviewId::new(1), String::new()).is_err());

        let blank = NewReview {
            author: " ".to_string(),
            rating: 3,
            comment: "ok".to_string(),
        };
        assert_eq!(
            blank.into_review(ReviewId::new(1), String::new()),
            Err(ValidationError::Required { field: "author" })
        );
    }

    #[test]
    fn test_discount_percentage() {
        let mut product = Product::from_fields(ProductId::new(1), draft().validate().unwrap());
        product.price = Decimal::from(1_850_000);
        product.old_price = Some(Decimal::from(2_200_000));
        assert_eq!(product.discount_percentage(), Some(Decimal::from(16)));
        product.old_price = None;
        assert_eq!(product.discount_percentage(), None);
    }
}
