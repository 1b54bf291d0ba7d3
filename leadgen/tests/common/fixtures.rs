//! Test fixtures and data for leadgen tests

use serde_json::{Value, json};

/// Standard test data and fixtures
pub struct TestFixtures;

impl TestFixtures {
    pub const CSV_HEADER: &'static str = "company_name,website,description,tags,products,lead_score";

    /// Three raw records, the first two an exact duplicate pair under different synonyms
    pub fn raw_with_duplicate_pair() -> Value {
        json!([
            {
                "company": "Test Co",
                "site": "http://test.com",
                "desc": "Test description here",
                "labels": "eco; corn-starch",
                "products": [{"name": "cake", "ingredients": ["flour", "corn starch"]}]
            },
            {
                "company_name": "Test Co",
                "website": "http://test.com",
                "description": "Same company from another feed"
            },
            {
                "name": "Bakery B",
                "url": "http://bakeryb.com",
                "info": "Artisan breads",
                "tags": "bread",
                "items": [{"name": "loaf", "ingredients": ["flour", "water"]}]
            }
        ])
    }

    /// Records hitting every scoring rule, and none of them
    pub fn full_and_empty_matches() -> Value {
        json!([
            {
                "company_name": "Starch Works",
                "website": "http://starchworks.com",
                "description": "Contains maize powder and starch",
                "labels": "eco; corn-starch",
                "product_list": [{"name": "gravy", "ingredients": ["Corn Starch", null]}]
            },
            {
                "company_name": "Plain Goods",
                "website": "http://plain.com"
            }
        ])
    }

    /// Same company name with differently-cased websites
    pub fn website_casing_variants() -> Value {
        json!([
            {"company": "Acme", "site": "http://acme.com"},
            {"company": "Acme", "site": "http://ACME.com"}
        ])
    }

    /// The rubric walk-through record from the scoring docs
    pub fn starch_description_only() -> Value {
        json!([{"company": "A", "site": "x", "desc": "has starch", "labels": "eco"}])
    }
}
