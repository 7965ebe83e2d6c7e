//! Domain data structures for store brands, stores, and clearance listings.

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use serde::{Deserialize, Serialize};

/// Asset path served when a brand has no dedicated logo.
pub const MISSING_BRAND_LOGO: &str = "/missingBrandImage.png";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
/// Store brands known to carry food-waste clearance listings.
///
/// The upstream store directory lists many more brands, but only these ever
/// return clearance data, so everything else is dropped at the directory
/// boundary. This enum is the single source of truth for that allow-list.
pub enum Brand {
    /// Føtex supermarkets.
    Foetex,
    /// Netto discount stores.
    Netto,
    /// Bilka hypermarkets.
    Bilka,
}

impl Brand {
    /// Parse an upstream brand slug, returning `None` for brands outside the
    /// allow-list.
    #[must_use]
    pub fn parse(slug: &str) -> Option<Self> {
        match slug {
            "foetex" => Some(Brand::Foetex),
            "netto" => Some(Brand::Netto),
            "bilka" => Some(Brand::Bilka),
            _ => None,
        }
    }

    /// The slug the upstream API uses for this brand.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Brand::Foetex => "foetex",
            Brand::Netto => "netto",
            Brand::Bilka => "bilka",
        }
    }

    /// Static asset path for this brand's logo.
    #[must_use]
    pub fn logo(self) -> &'static str {
        match self {
            Brand::Foetex => "/foetex.png",
            Brand::Netto => "/netto.png",
            Brand::Bilka => "/bilka.png",
        }
    }
}

/// Map a brand slug to its logo asset path, falling back to
/// [`MISSING_BRAND_LOGO`] for unknown brands. Total; never fails.
#[must_use]
pub fn brand_logo(slug: &str) -> &'static str {
    Brand::parse(slug).map_or(MISSING_BRAND_LOGO, Brand::logo)
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
/// Identifier for a store, as issued by the upstream directory.
pub struct StoreId(pub String);

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
/// Identifier for an upstream provider.
pub struct ProviderId(pub String);

#[derive(Debug, Clone, Serialize, Deserialize)]
/// Metadata describing an upstream provider and its display name.
pub struct ProviderMeta {
    /// Unique identifier.
    pub id: ProviderId,
    /// Human-friendly name.
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
/// Abbreviated store record returned from a directory search.
///
/// The typed [`Brand`] field encodes the allow-list invariant: stores with
/// other brands are filtered out before a summary is ever constructed.
pub struct StoreSummary {
    /// Identifier used when requesting the store's clearance listing.
    pub id: StoreId,
    /// Full store name, usually prefixed with the brand ("Netto Vestergade").
    pub name: String,
    /// Brand the store belongs to.
    pub brand: Brand,
}

impl StoreSummary {
    /// Store name without the leading brand token.
    ///
    /// Upstream names repeat the brand ("Føtex Aalborg"); pickers already show
    /// a brand marker, so this returns everything after the first space, or
    /// the full name when there is none.
    #[must_use]
    pub fn short_name(&self) -> &str {
        self.name
            .split_once(' ')
            .map_or(self.name.as_str(), |(_brand, rest)| rest)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
/// Postal address of a store.
pub struct Address {
    /// City name.
    pub city: String,
    /// Country code.
    pub country: String,
    /// Additional address line; always null upstream so far.
    pub extra: Option<String>,
    /// Street and house number.
    pub street: String,
    /// Postal code.
    pub zip: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
/// Opening hours for a single day, including hourly customer-flow counts.
pub struct OpeningHours {
    /// Day the entry applies to.
    pub date: NaiveDate,
    /// Entry kind, e.g. `store` or `pharmacy`.
    #[serde(rename = "type")]
    pub typ: String,
    /// Opening time.
    pub open: NaiveTime,
    /// Closing time.
    pub close: NaiveTime,
    /// Whether the store is closed the whole day.
    pub closed: bool,
    /// Expected customers per hour of the day.
    pub customer_flow: Vec<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
/// Full store metadata as returned by the food-waste endpoint.
///
/// Unlike [`StoreSummary`], `brand` is a plain string here: the clearance
/// lookup is keyed by store id and applies no brand filter.
pub struct StoreDetail {
    /// Postal address.
    pub address: Address,
    /// Brand slug.
    pub brand: String,
    /// Longitude/latitude pair.
    pub coordinates: [f64; 2],
    /// Opening hours per day.
    pub hours: Vec<OpeningHours>,
    /// Full store name.
    pub name: String,
    /// Store identifier.
    pub id: StoreId,
    /// Store kind, e.g. `store`.
    #[serde(rename = "type")]
    pub typ: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
/// Discount terms for a single clearance item.
pub struct Offer {
    /// ISO 4217 currency code for the prices.
    pub currency: String,
    /// Absolute discount, `original_price - new_price`.
    pub discount: f64,
    /// Product barcode; unique within one store's listing.
    pub ean: String,
    /// When the offer expires.
    pub end_time: DateTime<Utc>,
    /// When the offer was last updated upstream.
    pub last_update: DateTime<Utc>,
    /// Discounted price.
    pub new_price: f64,
    /// Price before the discount.
    pub original_price: f64,
    /// Discount as a percentage of the original price.
    pub percent_discount: f64,
    /// When the offer became active.
    pub start_time: DateTime<Utc>,
    /// Remaining stock.
    pub stock: f64,
    /// Unit the stock is counted in, e.g. `each` or `kg`.
    pub stock_unit: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
/// Product description attached to a clearance offer.
pub struct Product {
    /// Short product description.
    pub description: String,
    /// Product barcode, matching the offer's.
    pub ean: String,
    /// Product photo URL, when upstream has one.
    pub image: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
/// One discounted, near-expiry product in a store's listing.
pub struct Clearance {
    /// Discount terms.
    pub offer: Offer,
    /// The product on offer.
    pub product: Product,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
/// A store's current clearance listing together with its full metadata.
pub struct StoreWithClearances {
    /// Store the listing belongs to.
    pub store: StoreDetail,
    /// All current clearance items, unfiltered.
    pub clearances: Vec<Clearance>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn brand_parse_accepts_allow_listed_slugs_only() {
        assert_eq!(Brand::parse("foetex"), Some(Brand::Foetex));
        assert_eq!(Brand::parse("netto"), Some(Brand::Netto));
        assert_eq!(Brand::parse("bilka"), Some(Brand::Bilka));
        assert_eq!(Brand::parse("irma"), None);
        assert_eq!(Brand::parse(""), None);
        // case sensitive, matching the upstream slugs exactly
        assert_eq!(Brand::parse("Netto"), None);
    }

    #[test]
    fn brand_logo_is_total_with_fallback() {
        assert_eq!(brand_logo("netto"), "/netto.png");
        assert_eq!(brand_logo("foetex"), "/foetex.png");
        assert_eq!(brand_logo("bilka"), "/bilka.png");
        assert_eq!(brand_logo("unknown-brand"), "/missingBrandImage.png");
    }

    #[test]
    fn short_name_strips_leading_brand_token() {
        let store = StoreSummary {
            id: StoreId("1".to_owned()),
            name: "Føtex Aalborg Storcenter".to_owned(),
            brand: Brand::Foetex,
        };
        assert_eq!(store.short_name(), "Aalborg Storcenter");
    }

    #[test]
    fn short_name_keeps_single_token_names() {
        let store = StoreSummary {
            id: StoreId("2".to_owned()),
            name: "Bilka".to_owned(),
            brand: Brand::Bilka,
        };
        assert_eq!(store.short_name(), "Bilka");
    }

    #[test]
    fn clearance_decode_fails_on_missing_ean() {
        let body = r#"{
            "offer": {
                "currency": "DKK",
                "discount": 10.0,
                "endTime": "2026-09-01T21:59:00Z",
                "lastUpdate": "2026-08-29T07:12:00Z",
                "newPrice": 15.0,
                "originalPrice": 25.0,
                "percentDiscount": 40.0,
                "startTime": "2026-08-29T00:00:00Z",
                "stock": 3.0,
                "stockUnit": "each"
            },
            "product": {
                "description": "Rugbrød",
                "ean": "5700000000001",
                "image": null
            }
        }"#;

        let err = serde_json::from_str::<Clearance>(body).expect_err("ean is required");
        assert!(
            err.to_string().contains("ean"),
            "error should name the missing field, got: {err}"
        );
    }

    #[test]
    fn store_with_clearances_round_trips() {
        let listing = StoreWithClearances {
            store: StoreDetail {
                address: Address {
                    city: "Aalborg".to_owned(),
                    country: "DK".to_owned(),
                    extra: None,
                    street: "Humlebakken 4".to_owned(),
                    zip: "9220".to_owned(),
                },
                brand: "netto".to_owned(),
                coordinates: [9.960_327, 57.036_99],
                hours: vec![OpeningHours {
                    date: NaiveDate::from_ymd_opt(2026, 8, 30).expect("valid date"),
                    typ: "store".to_owned(),
                    open: NaiveTime::from_hms_opt(8, 0, 0).expect("valid time"),
                    close: NaiveTime::from_hms_opt(21, 0, 0).expect("valid time"),
                    closed: false,
                    customer_flow: vec![0.0, 12.0, 35.0],
                }],
                name: "Netto Humlebakken".to_owned(),
                id: StoreId("netto-h4".to_owned()),
                typ: "store".to_owned(),
            },
            clearances: vec![Clearance {
                offer: Offer {
                    currency: "DKK".to_owned(),
                    discount: 12.5,
                    ean: "5700000000002".to_owned(),
                    end_time: "2026-09-01T21:59:00Z".parse().expect("valid rfc3339"),
                    last_update: "2026-08-29T07:12:00Z".parse().expect("valid rfc3339"),
                    new_price: 12.5,
                    original_price: 25.0,
                    percent_discount: 50.0,
                    start_time: "2026-08-29T00:00:00Z".parse().expect("valid rfc3339"),
                    stock: 4.0,
                    stock_unit: "each".to_owned(),
                },
                product: Product {
                    description: "Økologisk mælk".to_owned(),
                    ean: "5700000000002".to_owned(),
                    image: Some("https://example.invalid/milk.jpg".to_owned()),
                },
            }],
        };

        let encoded = serde_json::to_string(&listing).expect("listing serializes");
        let decoded: StoreWithClearances =
            serde_json::from_str(&encoded).expect("listing decodes");
        assert_eq!(decoded, listing);
    }
}
