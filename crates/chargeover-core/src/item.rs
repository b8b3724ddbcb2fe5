//! Item types: the products, services, and discounts a ChargeOver account sells.

use serde::{Deserialize, Serialize};

use crate::ItemId;

/// Kind of billable item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ItemType {
    /// A recurring or one-off service.
    Service,
    /// A physical or digital product.
    Product,
    /// A discount applied against other lines.
    Discount,
}

/// How often an item is billed.
///
/// Variants serialize to ChargeOver's three-letter wire codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Paycycle {
    /// Every invoice.
    #[serde(rename = "evy")]
    EveryInvoice,
    /// One time only.
    #[serde(rename = "one")]
    OneTime,
    /// Daily.
    #[serde(rename = "dly")]
    Daily,
    /// Weekly.
    #[serde(rename = "wkl")]
    Weekly,
    /// Every two weeks.
    #[serde(rename = "biw")]
    BiWeekly,
    /// Monthly.
    #[serde(rename = "mon")]
    Monthly,
    /// Every two months.
    #[serde(rename = "bim")]
    BiMonthly,
    /// Quarterly.
    #[serde(rename = "qtr")]
    Quarterly,
    /// Every six months.
    #[serde(rename = "six")]
    SixMonths,
    /// Yearly.
    #[serde(rename = "yrl")]
    Yearly,
    /// Every two years.
    #[serde(rename = "two")]
    TwoYears,
    /// Every three years.
    #[serde(rename = "thr")]
    ThreeYears,
}

impl Paycycle {
    /// The wire code ChargeOver uses for this cycle.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::EveryInvoice => "evy",
            Self::OneTime => "one",
            Self::Daily => "dly",
            Self::Weekly => "wkl",
            Self::BiWeekly => "biw",
            Self::Monthly => "mon",
            Self::BiMonthly => "bim",
            Self::Quarterly => "qtr",
            Self::SixMonths => "six",
            Self::Yearly => "yrl",
            Self::TwoYears => "two",
            Self::ThreeYears => "thr",
        }
    }

    /// Look up a cycle by wire code (case-insensitive).
    #[must_use]
    pub fn from_code(code: &str) -> Option<Self> {
        const ALL: [Paycycle; 12] = [
            Paycycle::EveryInvoice,
            Paycycle::OneTime,
            Paycycle::Daily,
            Paycycle::Weekly,
            Paycycle::BiWeekly,
            Paycycle::Monthly,
            Paycycle::BiMonthly,
            Paycycle::Quarterly,
            Paycycle::SixMonths,
            Paycycle::Yearly,
            Paycycle::TwoYears,
            Paycycle::ThreeYears,
        ];
        ALL.into_iter()
            .find(|cycle| cycle.code().eq_ignore_ascii_case(code))
    }
}

/// Pricing scheme applied to the base price.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PricingModel {
    /// Flat price regardless of quantity.
    #[serde(rename = "fla")]
    Flat,
    /// Price per unit.
    #[serde(rename = "uni")]
    Unit,
    /// Volume pricing: one tier price applies to all units.
    #[serde(rename = "vol")]
    Volume,
    /// Tiered pricing: each tier priced separately.
    #[serde(rename = "tie")]
    Tiered,
}

/// Price details for an item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceModel {
    /// Base price in the account's currency.
    pub base: f64,
    /// Billing frequency.
    pub paycycle: Paycycle,
    /// Pricing scheme.
    pub pricemodel: PricingModel,
}

/// Request body for `POST /api/v3/item`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ItemInput {
    /// Display name.
    pub name: String,
    /// Item kind.
    #[serde(rename = "type")]
    pub item_type: ItemType,
    /// Price details.
    pub pricemodel: PriceModel,
}

impl ItemInput {
    /// A flat-priced service item.
    #[must_use]
    pub fn service(name: impl Into<String>, base: f64, paycycle: Paycycle) -> Self {
        Self {
            name: name.into(),
            item_type: ItemType::Service,
            pricemodel: PriceModel {
                base,
                paycycle,
                pricemodel: PricingModel::Flat,
            },
        }
    }
}

impl Default for ItemInput {
    /// The sample item ChargeOver's API docs use: a $295.95 monthly flat-rate service.
    fn default() -> Self {
        Self::service("My Test Item 832", 295.95, Paycycle::Monthly)
    }
}

/// An item as returned by `GET /api/v3/item`.
///
/// Only `item_id` is typed; the remaining columns vary with the account's
/// custom fields and are kept verbatim.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    /// The item identifier.
    pub item_id: ItemId,
    /// Every other field from the response row.
    #[serde(flatten)]
    pub fields: serde_json::Map<String, serde_json::Value>,
}

impl Item {
    /// The item name, if the row carries one.
    #[must_use]
    pub fn name(&self) -> Option<&str> {
        self.fields.get("name").and_then(serde_json::Value::as_str)
    }
}
