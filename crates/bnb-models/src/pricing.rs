/*
 *
 *
 *
 *
 * MIT License
 * Copyright (c) 2025. Dwight J. Browne
 * dwight[-at-]dwightjbrowne[-dot-]com
 *
 *
 * Permission is hereby granted, free of charge, to any person obtaining a copy
 * of this software and associated documentation files (the "Software"), to deal
 * in the Software without restriction, including without limitation the rights
 * to use, copy, modify, merge, publish, distribute, sublicense, and/or sell
 * copies of the Software, and to permit persons to whom the Software is
 * furnished to do so, subject to the following conditions:
 *
 * The above copyright notice and this permission notice shall be included in all
 * copies or substantial portions of the Software.
 *
 * THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
 * IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
 * FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
 * AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
 * LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
 * OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE
 * SOFTWARE.
 */

//! Pricing settings and seasonal rule sets

use bnb_core::{field_accessors, Literal, RawPayload, Record, Result, Schema};

/// Pricing rule types shared by pricing settings and seasonal rule groups
pub mod rule_type {
  pub const SEASONAL_ADJUSTMENT: &str = "SEASONAL_ADJUSTMENT";
  pub const STAYED_AT_LEAST_X_DAYS: &str = "STAYED_AT_LEAST_X_DAYS";
  pub const BOOKED_WITHIN_AT_MOST_X_DAYS: &str = "BOOKED_WITHIN_AT_MOST_X_DAYS";
  pub const BOOKED_BEYOND_AT_LEAST_X_DAYS: &str = "BOOKED_BEYOND_AT_LEAST_X_DAYS";
}

/// How a pricing rule changes the nightly price
pub mod price_change_type {
  pub const PERCENT: &str = "PERCENT";
  pub const ABSOLUTE: &str = "ABSOLUTE";
}

static PRICING_SETTINGS_SCHEMA: Schema = Schema {
  entity: "PricingSettings",
  fields: &[
    "listing_id",
    "listing_id_str",
    "default_daily_price",
    "weekend_price",
    "security_deposit",
    "cleaning_fee",
    "guests_included",
    "price_per_extra_person",
    "monthly_price_factor",
    "weekly_price_factor",
    "eligible_for_pass_through_taxes",
    "pass_through_taxes_collection_type",
  ],
  defaults: &[
    ("listing_currency", Literal::Str("USD")),
    ("standard_fees", Literal::EmptyList),
    ("pass_through_taxes", Literal::EmptyList),
    ("default_pricing_rules", Literal::EmptyList),
  ],
  excluded_from_export: &[
    "listing_id",
    "listing_id_str",
    "eligible_for_pass_through_taxes",
    "pass_through_taxes_collection_type",
  ],
  ..Schema::EMPTY
};

/// Nightly prices, fees and discounts of one listing
#[derive(Debug, Clone)]
pub struct PricingSettings {
  record: Record,
}

impl PricingSettings {
  pub fn new() -> Self {
    Self { record: Record::new(&PRICING_SETTINGS_SCHEMA) }
  }

  fn from_required(_raw: &RawPayload) -> Result<Self> {
    Ok(Self::new())
  }
}

impl Default for PricingSettings {
  fn default() -> Self {
    Self::new()
  }
}

impl_entity!(PricingSettings, PRICING_SETTINGS_SCHEMA);

field_accessors!(PricingSettings {
  listing_id: int,
  listing_id_str: str,
  listing_currency: str,
  default_daily_price: int,
  weekend_price: int,
  security_deposit: int,
  cleaning_fee: int,
  guests_included: int,
  price_per_extra_person: int,
  monthly_price_factor: float,
  weekly_price_factor: float,
  standard_fees: json,
  pass_through_taxes: json,
  default_pricing_rules: json,
  eligible_for_pass_through_taxes: bool,
  pass_through_taxes_collection_type: str,
});

static SEASONAL_RULE_GROUP_SCHEMA: Schema = Schema {
  entity: "SeasonalRuleGroup",
  fields: &["id", "created_by_user_id", "color", "title", "pricing_rules", "availability_rules"],
  excluded_from_export: &["id"],
  ..Schema::EMPTY
};

/// A named, colored set of pricing and availability rules applied to date ranges
#[derive(Debug, Clone)]
pub struct SeasonalRuleGroup {
  record: Record,
}

impl SeasonalRuleGroup {
  pub const DAY_MONDAY: &'static str = "MONDAY";
  pub const DAY_TUESDAY: &'static str = "TUESDAY";
  pub const DAY_WEDNESDAY: &'static str = "WEDNESDAY";
  pub const DAY_THURSDAY: &'static str = "THURSDAY";
  pub const DAY_FRIDAY: &'static str = "FRIDAY";
  pub const DAY_SATURDAY: &'static str = "SATURDAY";
  pub const DAY_SUNDAY: &'static str = "SUNDAY";
  pub const DAY_UNSPECIFIED: &'static str = "UNSPECIFIED";

  pub fn new() -> Self {
    Self { record: Record::new(&SEASONAL_RULE_GROUP_SCHEMA) }
  }

  fn from_required(_raw: &RawPayload) -> Result<Self> {
    Ok(Self::new())
  }
}

impl Default for SeasonalRuleGroup {
  fn default() -> Self {
    Self::new()
  }
}

impl_entity!(SeasonalRuleGroup, SEASONAL_RULE_GROUP_SCHEMA);

field_accessors!(SeasonalRuleGroup {
  id: int,
  created_by_user_id: int,
  color: int,
  title: str,
  pricing_rules: json,
  availability_rules: json,
});

static RULE_GROUP_TIMELINE_SCHEMA: Schema = Schema {
  entity: "RuleGroupTimeline",
  fields: &["seasonal_rule_group_id", "since_date", "end_date"],
  ..Schema::EMPTY
};

/// Assignment of a seasonal rule group to a date range of a listing
#[derive(Debug, Clone)]
pub struct RuleGroupTimeline {
  record: Record,
}

impl RuleGroupTimeline {
  pub fn new() -> Self {
    Self { record: Record::new(&RULE_GROUP_TIMELINE_SCHEMA) }
  }

  /// Timeline entry covering `since_date..=end_date` (`YYYY-MM-DD`)
  pub fn for_range(seasonal_rule_group_id: i64, since_date: &str, end_date: &str) -> Self {
    let mut timeline = Self::new();
    timeline
      .set_seasonal_rule_group_id(seasonal_rule_group_id)
      .set_since_date(since_date)
      .set_end_date(end_date);
    timeline
  }

  fn from_required(_raw: &RawPayload) -> Result<Self> {
    Ok(Self::new())
  }
}

impl Default for RuleGroupTimeline {
  fn default() -> Self {
    Self::new()
  }
}

impl_entity!(RuleGroupTimeline, RULE_GROUP_TIMELINE_SCHEMA);

field_accessors!(RuleGroupTimeline {
  seasonal_rule_group_id: int,
  since_date: str,
  end_date: str,
});
