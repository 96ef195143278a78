//! Month buckets of dated records.
//!
//! Grouping reads the calendar date as stored (`YYYY-MM-DD`), so a payment due
//! on the first of a month always lands in that month regardless of the
//! machine's timezone.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use linarqa_core::{MonthKey, sum_amounts};
use linarqa_models::Payment;
use rust_decimal::Decimal;
use serde::Serialize;

/// Records sharing one `YYYY-MM` key, in input order.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthBucket<'a, T> {
    key: MonthKey,
    items: Vec<&'a T>,
}

impl<'a, T> MonthBucket<'a, T> {
    fn new(key: MonthKey) -> Self {
        Self {
            key,
            items: Vec::new(),
        }
    }

    pub fn key(&self) -> MonthKey {
        self.key
    }

    pub fn items(&self) -> &[&'a T] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl MonthBucket<'_, Payment> {
    /// Sum of every amount in the month.
    pub fn total_amount(&self) -> Decimal {
        sum_amounts(self.items.iter().map(|p| p.amount))
    }

    /// Sum of `PAID` amounts in the month.
    pub fn paid_amount(&self) -> Decimal {
        sum_amounts(self.items.iter().filter(|p| p.is_paid()).map(|p| p.amount))
    }
}

/// Month buckets in ascending key order.
#[derive(Debug, Clone, PartialEq)]
pub struct MonthBuckets<'a, T> {
    buckets: BTreeMap<MonthKey, MonthBucket<'a, T>>,
}

impl<'a, T> Default for MonthBuckets<'a, T> {
    fn default() -> Self {
        Self {
            buckets: BTreeMap::new(),
        }
    }
}

impl<'a, T> MonthBuckets<'a, T> {
    pub fn len(&self) -> usize {
        self.buckets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buckets.is_empty()
    }

    pub fn get(&self, key: &MonthKey) -> Option<&MonthBucket<'a, T>> {
        self.buckets.get(key)
    }

    pub fn keys(&self) -> impl Iterator<Item = MonthKey> + '_ {
        self.buckets.keys().copied()
    }

    /// Oldest month first.
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &MonthBucket<'a, T>> {
        self.buckets.values()
    }

    /// Most recent month first, as the payment history is displayed.
    pub fn descending(&self) -> impl Iterator<Item = &MonthBucket<'a, T>> {
        self.buckets.values().rev()
    }

    /// Number of grouped records across all buckets.
    pub fn item_count(&self) -> usize {
        self.buckets.values().map(MonthBucket::len).sum()
    }
}

impl<'a, T: Serialize> Serialize for MonthBuckets<'a, T> {
    /// Serializes as an object keyed by `YYYY-MM`.
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeMap;

        let mut map = serializer.serialize_map(Some(self.buckets.len()))?;
        for (key, bucket) in &self.buckets {
            map.serialize_entry(&key.to_string(), &bucket.items)?;
        }
        map.end()
    }
}

/// Groups any dated records by the month of `date_of`.
pub fn group_by_month_with<'a, T, I, F>(items: I, date_of: F) -> MonthBuckets<'a, T>
where
    T: 'a,
    I: IntoIterator<Item = &'a T>,
    F: Fn(&T) -> NaiveDate,
{
    let mut grouped = MonthBuckets::default();
    for item in items {
        let key = MonthKey::from_date(date_of(item));
        grouped
            .buckets
            .entry(key)
            .or_insert_with(|| MonthBucket::new(key))
            .items
            .push(item);
    }
    grouped
}

/// Groups payments by the month of their due date.
pub fn group_by_month<'a, I>(payments: I) -> MonthBuckets<'a, Payment>
where
    I: IntoIterator<Item = &'a Payment>,
{
    group_by_month_with(payments, |payment| payment.due_date)
}
