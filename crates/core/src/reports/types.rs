//! Report data types.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::ledger::LedgerEntry;

/// A current-year figure paired with its prior-year comparative.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Comparative {
    /// Current-year amount.
    pub current: Decimal,
    /// Prior-year amount.
    pub prior: Decimal,
}

impl Comparative {
    /// Both columns zero.
    pub const ZERO: Self = Self {
        current: Decimal::ZERO,
        prior: Decimal::ZERO,
    };

    /// Creates a pair.
    #[must_use]
    pub const fn new(current: Decimal, prior: Decimal) -> Self {
        Self { current, prior }
    }

    /// Returns true if both columns are exactly zero.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.current.is_zero() && self.prior.is_zero()
    }

    /// Absolute value of each column.
    #[must_use]
    pub fn abs(self) -> Self {
        Self::new(self.current.abs(), self.prior.abs())
    }
}

impl std::ops::Add for Comparative {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::new(self.current + rhs.current, self.prior + rhs.prior)
    }
}

impl std::ops::AddAssign for Comparative {
    fn add_assign(&mut self, rhs: Self) {
        self.current += rhs.current;
        self.prior += rhs.prior;
    }
}

impl std::ops::Sub for Comparative {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self::new(self.current - rhs.current, self.prior - rhs.prior)
    }
}

impl std::ops::Neg for Comparative {
    type Output = Self;

    fn neg(self) -> Self {
        Self::new(-self.current, -self.prior)
    }
}

impl std::iter::Sum for Comparative {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, |acc, c| acc + c)
    }
}

/// A statement line keyed by SARS item.
pub trait LineItem {
    /// Aggregation key.
    fn sars_item(&self) -> &str;
    /// Current and prior-year amounts as held in the bucket.
    fn amounts(&self) -> Comparative;
}

/// Balance sheet line: all entries sharing a SARS item, after bucket signing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AggregatedLineItem {
    /// SARS line item.
    pub sars_item: String,
    /// First-seen subsection, verbatim.
    pub subsection: String,
    /// Current-year amount.
    pub amount: Decimal,
    /// Prior-year amount.
    pub prior_year_amount: Decimal,
    /// Contributing entries in input order.
    pub mapped_accounts: Vec<LedgerEntry>,
}

impl LineItem for AggregatedLineItem {
    fn sars_item(&self) -> &str {
        &self.sars_item
    }

    fn amounts(&self) -> Comparative {
        Comparative::new(self.amount, self.prior_year_amount)
    }
}

/// Income statement line: summed balances for one SARS item, unsigned by bucket.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IncomeLineItem {
    /// SARS line item.
    pub sars_item: String,
    /// First-seen subsection, verbatim.
    pub subsection: String,
    /// Current-year amount.
    pub current: Decimal,
    /// Prior-year amount.
    pub prior: Decimal,
}

impl LineItem for IncomeLineItem {
    fn sars_item(&self) -> &str {
        &self.sars_item
    }

    fn amounts(&self) -> Comparative {
        Comparative::new(self.current, self.prior)
    }
}

/// Insertion-ordered line items keyed by SARS item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Bucket<T> {
    items: Vec<T>,
}

impl<T> Default for Bucket<T> {
    fn default() -> Self {
        Self { items: Vec::new() }
    }
}

impl<T: LineItem> Bucket<T> {
    /// Appends an item whose key is known to be new.
    pub(crate) fn push(&mut self, item: T) {
        debug_assert!(self.get(item.sars_item()).is_none());
        self.items.push(item);
    }

    /// Looks up an item by SARS item.
    #[must_use]
    pub fn get(&self, sars_item: &str) -> Option<&T> {
        self.items.iter().find(|item| item.sars_item() == sars_item)
    }

    /// Iterates items in insertion order.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }

    /// Items that are rendered: at least one non-zero column.
    pub fn visible_items(&self) -> impl Iterator<Item = &T> {
        self.items.iter().filter(|item| !item.amounts().is_zero())
    }

    /// Number of items.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns true if the bucket has no items.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Sum over every item.
    #[must_use]
    pub fn total(&self) -> Comparative {
        self.items.iter().map(LineItem::amounts).sum()
    }

    /// Sum over visible items only. Equal to [`Bucket::total`], since hidden
    /// items are zero in both columns.
    #[must_use]
    pub fn visible_total(&self) -> Comparative {
        self.visible_items().map(LineItem::amounts).sum()
    }
}

impl<'a, T> IntoIterator for &'a Bucket<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

/// Current-year sum of a bucket.
#[must_use]
pub fn nested_total<T: LineItem>(bucket: &Bucket<T>) -> Decimal {
    bucket.total().current
}

/// Prior-year sum of a bucket.
#[must_use]
pub fn nested_prior_year_total<T: LineItem>(bucket: &Bucket<T>) -> Decimal {
    bucket.total().prior
}
