//! Shared grouping and bucket dispatch for both statements.

use std::collections::HashMap;

use crate::ledger::{LedgerEntry, Section};

use super::types::Comparative;
use super::warnings::Warning;

/// Outcome of routing an item to a statement bucket.
///
/// Each statement decides what an `Unclassified` item means: the balance
/// sheet files it under current assets, the income statement drops it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Classification<B, T> {
    /// Subsection matched bucket `B`.
    Bucketed(B, T),
    /// Subsection matched no bucket.
    Unclassified(T),
}

impl<B, T> Classification<B, T> {
    /// Wraps `item` according to the bucket lookup result.
    pub fn new(bucket: Option<B>, item: T) -> Self {
        match bucket {
            Some(bucket) => Self::Bucketed(bucket, item),
            None => Self::Unclassified(item),
        }
    }
}

/// All entries of one section that share a SARS item.
#[derive(Debug, Clone)]
pub(crate) struct GroupedItem<'a> {
    pub sars_item: &'a str,
    pub subsection: &'a str,
    pub amounts: Comparative,
    pub entries: Vec<&'a LedgerEntry>,
}

/// How subsections are compared when detecting conflicting mappings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum SubsectionMatch {
    CaseInsensitive,
    Exact,
}

impl SubsectionMatch {
    fn same(self, a: &str, b: &str) -> bool {
        match self {
            Self::CaseInsensitive => a.eq_ignore_ascii_case(b),
            Self::Exact => a == b,
        }
    }
}

struct Grouping<'a> {
    index: HashMap<&'a str, usize>,
    items: Vec<GroupedItem<'a>>,
    warnings: Vec<Warning>,
    matching: SubsectionMatch,
}

impl<'a> Grouping<'a> {
    fn new(matching: SubsectionMatch) -> Self {
        Self {
            index: HashMap::new(),
            items: Vec::new(),
            warnings: Vec::new(),
            matching,
        }
    }

    fn add(mut self, entry: &'a LedgerEntry) -> Self {
        let amounts = Comparative::new(entry.balance, entry.prior_year_balance);

        if let Some(&pos) = self.index.get(entry.sars_item.as_str()) {
            let item = &mut self.items[pos];
            item.amounts += amounts;
            item.entries.push(entry);

            if !self.matching.same(item.subsection, &entry.subsection) {
                let warning = Warning::ConflictingSubsection {
                    sars_item: entry.sars_item.clone(),
                    kept: item.subsection.to_string(),
                    ignored: entry.subsection.clone(),
                };
                if !self.warnings.contains(&warning) {
                    tracing::warn!(%warning, "conflicting subsection");
                    self.warnings.push(warning);
                }
            }
        } else {
            self.index.insert(&entry.sars_item, self.items.len());
            self.items.push(GroupedItem {
                sars_item: &entry.sars_item,
                subsection: &entry.subsection,
                amounts,
                entries: vec![entry],
            });
        }
        self
    }
}

/// Sums the entries of `section` per SARS item, in first-seen order.
///
/// The first subsection seen for a SARS item wins; later differing
/// subsections are tolerated and reported.
pub(crate) fn group_section<'a>(
    entries: &'a [LedgerEntry],
    section: Section,
    matching: SubsectionMatch,
) -> (Vec<GroupedItem<'a>>, Vec<Warning>) {
    let grouping = entries
        .iter()
        .filter(|entry| entry.is_in(section))
        .fold(Grouping::new(matching), Grouping::add);

    (grouping.items, grouping.warnings)
}

/// Raw sum of `balance` and `prior_year_balance` over a section.
pub(crate) fn section_sum(entries: &[LedgerEntry], section: Section) -> Comparative {
    entries
        .iter()
        .filter(|entry| entry.is_in(section))
        .map(|entry| Comparative::new(entry.balance, entry.prior_year_balance))
        .sum()
}
