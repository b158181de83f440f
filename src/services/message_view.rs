//! In-memory filtering and pagination over a loaded message list.

use std::collections::BTreeSet;

use crate::models::{batch::Batch, camp::Camp, message::Message};

pub const PAGE_SIZE: usize = 10;

/// Camp and batch filter; `None` matches everything.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MessageFilter {
    pub camp: Option<Camp>,
    pub batch: Option<Batch>,
}

impl MessageFilter {
    pub fn cohort(camp: Camp, batch: Batch) -> Self {
        Self {
            camp: Some(camp),
            batch: Some(batch),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.camp.is_none() && self.batch.is_none()
    }

    pub fn matches(&self, message: &Message) -> bool {
        let camp_ok = self.camp.map_or(true, |camp| message.camp() == Some(camp));
        let batch_ok = self
            .batch
            .map_or(true, |batch| message.batch == batch.as_i16());
        camp_ok && batch_ok
    }
}

pub fn total_pages(count: usize, page_size: usize) -> usize {
    count.div_ceil(page_size)
}

#[derive(Debug, Clone)]
pub struct Page<'a, T> {
    pub items: &'a [T],
    pub page: usize,
    pub per_page: usize,
    pub total: usize,
    pub total_pages: usize,
}

/// Filter state over a fixed snapshot of messages, newest first.
#[derive(Debug, Clone)]
pub struct MessageView {
    all: Vec<Message>,
    filter: MessageFilter,
    filtered: Vec<Message>,
    current_page: usize,
    page_size: usize,
}

impl MessageView {
    pub fn new(all: Vec<Message>) -> Self {
        Self::with_page_size(all, PAGE_SIZE)
    }

    pub fn with_page_size(all: Vec<Message>, page_size: usize) -> Self {
        let filtered = all.clone();
        Self {
            all,
            filter: MessageFilter::default(),
            filtered,
            current_page: 1,
            page_size: page_size.max(1),
        }
    }

    pub fn filter(&self) -> MessageFilter {
        self.filter
    }

    /// Applies a new filter and moves back to the first page.
    pub fn set_filter(&mut self, filter: MessageFilter) {
        self.filter = filter;
        self.filtered = self
            .all
            .iter()
            .filter(|message| filter.matches(message))
            .cloned()
            .collect();
        self.current_page = 1;
    }

    /// Moves to `page`, clamped to the available range.
    pub fn set_page(&mut self, page: usize) {
        self.current_page = page.clamp(1, self.total_pages().max(1));
    }

    pub fn current_page(&self) -> usize {
        self.current_page
    }

    pub fn filtered(&self) -> &[Message] {
        &self.filtered
    }

    pub fn all(&self) -> &[Message] {
        &self.all
    }

    pub fn total_pages(&self) -> usize {
        total_pages(self.filtered.len(), self.page_size)
    }

    pub fn page(&self) -> Page<'_, Message> {
        let start = (self.current_page - 1) * self.page_size;
        let end = (start + self.page_size).min(self.filtered.len());
        let items: &[Message] = if start < end { &self.filtered[start..end] } else { &[] };
        Page {
            items,
            page: self.current_page,
            per_page: self.page_size,
            total: self.filtered.len(),
            total_pages: self.total_pages(),
        }
    }

    pub fn pages(&self) -> impl Iterator<Item = &[Message]> {
        self.filtered.chunks(self.page_size)
    }

    /// Distinct camps present in the unfiltered list.
    pub fn camp_facets(&self) -> Vec<Camp> {
        self.all
            .iter()
            .filter_map(Message::camp)
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    /// Distinct batches present in the unfiltered list, ascending.
    pub fn batch_facets(&self) -> Vec<Batch> {
        self.all
            .iter()
            .filter_map(Message::batch)
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }
}
