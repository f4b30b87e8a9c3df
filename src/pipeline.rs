//! Batch driver: render records a page at a time and hand out composed pages.

use rayon::prelude::*;

use crate::error::{CardError, Result};
use crate::render::{CardImage, CardRenderer, GridComposer, PageImage};
use crate::types::{CardRecord, CARDS_PER_PAGE};

/// What to do when a card fails to render.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FailurePolicy {
    /// Report the card and carry on without it.
    #[default]
    Isolate,
    /// Stop at the first failure. Pages completed before it are still emitted.
    Strict,
}

/// A card that failed to render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardFailure {
    pub line: u64,
    pub title: String,
    pub reason: String,
}

/// Outcome of a run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BatchReport {
    /// Cards placed on pages.
    pub cards: usize,
    pub pages: usize,
    pub failures: Vec<CardFailure>,
}

pub struct Pipeline<'a> {
    renderer: &'a CardRenderer,
    composer: &'a GridComposer,
    policy: FailurePolicy,
}

impl<'a> Pipeline<'a> {
    pub fn new(renderer: &'a CardRenderer, composer: &'a GridComposer) -> Self {
        Self {
            renderer,
            composer,
            policy: FailurePolicy::default(),
        }
    }

    pub fn with_policy(mut self, policy: FailurePolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Render `records` and pass each composed page to `emit` with its
    /// 1-based number.
    ///
    /// Records are rendered in parallel one page's worth at a time. Failed
    /// cards leave no gap: the next successful card takes the cell.
    pub fn run<F>(&self, records: &[CardRecord], mut emit: F) -> Result<BatchReport>
    where
        F: FnMut(usize, PageImage) -> Result<()>,
    {
        let mut report = BatchReport::default();
        let mut pending: Vec<CardImage> = Vec::with_capacity(CARDS_PER_PAGE);

        for chunk in records.chunks(CARDS_PER_PAGE) {
            let rendered: Vec<Result<CardImage>> = chunk
                .par_iter()
                .map(|record| self.renderer.render(record))
                .collect();

            for (record, result) in chunk.iter().zip(rendered) {
                match result {
                    Ok(card) => {
                        pending.push(card);
                        if pending.len() == CARDS_PER_PAGE {
                            self.flush(&mut pending, &mut report, &mut emit)?;
                        }
                    }
                    Err(e) if self.policy == FailurePolicy::Strict => {
                        return Err(CardError::Card {
                            line: record.line,
                            title: record.title.clone(),
                            source: Box::new(e),
                        });
                    }
                    Err(e) => {
                        log::info!("skipping {}: {}", record.describe(), e);
                        report.failures.push(CardFailure {
                            line: record.line,
                            title: record.title.clone(),
                            reason: e.to_string(),
                        });
                    }
                }
            }
        }

        if !pending.is_empty() {
            self.flush(&mut pending, &mut report, &mut emit)?;
        }

        Ok(report)
    }

    fn flush<F>(
        &self,
        pending: &mut Vec<CardImage>,
        report: &mut BatchReport,
        emit: &mut F,
    ) -> Result<()>
    where
        F: FnMut(usize, PageImage) -> Result<()>,
    {
        let page = self.composer.compose(pending)?;
        report.cards += pending.len();
        report.pages += 1;
        pending.clear();
        emit(report.pages, page)
    }
}
