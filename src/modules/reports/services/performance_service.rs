use std::collections::{HashMap, HashSet};
use std::sync::Arc;

use chrono::NaiveDate;
use futures_util::{stream, StreamExt, TryStreamExt};
use tracing::{debug, info, warn};

use crate::core::{MonthKey, MonthRange, Result};
use crate::modules::consultants::models::{Consultant, ConsultantId};
use crate::modules::reports::models::{
    ChartResult, ConsultantSnapshot, PieResult, ReportResult, ValidationMessage, ViewOutcome,
};
use crate::modules::reports::repositories::PerformanceRepository;
use crate::modules::reports::services::{ChartAggregator, PieAggregator, ReportAssembler};

/// Consultant selection and month bounds for one performance request
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PerformanceQuery {
    pub consultant_ids: Vec<ConsultantId>,
    pub from_month: Option<MonthKey>,
    pub to_month: Option<MonthKey>,
}

impl PerformanceQuery {
    pub fn new(
        consultant_ids: impl IntoIterator<Item = impl Into<ConsultantId>>,
        from_month: Option<MonthKey>,
        to_month: Option<MonthKey>,
    ) -> Self {
        Self {
            consultant_ids: consultant_ids.into_iter().map(Into::into).collect(),
            from_month,
            to_month,
        }
    }
}

/// A validated query: distinct consultants in selection order plus the month range
struct Selection {
    consultant_ids: Vec<ConsultantId>,
    range: MonthRange,
}

/// Service computing the report, chart and pie views of consultant performance
///
/// Per-consultant records are fetched concurrently, bounded by `concurrency`,
/// and every fetch must succeed before any view is built.
pub struct PerformanceService {
    repository: Arc<dyn PerformanceRepository>,
    concurrency: usize,
}

impl PerformanceService {
    pub fn new(repository: Arc<dyn PerformanceRepository>, concurrency: usize) -> Self {
        Self {
            repository,
            concurrency: concurrency.max(1),
        }
    }

    /// Consultants available for selection
    pub async fn list_consultants(&self) -> Result<Vec<Consultant>> {
        self.repository.list_active_consultants().await
    }

    /// Zero-filled monthly rows per consultant plus per-month totals
    pub async fn build_report(&self, query: &PerformanceQuery) -> Result<ViewOutcome<ReportResult>> {
        self.build_view(query, "report", |snapshots, range| {
            ReportAssembler::assemble(snapshots, range)
        })
        .await
    }

    /// Whole-period net revenue per consultant and the average fixed cost
    pub async fn build_chart(&self, query: &PerformanceQuery) -> Result<ViewOutcome<ChartResult>> {
        self.build_view(query, "chart", |snapshots, _| ChartAggregator::aggregate(snapshots))
            .await
    }

    /// Whole-period net revenue shares per consultant
    pub async fn build_pie(&self, query: &PerformanceQuery) -> Result<ViewOutcome<PieResult>> {
        let outcome = self
            .build_view(query, "pie", |snapshots, _| PieAggregator::aggregate(snapshots))
            .await?;

        if let ViewOutcome::Ready(pie) = &outcome {
            if !pie.has_data {
                warn!("No net revenue in the selected period; pie has no data");
            }
        }

        Ok(outcome)
    }

    async fn build_view<T>(
        &self,
        query: &PerformanceQuery,
        view: &'static str,
        build: impl FnOnce(&[ConsultantSnapshot], &MonthRange) -> T,
    ) -> Result<ViewOutcome<T>> {
        let selection = match Self::validate(query)? {
            ViewOutcome::Ready(selection) => selection,
            ViewOutcome::Validation(message) => {
                info!(view, kind = ?message.kind, "Performance request rejected");
                return Ok(ViewOutcome::Validation(message));
            }
        };

        info!(
            view,
            consultants = selection.consultant_ids.len(),
            from = %selection.range.from_month(),
            to = %selection.range.to_month(),
            "Building performance view"
        );

        let snapshots = self.gather(&selection).await?;
        Ok(ViewOutcome::Ready(build(&snapshots, &selection.range)))
    }

    /// Empty selection and missing bounds become validation messages;
    /// a reversed range is an error.
    fn validate(query: &PerformanceQuery) -> Result<ViewOutcome<Selection>> {
        let mut seen = HashSet::new();
        let consultant_ids: Vec<ConsultantId> = query
            .consultant_ids
            .iter()
            .filter(|id| !id.as_str().trim().is_empty())
            .filter(|id| seen.insert((*id).clone()))
            .cloned()
            .collect();

        if consultant_ids.is_empty() {
            return Ok(ViewOutcome::Validation(ValidationMessage::empty_selection()));
        }

        let (Some(from), Some(to)) = (query.from_month, query.to_month) else {
            return Ok(ViewOutcome::Validation(ValidationMessage::missing_month_range()));
        };

        let range = MonthRange::new(from, to)?;

        Ok(ViewOutcome::Ready(Selection {
            consultant_ids,
            range,
        }))
    }

    async fn gather(&self, selection: &Selection) -> Result<Vec<ConsultantSnapshot>> {
        let names: HashMap<ConsultantId, String> = self
            .repository
            .list_active_consultants()
            .await?
            .into_iter()
            .map(|consultant| (consultant.id, consultant.display_name))
            .collect();

        let window = selection.range.date_window();

        stream::iter(selection.consultant_ids.iter().map(|id| {
            let consultant = match names.get(id) {
                Some(name) => Consultant::new(id.clone(), name.clone()),
                None => Consultant::unnamed(id.clone()),
            };
            self.snapshot(consultant, window)
        }))
        .buffered(self.concurrency)
        .try_collect()
        .await
    }

    async fn snapshot(
        &self,
        consultant: Consultant,
        (date_from, date_to): (NaiveDate, NaiveDate),
    ) -> Result<ConsultantSnapshot> {
        let (fixed_cost, invoices) = futures_util::try_join!(
            self.repository.current_fixed_cost(&consultant.id),
            self.repository
                .invoices_in_window(&consultant.id, date_from, date_to),
        )?;

        debug!(
            consultant = %consultant.id,
            %fixed_cost,
            invoices = invoices.len(),
            "Fetched consultant records"
        );

        Ok(ConsultantSnapshot::new(consultant, fixed_cost, invoices))
    }
}
