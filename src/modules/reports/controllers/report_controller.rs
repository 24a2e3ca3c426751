use std::collections::BTreeMap;
use std::sync::Arc;

use actix_web::{error::JsonPayloadError, web, HttpRequest, HttpResponse};
use serde::{Deserialize, Serialize};
use tracing::error;

use crate::core::money::format_amount;
use crate::core::{AppError, MonthKey, Result};
use crate::modules::consultants::models::Consultant;
use crate::modules::reports::models::{
    ChartResult, ChartSeriesPoint, MonthTotals, MonthlyMetric, PieResult, PieSlice, ReportResult,
    ValidationKind, ViewOutcome,
};
use crate::modules::reports::services::{PerformanceQuery, PerformanceService};

/// Request body shared by the report, chart and pie endpoints
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct PerformanceRequest {
    #[serde(default)]
    pub consultant_ids: Vec<String>,
    /// Format: YYYY-MM, empty or absent means not selected
    #[serde(default)]
    pub from_month: Option<String>,
    #[serde(default)]
    pub to_month: Option<String>,
}

impl PerformanceRequest {
    pub fn into_query(self) -> Result<PerformanceQuery> {
        Ok(PerformanceQuery::new(
            self.consultant_ids,
            parse_month(self.from_month.as_deref())?,
            parse_month(self.to_month.as_deref())?,
        ))
    }
}

fn parse_month(value: Option<&str>) -> Result<Option<MonthKey>> {
    match value.map(str::trim) {
        None | Some("") => Ok(None),
        Some(month) => month.parse().map(Some),
    }
}

/// Envelope distinguishing computed data from a validation message
#[derive(Debug, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum ViewResponse<T> {
    Ready { data: T },
    Validation { kind: ValidationKind, message: String },
}

impl<T> ViewResponse<T> {
    pub fn from_outcome<S>(outcome: ViewOutcome<S>) -> Self
    where
        T: From<S>,
    {
        match outcome {
            ViewOutcome::Ready(value) => ViewResponse::Ready { data: T::from(value) },
            ViewOutcome::Validation(message) => ViewResponse::Validation {
                kind: message.kind,
                message: message.message,
            },
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ConsultantResponse {
    pub id: String,
    pub name: String,
}

impl From<Consultant> for ConsultantResponse {
    fn from(consultant: Consultant) -> Self {
        Self {
            id: consultant.id.to_string(),
            name: consultant.display_name,
        }
    }
}

// Monetary fields are decimal strings rounded to 2 places

#[derive(Debug, Serialize, Deserialize)]
pub struct MonthlyMetricResponse {
    pub consultant_id: String,
    pub consultant: String,
    pub month: String,
    pub net_revenue: String,
    pub fixed_cost: String,
    pub commission: String,
    pub profit: String,
}

impl From<MonthlyMetric> for MonthlyMetricResponse {
    fn from(row: MonthlyMetric) -> Self {
        Self {
            profit: format_amount(row.profit()),
            consultant_id: row.consultant_id.to_string(),
            consultant: row.consultant_name,
            month: row.month.to_string(),
            net_revenue: format_amount(row.net_revenue),
            fixed_cost: format_amount(row.fixed_cost),
            commission: format_amount(row.commission),
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct MonthTotalsResponse {
    pub net_revenue: String,
    pub fixed_cost: String,
    pub commission: String,
    pub profit: String,
}

impl From<MonthTotals> for MonthTotalsResponse {
    fn from(totals: MonthTotals) -> Self {
        Self {
            net_revenue: format_amount(totals.net_revenue),
            fixed_cost: format_amount(totals.fixed_cost),
            commission: format_amount(totals.commission),
            profit: format_amount(totals.profit()),
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ReportResponse {
    pub rows: Vec<MonthlyMetricResponse>,
    /// Keyed by YYYY-MM
    pub totals: BTreeMap<String, MonthTotalsResponse>,
}

impl From<ReportResult> for ReportResponse {
    fn from(report: ReportResult) -> Self {
        Self {
            rows: report.rows.into_iter().map(MonthlyMetricResponse::from).collect(),
            totals: report
                .totals
                .into_iter()
                .map(|(month, totals)| (month.to_string(), MonthTotalsResponse::from(totals)))
                .collect(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ChartPointResponse {
    pub consultant: String,
    pub net_revenue: String,
}

impl From<ChartSeriesPoint> for ChartPointResponse {
    fn from(point: ChartSeriesPoint) -> Self {
        Self {
            consultant: point.consultant_name,
            net_revenue: format_amount(point.net_revenue),
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ChartResponse {
    pub series: Vec<ChartPointResponse>,
    pub average_fixed_cost: String,
}

impl From<ChartResult> for ChartResponse {
    fn from(chart: ChartResult) -> Self {
        Self {
            series: chart.series.into_iter().map(ChartPointResponse::from).collect(),
            average_fixed_cost: format_amount(chart.average_fixed_cost),
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct PieSliceResponse {
    pub consultant: String,
    pub net_revenue: String,
    pub percent: String,
}

impl From<PieSlice> for PieSliceResponse {
    fn from(slice: PieSlice) -> Self {
        Self {
            consultant: slice.consultant_name,
            net_revenue: format_amount(slice.net_revenue),
            percent: format_amount(slice.percent),
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct PieResponse {
    pub series: Vec<PieSliceResponse>,
    pub total: String,
    pub has_data: bool,
}

impl From<PieResult> for PieResponse {
    fn from(pie: PieResult) -> Self {
        Self {
            series: pie.series.into_iter().map(PieSliceResponse::from).collect(),
            total: format_amount(pie.total),
            has_data: pie.has_data,
        }
    }
}

/// GET /consultants
pub async fn list_consultants(
    service: web::Data<Arc<PerformanceService>>,
) -> std::result::Result<HttpResponse, AppError> {
    let consultants = service
        .list_consultants()
        .await
        .inspect_err(|e| error!("Failed to list consultants: {}", e))?;

    let body: Vec<ConsultantResponse> = consultants.into_iter().map(ConsultantResponse::from).collect();
    Ok(HttpResponse::Ok().json(body))
}

/// POST /performance/report
pub async fn build_report(
    service: web::Data<Arc<PerformanceService>>,
    request: web::Json<PerformanceRequest>,
) -> std::result::Result<HttpResponse, AppError> {
    let query = request.into_inner().into_query()?;
    let outcome = service
        .build_report(&query)
        .await
        .inspect_err(|e| error!("Failed to build performance report: {}", e))?;

    Ok(HttpResponse::Ok().json(ViewResponse::<ReportResponse>::from_outcome(outcome)))
}

/// POST /performance/chart
pub async fn build_chart(
    service: web::Data<Arc<PerformanceService>>,
    request: web::Json<PerformanceRequest>,
) -> std::result::Result<HttpResponse, AppError> {
    let query = request.into_inner().into_query()?;
    let outcome = service
        .build_chart(&query)
        .await
        .inspect_err(|e| error!("Failed to build performance chart: {}", e))?;

    Ok(HttpResponse::Ok().json(ViewResponse::<ChartResponse>::from_outcome(outcome)))
}

/// POST /performance/pie
pub async fn build_pie(
    service: web::Data<Arc<PerformanceService>>,
    request: web::Json<PerformanceRequest>,
) -> std::result::Result<HttpResponse, AppError> {
    let query = request.into_inner().into_query()?;
    let outcome = service
        .build_pie(&query)
        .await
        .inspect_err(|e| error!("Failed to build performance pie: {}", e))?;

    Ok(HttpResponse::Ok().json(ViewResponse::<PieResponse>::from_outcome(outcome)))
}

fn json_error_handler(err: JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    AppError::validation(format!("Invalid request body: {}", err)).into()
}

/// Configure consultant and performance routes
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::JsonConfig::default().error_handler(json_error_handler))
        .route("/consultants", web::get().to(list_consultants))
        .service(
            web::scope("/performance")
                .route("/report", web::post().to(build_report))
                .route("/chart", web::post().to(build_chart))
                .route("/pie", web::post().to(build_pie)),
        );
}
