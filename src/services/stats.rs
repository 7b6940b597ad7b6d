//! Statistics service
//!
//! Read-only aggregation queries feeding the admin dashboard. Query-shaping
//! is kept in pure helpers so the dashboard contracts can be tested without
//! a database.

use chrono::{Datelike, Utc};
use sqlx::Row;

use crate::{
    api::stats::{
        AddressCount, AdvancedMetrics, CategoryCount, ChartSeries, DepartmentPerformance,
        GeneralStats, MonthCount, RecentReport, StateCount, WeeklyTrends,
    },
    error::{AppError, AppResult},
    models::state::{STATE_IN_PROCESS, STATE_PENDING, STATE_RESOLVED},
    repository::Repository,
};

/// Localized full month names, 1-indexed via [`month_name`].
pub const MONTH_NAMES: [&str; 12] = [
    "Enero",
    "Febrero",
    "Marzo",
    "Abril",
    "Mayo",
    "Junio",
    "Julio",
    "Agosto",
    "Septiembre",
    "Octubre",
    "Noviembre",
    "Diciembre",
];

/// Abbreviated month names used as chart labels, January first.
pub const MONTH_ABBREVS: [&str; 12] = [
    "Ene", "Feb", "Mar", "Abr", "May", "Jun", "Jul", "Ago", "Sep", "Oct", "Nov", "Dic",
];

/// Look up the localized month name for a 1-based month number.
/// Out-of-range values surface as [`AppError::InvalidMonth`] instead of an
/// index fault; they cannot occur for timestamps the database produced.
pub fn month_name(month: i32) -> AppResult<&'static str> {
    if !(1..=12).contains(&month) {
        return Err(AppError::InvalidMonth(month));
    }
    Ok(MONTH_NAMES[(month - 1) as usize])
}

/// Placeholder until response-time tracking is measured for real.
const AVG_RESPONSE_TIME_PLACEHOLDER: f64 = 4.2;
/// Placeholder until citizen satisfaction surveys exist.
const SATISFACTION_PLACEHOLDER: f64 = 4.6;

/// Fixed weekly series backing the trends widget until per-week tracking
/// lands. One row per category, one column per week.
const WEEKLY_TRENDS_PLACEHOLDER: [[i64; 4]; 4] = [
    [30, 45, 35, 50],
    [25, 30, 40, 35],
    [20, 25, 30, 28],
    [15, 20, 25, 22],
];

/// Association from one department to the report categories it attends.
/// An empty category list means no categories are mapped yet; the rollup
/// then reports the baseline count instead of a query result.
#[derive(Debug, Clone)]
pub struct DepartmentMapping {
    pub department: String,
    pub categories: Vec<String>,
    pub baseline: i64,
}

/// Name-based department→categories association used by the rollup report.
/// Injectable so tests can substitute fixtures.
#[derive(Debug, Clone)]
pub struct DepartmentMap {
    pub entries: Vec<DepartmentMapping>,
}

impl Default for DepartmentMap {
    fn default() -> Self {
        Self {
            entries: vec![
                DepartmentMapping {
                    department: "Alumbrado Público".to_string(),
                    categories: vec!["Alumbrado público".to_string()],
                    baseline: 45,
                },
                DepartmentMapping {
                    department: "Servicios Municipales".to_string(),
                    categories: vec![
                        "Basura".to_string(),
                        "Fuga de agua".to_string(),
                        "Animal callejero".to_string(),
                    ],
                    baseline: 32,
                },
                DepartmentMapping {
                    department: "Parques y Jardines".to_string(),
                    categories: vec![],
                    baseline: 28,
                },
                DepartmentMapping {
                    department: "Obras Públicas".to_string(),
                    categories: vec!["Baches".to_string()],
                    baseline: 15,
                },
            ],
        }
    }
}

/// Outcome of a chart-shaped aggregation. The dashboard must always render,
/// so a failed query degrades to a fixed fallback series instead of an
/// error; the suppressed error stays observable for logging.
#[derive(Debug)]
pub enum ChartData {
    Ok(ChartSeries),
    Degraded {
        fallback: ChartSeries,
        suppressed: AppError,
    },
}

impl ChartData {
    pub fn is_degraded(&self) -> bool {
        matches!(self, ChartData::Degraded { .. })
    }

    pub fn into_series(self) -> ChartSeries {
        match self {
            ChartData::Ok(series) => series,
            ChartData::Degraded { fallback, .. } => fallback,
        }
    }
}

#[derive(Clone)]
pub struct StatsService {
    repository: Repository,
    department_map: DepartmentMap,
}

impl StatsService {
    pub fn new(repository: Repository) -> Self {
        Self {
            repository,
            department_map: DepartmentMap::default(),
        }
    }

    /// Replace the department→categories association (tests, future config).
    pub fn with_department_map(repository: Repository, department_map: DepartmentMap) -> Self {
        Self {
            repository,
            department_map,
        }
    }

    /// Headline counters for the dashboard overview.
    /// The trailing 30-day window uses the application server's clock.
    pub async fn general(&self) -> AppResult<GeneralStats> {
        let pool = &self.repository.pool;

        let total_reports: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM reports")
            .fetch_one(pool)
            .await?;

        let total_categories: i64 =
            sqlx::query_scalar("SELECT COUNT(*) FROM categories WHERE active = TRUE")
                .fetch_one(pool)
                .await?;

        let pending_reports: i64 =
            sqlx::query_scalar("SELECT COUNT(*) FROM reports WHERE state_id = $1")
                .bind(STATE_PENDING)
                .fetch_one(pool)
                .await?;

        let in_process_reports: i64 =
            sqlx::query_scalar("SELECT COUNT(*) FROM reports WHERE state_id = $1")
                .bind(STATE_IN_PROCESS)
                .fetch_one(pool)
                .await?;

        let resolved_reports: i64 =
            sqlx::query_scalar("SELECT COUNT(*) FROM reports WHERE state_id = $1")
                .bind(STATE_RESOLVED)
                .fetch_one(pool)
                .await?;

        let since = Utc::now() - chrono::Duration::days(30);
        let reports_last_30_days: i64 =
            sqlx::query_scalar("SELECT COUNT(*) FROM reports WHERE created_at >= $1")
                .bind(since)
                .fetch_one(pool)
                .await?;

        Ok(GeneralStats {
            total_reports,
            total_categories,
            pending_reports,
            in_process_reports,
            resolved_reports,
            reports_last_30_days,
        })
    }

    /// Derived metrics for the advanced statistics page. Response time and
    /// satisfaction are placeholder constants, not measurements.
    pub async fn advanced(&self) -> AppResult<AdvancedMetrics> {
        let pool = &self.repository.pool;

        let total: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM reports")
            .fetch_one(pool)
            .await?;

        let resolved: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM reports WHERE state_id = $1")
            .bind(STATE_RESOLVED)
            .fetch_one(pool)
            .await?;

        // Current calendar month/year evaluated on the application clock.
        let now = Utc::now();
        let reports_current_month: i64 = sqlx::query_scalar(
            r#"
            SELECT COUNT(*) FROM reports
            WHERE EXTRACT(MONTH FROM created_at)::int = $1
              AND EXTRACT(YEAR FROM created_at)::int = $2
            "#,
        )
        .bind(now.month() as i32)
        .bind(now.year())
        .fetch_one(pool)
        .await?;

        Ok(AdvancedMetrics {
            resolution_rate: Self::resolution_rate(total, resolved),
            avg_response_time_hours: AVG_RESPONSE_TIME_PLACEHOLDER,
            satisfaction_score: SATISFACTION_PLACEHOLDER,
            reports_current_month,
        })
    }

    /// Report counts per category. Every category row appears exactly once;
    /// categories without reports count zero (left-preserving join).
    pub async fn by_category(&self) -> AppResult<Vec<CategoryCount>> {
        let rows = sqlx::query(
            r#"
            SELECT c.name, COUNT(r.id) AS total
            FROM categories c
            LEFT JOIN reports r ON r.category_id = c.id
            GROUP BY c.id, c.name
            ORDER BY c.id
            "#,
        )
        .fetch_all(&self.repository.pool)
        .await?;

        Ok(rows
            .into_iter()
            .map(|row| CategoryCount {
                category: row.get("name"),
                total: row.get("total"),
            })
            .collect())
    }

    /// Report counts per lifecycle state, zero-preserving like [`Self::by_category`].
    pub async fn by_state(&self) -> AppResult<Vec<StateCount>> {
        let rows = sqlx::query(
            r#"
            SELECT s.name, COUNT(r.id) AS total
            FROM states s
            LEFT JOIN reports r ON r.state_id = s.id
            GROUP BY s.id, s.name
            ORDER BY s.id
            "#,
        )
        .fetch_all(&self.repository.pool)
        .await?;

        Ok(rows
            .into_iter()
            .map(|row| StateCount {
                state: row.get("name"),
                total: row.get("total"),
            })
            .collect())
    }

    /// Report counts grouped by creation year and month, across all time,
    /// oldest first, with the localized month name attached to each row.
    pub async fn by_month(&self) -> AppResult<Vec<MonthCount>> {
        let rows = sqlx::query(
            r#"
            SELECT EXTRACT(YEAR FROM created_at)::int AS year,
                   EXTRACT(MONTH FROM created_at)::int AS month,
                   COUNT(*) AS total
            FROM reports
            GROUP BY 1, 2
            ORDER BY 1, 2
            "#,
        )
        .fetch_all(&self.repository.pool)
        .await?;

        let mut result = Vec::with_capacity(rows.len());
        for row in rows {
            let month: i32 = row.get("month");
            result.push(MonthCount {
                year: row.get("year"),
                month,
                month_name: month_name(month)?.to_string(),
                total: row.get("total"),
            });
        }
        Ok(result)
    }

    /// Most recent reports, newest first, with reporter name and resolved
    /// category/state names for direct display.
    pub async fn recent(&self, limit: i64) -> AppResult<Vec<RecentReport>> {
        let rows = sqlx::query(
            r#"
            SELECT r.id, r.folio,
                   r.reporter_first_name || ' ' || r.reporter_paternal_surname AS reporter,
                   c.name AS category,
                   s.name AS state,
                   r.created_at
            FROM reports r
            JOIN categories c ON r.category_id = c.id
            JOIN states s ON r.state_id = s.id
            ORDER BY r.created_at DESC
            LIMIT $1
            "#,
        )
        .bind(limit)
        .fetch_all(&self.repository.pool)
        .await?;

        Ok(rows
            .into_iter()
            .map(|row| RecentReport {
                id: row.get("id"),
                folio: row.get("folio"),
                reporter: row.get("reporter"),
                category: row.get("category"),
                state: row.get("state"),
                created_at: row.get("created_at"),
            })
            .collect())
    }

    /// Addresses with the most reports. Rows without an address are
    /// excluded; ties break on the address string so the ranking is stable
    /// across calls.
    pub async fn top_addresses(&self, limit: i64) -> AppResult<Vec<AddressCount>> {
        let rows = sqlx::query(
            r#"
            SELECT address, COUNT(*) AS total
            FROM reports
            WHERE address IS NOT NULL AND address <> ''
            GROUP BY address
            ORDER BY total DESC, address ASC
            LIMIT $1
            "#,
        )
        .bind(limit)
        .fetch_all(&self.repository.pool)
        .await?;

        Ok(rows
            .into_iter()
            .map(|row| AddressCount {
                address: row.get("address"),
                total: row.get("total"),
            })
            .collect())
    }

    /// Twelve-month chart series, January first, unseen months at zero.
    /// Never fails: on any query error the fixed fallback series is
    /// returned with the suppressed error attached.
    pub async fn monthly_chart(&self) -> ChartData {
        match self.monthly_chart_query().await {
            Ok(series) => ChartData::Ok(series),
            Err(err) => ChartData::Degraded {
                fallback: Self::monthly_fallback(),
                suppressed: err,
            },
        }
    }

    async fn monthly_chart_query(&self) -> AppResult<ChartSeries> {
        let rows = sqlx::query(
            r#"
            SELECT EXTRACT(MONTH FROM created_at)::int AS month, COUNT(*) AS total
            FROM reports
            GROUP BY 1
            ORDER BY 1
            "#,
        )
        .fetch_all(&self.repository.pool)
        .await?;

        let counts: Vec<(i32, i64)> = rows
            .into_iter()
            .map(|row| (row.get("month"), row.get("total")))
            .collect();
        Self::build_monthly_series(&counts)
    }

    /// Per-category chart series mirroring [`Self::by_category`], with the
    /// same degrade-instead-of-fail contract as [`Self::monthly_chart`].
    pub async fn category_chart(&self) -> ChartData {
        match self.category_chart_query().await {
            Ok(series) => ChartData::Ok(series),
            Err(err) => ChartData::Degraded {
                fallback: Self::category_fallback(),
                suppressed: err,
            },
        }
    }

    async fn category_chart_query(&self) -> AppResult<ChartSeries> {
        let counts = self
            .by_category()
            .await?
            .into_iter()
            .map(|c| (c.category, c.total))
            .collect::<Vec<_>>();
        Ok(Self::build_category_series(counts))
    }

    /// Per-department rollup. Departments with mapped categories get a real
    /// count; unmapped ones report their fixed baseline and are flagged
    /// synthetic so dashboards can tell fabricated rows apart.
    pub async fn department_performance(&self) -> AppResult<Vec<DepartmentPerformance>> {
        let pool = &self.repository.pool;
        let mut result = Vec::with_capacity(self.department_map.entries.len());

        for entry in &self.department_map.entries {
            let counted = if entry.categories.is_empty() {
                None
            } else {
                let total: i64 = sqlx::query_scalar(
                    r#"
                    SELECT COUNT(*)
                    FROM reports r
                    JOIN categories c ON r.category_id = c.id
                    WHERE c.name = ANY($1)
                    "#,
                )
                .bind(&entry.categories)
                .fetch_one(pool)
                .await?;
                Some(total)
            };
            result.push(Self::department_entry(entry, counted));
        }

        Ok(result)
    }

    /// Weekly trends widget data: real category labels over a fixed
    /// placeholder series (per-week tracking does not exist yet).
    pub async fn weekly_trends(&self) -> AppResult<WeeklyTrends> {
        let categories: Vec<String> =
            sqlx::query_scalar("SELECT name FROM categories ORDER BY id LIMIT 4")
                .fetch_all(&self.repository.pool)
                .await?;

        Ok(WeeklyTrends {
            categories,
            weeks: vec![
                "Sem 1".to_string(),
                "Sem 2".to_string(),
                "Sem 3".to_string(),
                "Sem 4".to_string(),
            ],
            series: WEEKLY_TRENDS_PLACEHOLDER.iter().map(|row| row.to_vec()).collect(),
            synthetic: true,
        })
    }

    // =========================================================================
    // Pure shaping helpers
    // =========================================================================

    /// Share of resolved reports as a percentage with one decimal.
    /// Zero total short-circuits to 0.0; the division is never reached.
    pub fn resolution_rate(total: i64, resolved: i64) -> f64 {
        if total == 0 {
            return 0.0;
        }
        let rate = resolved as f64 / total as f64 * 100.0;
        (rate * 10.0).round() / 10.0
    }

    /// Spread (month, count) rows over a fixed 12-slot series. Months the
    /// data never mentions stay zero; a month outside 1..=12 is invalid
    /// input and reported as such.
    pub fn build_monthly_series(counts: &[(i32, i64)]) -> AppResult<ChartSeries> {
        let mut values = vec![0i64; 12];
        for &(month, total) in counts {
            if !(1..=12).contains(&month) {
                return Err(AppError::InvalidMonth(month));
            }
            values[(month - 1) as usize] = total;
        }
        Ok(ChartSeries {
            labels: MONTH_ABBREVS.iter().map(|s| s.to_string()).collect(),
            values,
        })
    }

    /// Reshape (name, count) rows into parallel label/value arrays.
    pub fn build_category_series(counts: Vec<(String, i64)>) -> ChartSeries {
        let mut labels = Vec::with_capacity(counts.len());
        let mut values = Vec::with_capacity(counts.len());
        for (name, total) in counts {
            labels.push(name);
            values.push(total);
        }
        ChartSeries { labels, values }
    }

    /// Build one rollup row. `counted` is `None` when the department has no
    /// mapped categories; the baseline then stands in and the row is
    /// flagged synthetic.
    pub fn department_entry(
        mapping: &DepartmentMapping,
        counted: Option<i64>,
    ) -> DepartmentPerformance {
        let (reports_handled, synthetic) = match counted {
            Some(total) => (total, false),
            None => (mapping.baseline, true),
        };
        DepartmentPerformance {
            department: mapping.department.clone(),
            reports_handled,
            efficiency: (70 + reports_handled / 2).min(95),
            synthetic,
        }
    }

    /// Fallback series served when the monthly chart query fails.
    pub fn monthly_fallback() -> ChartSeries {
        ChartSeries {
            labels: MONTH_ABBREVS.iter().map(|s| s.to_string()).collect(),
            values: vec![5, 8, 12, 6, 9, 15, 10, 7, 11, 8, 6, 4],
        }
    }

    /// Fallback series served when the category chart query fails.
    pub fn category_fallback() -> ChartSeries {
        ChartSeries {
            labels: vec![
                "Seguridad".to_string(),
                "Robo".to_string(),
                "Accidente".to_string(),
                "Vandalismo".to_string(),
                "Alumbrado".to_string(),
            ],
            values: vec![8, 5, 3, 2, 4],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolution_rate_zero_total() {
        assert_eq!(StatsService::resolution_rate(0, 0), 0.0);
    }

    #[test]
    fn test_resolution_rate_ten_reports_three_resolved() {
        assert_eq!(StatsService::resolution_rate(10, 3), 30.0);
    }

    #[test]
    fn test_resolution_rate_rounds_to_one_decimal() {
        assert_eq!(StatsService::resolution_rate(3, 1), 33.3);
        assert_eq!(StatsService::resolution_rate(7, 2), 28.6);
        assert_eq!(StatsService::resolution_rate(8, 8), 100.0);
    }

    #[test]
    fn test_month_name_bounds() {
        assert_eq!(month_name(1).unwrap(), "Enero");
        assert_eq!(month_name(12).unwrap(), "Diciembre");
        assert!(matches!(month_name(0), Err(AppError::InvalidMonth(0))));
        assert!(matches!(month_name(13), Err(AppError::InvalidMonth(13))));
    }

    #[test]
    fn test_monthly_series_empty_input() {
        let series = StatsService::build_monthly_series(&[]).unwrap();
        assert_eq!(series.labels.len(), 12);
        assert_eq!(series.values, vec![0; 12]);
        assert_eq!(series.labels[0], "Ene");
        assert_eq!(series.labels[11], "Dic");
    }

    #[test]
    fn test_monthly_series_sparse_months() {
        let series = StatsService::build_monthly_series(&[(3, 4), (7, 2)]).unwrap();
        assert_eq!(series.values.len(), 12);
        assert_eq!(series.values[2], 4);
        assert_eq!(series.values[6], 2);
        let others: i64 = series
            .values
            .iter()
            .enumerate()
            .filter(|(i, _)| *i != 2 && *i != 6)
            .map(|(_, v)| v)
            .sum();
        assert_eq!(others, 0);
        assert_eq!(series.values.iter().sum::<i64>(), 6);
    }

    #[test]
    fn test_monthly_series_rejects_out_of_range_month() {
        let result = StatsService::build_monthly_series(&[(13, 1)]);
        assert!(matches!(result, Err(AppError::InvalidMonth(13))));
    }

    #[test]
    fn test_category_series_preserves_order() {
        let series = StatsService::build_category_series(vec![
            ("Baches".to_string(), 7),
            ("Basura".to_string(), 0),
            ("Robo".to_string(), 3),
        ]);
        assert_eq!(series.labels, vec!["Baches", "Basura", "Robo"]);
        assert_eq!(series.values, vec![7, 0, 3]);
    }

    #[test]
    fn test_category_fallback_payload_exact() {
        let series = StatsService::category_fallback();
        assert_eq!(
            series.labels,
            vec!["Seguridad", "Robo", "Accidente", "Vandalismo", "Alumbrado"]
        );
        assert_eq!(series.values, vec![8, 5, 3, 2, 4]);
    }

    #[test]
    fn test_monthly_fallback_has_twelve_entries() {
        let series = StatsService::monthly_fallback();
        assert_eq!(series.labels.len(), 12);
        assert_eq!(series.values, vec![5, 8, 12, 6, 9, 15, 10, 7, 11, 8, 6, 4]);
    }

    #[test]
    fn test_department_entry_with_real_count() {
        let mapping = DepartmentMapping {
            department: "Obras Públicas".to_string(),
            categories: vec!["Baches".to_string()],
            baseline: 15,
        };
        let entry = StatsService::department_entry(&mapping, Some(10));
        assert_eq!(entry.reports_handled, 10);
        assert_eq!(entry.efficiency, 75);
        assert!(!entry.synthetic);
    }

    #[test]
    fn test_department_entry_unmapped_uses_baseline_exactly() {
        let mapping = DepartmentMapping {
            department: "Parques y Jardines".to_string(),
            categories: vec![],
            baseline: 28,
        };
        let entry = StatsService::department_entry(&mapping, None);
        assert_eq!(entry.reports_handled, 28);
        assert_eq!(entry.efficiency, 84);
        assert!(entry.synthetic);
    }

    #[test]
    fn test_department_efficiency_capped_at_95() {
        let mapping = DepartmentMapping {
            department: "Servicios Municipales".to_string(),
            categories: vec!["Basura".to_string()],
            baseline: 0,
        };
        let entry = StatsService::department_entry(&mapping, Some(60));
        assert_eq!(entry.efficiency, 95);
        let entry = StatsService::department_entry(&mapping, Some(1000));
        assert_eq!(entry.efficiency, 95);
    }

    #[test]
    fn test_default_department_map_matches_municipal_setup() {
        let map = DepartmentMap::default();
        assert_eq!(map.entries.len(), 4);
        let parques = map
            .entries
            .iter()
            .find(|e| e.department == "Parques y Jardines")
            .unwrap();
        assert!(parques.categories.is_empty());
        assert_eq!(parques.baseline, 28);
    }

    #[test]
    fn test_chart_data_degraded_keeps_fallback() {
        let degraded = ChartData::Degraded {
            fallback: StatsService::category_fallback(),
            suppressed: AppError::Internal("boom".to_string()),
        };
        assert!(degraded.is_degraded());
        let series = degraded.into_series();
        assert_eq!(series.values, vec![8, 5, 3, 2, 4]);
    }
}
