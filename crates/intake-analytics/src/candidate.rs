//! Candidate analytics — aggregate views over interview evaluations.
//!
//! Every function here is pure and total over its input slice: empty input
//! yields zero counts and 0% (never NaN), and no business-logic edge case
//! raises. Views are independent; callers pick what they need, or use
//! [`report`] to assemble everything at once.

use crate::dates::date_key;
use crate::stats::{mean, pct, pearson, percentile, population_std};
use intake_core::config::ReportConfig;
use intake_core::types::{CandidateRecord, InterviewResult, YesNo};
use serde::Serialize;
use std::collections::BTreeMap;
use tracing::debug;

// ---------------------------------------------------------------------------
// Score dimensions
// ---------------------------------------------------------------------------

/// The four 0–5 quality scores recorded per interview.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScoreDimension {
    Experience,
    Compassion,
    Safety,
    Professionalism,
}

impl ScoreDimension {
    pub const ALL: [ScoreDimension; 4] = [
        ScoreDimension::Experience,
        ScoreDimension::Compassion,
        ScoreDimension::Safety,
        ScoreDimension::Professionalism,
    ];

    pub fn label(self) -> &'static str {
        match self {
            ScoreDimension::Experience => "Experience",
            ScoreDimension::Compassion => "Compassion",
            ScoreDimension::Safety => "Safety",
            ScoreDimension::Professionalism => "Professionalism",
        }
    }

    fn raw(self, record: &CandidateRecord) -> Option<&str> {
        match self {
            ScoreDimension::Experience => record.experience_score.as_deref(),
            ScoreDimension::Compassion => record.compassion_score.as_deref(),
            ScoreDimension::Safety => record.safety_score.as_deref(),
            ScoreDimension::Professionalism => record.professionalism_score.as_deref(),
        }
    }

    /// Parse this dimension's score for one record. Empty or unparseable
    /// values are "missing" and return `None`.
    pub fn score(self, record: &CandidateRecord) -> Option<f64> {
        parse_score(self.raw(record))
    }
}

fn parse_score(raw: Option<&str>) -> Option<f64> {
    // `"NaN"` and `"inf"` parse successfully as f64; they are missing
    // values here, not scores.
    raw.and_then(|s| s.trim().parse::<f64>().ok())
        .filter(|v| v.is_finite())
}

fn scores(records: &[CandidateRecord], dim: ScoreDimension) -> Vec<f64> {
    records.iter().filter_map(|r| dim.score(r)).collect()
}

/// Arithmetic mean of whichever sub-scores are present on one record.
/// `None` only when all four are missing.
fn overall_score(record: &CandidateRecord) -> Option<f64> {
    let present: Vec<f64> = ScoreDimension::ALL
        .iter()
        .filter_map(|dim| dim.score(record))
        .collect();
    if present.is_empty() {
        None
    } else {
        Some(mean(&present))
    }
}

// ---------------------------------------------------------------------------
// Recruitment funnel
// ---------------------------------------------------------------------------

/// One stage of the recruitment funnel.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FunnelStage {
    pub stage: &'static str,
    pub count: usize,
    /// Share of the total population, in [0, 100].
    pub percentage: f64,
    /// Drop-off relative to the immediately preceding stage; absent on the
    /// first stage, 0 when the preceding stage is empty.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub drop_off_rate: Option<f64>,
}

/// Five monotonically non-increasing stages:
/// Total → Attempted → Completed → Passed → Qualified-for-next.
pub fn recruitment_funnel(records: &[CandidateRecord]) -> Vec<FunnelStage> {
    let total = records.len();
    let attempted = records.iter().filter(|r| r.result.is_some()).count();
    let completed = records
        .iter()
        .filter(|r| {
            r.result
                .as_ref()
                .is_some_and(|res| *res != InterviewResult::Hangup)
        })
        .count();
    let passed = records.iter().filter(|r| r.passed()).count();
    let qualified = records
        .iter()
        .filter(|r| r.passed() && r.qualifies_for_next_interview())
        .count();

    vec![
        FunnelStage {
            stage: "Total Applications",
            count: total,
            percentage: 100.0,
            drop_off_rate: None,
        },
        FunnelStage {
            stage: "Interview Attempted",
            count: attempted,
            percentage: pct(attempted, total),
            drop_off_rate: Some(pct(total - attempted, total)),
        },
        FunnelStage {
            stage: "Completed Interview",
            count: completed,
            percentage: pct(completed, total),
            drop_off_rate: Some(pct(attempted - completed, attempted)),
        },
        FunnelStage {
            stage: "Passed Interview",
            count: passed,
            percentage: pct(passed, total),
            drop_off_rate: Some(pct(completed - passed, completed)),
        },
        FunnelStage {
            stage: "Qualified for Next Interview",
            count: qualified,
            percentage: pct(qualified, total),
            drop_off_rate: Some(pct(passed - qualified, passed)),
        },
    ]
}

// ---------------------------------------------------------------------------
// Qualification views
// ---------------------------------------------------------------------------

/// Per-criterion counts among passed candidates that fail each required
/// gate criterion (unknown counts as missing the criterion).
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MissingCriteria {
    pub work_per_week: usize,
    pub can_travel: usize,
    pub one_year_experience: usize,
    pub pay_rate: usize,
}

/// Gate outcome over the passed-interview subset.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QualificationStatus {
    pub qualified: usize,
    pub not_qualified: usize,
    pub qualified_percentage: f64,
    pub missing_criteria: MissingCriteria,
}

/// How many passed candidates clear the next-interview gate, and which
/// criteria hold the rest back.
pub fn qualification_status(records: &[CandidateRecord]) -> QualificationStatus {
    let passed: Vec<&CandidateRecord> = records.iter().filter(|r| r.passed()).collect();
    let total = passed.len();
    let qualified = passed
        .iter()
        .filter(|r| r.qualifies_for_next_interview())
        .count();

    let failing = |field: fn(&CandidateRecord) -> Option<&str>| {
        passed
            .iter()
            .filter(|r| !YesNo::classify(field(r)).is_yes())
            .count()
    };

    QualificationStatus {
        qualified,
        not_qualified: total - qualified,
        qualified_percentage: pct(qualified, total),
        missing_criteria: MissingCriteria {
            work_per_week: failing(|r| r.work_per_week.as_deref()),
            can_travel: failing(|r| r.can_travel.as_deref()),
            one_year_experience: failing(|r| r.one_year_experience.as_deref()),
            pay_rate: failing(|r| r.pay_rate.as_deref()),
        },
    }
}

/// One qualification criterion partitioned yes/no/unknown over the whole
/// population.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QualificationBreakdown {
    pub name: &'static str,
    pub qualified: usize,
    pub not_qualified: usize,
    pub missing: usize,
    pub total: usize,
}

const QUALIFICATION_CRITERIA: &[(&str, fn(&CandidateRecord) -> Option<&str>)] = &[
    ("Work Per Week (Required)", |r| r.work_per_week.as_deref()),
    ("Can Travel (Required)", |r| r.can_travel.as_deref()),
    ("1+ Year Experience (Required)", |r| {
        r.one_year_experience.as_deref()
    }),
    ("Acceptable Pay Rate (Required)", |r| r.pay_rate.as_deref()),
    ("Valid Driver's License", |r| r.valid_driver_license.as_deref()),
    ("Reliable Transport", |r| r.reliable_transport.as_deref()),
    ("Background Check", |r| r.background_check.as_deref()),
    ("TB Test Negative", |r| r.tb_test_negative.as_deref()),
    ("CPR Certificate", |r| r.cpr_certificate.as_deref()),
    ("Dementia Care Experience", |r| r.dementia_client.as_deref()),
];

/// Ten criteria (four required, five compliance, dementia-care experience)
/// each partitioned yes/no/unknown.
pub fn qualification_breakdown(records: &[CandidateRecord]) -> Vec<QualificationBreakdown> {
    let total = records.len();
    QUALIFICATION_CRITERIA
        .iter()
        .map(|(name, field)| {
            let mut qualified = 0;
            let mut not_qualified = 0;
            let mut missing = 0;
            for record in records {
                match YesNo::classify(field(record)) {
                    YesNo::Yes => qualified += 1,
                    YesNo::No => not_qualified += 1,
                    YesNo::Unknown => missing += 1,
                }
            }
            QualificationBreakdown {
                name,
                qualified,
                not_qualified,
                missing,
                total,
            }
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Score distributions and averages
// ---------------------------------------------------------------------------

/// One histogram bucket of a 0–5 score.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreBucket {
    pub score_range: &'static str,
    pub count: usize,
    pub percentage: f64,
}

/// Per-dimension missing-score counts (empty or unparseable values).
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MissingScores {
    pub experience: usize,
    pub compassion: usize,
    pub safety: usize,
    pub professionalism: usize,
}

/// Histograms for the four dimensions plus the per-record overall score.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreDistributions {
    pub experience: Vec<ScoreBucket>,
    pub compassion: Vec<ScoreBucket>,
    pub safety: Vec<ScoreBucket>,
    pub professionalism: Vec<ScoreBucket>,
    pub overall: Vec<ScoreBucket>,
    pub missing: MissingScores,
}

/// Bucket boundaries: half-open `[0,1) … [3,4)`, with the last bucket
/// `[4,5]` closed on both ends so a perfect 5 still lands somewhere.
const SCORE_RANGES: [(&str, f64, f64); 5] = [
    ("0-1", 0.0, 1.0),
    ("1-2", 1.0, 2.0),
    ("2-3", 2.0, 3.0),
    ("3-4", 3.0, 4.0),
    ("4-5", 4.0, 5.0),
];

fn bucketize(values: &[f64]) -> Vec<ScoreBucket> {
    SCORE_RANGES
        .iter()
        .enumerate()
        .map(|(i, (range, lo, hi))| {
            let last = i == SCORE_RANGES.len() - 1;
            let count = values
                .iter()
                .filter(|&&v| v >= *lo && if last { v <= *hi } else { v < *hi })
                .count();
            ScoreBucket {
                score_range: range,
                count,
                percentage: pct(count, values.len()),
            }
        })
        .collect()
}

/// Five-bucket histograms per score dimension. Missing values are excluded
/// from the denominators and reported in `missing`.
pub fn score_distributions(records: &[CandidateRecord]) -> ScoreDistributions {
    let missing_count = |dim: ScoreDimension| {
        records.iter().filter(|r| dim.score(r).is_none()).count()
    };
    let overall: Vec<f64> = records.iter().filter_map(overall_score).collect();

    ScoreDistributions {
        experience: bucketize(&scores(records, ScoreDimension::Experience)),
        compassion: bucketize(&scores(records, ScoreDimension::Compassion)),
        safety: bucketize(&scores(records, ScoreDimension::Safety)),
        professionalism: bucketize(&scores(records, ScoreDimension::Professionalism)),
        overall: bucketize(&overall),
        missing: MissingScores {
            experience: missing_count(ScoreDimension::Experience),
            compassion: missing_count(ScoreDimension::Compassion),
            safety: missing_count(ScoreDimension::Safety),
            professionalism: missing_count(ScoreDimension::Professionalism),
        },
    }
}

/// Mean score per dimension plus the overall mean.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AverageScores {
    pub experience: f64,
    pub compassion: f64,
    pub safety: f64,
    pub professionalism: f64,
    /// Mean of the per-dimension means that have at least one value.
    pub overall: f64,
}

pub fn average_scores(records: &[CandidateRecord]) -> AverageScores {
    let averaged: Vec<(f64, usize)> = ScoreDimension::ALL
        .iter()
        .map(|dim| {
            let values = scores(records, *dim);
            (mean(&values), values.len())
        })
        .collect();

    let present: Vec<f64> = averaged
        .iter()
        .filter(|(_, count)| *count > 0)
        .map(|(avg, _)| *avg)
        .collect();

    AverageScores {
        experience: averaged[0].0,
        compassion: averaged[1].0,
        safety: averaged[2].0,
        professionalism: averaged[3].0,
        overall: mean(&present),
    }
}

// ---------------------------------------------------------------------------
// Statistical summaries
// ---------------------------------------------------------------------------

/// Descriptive statistics for one score dimension over its non-missing
/// values.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatisticalSummary {
    pub metric: &'static str,
    pub mean: f64,
    pub std: f64,
    pub min: f64,
    pub q25: f64,
    pub median: f64,
    pub q75: f64,
    pub max: f64,
    pub count: usize,
}

pub fn statistical_summaries(records: &[CandidateRecord]) -> Vec<StatisticalSummary> {
    ScoreDimension::ALL
        .iter()
        .map(|dim| {
            let mut values = scores(records, *dim);
            values.sort_by(|a, b| a.partial_cmp(b).expect("scores are never NaN"));
            if values.is_empty() {
                return StatisticalSummary {
                    metric: dim.label(),
                    mean: 0.0,
                    std: 0.0,
                    min: 0.0,
                    q25: 0.0,
                    median: 0.0,
                    q75: 0.0,
                    max: 0.0,
                    count: 0,
                };
            }
            StatisticalSummary {
                metric: dim.label(),
                mean: mean(&values),
                std: population_std(&values),
                min: values[0],
                q25: percentile(&values, 25.0),
                median: percentile(&values, 50.0),
                q75: percentile(&values, 75.0),
                max: values[values.len() - 1],
                count: values.len(),
            }
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Score correlations
// ---------------------------------------------------------------------------

/// Pearson correlation between two score dimensions, pairwise-complete.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreCorrelation {
    pub score1: &'static str,
    pub score2: &'static str,
    pub correlation: f64,
}

/// Pairwise Pearson correlations across the four score dimensions.
///
/// Each pair is restricted to records where both dimensions parse
/// (pairwise-complete, not listwise). Pairs with no complete records are
/// omitted entirely; zero variance in either series yields 0.
pub fn score_correlations(records: &[CandidateRecord]) -> Vec<ScoreCorrelation> {
    let mut correlations = Vec::new();
    for i in 0..ScoreDimension::ALL.len() {
        for j in (i + 1)..ScoreDimension::ALL.len() {
            let (a, b) = (ScoreDimension::ALL[i], ScoreDimension::ALL[j]);
            let pairs: Vec<(f64, f64)> = records
                .iter()
                .filter_map(|r| Some((a.score(r)?, b.score(r)?)))
                .collect();
            if pairs.is_empty() {
                continue;
            }
            let xs: Vec<f64> = pairs.iter().map(|(x, _)| *x).collect();
            let ys: Vec<f64> = pairs.iter().map(|(_, y)| *y).collect();
            correlations.push(ScoreCorrelation {
                score1: a.label(),
                score2: b.label(),
                correlation: pearson(&xs, &ys),
            });
        }
    }
    correlations
}

// ---------------------------------------------------------------------------
// Geographic distribution
// ---------------------------------------------------------------------------

/// Candidate count per detected state token.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GeographicBucket {
    pub state: String,
    pub count: usize,
    pub percentage: f64,
}

/// The final comma-separated token of `previous_location` is the state;
/// locations without a comma count under the whole string, and absent
/// locations under `"Unknown"`.
fn location_state(location: Option<&str>) -> String {
    let Some(location) = location else {
        return "Unknown".to_string();
    };
    match location.rsplit_once(',') {
        Some((_, state)) => state.trim().to_string(),
        None => location.trim().to_string(),
    }
}

/// Aggregate by state, descending by count, truncated to `top` entries.
/// Percentages are relative to the whole population, not the shown subset.
pub fn geographic_distribution(records: &[CandidateRecord], top: usize) -> Vec<GeographicBucket> {
    let total = records.len();
    let mut by_state: BTreeMap<String, usize> = BTreeMap::new();
    for record in records {
        *by_state
            .entry(location_state(record.previous_location.as_deref()))
            .or_default() += 1;
    }

    let mut buckets: Vec<GeographicBucket> = by_state
        .into_iter()
        .map(|(state, count)| GeographicBucket {
            state,
            count,
            percentage: pct(count, total),
        })
        .collect();
    buckets.sort_by(|a, b| b.count.cmp(&a.count));
    buckets.truncate(top);
    buckets
}

// ---------------------------------------------------------------------------
// Time series
// ---------------------------------------------------------------------------

/// Interview volume and pass rate for one calendar date.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TimeSeriesPoint {
    /// ISO `YYYY-MM-DD`, or `"Unknown"` for unparseable timestamps.
    pub date: String,
    pub interviews: usize,
    pub pass_rate: f64,
}

/// Per-date interview counts and pass rates, ascending by date key
/// (lexicographic order is chronological for ISO dates; `"Unknown"` sorts
/// last).
pub fn time_series(records: &[CandidateRecord]) -> Vec<TimeSeriesPoint> {
    let mut by_date: BTreeMap<String, (usize, usize)> = BTreeMap::new();
    for record in records {
        let entry = by_date.entry(date_key(record.date_time.as_deref())).or_default();
        entry.0 += 1;
        if record.passed() {
            entry.1 += 1;
        }
    }

    by_date
        .into_iter()
        .map(|(date, (total, passed))| TimeSeriesPoint {
            date,
            interviews: total,
            pass_rate: pct(passed, total),
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Risk and compliance
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    High,
    Medium,
    Low,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskStatus {
    Missing,
    Failed,
    Issue,
}

/// One risk category with its fixed severity and status tags.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RiskItem {
    pub category: &'static str,
    pub count: usize,
    pub percentage: f64,
    pub severity: Severity,
    pub status: RiskStatus,
}

/// The nine fixed risk/compliance categories. Only categories with at
/// least one affected candidate appear in the output.
pub fn risk_metrics(records: &[CandidateRecord]) -> Vec<RiskItem> {
    let total = records.len();
    let classify = |field: fn(&CandidateRecord) -> Option<&str>, expected: YesNo| {
        records
            .iter()
            .filter(|r| YesNo::classify(field(r)) == expected)
            .count()
    };
    let not_yes = |field: fn(&CandidateRecord) -> Option<&str>| {
        records
            .iter()
            .filter(|r| !YesNo::classify(field(r)).is_yes())
            .count()
    };

    let categories = [
        RiskItem {
            category: "Red Flags Present",
            count: records.iter().filter(|r| !r.red_flags.is_empty()).count(),
            percentage: 0.0,
            severity: Severity::High,
            status: RiskStatus::Issue,
        },
        RiskItem {
            category: "Background Check Failed",
            count: classify(|r| r.background_check.as_deref(), YesNo::No),
            percentage: 0.0,
            severity: Severity::High,
            status: RiskStatus::Failed,
        },
        RiskItem {
            category: "Background Check Missing",
            count: classify(|r| r.background_check.as_deref(), YesNo::Unknown),
            percentage: 0.0,
            severity: Severity::High,
            status: RiskStatus::Missing,
        },
        RiskItem {
            category: "TB Test Failed",
            count: classify(|r| r.tb_test_negative.as_deref(), YesNo::No),
            percentage: 0.0,
            severity: Severity::High,
            status: RiskStatus::Failed,
        },
        RiskItem {
            category: "TB Test Missing",
            count: classify(|r| r.tb_test_negative.as_deref(), YesNo::Unknown),
            percentage: 0.0,
            severity: Severity::Medium,
            status: RiskStatus::Missing,
        },
        RiskItem {
            category: "No CPR Certification",
            count: not_yes(|r| r.cpr_certificate.as_deref()),
            percentage: 0.0,
            severity: Severity::Medium,
            status: RiskStatus::Missing,
        },
        RiskItem {
            category: "No Valid License",
            count: not_yes(|r| r.valid_driver_license.as_deref()),
            percentage: 0.0,
            severity: Severity::Medium,
            status: RiskStatus::Missing,
        },
        RiskItem {
            category: "No Reliable Transport",
            count: not_yes(|r| r.reliable_transport.as_deref()),
            percentage: 0.0,
            severity: Severity::Medium,
            status: RiskStatus::Missing,
        },
        RiskItem {
            category: "Insufficient Experience",
            count: not_yes(|r| r.one_year_experience.as_deref()),
            percentage: 0.0,
            severity: Severity::Low,
            status: RiskStatus::Missing,
        },
    ];

    categories
        .into_iter()
        .filter(|item| item.count > 0)
        .map(|item| RiskItem {
            percentage: pct(item.count, total),
            ..item
        })
        .collect()
}

/// One credential partitioned into has/missing/failed counts.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ComplianceCredential {
    pub credential: &'static str,
    pub has_credential: usize,
    pub missing_credential: usize,
    pub failed_check: usize,
    pub total: usize,
}

const CREDENTIALS: &[(&str, fn(&CandidateRecord) -> Option<&str>)] = &[
    ("Background Check", |r| r.background_check.as_deref()),
    ("TB Test", |r| r.tb_test_negative.as_deref()),
    ("CPR Certificate", |r| r.cpr_certificate.as_deref()),
    ("Valid Driver License", |r| r.valid_driver_license.as_deref()),
];

/// Four credentials partitioned by the three-valued classification:
/// yes → has, unknown → missing, no → failed.
pub fn compliance_credentials(records: &[CandidateRecord]) -> Vec<ComplianceCredential> {
    let total = records.len();
    CREDENTIALS
        .iter()
        .map(|(credential, field)| {
            let mut has = 0;
            let mut missing = 0;
            let mut failed = 0;
            for record in records {
                match YesNo::classify(field(record)) {
                    YesNo::Yes => has += 1,
                    YesNo::Unknown => missing += 1,
                    YesNo::No => failed += 1,
                }
            }
            ComplianceCredential {
                credential,
                has_credential: has,
                missing_credential: missing,
                failed_check: failed,
                total,
            }
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Result distribution, travel ability, red flags, client types
// ---------------------------------------------------------------------------

/// Share of one raw interview result value.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResultShare {
    pub result: String,
    pub count: usize,
    pub percentage: f64,
}

/// Raw result shares, `"UNKNOWN"` for unset, descending by count.
pub fn result_distribution(records: &[CandidateRecord]) -> Vec<ResultShare> {
    let total = records.len();
    let mut by_result: BTreeMap<String, usize> = BTreeMap::new();
    for record in records {
        let label = record
            .result
            .as_ref()
            .map(|r| r.label().to_string())
            .unwrap_or_else(|| "UNKNOWN".to_string());
        *by_result.entry(label).or_default() += 1;
    }

    let mut shares: Vec<ResultShare> = by_result
        .into_iter()
        .map(|(result, count)| ResultShare {
            result,
            count,
            percentage: pct(count, total),
        })
        .collect();
    shares.sort_by(|a, b| b.count.cmp(&a.count));
    shares
}

/// One travel-ability category.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TravelAbility {
    pub category: &'static str,
    pub count: usize,
    pub percentage: f64,
}

/// Can/cannot/unknown partition of `can_travel`; empty categories are
/// dropped.
pub fn travel_ability(records: &[CandidateRecord]) -> Vec<TravelAbility> {
    let total = records.len();
    let mut can = 0;
    let mut cannot = 0;
    let mut unknown = 0;
    for record in records {
        match YesNo::classify(record.can_travel.as_deref()) {
            YesNo::Yes => can += 1,
            YesNo::No => cannot += 1,
            YesNo::Unknown => unknown += 1,
        }
    }

    [
        ("Can Travel", can),
        ("Cannot Travel", cannot),
        ("Unknown", unknown),
    ]
    .into_iter()
    .filter(|(_, count)| *count > 0)
    .map(|(category, count)| TravelAbility {
        category,
        count,
        percentage: pct(count, total),
    })
    .collect()
}

/// Frequency of one red flag across flagged candidates.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RedFlagFrequency {
    pub flag: String,
    pub count: usize,
    /// Share of candidates that have at least one flag.
    pub percentage: f64,
}

/// Per-flag occurrence counts, descending. Percentages are relative to the
/// flagged subset, not the whole population.
pub fn red_flag_frequency(records: &[CandidateRecord]) -> Vec<RedFlagFrequency> {
    let mut by_flag: BTreeMap<String, usize> = BTreeMap::new();
    let mut flagged = 0usize;
    for record in records {
        if record.red_flags.is_empty() {
            continue;
        }
        flagged += 1;
        for flag in &record.red_flags {
            *by_flag.entry(flag.clone()).or_default() += 1;
        }
    }

    let mut frequencies: Vec<RedFlagFrequency> = by_flag
        .into_iter()
        .map(|(flag, count)| RedFlagFrequency {
            flag,
            count,
            percentage: pct(count, flagged),
        })
        .collect();
    frequencies.sort_by(|a, b| b.count.cmp(&a.count));
    frequencies
}

/// Average scores for one client-type cohort.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ClientTypeScores {
    pub client_type: String,
    pub averages: AverageScores,
    pub count: usize,
}

/// Group by `client_type` (absent → `"Unknown"`), average scores per
/// group, descending by group size.
pub fn scores_by_client_type(records: &[CandidateRecord]) -> Vec<ClientTypeScores> {
    let mut groups: BTreeMap<String, Vec<CandidateRecord>> = BTreeMap::new();
    for record in records {
        groups
            .entry(
                record
                    .client_type
                    .clone()
                    .unwrap_or_else(|| "Unknown".to_string()),
            )
            .or_default()
            .push(record.clone());
    }

    let mut cohorts: Vec<ClientTypeScores> = groups
        .into_iter()
        .map(|(client_type, group)| ClientTypeScores {
            client_type,
            averages: average_scores(&group),
            count: group.len(),
        })
        .collect();
    cohorts.sort_by(|a, b| b.count.cmp(&a.count));
    cohorts
}

// ---------------------------------------------------------------------------
// Full report
// ---------------------------------------------------------------------------

/// Everything the report renderer needs for the candidate dataset.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CandidateReport {
    pub total: usize,
    pub funnel: Vec<FunnelStage>,
    pub qualification_status: QualificationStatus,
    pub qualifications: Vec<QualificationBreakdown>,
    pub score_distributions: ScoreDistributions,
    pub average_scores: AverageScores,
    pub statistical_summaries: Vec<StatisticalSummary>,
    pub score_correlations: Vec<ScoreCorrelation>,
    pub geography: Vec<GeographicBucket>,
    pub time_series: Vec<TimeSeriesPoint>,
    pub risks: Vec<RiskItem>,
    pub compliance: Vec<ComplianceCredential>,
    pub results: Vec<ResultShare>,
    pub travel: Vec<TravelAbility>,
    pub red_flags: Vec<RedFlagFrequency>,
    pub client_types: Vec<ClientTypeScores>,
}

/// Assemble every candidate view in one pass over the collection.
pub fn report(records: &[CandidateRecord], cfg: &ReportConfig) -> CandidateReport {
    debug!(records = records.len(), "assembling candidate report");
    CandidateReport {
        total: records.len(),
        funnel: recruitment_funnel(records),
        qualification_status: qualification_status(records),
        qualifications: qualification_breakdown(records),
        score_distributions: score_distributions(records),
        average_scores: average_scores(records),
        statistical_summaries: statistical_summaries(records),
        score_correlations: score_correlations(records),
        geography: geographic_distribution(records, cfg.top_states),
        time_series: time_series(records),
        risks: risk_metrics(records),
        compliance: compliance_credentials(records),
        results: result_distribution(records),
        travel: travel_ability(records),
        red_flags: red_flag_frequency(records),
        client_types: scores_by_client_type(records),
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
