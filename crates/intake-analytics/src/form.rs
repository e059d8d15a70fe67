//! Form-submission analytics — aggregate views over web-form staff
//! applications.
//!
//! Form answers come from a controlled UI, so classification uses the
//! strict yes/no vocabulary ([`YesNo::classify_strict`]) — interview-style
//! tokens like `pass` do not count as yes here.

use crate::stats::pct;
use intake_core::types::{FormRecord, YesNo};
use serde::Serialize;
use tracing::debug;

fn strict(value: &Option<String>) -> YesNo {
    YesNo::classify_strict(value.as_deref())
}

/// Whether a submission clears the applicant gate: experience,
/// availability, and a vehicle are all yes, and the applicant did not
/// report background-check issues (unknown issues do not disqualify).
pub fn is_qualified_applicant(record: &FormRecord) -> bool {
    strict(&record.has_experience).is_yes()
        && strict(&record.has_availability).is_yes()
        && strict(&record.has_vehicle).is_yes()
        && !strict(&record.has_background_check_issues).is_yes()
}

// ---------------------------------------------------------------------------
// Qualification views
// ---------------------------------------------------------------------------

/// Per-criterion counts of submissions failing each gate criterion.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FormMissingCriteria {
    pub experience: usize,
    pub availability: usize,
    pub vehicle: usize,
    /// Submissions that affirmatively reported issues (not merely unknown).
    pub background_issues: usize,
}

/// Applicant-gate outcome over the whole submission set.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FormQualificationStatus {
    pub qualified: usize,
    pub not_qualified: usize,
    pub qualified_percentage: f64,
    pub missing_criteria: FormMissingCriteria,
}

pub fn qualification_status(records: &[FormRecord]) -> FormQualificationStatus {
    let qualified = records.iter().filter(|r| is_qualified_applicant(r)).count();
    let not_yes = |field: fn(&FormRecord) -> &Option<String>| {
        records.iter().filter(|r| !strict(field(r)).is_yes()).count()
    };

    FormQualificationStatus {
        qualified,
        not_qualified: records.len() - qualified,
        qualified_percentage: pct(qualified, records.len()),
        missing_criteria: FormMissingCriteria {
            experience: not_yes(|r| &r.has_experience),
            availability: not_yes(|r| &r.has_availability),
            vehicle: not_yes(|r| &r.has_vehicle),
            background_issues: records
                .iter()
                .filter(|r| strict(&r.has_background_check_issues).is_yes())
                .count(),
        },
    }
}

/// One form criterion partitioned yes/no/unknown.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FormQualification {
    pub name: &'static str,
    pub qualified: usize,
    pub not_qualified: usize,
    pub missing: usize,
    pub total: usize,
}

const FORM_CRITERIA: &[(&str, fn(&FormRecord) -> &Option<String>)] = &[
    ("Experience", |r| &r.has_experience),
    ("Availability", |r| &r.has_availability),
    ("Vehicle", |r| &r.has_vehicle),
    ("CPR Certification", |r| &r.has_cpr_certification),
    ("TB Test", |r| &r.can_provide_tb_test),
    ("Willing to Travel", |r| &r.willing_to_travel),
];

/// Six criteria partitioned yes/no/unknown over all submissions.
pub fn qualification_breakdown(records: &[FormRecord]) -> Vec<FormQualification> {
    let total = records.len();
    FORM_CRITERIA
        .iter()
        .map(|(name, field)| {
            let mut qualified = 0;
            let mut not_qualified = 0;
            let mut missing = 0;
            for record in records {
                match strict(field(record)) {
                    YesNo::Yes => qualified += 1,
                    YesNo::No => not_qualified += 1,
                    YesNo::Unknown => missing += 1,
                }
            }
            FormQualification {
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
// Distributions
// ---------------------------------------------------------------------------

/// One category share within a form distribution view.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FormDistribution {
    pub category: &'static str,
    pub count: usize,
    pub percentage: f64,
}

fn three_way(
    records: &[FormRecord],
    field: fn(&FormRecord) -> &Option<String>,
    labels: [&'static str; 3],
) -> Vec<FormDistribution> {
    let total = records.len();
    let yes = records.iter().filter(|r| strict(field(r)) == YesNo::Yes).count();
    let no = records.iter().filter(|r| strict(field(r)) == YesNo::No).count();
    let unknown = total - yes - no;

    [(labels[0], yes), (labels[1], no), (labels[2], unknown)]
        .into_iter()
        .map(|(category, count)| FormDistribution {
            category,
            count,
            percentage: pct(count, total),
        })
        .collect()
}

/// With/without/unknown experience. All three rows are always present.
pub fn experience_distribution(records: &[FormRecord]) -> Vec<FormDistribution> {
    three_way(
        records,
        |r| &r.has_experience,
        ["With Experience", "Without Experience", "Unknown"],
    )
}

/// Background-check issues partition; "No Issues" leads because it is the
/// healthy case.
pub fn background_check_issues(records: &[FormRecord]) -> Vec<FormDistribution> {
    let total = records.len();
    let with = records
        .iter()
        .filter(|r| strict(&r.has_background_check_issues) == YesNo::Yes)
        .count();
    let without = records
        .iter()
        .filter(|r| strict(&r.has_background_check_issues) == YesNo::No)
        .count();
    let unknown = total - with - without;

    [
        ("No Issues", without),
        ("Has Issues", with),
        ("Unknown", unknown),
    ]
    .into_iter()
    .map(|(category, count)| FormDistribution {
        category,
        count,
        percentage: pct(count, total),
    })
    .collect()
}

/// With/without/unknown dementia-care experience.
pub fn dementia_experience(records: &[FormRecord]) -> Vec<FormDistribution> {
    three_way(
        records,
        |r| &r.has_dementia_experience,
        [
            "Has Dementia Experience",
            "No Dementia Experience",
            "Unknown",
        ],
    )
}

/// Yes-counts for the four compliance acceptances.
pub fn compliance_metrics(records: &[FormRecord]) -> Vec<FormDistribution> {
    let total = records.len();
    let yes = |field: fn(&FormRecord) -> &Option<String>| {
        records.iter().filter(|r| strict(field(r)).is_yes()).count()
    };

    [
        ("CPR Certified", yes(|r| &r.has_cpr_certification)),
        ("TB Test Available", yes(|r| &r.can_provide_tb_test)),
        (
            "Background Check Fee Accepted",
            yes(|r| &r.background_check_fee_acceptance),
        ),
        ("Pay Rate Accepted", yes(|r| &r.pay_rate_acceptance)),
    ]
    .into_iter()
    .map(|(category, count)| FormDistribution {
        category,
        count,
        percentage: pct(count, total),
    })
    .collect()
}

/// Yes-counts for the three availability criteria.
pub fn availability_metrics(records: &[FormRecord]) -> Vec<FormDistribution> {
    let total = records.len();
    let yes = |field: fn(&FormRecord) -> &Option<String>| {
        records.iter().filter(|r| strict(field(r)).is_yes()).count()
    };

    [
        ("Has Availability", yes(|r| &r.has_availability)),
        ("Has Vehicle", yes(|r| &r.has_vehicle)),
        ("Willing to Travel", yes(|r| &r.willing_to_travel)),
    ]
    .into_iter()
    .map(|(category, count)| FormDistribution {
        category,
        count,
        percentage: pct(count, total),
    })
    .collect()
}

// ---------------------------------------------------------------------------
// Headline metrics
// ---------------------------------------------------------------------------

/// One headline counter for the summary table.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SummaryMetric {
    pub metric: &'static str,
    pub count: usize,
    pub percentage: f64,
}

/// The six headline counters shown at the top of the form report.
pub fn summary_metrics(records: &[FormRecord]) -> Vec<SummaryMetric> {
    let total = records.len();
    let yes = |field: fn(&FormRecord) -> &Option<String>| {
        records.iter().filter(|r| strict(field(r)).is_yes()).count()
    };
    let qualified = records.iter().filter(|r| is_qualified_applicant(r)).count();
    let with_issues = records
        .iter()
        .filter(|r| strict(&r.has_background_check_issues).is_yes())
        .count();

    let counter = |metric: &'static str, count: usize| SummaryMetric {
        metric,
        count,
        percentage: pct(count, total),
    };

    vec![
        SummaryMetric {
            metric: "Total Submissions",
            count: total,
            percentage: 100.0,
        },
        counter("Qualified Applicants", qualified),
        counter("With Experience", yes(|r| &r.has_experience)),
        counter("With Availability", yes(|r| &r.has_availability)),
        counter("With Vehicle", yes(|r| &r.has_vehicle)),
        counter("Background Check Issues", with_issues),
    ]
}

// ---------------------------------------------------------------------------
// Full report
// ---------------------------------------------------------------------------

/// Everything the report renderer needs for the form dataset.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FormReport {
    pub total: usize,
    pub summary: Vec<SummaryMetric>,
    pub qualification_status: FormQualificationStatus,
    pub qualifications: Vec<FormQualification>,
    pub experience: Vec<FormDistribution>,
    pub background_issues: Vec<FormDistribution>,
    pub dementia_experience: Vec<FormDistribution>,
    pub compliance: Vec<FormDistribution>,
    pub availability: Vec<FormDistribution>,
}

/// Assemble every form view in one pass over the collection.
pub fn report(records: &[FormRecord]) -> FormReport {
    debug!(records = records.len(), "assembling form report");
    FormReport {
        total: records.len(),
        summary: summary_metrics(records),
        qualification_status: qualification_status(records),
        qualifications: qualification_breakdown(records),
        experience: experience_distribution(records),
        background_issues: background_check_issues(records),
        dementia_experience: dementia_experience(records),
        compliance: compliance_metrics(records),
        availability: availability_metrics(records),
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
