//! Customer analytics — aggregate views over service inquiries.
//!
//! Same contract as the candidate family: pure, total functions with
//! explicit zero-denominator fallbacks. The free-text views (sentiment,
//! patient problems, service time-of-day) classify by case-insensitive
//! substring match against fixed vocabularies.

use crate::dates::date_key;
use crate::stats::pct;
use intake_core::config::ReportConfig;
use intake_core::types::CustomerRecord;
use regex::Regex;
use serde::Serialize;
use std::collections::BTreeMap;
use std::sync::LazyLock;
use tracing::debug;

// ---------------------------------------------------------------------------
// Sentiment classification
// ---------------------------------------------------------------------------

const POSITIVE_KEYWORDS: &[&str] = &["good", "excellent", "great"];
const NEGATIVE_KEYWORDS: &[&str] = &["bad", "poor", "issue", "late", "problem"];

/// Keyword-derived sentiment of a `service_experience` free-text field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sentiment {
    Positive,
    Negative,
    Neutral,
    NoExperience,
}

impl Sentiment {
    pub const ALL: [Sentiment; 4] = [
        Sentiment::Positive,
        Sentiment::Negative,
        Sentiment::Neutral,
        Sentiment::NoExperience,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Sentiment::Positive => "Positive",
            Sentiment::Negative => "Negative",
            Sentiment::Neutral => "Neutral",
            Sentiment::NoExperience => "No Experience",
        }
    }

    /// Classify a service-experience text. Positive keywords take
    /// precedence over negative ones; empty or absent text is "no
    /// experience", and text matching neither list is neutral.
    pub fn classify(text: Option<&str>) -> Self {
        let text = text.unwrap_or("").to_lowercase();
        if POSITIVE_KEYWORDS.iter().any(|k| text.contains(k)) {
            Sentiment::Positive
        } else if NEGATIVE_KEYWORDS.iter().any(|k| text.contains(k)) {
            Sentiment::Negative
        } else if text.is_empty() {
            Sentiment::NoExperience
        } else {
            Sentiment::Neutral
        }
    }
}

// ---------------------------------------------------------------------------
// Inquiry trends
// ---------------------------------------------------------------------------

/// Inquiry count for one calendar date.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InquiryTrend {
    pub date: String,
    pub count: usize,
}

/// Per-date inquiry counts, ascending by ISO date key. Records with no
/// timestamp at all are skipped; present-but-unparseable timestamps bucket
/// as `"Unknown"`.
pub fn inquiry_trends(records: &[CustomerRecord]) -> Vec<InquiryTrend> {
    let mut by_date: BTreeMap<String, usize> = BTreeMap::new();
    for record in records {
        if let Some(raw) = record.date_time.as_deref() {
            *by_date.entry(date_key(Some(raw))).or_default() += 1;
        }
    }
    by_date
        .into_iter()
        .map(|(date, count)| InquiryTrend { date, count })
        .collect()
}

// ---------------------------------------------------------------------------
// Referral sources and sentiment
// ---------------------------------------------------------------------------

/// Share of one referral source.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReferralSource {
    pub source: String,
    pub count: usize,
    pub percentage: f64,
}

/// Inquiry share per referral source (absent → `"Not Specified"`),
/// descending by count.
pub fn referral_sources(records: &[CustomerRecord]) -> Vec<ReferralSource> {
    let total = records.len();
    let mut by_source: BTreeMap<String, usize> = BTreeMap::new();
    for record in records {
        *by_source.entry(referral_label(record)).or_default() += 1;
    }

    let mut sources: Vec<ReferralSource> = by_source
        .into_iter()
        .map(|(source, count)| ReferralSource {
            source,
            count,
            percentage: pct(count, total),
        })
        .collect();
    sources.sort_by(|a, b| b.count.cmp(&a.count));
    sources
}

fn referral_label(record: &CustomerRecord) -> String {
    record
        .referral
        .as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .unwrap_or("Not Specified")
        .to_string()
}

/// Share of one sentiment class.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SentimentShare {
    pub sentiment: &'static str,
    pub count: usize,
    pub percentage: f64,
}

/// Sentiment shares over the whole population, descending by count;
/// classes nobody falls into are omitted.
pub fn service_sentiment(records: &[CustomerRecord]) -> Vec<SentimentShare> {
    let total = records.len();
    let mut counts = [0usize; Sentiment::ALL.len()];
    for record in records {
        let sentiment = Sentiment::classify(record.service_experience.as_deref());
        counts[Sentiment::ALL.iter().position(|s| *s == sentiment).unwrap()] += 1;
    }

    let mut shares: Vec<SentimentShare> = Sentiment::ALL
        .iter()
        .zip(counts)
        .filter(|(_, count)| *count > 0)
        .map(|(sentiment, count)| SentimentShare {
            sentiment: sentiment.label(),
            count,
            percentage: pct(count, total),
        })
        .collect();
    shares.sort_by(|a, b| b.count.cmp(&a.count));
    shares
}

// ---------------------------------------------------------------------------
// Patient problems
// ---------------------------------------------------------------------------

/// The fixed care-need vocabulary scanned against `patient_problem` text.
pub const PROBLEM_KEYWORDS: &[&str] = &[
    "memory",
    "dementia",
    "alzheimer",
    "forgetting",
    "confusion",
    "safety",
    "medication",
    "wound care",
    "surgery",
    "transplant",
    "bathing",
    "eating",
    "mobility",
    "fall",
    "supervision",
];

const DEMENTIA_KEYWORDS: &[&str] = &["dementia", "memory", "alzheimer", "forgetting"];

/// Count of inquiries mentioning one vocabulary term.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PatientProblem {
    pub problem: &'static str,
    pub count: usize,
}

/// Scan the fixed vocabulary against every inquiry's `patient_problem`
/// text; each term counts once per inquiry that mentions it. Top `top`
/// terms by count, zero-count terms omitted.
pub fn patient_problems(records: &[CustomerRecord], top: usize) -> Vec<PatientProblem> {
    let mut problems: Vec<PatientProblem> = PROBLEM_KEYWORDS
        .iter()
        .map(|keyword| PatientProblem {
            problem: keyword,
            count: records
                .iter()
                .filter(|r| {
                    r.patient_problem
                        .as_deref()
                        .is_some_and(|p| p.to_lowercase().contains(keyword))
                })
                .count(),
        })
        .filter(|p| p.count > 0)
        .collect();
    problems.sort_by(|a, b| b.count.cmp(&a.count));
    problems.truncate(top);
    problems
}

/// Inquiries whose problem text suggests memory care.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DementiaShare {
    pub total: usize,
    pub with_dementia: usize,
    pub percentage: f64,
}

pub fn dementia_share(records: &[CustomerRecord]) -> DementiaShare {
    let with_dementia = records
        .iter()
        .filter(|r| {
            r.patient_problem.as_deref().is_some_and(|p| {
                let p = p.to_lowercase();
                DEMENTIA_KEYWORDS.iter().any(|k| p.contains(k))
            })
        })
        .count();
    DementiaShare {
        total: records.len(),
        with_dementia,
        percentage: pct(with_dementia, records.len()),
    }
}

// ---------------------------------------------------------------------------
// Service hours
// ---------------------------------------------------------------------------

static FIRST_INTEGER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\d+").expect("static regex must compile"));

/// First embedded integer in a free-text hours field, if any.
fn embedded_hours(raw: &str) -> Option<u32> {
    FIRST_INTEGER.find(raw).and_then(|m| m.as_str().parse().ok())
}

/// Weekly-hours bucket with its display label.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceHoursBucket {
    pub range: &'static str,
    pub count: usize,
}

const HOURS_BUCKETS: &[&str] = &[
    "0-20 hours/week",
    "21-40 hours/week",
    "41-60 hours/week",
    "60+ hours/week",
    "Not Specified",
];

fn hours_bucket(hours: Option<u32>) -> &'static str {
    match hours {
        Some(h) if h <= 20 => HOURS_BUCKETS[0],
        Some(h) if h <= 40 => HOURS_BUCKETS[1],
        Some(h) if h <= 60 => HOURS_BUCKETS[2],
        Some(_) => HOURS_BUCKETS[3],
        None => HOURS_BUCKETS[4],
    }
}

/// Requested-hours buckets in fixed display order; inquiries with no
/// `service_hours` text at all are skipped, text with no embedded number
/// buckets as "Not Specified". Empty buckets are omitted.
pub fn service_hours(records: &[CustomerRecord]) -> Vec<ServiceHoursBucket> {
    let mut counts: BTreeMap<&'static str, usize> = BTreeMap::new();
    for record in records {
        if let Some(raw) = record.service_hours.as_deref() {
            *counts.entry(hours_bucket(embedded_hours(raw))).or_default() += 1;
        }
    }
    HOURS_BUCKETS
        .iter()
        .filter_map(|range| {
            counts.get(range).map(|count| ServiceHoursBucket {
                range,
                count: *count,
            })
        })
        .collect()
}

/// Descriptive statistics over the embedded hour counts.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceHoursSummary {
    /// Rounded to one decimal place.
    pub mean: f64,
    /// Midpoint of the two central values for even counts.
    pub median: f64,
    pub min: u32,
    pub max: u32,
}

pub fn service_hours_summary(records: &[CustomerRecord]) -> ServiceHoursSummary {
    let mut hours: Vec<u32> = records
        .iter()
        .filter_map(|r| r.service_hours.as_deref().and_then(embedded_hours))
        .collect();
    if hours.is_empty() {
        return ServiceHoursSummary {
            mean: 0.0,
            median: 0.0,
            min: 0,
            max: 0,
        };
    }
    hours.sort_unstable();

    let sum: u64 = hours.iter().map(|&h| h as u64).sum();
    let mean = sum as f64 / hours.len() as f64;
    let median = if hours.len() % 2 == 0 {
        (hours[hours.len() / 2 - 1] as f64 + hours[hours.len() / 2] as f64) / 2.0
    } else {
        hours[hours.len() / 2] as f64
    };

    ServiceHoursSummary {
        mean: (mean * 10.0).round() / 10.0,
        median,
        min: hours[0],
        max: hours[hours.len() - 1],
    }
}

// ---------------------------------------------------------------------------
// Service time of day
// ---------------------------------------------------------------------------

/// Share of one time-of-day class.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceTimeShare {
    pub time: &'static str,
    pub count: usize,
    pub percentage: f64,
}

const TIME_CLASSES: &[&str] = &[
    "Morning",
    "Afternoon",
    "Evening",
    "Night",
    "Flexible",
    "Not Specified",
];

fn time_of_day(raw: Option<&str>) -> &'static str {
    let text = raw.unwrap_or("").to_lowercase();
    if text.contains("morning") {
        "Morning"
    } else if text.contains("afternoon") {
        "Afternoon"
    } else if text.contains("evening") {
        "Evening"
    } else if text.contains("night") {
        "Night"
    } else if !text.is_empty() {
        "Flexible"
    } else {
        "Not Specified"
    }
}

/// Time-of-day shares, descending by count; empty classes omitted.
pub fn service_times(records: &[CustomerRecord]) -> Vec<ServiceTimeShare> {
    let total = records.len();
    let mut counts: BTreeMap<&'static str, usize> = BTreeMap::new();
    for record in records {
        *counts
            .entry(time_of_day(record.service_time.as_deref()))
            .or_default() += 1;
    }

    let mut shares: Vec<ServiceTimeShare> = TIME_CLASSES
        .iter()
        .filter_map(|class| {
            counts.get(class).map(|count| ServiceTimeShare {
                time: class,
                count: *count,
                percentage: pct(*count, total),
            })
        })
        .collect();
    shares.sort_by(|a, b| b.count.cmp(&a.count));
    shares
}

// ---------------------------------------------------------------------------
// Zip codes, contact methods, callbacks, nurse preference
// ---------------------------------------------------------------------------

/// Inquiry count for one zip code.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ZipCodeCount {
    pub zip_code: String,
    pub count: usize,
}

/// All zip codes (absent → `"Unknown"`), descending by count.
pub fn zip_code_distribution(records: &[CustomerRecord]) -> Vec<ZipCodeCount> {
    let mut by_zip: BTreeMap<String, usize> = BTreeMap::new();
    for record in records {
        let zip = record
            .zip_code
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .unwrap_or("Unknown")
            .to_string();
        *by_zip.entry(zip).or_default() += 1;
    }

    let mut zips: Vec<ZipCodeCount> = by_zip
        .into_iter()
        .map(|(zip_code, count)| ZipCodeCount { zip_code, count })
        .collect();
    zips.sort_by(|a, b| b.count.cmp(&a.count));
    zips
}

/// The busiest `top` zip codes.
pub fn top_zip_codes(records: &[CustomerRecord], top: usize) -> Vec<ZipCodeCount> {
    let mut zips = zip_code_distribution(records);
    zips.truncate(top);
    zips
}

/// Share of one contact-method combination.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactMethod {
    pub method: &'static str,
    pub count: usize,
    pub percentage: f64,
}

/// Partition by available contact channels; empty combinations omitted.
pub fn contact_methods(records: &[CustomerRecord]) -> Vec<ContactMethod> {
    let total = records.len();
    let mut both = 0;
    let mut phone_only = 0;
    let mut email_only = 0;
    let mut neither = 0;
    for record in records {
        let has_email = record.client_email.is_some();
        let has_phone = !record.phone_number.trim().is_empty();
        match (has_email, has_phone) {
            (true, true) => both += 1,
            (false, true) => phone_only += 1,
            (true, false) => email_only += 1,
            (false, false) => neither += 1,
        }
    }

    [
        ("Both Email & Phone", both),
        ("Phone Only", phone_only),
        ("Email Only", email_only),
        ("Neither", neither),
    ]
    .into_iter()
    .filter(|(_, count)| *count > 0)
    .map(|(method, count)| ContactMethod {
        method,
        count,
        percentage: pct(count, total),
    })
    .collect()
}

/// Callback-scheduling split. Both rows are always present.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CallbackShare {
    pub has_callback: &'static str,
    pub count: usize,
    pub percentage: f64,
}

pub fn callback_scheduling(records: &[CustomerRecord]) -> Vec<CallbackShare> {
    let total = records.len();
    let with = records.iter().filter(|r| r.callback_date.is_some()).count();
    vec![
        CallbackShare {
            has_callback: "Requested Callback",
            count: with,
            percentage: pct(with, total),
        },
        CallbackShare {
            has_callback: "No Callback",
            count: total - with,
            percentage: pct(total - with, total),
        },
    ]
}

/// Share of one raw nurse-visit answer.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NursePreference {
    pub preference: String,
    pub count: usize,
    pub percentage: f64,
}

/// Raw `nurse_visit` answer shares (absent → `"Not Specified"`),
/// descending by count.
pub fn nurse_preference(records: &[CustomerRecord]) -> Vec<NursePreference> {
    let total = records.len();
    let mut by_preference: BTreeMap<String, usize> = BTreeMap::new();
    for record in records {
        let preference = record
            .nurse_visit
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .unwrap_or("Not Specified")
            .to_string();
        *by_preference.entry(preference).or_default() += 1;
    }

    let mut preferences: Vec<NursePreference> = by_preference
        .into_iter()
        .map(|(preference, count)| NursePreference {
            preference,
            count,
            percentage: pct(count, total),
        })
        .collect();
    preferences.sort_by(|a, b| b.count.cmp(&a.count));
    preferences
}

// ---------------------------------------------------------------------------
// Referral conversion and sentiment cross-analysis
// ---------------------------------------------------------------------------

/// Inquiries that supplied every contact channel.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReferralConversion {
    pub total_inquiries: usize,
    pub with_full_contact: usize,
    pub conversion_rate: f64,
}

/// "Full contact" means phone, email, and address are all present.
pub fn referral_conversion(records: &[CustomerRecord]) -> ReferralConversion {
    let with_full_contact = records
        .iter()
        .filter(|r| {
            !r.phone_number.trim().is_empty()
                && r.client_email.is_some()
                && r.client_address.is_some()
        })
        .count();
    ReferralConversion {
        total_inquiries: records.len(),
        with_full_contact,
        conversion_rate: pct(with_full_contact, records.len()),
    }
}

/// Sentiment counts for one referral source.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReferralSentiment {
    pub referral: String,
    pub positive: usize,
    pub neutral: usize,
    pub negative: usize,
    pub no_experience: usize,
}

/// Referral × sentiment cross-tabulation, descending by row total.
pub fn referral_sentiment_matrix(records: &[CustomerRecord]) -> Vec<ReferralSentiment> {
    let mut by_referral: BTreeMap<String, [usize; 4]> = BTreeMap::new();
    for record in records {
        let cells = by_referral.entry(referral_label(record)).or_default();
        match Sentiment::classify(record.service_experience.as_deref()) {
            Sentiment::Positive => cells[0] += 1,
            Sentiment::Neutral => cells[1] += 1,
            Sentiment::Negative => cells[2] += 1,
            Sentiment::NoExperience => cells[3] += 1,
        }
    }

    let mut rows: Vec<ReferralSentiment> = by_referral
        .into_iter()
        .map(|(referral, [positive, neutral, negative, no_experience])| ReferralSentiment {
            referral,
            positive,
            neutral,
            negative,
            no_experience,
        })
        .collect();
    rows.sort_by(|a, b| {
        let total_a = a.positive + a.neutral + a.negative + a.no_experience;
        let total_b = b.positive + b.neutral + b.negative + b.no_experience;
        total_b.cmp(&total_a)
    });
    rows
}

// ---------------------------------------------------------------------------
// Full report
// ---------------------------------------------------------------------------

/// Everything the report renderer needs for the customer dataset.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerReport {
    pub total: usize,
    pub inquiry_trends: Vec<InquiryTrend>,
    pub referral_sources: Vec<ReferralSource>,
    pub sentiment: Vec<SentimentShare>,
    pub patient_problems: Vec<PatientProblem>,
    pub service_hours: Vec<ServiceHoursBucket>,
    pub service_hours_summary: ServiceHoursSummary,
    pub service_times: Vec<ServiceTimeShare>,
    pub zip_codes: Vec<ZipCodeCount>,
    pub top_zip_codes: Vec<ZipCodeCount>,
    pub contact_methods: Vec<ContactMethod>,
    pub callbacks: Vec<CallbackShare>,
    pub nurse_preference: Vec<NursePreference>,
    pub referral_conversion: ReferralConversion,
    pub dementia: DementiaShare,
    pub referral_sentiment: Vec<ReferralSentiment>,
}

/// Assemble every customer view in one pass over the collection.
pub fn report(records: &[CustomerRecord], cfg: &ReportConfig) -> CustomerReport {
    debug!(records = records.len(), "assembling customer report");
    CustomerReport {
        total: records.len(),
        inquiry_trends: inquiry_trends(records),
        referral_sources: referral_sources(records),
        sentiment: service_sentiment(records),
        patient_problems: patient_problems(records, cfg.top_problems),
        service_hours: service_hours(records),
        service_hours_summary: service_hours_summary(records),
        service_times: service_times(records),
        zip_codes: zip_code_distribution(records),
        top_zip_codes: top_zip_codes(records, cfg.top_zip_codes),
        contact_methods: contact_methods(records),
        callbacks: callback_scheduling(records),
        nurse_preference: nurse_preference(records),
        referral_conversion: referral_conversion(records),
        dementia: dementia_share(records),
        referral_sentiment: referral_sentiment_matrix(records),
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
