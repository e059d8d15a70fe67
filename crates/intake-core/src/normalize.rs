//! Record normalizer — maps heterogeneous raw rows onto canonical records.
//!
//! Input rows arrive as arbitrary key/value maps from three source shapes:
//! PascalCase CSV headers, snake_case API/Excel fields, and camelCase JSON.
//! Each canonical field carries an explicit alias list, resolved in order;
//! the first alias present with a non-empty coercible value wins.
//!
//! The contract is deliberately lenient: only the identity fields
//! (`contact_name`, `phone_number`) can reject a row. Every other field
//! degrades to `None` or an empty list on absent, null, or unparseable
//! input — a malformed optional field must never drop a record.

use crate::types::{CandidateRecord, CustomerRecord, FormRecord, InterviewResult};
use serde_json::Value;
use thiserror::Error;
use tracing::warn;

/// One raw input row, as parsed from CSV/Excel/API JSON.
pub type RawRow = serde_json::Map<String, Value>;

/// Why a row was rejected at ingestion. Only identity fields reject.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum RejectReason {
    #[error("missing contact name")]
    MissingContactName,
    #[error("missing phone number")]
    MissingPhoneNumber,
}

// ---------------------------------------------------------------------------
// Field resolution helpers
// ---------------------------------------------------------------------------

/// Coerce a JSON scalar to its canonical string form. Booleans become
/// `Yes`/`No` so downstream yes/no classification sees one vocabulary;
/// arrays and objects are not scalars and coerce to nothing.
fn coerce(value: &Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::Bool(true) => Some("Yes".to_string()),
        Value::Bool(false) => Some("No".to_string()),
        Value::Number(n) => Some(n.to_string()),
        Value::String(s) => Some(s.clone()),
        Value::Array(_) | Value::Object(_) => None,
    }
}

/// Resolve an optional scalar field: first alias with a non-empty value wins.
fn scalar(row: &RawRow, aliases: &[&str]) -> Option<String> {
    aliases
        .iter()
        .filter_map(|key| row.get(*key))
        .find_map(|value| {
            coerce(value)
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
        })
}

/// Resolve a required identity field, rejecting the row when absent.
fn required(row: &RawRow, aliases: &[&str], reject: RejectReason) -> Result<String, RejectReason> {
    scalar(row, aliases).ok_or(reject)
}

/// Resolve a list field. Accepts a native JSON array of scalars or a
/// JSON-encoded string; any parse failure yields an empty list.
fn string_list(row: &RawRow, aliases: &[&str]) -> Vec<String> {
    let Some(value) = aliases.iter().find_map(|key| row.get(*key)) else {
        return Vec::new();
    };
    match value {
        Value::Array(items) => items.iter().filter_map(coerce).collect(),
        Value::String(s) => serde_json::from_str::<Vec<String>>(s).unwrap_or_default(),
        _ => Vec::new(),
    }
}

// ---------------------------------------------------------------------------
// Candidate rows
// ---------------------------------------------------------------------------

/// Normalize one candidate evaluation row.
pub fn normalize_candidate(row: &RawRow) -> Result<CandidateRecord, RejectReason> {
    let contact_name = required(
        row,
        &["ContactName", "contact_name", "contactName"],
        RejectReason::MissingContactName,
    )?;
    let phone_number = required(
        row,
        &["PhoneNumber", "phone_number", "phoneNumber"],
        RejectReason::MissingPhoneNumber,
    )?;

    Ok(CandidateRecord {
        guid: scalar(row, &["GUID", "guid"]),
        result: scalar(row, &["Result", "result"]).and_then(|raw| InterviewResult::parse(&raw)),
        contact_name,
        phone_number,
        date_time: scalar(row, &["DateTime", "date_time", "dateTime"]),
        previous_location: scalar(row, &["PreviousLocation", "previous_location", "previousLocation"]),
        employment_period: scalar(row, &["EmploymentPeriod", "employment_period", "employmentPeriod"]),
        work_per_week: scalar(row, &["WorkPerWeek", "work_per_week", "workPerWeek"]),
        can_travel: scalar(row, &["CanTravel", "can_travel", "canTravel"]),
        one_year_experience: scalar(
            row,
            &["OneYearExperience", "one_year_experience", "oneYearExperience"],
        ),
        valid_driver_license: scalar(
            row,
            &["ValidDriverLicense", "valid_driver_license", "validDriverLicense"],
        ),
        reliable_transport: scalar(
            row,
            &["ReliableTransport", "reliable_transport", "reliableTransport"],
        ),
        pay_rate: scalar(row, &["PayRate", "pay_rate", "payRate"]),
        dementia_client: scalar(row, &["DementiaClient", "dementia_client", "dementiaClient"]),
        background_check: scalar(row, &["BackgroundCheck", "background_check", "backgroundCheck"]),
        tb_test_negative: scalar(row, &["TBTestNegative", "tb_test_negative", "tbTestNegative"]),
        cpr_certificate: scalar(row, &["CPRCertificate", "cpr_certificate", "cprCertificate"]),
        experience: scalar(row, &["Experience", "experience"]),
        client_type: scalar(row, &["ClientType", "client_type", "clientType"]),
        caregiver_quality: scalar(row, &["CaregiverQuality", "caregiver_quality", "caregiverQuality"]),
        client_refusal: scalar(row, &["ClientRefusal", "client_refusal", "clientRefusal"]),
        first_action: scalar(row, &["FirstAction", "first_action", "firstAction"]),
        phone2: scalar(row, &["Phone2", "phone2"]),
        email_address: scalar(row, &["EmailAddress", "email_address", "emailAddress", "email"]),
        experience_score: scalar(row, &["ExperienceScore", "experience_score", "experienceScore"]),
        compassion_score: scalar(row, &["CompassionScore", "compassion_score", "compassionScore"]),
        safety_score: scalar(row, &["SafetyScore", "safety_score", "safetyScore"]),
        professionalism_score: scalar(
            row,
            &["ProfessionalismScore", "professionalism_score", "professionalismScore"],
        ),
        performance_summary: scalar(
            row,
            &["PerformanceSummary", "performance_summary", "performanceSummary"],
        ),
        red_flags: string_list(row, &["RedFlags", "red_flags", "redFlags"]),
        follow_up_questions: string_list(
            row,
            &["FollowUpQuestions", "follow_up_questions", "followUpQuestions"],
        ),
        questions_asked: string_list(row, &["QuestionsAsked", "questions_asked", "questionsAsked"]),
        callback_date: scalar(row, &["CallbackDate", "callback_date", "callbackDate"]),
    })
}

/// Normalize a batch of candidate rows, skipping rejected ones with a
/// warning (one per row plus a summary count).
pub fn normalize_candidates(rows: &[RawRow]) -> Vec<CandidateRecord> {
    batch(rows, "candidate", normalize_candidate)
}

// ---------------------------------------------------------------------------
// Customer rows
// ---------------------------------------------------------------------------

/// Normalize one customer service inquiry row.
pub fn normalize_customer(row: &RawRow) -> Result<CustomerRecord, RejectReason> {
    let contact_name = required(
        row,
        &["ContactName", "contact_name", "contactName"],
        RejectReason::MissingContactName,
    )?;
    let phone_number = required(
        row,
        &["PhoneNumber", "phone_number", "phoneNumber"],
        RejectReason::MissingPhoneNumber,
    )?;

    Ok(CustomerRecord {
        guid: scalar(row, &["GUID", "guid"]),
        contact_name,
        phone_number,
        date_time: scalar(row, &["DateTime", "date_time", "dateTime"]),
        referral: scalar(row, &["Referral", "referral"]),
        service_experience: scalar(
            row,
            &["ServiceExperience", "service_experience", "serviceExperience"],
        ),
        zip_code: scalar(row, &["ZipCode", "zipcode", "zip_code", "zipCode"]),
        patient_identity: scalar(row, &["PatientIdentity", "patient_identity", "patientIdentity"]),
        patient_problem: scalar(row, &["PatientProblem", "patient_problem", "patientProblem"]),
        service_hours: scalar(row, &["ServiceHours", "service_hours", "serviceHours"]),
        service_time: scalar(row, &["ServiceTime", "service_time", "serviceTime"]),
        client_address: scalar(row, &["ClientAddress", "client_address", "clientAddress"]),
        client_email: scalar(row, &["ClientEmail", "client_email", "clientEmail"]),
        callback_date: scalar(row, &["CallbackDate", "callback_date", "callbackDate"]),
        nurse_visit: scalar(row, &["NurseVisit", "nurse_visit", "nurseVisit"]),
    })
}

/// Normalize a batch of customer rows, skipping rejected ones.
pub fn normalize_customers(rows: &[RawRow]) -> Vec<CustomerRecord> {
    batch(rows, "customer", normalize_customer)
}

// ---------------------------------------------------------------------------
// Form submission rows
// ---------------------------------------------------------------------------

/// Normalize one web-form staff application row.
///
/// Form rows cross-map from the interview-evaluation field names when they
/// arrive via the Excel/API export (e.g. `one_year_experience` feeds
/// `has_experience`), so those aliases come first.
pub fn normalize_form(row: &RawRow) -> Result<FormRecord, RejectReason> {
    let contact_name = required(
        row,
        &["contact_name", "ContactName", "contactName"],
        RejectReason::MissingContactName,
    )?;
    let phone_number = required(
        row,
        &["phone_number", "PhoneNumber", "phoneNumber"],
        RejectReason::MissingPhoneNumber,
    )?;

    Ok(FormRecord {
        guid: scalar(row, &["GUID", "guid"]),
        result: scalar(row, &["result", "Result"]),
        contact_name,
        phone_number,
        date_time: scalar(row, &["date_time", "DateTime", "dateTime"]),
        email: scalar(row, &["email_address", "email", "EmailAddress"]),
        has_experience: scalar(
            row,
            &["one_year_experience", "oneYearExperience", "hasExperience"],
        ),
        has_availability: scalar(row, &["work_per_week", "workPerWeek", "hasAvailability"]),
        has_vehicle: scalar(row, &["valid_driver_license", "validDriverLicense", "hasVehicle"]),
        willing_to_travel: scalar(row, &["can_travel", "canTravel", "willingToTravel"]),
        pay_rate_acceptance: scalar(row, &["pay_rate", "payRate", "payRateAcceptance"]),
        worked_before: scalar(row, &["employment_period", "employmentPeriod", "workedBefore"]),
        has_cpr_certification: scalar(
            row,
            &["cpr_certificate", "cprCertificate", "hasCPRCertification"],
        ),
        can_provide_tb_test: scalar(row, &["tb_test_negative", "tbTestNegative", "canProvideTBTest"]),
        has_background_check_issues: scalar(
            row,
            &[
                "background_check_issues",
                "backgroundCheckIssues",
                "hasBackgroundCheckIssues",
            ],
        ),
        background_check_fee_acceptance: scalar(
            row,
            &["background_check", "backgroundCheck", "backgroundCheckFeeAcceptance"],
        ),
        caregiving_background: scalar(
            row,
            &["care_experience", "careExperience", "caregivingBackground"],
        ),
        has_dementia_experience: scalar(
            row,
            &["dementia_client", "dementiaClient", "hasDementiaExperience"],
        ),
        background_check_issues_description: scalar(
            row,
            &[
                "BackgroundCheckIssuesDescription",
                "backgroundCheckIssuesDescription",
                "background_check_issues_description",
            ],
        ),
        good_caregiver_qualities: scalar(
            row,
            &["goodCaregiverQualities", "good_caregiver_qualities"],
        ),
        consent_to_messages: scalar(row, &["consent_to_messages", "consentToMessages"]),
    })
}

/// Normalize a batch of form submission rows, skipping rejected ones.
pub fn normalize_forms(rows: &[RawRow]) -> Vec<FormRecord> {
    batch(rows, "form", normalize_form)
}

// ---------------------------------------------------------------------------
// Batch plumbing
// ---------------------------------------------------------------------------

fn batch<R>(
    rows: &[RawRow],
    kind: &'static str,
    normalize: impl Fn(&RawRow) -> Result<R, RejectReason>,
) -> Vec<R> {
    let mut records = Vec::with_capacity(rows.len());
    let mut rejected = 0usize;
    for (index, row) in rows.iter().enumerate() {
        match normalize(row) {
            Ok(record) => records.push(record),
            Err(reason) => {
                rejected += 1;
                warn!(kind, row = index, %reason, "rejected row");
            }
        }
    }
    if rejected > 0 {
        warn!(kind, rejected, total = rows.len(), "dropped invalid rows");
    }
    records
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
