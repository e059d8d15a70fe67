//! Raw-row fixtures in the three source casings.
//!
//! The normalizer must produce the same canonical record whether a row
//! arrives with PascalCase CSV headers, snake_case API fields, or
//! camelCase JSON keys; these fixtures describe one candidate in each
//! shape.

use intake_core::normalize::RawRow;
use serde_json::{json, Value};

/// Build a raw row from a `json!` object literal.
pub fn row(value: Value) -> RawRow {
    value
        .as_object()
        .expect("fixture rows must be JSON objects")
        .clone()
}

pub fn pascal_candidate_row() -> RawRow {
    row(json!({
        "GUID": "c-001",
        "Result": "PASS",
        "ContactName": "Dana Reeves",
        "PhoneNumber": "410-555-0142",
        "DateTime": "2024-01-15 10:30 AM",
        "PreviousLocation": "Baltimore, MD",
        "WorkPerWeek": "Yes",
        "CanTravel": "Yes",
        "OneYearExperience": "Yes",
        "PayRate": "Yes",
        "ValidDriverLicense": "Yes",
        "BackgroundCheck": "Yes",
        "TBTestNegative": "No",
        "CPRCertificate": "",
        "ExperienceScore": "4.5",
        "CompassionScore": "4",
        "SafetyScore": "3.5",
        "ProfessionalismScore": "5",
        "RedFlags": "[\"left client unattended\"]",
        "ClientType": "Elderly",
    }))
}

pub fn snake_candidate_row() -> RawRow {
    row(json!({
        "guid": "c-001",
        "result": "PASS",
        "contact_name": "Dana Reeves",
        "phone_number": "410-555-0142",
        "date_time": "2024-01-15 10:30 AM",
        "previous_location": "Baltimore, MD",
        "work_per_week": "Yes",
        "can_travel": "Yes",
        "one_year_experience": "Yes",
        "pay_rate": "Yes",
        "valid_driver_license": "Yes",
        "background_check": "Yes",
        "tb_test_negative": "No",
        "cpr_certificate": "",
        "experience_score": "4.5",
        "compassion_score": "4",
        "safety_score": "3.5",
        "professionalism_score": "5",
        "red_flags": ["left client unattended"],
        "client_type": "Elderly",
    }))
}

pub fn camel_candidate_row() -> RawRow {
    row(json!({
        "guid": "c-001",
        "result": "PASS",
        "contactName": "Dana Reeves",
        "phoneNumber": "410-555-0142",
        "dateTime": "2024-01-15 10:30 AM",
        "previousLocation": "Baltimore, MD",
        "workPerWeek": "Yes",
        "canTravel": "Yes",
        "oneYearExperience": "Yes",
        "payRate": "Yes",
        "validDriverLicense": "Yes",
        "backgroundCheck": "Yes",
        "tbTestNegative": "No",
        "cprCertificate": "",
        "experienceScore": "4.5",
        "compassionScore": "4",
        "safetyScore": "3.5",
        "professionalismScore": "5",
        "redFlags": ["left client unattended"],
        "clientType": "Elderly",
    }))
}

pub fn customer_row() -> RawRow {
    row(json!({
        "ContactName": "Pat Moreno",
        "PhoneNumber": "301-555-0188",
        "DateTime": "03/02/2024",
        "Referral": "Google",
        "ServiceExperience": "Previous agency was great",
        "ZipCode": "21201",
        "PatientProblem": "Mother has dementia and needs help bathing",
        "ServiceHours": "about 30 hours a week",
        "ServiceTime": "mornings preferred",
        "ClientEmail": "pat@example.com",
        "ClientAddress": "12 Charles St",
        "NurseVisit": "Yes",
    }))
}

pub fn form_row() -> RawRow {
    row(json!({
        "contact_name": "Lee Okafor",
        "phone_number": "240-555-0111",
        "one_year_experience": "yes",
        "work_per_week": "yes",
        "valid_driver_license": "yes",
        "can_travel": "no",
        "background_check_issues": "no",
        "cpr_certificate": "yes",
        "tb_test_negative": "yes",
        "pay_rate": "yes",
        "background_check": "yes",
        "dementia_client": "no",
    }))
}
