//! Core types for intake-core.
//!
//! This module defines the canonical record shapes produced by the
//! normalizer and consumed by the analytics engine: [`CandidateRecord`],
//! [`CustomerRecord`], and [`FormRecord`], plus the three-valued [`YesNo`]
//! classification and the [`InterviewResult`] discriminant.

use phf::phf_set;

// ---------------------------------------------------------------------------
// Three-valued yes/no classification
// ---------------------------------------------------------------------------

static YES_WORDS: phf::Set<&'static str> =
    phf_set! {"yes", "y", "pass", "passed", "completed", "true", "1"};
static NO_WORDS: phf::Set<&'static str> = phf_set! {"no", "n", "fail", "failed", "false", "0"};

static STRICT_YES_WORDS: phf::Set<&'static str> = phf_set! {"yes", "y", "true", "1"};
static STRICT_NO_WORDS: phf::Set<&'static str> = phf_set! {"no", "n", "false", "0"};

/// Result of classifying a free-text yes/no field.
///
/// `Unknown` is deliberately distinct from `No`: the eligibility gates treat
/// both as failing, but "missing" accounting reports them separately.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum YesNo {
    Yes,
    No,
    Unknown,
}

impl YesNo {
    /// Classify a raw field value against the full vocabulary used for
    /// interview evaluations (`pass`/`passed`/`completed` count as yes).
    ///
    /// Case-insensitive and whitespace-trimmed. Absent or empty values, and
    /// anything outside the vocabulary, classify as [`YesNo::Unknown`].
    pub fn classify(value: Option<&str>) -> Self {
        Self::classify_with(value, &YES_WORDS, &NO_WORDS)
    }

    /// Classify against the narrower vocabulary used for web-form
    /// submissions (`yes`/`y`/`true`/`1` and `no`/`n`/`false`/`0` only).
    pub fn classify_strict(value: Option<&str>) -> Self {
        Self::classify_with(value, &STRICT_YES_WORDS, &STRICT_NO_WORDS)
    }

    fn classify_with(
        value: Option<&str>,
        yes: &phf::Set<&'static str>,
        no: &phf::Set<&'static str>,
    ) -> Self {
        let Some(value) = value else {
            return YesNo::Unknown;
        };
        let normalized = value.trim().to_lowercase();
        if yes.contains(normalized.as_str()) {
            YesNo::Yes
        } else if no.contains(normalized.as_str()) {
            YesNo::No
        } else {
            YesNo::Unknown
        }
    }

    pub fn is_yes(self) -> bool {
        self == YesNo::Yes
    }
}

// ---------------------------------------------------------------------------
// Interview result
// ---------------------------------------------------------------------------

/// Outcome of one interview call.
///
/// `Other` preserves the raw token so the result-distribution view can
/// report unexpected values verbatim instead of collapsing them.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum InterviewResult {
    Pass,
    Fail,
    Hangup,
    Other(String),
}

impl InterviewResult {
    /// Parse a raw result token. Returns `None` for empty input so callers
    /// can distinguish "not attempted" from an unexpected token.
    pub fn parse(raw: &str) -> Option<Self> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return None;
        }
        Some(match trimmed.to_uppercase().as_str() {
            "PASS" => InterviewResult::Pass,
            "FAIL" => InterviewResult::Fail,
            "HANGUP" => InterviewResult::Hangup,
            _ => InterviewResult::Other(trimmed.to_string()),
        })
    }

    /// Display label, uppercased the way the source data spells it.
    pub fn label(&self) -> &str {
        match self {
            InterviewResult::Pass => "PASS",
            InterviewResult::Fail => "FAIL",
            InterviewResult::Hangup => "HANGUP",
            InterviewResult::Other(raw) => raw,
        }
    }
}

impl std::fmt::Display for InterviewResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

// ---------------------------------------------------------------------------
// Candidate record
// ---------------------------------------------------------------------------

/// One interview evaluation outcome, normalized from a raw row.
///
/// `contact_name` and `phone_number` are the identity fields; a row missing
/// either is rejected by the normalizer and never reaches analytics. Every
/// other field is best-effort: absent or unparseable input becomes `None`
/// (or an empty list), never an error. Score fields stay decimal strings —
/// the analytics engine parses them lazily and tracks unparseable values as
/// "missing" rather than dropping the record.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CandidateRecord {
    pub guid: Option<String>,
    pub result: Option<InterviewResult>,
    pub contact_name: String,
    pub phone_number: String,
    pub date_time: Option<String>,
    pub previous_location: Option<String>,
    pub employment_period: Option<String>,
    pub work_per_week: Option<String>,
    pub can_travel: Option<String>,
    pub one_year_experience: Option<String>,
    pub valid_driver_license: Option<String>,
    pub reliable_transport: Option<String>,
    pub pay_rate: Option<String>,
    pub dementia_client: Option<String>,
    pub background_check: Option<String>,
    pub tb_test_negative: Option<String>,
    pub cpr_certificate: Option<String>,
    pub experience: Option<String>,
    pub client_type: Option<String>,
    pub caregiver_quality: Option<String>,
    pub client_refusal: Option<String>,
    pub first_action: Option<String>,
    pub phone2: Option<String>,
    pub email_address: Option<String>,
    pub experience_score: Option<String>,
    pub compassion_score: Option<String>,
    pub safety_score: Option<String>,
    pub professionalism_score: Option<String>,
    pub performance_summary: Option<String>,
    pub red_flags: Vec<String>,
    pub follow_up_questions: Vec<String>,
    pub questions_asked: Vec<String>,
    pub callback_date: Option<String>,
}

impl CandidateRecord {
    /// Whether this candidate clears the next-interview qualification gate:
    /// all four required criteria must classify as yes. Unknown fails the
    /// gate exactly like no.
    pub fn qualifies_for_next_interview(&self) -> bool {
        YesNo::classify(self.work_per_week.as_deref()).is_yes()
            && YesNo::classify(self.can_travel.as_deref()).is_yes()
            && YesNo::classify(self.one_year_experience.as_deref()).is_yes()
            && YesNo::classify(self.pay_rate.as_deref()).is_yes()
    }

    pub fn passed(&self) -> bool {
        self.result == Some(InterviewResult::Pass)
    }
}

// ---------------------------------------------------------------------------
// Customer record
// ---------------------------------------------------------------------------

/// One customer service inquiry.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CustomerRecord {
    pub guid: Option<String>,
    pub contact_name: String,
    pub phone_number: String,
    pub date_time: Option<String>,
    pub referral: Option<String>,
    pub service_experience: Option<String>,
    pub zip_code: Option<String>,
    pub patient_identity: Option<String>,
    pub patient_problem: Option<String>,
    pub service_hours: Option<String>,
    pub service_time: Option<String>,
    pub client_address: Option<String>,
    pub client_email: Option<String>,
    pub callback_date: Option<String>,
    pub nurse_visit: Option<String>,
}

// ---------------------------------------------------------------------------
// Form submission record
// ---------------------------------------------------------------------------

/// One web-form staff application.
///
/// The yes/no fields here mirror a subset of [`CandidateRecord`]'s
/// qualification fields under form-specific names, and are classified with
/// [`YesNo::classify_strict`] (the form UI only ever produces literal
/// yes/no answers).
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FormRecord {
    pub guid: Option<String>,
    pub result: Option<String>,
    pub contact_name: String,
    pub phone_number: String,
    pub date_time: Option<String>,
    pub email: Option<String>,
    pub has_experience: Option<String>,
    pub has_availability: Option<String>,
    pub has_vehicle: Option<String>,
    pub willing_to_travel: Option<String>,
    pub pay_rate_acceptance: Option<String>,
    pub worked_before: Option<String>,
    pub has_cpr_certification: Option<String>,
    pub can_provide_tb_test: Option<String>,
    pub has_background_check_issues: Option<String>,
    pub background_check_fee_acceptance: Option<String>,
    pub caregiving_background: Option<String>,
    pub has_dementia_experience: Option<String>,
    pub background_check_issues_description: Option<String>,
    pub good_caregiver_qualities: Option<String>,
    pub consent_to_messages: Option<String>,
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn classify_full_vocabulary() {
        for word in ["yes", "Y", " PASS ", "Passed", "completed", "true", "1"] {
            assert_eq!(YesNo::classify(Some(word)), YesNo::Yes, "{word:?}");
        }
        for word in ["no", "N", "fail", "FAILED", "false", "0"] {
            assert_eq!(YesNo::classify(Some(word)), YesNo::No, "{word:?}");
        }
        for word in ["", "maybe", "si", "  "] {
            assert_eq!(YesNo::classify(Some(word)), YesNo::Unknown, "{word:?}");
        }
        assert_eq!(YesNo::classify(None), YesNo::Unknown);
    }

    #[test]
    fn classify_strict_excludes_interview_tokens() {
        assert_eq!(YesNo::classify_strict(Some("pass")), YesNo::Unknown);
        assert_eq!(YesNo::classify_strict(Some("completed")), YesNo::Unknown);
        assert_eq!(YesNo::classify_strict(Some("yes")), YesNo::Yes);
        assert_eq!(YesNo::classify_strict(Some("0")), YesNo::No);
    }

    #[test]
    fn interview_result_parsing() {
        assert_eq!(InterviewResult::parse("PASS"), Some(InterviewResult::Pass));
        assert_eq!(InterviewResult::parse("hangup"), Some(InterviewResult::Hangup));
        assert_eq!(InterviewResult::parse("  "), None);
        assert_eq!(
            InterviewResult::parse("VOICEMAIL"),
            Some(InterviewResult::Other("VOICEMAIL".to_string()))
        );
    }

    #[test]
    fn gate_is_a_strict_conjunction() {
        let qualified = CandidateRecord {
            work_per_week: Some("Yes".into()),
            can_travel: Some("yes".into()),
            one_year_experience: Some("Y".into()),
            pay_rate: Some("1".into()),
            ..Default::default()
        };
        assert!(qualified.qualifies_for_next_interview());

        let mut unknown_travel = qualified.clone();
        unknown_travel.can_travel = None;
        assert!(!unknown_travel.qualifies_for_next_interview());

        let mut no_pay = qualified.clone();
        no_pay.pay_rate = Some("no".into());
        assert!(!no_pay.qualifies_for_next_interview());
    }
}
