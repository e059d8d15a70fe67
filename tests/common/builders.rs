//! Fluent builders for canonical records.
//!
//! Every builder starts from a minimal valid record (identity fields only)
//! and layers the fields a scenario cares about. Anything not set stays
//! `None`, which is exactly what the normalizer produces for absent input.

use intake_core::types::{CandidateRecord, CustomerRecord, FormRecord, InterviewResult};

// ---------------------------------------------------------------------------
// Candidate
// ---------------------------------------------------------------------------

#[derive(Debug, Clone)]
pub struct CandidateBuilder {
    record: CandidateRecord,
}

impl CandidateBuilder {
    pub fn new(name: &str) -> Self {
        Self {
            record: CandidateRecord {
                contact_name: name.to_string(),
                phone_number: "555-0100".to_string(),
                ..Default::default()
            },
        }
    }

    pub fn result(mut self, raw: &str) -> Self {
        self.record.result = InterviewResult::parse(raw);
        self
    }

    pub fn date(mut self, raw: &str) -> Self {
        self.record.date_time = Some(raw.to_string());
        self
    }

    pub fn location(mut self, raw: &str) -> Self {
        self.record.previous_location = Some(raw.to_string());
        self
    }

    pub fn client_type(mut self, raw: &str) -> Self {
        self.record.client_type = Some(raw.to_string());
        self
    }

    pub fn scores(mut self, experience: &str, compassion: &str, safety: &str, prof: &str) -> Self {
        self.record.experience_score = non_empty(experience);
        self.record.compassion_score = non_empty(compassion);
        self.record.safety_score = non_empty(safety);
        self.record.professionalism_score = non_empty(prof);
        self
    }

    pub fn experience_score(mut self, raw: &str) -> Self {
        self.record.experience_score = non_empty(raw);
        self
    }

    /// Set all four required gate criteria to yes.
    pub fn qualified(mut self) -> Self {
        self.record.work_per_week = Some("Yes".to_string());
        self.record.can_travel = Some("Yes".to_string());
        self.record.one_year_experience = Some("Yes".to_string());
        self.record.pay_rate = Some("Yes".to_string());
        self
    }

    pub fn work_per_week(mut self, raw: &str) -> Self {
        self.record.work_per_week = non_empty(raw);
        self
    }

    pub fn can_travel(mut self, raw: &str) -> Self {
        self.record.can_travel = non_empty(raw);
        self
    }

    pub fn one_year_experience(mut self, raw: &str) -> Self {
        self.record.one_year_experience = non_empty(raw);
        self
    }

    pub fn pay_rate(mut self, raw: &str) -> Self {
        self.record.pay_rate = non_empty(raw);
        self
    }

    pub fn background_check(mut self, raw: &str) -> Self {
        self.record.background_check = non_empty(raw);
        self
    }

    pub fn tb_test(mut self, raw: &str) -> Self {
        self.record.tb_test_negative = non_empty(raw);
        self
    }

    pub fn cpr(mut self, raw: &str) -> Self {
        self.record.cpr_certificate = non_empty(raw);
        self
    }

    pub fn license(mut self, raw: &str) -> Self {
        self.record.valid_driver_license = non_empty(raw);
        self
    }

    pub fn transport(mut self, raw: &str) -> Self {
        self.record.reliable_transport = non_empty(raw);
        self
    }

    pub fn red_flags(mut self, flags: &[&str]) -> Self {
        self.record.red_flags = flags.iter().map(|f| f.to_string()).collect();
        self
    }

    pub fn build(self) -> CandidateRecord {
        self.record
    }
}

// ---------------------------------------------------------------------------
// Customer
// ---------------------------------------------------------------------------

#[derive(Debug, Clone)]
pub struct CustomerBuilder {
    record: CustomerRecord,
}

impl CustomerBuilder {
    pub fn new(name: &str) -> Self {
        Self {
            record: CustomerRecord {
                contact_name: name.to_string(),
                phone_number: "555-0200".to_string(),
                ..Default::default()
            },
        }
    }

    pub fn phone(mut self, raw: &str) -> Self {
        self.record.phone_number = raw.to_string();
        self
    }

    pub fn date(mut self, raw: &str) -> Self {
        self.record.date_time = Some(raw.to_string());
        self
    }

    pub fn referral(mut self, raw: &str) -> Self {
        self.record.referral = non_empty(raw);
        self
    }

    pub fn experience(mut self, raw: &str) -> Self {
        self.record.service_experience = Some(raw.to_string());
        self
    }

    pub fn zip(mut self, raw: &str) -> Self {
        self.record.zip_code = non_empty(raw);
        self
    }

    pub fn problem(mut self, raw: &str) -> Self {
        self.record.patient_problem = non_empty(raw);
        self
    }

    pub fn hours(mut self, raw: &str) -> Self {
        self.record.service_hours = non_empty(raw);
        self
    }

    pub fn time(mut self, raw: &str) -> Self {
        self.record.service_time = non_empty(raw);
        self
    }

    pub fn email(mut self, raw: &str) -> Self {
        self.record.client_email = non_empty(raw);
        self
    }

    pub fn address(mut self, raw: &str) -> Self {
        self.record.client_address = non_empty(raw);
        self
    }

    pub fn callback(mut self, raw: &str) -> Self {
        self.record.callback_date = non_empty(raw);
        self
    }

    pub fn nurse(mut self, raw: &str) -> Self {
        self.record.nurse_visit = non_empty(raw);
        self
    }

    pub fn build(self) -> CustomerRecord {
        self.record
    }
}

// ---------------------------------------------------------------------------
// Form submission
// ---------------------------------------------------------------------------

#[derive(Debug, Clone)]
pub struct FormBuilder {
    record: FormRecord,
}

impl FormBuilder {
    pub fn new(name: &str) -> Self {
        Self {
            record: FormRecord {
                contact_name: name.to_string(),
                phone_number: "555-0300".to_string(),
                ..Default::default()
            },
        }
    }

    /// Experience, availability, and vehicle all yes; no reported issues.
    pub fn qualified(self) -> Self {
        self.experience("yes").availability("yes").vehicle("yes").issues("no")
    }

    pub fn experience(mut self, raw: &str) -> Self {
        self.record.has_experience = non_empty(raw);
        self
    }

    pub fn availability(mut self, raw: &str) -> Self {
        self.record.has_availability = non_empty(raw);
        self
    }

    pub fn vehicle(mut self, raw: &str) -> Self {
        self.record.has_vehicle = non_empty(raw);
        self
    }

    pub fn travel(mut self, raw: &str) -> Self {
        self.record.willing_to_travel = non_empty(raw);
        self
    }

    pub fn issues(mut self, raw: &str) -> Self {
        self.record.has_background_check_issues = non_empty(raw);
        self
    }

    pub fn cpr(mut self, raw: &str) -> Self {
        self.record.has_cpr_certification = non_empty(raw);
        self
    }

    pub fn tb(mut self, raw: &str) -> Self {
        self.record.can_provide_tb_test = non_empty(raw);
        self
    }

    pub fn fee(mut self, raw: &str) -> Self {
        self.record.background_check_fee_acceptance = non_empty(raw);
        self
    }

    pub fn pay(mut self, raw: &str) -> Self {
        self.record.pay_rate_acceptance = non_empty(raw);
        self
    }

    pub fn dementia(mut self, raw: &str) -> Self {
        self.record.has_dementia_experience = non_empty(raw);
        self
    }

    pub fn build(self) -> FormRecord {
        self.record
    }
}

fn non_empty(raw: &str) -> Option<String> {
    if raw.is_empty() {
        None
    } else {
        Some(raw.to_string())
    }
}
