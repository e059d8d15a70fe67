//! Full-report assembly throughput over synthetic canonical records.

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use intake_analytics::{candidate, customer};
use intake_core::config::ReportConfig;
use intake_core::types::{CandidateRecord, CustomerRecord, InterviewResult};

fn synthetic_candidates(count: usize) -> Vec<CandidateRecord> {
    (0..count)
        .map(|i| CandidateRecord {
            contact_name: format!("Candidate {i}"),
            phone_number: format!("555-{i:04}"),
            result: Some(if i % 3 == 0 {
                InterviewResult::Pass
            } else {
                InterviewResult::Fail
            }),
            date_time: Some(format!("2024-01-{:02}", (i % 28) + 1)),
            previous_location: Some(format!("City {}, MD", i % 12)),
            work_per_week: Some("Yes".to_string()),
            can_travel: Some(if i % 2 == 0 { "Yes" } else { "No" }.to_string()),
            one_year_experience: Some("Yes".to_string()),
            pay_rate: Some("Yes".to_string()),
            experience_score: Some(format!("{}", i % 6)),
            compassion_score: Some("4".to_string()),
            safety_score: Some("3.5".to_string()),
            client_type: Some(if i % 2 == 0 { "Elderly" } else { "Post-Op" }.to_string()),
            ..Default::default()
        })
        .collect()
}

fn synthetic_customers(count: usize) -> Vec<CustomerRecord> {
    (0..count)
        .map(|i| CustomerRecord {
            contact_name: format!("Customer {i}"),
            phone_number: format!("555-{i:04}"),
            date_time: Some(format!("2024-02-{:02}", (i % 28) + 1)),
            referral: Some(if i % 2 == 0 { "Google" } else { "A friend" }.to_string()),
            service_experience: Some("the last agency was great".to_string()),
            zip_code: Some(format!("212{:02}", i % 30)),
            patient_problem: Some("dementia and mobility, needs help bathing".to_string()),
            service_hours: Some(format!("{} hours a week", 10 + i % 60)),
            service_time: Some("mornings".to_string()),
            ..Default::default()
        })
        .collect()
}

fn bench_reports(c: &mut Criterion) {
    let cfg = ReportConfig::default();

    let mut group = c.benchmark_group("candidate_report");
    for count in [100, 1_000, 10_000] {
        let records = synthetic_candidates(count);
        group.throughput(Throughput::Elements(count as u64));
        group.bench_with_input(BenchmarkId::from_parameter(count), &records, |b, records| {
            b.iter(|| candidate::report(records, &cfg));
        });
    }
    group.finish();

    let mut group = c.benchmark_group("customer_report");
    for count in [100, 1_000, 10_000] {
        let records = synthetic_customers(count);
        group.throughput(Throughput::Elements(count as u64));
        group.bench_with_input(BenchmarkId::from_parameter(count), &records, |b, records| {
            b.iter(|| customer::report(records, &cfg));
        });
    }
    group.finish();
}

criterion_group!(benches, bench_reports);
criterion_main!(benches);
