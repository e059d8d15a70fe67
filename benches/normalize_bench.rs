//! Normalizer throughput over synthetic raw rows.

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use intake_core::normalize::{normalize_candidates, RawRow};
use serde_json::json;

fn synthetic_rows(count: usize) -> Vec<RawRow> {
    (0..count)
        .map(|i| {
            json!({
                "ContactName": format!("Candidate {i}"),
                "PhoneNumber": format!("555-{i:04}"),
                "Result": if i % 3 == 0 { "PASS" } else { "FAIL" },
                "DateTime": "2024-01-15 10:30 AM",
                "PreviousLocation": "Baltimore, MD",
                "WorkPerWeek": "Yes",
                "CanTravel": if i % 2 == 0 { "Yes" } else { "No" },
                "OneYearExperience": "Yes",
                "PayRate": "Yes",
                "ExperienceScore": format!("{}", i % 6),
                "CompassionScore": "4",
                "SafetyScore": "3.5",
                "ProfessionalismScore": "",
                "RedFlags": "[\"no show\"]",
            })
            .as_object()
            .expect("synthetic row is an object")
            .clone()
        })
        .collect()
}

fn bench_normalize(c: &mut Criterion) {
    let mut group = c.benchmark_group("normalize_candidates");
    for count in [100, 1_000, 10_000] {
        let rows = synthetic_rows(count);
        group.throughput(Throughput::Elements(count as u64));
        group.bench_with_input(BenchmarkId::from_parameter(count), &rows, |b, rows| {
            b.iter(|| normalize_candidates(rows));
        });
    }
    group.finish();
}

criterion_group!(benches, bench_normalize);
criterion_main!(benches);
