// Criterion benchmarks for SkillMatch

use criterion::{black_box, criterion_group, criterion_main, Criterion, BenchmarkId};
use skillmatch::core::{compute_matches, skills::overlap, Matcher};
use skillmatch::models::UserProfile;

const SKILLS: &[&str] = &[
    "python", "rust", "javascript", "sql", "guitar", "piano", "spanish", "french",
    "calculus", "statistics", "photoshop", "figma", "public_speaking", "chess",
    "cooking", "video_editing", "machine_learning", "writing", "drawing", "excel",
];

const DEPARTMENTS: &[&str] = &["CS", "Math", "Physics", "Art", "Economics"];

fn pick(offset: usize, count: usize) -> Vec<String> {
    (0..count)
        .map(|i| SKILLS[(offset + i * 7) % SKILLS.len()].to_string())
        .collect()
}

fn create_candidate(id: usize) -> UserProfile {
    UserProfile {
        skills_to_share: pick(id, 1 + id % 4),
        skills_to_learn: pick(id + 3, 1 + id % 3),
        interests: pick(id + 11, 2),
        department: DEPARTMENTS[id % DEPARTMENTS.len()].to_string(),
        ..UserProfile::new(id.to_string())
    }
}

fn create_subject() -> UserProfile {
    UserProfile {
        skills_to_share: vec!["guitar".to_string(), "sql".to_string()],
        skills_to_learn: vec!["Python".to_string(), "Rust".to_string(), "Figma".to_string()],
        interests: vec!["chess".to_string(), "cooking".to_string()],
        department: "CS".to_string(),
        ..UserProfile::new("current_user")
    }
}

fn bench_overlap(c: &mut Criterion) {
    let offered = pick(0, 8);
    let wanted = pick(4, 8);

    c.bench_function("skill_overlap", |b| {
        b.iter(|| overlap(black_box(&offered), black_box(&wanted)));
    });
}

fn bench_matching(c: &mut Criterion) {
    let matcher = Matcher::default();
    let subject = create_subject();

    let mut group = c.benchmark_group("matching");

    for candidate_count in [10, 50, 100, 500, 1000].iter() {
        let candidates: Vec<UserProfile> = (0..*candidate_count).map(create_candidate).collect();

        group.bench_with_input(
            BenchmarkId::new("compute_matches", candidate_count),
            candidate_count,
            |b, _| {
                b.iter(|| compute_matches(black_box(&subject), black_box(&candidates)));
            },
        );

        group.bench_with_input(
            BenchmarkId::new("find_matches", candidate_count),
            candidate_count,
            |b, _| {
                b.iter(|| {
                    matcher.find_matches(
                        black_box(&subject),
                        black_box(candidates.clone()),
                        black_box(20),
                    )
                });
            },
        );
    }

    group.finish();
}

criterion_group!(benches, bench_overlap, bench_matching);

criterion_main!(benches);
