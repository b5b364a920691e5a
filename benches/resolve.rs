use criterion::{BatchSize, Criterion, criterion_group, criterion_main};
use jvm_compat::{JavaVersionResolver, Language, LanguageKind, PlatformVersion, ProjectDescription};

fn sample_descriptions() -> Vec<ProjectDescription> {
    let platforms = ["3.1.0", "3.2.0-RC2", "3.2.3", "3.2.4"];
    let javas = ["1.8", "11", "17", "21", "22", "25"];
    let mut descriptions = Vec::new();
    for platform in platforms {
        for java in javas {
            for kind in LanguageKind::ALL {
                descriptions.push(ProjectDescription::new(
                    PlatformVersion::parse(platform).unwrap(),
                    Language::new(kind, java),
                ));
            }
        }
    }
    descriptions
}

fn bench_resolve(c: &mut Criterion) {
    let resolver = JavaVersionResolver::new();
    c.bench_function("resolve_mixed_descriptions", |b| {
        b.iter_batched(
            sample_descriptions,
            |mut descriptions| {
                for description in &mut descriptions {
                    let _ = resolver.resolve(description);
                }
                descriptions
            },
            BatchSize::SmallInput,
        )
    });
}

fn bench_parse_platform_version(c: &mut Criterion) {
    c.bench_function("parse_platform_version", |b| {
        b.iter(|| PlatformVersion::parse("3.2.0.BUILD-SNAPSHOT").unwrap());
    });
}

criterion_group!(benches, bench_resolve, bench_parse_platform_version);
criterion_main!(benches);
