use acronym_parser::document::{collect_definitions, Document, DEFAULT_DELIMITERS};
use acronym_parser::{AcronymExtractor, ExtractorRules};
use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};

const TEST_SIZES: &[(usize, &str)] = &[
    (1_000, "small"),
    (10_000, "medium"),
    (100_000, "large"),
];

fn generate_test_text(char_count: usize) -> String {
    let base_sentences = [
        "Deoxyribonucleic acid (DNA) was extracted from each sample.",
        "Tumors were imaged with magnetic resonance imaging (MRI) at baseline.",
        "Patients were followed for progression-free survival (PFS) and overall survival (OS).",
        "Lysates were cleared by centrifugation at 14,000 g for 10 minutes.",
        "Expression was confirmed by immunohistochemistry (IHC) in all cases.",
        "Results are summarized in Table 2 (see Methods).",
        "Quantitative reverse transcription-polymerase chain reaction (qRT-PCR) was performed.",
        "No acronym appears in this sentence at all.",
    ];

    let mut text = String::new();
    let mut current_len = 0;
    let mut sentence_idx = 0;

    while current_len < char_count {
        let sentence = base_sentences[sentence_idx % base_sentences.len()];
        text.push_str(sentence);
        text.push(' ');
        current_len += sentence.len() + 1;
        sentence_idx += 1;
    }

    text.truncate(char_count);
    text
}

fn bench_extraction(c: &mut Criterion) {
    let extractor = AcronymExtractor::with_default_rules().unwrap();

    for &(size, size_name) in TEST_SIZES {
        let test_text = generate_test_text(size);
        let document = Document::from_passages(test_text.split(". ").map(str::to_string));

        let mut group = c.benchmark_group(format!("extraction_{}", size_name));
        group.throughput(Throughput::Bytes(test_text.len() as u64));

        group.bench_function("extract", |b| {
            b.iter(|| {
                black_box(extractor.extract(black_box(&test_text)));
            })
        });

        group.bench_function("collect_definitions", |b| {
            b.iter(|| {
                black_box(collect_definitions(&extractor, black_box(&document), DEFAULT_DELIMITERS));
            })
        });

        group.finish();
    }
}

fn bench_miss_budget(c: &mut Criterion) {
    let test_text = generate_test_text(10_000);
    let mut group = c.benchmark_group("miss_budget");
    group.throughput(Throughput::Bytes(test_text.len() as u64));

    for max_missed_letters in [0, 2, 4] {
        let rules = ExtractorRules {
            max_missed_letters,
            ..Default::default()
        };
        let extractor = AcronymExtractor::new(rules).unwrap();

        group.bench_function(format!("max_missed_{}", max_missed_letters), |b| {
            b.iter(|| {
                black_box(extractor.extract(black_box(&test_text)));
            })
        });
    }

    group.finish();
}

fn bench_compilation_overhead(c: &mut Criterion) {
    let mut group = c.benchmark_group("compilation");

    group.bench_function("extractor", |b| {
        b.iter(|| {
            black_box(AcronymExtractor::new(ExtractorRules::default()).unwrap());
        })
    });

    group.finish();
}

criterion_group!(benches, bench_compilation_overhead, bench_extraction, bench_miss_budget);
criterion_main!(benches);
