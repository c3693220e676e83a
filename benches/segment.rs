// benches/segment.rs
use criterion::{Criterion, black_box, criterion_group, criterion_main};

use cifreq::analysis::{freq::WordCounts, segment};

const SAMPLE: &str = "今天天气很好我们一起去公园散步看见许多游客在湖边拍照\
小朋友们在草地上放风筝城市的发展让公园越来越漂亮经济建设和环境保护需要平衡";

fn bench_segment(c: &mut Criterion) {
    let text = SAMPLE.repeat(200);

    c.bench_function("segment_words", |b| {
        b.iter(|| segment::segment_words(black_box(&text)).len())
    });

    c.bench_function("segment_and_count", |b| {
        b.iter(|| {
            let tokens = segment::segment_words(black_box(&text));
            WordCounts::from_tokens(tokens).len()
        })
    });
}

criterion_group!(benches, bench_segment);
criterion_main!(benches);
