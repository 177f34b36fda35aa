use codspeed_criterion_compat::{
    Criterion, Throughput, black_box, criterion_group, criterion_main,
};

static CLEAN: &str = "
fn dispatch(queue) {
    // drain in arrival order
    while queue.ready() {
        let job = queue.pop();
        job.run();
    }
}

/*
 * The dispatcher owns the queue; workers only borrow jobs.
 */
fn main() {
    dispatch(Queue::new());
}
";

fn dirty() -> String {
    CLEAN.lines().map(|line| format!("{line}   \n")).collect()
}

fn scan(text: &str) {
    for token in sweep_tokenizer::tokenize(text) {
        black_box(sweep_analysis::scan_token(&token));
    }
}

fn bench_scan(c: &mut Criterion) {
    let dirty = dirty();
    let mut group = c.benchmark_group("scan");

    for (name, source) in [("clean", CLEAN), ("dirty", dirty.as_str())] {
        group.throughput(Throughput::Bytes(source.len() as u64));
        group.bench_with_input(name, &source, |b, &s| b.iter(|| scan(s)));
    }
}

fn bench_fix(c: &mut Criterion) {
    let dirty = dirty();
    let mut group = c.benchmark_group("fix");

    for (name, source) in [("clean", CLEAN), ("dirty", dirty.as_str())] {
        group.throughput(Throughput::Bytes(source.len() as u64));
        group.bench_with_input(name, &source, |b, &s| {
            b.iter(|| black_box(sweep_analysis::fix(s)))
        });
    }
}

criterion_group!(benches, bench_scan, bench_fix);
criterion_main!(benches);
