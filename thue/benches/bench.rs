use criterion::{criterion_group, criterion_main, Criterion};
use thue::{RewriteSystem, Symbols, Word};
use word_parse::{CmdIter, Command};

type Relations = Vec<(Word, Word)>;

fn parse(s: &str) -> (Relations, Vec<Word>) {
    let mut syms = Symbols::new();
    let (mut rels, mut queries) = (Vec::new(), Vec::new());
    for cmd in CmdIter::new(s) {
        match cmd.unwrap() {
            Command::Relation(l, r) => rels.push((syms.word(&l).unwrap(), syms.word(&r).unwrap())),
            Command::Query(w) => queries.push(syms.word(&w).unwrap()),
        }
    }
    (rels, queries)
}

macro_rules! include_demo {
    ($x:expr) => {
        include_str!(concat!("../../demos/", $x))
    };
}

fn complete(rels: &Relations) -> RewriteSystem {
    RewriteSystem::new(rels.iter().cloned(), false).unwrap()
}

pub fn criterion_benchmark(c: &mut Criterion) {
    let s3 = include_demo!("s3.thue");
    let (s3_rels, _) = parse(s3);
    let (d5_rels, _) = parse(include_demo!("d5.thue"));
    let (a4_rels, a4_queries) = parse(include_demo!("a4.thue"));
    let (abelian_rels, _) = parse(include_demo!("abelian.thue"));

    let a4 = complete(&a4_rels);
    let long: Word = "(b a b^2 a)^50 (a b)^37".parse().unwrap();

    c.bench_function("parse", |b| b.iter(|| parse(s3)));
    c.bench_function("s3", |b| b.iter(|| complete(&s3_rels)));
    c.bench_function("d5", |b| b.iter(|| complete(&d5_rels)));
    c.bench_function("a4", |b| b.iter(|| complete(&a4_rels)));
    c.bench_function("abelian", |b| b.iter(|| complete(&abelian_rels)));
    c.bench_function("queries", |b| b.iter(|| a4_queries.iter().map(|w| a4.apply(w)).count()));
    c.bench_function("normalize", |b| b.iter(|| a4.apply(&long)));
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
