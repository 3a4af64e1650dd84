use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use treepath::{
    apply_relative, relative_path_between, resolve_path, Layout, Node, Params, PathSegment,
    RelativePathMode, Schema,
};

fn hls_tree() -> Node {
    Node::dir(
        PathSegment::template("videos/{videoId}").unwrap(),
        [
            ("manifest", Node::file("master.m3u8").unwrap()),
            (
                "variantStream",
                Node::dir(
                    PathSegment::template("stream_{quality}").unwrap(),
                    [
                        ("playlist", Node::file("playlist.m3u8").unwrap()),
                        (
                            "segment",
                            Node::file(
                                PathSegment::template("segment_{segmentIndex}.ts").unwrap(),
                            )
                            .unwrap(),
                        ),
                    ],
                )
                .unwrap(),
            ),
        ],
    )
    .unwrap()
}

/// A chain of `depth` nested directories ending in a file.
fn deep_tree(depth: usize) -> (Node, String) {
    let mut node = Node::file("leaf.txt").unwrap();
    let mut keys = vec!["leaf".to_string()];
    for level in (0..depth).rev() {
        let key = format!("d{level}");
        node = Node::dir(format!("dir{level}").as_str(), [(keys[0].clone(), node)]).unwrap();
        keys.insert(0, key);
    }
    let root = Node::dir("root", [(keys[0].clone(), node)]).unwrap();
    (root, keys.join("."))
}

fn bench_resolve(c: &mut Criterion) {
    let mut group = c.benchmark_group("resolve");
    let tree = hls_tree();
    let params = Params::new()
        .with("videoId", 1)
        .with("quality", 720)
        .with("segmentIndex", 42);

    group.bench_function("static_child", |b| {
        b.iter(|| resolve_path(black_box(&tree), black_box("manifest"), &params));
    });

    group.bench_function("templated_leaf", |b| {
        b.iter(|| resolve_path(black_box(&tree), black_box("variantStream.segment"), &params));
    });

    let layout = Layout::new(hls_tree());
    group.bench_function("layout_checked_leaf", |b| {
        b.iter(|| layout.path(black_box("variantStream.segment"), &params));
    });

    group.finish();
}

fn bench_depth(c: &mut Criterion) {
    let mut group = c.benchmark_group("depth");
    let params = Params::new();

    for depth in [1, 8, 32] {
        let (tree, keypath) = deep_tree(depth);
        group.bench_with_input(BenchmarkId::from_parameter(depth), &keypath, |b, keypath| {
            b.iter(|| resolve_path(black_box(&tree), black_box(keypath), &params));
        });
    }

    group.finish();
}

fn bench_relative(c: &mut Criterion) {
    let mut group = c.benchmark_group("relative");

    let from = "videos/1/stream_720/playlist.m3u8";
    let to = "videos/2/stream_1080/segment_42.ts";

    group.bench_function("fs", |b| {
        b.iter(|| relative_path_between(black_box(from), black_box(to), RelativePathMode::Fs));
    });

    group.bench_function("url", |b| {
        b.iter(|| relative_path_between(black_box(from), black_box(to), RelativePathMode::Url));
    });

    let rel = relative_path_between(from, to, RelativePathMode::Url);
    group.bench_function("apply", |b| {
        b.iter(|| apply_relative(black_box(from), black_box(&rel), RelativePathMode::Url));
    });

    group.finish();
}

fn bench_schema(c: &mut Criterion) {
    let mut group = c.benchmark_group("schema");
    let tree = hls_tree();
    let (deep, _) = deep_tree(32);

    group.bench_function("build_hls", |b| {
        b.iter(|| Schema::build(black_box(&tree)));
    });

    group.bench_function("build_deep", |b| {
        b.iter(|| Schema::build(black_box(&deep)));
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_resolve,
    bench_depth,
    bench_relative,
    bench_schema
);
criterion_main!(benches);
