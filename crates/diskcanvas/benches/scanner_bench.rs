use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use diskcanvas::canvas::Canvas;
use diskcanvas::mosaic::render_sorted_mosaic;
use diskcanvas::scanner::Scanner;
use diskcanvas::style::{StyleManager, StyleMode};
use diskcanvas::treemap::render_treemap;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

const EXTENSIONS: [&str; 8] = ["rs", "py", "json", "png", "mp4", "zip", "toml", "txt"];

/// Two levels of directories under `root`, `files_per_dir` files in each
/// level-2 directory with extensions and sizes cycling through a fixed set.
fn create_benchmark_tree(root: &Path, breadth_1: usize, breadth_2: usize, files_per_dir: usize) {
    for i in 0..breadth_1 {
        let dir1 = root.join(format!("dir1_{:03}", i));
        for j in 0..breadth_2 {
            let dir2 = dir1.join(format!("dir2_{:03}", j));
            fs::create_dir_all(&dir2).unwrap();

            for k in 0..files_per_dir {
                let ext = EXTENSIONS[k % EXTENSIONS.len()];
                let file = dir2.join(format!("file_{:03}.{}", k, ext));
                fs::write(&file, "x".repeat(50 + (k * 37) % 400)).unwrap();
            }
        }
    }
}

fn bench_scanner_directory_walk(c: &mut Criterion) {
    let mut group = c.benchmark_group("directory_walk");

    for (name, shape) in [("small_tree", (5, 10, 20)), ("medium_tree", (10, 15, 30))] {
        let temp_dir = TempDir::new().unwrap();
        let (b1, b2, files) = shape;
        create_benchmark_tree(temp_dir.path(), b1, b2, files);

        group.bench_with_input(
            BenchmarkId::new(name, format!("{b1}x{b2}x{files}")),
            &temp_dir.path(),
            |b, path| b.iter(|| Scanner::new(black_box(path)).scan().unwrap()),
        );
    }

    group.finish();
}

/// Narrow but deep trees
fn bench_scanner_depth(c: &mut Criterion) {
    let mut group = c.benchmark_group("directory_depth");

    for depth in [10, 50, 200] {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path().to_path_buf();

        let mut current = root.clone();
        for i in 0..depth {
            current = current.join(format!("l{}", i));
            fs::create_dir_all(&current).unwrap();
            fs::write(current.join("file.txt"), "z".repeat(100)).unwrap();
        }

        group.bench_with_input(BenchmarkId::new("depth", depth), &root, |b, path| {
            b.iter(|| Scanner::new(black_box(path)).scan().unwrap())
        });
    }

    group.finish();
}

fn bench_render(c: &mut Criterion) {
    let temp_dir = TempDir::new().unwrap();
    create_benchmark_tree(temp_dir.path(), 8, 10, 25);

    let mut tree = Scanner::new(temp_dir.path()).scan().unwrap().tree;
    let mut manager = StyleManager::new();
    tree.record_extensions(&mut manager);
    manager.assign_styles(StyleMode::Detailed);
    tree.apply_styles(&manager);

    let mut group = c.benchmark_group("render");
    for (width, height) in [(80u16, 24u16), (240, 70)] {
        let size = format!("{width}x{height}");

        group.bench_with_input(BenchmarkId::new("mosaic", &size), &manager, |b, manager| {
            b.iter(|| render_sorted_mosaic(black_box(width), black_box(height), manager))
        });

        group.bench_with_input(BenchmarkId::new("treemap", &size), &tree, |b, tree| {
            b.iter(|| {
                let mut canvas = Canvas::new(width, height);
                let area = canvas.area();
                render_treemap(tree, tree.root(), black_box(area), &mut canvas);
                canvas
            })
        });
    }
    group.finish();
}

criterion_group!(benches, bench_scanner_directory_walk, bench_scanner_depth, bench_render);
criterion_main!(benches);
