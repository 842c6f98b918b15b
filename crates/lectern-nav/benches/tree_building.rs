//! Benchmarks for navigation tree operations.

use std::fs;
use std::path::Path;

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use lectern_menu::parse_menu;
use lectern_nav::{BuildOptions, NavigationState, build_tree, load_navigation};
use lectern_pages::{FsContent, PageRecord};

/// Generate pages for a tree with specified depth and breadth.
fn generate_pages(depth: usize, breadth: usize) -> Vec<PageRecord> {
    fn generate_level(
        prefix: &str,
        current_depth: usize,
        max_depth: usize,
        breadth: usize,
        pages: &mut Vec<PageRecord>,
    ) {
        if current_depth >= max_depth {
            return;
        }
        for i in 0..breadth {
            let path = format!("{prefix}/section-{i}");
            pages.push(PageRecord::new(
                path.clone(),
                format!("Section {current_depth}.{i}"),
            ));
            generate_level(&path, current_depth + 1, max_depth, breadth, pages);
        }
    }

    let mut pages = vec![PageRecord::new("/", "Home")];
    generate_level("", 0, depth, breadth, &mut pages);
    pages
}

/// Ordering document listing the first half of every sibling group in reverse.
fn generate_menu(depth: usize, breadth: usize) -> String {
    fn generate_level(
        indent: usize,
        current_depth: usize,
        max_depth: usize,
        breadth: usize,
        out: &mut String,
    ) {
        if current_depth >= max_depth {
            return;
        }
        for i in (breadth / 2..breadth).rev() {
            let pad = " ".repeat(indent);
            if current_depth + 1 < max_depth {
                out.push_str(&format!("{pad}- section-{i}:\n"));
                generate_level(indent + 4, current_depth + 1, max_depth, breadth, out);
            } else {
                out.push_str(&format!("{pad}- section-{i}\n"));
            }
        }
        out.push_str(&format!("{}- \"===\"\n", " ".repeat(indent)));
    }

    let mut out = String::new();
    generate_level(0, 0, depth, breadth, &mut out);
    out
}

fn bench_build_tree(c: &mut Criterion) {
    let mut group = c.benchmark_group("build_tree");

    for (depth, breadth) in [(2, 10), (3, 6), (4, 4)] {
        let pages = generate_pages(depth, breadth);
        let entries = parse_menu(&generate_menu(depth, breadth)).unwrap().entries;
        let options = BuildOptions::default();

        group.bench_with_input(
            BenchmarkId::new("alphabetical", format!("d{depth}_b{breadth}")),
            &pages,
            |b, pages| b.iter(|| build_tree(pages, &[], &options)),
        );
        group.bench_with_input(
            BenchmarkId::new("with_menu", format!("d{depth}_b{breadth}")),
            &pages,
            |b, pages| b.iter(|| build_tree(pages, &entries, &options)),
        );
    }

    group.finish();
}

fn bench_active_path(c: &mut Criterion) {
    let pages = generate_pages(4, 4);
    let tree = build_tree(&pages, &[], &BuildOptions::default()).tree;

    let mut group = c.benchmark_group("active_path");

    group.bench_function("ancestors_depth_4", |b| {
        b.iter(|| tree.ancestors("/section-3/section-3/section-3/section-3"));
    });

    group.bench_function("ancestors_miss", |b| {
        b.iter(|| tree.ancestors("/nonexistent/path"));
    });

    group.bench_function("breadcrumbs_depth_2", |b| {
        b.iter(|| tree.breadcrumbs("/section-0/section-0"));
    });

    group.finish();
}

fn bench_load_from_fs(c: &mut Criterion) {
    let temp_dir = tempfile::tempdir().unwrap();
    let source_dir = temp_dir.path().join("content");
    write_content(&source_dir, &generate_pages(3, 5));
    fs::write(source_dir.join("menu.yaml"), generate_menu(3, 5)).unwrap();
    let content = FsContent::new(source_dir);

    let mut group = c.benchmark_group("load");

    group.bench_function("load_navigation", |b| {
        b.iter(|| load_navigation(&content, &content, &BuildOptions::default()).unwrap());
    });

    group.bench_function("ensure_loaded_cached", |b| {
        let mut state = NavigationState::new();
        b.iter(|| {
            state
                .ensure_loaded(&content, &content, &BuildOptions::default())
                .unwrap()
        });
    });

    group.finish();
}

/// Write one `index.md` per page.
fn write_content(root: &Path, pages: &[PageRecord]) {
    for page in pages {
        let dir = root.join(page.path.trim_start_matches('/'));
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join("index.md"), format!("# {}\n\nBody.", page.title)).unwrap();
    }
}

criterion_group!(benches, bench_build_tree, bench_active_path, bench_load_from_fs);
criterion_main!(benches);
