use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use episode_matcher::{core::LocalEpisodeFile, EpisodeMatcher};

fn create_library(shows: usize, episodes: u32) -> Vec<LocalEpisodeFile> {
    (0..shows)
        .flat_map(|s| {
            (1..=episodes).map(move |e| {
                LocalEpisodeFile::from_path(format!(
                    "/anime/[SubGroup] Library Show {} - {:02} [720p].mkv",
                    s, e
                ))
            })
        })
        .collect()
}

fn bench_group_selection(c: &mut Criterion) {
    let matcher = EpisodeMatcher::default();
    let mut group = c.benchmark_group("match_file_groups");

    for shows in [10usize, 100, 500] {
        let groups = episode_matcher::core::group_files(create_library(shows, 12));
        group.bench_with_input(BenchmarkId::from_parameter(shows), &groups, |b, groups| {
            b.iter(|| black_box(matcher.match_file_groups("Library Show 7", groups)))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_group_selection);
criterion_main!(benches);
