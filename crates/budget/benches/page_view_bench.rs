//! Criterion benchmarks for view derivation.
//!
//! Benchmarks:
//!   - selection rebuild from checked names (full catalogue checked)
//!   - full page view derivation with no selection
//!   - full page view derivation with every agency selected
//!
//! Run with: cargo bench -p budget --bench page_view_bench

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use budget::catalogue::Catalogue;
use budget::cost::CostCalculator;
use budget::page::{PageEvent, PageState, PageView};
use budget::selection::SelectionState;

fn all_checked(catalogue: &Catalogue) -> PageState {
    let mut state = PageState::default();
    for agency in catalogue.iter() {
        let event = PageEvent::AgencyToggled {
            name: agency.name.clone(),
            checked: true,
        };
        if state.apply(catalogue, &event).is_err() {
            unreachable!("catalogue names are always valid");
        }
    }
    state
}

fn bench_selection_rebuild(c: &mut Criterion) {
    let mut group = c.benchmark_group("selection_rebuild");
    let catalogue = Catalogue::builtin();
    let state = all_checked(&catalogue);

    group.bench_function("all_checked", |b| {
        b.iter(|| black_box(state.selection(black_box(&catalogue))));
    });

    group.finish();
}

fn bench_view_derive(c: &mut Criterion) {
    let mut group = c.benchmark_group("page_view_derive");
    let catalogue = Catalogue::builtin();
    let calculator = CostCalculator::default();

    let empty_state = PageState::default();
    let empty_selection = SelectionState::default();
    group.bench_function("no_selection", |b| {
        b.iter(|| {
            black_box(PageView::derive(
                black_box(&catalogue),
                &calculator,
                &empty_state,
                &empty_selection,
            ))
        });
    });

    let full_state = all_checked(&catalogue);
    let full_selection = full_state.selection(&catalogue).unwrap_or_default();
    group.bench_function("all_selected", |b| {
        b.iter(|| {
            black_box(PageView::derive(
                black_box(&catalogue),
                &calculator,
                &full_state,
                &full_selection,
            ))
        });
    });

    group.finish();
}

criterion_group!(benches, bench_selection_rebuild, bench_view_derive);
criterion_main!(benches);
