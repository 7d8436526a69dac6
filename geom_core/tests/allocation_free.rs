//! The per-iteration evaluation path must not touch the heap. A counting
//! global allocator records allocations made by the current thread.

use std::alloc::{GlobalAlloc, Layout, System};
use std::cell::Cell;
use std::hint::black_box;

use geom_core::depth::DepthPair;
use geom_core::evaluate::{evaluate, evaluate_kind, evaluate_named};
use geom_core::registry::{example_parameters, GeometryKind, ALL_KINDS};
use geom_core::shapes::{CrossSection, Shape};

struct CountingAllocator;

thread_local! {
    static ALLOCATIONS: Cell<usize> = const { Cell::new(0) };
}

fn record_allocation() {
    let _ = ALLOCATIONS.try_with(|count| count.set(count.get() + 1));
}

unsafe impl GlobalAlloc for CountingAllocator {
    unsafe fn alloc(&self, layout: Layout) -> *mut u8 {
        record_allocation();
        System.alloc(layout)
    }

    unsafe fn alloc_zeroed(&self, layout: Layout) -> *mut u8 {
        record_allocation();
        System.alloc_zeroed(layout)
    }

    unsafe fn realloc(&self, ptr: *mut u8, layout: Layout, new_size: usize) -> *mut u8 {
        record_allocation();
        System.realloc(ptr, layout, new_size)
    }

    unsafe fn dealloc(&self, ptr: *mut u8, layout: Layout) {
        System.dealloc(ptr, layout)
    }
}

#[global_allocator]
static GLOBAL: CountingAllocator = CountingAllocator;

/// Allocations made on this thread while `f` runs.
fn allocations_during<F: FnOnce()>(f: F) -> usize {
    let before = ALLOCATIONS.with(Cell::get);
    f();
    ALLOCATIONS.with(Cell::get) - before
}

const DEPTHS: [(f64, f64); 5] = [(-0.2, 0.1), (0.0, 0.0), (0.3, 0.5), (0.8, 1.1), (50.0, 60.0)];

#[test]
fn coded_evaluation_does_not_allocate() {
    let cases: Vec<(i64, Vec<f64>)> = ALL_KINDS
        .iter()
        .filter_map(|kind| kind.code().map(|code| (i64::from(code), example_parameters(*kind))))
        .collect();

    let count = allocations_during(|| {
        for (code, params) in &cases {
            for (h_up, h_dn) in DEPTHS {
                black_box(evaluate(black_box(*code), black_box(params), h_up, h_dn).ok());
            }
        }
    });
    assert_eq!(count, 0);
}

#[test]
fn named_evaluation_does_not_allocate() {
    let params = example_parameters(GeometryKind::Floodplain);
    let count = allocations_during(|| {
        for (h_up, h_dn) in DEPTHS {
            black_box(evaluate_named(black_box("floodplain"), black_box(&params), h_up, h_dn).ok());
            black_box(evaluate_named(black_box("Circular"), black_box(&[0.9, 0.001]), h_up, h_dn).ok());
        }
    });
    assert_eq!(count, 0);
}

#[test]
fn kind_and_shape_evaluation_do_not_allocate() {
    let cases: Vec<(GeometryKind, Vec<f64>, Shape)> = ALL_KINDS
        .iter()
        .map(|kind| {
            let params = example_parameters(*kind);
            let shape = Shape::from_parameters(*kind, &params).unwrap();
            (*kind, params, shape)
        })
        .collect();

    let count = allocations_during(|| {
        for (kind, params, shape) in &cases {
            for (h_up, h_dn) in DEPTHS {
                black_box(evaluate_kind(*kind, black_box(params), h_up, h_dn).ok());
                black_box(shape.evaluate(DepthPair::new(h_up, h_dn)));
            }
        }
    });
    assert_eq!(count, 0);
}

#[test]
fn counter_sees_allocations() {
    let count = allocations_during(|| {
        black_box(vec![1.0_f64; 16]);
    });
    assert!(count >= 1);
}
