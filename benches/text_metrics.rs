//! Benchmarks for text measurement and line-edit dispatch
//!
//! Run with: cargo bench text_metrics

use std::rc::Rc;
use std::sync::{Arc, Mutex};

use fontdue::{Font, FontSettings};
use plotwidgets::cli::{resolve_font_path, SYSTEM_FONT_CANDIDATES};
use plotwidgets::clipboard::MemoryClipboard;
use plotwidgets::host::{HeadlessCanvas, InputEvent, KeyEvent, PointerEvent, Rect, WidgetHost};
use plotwidgets::keymap::{KeyCode, ShortcutTable};
use plotwidgets::metrics::{FontdueMetrics, MonospaceMetrics, TextMetrics};
use plotwidgets::widget::LineEdit;

#[global_allocator]
static ALLOC: divan::AllocProfiler = divan::AllocProfiler::system();

fn main() {
    divan::main();
}

fn sample_text(len: usize) -> String {
    "The quick brown fox jumps over the lazy dog. "
        .chars()
        .cycle()
        .take(len)
        .collect()
}

/// A system font if one is installed
fn system_metrics(px: f32) -> Option<FontdueMetrics> {
    let path = resolve_font_path(None, SYSTEM_FONT_CANDIDATES)?;
    let bytes = std::fs::read(path).ok()?;
    let font = Font::from_bytes(bytes, FontSettings::default()).ok()?;
    FontdueMetrics::new(Rc::new(font), px).ok()
}

// ============================================================================
// Measurement
// ============================================================================

#[divan::bench(args = [10, 100, 1000])]
fn monospace_measure(bencher: divan::Bencher, len: usize) {
    let metrics = MonospaceMetrics::default();
    let text = sample_text(len);
    bencher.bench_local(|| divan::black_box(metrics.measure(divan::black_box(&text))));
}

#[divan::bench(args = [10, 100, 1000])]
fn fontdue_measure(bencher: divan::Bencher, len: usize) {
    let Some(metrics) = system_metrics(16.0) else {
        eprintln!("No system font found, skipping fontdue_measure");
        return;
    };
    let text = sample_text(len);
    bencher.bench_local(|| divan::black_box(metrics.measure(divan::black_box(&text))));
}

// ============================================================================
// Hit-testing
// ============================================================================

#[divan::bench(args = [10, 100, 1000])]
fn boundaries_hit_test(bencher: divan::Bencher, len: usize) {
    let boundaries = MonospaceMetrics::default().measure(&sample_text(len));
    let width = boundaries.width();
    let mut x = 0.0f32;
    bencher.bench_local(|| {
        x = (x + 3.7) % (width + 10.0);
        divan::black_box(boundaries.hit_test(divan::black_box(x)))
    });
}

// ============================================================================
// Dispatch
// ============================================================================

fn editing_host(text: &str) -> WidgetHost<HeadlessCanvas> {
    let metrics = Rc::new(MonospaceMetrics::default());
    let mut host = WidgetHost::new(HeadlessCanvas::new(metrics));
    let edit = LineEdit::new(Rect::new(0.0, 0.0, 10_000.0, 20.0), text)
        .expect("valid region")
        .with_clipboard(MemoryClipboard::new())
        .with_shortcuts(Arc::new(Mutex::new(ShortcutTable::with_defaults())));
    host.add(edit);
    host.dispatch(&InputEvent::PointerDown(PointerEvent::at(10.0, 10.0)));
    host.dispatch(&InputEvent::PointerUp(PointerEvent::at(10.0, 10.0)));
    host
}

#[divan::bench(args = [10, 100, 1000])]
fn type_and_delete(bencher: divan::Bencher, len: usize) {
    let mut host = editing_host(&sample_text(len));
    let typed = InputEvent::KeyDown(KeyEvent::char('x'));
    let deleted = InputEvent::KeyDown(KeyEvent::named(KeyCode::Backspace));
    bencher.bench_local(|| {
        host.dispatch(divan::black_box(&typed));
        host.dispatch(divan::black_box(&deleted));
    });
}
