use criterion::{black_box, criterion_group, criterion_main, Criterion};

use ancora_keyboard::{resolve_move, MoveInputs, SCROLL_AT_START_UNSET};

fn inputs(message_send: bool, offset_mode: bool, interactive: bool) -> MoveInputs {
    MoveInputs {
        raw_progress: 0.42,
        interactive,
        is_opening: false,
        scroll_at_start: 250.0,
        scroll_offset: 250.0,
        content_height: 4200.0,
        amt_to_offset: -120.0,
        amt_to_transform: 302.0,
        offset_close_enabled: offset_mode,
        message_send_animating: message_send,
        scroll_to_end_queued: false,
        last_message_position: 3900.0,
        padding_bottom: 16.0,
    }
}

fn bench_resolver(c: &mut Criterion) {
    let mut group = c.benchmark_group("resolve_move");
    group.bench_function("send_animation", |b| {
        let inputs = inputs(true, false, false);
        b.iter(|| resolve_move(black_box(&inputs)))
    });
    group.bench_function("offset_mode", |b| {
        let inputs = inputs(false, true, false);
        b.iter(|| resolve_move(black_box(&inputs)))
    });
    group.bench_function("interactive_pin", |b| {
        let inputs = inputs(false, false, true);
        b.iter(|| resolve_move(black_box(&inputs)))
    });
    group.bench_function("short_circuit", |b| {
        let inputs = MoveInputs {
            scroll_at_start: SCROLL_AT_START_UNSET,
            ..inputs(true, false, false)
        };
        b.iter(|| resolve_move(black_box(&inputs)))
    });
    group.finish();
}

criterion_group!(benches, bench_resolver);
criterion_main!(benches);
