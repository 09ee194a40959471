//! Dispatch hot-path benchmark suite.
//!
//! Measures the synchronous request and routing paths:
//! - Encoding a call with positional validation
//! - Routing a response back to its completion
//! - Fanning an event out to a domain handler
//!
//! Run with: cargo bench --bench dispatch
//! Results saved to: target/criterion/

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use inspector_backend::transport::ChannelTransport;
use inspector_backend::{EventDispatcher, InspectorBackend};
use serde_json::json;
use tokio::sync::mpsc::UnboundedReceiver;

// ============================================================================
// Setup
// ============================================================================

fn backend() -> (InspectorBackend, UnboundedReceiver<String>) {
    let (transport, outbound) = ChannelTransport::new();
    let backend = InspectorBackend::builder()
        .transport(transport)
        .build()
        .expect("backend");
    (backend, outbound)
}

// ============================================================================
// Benchmark: Encode
// ============================================================================

fn bench_encode(c: &mut Criterion) {
    let (backend, mut outbound) = backend();

    let mut group = c.benchmark_group("encode");

    group.bench_function("page_enable", |b| {
        b.iter(|| {
            backend
                .call_detached(black_box("Page.enable"), vec![])
                .expect("call");
            let _ = outbound.try_recv();
        });
    });

    group.bench_function("runtime_evaluate", |b| {
        b.iter(|| {
            backend
                .call(
                    black_box("Runtime.evaluate"),
                    vec![Some(json!("document.title")), Some(json!("console")), None, Some(json!(true))],
                    |_, _| {},
                )
                .expect("call");
            let _ = outbound.try_recv();
        });
    });

    group.finish();
}

// ============================================================================
// Benchmark: Round Trip
// ============================================================================

fn bench_round_trip(c: &mut Criterion) {
    let mut group = c.benchmark_group("round_trip");

    for &in_flight in &[1usize, 64, 1024] {
        let (backend, mut outbound) = backend();

        // Keep `in_flight - 1` calls pending so lookups hit a populated table.
        for _ in 1..in_flight {
            backend.call_detached("Page.enable", vec![]).expect("call");
        }
        while outbound.try_recv().is_ok() {}

        group.bench_with_input(BenchmarkId::new("evaluate", in_flight), &in_flight, |b, _| {
            b.iter(|| {
                let id = backend
                    .call("Runtime.evaluate", vec![Some(json!("1"))], |_, values| {
                        black_box(values);
                    })
                    .expect("call");
                let _ = outbound.try_recv();

                let response = format!(
                    r#"{{"id":{id},"result":{{"result":{{"type":"number","value":1}},"wasThrown":false}}}}"#
                );
                backend.dispatch_text(&response).expect("dispatch");
            });
        });
    }

    group.finish();
}

// ============================================================================
// Benchmark: Events
// ============================================================================

fn bench_events(c: &mut Criterion) {
    let (backend, _outbound) = backend();
    backend.register_domain_dispatcher(
        "Network",
        EventDispatcher::new().on("dataReceived", |args| {
            black_box(args);
        }),
    );

    let event = r#"{"method":"Network.dataReceived","params":{"requestId":"1.2","timestamp":12.5,"dataLength":512,"encodedDataLength":300}}"#;

    c.bench_function("event_fan_out", |b| {
        b.iter(|| backend.dispatch_text(black_box(event)).expect("dispatch"));
    });
}

criterion_group!(benches, bench_encode, bench_round_trip, bench_events);
criterion_main!(benches);
