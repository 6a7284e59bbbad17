//! Disassembler Benchmarks
//!
//! Linear sweep throughput over arithmetic-heavy, data-heavy and
//! syscall-heavy scripts.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use neo_vm::{disassemble, render_listing, OpCode, ScriptBuilder};

/// Creates a script that performs arithmetic operations
fn create_arithmetic_script(iterations: usize) -> Vec<u8> {
    let mut builder = ScriptBuilder::new();
    builder.emit_push_int(1);
    for _ in 0..iterations {
        builder.emit_opcode(OpCode::DUP);
        builder.emit_push_int(1);
        builder.emit_opcode(OpCode::ADD);
    }
    builder.emit_opcode(OpCode::RET);
    builder.into_bytes()
}

/// Creates a script that pushes payloads of the given size
fn create_pushdata_script(size: usize, count: usize) -> Vec<u8> {
    let payload = vec![0x61u8; size];
    let mut builder = ScriptBuilder::new();
    for _ in 0..count {
        builder.emit_push_bytes(&payload).expect("payload fits PUSHDATA4");
        builder.emit_opcode(OpCode::DROP);
    }
    builder.into_bytes()
}

/// Creates a script of storage syscalls
fn create_syscall_script(iterations: usize) -> Vec<u8> {
    let mut builder = ScriptBuilder::new();
    for _ in 0..iterations {
        builder.emit_syscall("System.Storage.GetContext");
        builder.emit_push_string("key").expect("short key");
        builder.emit_syscall("System.Storage.Get");
    }
    builder.into_bytes()
}

fn bench_arithmetic(c: &mut Criterion) {
    let mut group = c.benchmark_group("disassemble_arithmetic");

    for iterations in [10, 100, 1000].iter() {
        let script = create_arithmetic_script(*iterations);
        group.throughput(Throughput::Bytes(script.len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(iterations), &script, |b, script| {
            b.iter(|| disassemble(black_box(script)))
        });
    }

    group.finish();
}

fn bench_pushdata(c: &mut Criterion) {
    let mut group = c.benchmark_group("disassemble_pushdata");

    for size in [16, 256, 4096].iter() {
        let script = create_pushdata_script(*size, 64);
        group.throughput(Throughput::Bytes(script.len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &script, |b, script| {
            b.iter(|| disassemble(black_box(script)))
        });
    }

    group.finish();
}

fn bench_syscalls(c: &mut Criterion) {
    let script = create_syscall_script(500);
    c.bench_function("disassemble_syscalls", |b| {
        b.iter(|| disassemble(black_box(&script)))
    });
    c.bench_function("render_listing_syscalls", |b| {
        b.iter(|| render_listing(black_box(&script)))
    });
}

criterion_group!(benches, bench_arithmetic, bench_pushdata, bench_syscalls);
criterion_main!(benches);
