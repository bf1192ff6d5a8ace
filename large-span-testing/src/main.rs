use large_span::{LargeSpan, PlainData};

#[derive(Debug, Clone, Copy, PartialEq, PlainData)]
#[repr(C, align(16))]
struct Vertex {
    position: [f32; 3],
    weight: f32,
}

#[derive(Debug, Clone, Copy, PartialEq, PlainData)]
#[repr(transparent)]
struct Handle(u64);

fn main() {
    let vertices = [Vertex {
        position: [0.0; 3],
        weight: 1.0,
    }; 4];
    let handles = [Handle(1), Handle(2)];
    println!(
        "{} vertex bytes, {} handle bytes",
        LargeSpan::new(&vertices).as_bytes().len(),
        LargeSpan::new(&handles).as_bytes().len(),
    );
}
