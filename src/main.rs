// This binary crate is intentionally minimal.
// All RBM logic lives in the library (src/lib.rs and its modules).
// Run the demo with:
//   cargo run --example bars
fn main() {
    println!("hematite-rbm: a restricted Boltzmann machine trained with CD-1.");
    println!("Run `cargo run --example bars` to see the bars demo.");
}
