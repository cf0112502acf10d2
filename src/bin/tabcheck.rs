// Tabcheck CLI: conformance checks and the performance harness.
// Usage: cargo run --bin tabcheck -- <style|perf|list>

fn main() {
    tabcheck::cli::run();
}
