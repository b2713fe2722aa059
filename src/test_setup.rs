#[ctor::ctor]
fn init_tests() {
    // tracing events are forwarded to `log`, so RUST_LOG=trace shows dispatch traffic
    let _ = env_logger::builder().is_test(true).try_init();
}
