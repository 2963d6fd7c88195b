/// Binary entrypoint for the `qrclip` executable.
///
/// Keeps the binary thin — all logic lives in the `qrclip_lib` crate so tests
/// can drive a full run with a stubbed clipboard and in-memory I/O.
fn main() {
    qrclip_lib::run();
}
