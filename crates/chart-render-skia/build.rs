// File: crates/chart-render-skia/build.rs
// Summary: Links the Windows system libraries Skia's font manager needs when targeting Windows.

fn main() {
    println!("cargo:rerun-if-changed=build.rs");
    // Build scripts run on the host; the target is only visible through the environment.
    if std::env::var("CARGO_CFG_TARGET_OS").as_deref() == Ok("windows") {
        // RegOpenKeyExW, RegQueryInfoKeyW
        println!("cargo:rustc-link-lib=advapi32");
    }
}
