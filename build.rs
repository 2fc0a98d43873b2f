use std::process::Command;

fn main() {
    // The system snapshot reports the toolchain version of the running
    // process; rustc only exposes it at build time.
    let rustc = std::env::var("RUSTC").unwrap_or_else(|_| "rustc".to_string());
    let version = Command::new(rustc)
        .arg("--version")
        .output()
        .ok()
        .and_then(|out| String::from_utf8(out.stdout).ok())
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .unwrap_or_else(|| "unknown".to_string());

    println!("cargo:rustc-env=INFO_SERVICE_RUSTC_VERSION={version}");
}
