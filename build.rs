fn main() {
    // CI stamps release builds through VERSION; local builds keep the Cargo.toml version
    println!("cargo:rerun-if-env-changed=VERSION");
    if let Ok(version) = std::env::var("VERSION") {
        println!("cargo:rustc-env=CARGO_PKG_VERSION={version}");
    }
}
