// File: crates/chart-core/build.rs
// Summary: Links the Windows system libraries Skia's font manager needs.

fn main() {
    #[cfg(target_os = "windows")]
    {
        // Needed for RegOpenKeyExW, RegQueryInfoKeyW, etc. (Skia/ICU font lookup)
        println!("cargo:rustc-link-lib=advapi32");
        println!("cargo:rustc-link-lib=user32");
    }
    println!("cargo:rerun-if-changed=build.rs");
}
