// File: crates/scatter-core/build.rs
// Summary: Links the Windows registry API that Skia's font manager pulls in.

fn main() {
    #[cfg(target_os = "windows")]
    {
        // RegOpenKeyExW / RegQueryInfoKeyW from the Skia font lookup path
        println!("cargo:rustc-link-lib=advapi32");
    }
    println!("cargo:rerun-if-changed=build.rs");
}
