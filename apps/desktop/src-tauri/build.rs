fn main() {
    // Link Core Audio on macOS
    #[cfg(target_os = "macos")]
    println!("cargo:rustc-link-lib=framework=CoreAudio");

    tauri_build::build()
}
