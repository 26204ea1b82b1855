fn main() {
    // write build time info, picked up by `built_info` in the library
    built::write_built_file().expect("Failed to acquire build-time information");

    // rerun on every release build so the build time stays current
    #[cfg(not(debug_assertions))]
    println!("cargo:rerun-if-changed=foobaz");
}
