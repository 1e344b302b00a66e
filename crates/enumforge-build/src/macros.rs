//! Build-script helper that runs one smart-enum generation pass over a
//! declaration directory and writes the artifacts into `OUT_DIR`.

#[macro_export]
macro_rules! generate {
    ($decl_dir:expr) => {{
        println!("cargo:rerun-if-changed=build.rs");
        println!("cargo:rerun-if-changed={}", $decl_dir);

        let out_dir = ::std::env::var("OUT_DIR").expect("OUT_DIR not set");

        ::enumforge::build::generate(
            ::std::path::Path::new($decl_dir),
            ::std::path::Path::new(&out_dir),
        )
        .expect("smart-enum generation failed")
    }};
}
