//! Build script for embedding frontend assets.
//!
//! Release builds of the server run Trunk and embed the resulting dist/
//! directory with rust-embed. Every other build only makes sure dist/ exists,
//! since rust-embed refuses to derive over a missing folder; in debug mode the
//! assets are read from the filesystem at runtime.

use std::env;
use std::fs;
use std::process::Command;

fn main() {
    println!("cargo:rerun-if-changed=src/frontend");
    println!("cargo:rerun-if-changed=Trunk.toml");
    println!("cargo:rerun-if-changed=index.html");
    println!("cargo:rerun-if-changed=style.css");

    // Trunk compiles the frontend through this same package; never recurse.
    let is_wasm = env::var("CARGO_CFG_TARGET_ARCH").is_ok_and(|arch| arch == "wasm32");
    let is_backend = env::var_os("CARGO_FEATURE_BACKEND").is_some();
    let is_release = env::var("PROFILE").is_ok_and(|profile| profile == "release");

    if is_backend && is_release && !is_wasm {
        println!("cargo:warning=Building frontend with Trunk...");

        let status = Command::new("trunk")
            .args(["build", "--release", "--dist", "dist"])
            .env("CARGO_TARGET_DIR", "target/trunk")
            .status()
            .expect("Failed to execute trunk command. Is trunk installed?");

        if !status.success() {
            panic!(
                "Trunk build failed with exit code: {:?}. \
                 Ensure trunk is installed and the frontend builds successfully.",
                status.code()
            );
        }

        println!("cargo:warning=Frontend build completed successfully");
    }

    fs::create_dir_all("dist").expect("Failed to create dist/ directory");
}
