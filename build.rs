// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let proto_root = "proto";

    prost_build::Config::new()
        .out_dir("src/proto") // generated Rust goes here
        .compile_protos(&[format!("{proto_root}/mesh.proto")], &[proto_root])?;

    println!("cargo:rerun-if-changed={proto_root}/mesh.proto");
    Ok(())
}
