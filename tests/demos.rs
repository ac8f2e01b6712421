// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Bundled demo models written to disk

use scadgen::models::Demo;
use scadgen::{Generator, GeneratorConfig};
use std::fs;
use walkdir::WalkDir;

fn scad_files(root: &std::path::Path) -> Vec<String> {
    let mut files: Vec<String> = WalkDir::new(root)
        .into_iter()
        .filter_map(|entry| entry.ok())
        .filter(|entry| entry.path().extension().map_or(false, |ext| ext == "scad"))
        .map(|entry| {
            entry
                .path()
                .strip_prefix(root)
                .unwrap()
                .to_string_lossy()
                .replace('\\', "/")
        })
        .collect();
    files.sort();
    files
}

#[test]
fn test_die_writes_dimple_module() -> anyhow::Result<()> {
    let dir = tempfile::tempdir()?;
    let generator = Generator::new(GeneratorConfig {
        output_dir: dir.path().to_path_buf(),
        ..GeneratorConfig::default()
    });

    generator.write(&Demo::Die.model())?;

    assert_eq!(scad_files(dir.path()), ["die.scad", "dimple/dimple.scad"]);

    let die = fs::read_to_string(dir.path().join("die.scad"))?;
    assert!(die.starts_with("use <dimple/dimple.scad>\n\nmodule die() {\n\tdifference() {\n"));
    assert!(die.contains("\t\t\tdimple();\n"));
    assert!(die.ends_with("}\n\ndie();\n"));

    let dimple = fs::read_to_string(dir.path().join("dimple").join("dimple.scad"))?;
    assert!(dimple.contains("\trotate(a=180, v=[1, 0, 0]) {\n"));
    Ok(())
}

#[test]
fn test_all_demos_write() -> anyhow::Result<()> {
    for demo in Demo::ALL {
        let dir = tempfile::tempdir()?;
        let generator = Generator::new(GeneratorConfig {
            output_dir: dir.path().to_path_buf(),
            ..GeneratorConfig::default()
        });

        let files = generator.write(&demo.model())?;
        assert_eq!(scad_files(dir.path()).len(), files.len(), "demo {}", demo.as_str());
    }
    Ok(())
}
