use assert_cmd::cargo::cargo_bin_cmd;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

pub const MANIFEST_NAME: &str = "dev.goats.xivlauncher.yml";
pub const APPSTREAM_NAME: &str = "dev.goats.xivlauncher.metainfo.xml";

pub const MANIFEST: &str = r#"app-id: dev.goats.xivlauncher
runtime: org.freedesktop.Platform
runtime-version: '23.08'
sdk: org.freedesktop.Sdk
command: xivlauncher-core
finish-args:
  - --share=ipc
  - --socket=x11
modules:
  - shared-modules/SDL2/SDL2-with-libdecor.json
  - name: aria2
    sources:
      - type: archive
        url: https://github.com/aria2/aria2/releases/download/release-1.37.0/aria2-1.37.0.tar.xz
        sha256: 60a420ad7085eb616cb6e2bdf0a7206d68ff3d37fb5a956dc44242eb2f79b66b
  - name: xivlauncher
    buildsystem: simple
    build-commands:
      - ./build.sh
    sources:
      - type: git
        url: https://github.com/goatcorp/XIVLauncher.Core.git
        tag: v1.0
        commit: abc
      - type: file
        path: nuget-dependencies.json
"#;

pub const APPSTREAM: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<component type="desktop-application">
  <id>dev.goats.xivlauncher</id>
  <name>XIVLauncher</name>
  <releases>
    <release version="1.0" date="2023-01-01"/>
    <release version="0.9" date="2022-06-01"/>
  </releases>
</component>
"#;

/// Creates a directory holding the sample manifest and appstream files.
#[allow(unused)]
pub fn create_release_dir() -> TempDir {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join(MANIFEST_NAME), MANIFEST).unwrap();
    fs::write(temp.path().join(APPSTREAM_NAME), APPSTREAM).unwrap();
    temp
}

#[allow(unused)]
pub fn manifest_path(dir: &Path) -> PathBuf {
    dir.join(MANIFEST_NAME)
}

#[allow(unused)]
pub fn appstream_path(dir: &Path) -> PathBuf {
    dir.join(APPSTREAM_NAME)
}

/// Parses a YAML file into a generic value for structural comparison.
#[allow(unused)]
pub fn read_yaml(path: &Path) -> serde_yaml::Value {
    serde_yaml::from_str(&fs::read_to_string(path).unwrap()).unwrap()
}

/// Runs `update-flatpak-manifest` in `dir`.
#[allow(unused)]
pub fn run_manifest(dir: &Path, args: &[&str]) -> assert_cmd::assert::Assert {
    let mut cmd = cargo_bin_cmd!("update-flatpak-manifest");
    cmd.args(args).current_dir(dir).env("NO_COLOR", "1");
    cmd.assert()
}

/// Runs `update-flatpak-release` in `dir`.
#[allow(unused)]
pub fn run_release(dir: &Path, args: &[&str]) -> assert_cmd::assert::Assert {
    let mut cmd = cargo_bin_cmd!("update-flatpak-release");
    cmd.args(args).current_dir(dir).env("NO_COLOR", "1");
    cmd.assert()
}
