#![allow(dead_code)]

use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};

pub struct TempWorkspace {
    pub root: PathBuf,
}

impl TempWorkspace {
    pub fn new(prefix: &str) -> Self {
        let root = std::env::temp_dir().join(format!("{}-{}", prefix, uuid::Uuid::new_v4()));
        fs::create_dir_all(&root).expect("create temp workspace");
        Self { root }
    }

    pub fn write_json(&self, name: &str, value: &Value) -> PathBuf {
        let path = self.root.join(name);
        let raw = serde_json::to_vec(value).expect("encode fixture");
        fs::write(&path, raw).expect("write fixture");
        path
    }

    pub fn write_raw(&self, name: &str, raw: &str) -> PathBuf {
        let path = self.root.join(name);
        fs::write(&path, raw).expect("write fixture");
        path
    }

    pub fn file_names(&self) -> Vec<String> {
        let mut names: Vec<String> = fs::read_dir(&self.root)
            .expect("list workspace")
            .filter_map(|entry| entry.ok())
            .map(|entry| entry.file_name().to_string_lossy().into_owned())
            .collect();
        names.sort();
        names
    }
}

impl Drop for TempWorkspace {
    fn drop(&mut self) {
        let _ = fs::remove_dir_all(&self.root);
    }
}

pub fn read_json(path: &Path) -> Value {
    let raw = fs::read_to_string(path).expect("read result");
    serde_json::from_str(&raw).expect("result is JSON")
}
