use std::{
    fs,
    path::{Path, PathBuf},
};

use tempfile::TempDir;

pub const HEADER: &str = "first_name,last_name,email,gender,ip_address";

/// The three-row customer sample: two github.io addresses and one gmail.com.
pub const SAMPLE_ROWS: &[&str] = &[
    "Mildred,Hernandez,mhernandez0@github.io,Female,38.194.51.128",
    "Mildred,Hernandez,sdfs@github.io,Female,38.194.51.128",
    "Mildred,Hernandez,sdfs@gmail.com,Female,38.194.51.128",
];

#[derive(Debug)]
pub struct CsvFixture {
    dir: TempDir,
    path: PathBuf,
}

impl CsvFixture {
    pub fn with_rows(rows: &[&str]) -> Self {
        let mut contents = String::from(HEADER);
        contents.push('\n');
        for row in rows {
            contents.push_str(row);
            contents.push('\n');
        }
        Self::raw(&contents)
    }

    pub fn raw(contents: &str) -> Self {
        let dir = TempDir::new().expect("temp dir");
        let path = dir.path().join("customers.csv");
        fs::write(&path, contents).expect("write fixture");
        Self { dir, path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    #[allow(dead_code)]
    pub fn dir(&self) -> &Path {
        self.dir.path()
    }
}
