//! Raw-zone extraction from the source zip archive.

use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};

use tracing::debug;

use lens_model::{LensError, Result};

/// Extract the archive entry whose name contains `dataset_name` and persist
/// it to `output_dir/<dataset_name>`.
///
/// Exactly one entry must match: zero matches is a `NotFound` error and
/// more than one is a `MultiMatch` error.
pub fn extract_dataset(
    archive_path: &Path,
    output_dir: &Path,
    dataset_name: &str,
) -> Result<PathBuf> {
    let file = File::open(archive_path).map_err(|error| LensError::Archive {
        path: archive_path.to_path_buf(),
        message: error.to_string(),
    })?;
    let mut archive = zip::ZipArchive::new(file).map_err(|error| LensError::Archive {
        path: archive_path.to_path_buf(),
        message: error.to_string(),
    })?;

    let mut matches: Vec<String> = archive
        .file_names()
        .filter(|name| name.contains(dataset_name))
        .map(str::to_string)
        .collect();
    matches.sort();

    let entry_name = match matches.len() {
        0 => {
            return Err(LensError::NotFound(format!(
                "no entry matching '{dataset_name}' found in {}",
                archive_path.display()
            )));
        }
        1 => matches.remove(0),
        _ => {
            return Err(LensError::MultiMatch {
                name: dataset_name.to_string(),
                entries: matches,
            });
        }
    };

    let mut entry = archive.by_name(&entry_name).map_err(|error| LensError::Archive {
        path: archive_path.to_path_buf(),
        message: error.to_string(),
    })?;
    let mut contents = Vec::with_capacity(entry.size() as usize);
    entry.read_to_end(&mut contents)?;

    std::fs::create_dir_all(output_dir)?;
    let output_path = output_dir.join(dataset_name);
    std::fs::write(&output_path, &contents)?;
    debug!(
        entry = %entry_name,
        bytes = contents.len(),
        output = %output_path.display(),
        "extracted dataset from archive"
    );
    Ok(output_path)
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::io::Write;

    use zip::write::SimpleFileOptions;

    fn build_archive(dir: &Path, entries: &[(&str, &str)]) -> PathBuf {
        let path = dir.join("source.zip");
        let file = File::create(&path).unwrap();
        let mut writer = zip::ZipWriter::new(file);
        for (name, contents) in entries {
            writer
                .start_file(*name, SimpleFileOptions::default())
                .unwrap();
            writer.write_all(contents.as_bytes()).unwrap();
        }
        writer.finish().unwrap();
        path
    }

    #[test]
    fn extracts_the_single_matching_entry() {
        let dir = tempfile::tempdir().unwrap();
        let archive = build_archive(
            dir.path(),
            &[("ml-1m/movies.dat", "1::Toy Story (1995)::Animation\n")],
        );

        let out = extract_dataset(&archive, &dir.path().join("raw"), "movies.dat").unwrap();
        let contents = std::fs::read_to_string(out).unwrap();
        assert_eq!(contents, "1::Toy Story (1995)::Animation\n");
    }

    #[test]
    fn zero_matches_is_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let archive = build_archive(dir.path(), &[("ml-1m/movies.dat", "x")]);

        let error = extract_dataset(&archive, dir.path(), "users.dat").unwrap_err();
        assert!(matches!(error, LensError::NotFound(_)));
    }

    #[test]
    fn multiple_matches_is_multi_match() {
        let dir = tempfile::tempdir().unwrap();
        let archive = build_archive(
            dir.path(),
            &[("a/movies.dat", "x"), ("b/movies.dat", "y")],
        );

        let error = extract_dataset(&archive, dir.path(), "movies.dat").unwrap_err();
        match error {
            LensError::MultiMatch { name, entries } => {
                assert_eq!(name, "movies.dat");
                assert_eq!(entries, vec!["a/movies.dat", "b/movies.dat"]);
            }
            other => panic!("unexpected error: {other}"),
        }
    }
}
