/*!
 * Tests for file utility functions
 */

use std::path::Path;
use anyhow::Result;
use bilingua::file_utils::FileManager;
use crate::common;

/// Test that file_exists returns true for existing files
#[test]
fn test_file_exists_withExistingFile_shouldReturnTrue() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let test_file = common::create_test_file(temp_dir.path(), "novel.txt", "test content")?;

    assert!(FileManager::file_exists(&test_file));
    assert!(!FileManager::dir_exists(&test_file));

    Ok(())
}

/// Test that file_exists returns false for non-existent files
#[test]
fn test_file_exists_withNonExistentFile_shouldReturnFalse() {
    assert!(!FileManager::file_exists("non_existent_file.tmp"));
}

/// Test that generate_output_path appends the target identifier to the stem
#[test]
fn test_generate_output_path_withValidInputs_shouldCreateCorrectPath() {
    let input_file = Path::new("/tmp/input/novel.txt");
    let output_dir = Path::new("/tmp/output");

    let output_path = FileManager::generate_output_path(input_file, output_dir, "fr", "txt");

    assert_eq!(output_path, Path::new("/tmp/output/novel.fr.txt"));
}

#[test]
fn test_is_translation_output_withTargetSuffix_shouldDetectPreviousOutputs() {
    assert!(FileManager::is_translation_output("/books/novel.fr.txt", "fr"));
    assert!(!FileManager::is_translation_output("/books/novel.txt", "fr"));
    assert!(!FileManager::is_translation_output("/books/novel.en.txt", "fr"));
    assert!(!FileManager::is_translation_output("/books/novel.fr.txt", ""));
}

/// Test that ensure_dir creates nested directories as needed
#[test]
fn test_ensure_dir_withNonExistentDir_shouldCreateDirectory() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let nested = temp_dir.path().join("a").join("b");

    FileManager::ensure_dir(&nested)?;

    assert!(FileManager::dir_exists(&nested));
    Ok(())
}

/// Test that find_files walks subdirectories and filters on extension
#[test]
fn test_find_files_withNestedDirs_shouldReturnSortedMatches() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    common::create_test_file(temp_dir.path(), "b.txt", "b")?;
    common::create_test_file(temp_dir.path(), "a.TXT", "a")?;
    common::create_test_file(temp_dir.path(), "notes.md", "skip")?;
    common::create_test_file(temp_dir.path(), "sub/c.txt", "c")?;

    let files = FileManager::find_files(temp_dir.path(), ".txt")?;
    let names: Vec<String> = files
        .iter()
        .map(|p| p.strip_prefix(temp_dir.path()).unwrap().to_string_lossy().replace('\\', "/"))
        .collect();

    assert_eq!(names, vec!["a.TXT", "b.txt", "sub/c.txt"]);
    Ok(())
}

/// Test that write_to_file creates parents and read_to_string reads back
#[test]
fn test_write_to_file_withMissingParent_shouldCreateAndWrite() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let path = temp_dir.path().join("out").join("novel.fr.txt");

    FileManager::write_to_file(&path, "line\r\n")?;

    assert_eq!(FileManager::read_to_string(&path)?, "line\r\n");
    Ok(())
}

#[test]
fn test_read_to_string_withMissingFile_shouldFailWithPath() {
    let result = FileManager::read_to_string("missing_input_12345.txt");

    let message = format!("{:#}", result.unwrap_err());
    assert!(message.contains("missing_input_12345.txt"));
}
