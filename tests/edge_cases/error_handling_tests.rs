use serde_json::json;
use source_inspector::{analyze_file, inspect_file, AnalysisOutcome, InspectError};

use crate::common::TestFiles;

#[test]
fn test_missing_file_is_single_field_record() {
    let files = TestFiles::new();
    let path = files.path().join("ghost.py");

    let outcome = analyze_file(&path);
    let value = serde_json::to_value(&outcome).unwrap();
    assert_eq!(
        value,
        json!({ "error": format!("File not found: {}", path.display()) })
    );
}

#[test]
fn test_relative_missing_path_is_reported_as_given() {
    let outcome = analyze_file("does/not/exist.ts");
    assert_eq!(outcome.error(), Some("File not found: does/not/exist.ts"));
}

#[test]
fn test_empty_file_has_one_line() {
    let files = TestFiles::new();
    let path = files.add("empty.py", "");
    let result = inspect_file(&path).unwrap();

    assert_eq!(result.size_bytes, 0);
    assert_eq!(result.line_count, 1);
    assert_eq!(result.imports, Some(vec![]));
    assert_eq!(result.functions, Some(vec![]));
    assert_eq!(result.classes, Some(vec![]));
}

#[test]
fn test_single_terminator_has_two_lines() {
    let files = TestFiles::new();
    let path = files.add("one.txt", "\n");
    assert_eq!(inspect_file(&path).unwrap().line_count, 2);
}

#[test]
fn test_unknown_extension_has_no_structural_keys() {
    let files = TestFiles::new();
    let path = files.add("data.xyz", "import os\nclass Foo:\n    def bar(self): pass\n");

    let value = serde_json::to_value(analyze_file(&path)).unwrap();
    assert_eq!(value["language"], "Unknown");
    assert!(value.get("imports").is_none());
    assert!(value.get("functions").is_none());
    assert!(value.get("classes").is_none());
}

#[test]
fn test_no_extension_is_unknown() {
    let files = TestFiles::new();
    let path = files.add("Makefile", "all:\n\tcargo build\n");
    let result = inspect_file(&path).unwrap();
    assert_eq!(result.language, "Unknown");
    assert!(!result.has_structure());
}

#[test]
fn test_json_and_markdown_never_carry_structure() {
    let files = TestFiles::new();
    let code = "import os\nfrom x import y\nfunction f() {}\nclass Z {}\n";
    for name in ["pkg.json", "README.md", "Main.java", "lib.rs", "style.scss"] {
        let path = files.add(name, code);
        let result = inspect_file(&path).unwrap();
        assert!(result.imports.is_none(), "{name}");
        assert!(result.functions.is_none(), "{name}");
        assert!(result.classes.is_none(), "{name}");
    }
}

#[test]
fn test_uppercase_extension_is_classified() {
    let files = TestFiles::new();
    let path = files.add("SCRIPT.PY", "def main():\n    pass\n");
    let result = inspect_file(&path).unwrap();
    assert_eq!(result.language, "Python");
    assert_eq!(result.functions, Some(vec!["def main(...)".to_string()]));
}

#[test]
fn test_directory_reports_io_error() {
    let files = TestFiles::new();
    let err = inspect_file(files.path()).unwrap_err();
    assert!(matches!(err, InspectError::Io(_)));
}

#[test]
fn test_invalid_utf8_reports_decoder_message() {
    let files = TestFiles::new();
    let path = files.add("latin1.py", [b'#', b' ', 0xe9, b'\n']);

    match analyze_file(&path) {
        AnalysisOutcome::Failure(record) => {
            assert!(record.error.contains("UTF-8"), "{}", record.error);
        }
        AnalysisOutcome::Success(r) => panic!("expected failure, got {r:?}"),
    }
}

#[test]
fn test_matches_in_docstrings_are_reported() {
    let files = TestFiles::new();
    let path = files.add(
        "doc.py",
        "\"\"\"\nUsage: import tool\nclass Example shows usage\n\"\"\"\n",
    );
    let result = inspect_file(&path).unwrap();
    assert_eq!(result.imports, Some(vec!["import tool".to_string()]));
    assert_eq!(result.classes, Some(vec!["class Example".to_string()]));
}
