use std::fs;

use tempfile::TempDir;
use wgsl_dump::fixture::merge_text;
use wgsl_dump::{ArtifactWriter, CaptureError, IdentifierResolver};

const TEST: &str = "webgpu:shader,execution,expression:call,builtin:abs:f32";

#[test]
fn shader_source_round_trips() {
    let tmp = TempDir::new().unwrap();
    let writer = ArtifactWriter::new(tmp.path());
    let path = IdentifierResolver::default().resolve(TEST).unwrap();
    let source = "@compute @workgroup_size(1)\nfn main() {\n  // ünïcødé\n}\n";

    let target = writer.write(&path, ".wgsl", source).unwrap();
    assert_eq!(
        target,
        tmp.path().join("execution/expression/call/builtin/abs_f32.wgsl")
    );
    assert_eq!(fs::read_to_string(&target).unwrap(), source);
}

#[test]
fn plain_write_overwrites() {
    let tmp = TempDir::new().unwrap();
    let writer = ArtifactWriter::new(tmp.path());
    let path = IdentifierResolver::default().resolve(TEST).unwrap();

    writer.write(&path, ".wgsl", "first").unwrap();
    let target = writer.write(&path, ".wgsl", "second").unwrap();
    assert_eq!(fs::read_to_string(target).unwrap(), "second");
}

#[test]
fn merged_writes_accumulate_fragments() {
    let tmp = TempDir::new().unwrap();
    let writer = ArtifactWriter::new(tmp.path());
    let path = IdentifierResolver::default().resolve(TEST).unwrap();

    writer
        .write_merged(&path, ".in.json", r#"{"0:0": [1, 2]}"#, merge_text)
        .unwrap();
    let target = writer
        .write_merged(&path, ".in.json", r#"{"0:1": [3, 4]}"#, merge_text)
        .unwrap();
    assert_eq!(target, writer.target(&path, ".in.json"));
    assert_eq!(
        fs::read_to_string(target).unwrap(),
        r#"{"0:0": [1, 2], "0:1": [3, 4]}"#
    );
}

#[test]
fn merge_is_skipped_for_a_new_file() {
    let tmp = TempDir::new().unwrap();
    let writer = ArtifactWriter::new(tmp.path());
    let path = IdentifierResolver::default().resolve(TEST).unwrap();

    let target = writer
        .write_merged(&path, ".in.json", "as-is", |_, _| {
            panic!("merge called without an existing file")
        })
        .unwrap();
    assert_eq!(fs::read_to_string(target).unwrap(), "as-is");
}

#[test]
fn malformed_existing_fixture_is_left_untouched() {
    let tmp = TempDir::new().unwrap();
    let writer = ArtifactWriter::new(tmp.path());
    let path = IdentifierResolver::default().resolve(TEST).unwrap();
    let target = writer.write(&path, ".in.json", "not json").unwrap();

    let err = writer
        .write_merged(&path, ".in.json", r#"{"0:0": [1]}"#, merge_text)
        .unwrap_err();
    assert!(matches!(err, CaptureError::MalformedFixture { .. }));
    assert_eq!(fs::read_to_string(target).unwrap(), "not json");
}

#[test]
fn directory_creation_failure_is_reported() {
    let tmp = TempDir::new().unwrap();
    let blocker = tmp.path().join("blocker");
    fs::write(&blocker, "a file, not a directory").unwrap();
    let writer = ArtifactWriter::new(&blocker);
    let path = IdentifierResolver::default().resolve(TEST).unwrap();

    let err = writer.write(&path, ".wgsl", "x").unwrap_err();
    assert!(matches!(err, CaptureError::CreateDir { .. }));
}

#[test]
fn unreadable_existing_fixture_is_reported() {
    let tmp = TempDir::new().unwrap();
    let writer = ArtifactWriter::new(tmp.path());
    let path = IdentifierResolver::default().resolve(TEST).unwrap();
    let target = writer.target(&path, ".in.json");
    fs::create_dir_all(&target).unwrap();

    let err = writer
        .write_merged(&path, ".in.json", r#"{"0:0": [1]}"#, |_, _| {
            panic!("merge called for an unreadable target")
        })
        .unwrap_err();
    match err {
        CaptureError::Read { path, .. } => assert_eq!(path, target),
        other => panic!("expected a read error, got {other:?}"),
    }
    assert!(target.is_dir());
}
