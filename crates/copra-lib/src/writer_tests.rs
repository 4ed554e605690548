use std::fs;

use crate::{Error, write_stub};

#[test]
fn creates_missing_directories() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("typings").join("sim");

    let path = write_stub(&out, "dut.pyi", "class DUT: ...\n").unwrap();

    assert_eq!(path, out.join("dut.pyi"));
    assert_eq!(fs::read_to_string(&path).unwrap(), "class DUT: ...\n");
}

#[test]
fn overwrites_existing_file() {
    let dir = tempfile::tempdir().unwrap();
    write_stub(dir.path(), "dut.pyi", "old").unwrap();
    let path = write_stub(dir.path(), "dut.pyi", "new").unwrap();

    assert_eq!(fs::read_to_string(path).unwrap(), "new");
}

#[test]
fn writes_utf8() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_stub(dir.path(), "dut.pyi", "# größe\n").unwrap();

    assert_eq!(fs::read(path).unwrap(), "# größe\n".as_bytes());
}

#[test]
fn directory_blocked_by_file() {
    let dir = tempfile::tempdir().unwrap();
    let blocker = dir.path().join("blocker");
    fs::write(&blocker, "").unwrap();

    let err = write_stub(&blocker.join("sub"), "dut.pyi", "").unwrap_err();

    let Error::Io { path, .. } = &err else {
        panic!("expected Io error, got {err:?}");
    };
    assert_eq!(path, &blocker.join("sub"));
}

#[test]
fn target_is_directory() {
    let dir = tempfile::tempdir().unwrap();
    fs::create_dir(dir.path().join("dut.pyi")).unwrap();

    let err = write_stub(dir.path(), "dut.pyi", "").unwrap_err();

    assert!(matches!(err, Error::Io { .. }));
    assert!(err.to_string().contains("dut.pyi"));
}
