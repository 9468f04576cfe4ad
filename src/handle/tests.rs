use super::*;
use std::io::Write;

#[test]
fn test_memory_file_name() {
    let file = MemoryFile::new("notes.txt", b"hello".to_vec());
    assert_eq!(file.name(), "notes.txt");
    assert_eq!(file.len(), 5);
}

#[tokio::test]
async fn test_memory_file_read() {
    let file = MemoryFile::new("notes.txt", b"hello world".to_vec());
    let bytes = file.read_bytes().await.unwrap();
    assert_eq!(bytes, b"hello world");
}

#[tokio::test]
async fn test_disk_file_read() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("data.txt");
    std::fs::File::create(&path)
        .unwrap()
        .write_all(b"on disk")
        .unwrap();

    let file = DiskFile::new(&path);
    assert_eq!(file.name(), "data.txt");
    assert_eq!(file.read_bytes().await.unwrap(), b"on disk");
}

#[tokio::test]
async fn test_disk_file_missing() {
    let dir = tempfile::tempdir().unwrap();
    let file = DiskFile::new(dir.path().join("absent.txt"));
    assert!(file.read_bytes().await.is_err());
}

#[test]
fn test_disk_file_with_name() {
    let file = DiskFile::with_name("/tmp/whatever/x.txt", "sub/x.txt");
    assert_eq!(file.name(), "sub/x.txt");
}

#[test]
fn test_collection_push_and_iter() {
    let mut collection = FileCollection::new();
    collection.push(MemoryFile::new("a.txt", b"a".to_vec()));
    collection.push(MemoryFile::new("b.txt", b"b".to_vec()));

    assert_eq!(collection.len(), 2);
    let names: Vec<_> = collection.iter().map(|h| h.name().to_string()).collect();
    assert_eq!(names, vec!["a.txt", "b.txt"]);
}

#[test]
fn test_collection_from_iterator() {
    let collection: FileCollection = vec![
        MemoryFile::new("x.txt", b"x".to_vec()),
        MemoryFile::new("y.txt", b"y".to_vec()),
    ]
    .into_iter()
    .collect();
    assert_eq!(collection.len(), 2);
}

#[test]
fn test_collection_from_dir() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::create_dir(dir.path().join("sub")).unwrap();
    std::fs::write(dir.path().join("top.txt"), b"top").unwrap();
    std::fs::write(dir.path().join("sub/inner.txt"), b"inner").unwrap();

    let collection = FileCollection::from_dir(dir.path()).unwrap();
    let mut names: Vec<_> = collection.iter().map(|h| h.name().to_string()).collect();
    names.sort();

    // Only regular files, named relative to the root
    assert_eq!(names, vec!["sub/inner.txt", "top.txt"]);
}
