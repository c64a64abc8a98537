// Typing through a document: cursor moves, page jumps and persisted progress

use murekkep_wasm::config::DEFAULT_DOCUMENTS_KEY;
use murekkep_wasm::text::KeyInput;
use murekkep_wasm::{Document, DocumentMode, Library, MemoryBlobStore, NewDocument, Settings};

fn keep_line_breaks() -> Settings {
    Settings {
        collapse_whitespace: false,
        ..Settings::default()
    }
}

fn add(lib: &mut Library<MemoryBlobStore>, title: &str, content: &str) -> String {
    lib.add_document(NewDocument::new(title, content, DocumentMode::Plain))
        .unwrap()
        .id
        .clone()
}

#[test]
fn test_type_through_line_break() {
    let mut lib = Library::load(MemoryBlobStore::new(), keep_line_breaks());
    let id = add(&mut lib, "Lines", "ab\ncd");

    assert_eq!(lib.type_key(&id, KeyInput::Char('a')), Some(1));
    assert_eq!(lib.type_key(&id, KeyInput::Char('b')), Some(2));
    assert_eq!(lib.type_key(&id, KeyInput::LineSubmit), Some(3));
    assert_eq!(lib.type_key(&id, KeyInput::Backspace), Some(2));
    assert_eq!(lib.document(&id).unwrap().cursor, 2);
}

#[test]
fn test_mismatched_key_does_nothing() {
    let mut lib = Library::load(MemoryBlobStore::new(), keep_line_breaks());
    let id = add(&mut lib, "Lines", "ab\ncd");

    assert_eq!(lib.type_key(&id, KeyInput::Char('x')), None);
    assert_eq!(lib.type_key(&id, KeyInput::LineSubmit), None);
    assert_eq!(lib.type_key(&id, KeyInput::Backspace), None);
    assert_eq!(lib.document(&id).unwrap().cursor, 0);
}

#[test]
fn test_finishing_a_document() {
    let mut lib = Library::load(MemoryBlobStore::new(), Settings::default());
    let id = add(&mut lib, "Short", "ok");

    lib.type_key(&id, KeyInput::Char('o'));
    lib.type_key(&id, KeyInput::Char('k'));
    let doc = lib.document(&id).unwrap();
    assert!(doc.is_finished());
    assert_eq!(doc.progress_percent(), 100.0);

    // nothing left to type
    assert_eq!(lib.type_key(&id, KeyInput::Char('k')), None);
}

#[test]
fn test_page_jumps_are_clamped() {
    let settings = Settings {
        page_size: 4,
        ..Settings::default()
    };
    let mut lib = Library::load(MemoryBlobStore::new(), settings);
    let id = add(&mut lib, "Pages", "abcdefghij");

    assert_eq!(lib.jump_to_page(&id, 2), Some(4));
    assert_eq!(lib.page_view(&id).unwrap().page_number, 2);
    assert_eq!(lib.page_view(&id).unwrap().text, "efgh");

    assert_eq!(lib.jump_to_page(&id, 99), Some(8));
    let view = lib.page_view(&id).unwrap();
    assert_eq!(view.page_number, 3);
    assert_eq!(view.total_pages, 3);
    assert_eq!(view.text, "ij");

    assert_eq!(lib.jump_to_page(&id, 0), Some(0));
}

#[test]
fn test_progress_survives_reload() {
    let mut lib = Library::load(MemoryBlobStore::new(), keep_line_breaks());
    let id = add(&mut lib, "Lines", "ab\ncd");
    lib.type_key(&id, KeyInput::Char('a'));
    lib.type_key(&id, KeyInput::Char('b'));

    let reloaded = Library::load(lib.store().clone(), keep_line_breaks());
    assert_eq!(reloaded.document(&id).unwrap().cursor, 2);
    assert!(reloaded.active_document().is_none());
}

#[test]
fn test_stored_progress_index_is_read() {
    let stored = r#"[{"id":"b1","title":"Old","content":"hello","progressIndex":3,"createdAt":1700000000000,"mode":"normal"}]"#;
    let store = MemoryBlobStore::new().with_blob(DEFAULT_DOCUMENTS_KEY, stored);
    let lib = Library::load(store, Settings::default());

    let doc: &Document = lib.document("b1").unwrap();
    assert_eq!(doc.cursor, 3);
    assert_eq!(doc.mode, DocumentMode::Plain);
    assert!(doc.highlights.is_empty());
}

#[test]
fn test_corrupt_documents_blob_loads_empty() {
    let store = MemoryBlobStore::new().with_blob(DEFAULT_DOCUMENTS_KEY, "{not json");
    let mut lib = Library::load(store, Settings::default());
    assert!(lib.documents().is_empty());

    // the library stays usable and overwrites the bad blob
    let id = add(&mut lib, "Fresh", "text");
    let reloaded = Library::load(lib.store().clone(), Settings::default());
    assert_eq!(reloaded.documents()[0].id, id);
}

#[test]
fn test_delete_active_document_closes_it() {
    let mut lib = Library::load(MemoryBlobStore::new(), Settings::default());
    let first = add(&mut lib, "First", "one");
    let second = add(&mut lib, "Second", "two");
    assert_eq!(lib.documents()[0].id, second);

    lib.select_document(&first).unwrap();
    assert!(lib.remove_document(&first));
    assert!(lib.active_document().is_none());
    assert_eq!(lib.documents().len(), 1);
}
