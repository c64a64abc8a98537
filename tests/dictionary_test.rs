// Dictionary entries, folders and the delete-folder cascade

use murekkep_wasm::text::{IndexedSelection, SelectionMapper};
use murekkep_wasm::{DocumentMode, EntryFilter, FolderFilter, Library, MemoryBlobStore, NewDocument, Settings};

fn library() -> Library<MemoryBlobStore> {
    Library::load(MemoryBlobStore::new(), Settings::default())
}

#[test]
fn test_delete_folder_keeps_entries() {
    let mut lib = library();
    let folder = lib.create_folder("Fiiller").unwrap().id.clone();
    let other = lib.create_folder("İsimler").unwrap().id.clone();
    let run = lib.add_entry("run", "koşmak", None).unwrap().id.clone();
    let walk = lib.add_entry("walk", "yürümek", None).unwrap().id.clone();
    let house = lib.add_entry("house", "ev", None).unwrap().id.clone();
    assert!(lib.move_entry(&run, Some(folder.as_str())));
    assert!(lib.move_entry(&walk, Some(folder.as_str())));
    assert!(lib.move_entry(&house, Some(other.as_str())));

    assert!(lib.delete_folder(&folder));

    assert_eq!(lib.dictionary().len(), 3);
    assert!(lib.entry(&run).unwrap().folder_id.is_none());
    assert!(lib.entry(&walk).unwrap().folder_id.is_none());
    assert_eq!(lib.entry(&house).unwrap().folder_id.as_deref(), Some(other.as_str()));
    assert!(lib.folder(&folder).is_none());

    // the cascade is persisted too
    let reloaded = Library::load(lib.store().clone(), Settings::default());
    assert!(reloaded.entry(&run).unwrap().folder_id.is_none());
    assert_eq!(reloaded.folders().len(), 1);
}

#[test]
fn test_word_from_vocabulary_selection() {
    let mut lib = library();
    let id = lib
        .add_document(NewDocument::new("Words", "a serendipitous find", DocumentMode::Vocabulary))
        .unwrap()
        .id
        .clone();

    // drag from the last letter back to the first of "serendipitous"
    let selection = IndexedSelection::new(14, 2, "serendipitous");
    let span = selection.map_selection().unwrap();
    let entry = lib.add_entry_from_selection(&id, span, "tesadüfi").unwrap();

    assert_eq!(entry.word, "serendipitous");
    assert_eq!(entry.definition, "tesadüfi");
    assert_eq!(entry.source_document_id.as_deref(), Some(id.as_str()));
}

#[test]
fn test_filters_combine_search_and_folder() {
    let mut lib = library();
    let folder = lib.create_folder("Fruit").unwrap().id.clone();
    let apple = lib.add_entry("Apple", "elma", None).unwrap().id.clone();
    let apricot = lib.add_entry("Apricot", "kayısı", None).unwrap().id.clone();
    lib.add_entry("Anchor", "çapa", None).unwrap();
    lib.move_entry(&apple, Some(folder.as_str()));
    lib.move_entry(&apricot, Some(folder.as_str()));

    let in_folder = EntryFilter {
        search: "ap".into(),
        folder: FolderFilter::Folder(folder.clone()),
    };
    let words: Vec<&str> = lib.filter_entries(&in_folder).iter().map(|e| e.word.as_str()).collect();
    assert_eq!(words, vec!["Apricot", "Apple"]);

    let uncategorized = EntryFilter {
        search: "a".into(),
        folder: FolderFilter::Uncategorized,
    };
    let words: Vec<&str> = lib
        .filter_entries(&uncategorized)
        .iter()
        .map(|e| e.word.as_str())
        .collect();
    assert_eq!(words, vec!["Anchor"]);

    assert_eq!(lib.filter_entries(&EntryFilter::default()).len(), 3);
}

#[test]
fn test_stored_dictionary_wire_format() {
    let entries = r#"[{"id":"w1","word":"kalem","definition":"pen","sourceBookId":"b1","folderId":"gone","createdAt":1}]"#;
    let store = MemoryBlobStore::new().with_blob("murekkep_dictionary", entries);
    let lib = Library::load(store, Settings::default());

    let entry = lib.entry("w1").unwrap();
    assert_eq!(entry.source_document_id.as_deref(), Some("b1"));
    // folder "gone" was never stored
    assert!(entry.folder_id.is_none());
}
