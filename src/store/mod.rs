//! Document and dictionary store
//!
//! `Library` is the only owner of the collections. Every mutation writes the
//! whole affected collection back through the `BlobStore`; storage failures
//! are logged and never reach the caller. Refused input (blank titles,
//! unknown ids, empty ranges) leaves everything untouched and is reported as
//! `None` or `false`.

pub mod dictionary;
pub mod persistence;

pub use persistence::{BlobStore, LocalStorageBlobStore, MemoryBlobStore, PersistenceError};

use crate::config::Settings;
use crate::models::{Document, DictionaryEntry, DictionaryFolder, Highlight, HighlightColor, NewDocument};
use crate::text::{
    apply_highlight, clip_and_flatten, is_normalized_within, normalize_content, KeyInput, PageView, Pagination,
    TypingCursor,
};
use persistence::{load_collection, save_collection};

pub struct Library<S: BlobStore> {
    settings: Settings,
    pagination: Pagination,
    store: S,
    documents: Vec<Document>,
    dictionary: Vec<DictionaryEntry>,
    folders: Vec<DictionaryFolder>,
    active_document: Option<String>,
}

impl<S: BlobStore> Library<S> {
    /// Load all three collections from `store`
    pub fn load(store: S, settings: Settings) -> Self {
        let settings = settings.validated();
        let documents: Vec<Document> = load_collection(&store, &settings.documents_key);
        let dictionary = load_collection(&store, &settings.dictionary_key);
        let folders = load_collection(&store, &settings.folders_key);

        let mut library = Self {
            pagination: Pagination::new(settings.page_size),
            settings,
            store,
            documents,
            dictionary,
            folders,
            active_document: None,
        };
        library.repair_after_load();

        log::info!(
            "library loaded: {} documents, {} dictionary entries, {} folders",
            library.documents.len(),
            library.dictionary.len(),
            library.folders.len()
        );
        library
    }

    /// Bring loaded data back within the model invariants without writing it
    fn repair_after_load(&mut self) {
        for doc in &mut self.documents {
            let len = doc.char_len();
            if doc.cursor > len {
                log::warn!("document {}: stored cursor {} past end {}, clamping", doc.id, doc.cursor, len);
                doc.cursor = len;
            }
            if !is_normalized_within(&doc.highlights, len) {
                log::warn!("document {}: stored highlights not normalized, rebuilding", doc.id);
                doc.highlights = clip_and_flatten(&doc.highlights, len);
            }
        }

        let folders = &self.folders;
        for entry in &mut self.dictionary {
            let dangling = entry
                .folder_id
                .as_ref()
                .is_some_and(|id| !folders.iter().any(|f| &f.id == id));
            if dangling {
                log::warn!("dictionary entry {}: folder no longer exists, uncategorizing", entry.id);
                entry.folder_id = None;
            }
        }
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn pagination(&self) -> Pagination {
        self.pagination
    }

    /// The persistence backend
    pub fn store(&self) -> &S {
        &self.store
    }

    // ------------------------------------------------------------------
    // Documents
    // ------------------------------------------------------------------

    /// All documents, newest first
    pub fn documents(&self) -> &[Document] {
        &self.documents
    }

    pub fn document(&self, id: &str) -> Option<&Document> {
        self.documents.iter().find(|d| d.id == id)
    }

    /// Create a document at the front of the library
    ///
    /// Blank title or content is refused.
    pub fn add_document(&mut self, new_document: NewDocument) -> Option<&Document> {
        if !new_document.is_valid() {
            log::debug!("add_document: refused blank title or content");
            return None;
        }

        let Some(content) = normalize_content(
            &new_document.content,
            self.settings.collapse_whitespace,
            new_document.repeat_count,
            self.settings.max_content_chars,
        ) else {
            log::debug!("add_document: refused content over {} chars", self.settings.max_content_chars);
            return None;
        };
        let document = Document::new(new_document.title, content, new_document.mode);
        log::info!(
            "add_document: {} '{}' ({} chars, {})",
            document.id,
            document.title,
            document.char_len(),
            document.mode.name()
        );

        self.documents.insert(0, document);
        self.persist_documents();
        self.documents.first()
    }

    /// Delete a document; closes it first if it is the active one
    pub fn remove_document(&mut self, id: &str) -> bool {
        let before = self.documents.len();
        self.documents.retain(|d| d.id != id);
        if self.documents.len() == before {
            return false;
        }

        if self.active_document.as_deref() == Some(id) {
            log::debug!("remove_document: {} was active, deactivating", id);
            self.active_document = None;
        }
        self.persist_documents();
        true
    }

    pub fn select_document(&mut self, id: &str) -> Option<&Document> {
        let index = self.documents.iter().position(|d| d.id == id)?;
        self.active_document = Some(id.to_string());
        self.documents.get(index)
    }

    pub fn active_document(&self) -> Option<&Document> {
        self.active_document.as_deref().and_then(|id| self.document(id))
    }

    pub fn active_document_id(&self) -> Option<&str> {
        self.active_document.as_deref()
    }

    pub fn deactivate(&mut self) {
        self.active_document = None;
    }

    /// Store a new typing position, clamped to the content length
    pub fn update_cursor(&mut self, id: &str, cursor: usize) -> Option<usize> {
        let doc = self.documents.iter_mut().find(|d| d.id == id)?;
        let cursor = cursor.min(doc.char_len());
        doc.cursor = cursor;
        log::debug!("update_cursor: {} -> {}", id, cursor);

        self.persist_documents();
        Some(cursor)
    }

    /// Replace a document's highlights wholesale
    ///
    /// Callers are expected to have produced `highlights` with
    /// [`apply_highlight`].
    pub fn update_highlights(&mut self, id: &str, highlights: Vec<Highlight>) -> bool {
        let Some(doc) = self.documents.iter_mut().find(|d| d.id == id) else {
            return false;
        };
        doc.highlights = highlights;

        self.persist_documents();
        true
    }

    /// Paint (`Some`) or erase (`None`) `[start, end)` in a study-mode document
    ///
    /// `end` is clamped to the content length; an empty range after clamping
    /// is refused.
    pub fn apply_highlight(
        &mut self,
        id: &str,
        start: usize,
        end: usize,
        color: Option<HighlightColor>,
    ) -> Option<&[Highlight]> {
        let doc = self.document(id)?;
        if !doc.mode.allows_highlights() {
            log::warn!("apply_highlight: document {} is not in study mode", id);
            return None;
        }

        let end = end.min(doc.char_len());
        if start >= end {
            log::debug!("apply_highlight: refused empty range {}..{}", start, end);
            return None;
        }

        let highlights = apply_highlight(&doc.highlights, start, end, color);
        self.update_highlights(id, highlights);
        self.document(id).map(|d| d.highlights.as_slice())
    }

    /// Feed one keystroke to the document's typing cursor
    ///
    /// Returns the new cursor when it moved; mismatches return `None`.
    pub fn type_key(&mut self, id: &str, input: KeyInput) -> Option<usize> {
        let doc = self.document(id)?;
        let mut cursor = TypingCursor::for_document(doc);
        let moved = cursor.handle_input(&doc.content, input)?;
        self.update_cursor(id, moved)
    }

    /// Jump to a one-based page; the page is clamped to the valid range
    pub fn jump_to_page(&mut self, id: &str, page: usize) -> Option<usize> {
        let doc = self.document(id)?;
        let len = doc.char_len();
        let mut cursor = TypingCursor::new(doc.cursor, len);
        let target = cursor.jump(self.pagination.jump_target(page, len));
        self.update_cursor(id, target)
    }

    pub fn page_view(&self, id: &str) -> Option<PageView> {
        self.document(id).map(|doc| self.pagination.view(doc))
    }

    // ------------------------------------------------------------------
    // Persistence
    // ------------------------------------------------------------------

    fn persist_documents(&mut self) {
        save_collection(&mut self.store, &self.settings.documents_key, &self.documents);
    }

    fn persist_dictionary(&mut self) {
        save_collection(&mut self.store, &self.settings.dictionary_key, &self.dictionary);
    }

    fn persist_folders(&mut self) {
        save_collection(&mut self.store, &self.settings.folders_key, &self.folders);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::DocumentMode;

    fn library() -> Library<MemoryBlobStore> {
        Library::load(MemoryBlobStore::new(), Settings::default())
    }

    fn add(library: &mut Library<MemoryBlobStore>, title: &str, content: &str, mode: DocumentMode) -> String {
        library
            .add_document(NewDocument::new(title, content, mode))
            .map(|d| d.id.clone())
            .unwrap()
    }

    #[test]
    fn test_add_prepends_and_persists() {
        let mut lib = library();
        let first = add(&mut lib, "One", "bir", DocumentMode::Plain);
        let second = add(&mut lib, "Two", "iki", DocumentMode::Plain);

        let ids: Vec<_> = lib.documents().iter().map(|d| d.id.clone()).collect();
        assert_eq!(ids, vec![second, first]);

        let saved = lib.store().get("murekkep_books").unwrap();
        let stored: Vec<Document> = serde_json::from_str(saved).unwrap();
        assert_eq!(stored.len(), 2);
    }

    #[test]
    fn test_add_refuses_blank_input() {
        let mut lib = library();
        assert!(lib.add_document(NewDocument::new(" ", "text", DocumentMode::Plain)).is_none());
        assert!(lib.add_document(NewDocument::new("Title", "\n ", DocumentMode::Plain)).is_none());
        assert!(lib.documents().is_empty());
        assert!(lib.store().get("murekkep_books").is_none());
    }

    #[test]
    fn test_add_normalizes_content() {
        let mut lib = library();
        let doc = lib
            .add_document(NewDocument::new("T", " a\n b ", DocumentMode::Plain).with_repeat_count(2))
            .unwrap();
        assert_eq!(doc.content, "a b a b");
        assert_eq!(doc.cursor, 0);
    }

    #[test]
    fn test_add_refuses_oversized_repeat() {
        let settings = Settings {
            max_content_chars: 10,
            ..Settings::default()
        };
        let mut lib = Library::load(MemoryBlobStore::new(), settings);

        let huge = NewDocument::new("T", "ab", DocumentMode::Plain).with_repeat_count(usize::MAX / 2);
        assert!(lib.add_document(huge).is_none());
        let too_long = NewDocument::new("T", "ab", DocumentMode::Plain).with_repeat_count(4);
        assert!(lib.add_document(too_long).is_none());
        assert!(lib.documents().is_empty());
        assert!(lib.store().get("murekkep_books").is_none());

        let fits = NewDocument::new("T", "ab", DocumentMode::Plain).with_repeat_count(3);
        assert_eq!(lib.add_document(fits).unwrap().content, "ab ab ab");
    }

    #[test]
    fn test_remove_active_document_deactivates() {
        let mut lib = library();
        let id = add(&mut lib, "T", "abc", DocumentMode::Plain);
        let other = add(&mut lib, "U", "def", DocumentMode::Plain);

        lib.select_document(&id).unwrap();
        assert!(lib.remove_document(&other));
        assert_eq!(lib.active_document_id(), Some(id.as_str()));

        assert!(lib.remove_document(&id));
        assert!(lib.active_document().is_none());
        assert!(!lib.remove_document(&id));
    }

    #[test]
    fn test_update_cursor_clamps() {
        let mut lib = library();
        let id = add(&mut lib, "T", "abc", DocumentMode::Plain);
        assert_eq!(lib.update_cursor(&id, 2), Some(2));
        assert_eq!(lib.update_cursor(&id, 50), Some(3));
        assert_eq!(lib.update_cursor("missing", 1), None);
    }

    #[test]
    fn test_type_key_persists_every_move() {
        let mut lib = library();
        let id = add(&mut lib, "T", "abc", DocumentMode::Plain);

        assert_eq!(lib.type_key(&id, KeyInput::Char('a')), Some(1));
        let saved: Vec<Document> = serde_json::from_str(lib.store().get("murekkep_books").unwrap()).unwrap();
        assert_eq!(saved[0].cursor, 1);

        assert_eq!(lib.type_key(&id, KeyInput::Char('x')), None);
        assert_eq!(lib.document(&id).unwrap().cursor, 1);
    }

    #[test]
    fn test_apply_highlight_requires_study_mode() {
        let mut lib = library();
        let plain = add(&mut lib, "P", "abcdef", DocumentMode::Plain);
        let study = add(&mut lib, "S", "abcdef", DocumentMode::Study);

        assert!(lib.apply_highlight(&plain, 0, 3, Some(HighlightColor::Red)).is_none());

        let highlights = lib.apply_highlight(&study, 2, 99, Some(HighlightColor::Red)).unwrap();
        assert_eq!(highlights, &[Highlight::new(2, 6, HighlightColor::Red)]);

        assert!(lib.apply_highlight(&study, 6, 99, None).is_none());
    }

    #[test]
    fn test_load_repairs_bad_stored_state() {
        let books = r#"[{
            "id": "b1", "title": "T", "content": "abcdef", "progressIndex": 40,
            "createdAt": 1, "mode": "study",
            "highlights": [
                {"start": 3, "end": 6, "color": "blue"},
                {"start": 0, "end": 4, "color": "red"}
            ]
        }]"#;
        let store = MemoryBlobStore::new().with_blob("murekkep_books", books);
        let lib = Library::load(store, Settings::default());

        let doc = lib.document("b1").unwrap();
        assert_eq!(doc.cursor, 6);
        assert!(crate::text::is_normalized(&doc.highlights));
        assert_eq!(
            doc.highlights,
            vec![
                Highlight::new(0, 4, HighlightColor::Red),
                Highlight::new(4, 6, HighlightColor::Blue),
            ]
        );
    }

    #[test]
    fn test_load_clips_highlights_past_the_end() {
        let books = r#"[{
            "id": "b1", "title": "T", "content": "abc", "createdAt": 1, "mode": "study",
            "highlights": [
                {"start": 1, "end": 50, "color": "red"},
                {"start": 60, "end": 70, "color": "blue"}
            ]
        }]"#;
        let store = MemoryBlobStore::new().with_blob("murekkep_books", books);
        let lib = Library::load(store, Settings::default());

        let doc = lib.document("b1").unwrap();
        assert_eq!(doc.highlights, vec![Highlight::new(1, 3, HighlightColor::Red)]);
    }
}
