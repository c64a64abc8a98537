//! Dictionary entry and folder operations on the library

use super::{BlobStore, Library};
use crate::models::{DictionaryEntry, DictionaryFolder, EntryFilter};
use crate::text::TextSpan;

impl<S: BlobStore> Library<S> {
    /// All entries, newest first
    pub fn dictionary(&self) -> &[DictionaryEntry] {
        &self.dictionary
    }

    pub fn entry(&self, id: &str) -> Option<&DictionaryEntry> {
        self.dictionary.iter().find(|e| e.id == id)
    }

    /// Entries matching a search/folder filter, in library order
    pub fn filter_entries(&self, filter: &EntryFilter) -> Vec<&DictionaryEntry> {
        self.dictionary.iter().filter(|e| filter.matches(e)).collect()
    }

    /// Record a word at the front of the dictionary; a blank word is refused
    pub fn add_entry(
        &mut self,
        word: &str,
        definition: &str,
        source_document_id: Option<String>,
    ) -> Option<&DictionaryEntry> {
        let word = word.trim();
        if word.is_empty() {
            log::debug!("add_entry: refused blank word");
            return None;
        }

        let entry = DictionaryEntry::new(word, definition.trim(), source_document_id);
        log::info!("add_entry: {} '{}'", entry.id, entry.word);

        self.dictionary.insert(0, entry);
        self.persist_dictionary();
        self.dictionary.first()
    }

    /// Record the selected text of a vocabulary-mode document
    pub fn add_entry_from_selection(
        &mut self,
        document_id: &str,
        span: TextSpan,
        definition: &str,
    ) -> Option<&DictionaryEntry> {
        let doc = self.document(document_id)?;
        if span.is_empty() {
            log::debug!("add_entry_from_selection: empty span on {}", document_id);
            return None;
        }
        if !doc.mode.allows_vocabulary() {
            log::warn!("add_entry_from_selection: document {} is not in vocabulary mode", document_id);
            return None;
        }

        let word = doc.slice_chars(span.start, span.end);
        let source = Some(doc.id.clone());
        self.add_entry(&word, definition, source)
    }

    /// Replace an entry by id
    ///
    /// A blank word is refused; a folder id that names no folder is dropped.
    pub fn update_entry(&mut self, mut updated: DictionaryEntry) -> bool {
        if updated.word.trim().is_empty() {
            log::debug!("update_entry: refused blank word for {}", updated.id);
            return false;
        }
        if let Some(folder_id) = &updated.folder_id {
            if self.folder(folder_id).is_none() {
                log::warn!("update_entry: folder {} does not exist, uncategorizing {}", folder_id, updated.id);
                updated.folder_id = None;
            }
        }

        let Some(entry) = self.dictionary.iter_mut().find(|e| e.id == updated.id) else {
            return false;
        };
        *entry = updated;

        self.persist_dictionary();
        true
    }

    /// Put an entry in a folder, or back to uncategorized with `None`
    ///
    /// Moving into a folder that does not exist is refused.
    pub fn move_entry(&mut self, id: &str, folder_id: Option<&str>) -> bool {
        if let Some(folder_id) = folder_id {
            if self.folder(folder_id).is_none() {
                log::warn!("move_entry: folder {} does not exist", folder_id);
                return false;
            }
        }

        let Some(entry) = self.dictionary.iter_mut().find(|e| e.id == id) else {
            return false;
        };
        entry.folder_id = folder_id.map(str::to_string);

        self.persist_dictionary();
        true
    }

    pub fn remove_entry(&mut self, id: &str) -> bool {
        let before = self.dictionary.len();
        self.dictionary.retain(|e| e.id != id);
        if self.dictionary.len() == before {
            return false;
        }

        self.persist_dictionary();
        true
    }

    // ------------------------------------------------------------------
    // Folders
    // ------------------------------------------------------------------

    /// All folders in creation order
    pub fn folders(&self) -> &[DictionaryFolder] {
        &self.folders
    }

    pub fn folder(&self, id: &str) -> Option<&DictionaryFolder> {
        self.folders.iter().find(|f| f.id == id)
    }

    /// Append a folder; a blank name is refused
    pub fn create_folder(&mut self, name: &str) -> Option<&DictionaryFolder> {
        let name = name.trim();
        if name.is_empty() {
            log::debug!("create_folder: refused blank name");
            return None;
        }

        let folder = DictionaryFolder::new(name);
        log::info!("create_folder: {} '{}'", folder.id, folder.name);

        self.folders.push(folder);
        self.persist_folders();
        self.folders.last()
    }

    pub fn rename_folder(&mut self, id: &str, name: &str) -> bool {
        let name = name.trim();
        if name.is_empty() {
            log::debug!("rename_folder: refused blank name for {}", id);
            return false;
        }

        let Some(folder) = self.folders.iter_mut().find(|f| f.id == id) else {
            return false;
        };
        folder.name = name.to_string();

        self.persist_folders();
        true
    }

    /// Delete a folder; its entries become uncategorized, none are deleted
    pub fn delete_folder(&mut self, id: &str) -> bool {
        let before = self.folders.len();
        self.folders.retain(|f| f.id != id);
        if self.folders.len() == before {
            return false;
        }

        let mut released = 0;
        for entry in &mut self.dictionary {
            if entry.folder_id.as_deref() == Some(id) {
                entry.folder_id = None;
                released += 1;
            }
        }
        log::info!("delete_folder: {} removed, {} entries uncategorized", id, released);

        self.persist_folders();
        if released > 0 {
            self.persist_dictionary();
        }
        true
    }
}
