//! The notebook store: an ordered collection of notes persisted as a single
//! JSON document.
//!
//! Ids are positional. A note's id is its 1-based index in `notes`, and the
//! whole file is rewritten after every mutation. Renumbering runs inside
//! [`Notebook::save`], so a deletion closes the gap before anything hits the
//! disk.
//!
//! There is no locking: two processes working on the same file race on the
//! read-modify-write cycle and the last writer wins.

use crate::error::{NotebookError, Result};
use crate::formatting::{FormatContext, ViewMode};
use crate::note::{self, Note, normalize_title};
use chrono::NaiveDateTime;
use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

pub const DEFAULT_NOTEBOOK_TITLE: &str = "notes";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Notebook {
    pub title: String,
    pub path: PathBuf,
    pub notes: Vec<Note>,
    #[serde(with = "note::stamp::option")]
    pub last_updated: Option<NaiveDateTime>,
}

/// Result of [`Notebook::list_notes`]. An empty notebook is reported as its
/// own state instead of as an iterator that yields nothing.
pub enum Listing<'a> {
    Empty,
    Notes(ListLines<'a>),
}

/// Lazily renders list-view lines in collection order.
pub struct ListLines<'a> {
    notes: std::slice::Iter<'a, Note>,
    ctx: FormatContext,
}

impl Iterator for ListLines<'_> {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        self.notes.next().map(|n| self.ctx.render_list_line(n))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.notes.size_hint()
    }
}

impl ExactSizeIterator for ListLines<'_> {}

impl Notebook {
    /// A fresh, empty notebook that will be written to `path` on its first
    /// mutation.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            title: DEFAULT_NOTEBOOK_TITLE.to_string(),
            path: path.into(),
            notes: Vec::new(),
            last_updated: None,
        }
    }

    /// Read the notebook stored at `path`. A missing file is not an error.
    pub fn load(path: &Path) -> Result<Option<Self>> {
        let raw = match fs::read(path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                debug!("no notebook at {}", path.display());
                return Ok(None);
            }
            Err(source) => {
                return Err(NotebookError::StorageRead {
                    path: path.to_path_buf(),
                    source,
                });
            }
        };

        let mut notebook: Notebook =
            serde_json::from_slice(&raw).map_err(|source| {
                NotebookError::CorruptStore { path: path.to_path_buf(), source }
            })?;

        // The file is authoritative for its own location.
        if notebook.path != path {
            debug!(
                "notebook recorded path {} differs from {}; using the latter",
                notebook.path.display(),
                path.display()
            );
            notebook.path = path.to_path_buf();
        }
        info!(
            "loaded notebook '{}' with {} notes from {}",
            notebook.title,
            notebook.notes.len(),
            path.display()
        );
        Ok(Some(notebook))
    }

    /// Load the notebook at `path`, or start an empty one there.
    pub fn open(path: &Path) -> Result<Self> {
        Ok(Self::load(path)?.unwrap_or_else(|| Self::new(path)))
    }

    /// Renumber and write the whole notebook to `self.path`.
    pub fn save(&mut self) -> Result<()> {
        self.renumber();
        let data = serde_json::to_string_pretty(self)?;
        debug!("data to be written: {data}");

        let write = |path: &Path| -> io::Result<()> {
            if let Some(parent) = path.parent() {
                if !parent.as_os_str().is_empty() && !parent.exists() {
                    fs::create_dir_all(parent)?;
                }
            }
            fs::write(path, data.as_bytes())
        };
        write(&self.path).map_err(|source| NotebookError::StorageWrite {
            path: self.path.clone(),
            source,
        })?;
        info!("updated {}", self.path.display());
        Ok(())
    }

    /// Give every note the id matching its position. Idempotent.
    fn renumber(&mut self) {
        for (idx, note) in self.notes.iter_mut().enumerate() {
            let expected = idx + 1;
            if note.id != expected {
                debug!("renumbering note {} -> {}", note.id, expected);
                note.id = expected;
            }
        }
    }

    pub fn len(&self) -> usize {
        self.notes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.notes.is_empty()
    }

    fn index_of(&self, id: usize) -> Result<usize> {
        if id == 0 || id > self.notes.len() {
            warn!("a note with id ({id}) was not found");
            let shown = i64::try_from(id).unwrap_or(i64::MAX);
            return Err(NotebookError::NotFound(shown));
        }
        Ok(id - 1)
    }

    pub fn create_note(
        &mut self,
        content: &str,
        title: Option<&str>,
    ) -> Result<&Note> {
        let created = note::now();
        let note = Note::new(self.notes.len() + 1, content, title, created);
        info!("creating note ({}) '{}'", note.id, note.title);
        self.notes.push(note);
        self.last_updated = Some(created);
        self.save()?;
        Ok(&self.notes[self.notes.len() - 1])
    }

    /// Look up a note by its 1-based position.
    pub fn get_note(&self, id: usize) -> Result<&Note> {
        let idx = self.index_of(id)?;
        debug!("getting note with id {id}");
        Ok(&self.notes[idx])
    }

    pub fn edit_note(
        &mut self,
        id: usize,
        title: &str,
        content: &str,
    ) -> Result<&Note> {
        let idx = self.index_of(id)?;
        let edited = note::now();
        {
            let note = &mut self.notes[idx];
            note.title = normalize_title(Some(title));
            note.content = content.to_string();
            note.edited = Some(edited);
            info!("edited note ({id}) '{}'", note.title);
        }
        self.last_updated = Some(edited);
        self.save()?;
        Ok(&self.notes[idx])
    }

    /// Remove a note. Later notes shift down by one position.
    pub fn delete_note(&mut self, id: usize) -> Result<Note> {
        let idx = self.index_of(id)?;
        info!("removing note ({id})");
        let removed = self.notes.remove(idx);
        self.last_updated = Some(note::now());
        self.save()?;
        Ok(removed)
    }

    pub fn format_note(&self, id: usize, mode: ViewMode) -> Result<String> {
        self.format_note_with(id, mode, &FormatContext::plain())
    }

    pub fn format_note_with(
        &self,
        id: usize,
        mode: ViewMode,
        ctx: &FormatContext,
    ) -> Result<String> {
        Ok(ctx.render(self.get_note(id)?, mode))
    }

    pub fn list_notes(&self) -> Listing<'_> {
        self.list_notes_with(FormatContext::plain())
    }

    pub fn list_notes_with(&self, ctx: FormatContext) -> Listing<'_> {
        if self.notes.is_empty() {
            Listing::Empty
        } else {
            Listing::Notes(ListLines { notes: self.notes.iter(), ctx })
        }
    }
}
