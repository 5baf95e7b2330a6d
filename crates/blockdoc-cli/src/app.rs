use crate::text_render::{TextLayout, layout_document};
use crate::viewport::{HEADER_CLEARANCE_LINES, TerminalObserver, TerminalScroller};
use anyhow::Result;
use blockdoc_engine::{
    ActiveSectionTracker, AnchorId, Document, DocumentFile, Outline, io, render_document,
};
use ratatui::widgets::ListState;
use std::path::PathBuf;
use std::sync::Arc;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Documents,
    Outline,
}

pub struct App {
    documents_path: PathBuf,
    pub documents: Vec<DocumentFile>,
    pub document_list_state: ListState,
    pub outline_list_state: ListState,
    pub focus: Focus,
    pub layout: TextLayout,
    pub scroll: usize,
    pub viewport_height: usize,
    pub status: Option<String>,
    tracker: ActiveSectionTracker<TerminalObserver, TerminalScroller>,
}

impl App {
    pub fn new(documents_path: PathBuf) -> Result<Self> {
        let documents = io::list_documents(&documents_path)?;

        let mut app = Self {
            documents_path,
            documents,
            document_list_state: ListState::default(),
            outline_list_state: ListState::default(),
            focus: Focus::Documents,
            layout: TextLayout::default(),
            scroll: 0,
            viewport_height: 0,
            status: None,
            tracker: ActiveSectionTracker::new(
                TerminalObserver::default(),
                TerminalScroller::default(),
            )
            .with_header_offset(HEADER_CLEARANCE_LINES),
        };

        if !app.documents.is_empty() {
            app.document_list_state.select(Some(0));
            app.open_selected_document();
        }

        Ok(app)
    }

    pub fn outline(&self) -> &Outline {
        self.tracker.outline()
    }

    pub fn active_anchor(&self) -> Option<AnchorId> {
        self.tracker.active_anchor()
    }

    pub fn toggle_focus(&mut self) {
        self.focus = match self.focus {
            Focus::Documents if !self.outline().is_empty() => Focus::Outline,
            _ => Focus::Documents,
        };
    }

    pub fn next(&mut self) {
        match self.focus {
            Focus::Documents => {
                let selected = self.document_list_state.selected();
                if let Some(index) = step(selected, self.documents.len(), 1) {
                    self.document_list_state.select(Some(index));
                    self.open_selected_document();
                }
            }
            Focus::Outline => {
                let len = self.outline().len();
                self.outline_list_state
                    .select(step(self.outline_list_state.selected(), len, 1));
            }
        }
    }

    pub fn previous(&mut self) {
        match self.focus {
            Focus::Documents => {
                let selected = self.document_list_state.selected();
                if let Some(index) = step(selected, self.documents.len(), -1) {
                    self.document_list_state.select(Some(index));
                    self.open_selected_document();
                }
            }
            Focus::Outline => {
                let len = self.outline().len();
                self.outline_list_state
                    .select(step(self.outline_list_state.selected(), len, -1));
            }
        }
    }

    /// Jump the content pane to the outline entry under the cursor.
    pub fn activate_outline_entry(&mut self) {
        let Some(anchor) = self
            .outline_list_state
            .selected()
            .and_then(|index| self.outline().entries().get(index))
            .map(|entry| entry.anchor_id.clone())
        else {
            return;
        };

        self.tracker.scroll_to_heading(&anchor);
        if let Some(target) = self.tracker.scroll_host_mut().take_target() {
            self.scroll_to(target);
        }
    }

    pub fn scroll_by(&mut self, delta: isize) {
        let target = self.scroll.saturating_add_signed(delta);
        self.scroll_to(target);
    }

    pub fn scroll_to(&mut self, line: usize) {
        let max = self.layout.len().saturating_sub(1);
        self.scroll = line.min(max);
        self.sync_viewport();
    }

    /// Called on every draw with the content pane's inner height.
    pub fn set_viewport_height(&mut self, height: usize) {
        if self.viewport_height != height {
            self.viewport_height = height;
            self.sync_viewport();
        }
    }

    fn sync_viewport(&mut self) {
        let window = self.scroll..self.scroll + self.viewport_height;
        self.tracker.observer_mut().update_viewport(window);
    }

    fn open_selected_document(&mut self) {
        let Some(file) = self
            .document_list_state
            .selected()
            .and_then(|index| self.documents.get(index))
            .cloned()
        else {
            return;
        };

        match io::read_document(file.relative_path(), &self.documents_path) {
            Ok(document) => {
                self.show_document(Arc::new(document));
                self.status = None;
            }
            Err(e) => {
                self.show_document(Arc::new(Document::Blocks(Vec::new())));
                self.status = Some(format!("Error opening {}: {e}", file.display_path()));
            }
        }
    }

    fn show_document(&mut self, document: Arc<Document>) {
        self.layout = layout_document(&render_document(&document));
        self.tracker
            .observer_mut()
            .set_anchor_lines(self.layout.anchors.clone());
        self.tracker
            .scroll_host_mut()
            .set_anchor_lines(self.layout.anchors.clone());
        self.tracker.set_document(&document);

        self.outline_list_state
            .select(if self.outline().is_empty() { None } else { Some(0) });
        if self.outline().is_empty() {
            self.focus = Focus::Documents;
        }
        self.scroll = 0;
        self.sync_viewport();
    }
}

/// Move a list cursor by `delta`, wrapping at both ends.
fn step(selected: Option<usize>, len: usize, delta: isize) -> Option<usize> {
    if len == 0 {
        return None;
    }
    let current = selected.unwrap_or(0) as isize;
    Some((current + delta).rem_euclid(len as isize) as usize)
}
