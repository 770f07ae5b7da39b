//! Pet document library: search, type filter, and the upload form.
//!
//! Uploading only validates the form and logs the request; no file leaves
//! the browser and the list does not change.

#[cfg(test)]
#[path = "documents_test.rs"]
mod documents_test;

use serde::{Deserialize, Serialize};

use super::{ActionError, Reducer, contains_ignore_case, fixtures, required};

/// Categories offered by the upload form. The first is the default.
pub const DOCUMENT_CATEGORIES: [&str; 5] =
    ["Medical Records", "Vaccination Records", "Lab Results", "X-Ray Images", "Other"];

/// File extensions accepted by the upload form's picker.
pub const ACCEPTED_EXTENSIONS: &str = ".pdf,.jpg,.jpeg,.png";

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DocumentKind {
    Image,
    Pdf,
}

impl DocumentKind {
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Image => "image",
            Self::Pdf => "pdf",
        }
    }

    /// Kind implied by a file name's extension.
    #[must_use]
    pub fn from_file_name(name: &str) -> Option<Self> {
        let ext = name.rsplit_once('.')?.1.to_ascii_lowercase();
        match ext.as_str() {
            "pdf" => Some(Self::Pdf),
            "jpg" | "jpeg" | "png" => Some(Self::Image),
            _ => None,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TypeFilter {
    Pdf,
    Image,
    #[default]
    All,
}

impl TypeFilter {
    pub const ALL: [Self; 3] = [Self::Pdf, Self::Image, Self::All];

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Pdf => "PDF Files",
            Self::Image => "Image Files",
            Self::All => "All Files",
        }
    }

    #[must_use]
    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|f| f.label() == label)
    }

    #[must_use]
    pub fn matches(self, kind: DocumentKind) -> bool {
        match self {
            Self::Pdf => kind == DocumentKind::Pdf,
            Self::Image => kind == DocumentKind::Image,
            Self::All => true,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    pub id: String,
    pub name: String,
    pub kind: DocumentKind,
    pub category: String,
    pub owner: String,
    pub size: String,
    /// `YYYY-MM-DD`.
    pub date: String,
}

/// Raw upload form values. `file_name` is set once a file is picked.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct UploadDraft {
    pub pet_name: String,
    pub owner_name: String,
    pub category: String,
    pub file_name: Option<String>,
}

impl Default for UploadDraft {
    fn default() -> Self {
        Self {
            pet_name: String::new(),
            owner_name: String::new(),
            category: DOCUMENT_CATEGORIES[0].to_owned(),
            file_name: None,
        }
    }
}

/// A validated upload, ready to hand to a backend that does not exist yet.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct UploadRequest {
    pub pet_name: String,
    pub owner_name: String,
    pub category: String,
    pub file_name: String,
    pub kind: Option<DocumentKind>,
}

/// Validate the upload form.
///
/// # Errors
///
/// Returns `MissingField` for a blank pet or owner name or when no file is
/// selected.
pub fn validate_upload(draft: &UploadDraft) -> Result<UploadRequest, ActionError> {
    let pet_name = required("pet_name", &draft.pet_name)?;
    let owner_name = required("owner_name", &draft.owner_name)?;
    let file_name = required("file", draft.file_name.as_deref().unwrap_or_default())?;
    Ok(UploadRequest {
        pet_name,
        owner_name,
        category: draft.category.clone(),
        kind: DocumentKind::from_file_name(&file_name),
        file_name,
    })
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentsState {
    pub items: Vec<Document>,
    pub search: String,
    pub type_filter: TypeFilter,
}

impl Default for DocumentsState {
    fn default() -> Self {
        Self { items: fixtures::documents(), search: String::new(), type_filter: TypeFilter::All }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum DocumentsAction {
    SetSearch(String),
    SetTypeFilter(TypeFilter),
}

impl DocumentsState {
    /// Documents passing the type filter whose name or owner matches the search.
    #[must_use]
    pub fn visible(&self) -> Vec<&Document> {
        self.items
            .iter()
            .filter(|d| self.type_filter.matches(d.kind))
            .filter(|d| contains_ignore_case(&d.name, &self.search) || contains_ignore_case(&d.owner, &self.search))
            .collect()
    }

    #[must_use]
    pub fn total(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn image_count(&self) -> usize {
        self.items.iter().filter(|d| d.kind == DocumentKind::Image).count()
    }

    /// Documents dated within `year_month` (`YYYY-MM`).
    #[must_use]
    pub fn uploaded_in(&self, year_month: &str) -> usize {
        self.items.iter().filter(|d| d.date.starts_with(year_month)).count()
    }
}

impl Reducer for DocumentsState {
    type Action = DocumentsAction;
    const NAME: &'static str = "documents";

    fn apply(&mut self, action: DocumentsAction) -> Result<(), ActionError> {
        match action {
            DocumentsAction::SetSearch(text) => self.search = text,
            DocumentsAction::SetTypeFilter(filter) => self.type_filter = filter,
        }
        Ok(())
    }
}
