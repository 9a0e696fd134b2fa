use bytes::Bytes;

use crate::models::screening::DocSummary;

/// An uploaded document held in memory for the lifetime of a screening
/// session. Contents are opaque; they pass through to the analysis service
/// unparsed.
#[derive(Debug, Clone)]
pub struct UploadedDoc {
    pub name: String,
    pub content_type: String,
    pub data: Bytes,
}

impl UploadedDoc {
    pub fn summary(&self) -> DocSummary {
        DocSummary {
            name: self.name.clone(),
            size_bytes: self.data.len(),
        }
    }
}

/// The files selected for one screening run: a single job description plus an
/// ordered resume list. Duplicate file names are allowed; entries are
/// distinguished by position, not name.
#[derive(Debug, Clone, Default)]
pub struct UploadBatch {
    job_description: Option<UploadedDoc>,
    resumes: Vec<UploadedDoc>,
}

impl UploadBatch {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces any previously selected job description unconditionally.
    pub fn set_job_description(&mut self, doc: UploadedDoc) {
        self.job_description = Some(doc);
    }

    /// Appends to the resume list, preserving prior entries. No de-duplication.
    pub fn add_resumes(&mut self, docs: impl IntoIterator<Item = UploadedDoc>) {
        self.resumes.extend(docs);
    }

    /// Removes the resume at `index`, shifting later entries down. Returns
    /// `None` when the index is out of range so callers can ignore a removal
    /// that raced with the list shifting under the UI.
    pub fn remove_resume(&mut self, index: usize) -> Option<UploadedDoc> {
        if index < self.resumes.len() {
            Some(self.resumes.remove(index))
        } else {
            None
        }
    }

    pub fn clear(&mut self) {
        self.job_description = None;
        self.resumes.clear();
    }

    /// A submission needs the job description and at least one resume.
    pub fn is_ready(&self) -> bool {
        self.job_description.is_some() && !self.resumes.is_empty()
    }

    pub fn job_description(&self) -> Option<&UploadedDoc> {
        self.job_description.as_ref()
    }

    pub fn resumes(&self) -> &[UploadedDoc] {
        &self.resumes
    }
}
