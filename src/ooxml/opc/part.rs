//! A serialized part awaiting packaging.
use crate::ooxml::opc::packuri::PackURI;
use crate::ooxml::opc::rel::Relationships;

/// Part name, content type, bytes and outgoing relationships.
#[derive(Debug, Clone)]
pub struct Part {
    partname: PackURI,
    content_type: &'static str,
    blob: Vec<u8>,
    rels: Relationships,
}

impl Part {
    /// A part with no relationships yet.
    pub fn new(partname: PackURI, content_type: &'static str, blob: impl Into<Vec<u8>>) -> Self {
        let rels = Relationships::new(partname.base_uri());
        Self {
            partname,
            content_type,
            blob: blob.into(),
            rels,
        }
    }

    #[inline]
    pub fn partname(&self) -> &PackURI {
        &self.partname
    }

    #[inline]
    pub fn content_type(&self) -> &'static str {
        self.content_type
    }

    #[inline]
    pub fn blob(&self) -> &[u8] {
        &self.blob
    }

    /// Replace the part's bytes, typically once its relationship IDs are
    /// known.
    pub fn set_blob(&mut self, blob: impl Into<Vec<u8>>) {
        self.blob = blob.into();
    }

    pub fn rels(&self) -> &Relationships {
        &self.rels
    }

    /// Relate this part to `target`, returning the relationship ID.
    pub fn relate_to(&mut self, reltype: &'static str, target: &PackURI) -> String {
        self.rels.get_or_add(reltype, target)
    }
}
