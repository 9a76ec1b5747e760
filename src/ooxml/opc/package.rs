//! In-memory OPC package: parts plus package-level relationships.
use crate::ooxml::opc::error::{OpcError, Result};
use crate::ooxml::opc::packuri::{PACKAGE_URI, PackURI};
use crate::ooxml::opc::part::Part;
use crate::ooxml::opc::rel::Relationships;

/// An OPC package being assembled for writing.
///
/// Parts are written in insertion order.
#[derive(Debug, Clone)]
pub struct OpcPackage {
    parts: Vec<Part>,
    rels: Relationships,
}

impl OpcPackage {
    pub fn new() -> Self {
        Self {
            parts: Vec::new(),
            rels: Relationships::new(PACKAGE_URI),
        }
    }

    /// Add a part. Part names must be unique within the package.
    pub fn add_part(&mut self, part: Part) -> Result<()> {
        if self.parts.iter().any(|p| p.partname() == part.partname()) {
            return Err(OpcError::DuplicatePart(part.partname().to_string()));
        }
        self.parts.push(part);
        Ok(())
    }

    /// Relate the package itself to `target` (written to `/_rels/.rels`).
    pub fn relate_to(&mut self, reltype: &'static str, target: &PackURI) -> String {
        self.rels.get_or_add(reltype, target)
    }

    pub fn rels(&self) -> &Relationships {
        &self.rels
    }

    pub fn iter_parts(&self) -> impl Iterator<Item = &Part> {
        self.parts.iter()
    }

    pub fn part(&self, partname: &str) -> Option<&Part> {
        self.parts.iter().find(|p| p.partname().as_str() == partname)
    }
}

impl Default for OpcPackage {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ooxml::opc::constants::content_type as ct;

    #[test]
    fn test_duplicate_part_rejected() {
        let mut pkg = OpcPackage::new();
        let uri = PackURI::new("/ppt/presentation.xml").unwrap();
        pkg.add_part(Part::new(uri.clone(), ct::PML_PRESENTATION_MAIN, "<a/>")).unwrap();
        let err = pkg
            .add_part(Part::new(uri, ct::PML_PRESENTATION_MAIN, "<b/>"))
            .unwrap_err();
        assert!(matches!(err, OpcError::DuplicatePart(_)));
        assert_eq!(pkg.iter_parts().count(), 1);
        assert!(pkg.part("/ppt/presentation.xml").is_some());
    }
}
