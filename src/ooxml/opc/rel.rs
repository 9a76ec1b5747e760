//! Relationships from a source part to its targets.
use crate::common::xml::escape_xml;
use crate::ooxml::opc::constants::namespace;
use crate::ooxml::opc::packuri::PackURI;
use std::fmt::Write as _;

/// A single internal relationship.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Relationship {
    /// Relationship ID (e.g., "rId1", "rId2")
    r_id: String,
    /// Relationship type URI
    reltype: &'static str,
    /// Target reference relative to the source part's directory
    target_ref: String,
}

impl Relationship {
    #[inline]
    pub fn r_id(&self) -> &str {
        &self.r_id
    }

    #[inline]
    pub fn reltype(&self) -> &str {
        self.reltype
    }

    #[inline]
    pub fn target_ref(&self) -> &str {
        &self.target_ref
    }
}

/// Ordered relationships of one source part.
///
/// IDs are allocated sequentially as `rId1`, `rId2`, ... in insertion order.
#[derive(Debug, Clone)]
pub struct Relationships {
    /// Base URI for building relative targets
    base_uri: String,
    rels: Vec<Relationship>,
}

impl Relationships {
    pub fn new(base_uri: impl Into<String>) -> Self {
        Self {
            base_uri: base_uri.into(),
            rels: Vec::new(),
        }
    }

    /// Add a relationship to `target`, returning its ID. An existing
    /// relationship of the same type to the same target is reused.
    pub fn get_or_add(&mut self, reltype: &'static str, target: &PackURI) -> String {
        let target_ref = target.relative_ref(&self.base_uri);
        if let Some(rel) = self
            .rels
            .iter()
            .find(|r| r.reltype == reltype && r.target_ref == target_ref)
        {
            return rel.r_id.clone();
        }

        let r_id = format!("rId{}", self.rels.len() + 1);
        self.rels.push(Relationship {
            r_id: r_id.clone(),
            reltype,
            target_ref,
        });
        r_id
    }

    pub fn iter(&self) -> impl Iterator<Item = &Relationship> {
        self.rels.iter()
    }

    pub fn len(&self) -> usize {
        self.rels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rels.is_empty()
    }

    /// Serialize to a `.rels` part.
    pub fn to_xml(&self) -> String {
        let mut xml = String::with_capacity(256 + self.rels.len() * 160);

        xml.push_str(r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#);
        xml.push('\n');
        let _ = write!(xml, r#"<Relationships xmlns="{}">"#, namespace::OPC_RELATIONSHIPS);

        for rel in &self.rels {
            let _ = write!(
                xml,
                r#"<Relationship Id="{}" Type="{}" Target="{}"/>"#,
                escape_xml(&rel.r_id),
                escape_xml(rel.reltype),
                escape_xml(&rel.target_ref)
            );
        }

        xml.push_str("</Relationships>");
        xml
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ooxml::opc::constants::relationship_type as rt;

    #[test]
    fn test_ids_are_sequential_and_reused() {
        let mut rels = Relationships::new("/ppt");
        let slide1 = PackURI::new("/ppt/slides/slide1.xml").unwrap();
        let slide2 = PackURI::new("/ppt/slides/slide2.xml").unwrap();

        assert_eq!(rels.get_or_add(rt::SLIDE, &slide1), "rId1");
        assert_eq!(rels.get_or_add(rt::SLIDE, &slide2), "rId2");
        assert_eq!(rels.get_or_add(rt::SLIDE, &slide1), "rId1");
        assert_eq!(rels.len(), 2);

        let second = rels.iter().nth(1).unwrap();
        assert_eq!(second.r_id(), "rId2");
        assert_eq!(second.reltype(), rt::SLIDE);
        assert_eq!(second.target_ref(), "slides/slide2.xml");
    }

    #[test]
    fn test_to_xml() {
        let mut rels = Relationships::new("/ppt/slides");
        let layout = PackURI::new("/ppt/slideLayouts/slideLayout1.xml").unwrap();
        rels.get_or_add(rt::SLIDE_LAYOUT, &layout);

        let xml = rels.to_xml();
        assert!(xml.starts_with("<?xml"));
        assert!(xml.contains(r#"Id="rId1""#));
        assert!(xml.contains(r#"Target="../slideLayouts/slideLayout1.xml""#));
        assert!(xml.ends_with("</Relationships>"));
    }
}
