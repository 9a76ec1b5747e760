/// Open Packaging Conventions (OPC) writing.
///
/// Parts are assembled in memory as an [`OpcPackage`] and serialized to a
/// ZIP archive by [`PackageWriter`], which derives `[Content_Types].xml` from
/// the parts' content types.

pub mod constants;
pub mod error;
pub mod package;
pub mod packuri;
pub mod part;
pub mod phys_pkg;
pub mod pkgwriter;
pub mod rel;

pub use package::OpcPackage;
pub use packuri::PackURI;
pub use part::Part;
pub use pkgwriter::PackageWriter;
pub use rel::{Relationship, Relationships};
