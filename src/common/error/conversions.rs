//! Error conversion implementations.
//!
//! This module contains From trait implementations to convert from internal
//! error types to the unified Error type.

#[cfg(feature = "pptx")]
use super::types::Error;

#[cfg(feature = "pptx")]
impl From<crate::ooxml::error::OoxmlError> for Error {
    fn from(err: crate::ooxml::error::OoxmlError) -> Self {
        match err {
            crate::ooxml::error::OoxmlError::Io(e) => Error::Io(e),
            other => Error::Package(other),
        }
    }
}

#[cfg(feature = "pptx")]
impl From<crate::ooxml::opc::error::OpcError> for Error {
    fn from(err: crate::ooxml::opc::error::OpcError) -> Self {
        Error::from(crate::ooxml::error::OoxmlError::from(err))
    }
}

#[cfg(all(test, feature = "pptx"))]
mod tests {
    use super::*;
    use crate::common::ErrorKind;
    use crate::ooxml::error::OoxmlError;

    #[test]
    fn test_io_is_unwrapped() {
        let err: Error = OoxmlError::Io(std::io::Error::other("denied")).into();
        assert!(matches!(err, Error::Io(_)));
        assert_eq!(err.kind(), ErrorKind::Io);
    }

    #[test]
    fn test_xml_stays_package() {
        let err: Error = OoxmlError::Xml("bad".to_string()).into();
        assert!(matches!(err, Error::Package(_)));
        assert_eq!(err.kind(), ErrorKind::Configuration);
    }
}
