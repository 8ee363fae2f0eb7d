use std::io;
use std::num::ParseIntError;

use quick_xml::events::attributes::AttrError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SVGError {
    #[error("IO:{0}")]
    IO(#[from] io::Error),

    #[error("Xml Error:{0}")]
    Xml(#[from] quick_xml::Error),

    #[error("Xml Attribute Error:{0}")]
    XmlAttribute(#[from] AttrError),

    #[error("Invalid Color Component `{component}` in `{color}`")]
    InvalidColorComponent {
        color: String,
        component: String,
        source: ParseIntError,
    },

    #[error("Invalid Color Arity: `{0}` need 3 components")]
    InvalidColorArity(String),

    #[error("Invalid SVG Document: `{0}`")]
    InvalidDocument(String),
}

pub type SVGResult<T> = std::result::Result<T, SVGError>;
