//! Typed wrappers around fetched Alma records.
//!
//! # Design
//! The wrappers carry the extracted [`Content`] as-is. Field-level decoding
//! of MARC or Alma JSON is left to the caller; the type only records which
//! resource the payload came from.

use crate::content::Content;
use crate::resource::ResourceKind;

/// A record type that can be built from extracted response content.
pub trait Record: Sized {
    /// Resource the record is fetched from.
    const KIND: ResourceKind;

    fn from_content(content: Content) -> Self;

    fn content(&self) -> &Content;
}

/// A bibliographic record (`bibs/{mms_id}`).
#[derive(Debug, Clone, PartialEq)]
pub struct Bib {
    content: Content,
}

impl Bib {
    pub fn new(content: Content) -> Self {
        Self { content }
    }

    pub fn content(&self) -> &Content {
        &self.content
    }

    pub fn into_content(self) -> Content {
        self.content
    }
}

impl Record for Bib {
    const KIND: ResourceKind = ResourceKind::Bib;

    fn from_content(content: Content) -> Self {
        Self::new(content)
    }

    fn content(&self) -> &Content {
        &self.content
    }
}

/// A holding record attached to a bib.
#[derive(Debug, Clone, PartialEq)]
pub struct Holding {
    content: Content,
}

impl Holding {
    pub fn new(content: Content) -> Self {
        Self { content }
    }

    pub fn content(&self) -> &Content {
        &self.content
    }

    pub fn into_content(self) -> Content {
        self.content
    }
}

impl Record for Holding {
    const KIND: ResourceKind = ResourceKind::Holding;

    fn from_content(content: Content) -> Self {
        Self::new(content)
    }

    fn content(&self) -> &Content {
        &self.content
    }
}

/// A physical item within a holding.
#[derive(Debug, Clone, PartialEq)]
pub struct Item {
    content: Content,
}

impl Item {
    pub fn new(content: Content) -> Self {
        Self { content }
    }

    pub fn content(&self) -> &Content {
        &self.content
    }

    pub fn into_content(self) -> Content {
        self.content
    }
}

impl Record for Item {
    const KIND: ResourceKind = ResourceKind::Item;

    fn from_content(content: Content) -> Self {
        Self::new(content)
    }

    fn content(&self) -> &Content {
        &self.content
    }
}
