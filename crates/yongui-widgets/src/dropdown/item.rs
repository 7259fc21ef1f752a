#![forbid(unsafe_code)]

//! Dropdown items and item-list validation.

use std::collections::HashMap;
use std::fmt;

/// One selectable entry in a dropdown.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DropdownItem {
    /// Stable identifier, unique within a list.
    pub id: String,
    /// Display label.
    pub text: String,
}

impl DropdownItem {
    pub fn new(id: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            text: text.into(),
        }
    }
}

impl From<(&str, &str)> for DropdownItem {
    fn from((id, text): (&str, &str)) -> Self {
        Self::new(id, text)
    }
}

/// Errors from validating a dropdown item list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ItemListError {
    /// Two items share the same id.
    DuplicateId {
        id: String,
        first: usize,
        second: usize,
    },
}

impl fmt::Display for ItemListError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DuplicateId { id, first, second } => {
                write!(f, "duplicate item id {id:?} at indices {first} and {second}")
            }
        }
    }
}

impl std::error::Error for ItemListError {}

/// Check that every item id is unique.
pub fn validate_items(items: &[DropdownItem]) -> Result<(), ItemListError> {
    let mut seen: HashMap<&str, usize> = HashMap::with_capacity(items.len());
    for (index, item) in items.iter().enumerate() {
        if let Some(&first) = seen.get(item.id.as_str()) {
            return Err(ItemListError::DuplicateId {
                id: item.id.clone(),
                first,
                second: index,
            });
        }
        seen.insert(&item.id, index);
    }
    Ok(())
}
