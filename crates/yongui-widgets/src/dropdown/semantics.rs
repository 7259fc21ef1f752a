#![forbid(unsafe_code)]

//! Accessibility semantics for the dropdown parts.
//!
//! These mirror the roles and states a screen reader would be told about a
//! combobox: the trigger announces whether its listbox is expanded, and each
//! option announces whether it is the selected one.

use super::state::DropdownState;

/// Accessibility role of a dropdown part.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role {
    Combobox,
    Listbox,
    Option,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TriggerSemantics {
    pub role: Role,
    /// The popup list is showing.
    pub expanded: bool,
    /// Role of the popup the trigger controls.
    pub has_popup: Option<Role>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListSemantics {
    pub role: Role,
    pub visible: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ItemSemantics {
    pub role: Role,
    pub selected: bool,
}

impl DropdownState {
    pub fn trigger_semantics(&self) -> TriggerSemantics {
        TriggerSemantics {
            role: Role::Combobox,
            expanded: self.is_open(),
            has_popup: Some(Role::Listbox),
        }
    }

    pub fn list_semantics(&self) -> ListSemantics {
        ListSemantics {
            role: Role::Listbox,
            visible: self.is_open(),
        }
    }

    pub fn item_semantics(&self, index: usize) -> ItemSemantics {
        ItemSemantics {
            role: Role::Option,
            selected: self.selected() == Some(index),
        }
    }
}
