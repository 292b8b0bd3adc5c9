//! Per-container traversal state.

use smol_str::SmolStr;

use crate::frontend::{AccessSpecifier, CursorInfo, StorageClass};
use crate::model::{StorageQualifier, Visibility};

/// Mutable state of one container during a build.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) struct ContainerContext {
    /// Applied to members as they are visited.
    pub visibility: Visibility,
    pub children_visited: bool,
    /// Count of generated `__anonymous__N` fields.
    pub anonymous_fields: u32,
}

impl ContainerContext {
    pub fn new(visibility: Visibility) -> Self {
        Self {
            visibility,
            children_visited: false,
            anonymous_fields: 0,
        }
    }

    pub fn next_anonymous_field_name(&mut self) -> SmolStr {
        let name = smol_str::format_smolstr!("__anonymous__{}", self.anonymous_fields);
        self.anonymous_fields += 1;
        name
    }
}

/// Memo key for a cursor: its unique symbol, or its position when it has none.
pub(super) fn symbol_key(info: &CursorInfo) -> SmolStr {
    if info.usr.is_empty() {
        smol_str::format_smolstr!("{}@{}", info.extent.start.file, info.extent.start.offset)
    } else {
        info.usr.clone()
    }
}

pub(super) fn visibility_of(access: AccessSpecifier) -> Visibility {
    match access {
        AccessSpecifier::Protected => Visibility::Protected,
        AccessSpecifier::Private => Visibility::Private,
        AccessSpecifier::Public | AccessSpecifier::Invalid => Visibility::Public,
    }
}

pub(super) fn storage_of(storage: StorageClass) -> StorageQualifier {
    match storage {
        StorageClass::Extern | StorageClass::PrivateExtern => StorageQualifier::Extern,
        StorageClass::Static => StorageQualifier::Static,
        _ => StorageQualifier::None,
    }
}
