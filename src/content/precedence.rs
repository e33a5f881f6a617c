//! The field precedence chain
//!
//! Every field of every section is resolved by the same algorithm: walk the
//! candidate sources in a fixed order and take the first value that has the
//! expected shape. Values of the wrong shape and empty lists count as absent.

use serde_json::Value;

use super::bundle::{unwrap_value, wrapped_inner, RawContentBundle};
use crate::theme::SectionName;

/// Where a resolved field value came from, highest precedence first
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Precedence {
    /// Explicit props passed by the caller
    Override,
    /// `raw[section].value`
    Wrapped,
    /// `raw[section]` used as-is
    Bare,
    /// A legacy key path
    Alias,
    /// The theme's default table
    ThemeDefault,
    /// The global default table
    GlobalDefault,
}

/// Static description of one section field
#[derive(Debug, Clone, Copy)]
pub struct FieldSpec {
    /// Path of the field inside a section fragment
    pub path: &'static [&'static str],
    /// Whether the section fragment itself may stand for this field,
    /// as when a section is supplied as a bare list
    pub primary: bool,
    /// Legacy key paths from the bundle root, tried in order
    pub aliases: &'static [&'static [&'static str]],
}

impl FieldSpec {
    pub const fn new(path: &'static [&'static str]) -> Self {
        Self {
            path,
            primary: false,
            aliases: &[],
        }
    }

    pub const fn primary(mut self) -> Self {
        self.primary = true;
        self
    }

    pub const fn aliases(mut self, aliases: &'static [&'static [&'static str]]) -> Self {
        self.aliases = aliases;
        self
    }
}

/// A resolved value and the level it came from
#[derive(Debug, Clone, PartialEq)]
pub struct Resolved<T> {
    pub value: T,
    pub precedence: Precedence,
}

/// Resolves the fields of one section against all content sources
#[derive(Debug, Clone, Copy)]
pub struct FieldResolver<'a> {
    section: SectionName,
    explicit: Option<&'a Value>,
    raw: &'a RawContentBundle,
    theme_defaults: Option<&'a Value>,
    global_defaults: Option<&'a Value>,
}

impl<'a> FieldResolver<'a> {
    pub fn new(section: SectionName, raw: &'a RawContentBundle) -> Self {
        Self {
            section,
            explicit: None,
            raw,
            theme_defaults: None,
            global_defaults: None,
        }
    }

    pub fn with_explicit(mut self, explicit: Option<&'a Value>) -> Self {
        self.explicit = explicit;
        self
    }

    pub fn with_theme_defaults(mut self, defaults: Option<&'a Value>) -> Self {
        self.theme_defaults = defaults;
        self
    }

    pub fn with_global_defaults(mut self, defaults: Option<&'a Value>) -> Self {
        self.global_defaults = defaults;
        self
    }

    /// Resolve one field, accepting the first candidate `accept` maps to `Some`
    pub fn resolve<T>(
        &self,
        field: &FieldSpec,
        accept: impl Fn(&Value) -> Option<T>,
    ) -> Option<Resolved<T>> {
        let found = self.find(field, &accept);
        match &found {
            Some(resolved) => tracing::trace!(
                section = %self.section,
                field = ?field.path,
                precedence = ?resolved.precedence,
                "resolved content field"
            ),
            None => tracing::debug!(
                section = %self.section,
                field = ?field.path,
                "no source for content field"
            ),
        }
        found
    }

    fn find<T>(&self, field: &FieldSpec, accept: &impl Fn(&Value) -> Option<T>) -> Option<Resolved<T>> {
        let fragment = self.raw.get(self.section.content_key());
        let wrapped = fragment.and_then(wrapped_inner);
        // A wrapper object is never read as the bare shape
        let bare = fragment.filter(|_| wrapped.is_none());

        let in_fragment = [
            (Precedence::Override, self.explicit),
            (Precedence::Wrapped, wrapped),
            (Precedence::Bare, bare),
        ];
        for (precedence, source) in in_fragment {
            if let Some(value) = source.and_then(|f| from_fragment(f, field, accept)) {
                return Some(Resolved { value, precedence });
            }
        }

        for alias in field.aliases {
            if let Some(value) = self
                .raw
                .lookup(alias)
                .and_then(|v| accept(unwrap_value(v)))
            {
                return Some(Resolved {
                    value,
                    precedence: Precedence::Alias,
                });
            }
        }

        let defaults = [
            (Precedence::ThemeDefault, self.theme_defaults),
            (Precedence::GlobalDefault, self.global_defaults),
        ];
        for (precedence, source) in defaults {
            if let Some(value) = source
                .and_then(|table| at_path(table, field.path))
                .and_then(|v| accept(v))
            {
                return Some(Resolved { value, precedence });
            }
        }
        None
    }
}

/// Read a field out of a section fragment
fn from_fragment<T>(
    fragment: &Value,
    field: &FieldSpec,
    accept: &impl Fn(&Value) -> Option<T>,
) -> Option<T> {
    if field.primary {
        if let Some(value) = accept(fragment) {
            return Some(value);
        }
    }
    at_path(fragment, field.path).and_then(|v| accept(unwrap_value(v)))
}

/// Follow a path of object keys
fn at_path<'v>(value: &'v Value, path: &[&str]) -> Option<&'v Value> {
    path.iter().try_fold(value, |current, key| current.as_object()?.get(*key))
}

/// Accept strings, and numbers rendered as text
pub fn text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

/// Accept a list whose items parse into at least one `T`
///
/// Empty lists, and lists where no item parses, are not a value.
pub fn list<T>(value: &Value, item: impl Fn(&Value) -> Option<T>) -> Option<Vec<T>> {
    let items: Vec<T> = value.as_array()?.iter().filter_map(item).collect();
    (!items.is_empty()).then_some(items)
}
