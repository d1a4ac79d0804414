//! The module object that registration callbacks write into.
//!
//! [`ModuleHandle`] is the seam between the composition machinery and the
//! host runtime. [`Module`] is the in-memory implementation used when no
//! host runtime is attached, and by tests.
//!
//! Names are qualified with `.`: a type `ColorCamera` registered in the
//! `node` submodule is addressed as `node.ColorCamera`.

use rustc_hash::FxHashMap;

use crate::error::RegistrationError;

// =============================================================================
// Declarations
// =============================================================================

/// The flavour of a registered native type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TypeKind {
    /// A class wrapping a native type.
    Class,
    /// An enumeration with named values.
    Enum,
}

/// Declaration of a native type exposed to the host runtime.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeDecl {
    pub name: String,
    pub namespace: Option<String>,
    /// Qualified name of the base type, which must already be registered.
    pub base: Option<String>,
    pub kind: TypeKind,
    /// Enum value names, empty for classes.
    pub values: Vec<String>,
}

impl TypeDecl {
    /// Declare a class.
    pub fn class(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            namespace: None,
            base: None,
            kind: TypeKind::Class,
            values: Vec::new(),
        }
    }

    /// Declare an enumeration with the given values.
    pub fn enumeration<I, S>(name: impl Into<String>, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            name: name.into(),
            namespace: None,
            base: None,
            kind: TypeKind::Enum,
            values: values.into_iter().map(Into::into).collect(),
        }
    }

    /// Derive from an already registered type.
    pub fn extends(mut self, base: impl Into<String>) -> Self {
        self.base = Some(base.into());
        self
    }

    /// Place the type inside a submodule, or nest it inside another type.
    pub fn in_namespace(mut self, namespace: impl Into<String>) -> Self {
        self.namespace = Some(namespace.into());
        self
    }

    pub fn qualified_name(&self) -> String {
        qualify(self.namespace.as_deref(), &self.name)
    }

    /// Check that this declaration can be added to `module`.
    ///
    /// The namespace and the base type must exist and the qualified name
    /// must be free.
    pub fn validate<M: ModuleHandle + ?Sized>(&self, module: &M) -> Result<(), RegistrationError> {
        if let Some(ns) = &self.namespace {
            if !module.contains_namespace(ns) {
                return Err(RegistrationError::NamespaceNotFound(ns.clone()));
            }
        }
        if let Some(base) = &self.base {
            module.require_type(base)?;
        }
        let qname = self.qualified_name();
        if module.contains(&qname) {
            return Err(RegistrationError::duplicate(qname, "type"));
        }
        Ok(())
    }
}

/// Declaration of a free function exposed to the host runtime.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FunctionDecl {
    pub name: String,
    pub namespace: Option<String>,
    /// Human-readable signature, e.g. `(level: LogLevel) -> None`.
    pub signature: String,
}

impl FunctionDecl {
    pub fn new(name: impl Into<String>, signature: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            namespace: None,
            signature: signature.into(),
        }
    }

    pub fn in_namespace(mut self, namespace: impl Into<String>) -> Self {
        self.namespace = Some(namespace.into());
        self
    }

    pub fn qualified_name(&self) -> String {
        qualify(self.namespace.as_deref(), &self.name)
    }
}

fn qualify(namespace: Option<&str>, name: &str) -> String {
    match namespace {
        Some(ns) => format!("{ns}.{name}"),
        None => name.to_string(),
    }
}

// =============================================================================
// ModuleHandle
// =============================================================================

/// The destination every registration callback writes into.
///
/// Implementations only store what they are given; ordering checks live in
/// [`TypeDecl::validate`] and [`ModuleHandle::require_type`] so every host
/// enforces them the same way.
pub trait ModuleHandle {
    /// Name of the module as seen by the host runtime.
    fn name(&self) -> &str;

    /// Whether any entry is registered under `qualified`.
    fn contains(&self, qualified: &str) -> bool;

    /// Whether a type is registered under `qualified`.
    fn contains_type(&self, qualified: &str) -> bool;

    /// Whether a submodule named `name` exists.
    fn contains_submodule(&self, name: &str) -> bool;

    /// Whether `name` can hold nested entries: a submodule or a type.
    fn contains_namespace(&self, name: &str) -> bool {
        self.contains_submodule(name) || self.contains_type(name)
    }

    /// Attach an immutable string attribute.
    fn add_attribute(&mut self, name: &str, value: &str) -> Result<(), RegistrationError>;

    /// Create a submodule namespace.
    fn add_submodule(&mut self, name: &str, doc: &str) -> Result<(), RegistrationError>;

    /// Register a native type.
    fn add_type(&mut self, decl: TypeDecl) -> Result<(), RegistrationError>;

    /// Register a free function. Repeated names add overloads.
    fn add_function(&mut self, decl: FunctionDecl) -> Result<(), RegistrationError>;

    /// Fail with [`RegistrationError::TypeNotFound`] unless `qualified` is a
    /// registered type.
    fn require_type(&self, qualified: &str) -> Result<(), RegistrationError> {
        if self.contains_type(qualified) {
            Ok(())
        } else {
            Err(RegistrationError::TypeNotFound(qualified.to_string()))
        }
    }
}

// =============================================================================
// In-memory Module
// =============================================================================

/// A registered entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Entry {
    Attribute(String),
    Submodule { doc: String },
    Type(TypeDecl),
    /// All overloads registered under one name.
    Function(Vec<FunctionDecl>),
}

impl Entry {
    /// Short description of the entry kind, used in error messages.
    pub fn kind(&self) -> &'static str {
        match self {
            Entry::Attribute(_) => "attribute",
            Entry::Submodule { .. } => "submodule",
            Entry::Type(_) => "type",
            Entry::Function(_) => "function",
        }
    }
}

/// In-memory module: a flat table of qualified names, kept in registration
/// order.
#[derive(Debug, Clone)]
pub struct Module {
    name: String,
    entries: FxHashMap<String, Entry>,
    order: Vec<String>,
}

impl Module {
    /// Create an empty module.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            entries: FxHashMap::default(),
            order: Vec::new(),
        }
    }

    pub fn get(&self, qualified: &str) -> Option<&Entry> {
        self.entries.get(qualified)
    }

    /// Value of a string attribute.
    pub fn attribute(&self, name: &str) -> Option<&str> {
        match self.entries.get(name) {
            Some(Entry::Attribute(value)) => Some(value),
            _ => None,
        }
    }

    /// Overloads registered under a function name.
    pub fn functions(&self, qualified: &str) -> Option<&[FunctionDecl]> {
        match self.entries.get(qualified) {
            Some(Entry::Function(overloads)) => Some(overloads),
            _ => None,
        }
    }

    /// Entries in registration order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Entry)> {
        self.order
            .iter()
            .filter_map(|name| self.entries.get(name).map(|e| (name.as_str(), e)))
    }

    /// Qualified names of all types, in registration order.
    pub fn type_names(&self) -> impl Iterator<Item = &str> {
        self.iter()
            .filter(|(_, e)| matches!(e, Entry::Type(_)))
            .map(|(name, _)| name)
    }

    /// Qualified names of entries directly inside `namespace`.
    pub fn members_of<'a>(&'a self, namespace: &'a str) -> impl Iterator<Item = &'a str> {
        self.order.iter().filter_map(move |name| {
            let (ns, _) = name.rsplit_once('.')?;
            (ns == namespace).then_some(name.as_str())
        })
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn insert(&mut self, qualified: String, entry: Entry) -> Result<(), RegistrationError> {
        if let Some(existing) = self.entries.get(&qualified) {
            return Err(RegistrationError::duplicate(qualified, existing.kind()));
        }
        self.order.push(qualified.clone());
        self.entries.insert(qualified, entry);
        Ok(())
    }
}

impl ModuleHandle for Module {
    fn name(&self) -> &str {
        &self.name
    }

    fn contains(&self, qualified: &str) -> bool {
        self.entries.contains_key(qualified)
    }

    fn contains_type(&self, qualified: &str) -> bool {
        matches!(self.entries.get(qualified), Some(Entry::Type(_)))
    }

    fn contains_submodule(&self, name: &str) -> bool {
        matches!(self.entries.get(name), Some(Entry::Submodule { .. }))
    }

    fn add_attribute(&mut self, name: &str, value: &str) -> Result<(), RegistrationError> {
        self.insert(name.to_string(), Entry::Attribute(value.to_string()))
    }

    fn add_submodule(&mut self, name: &str, doc: &str) -> Result<(), RegistrationError> {
        self.insert(
            name.to_string(),
            Entry::Submodule {
                doc: doc.to_string(),
            },
        )
    }

    fn add_type(&mut self, decl: TypeDecl) -> Result<(), RegistrationError> {
        decl.validate(self)?;
        self.insert(decl.qualified_name(), Entry::Type(decl))
    }

    fn add_function(&mut self, decl: FunctionDecl) -> Result<(), RegistrationError> {
        if let Some(ns) = &decl.namespace {
            if !self.contains_namespace(ns) {
                return Err(RegistrationError::NamespaceNotFound(ns.clone()));
            }
        }
        let qname = decl.qualified_name();
        match self.entries.get_mut(&qname) {
            Some(Entry::Function(overloads)) => {
                overloads.push(decl);
                Ok(())
            }
            Some(existing) => Err(RegistrationError::duplicate(qname, existing.kind())),
            None => self.insert(qname, Entry::Function(vec![decl])),
        }
    }
}
