//! Static declaration tables shared by the area registrars.

use depthai_core::{
    Callstack, FunctionDecl, ModuleHandle, RegistrationCallback, RegistrationError, TypeDecl,
    TypeKind,
};

/// A type declaration known at compile time.
#[derive(Debug, Clone, Copy)]
pub struct TypeSpec {
    pub name: &'static str,
    pub namespace: Option<&'static str>,
    pub base: Option<&'static str>,
    pub kind: TypeKind,
    pub values: &'static [&'static str],
}

impl TypeSpec {
    pub const fn class(name: &'static str) -> Self {
        Self {
            name,
            namespace: None,
            base: None,
            kind: TypeKind::Class,
            values: &[],
        }
    }

    pub const fn enumeration(name: &'static str, values: &'static [&'static str]) -> Self {
        Self {
            name,
            namespace: None,
            base: None,
            kind: TypeKind::Enum,
            values,
        }
    }

    pub const fn extends(self, base: &'static str) -> Self {
        Self {
            base: Some(base),
            ..self
        }
    }

    pub const fn within(self, namespace: &'static str) -> Self {
        Self {
            namespace: Some(namespace),
            ..self
        }
    }

    pub fn to_decl(&self) -> TypeDecl {
        let mut decl = match self.kind {
            TypeKind::Class => TypeDecl::class(self.name),
            TypeKind::Enum => TypeDecl::enumeration(self.name, self.values.iter().copied()),
        };
        if let Some(ns) = self.namespace {
            decl = decl.in_namespace(ns);
        }
        if let Some(base) = self.base {
            decl = decl.extends(base);
        }
        decl
    }
}

/// A batch of declarations registered together.
#[derive(Debug, Clone, Copy)]
pub struct Group {
    pub label: &'static str,
    /// Types from other areas that must already be registered.
    pub requires: &'static [&'static str],
    pub types: &'static [TypeSpec],
    /// `(name, signature)` pairs registered as free functions.
    pub functions: &'static [(&'static str, &'static str)],
}

impl Group {
    pub const fn new(label: &'static str) -> Self {
        Self {
            label,
            requires: &[],
            types: &[],
            functions: &[],
        }
    }

    pub const fn requires(self, requires: &'static [&'static str]) -> Self {
        Self { requires, ..self }
    }

    pub const fn types(self, types: &'static [TypeSpec]) -> Self {
        Self { types, ..self }
    }

    pub const fn functions(self, functions: &'static [(&'static str, &'static str)]) -> Self {
        Self { functions, ..self }
    }

    /// Register the whole group into `module`.
    pub fn register<M: ModuleHandle + ?Sized>(
        &self,
        module: &mut M,
    ) -> Result<(), RegistrationError> {
        for required in self.requires {
            module.require_type(required)?;
        }
        for spec in self.types {
            module.add_type(spec.to_decl())?;
        }
        for (name, signature) in self.functions {
            module.add_function(FunctionDecl::new(*name, *signature))?;
        }
        tracing::trace!(
            group = self.label,
            types = self.types.len(),
            functions = self.functions.len(),
            "registered group"
        );
        Ok(())
    }

    /// A callback that registers this group, named `{area}::{label}`.
    pub fn step<M: ModuleHandle + 'static>(&'static self, area: &str) -> RegistrationCallback<M> {
        let name = format!("{area}::{}", self.label);
        RegistrationCallback::new(name, move |module, _| self.register(module))
    }
}

/// Push one step per group so the groups run in listed order, ahead of
/// anything already pending.
pub fn schedule_groups<M: ModuleHandle + 'static>(
    callstack: &mut Callstack<'_, M>,
    area: &str,
    groups: &'static [Group],
) {
    for group in groups.iter().rev() {
        callstack.push_front(group.step(area));
    }
}
