//! Python extension entry point.
//!
//! Registration is validated against an in-memory [`Module`] mirror first, so
//! the Python module only ever receives entries the mirror accepted.

use depthai_core::{FunctionDecl, Module, ModuleHandle, RegistrationError, TypeDecl, TypeKind};
use pyo3::exceptions::PyImportError;
use pyo3::prelude::*;
use pyo3::types::PyModule;
use rustc_hash::FxHashMap;

use crate::composer::Composer;
use crate::config::BindingsConfig;
use crate::probe::{NamespaceProbe, ProbeValue};
use crate::runtime;

/// Descriptor placed on the module for each registered type.
#[pyclass(dict, module = "depthai", name = "NativeType")]
pub struct NativeType {
    #[pyo3(get)]
    name: String,
    #[pyo3(get)]
    qualified_name: String,
    #[pyo3(get)]
    base: Option<String>,
    #[pyo3(get)]
    is_enum: bool,
    #[pyo3(get)]
    values: Vec<String>,
}

#[pymethods]
impl NativeType {
    fn __repr__(&self) -> String {
        format!("<depthai type '{}'>", self.qualified_name)
    }
}

/// Descriptor placed on the module for each registered function.
#[pyclass(module = "depthai", name = "NativeFunction")]
pub struct NativeFunction {
    #[pyo3(get)]
    name: String,
    #[pyo3(get)]
    signatures: Vec<String>,
}

#[pymethods]
impl NativeFunction {
    fn __repr__(&self) -> String {
        let overloads = self.signatures.len();
        format!("<depthai function '{}' ({overloads} overloads)>", self.name)
    }
}

/// A Python module driven through [`ModuleHandle`].
pub struct PyModuleHandle {
    module: Py<PyModule>,
    mirror: Module,
    objects: FxHashMap<String, PyObject>,
    functions: FxHashMap<String, Py<NativeFunction>>,
}

fn host_error(err: PyErr) -> RegistrationError {
    RegistrationError::Host(err.to_string())
}

impl PyModuleHandle {
    pub fn new(module: &Bound<'_, PyModule>) -> PyResult<Self> {
        Ok(Self {
            mirror: Module::new(module.name()?.to_string()),
            module: module.clone().unbind(),
            objects: FxHashMap::default(),
            functions: FxHashMap::default(),
        })
    }

    /// The in-memory record of everything registered so far.
    pub fn mirror(&self) -> &Module {
        &self.mirror
    }

    fn parent<'py>(
        &self,
        py: Python<'py>,
        namespace: Option<&str>,
    ) -> Result<Bound<'py, PyAny>, RegistrationError> {
        match namespace {
            None => Ok(self.module.bind(py).clone().into_any()),
            Some(ns) => self
                .objects
                .get(ns)
                .map(|obj| obj.bind(py).clone())
                .ok_or_else(|| RegistrationError::NamespaceNotFound(ns.to_string())),
        }
    }
}

impl ModuleHandle for PyModuleHandle {
    fn name(&self) -> &str {
        self.mirror.name()
    }

    fn contains(&self, qualified: &str) -> bool {
        self.mirror.contains(qualified)
    }

    fn contains_type(&self, qualified: &str) -> bool {
        self.mirror.contains_type(qualified)
    }

    fn contains_submodule(&self, name: &str) -> bool {
        self.mirror.contains_submodule(name)
    }

    fn add_attribute(&mut self, name: &str, value: &str) -> Result<(), RegistrationError> {
        self.mirror.add_attribute(name, value)?;
        Python::with_gil(|py| self.module.bind(py).setattr(name, value)).map_err(host_error)
    }

    fn add_submodule(&mut self, name: &str, doc: &str) -> Result<(), RegistrationError> {
        self.mirror.add_submodule(name, doc)?;
        let submodule = Python::with_gil(|py| -> PyResult<PyObject> {
            let submodule = PyModule::new(py, name)?;
            submodule.setattr("__doc__", doc)?;
            self.module.bind(py).add_submodule(&submodule)?;
            Ok(submodule.into_any().unbind())
        })
        .map_err(host_error)?;
        self.objects.insert(name.to_string(), submodule);
        Ok(())
    }

    fn add_type(&mut self, decl: TypeDecl) -> Result<(), RegistrationError> {
        let qualified = decl.qualified_name();
        self.mirror.add_type(decl.clone())?;

        let object = Python::with_gil(|py| -> Result<PyObject, RegistrationError> {
            let parent = self.parent(py, decl.namespace.as_deref())?;
            let descriptor = Py::new(
                py,
                NativeType {
                    name: decl.name.clone(),
                    qualified_name: qualified.clone(),
                    base: decl.base.clone(),
                    is_enum: decl.kind == TypeKind::Enum,
                    values: decl.values.clone(),
                },
            )
            .map_err(host_error)?;
            parent
                .setattr(decl.name.as_str(), &descriptor)
                .map_err(host_error)?;
            Ok(descriptor.into_any())
        })?;
        self.objects.insert(qualified, object);
        Ok(())
    }

    fn add_function(&mut self, decl: FunctionDecl) -> Result<(), RegistrationError> {
        let qualified = decl.qualified_name();
        self.mirror.add_function(decl.clone())?;

        Python::with_gil(|py| -> Result<(), RegistrationError> {
            if let Some(existing) = self.functions.get(&qualified) {
                existing
                    .borrow_mut(py)
                    .signatures
                    .push(decl.signature.clone());
                return Ok(());
            }
            let parent = self.parent(py, decl.namespace.as_deref())?;
            let function = Py::new(
                py,
                NativeFunction {
                    name: decl.name.clone(),
                    signatures: vec![decl.signature.clone()],
                },
            )
            .map_err(host_error)?;
            parent
                .setattr(decl.name.as_str(), &function)
                .map_err(host_error)?;
            self.functions.insert(qualified, function);
            Ok(())
        })
    }
}

/// Reads switches from attributes of importable Python modules.
pub struct PythonProbe<'py> {
    py: Python<'py>,
}

impl<'py> PythonProbe<'py> {
    pub fn new(py: Python<'py>) -> Self {
        Self { py }
    }
}

impl NamespaceProbe for PythonProbe<'_> {
    fn try_read(&self, namespace: &str, key: &str) -> Option<bool> {
        let module = PyModule::import(self.py, namespace).ok()?;
        let value = module.getattr(key).ok()?;
        switch_value(&value).as_bool()
    }
}

/// `bool` is checked first since it is a subclass of `int`. Integers that do
/// not fit an `i64` are a type mismatch.
fn switch_value(value: &Bound<'_, PyAny>) -> ProbeValue {
    if let Ok(flag) = value.extract::<bool>() {
        ProbeValue::Bool(flag)
    } else if let Ok(int) = value.extract::<i64>() {
        ProbeValue::Int(int)
    } else if let Ok(text) = value.extract::<String>() {
        ProbeValue::Str(text)
    } else {
        ProbeValue::None
    }
}

#[pymodule]
fn depthai(m: &Bound<'_, PyModule>) -> PyResult<()> {
    let mut handle = PyModuleHandle::new(m)?;
    Composer::new(runtime::process_runtime())
        .with_config(BindingsConfig::default())
        .with_probe(PythonProbe::new(m.py()))
        .compose(&mut handle)
        .map_err(|err| PyImportError::new_err(err.to_string()))?;
    Ok(())
}
