//! Version registry mapping API version tokens to representation bindings.
//!
//! The registry is an explicit table built and validated at process start.
//! Each registered version names its read-shape, write-shape, dispatch mode,
//! deprecation status, and the exact set of operations it maps. Nothing is
//! discovered dynamically and no version ever falls back to another
//! version's behavior: an unmapped operation is reported as such.
//!
//! # Example
//!
//! ```rust
//! use forecast_server::version::{Operation, VersionRegistry};
//!
//! let registry = VersionRegistry::standard();
//! let binding = registry.resolve("3.0").unwrap();
//! assert!(binding.supports(Operation::Patch));
//!
//! // Version 2.0 exists, but never exposed GET-by-id.
//! let v2 = registry.resolve("2.0").unwrap();
//! assert!(!v2.supports(Operation::GetById));
//! ```

use crate::error::{ForecastError, ForecastResult};
use serde::Serialize;
use std::collections::HashMap;
use std::fmt;

/// The operations a version can map.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Operation {
    List,
    GetById,
    Create,
    Replace,
    Patch,
    Delete,
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::List => "List",
            Self::GetById => "GetById",
            Self::Create => "Create",
            Self::Replace => "Replace",
            Self::Patch => "Patch",
            Self::Delete => "Delete",
        };
        f.write_str(name)
    }
}

/// Identifies which read projection a version serves.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReadShape {
    /// Full field list: id, date, both temperatures, summary.
    Base,
    /// Fahrenheit-facing variant without the raw Celsius value.
    Compact,
    /// Base fields plus the literal v3 version tag.
    TaggedV3,
    /// Base fields plus the literal v4 version tag.
    TaggedV4,
}

/// Identifies which write contract a version accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteShape {
    /// Historically separate create and update bodies with one field list.
    Split,
    /// The single shared body used by create, replace and patch alike.
    Shared,
}

/// Whether a version's operations ran against the blocking or the
/// non-blocking store variant in the source system.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dispatch {
    Blocking,
    NonBlocking,
}

/// Everything the handler layer needs to serve one API version.
#[derive(Debug, Clone)]
pub struct VersionBinding {
    token: String,
    read_shape: ReadShape,
    write_shape: WriteShape,
    dispatch: Dispatch,
    deprecated: bool,
    operations: Vec<Operation>,
}

impl VersionBinding {
    /// Create a binding for `token` mapping exactly `operations`.
    pub fn new(
        token: impl Into<String>,
        read_shape: ReadShape,
        write_shape: WriteShape,
        dispatch: Dispatch,
        operations: Vec<Operation>,
    ) -> Self {
        Self {
            token: token.into(),
            read_shape,
            write_shape,
            dispatch,
            deprecated: false,
            operations,
        }
    }

    /// Flag this version as deprecated. Deprecated versions stay fully
    /// functional; the handler layer surfaces the deprecation signal.
    pub fn deprecated(mut self) -> Self {
        self.deprecated = true;
        self
    }

    pub fn token(&self) -> &str {
        &self.token
    }

    pub fn read_shape(&self) -> ReadShape {
        self.read_shape
    }

    pub fn write_shape(&self) -> WriteShape {
        self.write_shape
    }

    pub fn dispatch(&self) -> Dispatch {
        self.dispatch
    }

    pub fn is_deprecated(&self) -> bool {
        self.deprecated
    }

    /// The exact operations mapped for this version.
    pub fn operations(&self) -> &[Operation] {
        &self.operations
    }

    /// True when `operation` is mapped for this version.
    pub fn supports(&self, operation: Operation) -> bool {
        self.operations.contains(&operation)
    }
}

/// One row of a version discovery response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VersionInfo {
    pub token: String,
    pub deprecated: bool,
}

/// Errors raised while building a registry.
///
/// These are programming errors in the registration table and should be
/// caught at startup rather than at request time.
#[derive(Debug, thiserror::Error)]
pub enum RegistryError {
    /// The same version token was registered twice.
    #[error("Version '{token}' is registered more than once")]
    DuplicateVersion { token: String },

    /// Two versions both claimed to be the implicit default.
    #[error("Default version already set to '{current}', cannot also set '{requested}'")]
    DuplicateDefault { current: String, requested: String },

    /// The declared default token was never registered.
    #[error("Default version '{token}' is not registered")]
    UnknownDefault { token: String },
}

/// Builder validating the registration table before use.
#[derive(Debug, Default)]
pub struct VersionRegistryBuilder {
    bindings: Vec<VersionBinding>,
    default_token: Option<String>,
    duplicate_default: Option<(String, String)>,
}

impl VersionRegistryBuilder {
    /// Register a version binding.
    pub fn register(mut self, binding: VersionBinding) -> Self {
        self.bindings.push(binding);
        self
    }

    /// Declare the explicit default token used when a request names no
    /// version. At most one default may be declared; build() rejects a
    /// second declaration.
    pub fn default_version(mut self, token: impl Into<String>) -> Self {
        let token = token.into();
        match &self.default_token {
            Some(current) if self.duplicate_default.is_none() => {
                self.duplicate_default = Some((current.clone(), token));
            }
            Some(_) => {}
            None => self.default_token = Some(token),
        }
        self
    }

    /// Validate and build the registry.
    pub fn build(self) -> Result<VersionRegistry, RegistryError> {
        if let Some((current, requested)) = self.duplicate_default {
            return Err(RegistryError::DuplicateDefault { current, requested });
        }

        let mut bindings = HashMap::new();
        for binding in self.bindings {
            if bindings.contains_key(binding.token()) {
                return Err(RegistryError::DuplicateVersion {
                    token: binding.token.clone(),
                });
            }
            bindings.insert(binding.token.clone(), binding);
        }

        if let Some(token) = &self.default_token {
            if !bindings.contains_key(token) {
                return Err(RegistryError::UnknownDefault {
                    token: token.clone(),
                });
            }
        }

        Ok(VersionRegistry {
            bindings,
            default_token: self.default_token,
        })
    }
}

/// The version table consulted before any store access.
#[derive(Debug, Clone)]
pub struct VersionRegistry {
    bindings: HashMap<String, VersionBinding>,
    default_token: Option<String>,
}

impl VersionRegistry {
    /// Start building an empty registry.
    pub fn builder() -> VersionRegistryBuilder {
        VersionRegistryBuilder::default()
    }

    /// The stock registration table.
    ///
    /// * `1.0` - base read-shape, split write bodies, all operations,
    ///   deprecated.
    /// * `2.0` - compact read-shape; GET-by-id was never mapped.
    /// * `3.0` - tagged read-shape, shared write body.
    /// * `4.0` - tagged read-shape, shared write body, non-blocking
    ///   operations.
    ///
    /// No default token is registered: a request without a version is a
    /// hard failure rather than a silent guess.
    pub fn standard() -> Self {
        use Operation::*;

        let built = Self::builder()
            .register(
                VersionBinding::new(
                    "1.0",
                    ReadShape::Base,
                    WriteShape::Split,
                    Dispatch::Blocking,
                    vec![List, GetById, Create, Replace, Patch, Delete],
                )
                .deprecated(),
            )
            .register(VersionBinding::new(
                "2.0",
                ReadShape::Compact,
                WriteShape::Split,
                Dispatch::Blocking,
                vec![List, Create, Replace, Patch, Delete],
            ))
            .register(VersionBinding::new(
                "3.0",
                ReadShape::TaggedV3,
                WriteShape::Shared,
                Dispatch::Blocking,
                vec![List, GetById, Create, Replace, Patch, Delete],
            ))
            .register(VersionBinding::new(
                "4.0",
                ReadShape::TaggedV4,
                WriteShape::Shared,
                Dispatch::NonBlocking,
                vec![List, GetById, Create, Replace, Patch, Delete],
            ))
            .build();

        match built {
            Ok(registry) => registry,
            // The stock table is statically well-formed.
            Err(_) => unreachable!("stock version table failed validation"),
        }
    }

    /// Resolve a version token to its binding.
    pub fn resolve(&self, token: &str) -> ForecastResult<&VersionBinding> {
        self.bindings
            .get(token)
            .ok_or_else(|| ForecastError::unsupported_version(token))
    }

    /// Resolve the explicit default version.
    ///
    /// Fails hard when no default was declared; an unspecified version is
    /// never guessed.
    pub fn resolve_default(&self) -> ForecastResult<&VersionBinding> {
        match &self.default_token {
            Some(token) => self.resolve(token),
            None => Err(ForecastError::unsupported_version("<unspecified>")),
        }
    }

    /// Resolve `token` and ensure `operation` is mapped for it.
    pub fn ensure_operation(
        &self,
        token: &str,
        operation: Operation,
    ) -> ForecastResult<&VersionBinding> {
        let binding = self.resolve(token)?;
        if !binding.supports(operation) {
            return Err(ForecastError::operation_not_mapped(token, operation));
        }
        Ok(binding)
    }

    /// All registered versions for discovery responses, sorted by token.
    pub fn supported_versions(&self) -> Vec<VersionInfo> {
        let mut versions: Vec<VersionInfo> = self
            .bindings
            .values()
            .map(|binding| VersionInfo {
                token: binding.token.clone(),
                deprecated: binding.deprecated,
            })
            .collect();
        versions.sort_by(|a, b| a.token.cmp(&b.token));
        versions
    }
}
