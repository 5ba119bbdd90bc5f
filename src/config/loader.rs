// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use serde::Deserialize;
use std::fs;
use std::path::Path;

use crate::errors::BlueprintError;

/// Raw blueprint document as read from disk, before validation.
///
/// The document has three top-level sections of map lists. Only
/// `localInstances` is mandatory; the relation sections are optional but
/// usually present. Instances are created and run in the order they are
/// listed.
///
/// # Example
/// ```yaml
/// # Local Processors and Services to create and run, in order.
/// localInstances:
///   - name: Instance1
///     type: Type1
///   - name: Instance2
///     type: Type2
/// # Event relations between instances
/// eventRelations:
///   - source: Instance2
///     destination: Instance1
///     eventType: DummyEventType
/// # Query relations between instances
/// queryRelations:
///   - source: Instance1
///     destination: Instance2
///     queryType: DummyQueryType
/// ```
///
/// Every field is optional at this stage so that a missing or empty key is
/// reported by validation with its position instead of failing the parse.
#[derive(Debug, Default, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlueprintDocument {
    #[serde(default)]
    pub local_instances: Option<Vec<InstanceEntry>>,
    #[serde(default)]
    pub event_relations: Option<Vec<EventRelationEntry>>,
    #[serde(default)]
    pub query_relations: Option<Vec<QueryRelationEntry>>,
}

/// One `localInstances` entry.
#[derive(Debug, Default, Clone, PartialEq, Deserialize)]
pub struct InstanceEntry {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default, rename = "type")]
    pub type_name: Option<String>,
}

/// One `eventRelations` entry.
#[derive(Debug, Default, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventRelationEntry {
    #[serde(default)]
    pub source: Option<String>,
    #[serde(default)]
    pub destination: Option<String>,
    #[serde(default)]
    pub event_type: Option<String>,
}

/// One `queryRelations` entry.
#[derive(Debug, Default, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QueryRelationEntry {
    #[serde(default)]
    pub source: Option<String>,
    #[serde(default)]
    pub destination: Option<String>,
    #[serde(default)]
    pub query_type: Option<String>,
}

/// Document syntax of a blueprint file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentFormat {
    Yaml,
    Toml,
}

impl DocumentFormat {
    /// Pick the format from the file extension; anything but `.toml` is YAML.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("toml") => DocumentFormat::Toml,
            _ => DocumentFormat::Yaml,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            DocumentFormat::Yaml => "YAML",
            DocumentFormat::Toml => "TOML",
        }
    }
}

impl BlueprintDocument {
    /// Read and parse a blueprint file without validating it.
    pub fn read<P: AsRef<Path>>(path: P) -> Result<Self, BlueprintError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| BlueprintError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&content, DocumentFormat::from_path(path))
    }

    /// Parse a document held in memory.
    ///
    /// Blank content is an empty document, which validation then rejects for
    /// its missing instances section.
    pub fn parse(content: &str, format: DocumentFormat) -> Result<Self, BlueprintError> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        let parsed = match format {
            DocumentFormat::Yaml => {
                serde_yaml::from_str(content).map_err(|e| Box::new(e) as crate::errors::BoxError)
            }
            DocumentFormat::Toml => {
                toml::from_str(content).map_err(|e| Box::new(e) as crate::errors::BoxError)
            }
        };
        parsed.map_err(|source| BlueprintError::MalformedDocument {
            format: format.name(),
            source,
        })
    }

    pub fn instances(&self) -> &[InstanceEntry] {
        self.local_instances.as_deref().unwrap_or_default()
    }

    pub fn event_relations(&self) -> &[EventRelationEntry] {
        self.event_relations.as_deref().unwrap_or_default()
    }

    pub fn query_relations(&self) -> &[QueryRelationEntry] {
        self.query_relations.as_deref().unwrap_or_default()
    }
}
