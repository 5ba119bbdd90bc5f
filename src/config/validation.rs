// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Blueprint validation.
//!
//! Validation turns a raw [`BlueprintDocument`] into a [`Blueprint`] and stops
//! at the first problem it finds. Sections are checked in a fixed order:
//!
//! 1. **Instances**: the section must be present and non-empty, every entry
//!    needs a non-empty `name` and `type`, and names must be unique.
//! 2. **Event relations**: `source`, `destination` and `eventType` must be
//!    present, both ends must name a declared instance, and the type must be a
//!    known [`EventType`].
//! 3. **Query relations**: same as event relations, against [`QueryType`].
//!
//! Instances come first because the relation checks look names up in the set
//! built by the first pass.

use std::collections::HashSet;

use crate::config::consts::*;
use crate::config::{
    Blueprint, BlueprintDocument, EdgeEnd, EventEdge, InstanceSpec, QueryEdge, RelationKind,
};
use crate::errors::BlueprintError;
use crate::observability::messages::blueprint::{BlueprintRejected, BlueprintValidated};
use crate::observability::messages::StructuredLog;
use crate::proto::{EventType, QueryType};

impl BlueprintDocument {
    /// Validate the document and produce an immutable [`Blueprint`].
    pub fn validate(&self) -> Result<Blueprint, BlueprintError> {
        validate_blueprint(self)
    }
}

/// Validate a blueprint document, failing fast on the first error.
pub fn validate_blueprint(doc: &BlueprintDocument) -> Result<Blueprint, BlueprintError> {
    let result = check_document(doc);
    match &result {
        Ok(blueprint) => BlueprintValidated {
            instance_count: blueprint.instances().len(),
            event_edge_count: blueprint.event_edges().len(),
            query_edge_count: blueprint.query_edges().len(),
        }
        .log(),
        Err(error) => BlueprintRejected { error }.log(),
    }
    result
}

fn check_document(doc: &BlueprintDocument) -> Result<Blueprint, BlueprintError> {
    if doc.instances().is_empty() {
        return Err(BlueprintError::MissingSection(LOCAL_INSTANCES_SECTION));
    }

    let mut names: HashSet<&str> = HashSet::new();
    let mut instances = Vec::with_capacity(doc.instances().len());
    for (index, entry) in doc.instances().iter().enumerate() {
        let name = required(LOCAL_INSTANCES_SECTION, index, NAME_KEY, &entry.name)?;
        let type_name = required(LOCAL_INSTANCES_SECTION, index, TYPE_KEY, &entry.type_name)?;
        if !names.insert(name) {
            return Err(BlueprintError::DuplicateInstance(name.to_string()));
        }
        instances.push(InstanceSpec {
            name: name.to_string(),
            type_name: type_name.to_string(),
        });
    }

    let mut event_edges = Vec::with_capacity(doc.event_relations().len());
    for (index, entry) in doc.event_relations().iter().enumerate() {
        let source = required(EVENT_RELATIONS_SECTION, index, SOURCE_KEY, &entry.source)?;
        let destination =
            required(EVENT_RELATIONS_SECTION, index, DESTINATION_KEY, &entry.destination)?;
        let event_type = required(EVENT_RELATIONS_SECTION, index, EVENT_TYPE_KEY, &entry.event_type)?;

        let from = declared(&names, RelationKind::Event, EdgeEnd::Source, source)?;
        let to = declared(&names, RelationKind::Event, EdgeEnd::Destination, destination)?;
        let event_type = EventType::from_str_name(event_type)
            .ok_or_else(|| BlueprintError::UnknownEventType(event_type.to_string()))?;

        event_edges.push(EventEdge {
            from,
            to,
            event_type,
        });
    }

    let mut query_edges = Vec::with_capacity(doc.query_relations().len());
    for (index, entry) in doc.query_relations().iter().enumerate() {
        let source = required(QUERY_RELATIONS_SECTION, index, SOURCE_KEY, &entry.source)?;
        let destination =
            required(QUERY_RELATIONS_SECTION, index, DESTINATION_KEY, &entry.destination)?;
        let query_type = required(QUERY_RELATIONS_SECTION, index, QUERY_TYPE_KEY, &entry.query_type)?;

        let from = declared(&names, RelationKind::Query, EdgeEnd::Source, source)?;
        let to = declared(&names, RelationKind::Query, EdgeEnd::Destination, destination)?;
        let query_type = QueryType::from_str_name(query_type)
            .ok_or_else(|| BlueprintError::UnknownQueryType(query_type.to_string()))?;

        query_edges.push(QueryEdge {
            from,
            to,
            query_type,
        });
    }

    Ok(Blueprint::new(instances, event_edges, query_edges))
}

/// A required key must be present and non-empty.
fn required<'a>(
    section: &'static str,
    index: usize,
    key: &'static str,
    value: &'a Option<String>,
) -> Result<&'a str, BlueprintError> {
    match value.as_deref() {
        Some(value) if !value.is_empty() => Ok(value),
        _ => Err(BlueprintError::MissingField {
            section,
            index,
            key,
        }),
    }
}

fn declared(
    names: &HashSet<&str>,
    kind: RelationKind,
    end: EdgeEnd,
    name: &str,
) -> Result<String, BlueprintError> {
    if names.contains(name) {
        Ok(name.to_string())
    } else {
        Err(BlueprintError::UnknownInstanceReference {
            kind,
            end,
            name: name.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TWO_INSTANCES: &str = r#"
localInstances:
- name: Instance1
  type: Type1
- name: Instance2
  type: Type2
"#;

    fn with_two_instances(relations: &str) -> String {
        format!("{}{}", TWO_INSTANCES, relations)
    }

    #[test]
    fn test_valid_blueprint_keeps_declaration_order() {
        let yaml = with_two_instances(
            r#"
eventRelations:
- source: Instance2
  destination: Instance1
  eventType: DummyEventType
queryRelations:
- source: Instance1
  destination: Instance2
  queryType: DummyQueryType
"#,
        );

        let blueprint = Blueprint::from_yaml_str(&yaml).unwrap();

        let names: Vec<&str> = blueprint.instances().iter().map(|i| i.name.as_str()).collect();
        assert_eq!(names, vec!["Instance1", "Instance2"]);
        assert_eq!(blueprint.instances()[1].type_name, "Type2");
        assert_eq!(
            blueprint.event_edges(),
            &[EventEdge {
                from: "Instance2".to_string(),
                to: "Instance1".to_string(),
                event_type: EventType::DummyEventType,
            }]
        );
        assert_eq!(
            blueprint.query_edges(),
            &[QueryEdge {
                from: "Instance1".to_string(),
                to: "Instance2".to_string(),
                query_type: QueryType::DummyQueryType,
            }]
        );
    }

    #[test]
    fn test_invalid_blueprints_table_driven() {
        struct TestCase {
            name: &'static str,
            yaml: String,
            expected: fn(&BlueprintError) -> bool,
        }

        let test_cases = vec![
            TestCase {
                name: "empty document",
                yaml: String::new(),
                expected: |e| matches!(e, BlueprintError::MissingSection("localInstances")),
            },
            TestCase {
                name: "explicitly empty instances section",
                yaml: "localInstances: []\n".to_string(),
                expected: |e| matches!(e, BlueprintError::MissingSection("localInstances")),
            },
            TestCase {
                name: "relations without instances",
                yaml: r#"
eventRelations:
- source: Instance1
  destination: Instance2
  eventType: DummyEventType
"#
                .to_string(),
                expected: |e| matches!(e, BlueprintError::MissingSection(_)),
            },
            TestCase {
                name: "duplicate instance name",
                yaml: r#"
localInstances:
- name: Instance1
  type: Type1
- name: Instance1
  type: Type2
"#
                .to_string(),
                expected: |e| matches!(e, BlueprintError::DuplicateInstance(n) if n == "Instance1"),
            },
            TestCase {
                name: "missing instance value",
                yaml: "localInstances:\n- name: Instance1\n  type:\n".to_string(),
                expected: |e| {
                    matches!(e, BlueprintError::MissingField { key: "type", index: 0, .. })
                },
            },
            TestCase {
                name: "empty instance name",
                yaml: "localInstances:\n- name: \"\"\n  type: Type1\n".to_string(),
                expected: |e| matches!(e, BlueprintError::MissingField { key: "name", .. }),
            },
            TestCase {
                name: "missing instance name",
                yaml: "localInstances:\n- type: Type1\n".to_string(),
                expected: |e| matches!(e, BlueprintError::MissingField { key: "name", .. }),
            },
            TestCase {
                name: "missing instance type",
                yaml: "localInstances:\n- name: Instance1\n".to_string(),
                expected: |e| matches!(e, BlueprintError::MissingField { key: "type", .. }),
            },
            TestCase {
                name: "unknown event source",
                yaml: with_two_instances(
                    "eventRelations:\n- source: UFO\n  destination: Instance2\n  eventType: DummyEventType\n",
                ),
                expected: |e| {
                    matches!(e, BlueprintError::UnknownInstanceReference {
                        kind: RelationKind::Event, end: EdgeEnd::Source, name } if name == "UFO")
                },
            },
            TestCase {
                name: "unknown event destination",
                yaml: with_two_instances(
                    "eventRelations:\n- source: Instance1\n  destination: UFO\n  eventType: DummyEventType\n",
                ),
                expected: |e| {
                    matches!(e, BlueprintError::UnknownInstanceReference {
                        kind: RelationKind::Event, end: EdgeEnd::Destination, .. })
                },
            },
            TestCase {
                name: "unknown event type",
                yaml: with_two_instances(
                    "eventRelations:\n- source: Instance1\n  destination: Instance2\n  eventType: UFO\n",
                ),
                expected: |e| matches!(e, BlueprintError::UnknownEventType(t) if t == "UFO"),
            },
            TestCase {
                name: "missing event source",
                yaml: with_two_instances(
                    "eventRelations:\n- destination: Instance2\n  eventType: DummyEventType\n",
                ),
                expected: |e| {
                    matches!(e, BlueprintError::MissingField {
                        section: "eventRelations", key: "source", .. })
                },
            },
            TestCase {
                name: "missing event destination",
                yaml: with_two_instances(
                    "eventRelations:\n- source: Instance1\n  eventType: DummyEventType\n",
                ),
                expected: |e| matches!(e, BlueprintError::MissingField { key: "destination", .. }),
            },
            TestCase {
                name: "missing event type",
                yaml: with_two_instances(
                    "eventRelations:\n- source: Instance1\n  destination: Instance2\n",
                ),
                expected: |e| matches!(e, BlueprintError::MissingField { key: "eventType", .. }),
            },
            TestCase {
                name: "unknown query source",
                yaml: with_two_instances(
                    "queryRelations:\n- source: UFO\n  destination: Instance2\n  queryType: DummyQueryType\n",
                ),
                expected: |e| {
                    matches!(e, BlueprintError::UnknownInstanceReference {
                        kind: RelationKind::Query, end: EdgeEnd::Source, .. })
                },
            },
            TestCase {
                name: "unknown query destination",
                yaml: with_two_instances(
                    "queryRelations:\n- source: Instance1\n  destination: UFO\n  queryType: DummyQueryType\n",
                ),
                expected: |e| {
                    matches!(e, BlueprintError::UnknownInstanceReference {
                        kind: RelationKind::Query, end: EdgeEnd::Destination, .. })
                },
            },
            TestCase {
                name: "unknown query type",
                yaml: with_two_instances(
                    "queryRelations:\n- source: Instance1\n  destination: Instance2\n  queryType: UFO\n",
                ),
                expected: |e| matches!(e, BlueprintError::UnknownQueryType(t) if t == "UFO"),
            },
            TestCase {
                name: "missing query source",
                yaml: with_two_instances(
                    "queryRelations:\n- destination: Instance2\n  queryType: DummyQueryType\n",
                ),
                expected: |e| {
                    matches!(e, BlueprintError::MissingField {
                        section: "queryRelations", key: "source", .. })
                },
            },
            TestCase {
                name: "missing query destination",
                yaml: with_two_instances(
                    "queryRelations:\n- source: Instance1\n  queryType: DummyQueryType\n",
                ),
                expected: |e| matches!(e, BlueprintError::MissingField { key: "destination", .. }),
            },
            TestCase {
                name: "missing query type",
                yaml: with_two_instances(
                    "queryRelations:\n- source: Instance1\n  destination: Instance2\n",
                ),
                expected: |e| matches!(e, BlueprintError::MissingField { key: "queryType", .. }),
            },
            TestCase {
                name: "event types are not query types",
                yaml: with_two_instances(
                    "queryRelations:\n- source: Instance1\n  destination: Instance2\n  queryType: DummyEventType\n",
                ),
                expected: |e| matches!(e, BlueprintError::UnknownQueryType(_)),
            },
        ];

        for test_case in test_cases {
            match Blueprint::from_yaml_str(&test_case.yaml) {
                Ok(_) => panic!("Test case '{}': blueprint was accepted", test_case.name),
                Err(error) => assert!(
                    (test_case.expected)(&error),
                    "Test case '{}': unexpected error {:?}",
                    test_case.name,
                    error
                ),
            }
        }
    }

    #[test]
    fn test_first_error_wins() {
        // Both relation sections are broken; event relations are checked first.
        let yaml = with_two_instances(
            r#"
eventRelations:
- source: Instance1
  destination: Instance2
  eventType: UFO
queryRelations:
- source: UFO
  destination: Instance2
  queryType: DummyQueryType
"#,
        );

        let error = Blueprint::from_yaml_str(&yaml).unwrap_err();
        assert!(matches!(error, BlueprintError::UnknownEventType(_)));
    }

    #[test]
    fn test_self_relation_is_allowed() {
        let yaml = with_two_instances(
            "eventRelations:\n- source: Instance1\n  destination: Instance1\n  eventType: ConfigurationEventType\n",
        );

        let blueprint = Blueprint::from_yaml_str(&yaml).unwrap();
        assert_eq!(blueprint.event_edges()[0].event_type, EventType::ConfigurationEventType);
    }
}
