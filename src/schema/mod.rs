//! Schema registry for protocol commands and events.
//!
//! Maps each command to its ordered parameter list and each command or
//! event to the ordered list of fields extracted from its payload.
//!
//! # Example
//!
//! ```ignore
//! use inspector_backend::schema::{ParamSpec, SchemaRegistry, ValueType};
//!
//! let mut schema = SchemaRegistry::new();
//! schema.register_command(
//!     "Page.open",
//!     vec![
//!         ParamSpec::required("url", ValueType::String),
//!         ParamSpec::optional("newWindow", ValueType::Boolean),
//!     ],
//! );
//! schema.register_reply("Runtime.evaluate", ["result", "wasThrown"]);
//! schema.register_event("Network.loadingFinished", ["requestId", "timestamp"]);
//! ```

// ============================================================================
// Submodules
// ============================================================================

/// Built-in inspector protocol declarations.
mod declarations;

// ============================================================================
// Imports
// ============================================================================

use std::fmt;

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

// ============================================================================
// ValueType
// ============================================================================

/// Primitive type tag used to check positional arguments.
///
/// `null` and arrays report as [`ValueType::Object`], matching how the
/// protocol declarations describe structured values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ValueType {
    /// JSON string.
    String,
    /// JSON number (integer or float).
    Number,
    /// JSON boolean.
    Boolean,
    /// JSON object, array or null.
    Object,
    /// Absent positional argument; never a declared parameter type.
    #[serde(skip_deserializing)]
    Undefined,
}

impl ValueType {
    /// Returns the runtime type tag of a JSON value.
    #[must_use]
    pub fn of(value: &Value) -> Self {
        match value {
            Value::String(_) => Self::String,
            Value::Number(_) => Self::Number,
            Value::Bool(_) => Self::Boolean,
            Value::Null | Value::Array(_) | Value::Object(_) => Self::Object,
        }
    }

    /// Returns the lowercase tag name.
    #[inline]
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::String => "string",
            Self::Number => "number",
            Self::Boolean => "boolean",
            Self::Object => "object",
            Self::Undefined => "undefined",
        }
    }
}

impl fmt::Display for ValueType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// ParamSpec
// ============================================================================

/// A single declared command parameter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParamSpec {
    /// Field name in the outgoing `params` object.
    pub name: String,
    /// Declared type.
    pub value_type: ValueType,
    /// Whether the argument may be passed as absent.
    pub optional: bool,
}

impl ParamSpec {
    /// Creates a required parameter.
    #[inline]
    #[must_use]
    pub fn required(name: impl Into<String>, value_type: ValueType) -> Self {
        Self {
            name: name.into(),
            value_type,
            optional: false,
        }
    }

    /// Creates an optional parameter.
    #[inline]
    #[must_use]
    pub fn optional(name: impl Into<String>, value_type: ValueType) -> Self {
        Self {
            name: name.into(),
            value_type,
            optional: true,
        }
    }
}

impl fmt::Display for ParamSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let marker = if self.optional { "?" } else { "" };
        write!(f, "{}{}: {}", self.name, marker, self.value_type)
    }
}

// ============================================================================
// CommandSpec
// ============================================================================

/// Declared shape of a command request.
///
/// Parameter order is fixed at registration and defines positional
/// argument order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandSpec {
    /// Method name in `Domain.operation` form.
    pub name: String,
    /// Ordered parameters.
    pub params: Vec<ParamSpec>,
}

impl CommandSpec {
    /// Returns the parameter list formatted for diagnostics.
    #[must_use]
    pub fn describe_params(&self) -> String {
        self.params
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(", ")
    }

    /// Returns the number of required parameters.
    #[inline]
    #[must_use]
    pub fn required_count(&self) -> usize {
        self.params.iter().filter(|p| !p.optional).count()
    }
}

// ============================================================================
// SchemaRegistry
// ============================================================================

/// Registry of command parameter specs, reply shapes and event shapes.
///
/// Registration is last-write-wins. The backend only reads the registry
/// after it has been built.
#[derive(Debug, Clone, Default)]
pub struct SchemaRegistry {
    /// Command specs by method name.
    commands: FxHashMap<String, CommandSpec>,
    /// Ordered result field names by command.
    replies: FxHashMap<String, Vec<String>>,
    /// Ordered event field names by event.
    events: FxHashMap<String, Vec<String>>,
}

impl SchemaRegistry {
    /// Creates an empty registry.
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a command with its ordered parameters.
    pub fn register_command(&mut self, name: impl Into<String>, params: Vec<ParamSpec>) {
        let name = name.into();
        self.commands
            .insert(name.clone(), CommandSpec { name, params });
    }

    /// Registers the ordered result fields of a command.
    pub fn register_reply<I, S>(&mut self, name: impl Into<String>, fields: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.replies
            .insert(name.into(), fields.into_iter().map(Into::into).collect());
    }

    /// Registers the ordered fields of an event.
    pub fn register_event<I, S>(&mut self, name: impl Into<String>, fields: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.events
            .insert(name.into(), fields.into_iter().map(Into::into).collect());
    }

    /// Returns the command spec, if registered.
    #[inline]
    #[must_use]
    pub fn param_spec_for(&self, name: &str) -> Option<&CommandSpec> {
        self.commands.get(name)
    }

    /// Returns the ordered reply fields, if registered.
    #[inline]
    #[must_use]
    pub fn reply_fields_for(&self, name: &str) -> Option<&[String]> {
        self.replies.get(name).map(Vec::as_slice)
    }

    /// Returns the ordered event fields, if registered.
    #[inline]
    #[must_use]
    pub fn event_fields_for(&self, name: &str) -> Option<&[String]> {
        self.events.get(name).map(Vec::as_slice)
    }

    /// Returns `true` if the command is registered.
    #[inline]
    #[must_use]
    pub fn has_command(&self, name: &str) -> bool {
        self.commands.contains_key(name)
    }

    /// Returns the number of registered commands.
    #[inline]
    #[must_use]
    pub fn command_count(&self) -> usize {
        self.commands.len()
    }

    /// Returns the number of registered events.
    #[inline]
    #[must_use]
    pub fn event_count(&self) -> usize {
        self.events.len()
    }

    /// Iterates over registered command specs (unordered).
    pub fn commands(&self) -> impl Iterator<Item = &CommandSpec> {
        self.commands.values()
    }
}

// ============================================================================
// Built-in Declarations
// ============================================================================

/// Builds a registry holding the full inspector protocol declaration set.
#[must_use]
pub fn inspector_protocol() -> SchemaRegistry {
    let mut schema = SchemaRegistry::new();

    for (name, params) in declarations::COMMANDS {
        let params = params
            .iter()
            .map(|&(param, value_type, optional)| ParamSpec {
                name: param.to_string(),
                value_type,
                optional,
            })
            .collect();
        schema.register_command(*name, params);
    }

    for (name, fields) in declarations::REPLIES {
        schema.register_reply(*name, fields.iter().copied());
    }

    for (name, fields) in declarations::EVENTS {
        schema.register_event(*name, fields.iter().copied());
    }

    schema
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    use serde_json::json;

    #[test]
    fn test_value_type_of() {
        assert_eq!(ValueType::of(&json!("x")), ValueType::String);
        assert_eq!(ValueType::of(&json!(1.5)), ValueType::Number);
        assert_eq!(ValueType::of(&json!(3)), ValueType::Number);
        assert_eq!(ValueType::of(&json!(false)), ValueType::Boolean);
        assert_eq!(ValueType::of(&json!({})), ValueType::Object);
        assert_eq!(ValueType::of(&json!([1, 2])), ValueType::Object);
        assert_eq!(ValueType::of(&Value::Null), ValueType::Object);
    }

    #[test]
    fn test_value_type_serde() {
        let tag: ValueType = serde_json::from_str("\"boolean\"").expect("parse");
        assert_eq!(tag, ValueType::Boolean);
        assert_eq!(serde_json::to_string(&ValueType::Object).expect("ser"), "\"object\"");
        assert!(serde_json::from_str::<ValueType>("\"undefined\"").is_err());
        assert_eq!(ValueType::Undefined.to_string(), "undefined");
    }

    #[test]
    fn test_register_and_lookup() {
        let mut schema = SchemaRegistry::new();
        schema.register_command(
            "Page.open",
            vec![
                ParamSpec::required("url", ValueType::String),
                ParamSpec::optional("newWindow", ValueType::Boolean),
            ],
        );

        let spec = schema.param_spec_for("Page.open").expect("registered");
        assert_eq!(spec.params.len(), 2);
        assert_eq!(spec.required_count(), 1);
        assert_eq!(spec.describe_params(), "url: string, newWindow?: boolean");
        assert!(schema.param_spec_for("Page.close").is_none());
    }

    #[test]
    fn test_reregistration_overwrites() {
        let mut schema = SchemaRegistry::new();
        schema.register_reply("DOM.getDocument", ["root"]);
        schema.register_reply("DOM.getDocument", ["document", "extra"]);

        assert_eq!(
            schema.reply_fields_for("DOM.getDocument"),
            Some(&["document".to_string(), "extra".to_string()][..])
        );
    }

    #[test]
    fn test_inspector_protocol_declarations() {
        let schema = inspector_protocol();

        assert_eq!(schema.command_count(), 127);
        assert_eq!(schema.event_count(), 65);

        let evaluate = schema.param_spec_for("Runtime.evaluate").expect("declared");
        assert_eq!(evaluate.params[0], ParamSpec::required("expression", ValueType::String));
        assert!(evaluate.params[1..].iter().all(|p| p.optional));

        assert_eq!(
            schema.reply_fields_for("Runtime.evaluate"),
            Some(&["result".to_string(), "wasThrown".to_string()][..])
        );
        assert_eq!(
            schema.event_fields_for("Network.loadingFinished"),
            Some(&["requestId".to_string(), "timestamp".to_string()][..])
        );
        assert_eq!(schema.event_fields_for("Inspector.reset"), Some(&[][..]));
        assert!(schema.reply_fields_for("Page.enable").is_none());
    }
}
