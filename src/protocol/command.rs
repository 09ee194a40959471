//! Statically typed command definitions.
//!
//! Each command binds its `Domain.operation` name to a serializable params
//! struct and a deserializable returns struct. Typed calls skip positional
//! validation; the returns struct is decoded from the declared reply fields.
//!
//! # Command Domains
//!
//! | Domain | Commands |
//! |--------|----------|
//! | `Page` | `enable`, `reload`, `open` |
//! | `Runtime` | `evaluate`, `getProperties`, `releaseObjectGroup` |
//! | `Console` | `enable` |
//! | `Network` | `enable`, `getResponseBody`, `setCacheDisabled` |
//! | `DOM` | `getDocument`, `querySelector`, `getOuterHTML` |
//! | `Debugger` | `enable`, `setBreakpointByUrl`, `setPauseOnExceptions` |

// ============================================================================
// Imports
// ============================================================================

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

// ============================================================================
// Command Trait
// ============================================================================

/// A protocol command with typed params and returns.
pub trait Command: Serialize {
    /// Method name in `Domain.operation` format.
    const METHOD: &'static str;

    /// Decoded reply.
    type Returns: DeserializeOwned + Send + 'static;
}

/// Returns of a command with no declared reply fields.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Empty {}

/// Declares a command with no parameters.
macro_rules! unit_command {
    ($(#[$doc:meta])* $name:ident => $method:literal) => {
        unit_command!($(#[$doc])* $name => $method, Empty);
    };
    ($(#[$doc:meta])* $name:ident => $method:literal, $returns:ty) => {
        $(#[$doc])*
        #[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
        pub struct $name;

        impl Command for $name {
            const METHOD: &'static str = $method;
            type Returns = $returns;
        }
    };
}

// ============================================================================
// Page Commands
// ============================================================================

unit_command!(
    /// Enables page domain notifications.
    PageEnable => "Page.enable"
);

/// Reloads the inspected page.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PageReload {
    /// Bypass the cache.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ignore_cache: Option<bool>,
    /// Script injected into every frame on load.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub script_to_evaluate_on_load: Option<String>,
}

impl Command for PageReload {
    const METHOD: &'static str = "Page.reload";
    type Returns = Empty;
}

/// Opens a URL in the inspected page or a new window.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PageOpen {
    /// URL to open.
    pub url: String,
    /// Open in a new window.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub new_window: Option<bool>,
}

impl Command for PageOpen {
    const METHOD: &'static str = "Page.open";
    type Returns = Empty;
}

// ============================================================================
// Runtime Commands
// ============================================================================

/// Evaluates an expression in the inspected page.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RuntimeEvaluate {
    /// Expression to evaluate.
    pub expression: String,
    /// Group the resulting remote object is released with.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub object_group: Option<String>,
    /// Expose the console command line API.
    #[serde(rename = "includeCommandLineAPI", skip_serializing_if = "Option::is_none")]
    pub include_command_line_api: Option<bool>,
    /// Do not pause on exceptions thrown by the expression.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub do_not_pause_on_exceptions: Option<bool>,
    /// Frame to evaluate in.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub frame_id: Option<String>,
    /// Return the result by value instead of as a remote object.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub return_by_value: Option<bool>,
}

impl RuntimeEvaluate {
    /// Creates an evaluation of `expression` with default options.
    #[inline]
    #[must_use]
    pub fn new(expression: impl Into<String>) -> Self {
        Self {
            expression: expression.into(),
            ..Default::default()
        }
    }
}

/// Result of an evaluation.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EvaluateResult {
    /// Remote object describing the result.
    pub result: Value,
    /// Whether the evaluation threw.
    #[serde(default)]
    pub was_thrown: bool,
}

impl Command for RuntimeEvaluate {
    const METHOD: &'static str = "Runtime.evaluate";
    type Returns = EvaluateResult;
}

/// Lists properties of a remote object.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RuntimeGetProperties {
    /// Remote object id.
    pub object_id: String,
    /// Only own properties.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub own_properties: Option<bool>,
}

/// Properties of a remote object.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Properties {
    /// Property descriptors.
    pub result: Vec<Value>,
}

impl Command for RuntimeGetProperties {
    const METHOD: &'static str = "Runtime.getProperties";
    type Returns = Properties;
}

/// Releases every remote object in a group.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RuntimeReleaseObjectGroup {
    /// Group name.
    pub object_group: String,
}

impl Command for RuntimeReleaseObjectGroup {
    const METHOD: &'static str = "Runtime.releaseObjectGroup";
    type Returns = Empty;
}

// ============================================================================
// Console Commands
// ============================================================================

unit_command!(
    /// Enables console message reporting.
    ConsoleEnable => "Console.enable"
);

// ============================================================================
// Network Commands
// ============================================================================

unit_command!(
    /// Enables network tracking.
    NetworkEnable => "Network.enable"
);

/// Fetches the body of a finished request.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NetworkGetResponseBody {
    /// Request identifier from network events.
    pub request_id: String,
}

/// Response body content.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResponseBody {
    /// Body content.
    pub body: String,
    /// Whether `body` is base64 encoded.
    #[serde(default)]
    pub base64_encoded: bool,
}

impl Command for NetworkGetResponseBody {
    const METHOD: &'static str = "Network.getResponseBody";
    type Returns = ResponseBody;
}

/// Toggles the browser cache.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NetworkSetCacheDisabled {
    /// Disable the cache.
    pub cache_disabled: bool,
}

impl Command for NetworkSetCacheDisabled {
    const METHOD: &'static str = "Network.setCacheDisabled";
    type Returns = Empty;
}

// ============================================================================
// DOM Commands
// ============================================================================

/// Document root node.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Document {
    /// Root node description.
    pub root: Value,
}

unit_command!(
    /// Requests the document root node.
    DomGetDocument => "DOM.getDocument", Document
);

/// Finds the first node matching a selector under `node_id`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DomQuerySelector {
    /// Node to query under.
    pub node_id: u64,
    /// CSS selector.
    pub selector: String,
}

/// A single node id reply.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NodeIdResult {
    /// Matching node id, 0 when nothing matched.
    pub node_id: u64,
}

impl Command for DomQuerySelector {
    const METHOD: &'static str = "DOM.querySelector";
    type Returns = NodeIdResult;
}

/// Fetches a node's outer HTML.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DomGetOuterHtml {
    /// Node id.
    pub node_id: u64,
}

/// Outer HTML of a node.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OuterHtml {
    /// Serialized markup.
    #[serde(rename = "outerHTML")]
    pub outer_html: String,
}

impl Command for DomGetOuterHtml {
    const METHOD: &'static str = "DOM.getOuterHTML";
    type Returns = OuterHtml;
}

// ============================================================================
// Debugger Commands
// ============================================================================

unit_command!(
    /// Enables the debugger.
    DebuggerEnable => "Debugger.enable"
);

/// Sets a breakpoint by script URL.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DebuggerSetBreakpointByUrl {
    /// Zero-based line number.
    pub line_number: u64,
    /// Script URL.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    /// Script URL pattern.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url_regex: Option<String>,
    /// Zero-based column number.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub column_number: Option<u64>,
    /// Breakpoint condition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub condition: Option<String>,
}

/// A breakpoint and where it resolved.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BreakpointSet {
    /// Breakpoint identifier.
    pub breakpoint_id: String,
    /// Resolved locations.
    #[serde(default)]
    pub locations: Vec<Value>,
}

impl Command for DebuggerSetBreakpointByUrl {
    const METHOD: &'static str = "Debugger.setBreakpointByUrl";
    type Returns = BreakpointSet;
}

/// Pause-on-exceptions state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PauseOnExceptionsState {
    /// Never pause.
    None,
    /// Pause on uncaught exceptions.
    Uncaught,
    /// Pause on every exception.
    All,
}

/// Sets the pause-on-exceptions state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DebuggerSetPauseOnExceptions {
    /// New state.
    pub state: PauseOnExceptionsState,
}

impl Command for DebuggerSetPauseOnExceptions {
    const METHOD: &'static str = "Debugger.setPauseOnExceptions";
    type Returns = Empty;
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    use serde_json::json;

    #[test]
    fn test_unit_command_serializes_to_null() {
        assert_eq!(serde_json::to_value(PageEnable).expect("ser"), Value::Null);
        assert_eq!(PageEnable::METHOD, "Page.enable");
    }

    #[test]
    fn test_evaluate_serialization() {
        let command = RuntimeEvaluate {
            include_command_line_api: Some(true),
            ..RuntimeEvaluate::new("1 + 1")
        };
        let value = serde_json::to_value(&command).expect("ser");
        assert_eq!(
            value,
            json!({"expression": "1 + 1", "includeCommandLineAPI": true})
        );
    }

    #[test]
    fn test_set_breakpoint_serialization() {
        let command = DebuggerSetBreakpointByUrl {
            line_number: 10,
            url: Some("app.js".into()),
            ..Default::default()
        };
        let value = serde_json::to_value(&command).expect("ser");
        assert_eq!(value, json!({"lineNumber": 10, "url": "app.js"}));
    }

    #[test]
    fn test_pause_state_serialization() {
        let command = DebuggerSetPauseOnExceptions {
            state: PauseOnExceptionsState::Uncaught,
        };
        let value = serde_json::to_value(command).expect("ser");
        assert_eq!(value, json!({"state": "uncaught"}));
    }

    #[test]
    fn test_returns_deserialization() {
        let result: EvaluateResult =
            serde_json::from_value(json!({"result": {"type": "number", "value": 2}}))
                .expect("parse");
        assert!(!result.was_thrown);

        let html: OuterHtml =
            serde_json::from_value(json!({"outerHTML": "<p></p>"})).expect("parse");
        assert_eq!(html.outer_html, "<p></p>");

        let empty: Empty = serde_json::from_value(json!({})).expect("parse");
        assert_eq!(empty, Empty {});
    }
}
