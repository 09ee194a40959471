//! Inspector protocol declaration set.
//!
//! One entry per command, reply shape and event shape known to the
//! inspector backend. Parameter order is positional argument order.

// ============================================================================
// Imports
// ============================================================================

use super::ValueType;
use super::ValueType::{Boolean as Bool, Number as Num, Object as Obj, String as Str};

// ============================================================================
// Types
// ============================================================================

/// A declared parameter: name, type and `optional` flag.
pub(crate) type ParamDecl = (&'static str, ValueType, bool);

/// A declared command: method name and ordered parameters.
pub(crate) type CommandDecl = (&'static str, &'static [ParamDecl]);

/// A declared field list (reply or event shape).
pub(crate) type FieldsDecl = (&'static str, &'static [&'static str]);

const REQ: bool = false;
const OPT: bool = true;

// ============================================================================
// Commands
// ============================================================================

#[rustfmt::skip]
pub(crate) const COMMANDS: &[CommandDecl] = &[
    ("Page.enable", &[]),
    ("Page.disable", &[]),
    ("Page.addScriptToEvaluateOnLoad", &[("scriptSource", Str, REQ)]),
    ("Page.removeScriptToEvaluateOnLoad", &[("identifier", Str, REQ)]),
    ("Page.reload", &[("ignoreCache", Bool, OPT), ("scriptToEvaluateOnLoad", Str, OPT)]),
    ("Page.open", &[("url", Str, REQ), ("newWindow", Bool, OPT)]),
    ("Page.getCookies", &[]),
    ("Page.deleteCookie", &[("cookieName", Str, REQ), ("domain", Str, REQ)]),
    ("Page.getResourceTree", &[]),
    ("Page.getResourceContent", &[("frameId", Str, REQ), ("url", Str, REQ)]),
    ("Page.searchInResource", &[("frameId", Str, REQ), ("url", Str, REQ), ("query", Str, REQ), ("caseSensitive", Bool, OPT), ("isRegex", Bool, OPT)]),
    ("Page.searchInResources", &[("text", Str, REQ), ("caseSensitive", Bool, OPT), ("isRegex", Bool, OPT)]),
    ("Runtime.evaluate", &[("expression", Str, REQ), ("objectGroup", Str, OPT), ("includeCommandLineAPI", Bool, OPT), ("doNotPauseOnExceptions", Bool, OPT), ("frameId", Str, OPT), ("returnByValue", Bool, OPT)]),
    ("Runtime.callFunctionOn", &[("objectId", Str, REQ), ("functionDeclaration", Str, REQ), ("arguments", Obj, OPT), ("returnByValue", Bool, OPT)]),
    ("Runtime.getProperties", &[("objectId", Str, REQ), ("ownProperties", Bool, OPT)]),
    ("Runtime.releaseObject", &[("objectId", Str, REQ)]),
    ("Runtime.releaseObjectGroup", &[("objectGroup", Str, REQ)]),
    ("Runtime.run", &[]),
    ("Console.enable", &[]),
    ("Console.disable", &[]),
    ("Console.clearMessages", &[]),
    ("Console.setMonitoringXHREnabled", &[("enabled", Bool, REQ)]),
    ("Console.addInspectedNode", &[("nodeId", Num, REQ)]),
    ("Network.enable", &[]),
    ("Network.disable", &[]),
    ("Network.setUserAgentOverride", &[("userAgent", Str, REQ)]),
    ("Network.setExtraHTTPHeaders", &[("headers", Obj, REQ)]),
    ("Network.getResponseBody", &[("requestId", Str, REQ)]),
    ("Network.clearBrowserCache", &[]),
    ("Network.clearBrowserCookies", &[]),
    ("Network.setCacheDisabled", &[("cacheDisabled", Bool, REQ)]),
    ("Database.enable", &[]),
    ("Database.disable", &[]),
    ("Database.getDatabaseTableNames", &[("databaseId", Num, REQ)]),
    ("Database.executeSQL", &[("databaseId", Num, REQ), ("query", Str, REQ)]),
    ("DOMStorage.enable", &[]),
    ("DOMStorage.disable", &[]),
    ("DOMStorage.getDOMStorageEntries", &[("storageId", Num, REQ)]),
    ("DOMStorage.setDOMStorageItem", &[("storageId", Num, REQ), ("key", Str, REQ), ("value", Str, REQ)]),
    ("DOMStorage.removeDOMStorageItem", &[("storageId", Num, REQ), ("key", Str, REQ)]),
    ("ApplicationCache.getFramesWithManifests", &[]),
    ("ApplicationCache.enable", &[]),
    ("ApplicationCache.getManifestForFrame", &[("frameId", Str, REQ)]),
    ("ApplicationCache.getApplicationCacheForFrame", &[("frameId", Str, REQ)]),
    ("DOM.getDocument", &[]),
    ("DOM.requestChildNodes", &[("nodeId", Num, REQ)]),
    ("DOM.querySelector", &[("nodeId", Num, REQ), ("selector", Str, REQ)]),
    ("DOM.querySelectorAll", &[("nodeId", Num, REQ), ("selector", Str, REQ)]),
    ("DOM.setNodeName", &[("nodeId", Num, REQ), ("name", Str, REQ)]),
    ("DOM.setNodeValue", &[("nodeId", Num, REQ), ("value", Str, REQ)]),
    ("DOM.removeNode", &[("nodeId", Num, REQ)]),
    ("DOM.setAttributeValue", &[("nodeId", Num, REQ), ("name", Str, REQ), ("value", Str, REQ)]),
    ("DOM.setAttributesAsText", &[("nodeId", Num, REQ), ("text", Str, REQ), ("name", Str, OPT)]),
    ("DOM.removeAttribute", &[("nodeId", Num, REQ), ("name", Str, REQ)]),
    ("DOM.getEventListenersForNode", &[("nodeId", Num, REQ)]),
    ("DOM.copyNode", &[("nodeId", Num, REQ)]),
    ("DOM.getOuterHTML", &[("nodeId", Num, REQ)]),
    ("DOM.setOuterHTML", &[("nodeId", Num, REQ), ("outerHTML", Str, REQ)]),
    ("DOM.performSearch", &[("query", Str, REQ)]),
    ("DOM.getSearchResults", &[("searchId", Str, REQ), ("fromIndex", Num, REQ), ("toIndex", Num, REQ)]),
    ("DOM.discardSearchResults", &[("searchId", Str, REQ)]),
    ("DOM.requestNode", &[("objectId", Str, REQ)]),
    ("DOM.setInspectModeEnabled", &[("enabled", Bool, REQ), ("highlightConfig", Obj, OPT)]),
    ("DOM.highlightRect", &[("x", Num, REQ), ("y", Num, REQ), ("width", Num, REQ), ("height", Num, REQ), ("color", Obj, OPT), ("outlineColor", Obj, OPT)]),
    ("DOM.highlightNode", &[("nodeId", Num, REQ), ("highlightConfig", Obj, REQ)]),
    ("DOM.hideHighlight", &[]),
    ("DOM.highlightFrame", &[("frameId", Str, REQ), ("contentColor", Obj, OPT), ("contentOutlineColor", Obj, OPT)]),
    ("DOM.pushNodeByPathToFrontend", &[("path", Str, REQ)]),
    ("DOM.resolveNode", &[("nodeId", Num, REQ), ("objectGroup", Str, OPT)]),
    ("DOM.getAttributes", &[("nodeId", Num, REQ)]),
    ("DOM.moveTo", &[("nodeId", Num, REQ), ("targetNodeId", Num, REQ), ("insertBeforeNodeId", Num, OPT)]),
    ("CSS.getStylesForNode", &[("nodeId", Num, REQ), ("forcedPseudoClasses", Obj, OPT)]),
    ("CSS.getComputedStyleForNode", &[("nodeId", Num, REQ)]),
    ("CSS.getInlineStyleForNode", &[("nodeId", Num, REQ)]),
    ("CSS.getAllStyleSheets", &[]),
    ("CSS.getStyleSheet", &[("styleSheetId", Str, REQ)]),
    ("CSS.getStyleSheetText", &[("styleSheetId", Str, REQ)]),
    ("CSS.setStyleSheetText", &[("styleSheetId", Str, REQ), ("text", Str, REQ)]),
    ("CSS.setPropertyText", &[("styleId", Obj, REQ), ("propertyIndex", Num, REQ), ("text", Str, REQ), ("overwrite", Bool, REQ)]),
    ("CSS.toggleProperty", &[("styleId", Obj, REQ), ("propertyIndex", Num, REQ), ("disable", Bool, REQ)]),
    ("CSS.setRuleSelector", &[("ruleId", Obj, REQ), ("selector", Str, REQ)]),
    ("CSS.addRule", &[("contextNodeId", Num, REQ), ("selector", Str, REQ)]),
    ("CSS.getSupportedCSSProperties", &[]),
    ("Timeline.start", &[("maxCallStackDepth", Num, OPT)]),
    ("Timeline.stop", &[]),
    ("Debugger.getCapabilities", &[]),
    ("Debugger.enable", &[]),
    ("Debugger.disable", &[]),
    ("Debugger.setBreakpointsActive", &[("active", Bool, REQ)]),
    ("Debugger.setBreakpointByUrl", &[("lineNumber", Num, REQ), ("url", Str, OPT), ("urlRegex", Str, OPT), ("columnNumber", Num, OPT), ("condition", Str, OPT)]),
    ("Debugger.setBreakpoint", &[("location", Obj, REQ), ("condition", Str, OPT)]),
    ("Debugger.removeBreakpoint", &[("breakpointId", Str, REQ)]),
    ("Debugger.continueToLocation", &[("location", Obj, REQ)]),
    ("Debugger.stepOver", &[]),
    ("Debugger.stepInto", &[]),
    ("Debugger.stepOut", &[]),
    ("Debugger.pause", &[]),
    ("Debugger.resume", &[]),
    ("Debugger.searchInContent", &[("scriptId", Str, REQ), ("query", Str, REQ), ("caseSensitive", Bool, OPT), ("isRegex", Bool, OPT)]),
    ("Debugger.setScriptSource", &[("scriptId", Str, REQ), ("scriptSource", Str, REQ), ("preview", Bool, OPT)]),
    ("Debugger.getScriptSource", &[("scriptId", Str, REQ)]),
    ("Debugger.getFunctionLocation", &[("functionId", Str, REQ)]),
    ("Debugger.setPauseOnExceptions", &[("state", Str, REQ)]),
    ("Debugger.evaluateOnCallFrame", &[("callFrameId", Str, REQ), ("expression", Str, REQ), ("objectGroup", Str, OPT), ("includeCommandLineAPI", Bool, OPT), ("returnByValue", Bool, OPT)]),
    ("DOMDebugger.setDOMBreakpoint", &[("nodeId", Num, REQ), ("type", Str, REQ)]),
    ("DOMDebugger.removeDOMBreakpoint", &[("nodeId", Num, REQ), ("type", Str, REQ)]),
    ("DOMDebugger.setEventListenerBreakpoint", &[("eventName", Str, REQ)]),
    ("DOMDebugger.removeEventListenerBreakpoint", &[("eventName", Str, REQ)]),
    ("DOMDebugger.setXHRBreakpoint", &[("url", Str, REQ)]),
    ("DOMDebugger.removeXHRBreakpoint", &[("url", Str, REQ)]),
    ("Profiler.enable", &[]),
    ("Profiler.disable", &[]),
    ("Profiler.isEnabled", &[]),
    ("Profiler.start", &[]),
    ("Profiler.stop", &[]),
    ("Profiler.getProfileHeaders", &[]),
    ("Profiler.getProfile", &[("type", Str, REQ), ("uid", Num, REQ)]),
    ("Profiler.removeProfile", &[("type", Str, REQ), ("uid", Num, REQ)]),
    ("Profiler.clearProfiles", &[]),
    ("Profiler.takeHeapSnapshot", &[]),
    ("Profiler.collectGarbage", &[]),
    ("Profiler.getObjectByHeapObjectId", &[("objectId", Num, REQ)]),
    ("Worker.setWorkerInspectionEnabled", &[("value", Bool, REQ)]),
    ("Worker.sendMessageToWorker", &[("workerId", Num, REQ), ("message", Obj, REQ)]),
    ("Worker.connectToWorker", &[("workerId", Num, REQ)]),
    ("Worker.disconnectFromWorker", &[("workerId", Num, REQ)]),
    ("Worker.setAutoconnectToWorkers", &[("value", Bool, REQ)]),
];

// ============================================================================
// Reply Shapes
// ============================================================================

#[rustfmt::skip]
pub(crate) const REPLIES: &[FieldsDecl] = &[
    ("Page.addScriptToEvaluateOnLoad", &["identifier"]),
    ("Page.getCookies", &["cookies", "cookiesString"]),
    ("Page.getResourceTree", &["frameTree"]),
    ("Page.getResourceContent", &["content", "base64Encoded"]),
    ("Page.searchInResource", &["result"]),
    ("Page.searchInResources", &["result"]),
    ("Runtime.evaluate", &["result", "wasThrown"]),
    ("Runtime.callFunctionOn", &["result", "wasThrown"]),
    ("Runtime.getProperties", &["result"]),
    ("Network.getResponseBody", &["body", "base64Encoded"]),
    ("Database.getDatabaseTableNames", &["tableNames"]),
    ("Database.executeSQL", &["success", "transactionId"]),
    ("DOMStorage.getDOMStorageEntries", &["entries"]),
    ("DOMStorage.setDOMStorageItem", &["success"]),
    ("DOMStorage.removeDOMStorageItem", &["success"]),
    ("ApplicationCache.getFramesWithManifests", &["frameIds"]),
    ("ApplicationCache.getManifestForFrame", &["manifestURL"]),
    ("ApplicationCache.getApplicationCacheForFrame", &["applicationCache"]),
    ("DOM.getDocument", &["root"]),
    ("DOM.querySelector", &["nodeId"]),
    ("DOM.querySelectorAll", &["nodeIds"]),
    ("DOM.setNodeName", &["nodeId"]),
    ("DOM.getEventListenersForNode", &["listeners"]),
    ("DOM.getOuterHTML", &["outerHTML"]),
    ("DOM.setOuterHTML", &["nodeId"]),
    ("DOM.performSearch", &["searchId", "resultCount"]),
    ("DOM.getSearchResults", &["nodeIds"]),
    ("DOM.requestNode", &["nodeId"]),
    ("DOM.pushNodeByPathToFrontend", &["nodeId"]),
    ("DOM.resolveNode", &["object"]),
    ("DOM.getAttributes", &["attributes"]),
    ("DOM.moveTo", &["nodeId"]),
    ("CSS.getStylesForNode", &["styles"]),
    ("CSS.getComputedStyleForNode", &["style"]),
    ("CSS.getInlineStyleForNode", &["style"]),
    ("CSS.getAllStyleSheets", &["headers"]),
    ("CSS.getStyleSheet", &["styleSheet"]),
    ("CSS.getStyleSheetText", &["text"]),
    ("CSS.setPropertyText", &["style"]),
    ("CSS.toggleProperty", &["style"]),
    ("CSS.setRuleSelector", &["rule"]),
    ("CSS.addRule", &["rule"]),
    ("CSS.getSupportedCSSProperties", &["cssProperties"]),
    ("Debugger.getCapabilities", &["capabilities"]),
    ("Debugger.setBreakpointByUrl", &["breakpointId", "locations"]),
    ("Debugger.setBreakpoint", &["breakpointId", "actualLocation"]),
    ("Debugger.searchInContent", &["result"]),
    ("Debugger.setScriptSource", &["callFrames", "result"]),
    ("Debugger.getScriptSource", &["scriptSource"]),
    ("Debugger.getFunctionLocation", &["location"]),
    ("Debugger.evaluateOnCallFrame", &["result", "wasThrown"]),
    ("Profiler.isEnabled", &["state"]),
    ("Profiler.getProfileHeaders", &["headers"]),
    ("Profiler.getProfile", &["profile"]),
    ("Profiler.getObjectByHeapObjectId", &["result"]),
];

// ============================================================================
// Event Shapes
// ============================================================================

#[rustfmt::skip]
pub(crate) const EVENTS: &[FieldsDecl] = &[
    ("Inspector.frontendReused", &[]),
    ("Inspector.bringToFront", &[]),
    ("Inspector.disconnectFromBackend", &[]),
    ("Inspector.reset", &[]),
    ("Inspector.showPanel", &["panel"]),
    ("Inspector.startUserInitiatedDebugging", &[]),
    ("Inspector.evaluateForTestInFrontend", &["testCallId", "script"]),
    ("Inspector.inspect", &["object", "hints"]),
    ("Inspector.didCreateWorker", &["id", "url", "isShared"]),
    ("Inspector.didDestroyWorker", &["id"]),
    ("Page.domContentEventFired", &["timestamp"]),
    ("Page.loadEventFired", &["timestamp"]),
    ("Page.frameNavigated", &["frame", "loaderId"]),
    ("Page.frameDetached", &["frameId"]),
    ("Console.messageAdded", &["message"]),
    ("Console.messageRepeatCountUpdated", &["count"]),
    ("Console.messagesCleared", &[]),
    ("Network.requestWillBeSent", &["requestId", "frameId", "loaderId", "documentURL", "request", "timestamp", "initiator", "stackTrace", "redirectResponse"]),
    ("Network.requestServedFromCache", &["requestId"]),
    ("Network.responseReceived", &["requestId", "timestamp", "type", "response"]),
    ("Network.dataReceived", &["requestId", "timestamp", "dataLength", "encodedDataLength"]),
    ("Network.loadingFinished", &["requestId", "timestamp"]),
    ("Network.loadingFailed", &["requestId", "timestamp", "errorText", "canceled"]),
    ("Network.requestServedFromMemoryCache", &["requestId", "frameId", "loaderId", "documentURL", "timestamp", "initiator", "resource"]),
    ("Network.webSocketWillSendHandshakeRequest", &["requestId", "timestamp", "request"]),
    ("Network.webSocketHandshakeResponseReceived", &["requestId", "timestamp", "response"]),
    ("Network.webSocketCreated", &["requestId", "url"]),
    ("Network.webSocketClosed", &["requestId", "timestamp"]),
    ("Database.addDatabase", &["database"]),
    ("Database.sqlTransactionSucceeded", &["transactionId", "columnNames", "values"]),
    ("Database.sqlTransactionFailed", &["transactionId", "sqlError"]),
    ("DOMStorage.addDOMStorage", &["storage"]),
    ("DOMStorage.updateDOMStorage", &["storageId"]),
    ("ApplicationCache.applicationCacheStatusUpdated", &["frameId", "manifestURL", "status"]),
    ("ApplicationCache.networkStateUpdated", &["isNowOnline"]),
    ("DOM.documentUpdated", &[]),
    ("DOM.setChildNodes", &["parentId", "nodes"]),
    ("DOM.attributeModified", &["nodeId", "name", "value"]),
    ("DOM.attributeRemoved", &["nodeId", "name"]),
    ("DOM.inlineStyleInvalidated", &["nodeIds"]),
    ("DOM.characterDataModified", &["nodeId", "characterData"]),
    ("DOM.childNodeCountUpdated", &["nodeId", "childNodeCount"]),
    ("DOM.childNodeInserted", &["parentNodeId", "previousNodeId", "node"]),
    ("DOM.childNodeRemoved", &["parentNodeId", "nodeId"]),
    ("Timeline.started", &[]),
    ("Timeline.stopped", &[]),
    ("Timeline.eventRecorded", &["record"]),
    ("Debugger.debuggerWasEnabled", &[]),
    ("Debugger.debuggerWasDisabled", &[]),
    ("Debugger.scriptParsed", &["scriptId", "url", "startLine", "startColumn", "endLine", "endColumn", "isContentScript"]),
    ("Debugger.scriptFailedToParse", &["url", "scriptSource", "startLine", "errorLine", "errorMessage"]),
    ("Debugger.breakpointResolved", &["breakpointId", "location"]),
    ("Debugger.paused", &["callFrames", "reason", "data"]),
    ("Debugger.resumed", &[]),
    ("Profiler.profilerWasEnabled", &[]),
    ("Profiler.profilerWasDisabled", &[]),
    ("Profiler.addProfileHeader", &["header"]),
    ("Profiler.addHeapSnapshotChunk", &["uid", "chunk"]),
    ("Profiler.finishHeapSnapshot", &["uid"]),
    ("Profiler.setRecordingProfile", &["isProfiling"]),
    ("Profiler.resetProfiles", &[]),
    ("Profiler.reportHeapSnapshotProgress", &["done", "total"]),
    ("Worker.workerCreated", &["workerId", "url", "inspectorConnected"]),
    ("Worker.workerTerminated", &["workerId"]),
    ("Worker.dispatchMessageFromWorker", &["workerId", "message"]),
];
