//! Tool picker naming shared between the DOM and the board.

use roughboard_core::ToolKind;

/// `name` attribute shared by the tool radio buttons.
pub const TOOL_GROUP: &str = "roughboard-tool";

const RADIO_PREFIX: &str = "tool-";

/// Element id of the radio button for a tool.
pub fn radio_id(tool: ToolKind) -> String {
    format!("{RADIO_PREFIX}{}", tool.name())
}

/// Tool behind a radio button id.
pub fn tool_for_radio(id: &str) -> Option<ToolKind> {
    id.strip_prefix(RADIO_PREFIX)?.parse().ok()
}
