use super::*;

#[test]
fn active_tool_uses_default_variant() {
    assert_eq!(tool_button_class(true), "tool-button tool-button--default");
}

#[test]
fn inactive_tool_uses_outline_variant() {
    assert_eq!(tool_button_class(false), "tool-button tool-button--outline");
}

#[test]
fn tools_listed_pencil_first() {
    assert_eq!(TOOLS, [Tool::Pencil, Tool::Eraser]);
    assert_eq!(TOOLS.map(Tool::label), ["Pencil", "Eraser"]);
}
