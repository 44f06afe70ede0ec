//! Component source rendering
//!
//! The output is assembled from independent pieces, one lookup per option
//! dimension, so each `(StyleVariant, PropShape)` pair renders without touching
//! the branches of the others.

use crate::request::{ComponentRequest, PropShape, StyleVariant};

const STYLED_WRAPPER: &str = "const Wrapper = styled.div`\n  color: black;\n`;\n";

/// Render the `.tsx` source for a component
pub fn component_template(request: &ComponentRequest) -> String {
    let name = request.name.as_str();
    let mut source = String::new();

    if let Some(import) = import_line(request.style, name) {
        source.push_str(&import);
        source.push_str("\n\n");
    }

    if let Some(props_type) = props_type(request.props) {
        source.push_str(props_type);
    }

    source.push_str(&format!(
        "export function {}({}) {{\n  return {};\n}}\n",
        name,
        props_param(request.props),
        wrapper(request.style, name, &content(request.props, name)),
    ));

    if let Some(trailer) = trailer(request.style) {
        source.push('\n');
        source.push_str(trailer);
    }

    source
}

fn import_line(style: StyleVariant, name: &str) -> Option<String> {
    match style {
        StyleVariant::None => None,
        StyleVariant::StyledComponent => Some(r#"import styled from "styled-components";"#.to_string()),
        StyleVariant::CssModule => Some(format!(r#"import styles from "./{}.module.css";"#, name)),
    }
}

fn wrapper(style: StyleVariant, name: &str, content: &str) -> String {
    match style {
        StyleVariant::None => format!("<div>{}</div>", content),
        StyleVariant::StyledComponent => format!("<Wrapper>{}</Wrapper>", content),
        StyleVariant::CssModule => format!("<div className={{styles.{}}}>{}</div>", name, content),
    }
}

/// Text after a blank line following the function body. CSS modules keep the
/// blank line with nothing after it.
fn trailer(style: StyleVariant) -> Option<&'static str> {
    match style {
        StyleVariant::StyledComponent => Some(STYLED_WRAPPER),
        StyleVariant::CssModule => Some(""),
        StyleVariant::None => None,
    }
}

fn props_type(props: PropShape) -> Option<&'static str> {
    match props {
        PropShape::None => None,
        PropShape::Example => Some("type Props = {\n  example: string;\n}\n"),
        PropShape::Children => Some("type Props = {\n  children: React.ReactNode;\n}\n"),
    }
}

fn props_param(props: PropShape) -> &'static str {
    match props {
        PropShape::None => "",
        PropShape::Example => "{ example }: Props",
        PropShape::Children => "{ children }: Props",
    }
}

fn content(props: PropShape, name: &str) -> String {
    match props {
        PropShape::None => name.to_string(),
        PropShape::Example => "{example}".to_string(),
        PropShape::Children => "{children}".to_string(),
    }
}
