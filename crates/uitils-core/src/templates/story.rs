//! Storybook story rendering

use std::path::Path;

/// Render a story file with a single `Default` case for the component
pub fn story_template(name: &str, component_file_path: &Path) -> String {
    format!(
        r#"import {{ {name} }} from "{path}";
import type {{ Meta, StoryObj }} from "@storybook/react";

const meta: Meta = {{
  component: {name},
}};

export default meta;

type Story = StoryObj<typeof {name}>;

const Template: Story = {{}};

export const Default: Story = {{
  ...Template,
}};
"#,
        name = name,
        path = import_path(component_file_path),
    )
}

/// Import specifiers always use forward slashes
fn import_path(path: &Path) -> String {
    path.to_string_lossy().replace('\\', "/")
}
