use crate::tree::{Directory, Node};
use colored::Colorize;
use std::fmt::Write;

/// Renders `directory` as an ASCII tree rooted at `root_name`.
///
/// Directories are drawn in blue and files in green, e.g.
///
/// ```text
/// └── project_framework
///     └── scripts
///         ├── public
///         │   ├── index.html
/// ```
pub fn render(root_name: &str, directory: &Directory) -> String {
    let mut out = String::new();

    push_line(&mut out, "", true, &root_name.blue().to_string());
    render_children(&mut out, directory, "    ");

    out
}

fn render_children(out: &mut String, directory: &Directory, prefix: &str) {
    let len = directory.len();

    for (i, (name, node)) in directory.iter().enumerate() {
        let is_last = i == len - 1;

        let label = match node {
            Node::Directory(_) => name.blue(),
            Node::File(_) => name.green(),
        };
        push_line(out, prefix, is_last, &label.to_string());

        if let Node::Directory(children) = node {
            let child_prefix = if is_last {
                format!("{}    ", prefix)
            } else {
                format!("{}│   ", prefix)
            };
            render_children(out, children, &child_prefix);
        }
    }
}

fn push_line(out: &mut String, prefix: &str, is_last: bool, label: &str) {
    let connector = if is_last { "└── " } else { "├── " };

    // writing into a String cannot fail
    let _ = writeln!(out, "{}{}{}", prefix.yellow(), connector.yellow(), label);
}
