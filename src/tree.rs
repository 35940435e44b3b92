use indexmap::IndexMap;
use std::{
    fmt,
    path::{Path, PathBuf},
};

/// A single entry of a tree to be written to disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    /// A folder holding named children.
    Directory(Directory),
    /// A file holding its full initial contents.
    File(String),
}
impl Node {
    pub fn is_file(&self) -> bool {
        matches!(self, Self::File(_))
    }
}

/// Named children of a directory, kept in insertion order.
///
/// The order only decides which sibling is created first; siblings are independent of each
/// other on disk.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Directory(pub IndexMap<String, Node>);
impl Directory {
    pub fn new() -> Self {
        Self(IndexMap::new())
    }

    pub fn with_dir(mut self, name: impl Into<String>, directory: Directory) -> Self {
        self.0.insert(name.into(), Node::Directory(directory));
        self
    }

    pub fn with_file(mut self, name: impl Into<String>, contents: impl Into<String>) -> Self {
        self.0.insert(name.into(), Node::File(contents.into()));
        self
    }

    /// Shorthand for a file with no contents.
    pub fn with_empty_file(self, name: impl Into<String>) -> Self {
        self.with_file(name, "")
    }

    pub fn get(&self, name: &str) -> Option<&Node> {
        self.0.get(name)
    }

    pub fn iter(&self) -> indexmap::map::Iter<'_, String, Node> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Lists every node below this directory together with its path relative to it.
    ///
    /// The walk is depth-first and top-down: a directory always comes before its children,
    /// which is the same order the materializer creates them in.
    pub fn entries(&self) -> Vec<(PathBuf, &Node)> {
        let mut entries = Vec::new();
        collect_entries(Path::new(""), self, &mut entries);
        entries
    }

    /// Counts the directories and files below this directory.
    pub fn count(&self) -> Summary {
        let mut summary = Summary::default();
        for (_, node) in self.entries() {
            summary.record(node);
        }
        summary
    }
}
impl<K: Into<String>> FromIterator<(K, Node)> for Directory {
    fn from_iter<I: IntoIterator<Item = (K, Node)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(name, node)| (name.into(), node))
                .collect(),
        )
    }
}

fn collect_entries<'a>(
    prefix: &Path,
    directory: &'a Directory,
    out: &mut Vec<(PathBuf, &'a Node)>,
) {
    for (name, node) in directory.iter() {
        let path = prefix.join(name);
        out.push((path.clone(), node));
        if let Node::Directory(children) = node {
            collect_entries(&path, children, out);
        }
    }
}

/// Number of directories and files, either in a tree or written during a run.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Summary {
    pub directories: usize,
    pub files: usize,
}
impl Summary {
    pub fn record(&mut self, node: &Node) {
        match node {
            Node::Directory(_) => self.directories += 1,
            Node::File(_) => self.files += 1,
        }
    }
}
impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} directories, {} files", self.directories, self.files)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Directory {
        Directory::new()
            .with_dir(
                "a",
                Directory::new()
                    .with_dir("b", Directory::new().with_empty_file("c"))
                    .with_file("notes.txt", "hello"),
            )
            .with_dir("empty", Directory::new())
    }

    #[test]
    fn test_entries_are_top_down_depth_first() {
        let tree = sample();
        let paths: Vec<PathBuf> = tree.entries().into_iter().map(|(p, _)| p).collect();

        assert_eq!(
            paths,
            vec![
                PathBuf::from("a"),
                PathBuf::from("a").join("b"),
                PathBuf::from("a").join("b").join("c"),
                PathBuf::from("a").join("notes.txt"),
                PathBuf::from("empty"),
            ]
        );
    }

    #[test]
    fn test_count() {
        let summary = sample().count();

        assert_eq!(
            summary,
            Summary {
                directories: 3,
                files: 2
            }
        );
        assert_eq!(summary.to_string(), "3 directories, 2 files");
    }

    #[test]
    fn test_duplicate_names_keep_a_single_entry() {
        let tree = Directory::new()
            .with_empty_file("index.ts")
            .with_file("index.ts", "export {}");

        assert_eq!(tree.entries().len(), 1);
        assert_eq!(tree.get("index.ts"), Some(&Node::File("export {}".into())));
    }

    #[test]
    fn test_from_iterator() {
        let tree: Directory = [
            ("src", Node::Directory(Directory::new())),
            ("README.md", Node::File(String::new())),
        ]
        .into_iter()
        .collect();

        assert!(!tree.get("src").map(Node::is_file).unwrap_or(true));
        assert!(tree.get("README.md").map(Node::is_file).unwrap_or(false));
    }
}
