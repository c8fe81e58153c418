use crate::bookmarks::{folder_segments, KeeperBookmark};

/// A folder of exported bookmarks.
///
/// Subfolders are kept in the order in which they were inserted first.
#[derive(Debug, Default, PartialEq)]
pub struct FolderNode<'a> {
    pub name: String,
    pub children: Vec<FolderNode<'a>>,
    pub bookmarks: Vec<&'a KeeperBookmark>,
}

impl<'a> FolderNode<'a> {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_owned(),
            children: Vec::new(),
            bookmarks: Vec::new(),
        }
    }

    /// Build the folder tree for the given bookmarks. The returned node is the
    /// unnamed root folder.
    pub fn build(bookmarks: &'a [KeeperBookmark]) -> Self {
        let mut root = Self::default();

        for bookmark in bookmarks {
            root.insert(bookmark);
        }

        root
    }

    /// Insert a bookmark into the folder given by its folder path, creating
    /// missing folders.
    pub fn insert(&mut self, bookmark: &'a KeeperBookmark) {
        let folder_path = bookmark.folder_path.as_deref().unwrap_or_default();
        let mut folder = self;

        for segment in folder_segments(folder_path) {
            folder = folder.child_mut(segment);
        }

        folder.bookmarks.push(bookmark);
    }

    /// Remove a direct subfolder by name.
    pub fn take_child(&mut self, name: &str) -> Option<FolderNode<'a>> {
        let position = self.children.iter().position(|child| child.name == name)?;
        Some(self.children.remove(position))
    }

    fn child_mut(&mut self, name: &str) -> &mut FolderNode<'a> {
        let position = match self.children.iter().position(|child| child.name == name) {
            Some(position) => position,
            None => {
                self.children.push(FolderNode::new(name));
                self.children.len() - 1
            }
        };

        &mut self.children[position]
    }
}
