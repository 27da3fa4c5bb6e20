use log::debug;

use crate::{Directory, File, Node, Permissions, Vfs, VfsError, VfsPath, VfsResult};

/// The whole tree, owned from the root down.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tree {
    root: Node,
}

impl Default for Tree {
    fn default() -> Self {
        Self::new()
    }
}

impl Tree {
    /// An empty root directory.
    pub fn new() -> Self {
        Self::from_root(Directory::new())
    }

    pub fn from_root(root: Directory) -> Self {
        Self { root: Node::Directory(root) }
    }

    /// The layout the shell starts with when no tree image is given.
    pub fn default_layout() -> Self {
        let user = Directory::new()
            .with_child("documents", Directory::new())
            .with_child("photos", Directory::new());

        let etc = Directory::new()
            .with_child(
                "config.txt",
                File::new("# system configuration\nhostname=vfs\nshell=/bin/vfs-shell\nlocale=en_US.UTF-8\n", 1024),
            )
            .with_child("settings.ini", File::new("[display]\ncolor=true\n\n[history]\nsize=500\n", 512));

        let readme = File::new(
            "Welcome to the virtual filesystem.\n\
             Everything here lives in memory.\n\
             Commands: ls, cd, head, date, cp, rmdir, chmod, exit.\n\
             Use 'ls -l' to see permissions and sizes.\n\
             Changes are lost when the session ends.\n",
            2048,
        );

        Self::from_root(
            Directory::new()
                .with_child("home", Directory::new().with_child("user", user))
                .with_child("etc", etc)
                .with_child("readme.txt", readme),
        )
    }

    pub fn root(&self) -> &Directory {
        match &self.root {
            Node::Directory(dir) => dir,
            Node::File(_) => unreachable!("tree root is always a directory"),
        }
    }

    fn dir_mut(&mut self, path: &VfsPath) -> VfsResult<&mut Directory> {
        match self.lookup_mut(path) {
            Some(Node::Directory(dir)) => Ok(dir),
            Some(Node::File(_)) => Err(VfsError::NotADirectory(path.to_string())),
            None => Err(VfsError::NotFound(path.to_string())),
        }
    }
}

impl Vfs for Tree {
    fn lookup(&self, path: &VfsPath) -> Option<&Node> {
        let mut node = &self.root;
        for segment in path.segments() {
            node = node.as_dir()?.get(segment)?;
        }
        Some(node)
    }

    fn lookup_mut(&mut self, path: &VfsPath) -> Option<&mut Node> {
        let mut node = &mut self.root;
        for segment in path.segments() {
            node = node.as_dir_mut()?.get_mut(segment)?;
        }
        Some(node)
    }

    fn copy_file(&mut self, src: &VfsPath, dst: &VfsPath) -> VfsResult<()> {
        let file = self.file(src)?.clone();
        let name = dst.file_name().ok_or_else(|| VfsError::InvalidDestination(dst.to_string()))?;
        let parent = self.dir_mut(&dst.parent().unwrap_or_default())?;
        if parent.contains(name) {
            return Err(VfsError::AlreadyExists(dst.to_string()));
        }
        parent.insert(name, Node::File(file))?;
        debug!("copied {src} to {dst}");
        Ok(())
    }

    fn remove_dir(&mut self, path: &VfsPath) -> VfsResult<()> {
        let name = path.file_name().ok_or(VfsError::RootRemoval)?;
        let parent = self.dir_mut(&path.parent().unwrap_or_default())?;
        match parent.get(name) {
            None => return Err(VfsError::NotFound(path.to_string())),
            Some(Node::File(_)) => return Err(VfsError::NotADirectory(path.to_string())),
            Some(Node::Directory(dir)) if !dir.is_empty() => {
                return Err(VfsError::DirectoryNotEmpty(path.to_string()));
            }
            Some(Node::Directory(_)) => {}
        }
        parent.remove(name);
        debug!("removed directory {path}");
        Ok(())
    }

    fn set_permissions(&mut self, path: &VfsPath, perms: Permissions) -> VfsResult<()> {
        let node = self.lookup_mut(path).ok_or_else(|| VfsError::NotFound(path.to_string()))?;
        node.set_permissions(perms);
        debug!("set permissions of {path} to {perms}");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn p(raw: &str) -> VfsPath {
        VfsPath::parse(raw)
    }

    fn names(dir: &Directory) -> Vec<&str> {
        dir.entries().map(|(name, _)| name).collect()
    }

    #[test]
    fn default_layout_order() {
        let tree = Tree::default_layout();
        assert_eq!(names(tree.root()), ["home", "etc", "readme.txt"]);
        assert_eq!(names(tree.directory(&p("/etc")).unwrap()), ["config.txt", "settings.ini"]);
        assert_eq!(names(tree.directory(&p("/home/user")).unwrap()), ["documents", "photos"]);
        assert_eq!(tree.file(&p("/readme.txt")).unwrap().declared_size, 2048);
    }

    #[test]
    fn resolve_root_and_missing() {
        let tree = Tree::default_layout();
        let cwd = p("/home");
        assert!(tree.resolve("/", &cwd).is_some_and(Node::is_dir));
        assert!(tree.resolve("/nope", &cwd).is_none());
        assert!(tree.resolve("/readme.txt/inner", &cwd).is_none());
        assert!(tree.resolve("..", &cwd).is_none());
    }

    #[test]
    fn absolute_resolution_ignores_cwd() {
        let tree = Tree::default_layout();
        for cwd in ["/", "/home", "/home/user/photos", "/etc"] {
            let node = tree.resolve("/etc/config.txt", &p(cwd));
            assert_eq!(node, tree.lookup(&p("/etc/config.txt")));
        }
    }

    #[test]
    fn relative_resolution_matches_concatenation() {
        let tree = Tree::default_layout();
        let cases = [("/home", "user/documents"), ("/", "etc"), ("/home/user", "photos/"), ("/etc", "x")];
        for (cwd, rel) in cases {
            let joined = format!("{cwd}/{rel}");
            assert_eq!(tree.resolve(rel, &p(cwd)), tree.resolve(&joined, &VfsPath::root()));
        }
    }

    #[test]
    fn typed_lookups_report_mismatch() {
        let tree = Tree::default_layout();
        assert_eq!(tree.directory(&p("/readme.txt")), Err(VfsError::NotADirectory("/readme.txt".into())));
        assert_eq!(tree.file(&p("/etc")), Err(VfsError::IsADirectory("/etc".into())));
        assert_eq!(tree.file(&p("/missing")), Err(VfsError::NotFound("/missing".into())));
    }

    #[test]
    fn copy_duplicates_by_value() {
        let mut tree = Tree::default_layout();
        tree.copy_file(&p("/readme.txt"), &p("/home/readme.bak")).unwrap();
        tree.set_permissions(&p("/home/readme.bak"), "600".parse().unwrap()).unwrap();

        let original = tree.file(&p("/readme.txt")).unwrap();
        let copy = tree.file(&p("/home/readme.bak")).unwrap();
        assert_eq!(original.permissions, Permissions::FILE);
        assert_eq!(copy.permissions.to_string(), "600");
        assert_eq!(copy.content(), original.content());
        assert_eq!(copy.declared_size, 2048);
        assert_eq!(names(tree.directory(&p("/home")).unwrap()), ["user", "readme.bak"]);
    }

    #[test]
    fn copy_failures() {
        let mut tree = Tree::default_layout();
        let before = tree.clone();
        assert_eq!(tree.copy_file(&p("/etc"), &p("/x")), Err(VfsError::IsADirectory("/etc".into())));
        assert_eq!(tree.copy_file(&p("/nope"), &p("/x")), Err(VfsError::NotFound("/nope".into())));
        assert_eq!(
            tree.copy_file(&p("/readme.txt"), &p("/etc/config.txt")),
            Err(VfsError::AlreadyExists("/etc/config.txt".into()))
        );
        assert_eq!(tree.copy_file(&p("/readme.txt"), &p("/missing/x")), Err(VfsError::NotFound("/missing".into())));
        assert_eq!(
            tree.copy_file(&p("/readme.txt"), &p("/readme.txt/x")),
            Err(VfsError::NotADirectory("/readme.txt".into()))
        );
        assert_eq!(tree.copy_file(&p("/readme.txt"), &VfsPath::root()), Err(VfsError::InvalidDestination("/".into())));
        assert_eq!(tree, before);
    }

    #[test]
    fn remove_dir_rules() {
        let mut tree = Tree::default_layout();
        assert_eq!(tree.remove_dir(&VfsPath::root()), Err(VfsError::RootRemoval));
        assert_eq!(tree.remove_dir(&p("/home/user")), Err(VfsError::DirectoryNotEmpty("/home/user".into())));
        assert_eq!(tree.remove_dir(&p("/readme.txt")), Err(VfsError::NotADirectory("/readme.txt".into())));
        assert_eq!(tree.remove_dir(&p("/home/ghost")), Err(VfsError::NotFound("/home/ghost".into())));
        assert_eq!(tree.remove_dir(&p("/ghost/dir")), Err(VfsError::NotFound("/ghost".into())));

        tree.remove_dir(&p("/home/user/documents")).unwrap();
        assert_eq!(names(tree.directory(&p("/home/user")).unwrap()), ["photos"]);
    }

    #[test]
    fn chmod_applies_to_any_node() {
        let mut tree = Tree::default_layout();
        let perms: Permissions = "700".parse().unwrap();
        tree.set_permissions(&VfsPath::root(), perms).unwrap();
        tree.set_permissions(&p("/etc/settings.ini"), perms).unwrap();
        assert_eq!(tree.root().permissions, perms);
        assert_eq!(tree.file(&p("/etc/settings.ini")).unwrap().permissions, perms);
        assert_eq!(tree.set_permissions(&p("/none"), perms), Err(VfsError::NotFound("/none".into())));
    }
}
