use std::path::{Path, PathBuf};

/// Resolves import/include hrefs found in a program.
///
/// Absolute hrefs are used as given; relative ones are joined onto the
/// program's directory, or the working directory for inline programs.
/// Targets that do not exist resolve to `None`, leaving the engine to fall
/// back to its own resolution.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RelativePathResolver {
    base_dir: Option<PathBuf>,
}

impl RelativePathResolver {
    pub fn new(base_dir: Option<PathBuf>) -> Self {
        Self { base_dir }
    }

    pub fn base_dir(&self) -> Option<&Path> {
        self.base_dir.as_deref()
    }

    pub fn resolve(&self, href: &str) -> Option<PathBuf> {
        let href = Path::new(href);
        let candidate = if href.is_absolute() {
            href.to_path_buf()
        } else {
            match &self.base_dir {
                Some(dir) => dir.join(href),
                None => href.to_path_buf(),
            }
        };
        candidate.is_file().then_some(candidate)
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use super::*;

    #[test]
    fn relative_href_joins_base_dir() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("common.xslt"), "<xsl:stylesheet/>").unwrap();

        let resolver = RelativePathResolver::new(Some(dir.path().to_path_buf()));
        assert_eq!(resolver.resolve("common.xslt"), Some(dir.path().join("common.xslt")));
    }

    #[test]
    fn absolute_href_is_used_as_is() {
        let dir = tempfile::tempdir().unwrap();
        let target = dir.path().join("abs.xslt");
        fs::write(&target, "").unwrap();

        let resolver = RelativePathResolver::new(Some(PathBuf::from("/elsewhere")));
        assert_eq!(resolver.resolve(target.to_str().unwrap()), Some(target));
    }

    #[test]
    fn missing_target_is_none() {
        let dir = tempfile::tempdir().unwrap();
        let resolver = RelativePathResolver::new(Some(dir.path().to_path_buf()));
        assert_eq!(resolver.resolve("nope.xslt"), None);
    }
}
