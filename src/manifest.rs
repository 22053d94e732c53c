use crate::error::Error;
use crate::result::Result;
use crate::tpl;
use serde::Deserialize;
use std::fs;
use std::path::Path;

/// One packaging instruction. Destinations ending in `/` receive the
/// source's file name.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Entry {
    /// A single file relative to the solution root
    Static { dest: String, source: String },
    /// Every binary in a project's build output directory
    Output { dest: String, project: String },
    /// Every file matching a root-relative glob
    Glob { dest: String, pattern: String },
}

impl Entry {
    pub fn file(dest: &str, source: &str) -> Self {
        Entry::Static {
            dest: dest.to_string(),
            source: source.to_string(),
        }
    }

    pub fn output(dest: &str, project: &str) -> Self {
        Entry::Output {
            dest: dest.to_string(),
            project: project.to_string(),
        }
    }

    pub fn glob(dest: &str, pattern: &str) -> Self {
        Entry::Glob {
            dest: dest.to_string(),
            pattern: pattern.to_string(),
        }
    }
}

/// Where a project's compiled binaries live and which ones ship
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct BuildOutput {
    /// Path under the project directory, e.g. `bin/Release/net471`
    pub layout: String,
    /// File extensions to pick up, in order
    pub extensions: Vec<String>,
}

impl Default for BuildOutput {
    fn default() -> Self {
        Self {
            layout: "bin/Release/net471".to_string(),
            extensions: vec!["exe".to_string(), "dll".to_string()],
        }
    }
}

/// TOML shape of an alternative manifest; missing fields use the built-in values
#[derive(Debug, Deserialize)]
#[serde(rename_all = "kebab-case")]
struct ManifestFile {
    #[serde(default)]
    product: Option<String>,

    #[serde(default)]
    marker: Option<String>,

    #[serde(default)]
    version_file: Option<String>,

    #[serde(default)]
    output_folder: Option<String>,

    #[serde(default)]
    filename: Option<String>,

    #[serde(default)]
    build_output: Option<BuildOutput>,

    #[serde(default, rename = "entry")]
    entries: Vec<Entry>,
}

/// Everything one packaging run needs to know
#[derive(Debug, Clone)]
pub struct Manifest {
    pub product: String,
    /// File whose presence identifies the solution root
    pub marker: String,
    /// Root-relative source file holding the `VERSION` constant
    pub version_file: String,
    /// Root-relative directory receiving the archive
    pub output_folder: String,
    /// Archive name template (`$PRODUCT`, `$VERSION`, `$DATE`)
    pub filename: String,
    pub build_output: BuildOutput,
    /// Processed strictly in order; the first producer of a destination wins
    pub entries: Vec<Entry>,
}

impl Manifest {
    /// The ZILF release layout
    pub fn builtin() -> Self {
        let entries = vec![
            Entry::file("/", "COPYING.txt"),
            Entry::file("/", "distfiles/README.txt"),
            Entry::output("bin/", "Zapf"),
            Entry::output("bin/", "Zilf"),
            Entry::file("doc/", "Zilf/quickref.txt"),
            Entry::file("doc/", "zapf_manual.html"),
            Entry::file("doc/", "zilf_manual.html"),
            Entry::file("library/", "Library/LICENSE.txt"),
            Entry::file("library/", "Library/ZIL_ZILF_differences.txt"),
            Entry::glob("library/", "Library/*.mud"),
            Entry::glob("library/", "Library/*.zil"),
            Entry::glob("sample/advent/", "Examples/advent/*.zil"),
            Entry::glob("sample/cloak/", "Examples/cloak/*.zil"),
            Entry::glob("sample/cloak_plus/", "Examples/cloak_plus/*.md"),
            Entry::glob("sample/cloak_plus/", "Examples/cloak_plus/*.zil"),
            Entry::glob("sample/empty/", "Examples/empty/*.zil"),
        ];

        Self {
            product: "zilf".to_string(),
            marker: "Zilf.sln".to_string(),
            version_file: "Zilf/Program.cs".to_string(),
            output_folder: "dist".to_string(),
            filename: tpl::DEFAULT_FILENAME.to_string(),
            build_output: BuildOutput::default(),
            entries,
        }
    }

    /// Load a manifest from a TOML file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> Result<Self> {
        let file: ManifestFile = toml::from_str(content)?;
        let builtin = Self::builtin();

        if file.entries.is_empty() {
            return Err(Error::InvalidManifest(
                "at least one [[entry]] is required".to_string(),
            ));
        }

        let product = file.product.unwrap_or(builtin.product);
        if product.trim().is_empty() {
            return Err(Error::InvalidManifest("product name is empty".to_string()));
        }

        Ok(Self {
            product,
            marker: file.marker.unwrap_or(builtin.marker),
            version_file: file.version_file.unwrap_or(builtin.version_file),
            output_folder: file.output_folder.unwrap_or(builtin.output_folder),
            filename: file.filename.unwrap_or(builtin.filename),
            build_output: file.build_output.unwrap_or(builtin.build_output),
            entries: file.entries,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_order() {
        let manifest = Manifest::builtin();
        assert_eq!(manifest.entries.len(), 16);
        assert_eq!(manifest.entries[0], Entry::file("/", "COPYING.txt"));
        assert_eq!(manifest.entries[2], Entry::output("bin/", "Zapf"));
        assert_eq!(
            manifest.entries.last(),
            Some(&Entry::glob("sample/empty/", "Examples/empty/*.zil"))
        );
    }

    #[test]
    fn test_parse_with_defaults() -> Result<()> {
        let manifest = Manifest::parse(
            r#"
            product = "zapf"

            [[entry]]
            kind = "static"
            dest = "/"
            source = "COPYING.txt"

            [[entry]]
            kind = "output"
            dest = "bin/"
            project = "Zapf"

            [[entry]]
            kind = "glob"
            dest = "doc/"
            pattern = "docs/**/*.md"
            "#,
        )?;

        assert_eq!(manifest.product, "zapf");
        assert_eq!(manifest.marker, "Zilf.sln");
        assert_eq!(manifest.output_folder, "dist");
        assert_eq!(manifest.build_output, BuildOutput::default());
        assert_eq!(
            manifest.entries,
            vec![
                Entry::file("/", "COPYING.txt"),
                Entry::output("bin/", "Zapf"),
                Entry::glob("doc/", "docs/**/*.md"),
            ]
        );
        Ok(())
    }

    #[test]
    fn test_parse_build_output() -> Result<()> {
        let manifest = Manifest::parse(
            r#"
            filename = "$PRODUCT-$VERSION.zip"

            [build-output]
            layout = "bin/Release/net6.0"
            extensions = ["dll"]

            [[entry]]
            kind = "output"
            dest = "bin/"
            project = "Zilf"
            "#,
        )?;

        assert_eq!(manifest.filename, "$PRODUCT-$VERSION.zip");
        assert_eq!(manifest.build_output.layout, "bin/Release/net6.0");
        assert_eq!(manifest.build_output.extensions, vec!["dll".to_string()]);
        Ok(())
    }

    #[test]
    fn test_parse_requires_entries() {
        let result = Manifest::parse("product = \"zilf\"\n");
        assert!(matches!(result, Err(Error::InvalidManifest(_))));
    }

    #[test]
    fn test_parse_rejects_unknown_kind() {
        let result = Manifest::parse("[[entry]]\nkind = \"folder\"\ndest = \"/\"\nsource = \"x\"\n");
        assert!(matches!(result, Err(Error::Toml(_))));
    }
}
