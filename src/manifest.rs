use crate::context::Context;
use crate::result::Result;
use crate::tpl::Tpl;
use serde::Deserialize;
use std::fs;
use std::path::PathBuf;

/// Optional configuration file read from the working directory. It is
/// always excluded from the packaged tree.
pub const MANIFEST_FILE: &str = "pack.toml";

const DEFAULT_NAME: &str = "Global Objective System GS";
const DEFAULT_VERSION_FILE: &str = "version.nut";
const DEFAULT_VERSION_KEY: &str = "SELF_VERSION";
const DEFAULT_FILENAME: &str = "$NAME-v$VERSION";

#[derive(Debug, Deserialize, Default)]
pub struct PackToml {
    #[serde(default)]
    pub name: Option<String>,

    #[serde(rename = "version-file", default)]
    pub version_file: Option<String>,

    #[serde(rename = "version-key", default)]
    pub version_key: Option<String>,

    #[serde(default)]
    pub filename: Option<String>,

    #[serde(default)]
    pub exclude: Vec<String>,
}

/// Parsed and processed manifest information
pub struct Manifest {
    /// Product name as configured, spaces and all
    pub product_name: String,
    /// Product name with spaces replaced by hyphens, used in filenames
    pub pack_name: String,
    /// File scanned for the version declaration, relative to the base dir
    pub version_file: PathBuf,
    /// Identifier on the left-hand side of the version declaration
    pub version_key: String,
    /// Release identifier template ($NAME, $VERSION)
    pub filename: String,
    /// Additional entry names excluded from the packaged tree
    pub exclude: Vec<String>,
}

impl Manifest {
    /// Load `pack.toml` from the working directory; a missing manifest
    /// means all defaults.
    pub fn load(ctx: &Context) -> Result<Self> {
        let manifest_path = ctx.base_dir.join(MANIFEST_FILE);
        let pack_toml = if manifest_path.exists() {
            let content = fs::read_to_string(&manifest_path)?;
            toml::from_str(&content)?
        } else {
            PackToml::default()
        };

        Ok(Self::from_pack_toml(ctx, pack_toml))
    }

    pub(crate) fn from_pack_toml(ctx: &Context, pack_toml: PackToml) -> Self {
        let product_name = pack_toml.name.unwrap_or_else(|| DEFAULT_NAME.to_string());
        let pack_name = product_name.replace(' ', "-");

        let version_file = ctx.base_dir.join(
            pack_toml
                .version_file
                .unwrap_or_else(|| DEFAULT_VERSION_FILE.to_string()),
        );

        Manifest {
            product_name,
            pack_name,
            version_file,
            version_key: pack_toml
                .version_key
                .unwrap_or_else(|| DEFAULT_VERSION_KEY.to_string()),
            filename: pack_toml
                .filename
                .unwrap_or_else(|| DEFAULT_FILENAME.to_string()),
            exclude: pack_toml.exclude,
        }
    }

    /// Build the release identifier for the given version. The identifier
    /// names both the staging directory and the archive (minus suffix).
    pub fn release_identifier(&self, version: &str) -> String {
        let mut tpl = Tpl::new();
        tpl.register("NAME", &self.pack_name);
        tpl.register("VERSION", version);
        tpl.parse(&self.filename)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    fn test_ctx() -> Context {
        Context::new(Path::new("/work").to_path_buf(), false)
    }

    #[test]
    fn test_defaults() {
        let manifest = Manifest::from_pack_toml(&test_ctx(), PackToml::default());

        assert_eq!(manifest.product_name, "Global Objective System GS");
        assert_eq!(manifest.pack_name, "Global-Objective-System-GS");
        assert_eq!(manifest.version_file, Path::new("/work/version.nut"));
        assert_eq!(manifest.version_key, "SELF_VERSION");
        assert!(manifest.exclude.is_empty());
    }

    #[test]
    fn test_release_identifier_hyphenates_spaces() {
        let manifest = Manifest::from_pack_toml(&test_ctx(), PackToml::default());

        assert_eq!(
            manifest.release_identifier("42"),
            "Global-Objective-System-GS-v42"
        );
    }

    #[test]
    fn test_pack_toml_overrides() {
        let pack_toml: PackToml = toml::from_str(
            r#"
            name = "My Tool"
            version-file = "info.nut"
            version-key = "TOOL_VERSION"
            exclude = ["notes.txt"]
            "#,
        )
        .unwrap();
        let manifest = Manifest::from_pack_toml(&test_ctx(), pack_toml);

        assert_eq!(manifest.pack_name, "My-Tool");
        assert_eq!(manifest.version_file, Path::new("/work/info.nut"));
        assert_eq!(manifest.version_key, "TOOL_VERSION");
        assert_eq!(manifest.exclude, vec!["notes.txt".to_string()]);
        assert_eq!(manifest.release_identifier("3"), "My-Tool-v3");
    }
}
