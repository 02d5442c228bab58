use std::env;
use std::path::PathBuf;

use proc_macro2::Span;
use toml_edit::{Document, Item, Table};

/// The caller's `Cargo.toml`, used to find an accessible [`syn::Path`]
/// for one of our crates.
///
/// Generated code must name `cs_reflect` the way the *invoking* crate sees
/// it, which depends on whether it depends on `cs_reflect` directly or only
/// on the `clistruct` facade.
///
/// # Example
///
/// ```no_run
/// # use cs_macro_utils::Manifest;
/// let path: syn::Path = Manifest::load()
///     .map(|m| m.get_crate_path("cs_reflect"))
///     .unwrap();
/// ```
///
/// # Resolution rules
///
/// 1. The requested crate is listed in `dependencies`: `::crate_name`.
/// 2. The requested name starts with `cs_` and `clistruct` is listed:
///    `::clistruct::short_name` (e.g. `cs_reflect` -> `::clistruct::reflect`).
/// 3. Repeat 1-2 in `dev-dependencies`.
/// 4. Otherwise fall back to `::crate_name`.
///
/// The fallback is also what `cs_reflect` sees for itself, it carries an
/// `extern crate self as cs_reflect;` so that the path stays valid.
#[derive(Debug)]
pub struct Manifest {
    document: Document<Box<str>>,
}

const FACADE_NAME: &str = "clistruct";
const CRATE_PREFIX: &str = "cs_";

impl Manifest {
    /// Reads and parses the `Cargo.toml` of the crate being compiled.
    ///
    /// This touches the file system, so call it once per macro invocation
    /// and pass the resolved path around.
    pub fn load() -> syn::Result<Self> {
        let path = env::var_os("CARGO_MANIFEST_DIR")
            .map(|dir| PathBuf::from(dir).join("Cargo.toml"))
            .ok_or_else(|| Self::error("CARGO_MANIFEST_DIR should be defined by cargo"))?;

        let text = std::fs::read_to_string(&path)
            .map_err(|err| Self::error(&format!("unable to read {}: {err}", path.display())))?;

        let document = Document::parse(text.into_boxed_str())
            .map_err(|err| Self::error(&format!("failed to parse {}: {err}", path.display())))?;

        Ok(Self { document })
    }

    fn error(message: &str) -> syn::Error {
        syn::Error::new(Span::call_site(), message)
    }

    /// Builds `::seg0::seg1::...`.
    fn absolute_path(segments: &[&str]) -> syn::Path {
        let mut path = syn::Path {
            leading_colon: Some(Default::default()),
            segments: Default::default(),
        };
        for segment in segments {
            path.segments
                .push(syn::Ident::new(segment, Span::call_site()).into());
        }
        path
    }

    fn find_in_deps(deps: &Table, name: &str) -> Option<syn::Path> {
        if deps.contains_key(name) {
            return Some(Self::absolute_path(&[name]));
        }

        let module = name.strip_prefix(CRATE_PREFIX)?;
        if deps.contains_key(FACADE_NAME) {
            return Some(Self::absolute_path(&[FACADE_NAME, module]));
        }

        None
    }

    /// Returns the [`syn::Path`] under which `name` is reachable from the
    /// invoking crate. See the type-level docs for the resolution order.
    pub fn get_crate_path(&self, name: &str) -> syn::Path {
        for section in ["dependencies", "dev-dependencies"] {
            if let Some(Item::Table(deps)) = self.document.get(section)
                && let Some(path) = Self::find_in_deps(deps, name)
            {
                return path;
            }
        }

        Self::absolute_path(&[name])
    }
}

#[cfg(test)]
mod tests {
    use super::Manifest;
    use quote::ToTokens;

    fn manifest(text: &str) -> Manifest {
        Manifest {
            document: toml_edit::Document::parse(text.into()).unwrap(),
        }
    }

    fn path_of(manifest: &Manifest) -> String {
        manifest
            .get_crate_path("cs_reflect")
            .to_token_stream()
            .to_string()
            .replace(' ', "")
    }

    #[test]
    fn direct_dependency() {
        let m = manifest("[dependencies]\ncs_reflect = \"0.0.1\"\n");
        assert_eq!(path_of(&m), "::cs_reflect");
    }

    #[test]
    fn through_facade() {
        let m = manifest("[dependencies]\nclistruct = \"0.0.1\"\n");
        assert_eq!(path_of(&m), "::clistruct::reflect");
    }

    #[test]
    fn dev_dependency_and_fallback() {
        let m = manifest("[dev-dependencies]\nclistruct = { path = \"..\" }\n");
        assert_eq!(path_of(&m), "::clistruct::reflect");

        let m = manifest("[package]\nname = \"cs_reflect\"\n");
        assert_eq!(path_of(&m), "::cs_reflect");
    }
}
