//! `tsconfig.json` generation

use super::{to_json, TYPESCRIPT_FILE};
use crate::archetype::Archetype;
use crate::error::ScaffoldResult;
use serde::Serialize;

/// Value of `compilerOptions.module`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ModuleFormat {
    #[serde(rename = "commonjs")]
    CommonJs,
    #[serde(rename = "es6")]
    Es6,
}

impl ModuleFormat {
    /// Webpack bundles ES modules; everything else runs CommonJS on Node
    pub fn for_archetype(archetype: Archetype) -> Self {
        match archetype {
            Archetype::Webpack => ModuleFormat::Es6,
            Archetype::Node | Archetype::React => ModuleFormat::CommonJs,
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct CompilerOptions {
    root_dir: &'static str,
    out_dir: &'static str,
    target: &'static str,
    allow_js: bool,
    module_resolution: &'static str,
    module: ModuleFormat,
    source_map: bool,
    allow_synthetic_default_imports: bool,
    force_consistent_casing_in_file_names: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    jsx: Option<&'static str>,
    strict: bool,
    skip_lib_check: bool,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct TsConfig {
    compiler_options: CompilerOptions,
    include: [&'static str; 1],
    exclude: [&'static str; 2],
}

/// Generate `tsconfig.json` for an archetype
pub fn typescript_config(archetype: Archetype) -> ScaffoldResult<String> {
    let jsx = match archetype {
        Archetype::React => Some("react"),
        Archetype::Node | Archetype::Webpack => None,
    };

    let config = TsConfig {
        compiler_options: CompilerOptions {
            root_dir: "src",
            out_dir: "build",
            target: "es6",
            allow_js: true,
            module_resolution: "node",
            module: ModuleFormat::for_archetype(archetype),
            source_map: true,
            allow_synthetic_default_imports: true,
            force_consistent_casing_in_file_names: true,
            jsx,
            strict: true,
            skip_lib_check: true,
        },
        include: ["src/**/*"],
        exclude: ["node_modules", "build"],
    };

    to_json(TYPESCRIPT_FILE, &config)
}
