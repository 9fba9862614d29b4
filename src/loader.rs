//! Resource directory loading
//!
//! Walks a resource directory once per script kind, parses each script and
//! hands the definitions to a [`ResourceSink`]. A script that fails is
//! logged and recorded in the [`LoadReport`]; the rest of the pass goes on.

use std::ffi::OsStr;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::{error, info};
use walkdir::WalkDir;

use crate::config::LoaderConfig;
use crate::error::ScriptError;
use crate::layout::LayoutSession;
use crate::parser::{
    parse_fonts, parse_lights, parse_materials, parse_playlists, parse_views, ContainerDefinition,
    FontDefinition, LightDefinition, MaterialDefinition, PlaylistDefinition,
};

/// Kinds of resource script, in the order a pass loads them
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResourceKind {
    Material,
    Playlist,
    Font,
    Light,
    View,
}

impl ResourceKind {
    /// Load order: views come last so their materials and fonts exist
    pub const ALL: [ResourceKind; 5] = [
        ResourceKind::Material,
        ResourceKind::Playlist,
        ResourceKind::Font,
        ResourceKind::Light,
        ResourceKind::View,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            ResourceKind::Material => "material",
            ResourceKind::Playlist => "playlist",
            ResourceKind::Font => "font",
            ResourceKind::Light => "light",
            ResourceKind::View => "view",
        }
    }
}

impl fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Engine side of the loader: receives every parsed definition
pub trait ResourceSink {
    fn material(&mut self, def: MaterialDefinition);
    fn playlist(&mut self, def: PlaylistDefinition);
    fn font(&mut self, def: FontDefinition);
    fn light(&mut self, def: LightDefinition);
    fn view(&mut self, def: ContainerDefinition);
}

/// Errors that abort a whole loading pass
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("{} is not a valid resource path", .0.display())]
    InvalidResourcePath(PathBuf),

    #[error("failed to walk resource directory: {0}")]
    Walk(#[from] walkdir::Error),
}

/// Why a single script was skipped
#[derive(Debug, Error)]
pub enum FileError {
    #[error("failed to read script: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Script(#[from] ScriptError),
}

/// A script that was skipped, with the text needed to report it
#[derive(Debug)]
pub struct FileFailure {
    pub path: PathBuf,
    pub kind: ResourceKind,
    /// Script text, empty when the file could not be read
    pub source: String,
    pub error: FileError,
}

impl FileFailure {
    /// Render the failure, with source context when the script was parsed
    pub fn render(&self) -> String {
        let filename = self.path.display().to_string();
        match &self.error {
            FileError::Script(e) => e.format(&self.source, &filename),
            FileError::Io(e) => format!("{}: {}", filename, e),
        }
    }
}

/// A script that loaded, with how many definitions it produced
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadedFile {
    pub path: PathBuf,
    pub kind: ResourceKind,
    pub definitions: usize,
}

/// Outcome of one loading pass
#[derive(Debug, Default)]
pub struct LoadReport {
    pub loaded: Vec<LoadedFile>,
    pub failures: Vec<FileFailure>,
}

impl LoadReport {
    /// True when every script loaded
    pub fn is_clean(&self) -> bool {
        self.failures.is_empty()
    }

    /// Number of definitions delivered for `kind`
    pub fn definitions(&self, kind: ResourceKind) -> usize {
        self.loaded
            .iter()
            .filter(|f| f.kind == kind)
            .map(|f| f.definitions)
            .sum()
    }
}

/// Loads resource directories into a sink
#[derive(Debug, Clone, Default)]
pub struct ResourceLoader {
    config: LoaderConfig,
}

impl ResourceLoader {
    pub fn new(config: LoaderConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &LoaderConfig {
        &self.config
    }

    /// Load every script under `dir`
    ///
    /// All view scripts of the pass share one name registry, so a view may
    /// reference elements declared in a file that sorts before it.
    pub fn load(&self, dir: &Path, sink: &mut impl ResourceSink) -> Result<LoadReport, LoadError> {
        if !dir.is_dir() {
            return Err(LoadError::InvalidResourcePath(dir.to_path_buf()));
        }

        let mut session = LayoutSession::from_config(&self.config.layout);
        let mut report = LoadReport::default();

        for kind in ResourceKind::ALL {
            for path in self.scripts(dir, kind)? {
                info!(%kind, path = %path.display(), "parsing script");

                let source = match fs::read_to_string(&path) {
                    Ok(source) => source,
                    Err(e) => {
                        error!(path = %path.display(), error = %e, "failed to read script");
                        report.failures.push(FileFailure {
                            path,
                            kind,
                            source: String::new(),
                            error: e.into(),
                        });
                        continue;
                    }
                };

                match load_script(kind, &source, &mut session, sink) {
                    Ok(definitions) => report.loaded.push(LoadedFile {
                        path,
                        kind,
                        definitions,
                    }),
                    Err(e) => {
                        error!(path = %path.display(), error = %e, "failed to parse script");
                        report.failures.push(FileFailure {
                            path,
                            kind,
                            source,
                            error: e.into(),
                        });
                    }
                }
            }
        }

        info!(
            loaded = report.loaded.len(),
            failed = report.failures.len(),
            "resource pass complete"
        );
        Ok(report)
    }

    /// Scripts of `kind` under `dir`, sorted by path
    fn scripts(&self, dir: &Path, kind: ResourceKind) -> Result<Vec<PathBuf>, LoadError> {
        let extension = OsStr::new(self.config.extensions.for_kind(kind));
        let mut paths = Vec::new();
        for entry in WalkDir::new(dir).sort_by_file_name() {
            let entry = entry?;
            if entry.file_type().is_file() && entry.path().extension() == Some(extension) {
                paths.push(entry.into_path());
            }
        }
        Ok(paths)
    }
}

/// Parse one script and deliver its definitions; nothing is delivered on error
fn load_script(
    kind: ResourceKind,
    source: &str,
    session: &mut LayoutSession,
    sink: &mut impl ResourceSink,
) -> Result<usize, ScriptError> {
    let count = match kind {
        ResourceKind::Material => deliver(parse_materials(source)?, |d| sink.material(d)),
        ResourceKind::Playlist => deliver(parse_playlists(source)?, |d| sink.playlist(d)),
        ResourceKind::Font => deliver(parse_fonts(source)?, |d| sink.font(d)),
        ResourceKind::Light => deliver(parse_lights(source)?, |d| sink.light(d)),
        ResourceKind::View => deliver(parse_views(source, session)?, |d| sink.view(d)),
    };
    Ok(count)
}

fn deliver<T>(defs: Vec<T>, mut f: impl FnMut(T)) -> usize {
    let count = defs.len();
    for def in defs {
        f(def);
    }
    count
}
