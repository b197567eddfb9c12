//! Resolution of Hardhat compiler artifacts by contract name.
//!
//! Hardhat writes one JSON file per contract to
//! `<root>/<path>/<Source>.sol/<Name>.json` next to a `<Name>.dbg.json` debug
//! file. Looking a contract up by its bare name walks the whole tree.

use {
    alloy::{json_abi::JsonAbi, primitives::Bytes},
    serde::Deserialize,
    serde_json::Value,
    std::{
        collections::BTreeMap,
        fs,
        io,
        path::{Path, PathBuf},
    },
};

#[derive(Debug, thiserror::Error)]
pub enum ArtifactError {
    #[error("artifact for contract {name:?} not found under {root}")]
    NotFound { name: String, root: PathBuf },
    #[error("contract name {name:?} is ambiguous, found artifacts {paths:?}")]
    Ambiguous { name: String, paths: Vec<PathBuf> },
    #[error("contract {0:?} has no creation bytecode, it is abstract or an interface")]
    NotDeployable(String),
    #[error("contract {0:?} has creation code that is not valid hex")]
    InvalidBytecode(String),
    #[error("contract {name:?} needs linking against libraries {libraries:?}")]
    Unlinked { name: String, libraries: Vec<String> },
    #[error("contract {name:?} has constructor ({found}) but expected ({expected})")]
    ConstructorMismatch {
        name: String,
        expected: String,
        found: String,
    },
    #[error("failed to read artifact {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("malformed artifact {path}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Compiled contract as written by Hardhat.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Artifact {
    pub contract_name: String,
    #[serde(default)]
    pub source_name: String,
    pub abi: JsonAbi,
    /// Hex creation code. Kept as text because unlinked code contains
    /// `__$<hash>$__` library placeholders.
    pub bytecode: String,
    /// Source file => library name => placeholder offsets.
    #[serde(default)]
    pub link_references: BTreeMap<String, BTreeMap<String, Value>>,
}

impl Artifact {
    pub fn from_file(path: &Path) -> Result<Self, ArtifactError> {
        let content = fs::read(path).map_err(|source| ArtifactError::Io {
            path: path.to_owned(),
            source,
        })?;
        serde_json::from_slice(&content).map_err(|source| ArtifactError::Json {
            path: path.to_owned(),
            source,
        })
    }

    /// Returns the creation code if the artifact can be deployed as-is with a
    /// constructor taking `inputs`.
    pub fn creation_code(&self, inputs: &[&str]) -> Result<Bytes, ArtifactError> {
        let libraries: Vec<String> = self
            .link_references
            .iter()
            .flat_map(|(source, libraries)| {
                libraries
                    .keys()
                    .map(move |library| format!("{source}:{library}"))
            })
            .collect();
        if !libraries.is_empty() {
            return Err(ArtifactError::Unlinked {
                name: self.contract_name.clone(),
                libraries,
            });
        }

        let code: Bytes = self
            .bytecode
            .parse()
            .map_err(|_| ArtifactError::InvalidBytecode(self.contract_name.clone()))?;
        if code.is_empty() {
            return Err(ArtifactError::NotDeployable(self.contract_name.clone()));
        }

        let found: Vec<String> = self
            .abi
            .constructor
            .iter()
            .flat_map(|constructor| &constructor.inputs)
            .map(|param| param.selector_type().into_owned())
            .collect();
        if found != inputs {
            return Err(ArtifactError::ConstructorMismatch {
                name: self.contract_name.clone(),
                expected: inputs.join(","),
                found: found.join(","),
            });
        }

        Ok(code)
    }
}

/// Creation code followed by the ABI-encoded constructor arguments.
pub fn deploy_code(creation_code: &[u8], constructor_args: &[u8]) -> Bytes {
    [creation_code, constructor_args].concat().into()
}

/// Artifacts directory of a Hardhat project.
#[derive(Debug, Clone)]
pub struct ArtifactStore {
    root: PathBuf,
}

impl ArtifactStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Loads the artifact of the contract called `name`.
    pub fn resolve(&self, name: &str) -> Result<Artifact, ArtifactError> {
        let file_name = format!("{name}.json");
        let mut paths = Vec::new();
        find_files(&self.root, &file_name, &mut paths)?;
        paths.sort();

        let path = match paths.as_slice() {
            [] => {
                return Err(ArtifactError::NotFound {
                    name: name.to_owned(),
                    root: self.root.clone(),
                });
            }
            [path] => path,
            _ => {
                return Err(ArtifactError::Ambiguous {
                    name: name.to_owned(),
                    paths,
                });
            }
        };
        tracing::debug!(?path, "resolved contract artifact");
        Artifact::from_file(path)
    }
}

fn find_files(
    dir: &Path,
    file_name: &str,
    found: &mut Vec<PathBuf>,
) -> Result<(), ArtifactError> {
    let io_error = |source| ArtifactError::Io {
        path: dir.to_owned(),
        source,
    };
    let entries = match fs::read_dir(dir) {
        Ok(entries) => entries,
        // A missing root simply contains no artifacts.
        Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(()),
        Err(err) => return Err(io_error(err)),
    };

    for entry in entries {
        let entry = entry.map_err(io_error)?;
        let path = entry.path();
        if entry.file_type().map_err(io_error)?.is_dir() {
            find_files(&path, file_name, found)?;
        } else if entry.file_name().to_str() == Some(file_name) {
            found.push(path);
        }
    }
    Ok(())
}
