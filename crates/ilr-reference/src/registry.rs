#![deny(unsafe_code)]

use std::collections::BTreeSet;
use std::path::{Component, Path, PathBuf};

use serde::Serialize;

use crate::csv::fcs::parse_contract_allocations_csv;
use crate::csv::lars::{parse_learning_deliveries_csv, parse_validities_csv};
use crate::csv::organisations::parse_organisations_csv;
use crate::error::ReferenceError;
use crate::fcs::{ContractAllocation, FcsIndex};
use crate::hash::sha256_hex;
use crate::lars::LarsIndex;
use crate::manifest::{Manifest, ManifestFile, Pins};
use crate::organisation::{Organisation, OrganisationIndex};

pub const MANIFEST_FILE: &str = "manifest.toml";
pub const MANIFEST_SCHEMA: &str = "ilr-validator.reference-manifest";

pub const ROLE_LARS_LEARNING_DELIVERIES: &str = "lars_learning_deliveries";
pub const ROLE_LARS_VALIDITIES: &str = "lars_validities";
pub const ROLE_FCS_CONTRACT_ALLOCATIONS: &str = "fcs_contract_allocations";
pub const ROLE_ORGANISATIONS: &str = "organisations";
pub const ROLE_RULES: &str = "rules";

const REQUIRED_ROLES: &[&str] = &[
    ROLE_LARS_LEARNING_DELIVERIES,
    ROLE_LARS_VALIDITIES,
    ROLE_FCS_CONTRACT_ALLOCATIONS,
    ROLE_ORGANISATIONS,
    ROLE_RULES,
];

const ALLOWED_KINDS: &[&str] = &["csv", "json", "toml", "other"];

#[derive(Debug, Clone, Serialize)]
pub struct VerifySummary {
    pub reference_dir: PathBuf,
    pub manifest_pins: Pins,
    pub file_count: usize,
    pub checksums_verified: bool,
    pub learning_aim_count: usize,
    pub validity_count: usize,
    pub contract_allocation_count: usize,
    pub organisation_count: usize,
}

/// Reference data loaded from a manifest-pinned directory.
#[derive(Debug, Clone)]
pub struct ReferenceData {
    pub reference_dir: PathBuf,
    pub manifest: Manifest,
    pub files: Vec<ManifestFile>,
    pub lars: LarsIndex,
    pub fcs: FcsIndex,
    pub organisations: OrganisationIndex,
}

impl ReferenceData {
    /// Validate the manifest, check every checksum, then load the data.
    pub fn verify_and_load(reference_dir: &Path) -> Result<(Self, VerifySummary), ReferenceError> {
        Self::load(reference_dir, true)
    }

    /// Load the data; `verify_checksums = false` skips hashing and the
    /// unexpected-file scan but still validates the manifest itself.
    pub fn load(
        reference_dir: &Path,
        verify_checksums: bool,
    ) -> Result<(Self, VerifySummary), ReferenceError> {
        let _span = tracing::info_span!("reference_load", dir = %reference_dir.display()).entered();

        let manifest = load_manifest(&reference_dir.join(MANIFEST_FILE))?;
        validate_manifest(&manifest)?;

        let mut files = manifest.files.clone();
        files.sort_by(|a, b| a.path.cmp(&b.path));

        if verify_checksums {
            check_unexpected_files(&files, reference_dir)?;
            for file in &files {
                verify_file(reference_dir, file)?;
            }
        } else {
            for file in &files {
                let full_path = reference_dir.join(&file.path);
                if !full_path.is_file() {
                    return Err(ReferenceError::MissingFile { path: full_path });
                }
            }
            tracing::warn!("reference checksum verification skipped");
        }

        let lars = LarsIndex::from_rows(
            parse_learning_deliveries_csv(&resolve_role_path(
                reference_dir,
                &files,
                ROLE_LARS_LEARNING_DELIVERIES,
            )?)?,
            parse_validities_csv(&resolve_role_path(
                reference_dir,
                &files,
                ROLE_LARS_VALIDITIES,
            )?)?,
        );

        let fcs: FcsIndex = parse_contract_allocations_csv(&resolve_role_path(
            reference_dir,
            &files,
            ROLE_FCS_CONTRACT_ALLOCATIONS,
        )?)?
        .into_iter()
        .map(ContractAllocation::from)
        .collect();

        let organisations: OrganisationIndex = parse_organisations_csv(&resolve_role_path(
            reference_dir,
            &files,
            ROLE_ORGANISATIONS,
        )?)?
        .into_iter()
        .map(Organisation::from)
        .collect();

        let summary = VerifySummary {
            reference_dir: reference_dir.to_path_buf(),
            manifest_pins: manifest.pins.clone(),
            file_count: files.len(),
            checksums_verified: verify_checksums,
            learning_aim_count: lars.len(),
            validity_count: lars.validity_count(),
            contract_allocation_count: fcs.len(),
            organisation_count: organisations.len(),
        };
        tracing::info!(
            learning_aims = summary.learning_aim_count,
            contract_allocations = summary.contract_allocation_count,
            organisations = summary.organisation_count,
            "reference data loaded"
        );

        Ok((
            Self {
                reference_dir: reference_dir.to_path_buf(),
                manifest,
                files,
                lars,
                fcs,
                organisations,
            },
            summary,
        ))
    }

    /// Path of the rule metadata CSV.
    pub fn rules_path(&self) -> Result<PathBuf, ReferenceError> {
        resolve_role_path(&self.reference_dir, &self.files, ROLE_RULES)
    }
}

fn load_manifest(path: &Path) -> Result<Manifest, ReferenceError> {
    let contents = std::fs::read_to_string(path).map_err(|e| ReferenceError::io(path, e))?;
    toml::from_str(&contents).map_err(|e| ReferenceError::Toml {
        path: path.to_path_buf(),
        source: e,
    })
}

fn validate_manifest(manifest: &Manifest) -> Result<(), ReferenceError> {
    if manifest.manifest.schema != MANIFEST_SCHEMA {
        return Err(ReferenceError::InvalidManifest {
            message: format!("unsupported schema: {}", manifest.manifest.schema),
        });
    }
    if manifest.manifest.schema_version != 1 {
        return Err(ReferenceError::InvalidManifest {
            message: format!(
                "unsupported schema_version: {}",
                manifest.manifest.schema_version
            ),
        });
    }

    let mut roles: BTreeSet<&str> = BTreeSet::new();
    for file in &manifest.files {
        if !roles.insert(file.role.as_str()) {
            return Err(ReferenceError::DuplicateRole {
                role: file.role.clone(),
            });
        }

        if !ALLOWED_KINDS.contains(&file.kind.as_str()) {
            return Err(ReferenceError::InvalidManifest {
                message: format!("unsupported kind '{}' for {}", file.kind, file.path),
            });
        }

        validate_sha(&file.sha256, &file.path)?;
        validate_path(&file.path)?;
    }

    for role in REQUIRED_ROLES {
        if !roles.contains(role) {
            return Err(ReferenceError::MissingRole {
                role: role.to_string(),
            });
        }
    }

    Ok(())
}

fn check_unexpected_files(files: &[ManifestFile], reference_dir: &Path) -> Result<(), ReferenceError> {
    let manifest_paths: BTreeSet<PathBuf> = files
        .iter()
        .map(|file| normalize_path(Path::new(&file.path)))
        .collect();

    for path in list_files_under(reference_dir)? {
        if path == Path::new(MANIFEST_FILE) {
            continue;
        }
        if !manifest_paths.contains(&normalize_path(&path)) {
            return Err(ReferenceError::UnexpectedFile {
                path: reference_dir.join(path),
            });
        }
    }
    Ok(())
}

fn verify_file(reference_dir: &Path, file: &ManifestFile) -> Result<(), ReferenceError> {
    let full_path = reference_dir.join(&file.path);
    let bytes = std::fs::read(&full_path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            ReferenceError::MissingFile {
                path: full_path.clone(),
            }
        } else {
            ReferenceError::io(full_path.clone(), e)
        }
    })?;

    let actual = sha256_hex(&bytes);
    let expected = file.sha256.to_ascii_lowercase();
    if actual != expected {
        return Err(ReferenceError::Sha256Mismatch {
            path: full_path,
            expected,
            actual,
        });
    }
    Ok(())
}

fn resolve_role_path(
    reference_dir: &Path,
    files: &[ManifestFile],
    role: &str,
) -> Result<PathBuf, ReferenceError> {
    let file = files
        .iter()
        .find(|f| f.role == role)
        .ok_or_else(|| ReferenceError::MissingRole {
            role: role.to_string(),
        })?;
    Ok(reference_dir.join(&file.path))
}

fn validate_sha(sha: &str, path: &str) -> Result<(), ReferenceError> {
    if sha.len() != 64 || !sha.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(ReferenceError::InvalidSha256 {
            path: PathBuf::from(path),
            message: "sha256 must be 64 hex characters".to_string(),
        });
    }
    Ok(())
}

fn validate_path(path: &str) -> Result<PathBuf, ReferenceError> {
    if path.contains('\\') {
        return Err(ReferenceError::InvalidPath {
            path: PathBuf::from(path),
            message: "manifest path must use '/' separators".to_string(),
        });
    }

    let p = PathBuf::from(path);
    if p.is_absolute() {
        return Err(ReferenceError::InvalidPath {
            path: p,
            message: "manifest path must be relative".to_string(),
        });
    }

    if p.components().any(|c| matches!(c, Component::ParentDir)) {
        return Err(ReferenceError::InvalidPath {
            path: p,
            message: "manifest path must not traverse out of the reference directory".to_string(),
        });
    }

    Ok(p)
}

fn list_files_under(root: &Path) -> Result<BTreeSet<PathBuf>, ReferenceError> {
    let mut stack = vec![root.to_path_buf()];
    let mut files = BTreeSet::new();

    while let Some(dir) = stack.pop() {
        for entry in std::fs::read_dir(&dir).map_err(|e| ReferenceError::io(&dir, e))? {
            let entry = entry.map_err(|e| ReferenceError::io(&dir, e))?;
            let path = entry.path();
            if path.is_dir() {
                stack.push(path);
            } else if path.is_file() {
                let rel = path
                    .strip_prefix(root)
                    .map_err(|e| ReferenceError::InvalidPath {
                        path: path.clone(),
                        message: format!("failed to relativize path: {e}"),
                    })?
                    .to_path_buf();
                files.insert(rel);
            }
        }
    }

    Ok(files)
}

fn normalize_path(p: &Path) -> PathBuf {
    p.components()
        .filter(|c| !matches!(c, Component::CurDir))
        .map(|c| c.as_os_str())
        .collect()
}
