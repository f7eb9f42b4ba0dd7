//! src/config.rs
//!
//! Configuration (fichier TOML optionnel).
//!
//! ```toml
//! mode_angle = "rad"   # "deg" (défaut) ou "rad"
//! journal = "debug"    # filtre tracing (RUST_LOG prioritaire)
//! ```
//!
//! NATIF : `$CALCULATRICE_CONFIG`, sinon `<config_dir>/calculatrice/config.toml`.
//! Fichier absent => valeurs par défaut. WEB : valeurs par défaut.

#[cfg(not(target_arch = "wasm32"))]
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

use crate::noyau::ModeAngle;

/// Variable d’environnement : chemin explicite du fichier.
#[cfg(not(target_arch = "wasm32"))]
pub const VAR_CHEMIN: &str = "CALCULATRICE_CONFIG";

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Mode d’angle au démarrage.
    pub mode_angle: ModeAngle,
    /// Filtre du journal (syntaxe EnvFilter).
    pub journal: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            mode_angle: ModeAngle::Deg,
            journal: "info".to_string(),
        }
    }
}

#[derive(Error, Debug)]
pub enum ErreurConfig {
    #[error("lecture impossible de {chemin}: {source}")]
    Lecture {
        chemin: String,
        #[source]
        source: std::io::Error,
    },

    #[error("configuration invalide dans {chemin}: {source}")]
    Format {
        chemin: String,
        #[source]
        source: toml::de::Error,
    },
}

impl Config {
    pub fn depuis_toml(texte: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(texte)
    }

    /// Chemin du fichier : variable d’environnement, sinon dossier de config utilisateur.
    #[cfg(not(target_arch = "wasm32"))]
    pub fn chemin_par_defaut() -> Option<PathBuf> {
        if let Some(p) = std::env::var_os(VAR_CHEMIN) {
            return Some(PathBuf::from(p));
        }
        dirs::config_dir().map(|d| d.join("calculatrice").join("config.toml"))
    }

    /// Lit un fichier. Absent => Ok(None).
    #[cfg(not(target_arch = "wasm32"))]
    pub fn charger(chemin: &Path) -> Result<Option<Self>, ErreurConfig> {
        let texte = match std::fs::read_to_string(chemin) {
            Ok(t) => t,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(source) => {
                return Err(ErreurConfig::Lecture {
                    chemin: chemin.display().to_string(),
                    source,
                })
            }
        };

        let config = Self::depuis_toml(&texte).map_err(|source| ErreurConfig::Format {
            chemin: chemin.display().to_string(),
            source,
        })?;

        Ok(Some(config))
    }

    /// Config effective : fichier s’il existe, sinon défaut.
    #[cfg(not(target_arch = "wasm32"))]
    pub fn charger_par_defaut() -> Result<Self, ErreurConfig> {
        let Some(chemin) = Self::chemin_par_defaut() else {
            return Ok(Self::default());
        };
        Ok(Self::charger(&chemin)?.unwrap_or_default())
    }

    #[cfg(target_arch = "wasm32")]
    pub fn charger_par_defaut() -> Result<Self, ErreurConfig> {
        Ok(Self::default())
    }
}
