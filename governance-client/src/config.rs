//! Client configuration and the per-call compilation context.

use {
    crate::{
        constants::{DEFAULT_PROGRAM_ID, DEFAULT_PROGRAM_VERSION, MIN_SUPPORTED_PROGRAM_VERSION},
        error::{GovernanceClientError, Result},
        pda::PdaClient,
    },
    serde::{Deserialize, Serialize},
    serde_with::{serde_as, DisplayFromStr},
    solana_pubkey::Pubkey,
    std::{fs, path::Path},
    thiserror::Error,
};

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Program version {version} is not supported (minimum {minimum})")]
    UnsupportedProgramVersion { version: u8, minimum: u8 },

    #[error("Failed to access config file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("Failed to encode config: {0}")]
    Encode(#[source] serde_yaml::Error),
}

fn check_program_version(version: u8) -> std::result::Result<(), ConfigError> {
    if version < MIN_SUPPORTED_PROGRAM_VERSION {
        return Err(ConfigError::UnsupportedProgramVersion {
            version,
            minimum: MIN_SUPPORTED_PROGRAM_VERSION,
        });
    }
    Ok(())
}

/// Everything a compilation needs besides the operation's own parameters.
///
/// Passed by reference into every compile call; nothing is held globally.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GovernanceContext {
    /// Root of every derived address and the target of every instruction.
    pub program_id: Pubkey,
    pub program_version: u8,
    /// Funds account creation and defaults any omitted authority or owner.
    pub payer: Pubkey,
}

impl GovernanceContext {
    /// Context for the default program deployment.
    pub fn new(payer: Pubkey) -> Self {
        Self {
            program_id: DEFAULT_PROGRAM_ID,
            program_version: DEFAULT_PROGRAM_VERSION,
            payer,
        }
    }

    pub fn with_program_id(self, program_id: Pubkey) -> Self {
        Self { program_id, ..self }
    }

    pub fn pda(&self) -> PdaClient {
        PdaClient::new(self.program_id)
    }

    /// Placeholder for an optional account slot that was left empty.
    pub fn absent_account(&self) -> Pubkey {
        self.program_id
    }

    pub fn check_program_version(&self) -> std::result::Result<(), ConfigError> {
        check_program_version(self.program_version)
    }
}

/// On-disk client configuration (YAML).
///
/// ```yaml
/// program_id: GovER5Lthms3bLBqWub97yVrMmEogzX7xNjdXpPPCVZw
/// program_version: 3
/// payer: 9xQeWvG816bUx9EPjHmaT23yvVM2ZWbrrpZb9PusVFin
/// ```
#[serde_as]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GovernanceClientConfig {
    #[serde_as(as = "DisplayFromStr")]
    pub program_id: Pubkey,

    pub program_version: u8,

    #[serde_as(as = "Option<DisplayFromStr>")]
    pub payer: Option<Pubkey>,
}

impl Default for GovernanceClientConfig {
    fn default() -> Self {
        Self {
            program_id: DEFAULT_PROGRAM_ID,
            program_version: DEFAULT_PROGRAM_VERSION,
            payer: None,
        }
    }
}

impl GovernanceClientConfig {
    pub fn load(path: impl AsRef<Path>) -> std::result::Result<Self, ConfigError> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        serde_yaml::from_str(&contents).map_err(|source| ConfigError::Parse {
            path: path.display().to_string(),
            source,
        })
    }

    pub fn save(&self, path: impl AsRef<Path>) -> std::result::Result<(), ConfigError> {
        let path = path.as_ref();
        let io_error = |source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        };
        let contents = serde_yaml::to_string(self).map_err(ConfigError::Encode)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(io_error)?;
        }
        fs::write(path, contents).map_err(io_error)
    }

    pub fn validate(&self) -> std::result::Result<(), ConfigError> {
        check_program_version(self.program_version)
    }

    pub fn to_context(&self) -> Result<GovernanceContext> {
        self.validate()?;
        let payer = self
            .payer
            .ok_or(GovernanceClientError::MissingRequiredInput("payer"))?;
        Ok(GovernanceContext {
            program_id: self.program_id,
            program_version: self.program_version,
            payer,
        })
    }
}
