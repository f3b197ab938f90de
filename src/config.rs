use crate::error::{Result, StatusError};
use crate::planilha::FonteRemota;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

const TTL_PADRAO_SEGUNDOS: u64 = 300;

/// Variável de ambiente com a senha do SharePoint (nunca vai para o
/// arquivo de configuração)
pub const VAR_SENHA: &str = "SHAREPOINT_SENHA";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub drive_file_id: Option<String>,
    pub sharepoint_site_url: Option<String>,
    pub sharepoint_caminho_arquivo: Option<String>,
    pub sharepoint_usuario: Option<String>,
    pub cache_ttl_segundos: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            drive_file_id: None,
            sharepoint_site_url: None,
            sharepoint_caminho_arquivo: None,
            sharepoint_usuario: None,
            cache_ttl_segundos: TTL_PADRAO_SEGUNDOS,
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path()?;

        if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)?;
            let config: Config = serde_json::from_str(&content)?;
            Ok(config)
        } else {
            Ok(Self::default())
        }
    }

    pub fn save(&self) -> Result<()> {
        let config_path = Self::config_path()?;

        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(&config_path, content)?;
        Ok(())
    }

    pub fn config_path() -> Result<PathBuf> {
        let home = dirs::home_dir()
            .ok_or_else(|| StatusError::Config("diretório home não encontrado".into()))?;
        Ok(home
            .join(".config")
            .join("candidato-status")
            .join("config.json"))
    }

    pub fn ttl(&self) -> Duration {
        Duration::from_secs(self.cache_ttl_segundos)
    }

    /// Monta a fonte remota a partir da configuração.
    ///
    /// Google Drive tem prioridade quando as duas fontes estão
    /// configuradas; a senha do SharePoint vem só do ambiente.
    pub fn fonte(&self) -> Result<FonteRemota> {
        if let Some(file_id) = &self.drive_file_id {
            return Ok(FonteRemota::DriveCompartilhado {
                file_id: file_id.clone(),
            });
        }

        match (
            &self.sharepoint_site_url,
            &self.sharepoint_caminho_arquivo,
            &self.sharepoint_usuario,
        ) {
            (Some(site_url), Some(caminho_arquivo), Some(usuario)) => {
                let senha =
                    std::env::var(VAR_SENHA).map_err(|_| StatusError::SenhaAusente)?;
                Ok(FonteRemota::SharePoint {
                    site_url: site_url.clone(),
                    caminho_arquivo: caminho_arquivo.clone(),
                    usuario: usuario.clone(),
                    senha,
                })
            }
            _ => Err(StatusError::Config(
                "nenhuma fonte configurada. Use `candidato-status config --set-drive-id <ID>` \
                 ou configure o SharePoint com --set-site, --set-caminho e --set-usuario"
                    .into(),
            )),
        }
    }
}
