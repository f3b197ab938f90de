//! Fontes remotas da planilha
//!
//! O arquivo oficial pode estar publicado por link compartilhado no
//! Google Drive ou no SharePoint da empresa. Depois do download as duas
//! fontes são tratadas da mesma forma: um fluxo de bytes xlsx.

use crate::error::{Result, StatusError};

#[derive(Debug, Clone)]
pub enum FonteRemota {
    /// Link compartilhado "qualquer pessoa pode ver" (GET anônimo)
    DriveCompartilhado { file_id: String },
    /// Biblioteca de documentos do SharePoint (GET autenticado)
    SharePoint {
        site_url: String,
        caminho_arquivo: String,
        usuario: String,
        senha: String,
    },
}

impl FonteRemota {
    /// URL de download direto
    pub fn url_download(&self) -> String {
        match self {
            FonteRemota::DriveCompartilhado { file_id } => {
                format!("https://drive.google.com/uc?export=download&id={}", file_id)
            }
            FonteRemota::SharePoint {
                site_url,
                caminho_arquivo,
                ..
            } => {
                format!(
                    "{}/_api/web/GetFileByServerRelativeUrl('{}')/$value",
                    site_url.trim_end_matches('/'),
                    caminho_arquivo
                )
            }
        }
    }

    /// Baixa o arquivo e devolve os bytes
    pub async fn baixar(&self, client: &reqwest::Client) -> Result<Vec<u8>> {
        let url = self.url_download();

        let requisicao = match self {
            FonteRemota::DriveCompartilhado { .. } => client.get(&url),
            FonteRemota::SharePoint { usuario, senha, .. } => {
                client.get(&url).basic_auth(usuario, Some(senha))
            }
        };

        let resposta = requisicao.send().await?;
        let status = resposta.status();
        if !status.is_success() {
            return Err(StatusError::Download {
                status: status.as_u16(),
                url,
            });
        }

        Ok(resposta.bytes().await?.to_vec())
    }

    /// Orientação exibida junto com um erro de carga
    pub fn dica_falha(&self) -> &'static str {
        match self {
            FonteRemota::DriveCompartilhado { .. } => {
                "Verifique se o arquivo no Google Drive está com o compartilhamento \
                 'Qualquer pessoa com o link pode ver'."
            }
            FonteRemota::SharePoint { .. } => {
                "Verifique as credenciais (SHAREPOINT_SENHA) e o caminho do arquivo \
                 no SharePoint."
            }
        }
    }

    /// Descrição curta para mensagens ("Google Drive" / "SharePoint")
    pub fn descricao(&self) -> &'static str {
        match self {
            FonteRemota::DriveCompartilhado { .. } => "Google Drive",
            FonteRemota::SharePoint { .. } => "SharePoint",
        }
    }
}
