use thiserror::Error;

#[derive(Error, Debug)]
pub enum StatusError {
    #[error("Erro de configuração: {0}")]
    Config(String),

    #[error("A senha do SharePoint não está definida. Exporte a variável de ambiente SHAREPOINT_SENHA")]
    SenhaAusente,

    #[error("Erro ao baixar o arquivo ({status}): {url}")]
    Download { status: u16, url: String },

    #[error("Erro de conexão: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Erro ao ler a planilha Excel: {0}")]
    Planilha(String),

    #[error("Erro de JSON: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("Erro de IO: {0}")]
    Io(#[from] std::io::Error),

    #[error("Erro de entrada no terminal: {0}")]
    Prompt(String),
}

pub type Result<T> = std::result::Result<T, StatusError>;
