use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "candidato-status")]
#[command(about = "Consulta de status de candidatos do processo seletivo", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Exibe diagnósticos extras (dimensões da planilha, URL da fonte)
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Consulta a fase de um candidato pelo nome
    Consultar {
        /// Nome (ou parte do nome) do candidato
        #[arg(required = true)]
        nome: String,
    },

    /// Consulta vários nomes sem recarregar a planilha a cada vez
    Interativo,

    /// Exibe/edita a configuração
    Config {
        /// ID do arquivo compartilhado no Google Drive
        #[arg(long)]
        set_drive_id: Option<String>,

        /// URL do site no SharePoint
        #[arg(long)]
        set_site: Option<String>,

        /// Caminho relativo do arquivo no SharePoint
        #[arg(long)]
        set_caminho: Option<String>,

        /// Usuário do SharePoint
        #[arg(long)]
        set_usuario: Option<String>,

        /// Validade do cache da planilha, em segundos
        #[arg(long)]
        set_ttl: Option<u64>,

        /// Exibe a configuração atual
        #[arg(long)]
        show: bool,
    },
}
