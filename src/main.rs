use candidato_status_rust::{busca, cli, config, consulta, error, planilha, render};
use clap::Parser;
use cli::{Cli, Commands};
use config::Config;
use error::Result;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = Config::load()?;

    match cli.command {
        Commands::Consultar { nome } => {
            println!("🔎 candidato-status - consulta de fase\n");

            let nome_limpo = nome.trim().to_string();
            if nome_limpo.is_empty() {
                println!("⚠ Digite um nome para pesquisar.");
                return Ok(());
            }

            // 1. Download (ou cache, se o processo já baixou)
            println!("[1/2] Baixando planilha...");
            let fonte = config.fonte()?;
            if cli.verbose {
                println!("  fonte: {} ({})", fonte.descricao(), fonte.url_download());
            }

            let carregador = planilha::Carregador::new(fonte, config.ttl());
            let tabela = match carregador.obter().await {
                Ok(tabela) => tabela,
                Err(erro) => {
                    render::exibir_erro_carga(&erro, carregador.fonte());
                    return Ok(());
                }
            };
            println!("✔ {} linhas na planilha\n", tabela.num_linhas());

            // 2. Varredura das fases
            println!("[2/2] Buscando nome...\n");
            let busca = busca::buscar_status(&tabela, &nome_limpo);
            render::exibir_aviso_fases(&busca.fases_sem_coluna);
            match &busca.resultado {
                Some(resultado) => render::exibir_resultado(resultado),
                None => render::exibir_nao_encontrado(&nome_limpo),
            }
        }

        Commands::Interativo => {
            consulta::run_interativo(&config, cli.verbose).await?;
        }

        Commands::Config {
            set_drive_id,
            set_site,
            set_caminho,
            set_usuario,
            set_ttl,
            show,
        } => {
            let mut config = config;
            let mut alterada = false;

            if let Some(id) = set_drive_id {
                config.drive_file_id = Some(id);
                alterada = true;
            }
            if let Some(site) = set_site {
                config.sharepoint_site_url = Some(site);
                alterada = true;
            }
            if let Some(caminho) = set_caminho {
                config.sharepoint_caminho_arquivo = Some(caminho);
                alterada = true;
            }
            if let Some(usuario) = set_usuario {
                config.sharepoint_usuario = Some(usuario);
                alterada = true;
            }
            if let Some(ttl) = set_ttl {
                config.cache_ttl_segundos = ttl;
                alterada = true;
            }

            if alterada {
                config.save()?;
                println!("✔ Configuração salva em {}", Config::config_path()?.display());
            }

            if show || !alterada {
                println!("Configuração:");
                println!(
                    "  Google Drive (file id): {}",
                    config.drive_file_id.as_deref().unwrap_or("não configurado")
                );
                println!(
                    "  SharePoint (site): {}",
                    config
                        .sharepoint_site_url
                        .as_deref()
                        .unwrap_or("não configurado")
                );
                println!(
                    "  SharePoint (arquivo): {}",
                    config
                        .sharepoint_caminho_arquivo
                        .as_deref()
                        .unwrap_or("não configurado")
                );
                println!(
                    "  SharePoint (usuário): {}",
                    config
                        .sharepoint_usuario
                        .as_deref()
                        .unwrap_or("não configurado")
                );
                println!(
                    "  Senha ({}): {}",
                    config::VAR_SENHA,
                    if std::env::var(config::VAR_SENHA).is_ok() {
                        "definida"
                    } else {
                        "não definida"
                    }
                );
                println!("  TTL do cache: {}s", config.cache_ttl_segundos);
            }
        }
    }

    Ok(())
}
