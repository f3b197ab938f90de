//! Modo interativo de consulta
//!
//! Um campo de texto por vez, como na página original: nome vazio gera
//! aviso, `q` encerra. A planilha fica em cache pelo TTL configurado,
//! então consultas seguidas não baixam o arquivo de novo.

use crate::busca::buscar_status;
use crate::config::Config;
use crate::error::{Result, StatusError};
use crate::planilha::{Carregador, Tabela};
use crate::render;
use dialoguer::Input;
use indicatif::ProgressBar;
use std::sync::Arc;
use std::time::Duration;

pub async fn run_interativo(config: &Config, verbose: bool) -> Result<()> {
    let fonte = config.fonte()?;
    let carregador = Carregador::new(fonte, config.ttl());

    println!("🔎 Consulta de Status do Candidato");
    println!("---");
    println!("Digite o nome completo do candidato ([q] para sair)");
    println!("---\n");

    loop {
        let entrada: String = Input::new()
            .with_prompt("Nome do candidato")
            .allow_empty(true)
            .interact_text()
            .map_err(|e| StatusError::Prompt(e.to_string()))?;

        let nome = entrada.trim();
        match nome {
            "q" | "Q" => break,
            "" => {
                println!("⚠ Digite um nome para pesquisar.\n");
                continue;
            }
            _ => {}
        }

        let tabela = match carregar_com_spinner(&carregador).await {
            Ok(tabela) => tabela,
            Err(erro) => {
                render::exibir_erro_carga(&erro, carregador.fonte());
                println!();
                continue;
            }
        };

        if verbose {
            println!(
                "  planilha: {} linhas x {} colunas",
                tabela.num_linhas(),
                tabela.num_colunas()
            );
        }

        let busca = buscar_status(&tabela, nome);
        render::exibir_aviso_fases(&busca.fases_sem_coluna);
        match &busca.resultado {
            Some(resultado) => render::exibir_resultado(resultado),
            None => render::exibir_nao_encontrado(nome),
        }
        println!();
    }

    println!("Até logo!");
    Ok(())
}

/// Download com spinner; com cache quente o spinner nem chega a girar
async fn carregar_com_spinner(carregador: &Carregador) -> Result<Arc<Tabela>> {
    if let Some(tabela) = carregador.cache().obter() {
        return Ok(tabela);
    }

    let spinner = ProgressBar::new_spinner();
    spinner.set_message("Baixando planilha...");
    spinner.enable_steady_tick(Duration::from_millis(100));

    let resultado = carregador.obter().await;
    spinner.finish_and_clear();

    let tabela = resultado?;
    println!(
        "✔ Planilha carregada: {} linhas ({})",
        tabela.num_linhas(),
        chrono::Local::now().format("%H:%M:%S")
    );
    Ok(tabela)
}
