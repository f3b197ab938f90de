//! Exibição do resultado no terminal
//!
//! Trilha de fases no estilo da página original: toda fase até a
//! alcançada aparece concluída, as demais pendentes, e a última fase
//! ganha a mensagem de parabéns.

use crate::busca::ResultadoBusca;
use crate::error::StatusError;
use crate::fase::Fase;
use crate::planilha::FonteRemota;

/// Linhas da trilha de progresso para a fase alcançada
pub fn trilha_progresso(fase_alcancada: Fase) -> Vec<String> {
    Fase::TODAS
        .iter()
        .map(|fase| {
            if fase.ordem() <= fase_alcancada.ordem() {
                format!("✔ {}", fase)
            } else {
                format!("○ {} (pendente)", fase)
            }
        })
        .collect()
}

pub fn exibir_resultado(resultado: &ResultadoBusca) {
    println!("✅ Candidato(a) encontrado(a): {}", resultado.nome_oficial);
    println!("   Fase atual: {}\n", resultado.fase);

    for linha in trilha_progresso(resultado.fase) {
        println!("  {}", linha);
    }

    if resultado.fase.eh_final() {
        println!("\n🎉 Parabéns, {}! Processo seletivo concluído!", resultado.nome_oficial);
    }
}

pub fn exibir_nao_encontrado(nome: &str) {
    println!(
        "ℹ Nenhum candidato com o nome '{}' foi encontrado na planilha.",
        nome.trim()
    );
}

pub fn exibir_aviso_fases(fases_sem_coluna: &[Fase]) {
    for fase in fases_sem_coluna {
        println!(
            "⚠ Aviso: A coluna '{}' não foi encontrada na planilha Excel.",
            fase.coluna()
        );
    }
}

pub fn exibir_erro_carga(erro: &StatusError, fonte: &FonteRemota) {
    println!(
        "❌ Erro ao conectar ou ler o arquivo do {}: {}",
        fonte.descricao(),
        erro
    );
    println!("   {}", fonte.dica_falha());
}
