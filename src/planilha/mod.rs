//! Carga da planilha de candidatos
//!
//! Download (Google Drive ou SharePoint) + leitura do xlsx + cache com
//! TTL. Qualquer falha de conexão, autenticação ou leitura vira "sem
//! planilha" para a consulta atual; não há retry nem dado parcial.

pub mod cache;
mod fonte;
mod tabela;

pub use cache::CachePlanilha;
pub use fonte::FonteRemota;
pub use tabela::Tabela;

use crate::error::{Result, StatusError};
use calamine::{Reader, Xlsx};
use std::io::Cursor;
use std::sync::Arc;
use std::time::Duration;

/// Converte os bytes de um xlsx na tabela em memória.
///
/// Primeira aba, primeira linha como cabeçalho, toda célula coagida
/// para texto (célula vazia vira "").
pub fn parse_xlsx(bytes: &[u8]) -> Result<Tabela> {
    let mut pasta = Xlsx::new(Cursor::new(bytes))
        .map_err(|e| StatusError::Planilha(format!("arquivo xlsx inválido: {}", e)))?;

    let nome_aba = pasta
        .sheet_names()
        .first()
        .cloned()
        .ok_or_else(|| StatusError::Planilha("a planilha não tem abas".into()))?;

    let intervalo = pasta
        .worksheet_range(&nome_aba)
        .map_err(|e| StatusError::Planilha(format!("aba '{}': {}", nome_aba, e)))?;

    let mut linhas_iter = intervalo.rows();
    let colunas: Vec<String> = linhas_iter
        .next()
        .ok_or_else(|| StatusError::Planilha(format!("aba '{}' está vazia", nome_aba)))?
        .iter()
        .map(|celula| celula.to_string())
        .collect();

    let linhas: Vec<Vec<String>> = linhas_iter
        .map(|linha| linha.iter().map(|celula| celula.to_string()).collect())
        .collect();

    Ok(Tabela::new(colunas, linhas))
}

/// Fonte + cache + cliente HTTP em um único ponto de carga
pub struct Carregador {
    fonte: FonteRemota,
    cache: CachePlanilha,
    client: reqwest::Client,
}

impl Carregador {
    pub fn new(fonte: FonteRemota, ttl: Duration) -> Self {
        Self {
            fonte,
            cache: CachePlanilha::new(ttl),
            client: reqwest::Client::new(),
        }
    }

    /// Tabela atual: do cache dentro do TTL, senão baixa e guarda
    pub async fn obter(&self) -> Result<Arc<Tabela>> {
        if let Some(tabela) = self.cache.obter() {
            return Ok(tabela);
        }

        let bytes = self.fonte.baixar(&self.client).await?;
        let tabela = parse_xlsx(&bytes)?;
        Ok(self.cache.guardar(tabela))
    }

    pub fn fonte(&self) -> &FonteRemota {
        &self.fonte
    }

    pub fn cache(&self) -> &CachePlanilha {
        &self.cache
    }
}
