//! Busca do status do candidato
//!
//! Varre as fases na ordem oficial; a primeira fase cuja coluna contém
//! o nome digitado (substring, sem diferenciar maiúsculas) vence, e
//! dentro dela vale a primeira linha na ordem da planilha.

use crate::fase::Fase;
use crate::planilha::Tabela;

/// Nome oficial registrado na planilha + fase em que foi encontrado
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultadoBusca {
    pub nome_oficial: String,
    pub fase: Fase,
}

/// Saída completa de uma varredura
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Busca {
    /// `None` = candidato não encontrado (desfecho válido, não é erro)
    pub resultado: Option<ResultadoBusca>,
    /// Fases puladas porque a coluna não existe na planilha
    pub fases_sem_coluna: Vec<Fase>,
}

/// Procura `nome_digitado` nas colunas de fase da tabela.
///
/// O chamador já rejeitou consultas vazias; a comparação usa o nome
/// aparado e em minúsculas. Nomes parecidos se confundem de propósito:
/// "ana" encontra "Susana Silva" se esta vier primeiro.
pub fn buscar_status(tabela: &Tabela, nome_digitado: &str) -> Busca {
    let alvo = nome_digitado.trim().to_lowercase();
    let mut fases_sem_coluna = Vec::new();

    for fase in Fase::TODAS {
        let Some(indice) = tabela.indice_coluna(fase.coluna()) else {
            fases_sem_coluna.push(fase);
            continue;
        };

        for num_linha in 0..tabela.num_linhas() {
            let celula = tabela.celula(num_linha, indice);
            if celula.to_lowercase().contains(&alvo) {
                return Busca {
                    resultado: Some(ResultadoBusca {
                        nome_oficial: celula.to_string(),
                        fase,
                    }),
                    fases_sem_coluna,
                };
            }
        }
    }

    Busca {
        resultado: None,
        fases_sem_coluna,
    }
}
