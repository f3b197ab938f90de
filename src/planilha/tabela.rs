use std::sync::Arc;

/// Planilha carregada em memória: cabeçalhos + linhas já convertidas
/// para texto. Imutável depois de carregada.
#[derive(Debug, Clone, Default)]
pub struct Tabela {
    colunas: Vec<String>,
    linhas: Vec<Vec<String>>,
}

impl Tabela {
    pub fn new(colunas: Vec<String>, linhas: Vec<Vec<String>>) -> Self {
        Self { colunas, linhas }
    }

    /// Índice da coluna pelo cabeçalho exato. `None` = coluna ausente
    /// (não é erro: a busca pula a fase e segue).
    pub fn indice_coluna(&self, nome: &str) -> Option<usize> {
        self.colunas.iter().position(|c| c == nome)
    }

    pub fn colunas(&self) -> &[String] {
        &self.colunas
    }

    pub fn linhas(&self) -> &[Vec<String>] {
        &self.linhas
    }

    pub fn num_linhas(&self) -> usize {
        self.linhas.len()
    }

    pub fn num_colunas(&self) -> usize {
        self.colunas.len()
    }

    /// Célula pela posição; células fora da linha (linha curta) valem ""
    pub fn celula(&self, linha: usize, coluna: usize) -> &str {
        self.linhas
            .get(linha)
            .and_then(|l| l.get(coluna))
            .map(String::as_str)
            .unwrap_or("")
    }

    pub fn em_arc(self) -> Arc<Tabela> {
        Arc::new(self)
    }
}
