//! Fases do processo seletivo
//!
//! A sequência é fixa e definida aqui, não derivada da planilha. A ordem
//! importa: toda fase até a encontrada conta como concluída.

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Fase {
    Inscricao,
    Documentacao,
    ReuniaoGestao,
    Aprovados,
    AlinhamentoInicio,
}

impl Fase {
    /// Todas as fases, na ordem oficial do processo
    pub const TODAS: [Fase; 5] = [
        Fase::Inscricao,
        Fase::Documentacao,
        Fase::ReuniaoGestao,
        Fase::Aprovados,
        Fase::AlinhamentoInicio,
    ];

    /// Cabeçalho da coluna correspondente na planilha (chave exata)
    pub fn coluna(self) -> &'static str {
        match self {
            Fase::Inscricao => "INSCRIÇÃO: REALIZADA",
            Fase::Documentacao => "1 FASE: DOCUMENTAÇÃO",
            Fase::ReuniaoGestao => "2 FASE: REUNIAO GESTÃO",
            Fase::Aprovados => "3 FASE: APROVADOS",
            Fase::AlinhamentoInicio => "4 FASE: ALINHAMENTO INICIO",
        }
    }

    /// Posição na sequência (0 = primeira fase)
    pub fn ordem(self) -> usize {
        match self {
            Fase::Inscricao => 0,
            Fase::Documentacao => 1,
            Fase::ReuniaoGestao => 2,
            Fase::Aprovados => 3,
            Fase::AlinhamentoInicio => 4,
        }
    }

    /// Última fase do processo (dispara a mensagem de parabéns)
    pub fn eh_final(self) -> bool {
        matches!(self, Fase::AlinhamentoInicio)
    }
}

impl fmt::Display for Fase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.coluna())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ordem_segue_todas() {
        for (i, fase) in Fase::TODAS.iter().enumerate() {
            assert_eq!(fase.ordem(), i);
        }
    }

    #[test]
    fn test_colunas_unicas() {
        let mut colunas: Vec<&str> = Fase::TODAS.iter().map(|f| f.coluna()).collect();
        colunas.dedup();
        assert_eq!(colunas.len(), 5);
    }

    #[test]
    fn test_apenas_ultima_eh_final() {
        assert!(Fase::AlinhamentoInicio.eh_final());
        assert!(!Fase::Inscricao.eh_final());
        assert!(!Fase::Aprovados.eh_final());
    }

    #[test]
    fn test_display_usa_cabecalho() {
        assert_eq!(Fase::Aprovados.to_string(), "3 FASE: APROVADOS");
    }
}
