//! Cache da planilha em memória
//!
//! Uma única entrada `{valor, obtido_em}` protegida por mutex, com
//! expiração por TTL verificada a cada leitura. O lock nunca atravessa
//! o download: com cache frio, requisições simultâneas podem baixar em
//! duplicidade (aceitável).

use super::tabela::Tabela;
use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

struct Entrada {
    tabela: Arc<Tabela>,
    obtido_em: Instant,
}

pub struct CachePlanilha {
    ttl: Duration,
    entrada: Mutex<Option<Entrada>>,
}

impl CachePlanilha {
    pub fn new(ttl: Duration) -> Self {
        Self {
            ttl,
            entrada: Mutex::new(None),
        }
    }

    /// Tabela em cache, se ainda dentro do TTL
    pub fn obter(&self) -> Option<Arc<Tabela>> {
        let guarda = self.entrada.lock().expect("mutex do cache envenenado");
        match guarda.as_ref() {
            Some(e) if e.obtido_em.elapsed() < self.ttl => Some(Arc::clone(&e.tabela)),
            _ => None,
        }
    }

    /// Grava uma tabela recém-baixada e a devolve compartilhada
    pub fn guardar(&self, tabela: Tabela) -> Arc<Tabela> {
        let tabela = tabela.em_arc();
        let mut guarda = self.entrada.lock().expect("mutex do cache envenenado");
        *guarda = Some(Entrada {
            tabela: Arc::clone(&tabela),
            obtido_em: Instant::now(),
        });
        tabela
    }

    /// Idade da entrada atual, se houver
    pub fn idade(&self) -> Option<Duration> {
        let guarda = self.entrada.lock().expect("mutex do cache envenenado");
        guarda.as_ref().map(|e| e.obtido_em.elapsed())
    }

    pub fn limpar(&self) {
        let mut guarda = self.entrada.lock().expect("mutex do cache envenenado");
        *guarda = None;
    }
}
