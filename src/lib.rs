//! candidato-status-rust
//!
//! Consulta a fase atual de um candidato no processo seletivo a partir
//! da planilha oficial publicada no Google Drive ou no SharePoint.

pub mod busca;
pub mod cli;
pub mod config;
pub mod consulta;
pub mod error;
pub mod fase;
pub mod planilha;
pub mod render;

pub use busca::{buscar_status, Busca, ResultadoBusca};
pub use error::{Result, StatusError};
pub use fase::Fase;
pub use planilha::{Carregador, FonteRemota, Tabela};
